use chrono::{DateTime, NaiveDate, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    availability::BookedDates,
    booking::{event::UpdateBooking, Booking, BookingCabin, BookingStatus},
    id::{BookingId, CabinId, GuestId},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[garde(skip)]
    pub start_date: NaiveDate,
    #[garde(skip)]
    pub end_date: NaiveDate,
    #[garde(range(min = 1))]
    pub num_guests: i32,
    #[garde(email)]
    pub email: String,
    #[garde(length(min = 1))]
    pub full_name: String,
    #[garde(skip)]
    pub nationality: Option<String>,
    #[garde(skip)]
    pub country_flag: Option<String>,
    #[garde(skip)]
    pub national_id: Option<String>,
    #[garde(skip)]
    pub observations: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingRequest {
    #[garde(range(min = 1))]
    pub num_guests: i32,
    #[garde(skip)]
    pub observations: Option<String>,
}

#[derive(new)]
pub struct UpdateBookingRequestWithId(BookingId, UpdateBookingRequest);

impl From<UpdateBookingRequestWithId> for UpdateBooking {
    fn from(value: UpdateBookingRequestWithId) -> Self {
        let UpdateBookingRequestWithId(
            booking_id,
            UpdateBookingRequest {
                num_guests,
                observations,
            },
        ) = value;
        UpdateBooking {
            booking_id,
            num_guests,
            observations,
        }
    }
}

// 作成 API のレスポンス
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedBookingResponse {
    pub booking_id: BookingId,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingsResponse {
    pub items: Vec<BookingResponse>,
}

impl From<Vec<Booking>> for BookingsResponse {
    fn from(value: Vec<Booking>) -> Self {
        Self {
            items: value.into_iter().map(BookingResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub id: BookingId,
    pub guest_id: GuestId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub num_nights: i64,
    pub num_guests: i32,
    pub total_price: i64,
    pub status: BookingStatusName,
    pub observations: Option<String>,
    pub created_at: DateTime<Utc>,
    pub cabin: BookingCabinResponse,
}

impl From<Booking> for BookingResponse {
    fn from(value: Booking) -> Self {
        let Booking {
            id,
            guest_id,
            start_date,
            end_date,
            num_nights,
            num_guests,
            total_price,
            status,
            observations,
            created_at,
            cabin,
        } = value;
        Self {
            id,
            guest_id,
            start_date,
            end_date,
            num_nights,
            num_guests,
            total_price,
            status: BookingStatusName::from(status),
            observations,
            created_at,
            cabin: cabin.into(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingCabinResponse {
    pub cabin_id: CabinId,
    pub name: String,
    pub image: String,
}

impl From<BookingCabin> for BookingCabinResponse {
    fn from(value: BookingCabin) -> Self {
        let BookingCabin {
            cabin_id,
            name,
            image,
        } = value;
        Self {
            cabin_id,
            name,
            image,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum BookingStatusName {
    Unconfirmed,
    CheckedIn,
    CheckedOut,
}

impl From<BookingStatus> for BookingStatusName {
    fn from(value: BookingStatus) -> Self {
        match value {
            BookingStatus::Unconfirmed => Self::Unconfirmed,
            BookingStatus::CheckedIn => Self::CheckedIn,
            BookingStatus::CheckedOut => Self::CheckedOut,
        }
    }
}

// 予約済みの日の一覧
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookedDatesResponse {
    pub dates: Vec<NaiveDate>,
}

impl From<BookedDates> for BookedDatesResponse {
    fn from(value: BookedDates) -> Self {
        Self {
            dates: value.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_booking_request_accepts_camel_case_fields() {
        let req: CreateBookingRequest = serde_json::from_str(
            r#"{
                "startDate": "2024-06-01",
                "endDate": "2024-06-05",
                "numGuests": 2,
                "email": "guest@example.com",
                "fullName": "Test Guest",
                "nationality": "Portugal",
                "countryFlag": "pt.jpg",
                "nationalId": "12345678",
                "observations": null
            }"#,
        )
        .unwrap();

        assert_eq!(req.num_guests, 2);
        assert_eq!(req.full_name, "Test Guest");
        assert_eq!(
            req.start_date,
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
        );
    }

    #[test]
    fn booking_status_serializes_as_kebab_case() {
        let status = BookingStatusName::from(BookingStatus::CheckedIn);
        assert_eq!(serde_json::to_string(&status).unwrap(), r#""checked-in""#);
    }
}
