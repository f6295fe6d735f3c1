use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use kernel::model::{
    booking::{Booking, BookingCabin, BookingStatus},
    id::{BookingId, CabinId, GuestId},
};
use shared::error::AppError;

// bookings テーブルに cabins テーブルを JOIN した行。
// 一覧カードの表示に使うキャビンの名前と画像も一緒に抽出する
#[derive(sqlx::FromRow)]
pub struct BookingRow {
    pub booking_id: BookingId,
    pub cabin_id: CabinId,
    pub guest_id: GuestId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub num_nights: i64,
    pub num_guests: i32,
    pub total_price: i64,
    pub status: String,
    pub observations: Option<String>,
    pub created_at: DateTime<Utc>,
    pub cabin_name: String,
    pub cabin_image: String,
}

impl TryFrom<BookingRow> for Booking {
    type Error = AppError;

    fn try_from(value: BookingRow) -> Result<Self, Self::Error> {
        let BookingRow {
            booking_id,
            cabin_id,
            guest_id,
            start_date,
            end_date,
            num_nights,
            num_guests,
            total_price,
            status,
            observations,
            created_at,
            cabin_name,
            cabin_image,
        } = value;
        Ok(Booking {
            id: booking_id,
            guest_id,
            start_date,
            end_date,
            num_nights,
            num_guests,
            total_price,
            status: BookingStatus::from_str(&status)?,
            observations,
            created_at,
            cabin: BookingCabin {
                cabin_id,
                name: cabin_name,
                image: cabin_image,
            },
        })
    }
}
