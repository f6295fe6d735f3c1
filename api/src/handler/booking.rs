use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use garde::Validate;
use kernel::model::{
    availability::{self, SelectedRange},
    booking::event::{CreateBooking, DeleteBooking},
    guest::event::CreateGuest,
    id::{BookingId, CabinId, GuestId},
    pricing,
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::booking::{
    BookingResponse, BookingsResponse, CreateBookingRequest, CreatedBookingResponse,
    UpdateBookingRequest, UpdateBookingRequestWithId,
};

// 予約フォームの送信を受け付ける。
// 検証はすべて書き込みの前に行い、失敗したらその場で終了する
pub async fn reserve_cabin(
    Path(cabin_id): Path<CabinId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateBookingRequest>,
) -> AppResult<(StatusCode, Json<CreatedBookingResponse>)> {
    req.validate(&())?;

    let cabin = registry
        .cabin_repository()
        .find_by_id(cabin_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("not found".into()))?;
    let settings = registry.settings_repository().load().await?;

    let range = SelectedRange::new(req.start_date, req.end_date);
    let nights = pricing::num_nights(&range);

    // 宿泊数のポリシー検証。最小泊数は日付ピッカー任せにせず、ここで必ず確認する
    if nights < settings.min_booking_length + 1 || nights > settings.max_booking_length {
        return Err(AppError::UnprocessableEntity(format!(
            "宿泊数（{}泊）は予約可能な範囲（{}〜{}泊）を外れています。",
            nights,
            settings.min_booking_length + 1,
            settings.max_booking_length
        )));
    }

    if req.num_guests > cabin.max_capacity {
        return Err(AppError::UnprocessableEntity(format!(
            "人数（{}名）がキャビンの定員（{}名）を超えています。",
            req.num_guests, cabin.max_capacity
        )));
    }

    // 希望日程が予約済みの日と重なっていないか確認する
    let today = Utc::now().date_naive();
    let active = registry
        .booking_repository()
        .find_active_by_cabin_id(cabin_id, today)
        .await?;
    let booked = availability::booked_dates(&active, today);
    if !availability::is_range_available(&range, &booked) {
        return Err(AppError::UnprocessableEntity(
            "指定日程にはすでに予約が入っています。".into(),
        ));
    }

    // メールアドレスに対応するゲストがいなければ作成する
    let guest = match registry
        .guest_repository()
        .find_by_email(&req.email)
        .await?
    {
        Some(guest) => guest,
        None => {
            let event = CreateGuest::new(
                req.email.clone(),
                req.full_name.clone(),
                req.nationality.clone(),
                req.country_flag.clone(),
                req.national_id.clone(),
            );
            registry.guest_repository().create(event).await?
        }
    };

    let quote = pricing::quote(&range, cabin.regular_price, cabin.discount);
    let event = CreateBooking::new(
        cabin_id,
        guest.id,
        req.start_date,
        req.end_date,
        quote.num_nights,
        req.num_guests,
        quote.total_price,
        req.observations,
    );

    let booking_id = registry.booking_repository().create(event).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedBookingResponse { booking_id }),
    ))
}

pub async fn show_booking(
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingResponse>> {
    registry
        .booking_repository()
        .find_by_id(booking_id)
        .await
        .and_then(|booking| match booking {
            Some(booking) => Ok(Json(booking.into())),
            None => Err(AppError::EntityNotFound("not found".into())),
        })
}

pub async fn show_guest_bookings(
    Path(guest_id): Path<GuestId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingsResponse>> {
    registry
        .booking_repository()
        .find_all_by_guest_id(guest_id)
        .await
        .map(BookingsResponse::from)
        .map(Json)
}

// 予約の更新。変更できるのは人数と備考のみで、日程とキャビンは変更しない
pub async fn update_booking(
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateBookingRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    let booking = registry
        .booking_repository()
        .find_by_id(booking_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("not found".into()))?;
    let cabin = registry
        .cabin_repository()
        .find_by_id(booking.cabin.cabin_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("not found".into()))?;

    if req.num_guests > cabin.max_capacity {
        return Err(AppError::UnprocessableEntity(format!(
            "人数（{}名）がキャビンの定員（{}名）を超えています。",
            req.num_guests, cabin.max_capacity
        )));
    }

    let update = UpdateBookingRequestWithId::new(booking_id, req);
    registry
        .booking_repository()
        .update(update.into())
        .await
        .map(|_| StatusCode::OK)
}

// 予約の削除。この層では取り消し不能な一方向の操作として扱う
pub async fn delete_booking(
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    let event = DeleteBooking { booking_id };
    registry
        .booking_repository()
        .delete(event)
        .await
        .map(|_| StatusCode::OK)
}
