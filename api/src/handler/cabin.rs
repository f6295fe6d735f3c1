use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use kernel::model::{availability, id::CabinId};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::booking::BookedDatesResponse;
use crate::model::cabin::{CabinPriceResponse, CabinResponse, CabinsResponse};

pub async fn show_cabin_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<CabinsResponse>> {
    registry
        .cabin_repository()
        .find_all()
        .await
        .map(CabinsResponse::from)
        .map(Json)
}

pub async fn show_cabin(
    Path(cabin_id): Path<CabinId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<CabinResponse>> {
    registry
        .cabin_repository()
        .find_by_id(cabin_id)
        .await
        .and_then(|cabin| match cabin {
            Some(cabin) => Ok(Json(cabin.into())),
            None => Err(AppError::EntityNotFound("not found".into())),
        })
}

pub async fn show_cabin_price(
    Path(cabin_id): Path<CabinId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<CabinPriceResponse>> {
    registry
        .cabin_repository()
        .find_price_by_id(cabin_id)
        .await
        .and_then(|price| match price {
            Some(price) => Ok(Json(price.into())),
            None => Err(AppError::EntityNotFound("not found".into())),
        })
}

// キャビンの予約済みの日を、今日を基準に導出して返す
pub async fn show_booked_dates(
    Path(cabin_id): Path<CabinId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookedDatesResponse>> {
    if registry
        .cabin_repository()
        .find_by_id(cabin_id)
        .await?
        .is_none()
    {
        return Err(AppError::EntityNotFound("not found".into()));
    }

    let today = Utc::now().date_naive();
    let bookings = registry
        .booking_repository()
        .find_active_by_cabin_id(cabin_id, today)
        .await?;

    Ok(Json(BookedDatesResponse::from(availability::booked_dates(
        &bookings, today,
    ))))
}
