use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::booking::reserve_cabin;
use crate::handler::cabin::{show_booked_dates, show_cabin, show_cabin_list, show_cabin_price};

pub fn build_cabin_routers() -> Router<AppRegistry> {
    let cabin_routers = Router::new()
        .route("/", get(show_cabin_list))
        .route("/:cabin_id", get(show_cabin))
        .route("/:cabin_id/price", get(show_cabin_price))
        .route("/:cabin_id/booked-dates", get(show_booked_dates))
        .route("/:cabin_id/bookings", post(reserve_cabin));

    Router::new().nest("/cabins", cabin_routers)
}
