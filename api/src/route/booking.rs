use axum::{
    routing::{delete, get, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::booking::{
    delete_booking, show_booking, show_guest_bookings, update_booking,
};

pub fn build_booking_routers() -> Router<AppRegistry> {
    let booking_routers = Router::new()
        .route("/:booking_id", get(show_booking))
        .route("/:booking_id", put(update_booking))
        .route("/:booking_id", delete(delete_booking));

    let guest_routers = Router::new().route("/:guest_id/bookings", get(show_guest_bookings));

    Router::new()
        .nest("/bookings", booking_routers)
        .nest("/guests", guest_routers)
}
