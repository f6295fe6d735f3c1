use super::{
    booking::build_booking_routers, cabin::build_cabin_routers, country::build_country_routers,
    health::build_health_check_routers, settings::build_settings_routers,
};
use axum::Router;
use registry::AppRegistry;

pub fn routes() -> Router<AppRegistry> {
    let router = Router::new()
        .merge(build_health_check_routers())
        .merge(build_cabin_routers())
        .merge(build_booking_routers())
        .merge(build_settings_routers())
        .merge(build_country_routers());
    Router::new().nest("/api/v1", router)
}
