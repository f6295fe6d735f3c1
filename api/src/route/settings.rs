use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::settings::show_settings;

pub fn build_settings_routers() -> Router<AppRegistry> {
    let routers = Router::new().route("/", get(show_settings));

    Router::new().nest("/settings", routers)
}
