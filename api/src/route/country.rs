use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::country::show_country_list;

pub fn build_country_routers() -> Router<AppRegistry> {
    let routers = Router::new().route("/", get(show_country_list));

    Router::new().nest("/countries", routers)
}
