use axum::{extract::State, Json};
use registry::AppRegistry;
use shared::error::AppResult;

use crate::model::country::CountriesResponse;

pub async fn show_country_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<CountriesResponse>> {
    registry
        .country_repository()
        .find_all()
        .await
        .map(CountriesResponse::from)
        .map(Json)
}
