use axum::{extract::State, Json};
use registry::AppRegistry;
use shared::error::AppResult;

use crate::model::settings::SettingsResponse;

pub async fn show_settings(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<SettingsResponse>> {
    registry
        .settings_repository()
        .load()
        .await
        .map(SettingsResponse::from)
        .map(Json)
}
