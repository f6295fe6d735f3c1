use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::settings::Settings;

#[async_trait]
pub trait SettingsRepository: Send + Sync {
    // 予約ポリシーのシングルトンレコードを取得する
    async fn load(&self) -> AppResult<Settings>;
}
