use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::country::Country;

#[async_trait]
pub trait CountryRepository: Send + Sync {
    // 国名と国旗の一覧を取得する
    async fn find_all(&self) -> AppResult<Vec<Country>>;
}
