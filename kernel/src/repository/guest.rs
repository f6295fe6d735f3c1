use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::guest::{event::CreateGuest, Guest};

#[async_trait]
pub trait GuestRepository: Send + Sync {
    // メールアドレスからゲストを検索する
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Guest>>;
    // ゲストを新規作成する
    async fn create(&self, event: CreateGuest) -> AppResult<Guest>;
}
