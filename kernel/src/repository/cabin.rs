use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    cabin::{Cabin, CabinPrice},
    id::CabinId,
};

#[async_trait]
pub trait CabinRepository: Send + Sync {
    // キャビンの一覧を名前順で取得する
    async fn find_all(&self) -> AppResult<Vec<Cabin>>;
    // cabin_id から Cabin 型のデータを渡す
    async fn find_by_id(&self, cabin_id: CabinId) -> AppResult<Option<Cabin>>;
    // 料金表示に必要な列だけを取得する
    async fn find_price_by_id(&self, cabin_id: CabinId) -> AppResult<Option<CabinPrice>>;
}
