use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    cabin::{Cabin, CabinPrice},
    id::CabinId,
};
use kernel::repository::cabin::CabinRepository;
use shared::error::{AppError, AppResult};

use crate::database::{
    model::cabin::{CabinPriceRow, CabinRow},
    ConnectionPool,
};

#[derive(new)]
pub struct CabinRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl CabinRepository for CabinRepositoryImpl {
    // キャビンの一覧を名前順で取得する
    async fn find_all(&self) -> AppResult<Vec<Cabin>> {
        let rows: Vec<CabinRow> = sqlx::query_as(
            r#"
                SELECT
                    cabin_id,
                    name,
                    max_capacity,
                    regular_price,
                    discount,
                    image
                FROM cabins
                ORDER BY name ASC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(|e| AppError::RemoteStoreError {
            message: "Cabins could not be loaded.",
            source: e,
        })?;

        Ok(rows.into_iter().map(Cabin::from).collect())
    }

    async fn find_by_id(&self, cabin_id: CabinId) -> AppResult<Option<Cabin>> {
        let row: Option<CabinRow> = sqlx::query_as(
            r#"
                SELECT
                    cabin_id,
                    name,
                    max_capacity,
                    regular_price,
                    discount,
                    image
                FROM cabins
                WHERE cabin_id = $1
            "#,
        )
        .bind(cabin_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(|e| AppError::RemoteStoreError {
            message: "Cabin could not be loaded.",
            source: e,
        })?;

        Ok(row.map(Cabin::from))
    }

    // 料金表示に必要な列だけを取得する
    async fn find_price_by_id(&self, cabin_id: CabinId) -> AppResult<Option<CabinPrice>> {
        let row: Option<CabinPriceRow> = sqlx::query_as(
            r#"
                SELECT
                    regular_price,
                    discount
                FROM cabins
                WHERE cabin_id = $1
            "#,
        )
        .bind(cabin_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(|e| AppError::RemoteStoreError {
            message: "Cabin could not be loaded.",
            source: e,
        })?;

        Ok(row.map(CabinPrice::from))
    }
}
