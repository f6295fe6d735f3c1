use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    guest::{event::CreateGuest, Guest},
    id::GuestId,
};
use kernel::repository::guest::GuestRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::guest::GuestRow, ConnectionPool};

#[derive(new)]
pub struct GuestRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl GuestRepository for GuestRepositoryImpl {
    // メールアドレスからゲストを検索する
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Guest>> {
        let row: Option<GuestRow> = sqlx::query_as(
            r#"
                SELECT
                    guest_id,
                    email,
                    full_name,
                    nationality,
                    country_flag,
                    national_id
                FROM guests
                WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(|e| AppError::RemoteStoreError {
            message: "Guest could not be loaded.",
            source: e,
        })?;

        Ok(row.map(Guest::from))
    }

    // ゲストを新規作成し、作成された行をそのまま返す
    async fn create(&self, event: CreateGuest) -> AppResult<Guest> {
        let guest_id = GuestId::new();
        let row: GuestRow = sqlx::query_as(
            r#"
                INSERT INTO guests
                (guest_id, email, full_name, nationality, country_flag, national_id)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING
                    guest_id,
                    email,
                    full_name,
                    nationality,
                    country_flag,
                    national_id
            "#,
        )
        .bind(guest_id)
        .bind(event.email)
        .bind(event.full_name)
        .bind(event.nationality)
        .bind(event.country_flag)
        .bind(event.national_id)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(|e| AppError::RemoteStoreError {
            message: "Guest could not be created.",
            source: e,
        })?;

        Ok(Guest::from(row))
    }
}
