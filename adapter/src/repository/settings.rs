use async_trait::async_trait;
use derive_new::new;
use kernel::model::settings::Settings;
use kernel::repository::settings::SettingsRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::settings::SettingsRow, ConnectionPool};

#[derive(new)]
pub struct SettingsRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl SettingsRepository for SettingsRepositoryImpl {
    // 予約ポリシーのシングルトンレコードを取得する
    async fn load(&self) -> AppResult<Settings> {
        let row: SettingsRow = sqlx::query_as(
            r#"
                SELECT
                    min_booking_length,
                    max_booking_length,
                    max_guests_per_booking,
                    breakfast_price
                FROM settings
            "#,
        )
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(|e| AppError::RemoteStoreError {
            message: "Settings could not be loaded.",
            source: e,
        })?;

        Ok(Settings::from(row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test(migrations = "../migrations")]
    async fn test_load_seeded_settings(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = SettingsRepositoryImpl::new(ConnectionPool::new(pool));

        let settings = repo.load().await?;
        assert!(settings.min_booking_length >= 0);
        assert!(settings.max_booking_length > settings.min_booking_length);
        assert!(settings.max_guests_per_booking > 0);

        Ok(())
    }
}
