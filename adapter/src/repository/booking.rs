use async_trait::async_trait;
use chrono::NaiveDate;
use derive_new::new;
use kernel::model::{
    booking::{
        event::{CreateBooking, DeleteBooking, UpdateBooking},
        Booking, BookingStatus,
    },
    id::{BookingId, CabinId, GuestId},
};
use kernel::repository::booking::BookingRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::booking::BookingRow, ConnectionPool};

#[derive(new)]
pub struct BookingRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl BookingRepository for BookingRepositoryImpl {
    // 予約操作を行う
    async fn create(&self, event: CreateBooking) -> AppResult<BookingId> {
        let mut tx = self.db.begin().await?;

        // 同時に重複する予約が両方コミットされないよう、
        // トランザクション分離レベルを SERIALIZABLE に設定する
        self.set_transaction_serializable(&mut tx).await?;

        // 事前のチェックとして、以下を調べる。
        // - 指定のキャビン ID をもつキャビンが存在するか
        // - 希望日程が既存予約の日程と重なっていないか
        //
        // 上記の両方が Yes だった場合、このブロック以降の処理に進む
        {
            let cabin_row: Option<(CabinId,)> = sqlx::query_as(
                r#"
                    SELECT cabin_id
                    FROM cabins
                    WHERE cabin_id = $1
                "#,
            )
            .bind(event.cabin_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| AppError::RemoteStoreError {
                message: "Booking could not be created.",
                source: e,
            })?;

            if cabin_row.is_none() {
                return Err(AppError::EntityNotFound(format!(
                    "キャビン（{}）が見つかりませんでした。",
                    event.cabin_id
                )));
            }

            // 予約済みの日は両端を含む日単位なので、重複判定も両端含みで行う。
            // 対象はチェックイン中、または開始日が今日以降の予約のみ
            let overlap: Option<(BookingId,)> = sqlx::query_as(
                r#"
                    SELECT booking_id
                    FROM bookings
                    WHERE cabin_id = $1
                      AND (status = 'checked-in' OR start_date >= CURRENT_DATE)
                      AND start_date <= $3
                      AND $2 <= end_date
                    LIMIT 1
                "#,
            )
            .bind(event.cabin_id)
            .bind(event.start_date)
            .bind(event.end_date)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| AppError::RemoteStoreError {
                message: "Booking could not be created.",
                source: e,
            })?;

            if overlap.is_some() {
                return Err(AppError::UnprocessableEntity(format!(
                    "キャビン（{}）は指定日程にすでに予約が存在します。",
                    event.cabin_id
                )));
            }
        }

        // 予約処理を行う、すなわち bookings テーブルにレコードを追加する
        let booking_id = BookingId::new();
        let status = BookingStatus::Unconfirmed;
        let res = sqlx::query(
            r#"
                INSERT INTO bookings
                (booking_id, cabin_id, guest_id, start_date, end_date,
                 num_nights, num_guests, total_price, status, observations)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(booking_id)
        .bind(event.cabin_id)
        .bind(event.guest_id)
        .bind(event.start_date)
        .bind(event.end_date)
        .bind(event.num_nights)
        .bind(event.num_guests)
        .bind(event.total_price)
        .bind(status.as_ref())
        .bind(event.observations)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::RemoteStoreError {
            message: "Booking could not be created.",
            source: e,
        })?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No booking record has been created".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(booking_id)
    }

    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Option<Booking>> {
        let row: Option<BookingRow> = sqlx::query_as(
            r#"
                SELECT
                    b.booking_id,
                    b.cabin_id,
                    b.guest_id,
                    b.start_date,
                    b.end_date,
                    b.num_nights,
                    b.num_guests,
                    b.total_price,
                    b.status,
                    b.observations,
                    b.created_at,
                    c.name AS cabin_name,
                    c.image AS cabin_image
                FROM bookings AS b
                INNER JOIN cabins AS c ON b.cabin_id = c.cabin_id
                WHERE b.booking_id = $1
            "#,
        )
        .bind(booking_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(|e| AppError::RemoteStoreError {
            message: "Booking could not get loaded.",
            source: e,
        })?;

        row.map(Booking::try_from).transpose()
    }

    // ゲスト ID に紐づく予約一覧を開始日順で取得する
    async fn find_all_by_guest_id(&self, guest_id: GuestId) -> AppResult<Vec<Booking>> {
        let rows: Vec<BookingRow> = sqlx::query_as(
            r#"
                SELECT
                    b.booking_id,
                    b.cabin_id,
                    b.guest_id,
                    b.start_date,
                    b.end_date,
                    b.num_nights,
                    b.num_guests,
                    b.total_price,
                    b.status,
                    b.observations,
                    b.created_at,
                    c.name AS cabin_name,
                    c.image AS cabin_image
                FROM bookings AS b
                INNER JOIN cabins AS c ON b.cabin_id = c.cabin_id
                WHERE b.guest_id = $1
                ORDER BY b.start_date ASC
            "#,
        )
        .bind(guest_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(|e| AppError::RemoteStoreError {
            message: "Bookings could not get loaded.",
            source: e,
        })?;

        rows.into_iter().map(Booking::try_from).collect()
    }

    // 空き日程の計算対象となる予約を取得する
    async fn find_active_by_cabin_id(
        &self,
        cabin_id: CabinId,
        today: NaiveDate,
    ) -> AppResult<Vec<Booking>> {
        let rows: Vec<BookingRow> = sqlx::query_as(
            r#"
                SELECT
                    b.booking_id,
                    b.cabin_id,
                    b.guest_id,
                    b.start_date,
                    b.end_date,
                    b.num_nights,
                    b.num_guests,
                    b.total_price,
                    b.status,
                    b.observations,
                    b.created_at,
                    c.name AS cabin_name,
                    c.image AS cabin_image
                FROM bookings AS b
                INNER JOIN cabins AS c ON b.cabin_id = c.cabin_id
                WHERE b.cabin_id = $1
                  AND (b.status = 'checked-in' OR b.start_date >= $2)
            "#,
        )
        .bind(cabin_id)
        .bind(today)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(|e| AppError::RemoteStoreError {
            message: "Bookings could not get loaded.",
            source: e,
        })?;

        rows.into_iter().map(Booking::try_from).collect()
    }

    // 人数と備考のみ更新する。日程とキャビンは変更しない
    async fn update(&self, event: UpdateBooking) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE bookings
                SET
                    num_guests = $1,
                    observations = $2
                WHERE booking_id = $3
            "#,
        )
        .bind(event.num_guests)
        .bind(event.observations)
        .bind(event.booking_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(|e| AppError::RemoteStoreError {
            message: "Booking could not be updated.",
            source: e,
        })?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(
                "specified booking not found".into(),
            ));
        }

        Ok(())
    }

    // 予約を削除する
    async fn delete(&self, event: DeleteBooking) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                DELETE FROM bookings WHERE booking_id = $1
            "#,
        )
        .bind(event.booking_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(|e| AppError::RemoteStoreError {
            message: "Booking could not be deleted.",
            source: e,
        })?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(
                "specified booking not found".into(),
            ));
        }

        Ok(())
    }
}

impl BookingRepositoryImpl {
    // create でのトランザクションを利用するにあたり
    // トランザクション分離レベルを SERIALIZABLE にするために内部的に使うメソッド
    async fn set_transaction_serializable(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    ) -> AppResult<()> {
        sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE")
            .execute(&mut **tx)
            .await
            .map_err(|e| AppError::RemoteStoreError {
                message: "Booking could not be created.",
                source: e,
            })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use kernel::model::guest::event::CreateGuest;
    use kernel::repository::guest::GuestRepository;

    use crate::repository::guest::GuestRepositoryImpl;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    async fn fixture_cabin(pool: &sqlx::PgPool) -> anyhow::Result<CabinId> {
        let cabin_id = CabinId::new();
        sqlx::query(
            r#"
                INSERT INTO cabins (cabin_id, name, max_capacity, regular_price, discount, image)
                VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(cabin_id)
        .bind("001")
        .bind(4_i32)
        .bind(250_i64)
        .bind(25_i64)
        .bind("cabin-001.jpg")
        .execute(pool)
        .await?;
        Ok(cabin_id)
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_create_and_find_booking(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = BookingRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let guest_repo = GuestRepositoryImpl::new(ConnectionPool::new(pool.clone()));

        let cabin_id = fixture_cabin(&pool).await?;
        let guest = guest_repo
            .create(CreateGuest::new(
                "guest@example.com".into(),
                "Test Guest".into(),
                Some("Portugal".into()),
                Some("pt.jpg".into()),
                None,
            ))
            .await?;

        let start = date(2099, 6, 1);
        let end = date(2099, 6, 5);
        let booking_id = repo
            .create(CreateBooking::new(
                cabin_id,
                guest.id,
                start,
                end,
                4,
                2,
                975,
                Some("late arrival".into()),
            ))
            .await?;

        let booking = repo.find_by_id(booking_id).await?;
        assert!(booking.is_some());

        let booking = booking.unwrap();
        assert_eq!(booking.start_date, start);
        assert_eq!(booking.end_date, end);
        assert_eq!(booking.num_nights, 4);
        assert_eq!(booking.num_guests, 2);
        assert_eq!(booking.total_price, 975);
        assert_eq!(booking.status, BookingStatus::Unconfirmed);
        assert_eq!(booking.cabin.cabin_id, cabin_id);
        assert_eq!(booking.cabin.name, "001");

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_overlapping_booking_is_rejected(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = BookingRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let guest_repo = GuestRepositoryImpl::new(ConnectionPool::new(pool.clone()));

        let cabin_id = fixture_cabin(&pool).await?;
        let guest = guest_repo
            .create(CreateGuest::new(
                "guest@example.com".into(),
                "Test Guest".into(),
                None,
                None,
                None,
            ))
            .await?;

        repo.create(CreateBooking::new(
            cabin_id,
            guest.id,
            date(2099, 6, 1),
            date(2099, 6, 5),
            4,
            2,
            975,
            None,
        ))
        .await?;

        // 終了日と開始日が一日だけ重なるケースも拒否される
        let res = repo
            .create(CreateBooking::new(
                cabin_id,
                guest.id,
                date(2099, 6, 5),
                date(2099, 6, 8),
                3,
                2,
                725,
                None,
            ))
            .await;
        assert!(matches!(res, Err(AppError::UnprocessableEntity(_))));

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_update_changes_only_guest_fields(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = BookingRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let guest_repo = GuestRepositoryImpl::new(ConnectionPool::new(pool.clone()));

        let cabin_id = fixture_cabin(&pool).await?;
        let guest = guest_repo
            .create(CreateGuest::new(
                "guest@example.com".into(),
                "Test Guest".into(),
                None,
                None,
                None,
            ))
            .await?;

        let start = date(2099, 7, 1);
        let end = date(2099, 7, 4);
        let booking_id = repo
            .create(CreateBooking::new(
                cabin_id, guest.id, start, end, 3, 2, 725, None,
            ))
            .await?;

        repo.update(UpdateBooking::new(
            booking_id,
            4,
            Some("vegetarian breakfast".into()),
        ))
        .await?;

        let booking = repo.find_by_id(booking_id).await?.unwrap();
        assert_eq!(booking.num_guests, 4);
        assert_eq!(booking.observations.as_deref(), Some("vegetarian breakfast"));
        // 日程とキャビンは変わらない
        assert_eq!(booking.start_date, start);
        assert_eq!(booking.end_date, end);
        assert_eq!(booking.cabin.cabin_id, cabin_id);

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_deleted_booking_is_gone(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = BookingRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let guest_repo = GuestRepositoryImpl::new(ConnectionPool::new(pool.clone()));

        let cabin_id = fixture_cabin(&pool).await?;
        let guest = guest_repo
            .create(CreateGuest::new(
                "guest@example.com".into(),
                "Test Guest".into(),
                None,
                None,
                None,
            ))
            .await?;

        let booking_id = repo
            .create(CreateBooking::new(
                cabin_id,
                guest.id,
                date(2099, 8, 1),
                date(2099, 8, 3),
                2,
                1,
                500,
                None,
            ))
            .await?;

        repo.delete(DeleteBooking { booking_id }).await?;
        assert!(repo.find_by_id(booking_id).await?.is_none());

        // 二重削除は EntityNotFound になる
        let res = repo.delete(DeleteBooking { booking_id }).await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));

        Ok(())
    }
}
