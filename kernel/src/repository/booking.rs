use async_trait::async_trait;
use chrono::NaiveDate;
use shared::error::AppResult;

use crate::model::{
    booking::{
        event::{CreateBooking, DeleteBooking, UpdateBooking},
        Booking,
    },
    id::{BookingId, CabinId, GuestId},
};

#[async_trait]
pub trait BookingRepository: Send + Sync {
    // 予約操作を行う
    async fn create(&self, event: CreateBooking) -> AppResult<BookingId>;
    // booking_id から Booking 型のデータを渡す
    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Option<Booking>>;
    // ゲスト ID に紐づく予約一覧を開始日順で取得する
    async fn find_all_by_guest_id(&self, guest_id: GuestId) -> AppResult<Vec<Booking>>;
    // 空き日程の計算対象となる予約を取得する
    // （チェックイン中、または開始日が today 以降のもの）
    async fn find_active_by_cabin_id(
        &self,
        cabin_id: CabinId,
        today: NaiveDate,
    ) -> AppResult<Vec<Booking>>;
    // 人数と備考のみ更新する
    async fn update(&self, event: UpdateBooking) -> AppResult<()>;
    // 予約を削除する
    async fn delete(&self, event: DeleteBooking) -> AppResult<()>;
}
