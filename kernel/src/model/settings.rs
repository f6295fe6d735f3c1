// 予約ポリシーを保持するシングルトンレコード。予約フローからは読み取りのみ
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    pub min_booking_length: i64,
    pub max_booking_length: i64,
    pub max_guests_per_booking: i32,
    pub breakfast_price: i64,
}
