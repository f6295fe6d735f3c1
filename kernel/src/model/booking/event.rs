use chrono::NaiveDate;
use derive_new::new;

use crate::model::id::{BookingId, CabinId, GuestId};

#[derive(new, Debug)]
pub struct CreateBooking {
    pub cabin_id: CabinId,
    pub guest_id: GuestId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub num_nights: i64,
    pub num_guests: i32,
    pub total_price: i64,
    pub observations: Option<String>,
}

// 作成後に変更できるのは人数と備考のみ。
// 日程とキャビンは予約確定後には変更しない
#[derive(new, Debug)]
pub struct UpdateBooking {
    pub booking_id: BookingId,
    pub num_guests: i32,
    pub observations: Option<String>,
}

#[derive(Debug)]
pub struct DeleteBooking {
    pub booking_id: BookingId,
}
