use chrono::{DateTime, NaiveDate, Utc};
use strum::{AsRefStr, EnumString};

use crate::model::id::{BookingId, CabinId, GuestId};

pub mod event;

#[derive(Debug, Clone)]
pub struct Booking {
    pub id: BookingId,
    pub guest_id: GuestId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub num_nights: i64,
    pub num_guests: i32,
    pub total_price: i64,
    pub status: BookingStatus,
    pub observations: Option<String>,
    pub created_at: DateTime<Utc>,
    pub cabin: BookingCabin,
}

// 予約一覧カードの表示に使うキャビン側の情報
#[derive(Debug, Clone)]
pub struct BookingCabin {
    pub cabin_id: CabinId,
    pub name: String,
    pub image: String,
}

// 予約のステータス。チェックイン・チェックアウトへの遷移はスタッフ側の
// 操作で行われるもので、このクレートは作成時の unconfirmed 以外を書き込まない
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, AsRefStr, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum BookingStatus {
    #[default]
    Unconfirmed,
    CheckedIn,
    CheckedOut,
}
