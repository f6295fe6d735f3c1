use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::model::booking::{Booking, BookingStatus};

// キャビンに対してすでに押さえられている日の集合
pub type BookedDates = BTreeSet<NaiveDate>;

// 日付ピッカーで選択中の範囲。
// 暗黙の共有状態にせず、利用側ごとにこの型を明示的に受け渡し、reset で破棄する
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectedRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl SelectedRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// チェックイン中、または開始日が today 以降の予約について
// [start_date, end_date] を両端含みで日単位に展開し、集合へまとめる。
// today を引数で受け取ることで純粋な計算に保つ
pub fn booked_dates<'a>(
    bookings: impl IntoIterator<Item = &'a Booking>,
    today: NaiveDate,
) -> BookedDates {
    let mut dates = BookedDates::new();
    for booking in bookings {
        if booking.status != BookingStatus::CheckedIn && booking.start_date < today {
            continue;
        }
        let mut day = booking.start_date;
        while day <= booking.end_date {
            dates.insert(day);
            let Some(next) = day.succ_opt() else { break };
            day = next;
        }
    }
    dates
}

// 選択範囲 [from, to]（両端含む）に予約済みの日が一日でもあれば利用不可。
// 端点が未選択の間は利用可能として扱う
pub fn is_range_available(range: &SelectedRange, booked: &BookedDates) -> bool {
    let (Some(from), Some(to)) = (range.from, range.to) else {
        return true;
    };
    // 逆転した範囲は日を一つも含まないので、予約済みの日と重なりようがない
    if to < from {
        return true;
    }
    booked.range(from..=to).next().is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    use crate::model::booking::BookingCabin;
    use crate::model::id::{BookingId, CabinId, GuestId};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn booking(start: NaiveDate, end: NaiveDate, status: BookingStatus) -> Booking {
        Booking {
            id: BookingId::new(),
            guest_id: GuestId::new(),
            start_date: start,
            end_date: end,
            num_nights: end.signed_duration_since(start).num_days(),
            num_guests: 2,
            total_price: 0,
            status,
            observations: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            cabin: BookingCabin {
                cabin_id: CabinId::new(),
                name: "001".into(),
                image: "cabin-001.jpg".into(),
            },
        }
    }

    #[test]
    fn future_booking_days_are_all_booked() {
        let today = date(2024, 6, 1);
        let bookings = vec![booking(
            date(2024, 6, 10),
            date(2024, 6, 13),
            BookingStatus::Unconfirmed,
        )];

        let booked = booked_dates(&bookings, today);

        assert_eq!(booked.len(), 4);
        for day in [
            date(2024, 6, 10),
            date(2024, 6, 11),
            date(2024, 6, 12),
            date(2024, 6, 13),
        ] {
            assert!(booked.contains(&day));
        }
    }

    #[test]
    fn checked_in_booking_counts_even_when_started_in_the_past() {
        let today = date(2024, 6, 12);
        let bookings = vec![booking(
            date(2024, 6, 10),
            date(2024, 6, 14),
            BookingStatus::CheckedIn,
        )];

        let booked = booked_dates(&bookings, today);

        assert!(booked.contains(&date(2024, 6, 10)));
        assert!(booked.contains(&date(2024, 6, 14)));
    }

    #[test]
    fn past_bookings_contribute_nothing() {
        let today = date(2024, 6, 20);
        let bookings = vec![
            booking(
                date(2024, 6, 1),
                date(2024, 6, 5),
                BookingStatus::CheckedOut,
            ),
            booking(
                date(2024, 6, 10),
                date(2024, 6, 12),
                BookingStatus::Unconfirmed,
            ),
        ];

        assert!(booked_dates(&bookings, today).is_empty());
    }

    #[test]
    fn duplicate_days_collapse() {
        let today = date(2024, 6, 1);
        let bookings = vec![
            booking(
                date(2024, 6, 10),
                date(2024, 6, 12),
                BookingStatus::Unconfirmed,
            ),
            booking(
                date(2024, 6, 12),
                date(2024, 6, 14),
                BookingStatus::CheckedIn,
            ),
        ];

        assert_eq!(booked_dates(&bookings, today).len(), 5);
    }

    #[test]
    fn overlapping_range_is_not_available() {
        let booked = BookedDates::from([date(2024, 6, 10), date(2024, 6, 11)]);

        let range = SelectedRange::new(date(2024, 6, 9), date(2024, 6, 12));
        assert!(!is_range_available(&range, &booked));
    }

    #[test]
    fn range_touching_a_booked_boundary_day_is_not_available() {
        let booked = BookedDates::from([date(2024, 6, 10)]);

        // 端の一日だけ重なる場合も利用不可
        let range = SelectedRange::new(date(2024, 6, 7), date(2024, 6, 10));
        assert!(!is_range_available(&range, &booked));

        let range = SelectedRange::new(date(2024, 6, 10), date(2024, 6, 13));
        assert!(!is_range_available(&range, &booked));
    }

    #[test]
    fn free_range_is_available() {
        let booked = BookedDates::from([date(2024, 6, 10)]);

        let range = SelectedRange::new(date(2024, 6, 11), date(2024, 6, 14));
        assert!(is_range_available(&range, &booked));
    }

    #[test]
    fn zero_length_range_on_a_free_day_is_available() {
        let booked = BookedDates::from([date(2024, 6, 10)]);

        let range = SelectedRange::new(date(2024, 6, 12), date(2024, 6, 12));
        assert!(is_range_available(&range, &booked));
    }

    #[test]
    fn unset_endpoint_counts_as_available() {
        let booked = BookedDates::from([date(2024, 6, 10)]);

        let range = SelectedRange {
            from: Some(date(2024, 6, 10)),
            to: None,
        };
        assert!(is_range_available(&range, &booked));
        assert!(is_range_available(&SelectedRange::default(), &booked));
    }

    #[test]
    fn reset_clears_both_endpoints() {
        let mut range = SelectedRange::new(date(2024, 6, 1), date(2024, 6, 5));
        range.reset();
        assert_eq!(range, SelectedRange::default());
    }
}
