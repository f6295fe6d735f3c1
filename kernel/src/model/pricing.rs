use derive_new::new;

use crate::model::availability::SelectedRange;

// 選択範囲と料金から導出した宿泊数と合計金額
#[derive(new, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub num_nights: i64,
    pub total_price: i64,
}

// to と from の差の日数。端点が未選択なら 0 泊
pub fn num_nights(range: &SelectedRange) -> i64 {
    match (range.from, range.to) {
        (Some(from), Some(to)) => to.signed_duration_since(from).num_days(),
        _ => 0,
    }
}

// 割引は宿泊数に関係なく合計から一度だけ引く。
// 割引が合計を上回った場合もクランプせずそのまま返す
pub fn total_price(num_nights: i64, regular_price: i64, discount: Option<i64>) -> i64 {
    num_nights * regular_price - discount.unwrap_or(0)
}

pub fn quote(range: &SelectedRange, regular_price: i64, discount: Option<i64>) -> Quote {
    let nights = num_nights(range);
    Quote::new(nights, total_price(nights, regular_price, discount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn three_nights_between_first_and_fourth() {
        let range = SelectedRange::new(date(2024, 1, 1), date(2024, 1, 4));
        assert_eq!(num_nights(&range), 3);
    }

    #[test]
    fn missing_endpoint_means_zero_nights() {
        let range = SelectedRange {
            from: Some(date(2024, 1, 1)),
            to: None,
        };
        assert_eq!(num_nights(&range), 0);
        assert_eq!(num_nights(&SelectedRange::default()), 0);
    }

    #[test]
    fn discount_is_subtracted_once_from_the_total() {
        assert_eq!(total_price(3, 100, Some(20)), 280);
    }

    #[test]
    fn missing_discount_counts_as_zero() {
        assert_eq!(total_price(3, 100, None), 300);
    }

    #[test]
    fn total_is_not_clamped_at_zero() {
        // 割引が合計を上回るケースは負値のまま返す
        assert_eq!(total_price(0, 100, Some(20)), -20);
    }

    #[test]
    fn quote_combines_nights_and_total() {
        let range = SelectedRange::new(date(2024, 1, 1), date(2024, 1, 4));
        assert_eq!(quote(&range, 100, Some(20)), Quote::new(3, 280));
    }
}
