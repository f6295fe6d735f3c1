use kernel::model::settings::Settings;

// settings テーブルのシングルトン行
#[derive(sqlx::FromRow)]
pub struct SettingsRow {
    pub min_booking_length: i64,
    pub max_booking_length: i64,
    pub max_guests_per_booking: i32,
    pub breakfast_price: i64,
}

impl From<SettingsRow> for Settings {
    fn from(value: SettingsRow) -> Self {
        let SettingsRow {
            min_booking_length,
            max_booking_length,
            max_guests_per_booking,
            breakfast_price,
        } = value;
        Settings {
            min_booking_length,
            max_booking_length,
            max_guests_per_booking,
            breakfast_price,
        }
    }
}
