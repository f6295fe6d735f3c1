use kernel::model::settings::Settings;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsResponse {
    pub min_booking_length: i64,
    pub max_booking_length: i64,
    pub max_guests_per_booking: i32,
    pub breakfast_price: i64,
}

impl From<Settings> for SettingsResponse {
    fn from(value: Settings) -> Self {
        let Settings {
            min_booking_length,
            max_booking_length,
            max_guests_per_booking,
            breakfast_price,
        } = value;
        Self {
            min_booking_length,
            max_booking_length,
            max_guests_per_booking,
            breakfast_price,
        }
    }
}
