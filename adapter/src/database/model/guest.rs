use kernel::model::{guest::Guest, id::GuestId};

// guests テーブルの行
#[derive(sqlx::FromRow)]
pub struct GuestRow {
    pub guest_id: GuestId,
    pub email: String,
    pub full_name: String,
    pub nationality: Option<String>,
    pub country_flag: Option<String>,
    pub national_id: Option<String>,
}

impl From<GuestRow> for Guest {
    fn from(value: GuestRow) -> Self {
        let GuestRow {
            guest_id,
            email,
            full_name,
            nationality,
            country_flag,
            national_id,
        } = value;
        Guest {
            id: guest_id,
            email,
            full_name,
            nationality,
            country_flag,
            national_id,
        }
    }
}
