use crate::model::id::GuestId;

pub mod event;

#[derive(Debug, Clone)]
pub struct Guest {
    pub id: GuestId,
    pub email: String,
    pub full_name: String,
    pub nationality: Option<String>,
    pub country_flag: Option<String>,
    pub national_id: Option<String>,
}
