use derive_new::new;

#[derive(new, Debug)]
pub struct CreateGuest {
    pub email: String,
    pub full_name: String,
    pub nationality: Option<String>,
    pub country_flag: Option<String>,
    pub national_id: Option<String>,
}
