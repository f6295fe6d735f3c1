use kernel::model::country::Country;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountriesResponse {
    pub items: Vec<CountryResponse>,
}

impl From<Vec<Country>> for CountriesResponse {
    fn from(value: Vec<Country>) -> Self {
        Self {
            items: value.into_iter().map(CountryResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryResponse {
    pub name: String,
    pub flag: String,
}

impl From<Country> for CountryResponse {
    fn from(value: Country) -> Self {
        let Country { name, flag } = value;
        Self { name, flag }
    }
}
