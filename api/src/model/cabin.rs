use kernel::model::{
    cabin::{Cabin, CabinPrice},
    id::CabinId,
};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CabinsResponse {
    pub items: Vec<CabinResponse>,
}

impl From<Vec<Cabin>> for CabinsResponse {
    fn from(value: Vec<Cabin>) -> Self {
        Self {
            items: value.into_iter().map(CabinResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CabinResponse {
    pub id: CabinId,
    pub name: String,
    pub max_capacity: i32,
    pub regular_price: i64,
    pub discount: Option<i64>,
    pub image: String,
}

impl From<Cabin> for CabinResponse {
    fn from(value: Cabin) -> Self {
        let Cabin {
            id,
            name,
            max_capacity,
            regular_price,
            discount,
            image,
        } = value;
        Self {
            id,
            name,
            max_capacity,
            regular_price,
            discount,
            image,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CabinPriceResponse {
    pub regular_price: i64,
    pub discount: Option<i64>,
}

impl From<CabinPrice> for CabinPriceResponse {
    fn from(value: CabinPrice) -> Self {
        let CabinPrice {
            regular_price,
            discount,
        } = value;
        Self {
            regular_price,
            discount,
        }
    }
}
