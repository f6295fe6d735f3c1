use kernel::model::{
    cabin::{Cabin, CabinPrice},
    id::CabinId,
};

// cabins テーブルの行
#[derive(sqlx::FromRow)]
pub struct CabinRow {
    pub cabin_id: CabinId,
    pub name: String,
    pub max_capacity: i32,
    pub regular_price: i64,
    pub discount: Option<i64>,
    pub image: String,
}

impl From<CabinRow> for Cabin {
    fn from(value: CabinRow) -> Self {
        let CabinRow {
            cabin_id,
            name,
            max_capacity,
            regular_price,
            discount,
            image,
        } = value;
        Cabin {
            id: cabin_id,
            name,
            max_capacity,
            regular_price,
            discount,
            image,
        }
    }
}

// 料金表示用に列を絞り込んだ行
#[derive(sqlx::FromRow)]
pub struct CabinPriceRow {
    pub regular_price: i64,
    pub discount: Option<i64>,
}

impl From<CabinPriceRow> for CabinPrice {
    fn from(value: CabinPriceRow) -> Self {
        let CabinPriceRow {
            regular_price,
            discount,
        } = value;
        CabinPrice {
            regular_price,
            discount,
        }
    }
}
