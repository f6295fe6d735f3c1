use crate::model::id::CabinId;

// キャビンは管理者側で登録される参照データ。このクレートからは読み取りのみ
#[derive(Debug, Clone)]
pub struct Cabin {
    pub id: CabinId,
    pub name: String,
    pub max_capacity: i32,
    pub regular_price: i64,
    pub discount: Option<i64>,
    pub image: String,
}

// 料金表示に必要な列だけに絞り込んだ型
#[derive(Debug, Clone, Copy)]
pub struct CabinPrice {
    pub regular_price: i64,
    pub discount: Option<i64>,
}
