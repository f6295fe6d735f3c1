// 外部 API から取得する国名と国旗。永続化はしない
#[derive(Debug, Clone)]
pub struct Country {
    pub name: String,
    pub flag: String,
}
