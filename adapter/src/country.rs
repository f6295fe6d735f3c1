use async_trait::async_trait;
use kernel::model::country::Country;
use kernel::repository::country::CountryRepository;
use serde::Deserialize;
use shared::{
    config::CountryApiConfig,
    error::{AppError, AppResult},
};

// 外部 API のレスポンス行
#[derive(Deserialize)]
struct CountryRow {
    name: String,
    flag: String,
}

pub struct CountryRepositoryImpl {
    client: reqwest::Client,
    base_url: String,
}

impl CountryRepositoryImpl {
    pub fn new(cfg: &CountryApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: cfg.base_url.clone(),
        }
    }
}

#[async_trait]
impl CountryRepository for CountryRepositoryImpl {
    // 国名と国旗の一覧を取得する。認証は不要
    async fn find_all(&self) -> AppResult<Vec<Country>> {
        let url = format!("{}/all?fields=name,flag", self.base_url);
        let rows: Vec<CountryRow> = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(|res| res.error_for_status())
            .map_err(|e| AppError::ExternalServiceError {
                message: "Could not fetch countries.",
                source: e,
            })?
            .json()
            .await
            .map_err(|e| AppError::ExternalServiceError {
                message: "Could not fetch countries.",
                source: e,
            })?;

        Ok(rows
            .into_iter()
            .map(|CountryRow { name, flag }| Country { name, flag })
            .collect())
    }
}
