use anyhow::Result;
use std::env;

pub struct AppConfig {
    pub database: DatabaseConfig,
    pub country_api: CountryApiConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let database = DatabaseConfig {
            host: env::var("DATABASE_HOST")?,
            port: env::var("DATABASE_PORT")?.parse()?,
            username: env::var("DATABASE_USERNAME")?,
            password: env::var("DATABASE_PASSWORD")?,
            database: env::var("DATABASE_NAME")?,
        };
        // 国一覧 API は未設定ならデフォルトのエンドポイントを使う
        let country_api = CountryApiConfig {
            base_url: env::var("COUNTRY_API_URL")
                .unwrap_or_else(|_| "https://restcountries.com/v2".into()),
        };
        Ok(Self {
            database,
            country_api,
        })
    }
}

pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}

pub struct CountryApiConfig {
    pub base_url: String,
}
