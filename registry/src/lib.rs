use std::sync::Arc;

use adapter::country::CountryRepositoryImpl;
use adapter::database::ConnectionPool;
use adapter::repository::booking::BookingRepositoryImpl;
use adapter::repository::cabin::CabinRepositoryImpl;
use adapter::repository::guest::GuestRepositoryImpl;
use adapter::repository::health::HealthCheckRepositoryImpl;
use adapter::repository::settings::SettingsRepositoryImpl;
use kernel::repository::booking::BookingRepository;
use kernel::repository::cabin::CabinRepository;
use kernel::repository::country::CountryRepository;
use kernel::repository::guest::GuestRepository;
use kernel::repository::health::HealthCheckRepository;
use kernel::repository::settings::SettingsRepository;
use shared::config::AppConfig;

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    cabin_repository: Arc<dyn CabinRepository>,
    booking_repository: Arc<dyn BookingRepository>,
    guest_repository: Arc<dyn GuestRepository>,
    settings_repository: Arc<dyn SettingsRepository>,
    country_repository: Arc<dyn CountryRepository>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool, app_config: AppConfig) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let cabin_repository = Arc::new(CabinRepositoryImpl::new(pool.clone()));
        let booking_repository = Arc::new(BookingRepositoryImpl::new(pool.clone()));
        let guest_repository = Arc::new(GuestRepositoryImpl::new(pool.clone()));
        let settings_repository = Arc::new(SettingsRepositoryImpl::new(pool.clone()));
        let country_repository = Arc::new(CountryRepositoryImpl::new(&app_config.country_api));
        Self {
            health_check_repository,
            cabin_repository,
            booking_repository,
            guest_repository,
            settings_repository,
            country_repository,
        }
    }

    // リポジトリ実装を直接差し替えて構築する（ハンドラのテストで使用する）
    pub fn with_repositories(
        health_check_repository: Arc<dyn HealthCheckRepository>,
        cabin_repository: Arc<dyn CabinRepository>,
        booking_repository: Arc<dyn BookingRepository>,
        guest_repository: Arc<dyn GuestRepository>,
        settings_repository: Arc<dyn SettingsRepository>,
        country_repository: Arc<dyn CountryRepository>,
    ) -> Self {
        Self {
            health_check_repository,
            cabin_repository,
            booking_repository,
            guest_repository,
            settings_repository,
            country_repository,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn cabin_repository(&self) -> Arc<dyn CabinRepository> {
        self.cabin_repository.clone()
    }

    pub fn booking_repository(&self) -> Arc<dyn BookingRepository> {
        self.booking_repository.clone()
    }

    pub fn guest_repository(&self) -> Arc<dyn GuestRepository> {
        self.guest_repository.clone()
    }

    pub fn settings_repository(&self) -> Arc<dyn SettingsRepository> {
        self.settings_repository.clone()
    }

    pub fn country_repository(&self) -> Arc<dyn CountryRepository> {
        self.country_repository.clone()
    }
}
