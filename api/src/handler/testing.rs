use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use kernel::model::{
    booking::{
        event::{CreateBooking, DeleteBooking, UpdateBooking},
        Booking, BookingCabin, BookingStatus,
    },
    cabin::{Cabin, CabinPrice},
    country::Country,
    guest::{event::CreateGuest, Guest},
    id::{BookingId, CabinId, GuestId},
    settings::Settings,
};
use kernel::repository::{
    booking::BookingRepository, cabin::CabinRepository, country::CountryRepository,
    guest::GuestRepository, health::HealthCheckRepository, settings::SettingsRepository,
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

// リポジトリ境界だけでハンドラを動かすためのインメモリ実装
pub struct InMemoryStore {
    pub cabins: Mutex<Vec<Cabin>>,
    pub guests: Mutex<Vec<Guest>>,
    pub bookings: Mutex<Vec<Booking>>,
    pub settings: Settings,
}

impl InMemoryStore {
    pub fn new(cabins: Vec<Cabin>, settings: Settings) -> Arc<Self> {
        Arc::new(Self {
            cabins: Mutex::new(cabins),
            guests: Mutex::new(Vec::new()),
            bookings: Mutex::new(Vec::new()),
            settings,
        })
    }
}

pub fn registry_with(store: Arc<InMemoryStore>) -> AppRegistry {
    AppRegistry::with_repositories(
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        store,
    )
}

#[async_trait]
impl HealthCheckRepository for InMemoryStore {
    async fn check_db(&self) -> bool {
        true
    }
}

#[async_trait]
impl CabinRepository for InMemoryStore {
    async fn find_all(&self) -> AppResult<Vec<Cabin>> {
        let mut cabins = self.cabins.lock().unwrap().clone();
        cabins.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(cabins)
    }

    async fn find_by_id(&self, cabin_id: CabinId) -> AppResult<Option<Cabin>> {
        Ok(self
            .cabins
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == cabin_id)
            .cloned())
    }

    async fn find_price_by_id(&self, cabin_id: CabinId) -> AppResult<Option<CabinPrice>> {
        Ok(self
            .cabins
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == cabin_id)
            .map(|c| CabinPrice {
                regular_price: c.regular_price,
                discount: c.discount,
            }))
    }
}

#[async_trait]
impl BookingRepository for InMemoryStore {
    async fn create(&self, event: CreateBooking) -> AppResult<BookingId> {
        let cabin = self
            .cabins
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == event.cabin_id)
            .cloned()
            .ok_or_else(|| AppError::EntityNotFound("cabin not found".into()))?;

        let id = BookingId::new();
        self.bookings.lock().unwrap().push(Booking {
            id,
            guest_id: event.guest_id,
            start_date: event.start_date,
            end_date: event.end_date,
            num_nights: event.num_nights,
            num_guests: event.num_guests,
            total_price: event.total_price,
            status: BookingStatus::Unconfirmed,
            observations: event.observations,
            created_at: Utc::now(),
            cabin: BookingCabin {
                cabin_id: cabin.id,
                name: cabin.name,
                image: cabin.image,
            },
        });
        Ok(id)
    }

    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Option<Booking>> {
        Ok(self
            .bookings
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.id == booking_id)
            .cloned())
    }

    async fn find_all_by_guest_id(&self, guest_id: GuestId) -> AppResult<Vec<Booking>> {
        let mut bookings: Vec<Booking> = self
            .bookings
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.guest_id == guest_id)
            .cloned()
            .collect();
        bookings.sort_by_key(|b| b.start_date);
        Ok(bookings)
    }

    async fn find_active_by_cabin_id(
        &self,
        cabin_id: CabinId,
        today: NaiveDate,
    ) -> AppResult<Vec<Booking>> {
        Ok(self
            .bookings
            .lock()
            .unwrap()
            .iter()
            .filter(|b| {
                b.cabin.cabin_id == cabin_id
                    && (b.status == BookingStatus::CheckedIn || b.start_date >= today)
            })
            .cloned()
            .collect())
    }

    async fn update(&self, event: UpdateBooking) -> AppResult<()> {
        let mut bookings = self.bookings.lock().unwrap();
        let Some(booking) = bookings.iter_mut().find(|b| b.id == event.booking_id) else {
            return Err(AppError::EntityNotFound(
                "specified booking not found".into(),
            ));
        };
        booking.num_guests = event.num_guests;
        booking.observations = event.observations;
        Ok(())
    }

    async fn delete(&self, event: DeleteBooking) -> AppResult<()> {
        let mut bookings = self.bookings.lock().unwrap();
        let before = bookings.len();
        bookings.retain(|b| b.id != event.booking_id);
        if bookings.len() == before {
            return Err(AppError::EntityNotFound(
                "specified booking not found".into(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl GuestRepository for InMemoryStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Guest>> {
        Ok(self
            .guests
            .lock()
            .unwrap()
            .iter()
            .find(|g| g.email == email)
            .cloned())
    }

    async fn create(&self, event: CreateGuest) -> AppResult<Guest> {
        let guest = Guest {
            id: GuestId::new(),
            email: event.email,
            full_name: event.full_name,
            nationality: event.nationality,
            country_flag: event.country_flag,
            national_id: event.national_id,
        };
        self.guests.lock().unwrap().push(guest.clone());
        Ok(guest)
    }
}

#[async_trait]
impl SettingsRepository for InMemoryStore {
    async fn load(&self) -> AppResult<Settings> {
        Ok(self.settings)
    }
}

#[async_trait]
impl CountryRepository for InMemoryStore {
    async fn find_all(&self) -> AppResult<Vec<Country>> {
        Ok(vec![Country {
            name: "Portugal".into(),
            flag: "pt.jpg".into(),
        }])
    }
}
