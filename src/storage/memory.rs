use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex as TokioMutex;
use uuid::Uuid;

use crate::models::{Booking, BookingStatus, Destination, Feedback, Hotel, TripBooking, User};
use crate::storage::{Result, Storage, StorageError};

// In-memory storage data structure (single mutex keeps multi-map updates atomic)
struct StorageData {
    users: HashMap<Uuid, User>,                 // user_id -> user
    trip_bookings: HashMap<Uuid, TripBooking>,  // booking_id -> booking
    bookings: HashMap<Uuid, Booking>,           // booking_id -> booking
    destinations: HashMap<Uuid, Destination>,   // destination_id -> destination
    hotels: HashMap<Uuid, Hotel>,               // hotel_id -> hotel
}

impl StorageData {
    fn new() -> Self {
        Self {
            users: HashMap::new(),
            trip_bookings: HashMap::new(),
            bookings: HashMap::new(),
            destinations: HashMap::new(),
            hotels: HashMap::new(),
        }
    }
}

/// In-memory storage implementation (also the integration-test backend)
pub struct MemoryStorage {
    data: TokioMutex<StorageData>,
}

impl MemoryStorage {
    /// Create a new memory storage instance
    pub fn new() -> Self {
        Self {
            data: TokioMutex::new(StorageData::new()),
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn health_check(&self) -> Result<bool> {
        Ok(true)
    }

    /// Insert a new user; the duplicate-email check and the insert happen
    /// under one lock guard, so concurrent registrations cannot both win.
    async fn create_user(&self, user: &User) -> Result<()> {
        let mut data = self.data.lock().await;

        let duplicate = data
            .users
            .values()
            .any(|u| u.email.to_lowercase() == user.email.to_lowercase());
        if duplicate {
            return Err(StorageError::Conflict(format!(
                "Email already registered: {}",
                user.email
            )));
        }

        data.users.insert(user.id, user.clone());
        Ok(())
    }

    async fn get_user_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let data = self.data.lock().await;
        Ok(data.users.get(&id).cloned())
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let data = self.data.lock().await;

        for user in data.users.values() {
            if user.email.to_lowercase() == email.to_lowercase() {
                return Ok(Some(user.clone()));
            }
        }

        Ok(None)
    }

    async fn update_user(&self, user: &User) -> Result<()> {
        let mut data = self.data.lock().await;
        if !data.users.contains_key(&user.id) {
            return Err(StorageError::NotFound(format!("User not found: {}", user.id)));
        }
        data.users.insert(user.id, user.clone());
        Ok(())
    }

    async fn delete_user(&self, id: Uuid) -> Result<()> {
        let mut data = self.data.lock().await;
        data.users.remove(&id);
        Ok(())
    }

    async fn create_trip_booking(&self, booking: &TripBooking) -> Result<()> {
        let mut data = self.data.lock().await;
        data.trip_bookings.insert(booking.id, booking.clone());
        Ok(())
    }

    async fn get_trip_booking(&self, id: Uuid) -> Result<Option<TripBooking>> {
        let data = self.data.lock().await;
        Ok(data.trip_bookings.get(&id).cloned())
    }

    async fn list_trip_bookings(
        &self,
        user_id: Uuid,
        status: Option<BookingStatus>,
    ) -> Result<Vec<TripBooking>> {
        let data = self.data.lock().await;

        let mut bookings: Vec<TripBooking> = data
            .trip_bookings
            .values()
            .filter(|b| b.user_id == user_id)
            .filter(|b| status.map_or(true, |s| b.status == s))
            .cloned()
            .collect();
        bookings.sort_by_key(|b| b.created_at);

        Ok(bookings)
    }

    async fn set_trip_feedback(&self, id: Uuid, feedback: Feedback) -> Result<()> {
        let mut data = self.data.lock().await;

        match data.trip_bookings.get_mut(&id) {
            Some(booking) => {
                booking.feedback = Some(feedback);
                Ok(())
            }
            None => Err(StorageError::NotFound(format!(
                "Trip booking not found: {}",
                id
            ))),
        }
    }

    async fn create_booking(&self, booking: &Booking) -> Result<()> {
        let mut data = self.data.lock().await;
        data.bookings.insert(booking.id, booking.clone());
        Ok(())
    }

    async fn list_bookings(&self, user_id: Uuid) -> Result<Vec<Booking>> {
        let data = self.data.lock().await;

        let mut bookings: Vec<Booking> = data
            .bookings
            .values()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect();
        bookings.sort_by_key(|b| b.created_at);

        Ok(bookings)
    }

    async fn create_destination(&self, destination: &Destination) -> Result<()> {
        let mut data = self.data.lock().await;
        data.destinations.insert(destination.id, destination.clone());
        Ok(())
    }

    async fn get_destination(&self, id: Uuid) -> Result<Option<Destination>> {
        let data = self.data.lock().await;
        Ok(data.destinations.get(&id).cloned())
    }

    async fn list_destinations(&self) -> Result<Vec<Destination>> {
        let data = self.data.lock().await;
        let mut destinations: Vec<Destination> = data.destinations.values().cloned().collect();
        destinations.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(destinations)
    }

    async fn create_hotel(&self, hotel: &Hotel) -> Result<()> {
        let mut data = self.data.lock().await;
        data.hotels.insert(hotel.id, hotel.clone());
        Ok(())
    }

    async fn get_hotel(&self, id: Uuid) -> Result<Option<Hotel>> {
        let data = self.data.lock().await;
        Ok(data.hotels.get(&id).cloned())
    }

    async fn list_hotels(&self) -> Result<Vec<Hotel>> {
        let data = self.data.lock().await;
        let mut hotels: Vec<Hotel> = data.hotels.values().cloned().collect();
        hotels.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(hotels)
    }
}
