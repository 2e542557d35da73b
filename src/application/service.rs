use chrono::NaiveDate;

use crate::domain::{
    is_free, Amount, Booking, Room, RoomNumber, RoomType, User, UserId,
};
use crate::storage::Catalog;

use super::AppError;

/// Application service for the booking side of the house.
/// This is the primary interface for any client (CLI, API, TUI, etc.):
/// it owns the catalog and the booking log and is the only place a
/// reservation is committed.
#[derive(Debug, Default)]
pub struct BookingService {
    catalog: Catalog,
    bookings: Vec<Booking>,
}

/// Result of a confirmed reservation
pub struct ReservationResult {
    pub booking: Booking,
    pub nights: i64,
    pub total_price: Amount,
    pub balance_after: Amount,
}

impl BookingService {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================
    // Catalog operations
    // ========================

    /// Create or update a room. Updating never touches existing
    /// bookings, which carry their own price/type snapshot.
    pub fn upsert_room(
        &mut self,
        number: RoomNumber,
        room_type: RoomType,
        price_per_night: Amount,
    ) -> Room {
        *self.catalog.upsert_room(number, room_type, price_per_night)
    }

    /// Create or update a user.
    pub fn upsert_user(&mut self, id: UserId, balance: Amount) -> User {
        *self.catalog.upsert_user(id, balance)
    }

    pub fn room(&self, number: RoomNumber) -> Option<&Room> {
        self.catalog.room(number)
    }

    pub fn user(&self, id: UserId) -> Option<&User> {
        self.catalog.user(id)
    }

    // ========================
    // Reservation
    // ========================

    /// Attempt a reservation, all-or-nothing.
    ///
    /// Every check runs before any state is touched; on any rejection the
    /// catalog, balances and booking log are exactly as before the call.
    /// On success the user is debited and the booking appended in one
    /// step, with the room's current type and price snapshotted into it.
    pub fn reserve(
        &mut self,
        user_id: UserId,
        room_number: RoomNumber,
        checkin: NaiveDate,
        checkout: NaiveDate,
    ) -> Result<ReservationResult, AppError> {
        if checkout <= checkin {
            return Err(AppError::InvalidDateRange { checkin, checkout });
        }

        let user = *self
            .catalog
            .user(user_id)
            .ok_or(AppError::UserNotFound(user_id))?;
        let room = *self
            .catalog
            .room(room_number)
            .ok_or(AppError::RoomNotFound(room_number))?;

        if !is_free(room_number, checkin, checkout, &self.bookings) {
            return Err(AppError::RoomUnavailable {
                room_number,
                checkin,
                checkout,
            });
        }

        let nights = (checkout - checkin).num_days();
        let total_price = nights * room.price_per_night;

        if !user.can_afford(total_price) {
            return Err(AppError::InsufficientFunds {
                user_id,
                balance: user.balance,
                required: total_price,
            });
        }

        // Commit: debit and append together, after the last check
        let booking = Booking::new(&user, &room, checkin, checkout);
        let balance_after = {
            let user = self
                .catalog
                .user_mut(user_id)
                .ok_or(AppError::UserNotFound(user_id))?;
            user.balance -= total_price;
            user.balance
        };
        self.bookings.push(booking.clone());

        Ok(ReservationResult {
            booking,
            nights,
            total_price,
            balance_after,
        })
    }

    // ========================
    // Listings
    // ========================

    /// Bookings, most recent first.
    pub fn list_bookings(&self) -> impl Iterator<Item = &Booking> {
        self.bookings.iter().rev()
    }

    /// Bookings for one room, most recent first.
    pub fn bookings_for_room(&self, number: RoomNumber) -> impl Iterator<Item = &Booking> {
        self.list_bookings().filter(move |b| b.room_number == number)
    }

    /// Rooms, most recently added first.
    pub fn list_rooms(&self) -> impl Iterator<Item = &Room> {
        self.catalog.rooms_latest_first()
    }

    /// Users, most recently added first.
    pub fn list_users(&self) -> impl Iterator<Item = &User> {
        self.catalog.users_latest_first()
    }

    pub fn booking_count(&self) -> usize {
        self.bookings.len()
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }
}
