use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Amount, Room, RoomNumber, RoomType, User, UserId};

pub type BookingId = Uuid;

/// A confirmed reservation. Bookings are immutable: corrections happen by
/// the caller booking again, never by editing history.
///
/// The room's type and nightly price are copied in at creation time, so
/// later updates to the room never alter what a past guest was charged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub user_id: UserId,
    pub room_number: RoomNumber,
    /// Room category at booking time.
    pub room_type: RoomType,
    /// Nightly price at booking time.
    pub price_per_night: Amount,
    /// First night, inclusive.
    pub checkin: NaiveDate,
    /// Departure day, exclusive. Always strictly after checkin.
    pub checkout: NaiveDate,
}

impl Booking {
    /// Create a booking for a validated stay. The date invariant is
    /// checked by the reservation flow before money moves.
    pub fn new(user: &User, room: &Room, checkin: NaiveDate, checkout: NaiveDate) -> Self {
        assert!(checkout > checkin, "Booking checkout must be after checkin");
        Self {
            id: Uuid::new_v4(),
            user_id: user.id,
            room_number: room.number,
            room_type: room.room_type,
            price_per_night: room.price_per_night,
            checkin,
            checkout,
        }
    }

    /// Number of nights in the stay, always at least 1.
    pub fn nights(&self) -> i64 {
        (self.checkout - self.checkin).num_days()
    }

    /// Total charged for the stay, from the snapshot price.
    pub fn total_price(&self) -> Amount {
        self.nights() * self.price_per_night
    }

    /// True if the candidate interval `[start, end)` overlaps this stay.
    /// Intervals are half-open, so a checkout and a checkin on the same
    /// day do not collide.
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        start < self.checkout && end > self.checkin
    }
}
