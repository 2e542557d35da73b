use serde::{Deserialize, Serialize};

use super::Amount;

/// Rooms are identified by their number, assigned by the front desk.
pub type RoomNumber = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    /// Base category
    Standard,
    /// Junior suite
    Junior,
    /// Full suite
    Suite,
}

impl RoomType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomType::Standard => "standard",
            RoomType::Junior => "junior",
            RoomType::Suite => "suite",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "standard" => Some(RoomType::Standard),
            "junior" => Some(RoomType::Junior),
            "suite" => Some(RoomType::Suite),
            _ => None,
        }
    }
}

impl std::fmt::Display for RoomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A room in the hotel inventory. The number is the stable identity;
/// type and price are overwritten in place on upsert. Historical bookings
/// are unaffected by such updates because they carry their own snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub number: RoomNumber,
    pub room_type: RoomType,
    /// Price per night in whole units. Not validated here: zero or
    /// negative pricing is accepted as supplied by the caller.
    pub price_per_night: Amount,
}

impl Room {
    pub fn new(number: RoomNumber, room_type: RoomType, price_per_night: Amount) -> Self {
        Self {
            number,
            room_type,
            price_per_night,
        }
    }
}
