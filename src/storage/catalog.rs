use std::collections::HashMap;

use crate::domain::{Amount, Room, RoomNumber, RoomType, User, UserId};

/// In-memory registry of rooms and users.
///
/// Entities are keyed by their stable identity. Insertion order is kept
/// in a companion key list so listings can run most-recent-first without
/// duplicate storage; an upsert of an existing identity overwrites the
/// entity in place and does not move it in that order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    rooms: HashMap<RoomNumber, Room>,
    room_order: Vec<RoomNumber>,
    users: HashMap<UserId, User>,
    user_order: Vec<UserId>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================
    // Rooms
    // ========================

    /// Create or overwrite the room with this number. Existing bookings
    /// are unaffected: they hold their own snapshot of type and price.
    pub fn upsert_room(
        &mut self,
        number: RoomNumber,
        room_type: RoomType,
        price_per_night: Amount,
    ) -> &Room {
        if !self.rooms.contains_key(&number) {
            self.room_order.push(number);
        }
        self.rooms
            .entry(number)
            .and_modify(|room| {
                room.room_type = room_type;
                room.price_per_night = price_per_night;
            })
            .or_insert_with(|| Room::new(number, room_type, price_per_night))
    }

    pub fn room(&self, number: RoomNumber) -> Option<&Room> {
        self.rooms.get(&number)
    }

    /// Rooms in reverse creation order (most recently added first).
    pub fn rooms_latest_first(&self) -> impl Iterator<Item = &Room> {
        self.room_order
            .iter()
            .rev()
            .filter_map(|number| self.rooms.get(number))
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    // ========================
    // Users
    // ========================

    /// Create or overwrite the user with this id.
    pub fn upsert_user(&mut self, id: UserId, balance: Amount) -> &User {
        if !self.users.contains_key(&id) {
            self.user_order.push(id);
        }
        self.users
            .entry(id)
            .and_modify(|user| user.balance = balance)
            .or_insert_with(|| User::new(id, balance))
    }

    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }

    /// Balance mutation stays inside the crate: only the reservation
    /// flow debits a user.
    pub(crate) fn user_mut(&mut self, id: UserId) -> Option<&mut User> {
        self.users.get_mut(&id)
    }

    /// Users in reverse creation order (most recently added first).
    pub fn users_latest_first(&self) -> impl Iterator<Item = &User> {
        self.user_order
            .iter()
            .rev()
            .filter_map(|id| self.users.get(id))
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }
}
