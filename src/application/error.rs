use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::{Amount, LedgerError, RoomNumber, UserId};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Room not found: {0}")]
    RoomNotFound(RoomNumber),

    #[error("Invalid date range: checkout {checkout} must be after checkin {checkin}")]
    InvalidDateRange {
        checkin: NaiveDate,
        checkout: NaiveDate,
    },

    #[error("Room {room_number} is not available from {checkin} to {checkout}")]
    RoomUnavailable {
        room_number: RoomNumber,
        checkin: NaiveDate,
        checkout: NaiveDate,
    },

    #[error("Insufficient funds for user {user_id}: balance {balance}, required {required}")]
    InsufficientFunds {
        user_id: UserId,
        balance: Amount,
        required: Amount,
    },

    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),
}
