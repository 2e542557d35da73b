use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::application::BookingService;
use crate::domain::{Booking, LedgerAccount, Room, Transaction, User};

/// Full in-memory state for JSON export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportSnapshot {
    pub version: String,
    pub exported_at: DateTime<Utc>,
    pub rooms: Vec<Room>,
    pub users: Vec<User>,
    pub bookings: Vec<Booking>,
    pub transactions: Vec<Transaction>,
}

/// Exporter for converting booking and ledger data to various formats
pub struct Exporter<'a> {
    service: &'a BookingService,
}

impl<'a> Exporter<'a> {
    pub fn new(service: &'a BookingService) -> Self {
        Self { service }
    }

    /// Export rooms to CSV format
    pub fn export_rooms_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["number", "type", "price_per_night"])?;

        let mut count = 0;
        for room in self.service.list_rooms() {
            csv_writer.write_record([
                room.number.to_string(),
                room.room_type.as_str().to_string(),
                room.price_per_night.to_string(),
            ])?;
            count += 1;
        }

        csv_writer.flush()?;
        Ok(count)
    }

    /// Export users to CSV format
    pub fn export_users_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["id", "balance"])?;

        let mut count = 0;
        for user in self.service.list_users() {
            csv_writer.write_record([user.id.to_string(), user.balance.to_string()])?;
            count += 1;
        }

        csv_writer.flush()?;
        Ok(count)
    }

    /// Export bookings to CSV format, most recent first
    pub fn export_bookings_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record([
            "id",
            "user_id",
            "room_number",
            "room_type",
            "price_per_night",
            "checkin",
            "checkout",
            "nights",
            "total_price",
        ])?;

        let mut count = 0;
        for booking in self.service.list_bookings() {
            csv_writer.write_record([
                booking.id.to_string(),
                booking.user_id.to_string(),
                booking.room_number.to_string(),
                booking.room_type.as_str().to_string(),
                booking.price_per_night.to_string(),
                booking.checkin.to_string(),
                booking.checkout.to_string(),
                booking.nights().to_string(),
                booking.total_price().to_string(),
            ])?;
            count += 1;
        }

        csv_writer.flush()?;
        Ok(count)
    }

    /// Export an account statement to CSV format, most recent first
    pub fn export_statement_csv<W: Write>(
        &self,
        account: &LedgerAccount,
        writer: W,
    ) -> Result<usize> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["date", "amount", "balance"])?;

        let mut count = 0;
        for transaction in account.statement() {
            csv_writer.write_record([
                transaction.date.to_string(),
                transaction.amount.to_string(),
                transaction.balance.to_string(),
            ])?;
            count += 1;
        }

        csv_writer.flush()?;
        Ok(count)
    }

    /// Export full state as a JSON snapshot
    pub fn export_full_json<W: Write>(
        &self,
        account: &LedgerAccount,
        mut writer: W,
    ) -> Result<ExportSnapshot> {
        let snapshot = ExportSnapshot {
            version: env!("CARGO_PKG_VERSION").to_string(),
            exported_at: Utc::now(),
            rooms: self.service.list_rooms().copied().collect(),
            users: self.service.list_users().copied().collect(),
            bookings: self.service.list_bookings().cloned().collect(),
            transactions: account.transactions().to_vec(),
        };

        let json = serde_json::to_string_pretty(&snapshot)?;
        writer.write_all(json.as_bytes())?;
        writer.flush()?;

        Ok(snapshot)
    }
}
