use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{Amount, LedgerAccount, RoomNumber};

use super::BookingService;

/// One rendered statement line: the signed movement and the balance
/// after it. Rows are produced most recent first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatementRow {
    pub date: NaiveDate,
    pub amount: Amount,
    pub balance: Amount,
}

/// Per-day activity on a ledger account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub deposits: Amount,
    pub withdrawals: Amount,
    pub closing_balance: Amount,
    pub count: i64,
}

/// Booking volume and revenue for a room, computed from the snapshot
/// prices so later room updates never distort history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomActivity {
    pub room_number: RoomNumber,
    pub bookings: i64,
    pub nights: i64,
    pub revenue: Amount,
}

/// Statement rows for an account, most recent first.
pub fn statement_rows(account: &LedgerAccount) -> Vec<StatementRow> {
    account
        .statement()
        .map(|t| StatementRow {
            date: t.date,
            amount: t.amount,
            balance: t.balance,
        })
        .collect()
}

/// Group an account's activity by day, in order of first activity.
pub fn daily_summaries(account: &LedgerAccount) -> Vec<DailySummary> {
    account
        .distinct_dates()
        .into_iter()
        .map(|date| {
            let mut deposits = 0;
            let mut withdrawals = 0;
            let mut closing_balance = 0;
            let mut count = 0;

            for t in account.transactions().iter().filter(|t| t.date == date) {
                if t.amount >= 0 {
                    deposits += t.amount;
                } else {
                    withdrawals += -t.amount;
                }
                closing_balance = t.balance;
                count += 1;
            }

            DailySummary {
                date,
                deposits,
                withdrawals,
                closing_balance,
                count,
            }
        })
        .collect()
}

/// Per-room booking volume and revenue, most recently added room first.
pub fn room_activity(service: &BookingService) -> Vec<RoomActivity> {
    service
        .list_rooms()
        .map(|room| {
            let mut bookings = 0;
            let mut nights = 0;
            let mut revenue = 0;

            for b in service.bookings_for_room(room.number) {
                bookings += 1;
                nights += b.nights();
                revenue += b.total_price();
            }

            RoomActivity {
                room_number: room.number,
                bookings,
                nights,
                revenue,
            }
        })
        .collect()
}
