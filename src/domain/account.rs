use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Amount;

/// A single ledger entry: the signed movement and the balance after it.
/// Withdrawals are stored with a negative amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub amount: Amount,
    /// Running balance after this transaction was applied.
    pub balance: Amount,
}

/// An append-only transaction log with a derived balance.
///
/// The balance always equals the sum of the signed amounts in the log,
/// and each transaction stores the running sum through itself. Entries
/// are never mutated or removed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LedgerAccount {
    transactions: Vec<Transaction>,
    balance: Amount,
}

impl LedgerAccount {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Credit the account. Rejects non-positive amounts and leaves the
    /// log untouched on rejection.
    pub fn deposit(&mut self, amount: Amount, date: NaiveDate) -> Result<Transaction, LedgerError> {
        if amount <= 0 {
            return Err(LedgerError::InvalidAmount { amount });
        }

        self.balance += amount;
        let transaction = Transaction {
            date,
            amount,
            balance: self.balance,
        };
        self.transactions.push(transaction);
        Ok(transaction)
    }

    /// Debit the account. Rejects non-positive amounts and amounts above
    /// the current balance; the log is untouched on rejection.
    pub fn withdraw(
        &mut self,
        amount: Amount,
        date: NaiveDate,
    ) -> Result<Transaction, LedgerError> {
        if amount <= 0 {
            return Err(LedgerError::InvalidAmount { amount });
        }
        if amount > self.balance {
            return Err(LedgerError::InsufficientFunds {
                balance: self.balance,
                requested: amount,
            });
        }

        self.balance -= amount;
        let transaction = Transaction {
            date,
            amount: -amount,
            balance: self.balance,
        };
        self.transactions.push(transaction);
        Ok(transaction)
    }

    /// Statement rows, most recent first. Each call returns a fresh
    /// iterator over the same log; iterating never consumes entries.
    pub fn statement(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter().rev()
    }

    /// Dates appearing in the log, in order of first occurrence.
    pub fn distinct_dates(&self) -> Vec<NaiveDate> {
        let mut seen = std::collections::HashSet::new();
        self.transactions
            .iter()
            .map(|t| t.date)
            .filter(|date| seen.insert(*date))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    InvalidAmount { amount: Amount },
    InsufficientFunds { balance: Amount, requested: Amount },
}

impl std::fmt::Display for LedgerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LedgerError::InvalidAmount { amount } => {
                write!(f, "Amount must be positive, got {}", amount)
            }
            LedgerError::InsufficientFunds { balance, requested } => {
                write!(
                    f,
                    "Insufficient funds: balance {}, requested {}",
                    balance, requested
                )
            }
        }
    }
}

impl std::error::Error for LedgerError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_deposit_appends_with_running_balance() {
        let mut account = LedgerAccount::new();
        account.deposit(1000, date("2026-01-10")).unwrap();
        account.deposit(2000, date("2026-01-13")).unwrap();

        assert_eq!(account.balance(), 3000);
        let log = account.transactions();
        assert_eq!(log[0].balance, 1000);
        assert_eq!(log[1].balance, 3000);
    }

    #[test]
    fn test_withdraw_records_negative_amount() {
        let mut account = LedgerAccount::new();
        account.deposit(1000, date("2026-01-10")).unwrap();
        let t = account.withdraw(300, date("2026-01-14")).unwrap();

        assert_eq!(t.amount, -300);
        assert_eq!(t.balance, 700);
        assert_eq!(account.balance(), 700);
    }

    #[test]
    fn test_deposit_rejects_non_positive() {
        let mut account = LedgerAccount::new();
        assert_eq!(
            account.deposit(0, date("2026-01-10")),
            Err(LedgerError::InvalidAmount { amount: 0 })
        );
        assert_eq!(
            account.deposit(-5, date("2026-01-10")),
            Err(LedgerError::InvalidAmount { amount: -5 })
        );
        assert_eq!(account.balance(), 0);
        assert!(account.transactions().is_empty());
    }

    #[test]
    fn test_withdraw_rejects_overdraft() {
        let mut account = LedgerAccount::new();
        account.deposit(100, date("2026-01-10")).unwrap();

        let result = account.withdraw(101, date("2026-01-11"));
        assert_eq!(
            result,
            Err(LedgerError::InsufficientFunds {
                balance: 100,
                requested: 101
            })
        );
        assert_eq!(account.balance(), 100);
        assert_eq!(account.transactions().len(), 1);
    }

    #[test]
    fn test_statement_is_reverse_chronological_and_restartable() {
        let mut account = LedgerAccount::new();
        account.deposit(1000, date("2026-01-10")).unwrap();
        account.deposit(2000, date("2026-01-13")).unwrap();
        account.withdraw(500, date("2026-01-14")).unwrap();

        let first: Vec<Amount> = account.statement().map(|t| t.amount).collect();
        assert_eq!(first, vec![-500, 2000, 1000]);

        // A second pass sees the identical sequence
        let second: Vec<Amount> = account.statement().map(|t| t.amount).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_balance_equals_sum_of_amounts() {
        let mut account = LedgerAccount::new();
        account.deposit(1000, date("2026-01-10")).unwrap();
        account.withdraw(250, date("2026-01-11")).unwrap();
        account.deposit(40, date("2026-01-12")).unwrap();
        account.withdraw(790, date("2026-01-12")).unwrap();

        let sum: Amount = account.transactions().iter().map(|t| t.amount).sum();
        assert_eq!(account.balance(), sum);

        // Each entry stores the prefix sum through itself
        let mut running = 0;
        for t in account.transactions() {
            running += t.amount;
            assert_eq!(t.balance, running);
        }
    }

    #[test]
    fn test_distinct_dates_keeps_first_occurrence_order() {
        let mut account = LedgerAccount::new();
        account.deposit(100, date("2026-01-10")).unwrap();
        account.deposit(100, date("2026-01-12")).unwrap();
        account.withdraw(50, date("2026-01-10")).unwrap();
        account.deposit(100, date("2026-01-11")).unwrap();

        assert_eq!(
            account.distinct_dates(),
            vec![
                date("2026-01-10"),
                date("2026-01-12"),
                date("2026-01-11"),
            ]
        );
    }
}
