use chrono::NaiveDate;
use locanda::domain::{Amount, LedgerAccount, LedgerError};

/// Helper to parse a date string into a NaiveDate
fn parse_date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

#[test]
fn test_statement_scenario() {
    let mut account = LedgerAccount::new();
    account.deposit(1000, parse_date("2012-01-10")).unwrap();
    account.deposit(2000, parse_date("2012-01-13")).unwrap();
    account.withdraw(500, parse_date("2012-01-14")).unwrap();

    let rows: Vec<(NaiveDate, Amount, Amount)> = account
        .statement()
        .map(|t| (t.date, t.amount, t.balance))
        .collect();

    assert_eq!(
        rows,
        vec![
            (parse_date("2012-01-14"), -500, 2500),
            (parse_date("2012-01-13"), 2000, 3000),
            (parse_date("2012-01-10"), 1000, 1000),
        ]
    );
}

#[test]
fn test_balance_is_prefix_sum_after_mixed_replay() {
    let mut account = LedgerAccount::new();
    let ops: [(bool, Amount, &str); 6] = [
        (true, 1000, "2026-01-05"),
        (false, 200, "2026-01-06"),
        (true, 50, "2026-01-06"),
        (false, 850, "2026-01-07"),
        (true, 3000, "2026-01-08"),
        (false, 1, "2026-01-09"),
    ];

    for (is_deposit, amount, date) in ops {
        if is_deposit {
            account.deposit(amount, parse_date(date)).unwrap();
        } else {
            account.withdraw(amount, parse_date(date)).unwrap();
        }
    }

    let sum: Amount = account.transactions().iter().map(|t| t.amount).sum();
    assert_eq!(account.balance(), sum);
    assert_eq!(account.balance(), 2999);

    let mut running = 0;
    for t in account.transactions() {
        running += t.amount;
        assert_eq!(t.balance, running, "stored balance must be the prefix sum");
    }
}

#[test]
fn test_rejected_operations_leave_no_trace() {
    let mut account = LedgerAccount::new();
    account.deposit(500, parse_date("2026-01-05")).unwrap();
    let log_before = account.transactions().to_vec();

    assert!(matches!(
        account.deposit(0, parse_date("2026-01-06")),
        Err(LedgerError::InvalidAmount { .. })
    ));
    assert!(matches!(
        account.deposit(-10, parse_date("2026-01-06")),
        Err(LedgerError::InvalidAmount { .. })
    ));
    assert!(matches!(
        account.withdraw(-10, parse_date("2026-01-06")),
        Err(LedgerError::InvalidAmount { .. })
    ));
    assert!(matches!(
        account.withdraw(501, parse_date("2026-01-06")),
        Err(LedgerError::InsufficientFunds { .. })
    ));

    assert_eq!(account.balance(), 500);
    assert_eq!(account.transactions(), log_before.as_slice());
}

#[test]
fn test_withdraw_to_exactly_zero_is_allowed() {
    let mut account = LedgerAccount::new();
    account.deposit(500, parse_date("2026-01-05")).unwrap();
    account.withdraw(500, parse_date("2026-01-06")).unwrap();

    assert_eq!(account.balance(), 0);
    assert_eq!(account.transactions().len(), 2);
}

#[test]
fn test_statement_restartable_read() {
    let mut account = LedgerAccount::new();
    account.deposit(100, parse_date("2026-01-05")).unwrap();
    account.deposit(200, parse_date("2026-01-06")).unwrap();

    let first: Vec<Amount> = account.statement().map(|t| t.amount).collect();
    let second: Vec<Amount> = account.statement().map(|t| t.amount).collect();

    assert_eq!(first, vec![200, 100]);
    assert_eq!(first, second, "statement is a pure read");
    assert_eq!(account.transactions().len(), 2);
}

#[test]
fn test_distinct_dates_for_daily_grouping() {
    let mut account = LedgerAccount::new();
    account.deposit(100, parse_date("2026-01-07")).unwrap();
    account.deposit(100, parse_date("2026-01-05")).unwrap();
    account.withdraw(20, parse_date("2026-01-07")).unwrap();
    account.deposit(100, parse_date("2026-01-06")).unwrap();
    account.withdraw(20, parse_date("2026-01-05")).unwrap();

    assert_eq!(
        account.distinct_dates(),
        vec![
            parse_date("2026-01-07"),
            parse_date("2026-01-05"),
            parse_date("2026-01-06"),
        ]
    );
}
