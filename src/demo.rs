//! Seed data for demonstrations
//!
//! Two ready-made portfolios: `sample_manager` backs the `demo` and `export`
//! commands, `initial_state` can preload the interactive menu.

use chrono::{DateTime, TimeZone, Utc};

use crate::models::{
    Account, AccountId, AccountManager, Money, Transaction, TransactionId, TransactionKind,
};

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

fn entry(
    id: u32,
    units: i64,
    kind: TransactionKind,
    when: DateTime<Utc>,
    description: &str,
) -> Transaction {
    Transaction::new(
        TransactionId::new(id),
        Money::from_units(units),
        kind,
        when,
        description,
    )
}

/// "Main" (balance 20000) and "Savings" (balance 20000)
pub fn sample_manager() -> AccountManager {
    use TransactionKind::{Expense, Income};

    let mut main = Account::new(AccountId::new(1), "Main");
    main.add_transaction(entry(1, 50000, Income, date(2024, 1, 15), "Salary for January"));
    main.add_transaction(entry(2, 25000, Expense, date(2024, 1, 16), "Apartment rent"));
    main.add_transaction(entry(3, 5000, Expense, date(2024, 1, 17), "Groceries"));

    let mut savings = Account::new(AccountId::new(2), "Savings");
    savings.add_transaction(entry(4, 20000, Income, date(2024, 1, 18), "Freelance project"));

    let mut manager = AccountManager::new();
    manager.add_account(main);
    manager.add_account(savings);
    manager
}

/// "Personal budget" (balance 650) and "Vacation fund" (balance 600)
pub fn initial_state() -> AccountManager {
    use TransactionKind::{Expense, Income};

    let mut personal = Account::new(AccountId::new(1), "Personal budget");
    personal.add_transaction(entry(1, 1000, Income, date(2023, 1, 1), "Salary"));
    personal.add_transaction(entry(2, 200, Expense, date(2023, 1, 5), "Groceries"));
    personal.add_transaction(entry(3, 150, Expense, date(2023, 1, 9), "Utilities"));

    let mut vacation = Account::new(AccountId::new(2), "Vacation fund");
    vacation.add_transaction(entry(1, 500, Income, date(2023, 4, 1), "Bonus"));
    vacation.add_transaction(entry(2, 600, Income, date(2023, 1, 1), "Debt repaid"));
    vacation.add_transaction(entry(3, 300, Expense, date(2023, 1, 5), "Plane tickets"));
    vacation.add_transaction(entry(4, 200, Expense, date(2023, 1, 9), "Hotel room"));

    let mut manager = AccountManager::new();
    manager.add_account(personal);
    manager.add_account(vacation);
    manager
}
