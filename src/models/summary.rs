//! Income / expenses / balance triple

use serde::Serialize;

use super::money::Money;

/// Totals at the moment they were computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Summary {
    pub income: Money,
    pub expenses: Money,
    pub balance: Money,
}

impl Summary {
    /// Build a summary from income and expenses; balance is their difference
    pub fn new(income: Money, expenses: Money) -> Self {
        Self {
            income,
            expenses,
            balance: income - expenses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balance_is_difference() {
        let summary = Summary::new(Money::from_units(500), Money::from_units(800));
        assert_eq!(summary.balance, Money::from_units(-300));
    }

    #[test]
    fn test_default_is_zero() {
        let summary = Summary::default();
        assert!(summary.income.is_zero());
        assert!(summary.expenses.is_zero());
        assert!(summary.balance.is_zero());
    }
}
