use super::History;

use crate::Money;

pub const DEFAULT_MAX_WITHDRAWALS: usize = 3;

/// Decides whether an account may pay out a withdrawal, and what its balance becomes.
///
/// Basic accounts never go below zero. Checking accounts may go down to
/// `-overdraft_limit`, and accept at most `max_withdrawals` withdrawals, counted from
/// the account's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WithdrawalRule {
    Basic,
    Checking {
        overdraft_limit: Money,
        max_withdrawals: usize,
    },
}

impl WithdrawalRule {
    pub fn checking(overdraft_limit: Money) -> Self {
        return Self::Checking {
            overdraft_limit,
            max_withdrawals: DEFAULT_MAX_WITHDRAWALS,
        };
    }

    /// Lowest balance this rule allows
    pub fn floor(&self) -> Money {
        return match self {
            Self::Basic => Money::ZERO,
            Self::Checking {
                overdraft_limit, ..
            } => Money(-overdraft_limit.0),
        };
    }

    /// Returns the balance after withdrawing `amount`, or `None` if the withdrawal is not permitted
    pub fn evaluate(&self, balance: Money, history: &History, amount: Money) -> Option<Money> {
        if !amount.is_positive() {
            return None;
        }

        match self {
            Self::Basic => {
                if amount > balance {
                    return None;
                }
            }
            Self::Checking {
                overdraft_limit,
                max_withdrawals,
            } => {
                if history.withdrawal_count() >= *max_withdrawals {
                    return None;
                }

                let available = balance.checked_add(overdraft_limit).ok()?;
                if amount > available {
                    return None;
                }
            }
        }

        return balance.checked_sub(&amount).ok();
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{Transaction, TransactionKind};

    use super::*;

    const OVERDRAFT: Money = Money(5000);

    fn build_history(withdrawals: usize) -> History {
        let mut history = History::new();

        for _ in 0..withdrawals {
            let tx = Transaction::new(TransactionKind::Withdrawal, Money(100)).unwrap();
            history.append(&tx, Money(0));
        }

        let tx = Transaction::new(TransactionKind::Deposit, Money(100)).unwrap();
        history.append(&tx, Money(0));

        history
    }

    #[test]
    fn basic() {
        let rule = WithdrawalRule::Basic;
        let history = History::new();

        assert_eq!(rule.evaluate(Money(10000), &history, Money(4000)), Some(Money(6000)));
        assert_eq!(rule.evaluate(Money(10000), &history, Money(10000)), Some(Money(0)));
        assert_eq!(rule.evaluate(Money(10000), &history, Money(10001)), None);
        assert_eq!(rule.evaluate(Money(0), &history, Money(1)), None);
        assert_eq!(rule.evaluate(Money(10000), &history, Money(0)), None);
        assert_eq!(rule.evaluate(Money(10000), &history, Money(-100)), None);
        assert_eq!(rule.floor(), Money(0));
    }

    #[test]
    fn basic_ignores_withdrawal_count() {
        let rule = WithdrawalRule::Basic;
        let history = build_history(10);

        assert_eq!(rule.evaluate(Money(100), &history, Money(100)), Some(Money(0)));
    }

    #[test]
    fn checking() {
        let rule = WithdrawalRule::checking(OVERDRAFT);
        let history = History::new();

        assert_eq!(rule.evaluate(Money(10000), &history, Money(12000)), Some(Money(-2000)));
        assert_eq!(rule.evaluate(Money(10000), &history, Money(15000)), Some(Money(-5000)));
        assert_eq!(rule.evaluate(Money(10000), &history, Money(15001)), None);
        assert_eq!(rule.evaluate(Money(-2000), &history, Money(14000)), None);
        assert_eq!(rule.evaluate(Money(-2000), &history, Money(3000)), Some(Money(-5000)));
        assert_eq!(rule.evaluate(Money(10000), &history, Money(0)), None);
        assert_eq!(rule.floor(), Money(-5000));
    }

    #[test]
    fn checking_limits_by_count() {
        let rule = WithdrawalRule::Checking {
            overdraft_limit: OVERDRAFT,
            max_withdrawals: 3,
        };

        assert_eq!(rule.evaluate(Money(10000), &build_history(2), Money(1)), Some(Money(9999)));
        assert_eq!(rule.evaluate(Money(10000), &build_history(3), Money(1)), None);
        assert_eq!(rule.evaluate(Money(10000), &build_history(4), Money(1)), None);
    }

    #[test]
    fn checking_with_zero_withdrawals_allowed() {
        let rule = WithdrawalRule::Checking {
            overdraft_limit: OVERDRAFT,
            max_withdrawals: 0,
        };

        assert_eq!(rule.evaluate(Money(10000), &History::new(), Money(1)), None);
    }
}
