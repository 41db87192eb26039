//! Greedy deduction planning for withdrawal settlement.
//!
//! The plan is computed over a snapshot of the user's RECEIVE wallets and
//! applied by [`crate::db::WithdrawalRepository`] inside one serializable
//! database transaction. Largest balances are drained first, which keeps
//! the number of touched wallets (and ledger rows) minimal.

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::{ AppError, Result };

/// Snapshot of a wallet eligible for deduction.
#[derive(Debug, Clone)]
pub struct WalletBalance {
    pub wallet_id: Uuid,
    pub balance: Decimal,
    pub address: Option<String>,
}

/// One planned debit against one wallet.
#[derive(Debug, Clone, PartialEq)]
pub struct Deduction {
    pub wallet_id: Uuid,
    pub amount: Decimal,
    pub balance_after: Decimal,
    pub from_address: Option<String>,
}

/// Compute the deductions covering `amount` from `wallets`, largest
/// balance first. Fails without partial results when the wallets cannot
/// cover the amount, so a caller applying the plan never leaves a
/// half-settled state.
pub fn plan_deductions(amount: Decimal, wallets: &[WalletBalance]) -> Result<Vec<Deduction>> {
    if amount <= Decimal::ZERO {
        return Err(AppError::InvalidInput("Withdrawal amount must be greater than 0".to_string()));
    }

    let mut ordered: Vec<&WalletBalance> = wallets
        .iter()
        .filter(|w| w.balance > Decimal::ZERO)
        .collect();
    ordered.sort_by(|a, b| b.balance.cmp(&a.balance));

    let mut remaining = amount;
    let mut plan = Vec::new();

    for wallet in ordered {
        if remaining <= Decimal::ZERO {
            break;
        }

        let deduction = remaining.min(wallet.balance);
        plan.push(Deduction {
            wallet_id: wallet.wallet_id,
            amount: deduction,
            balance_after: wallet.balance - deduction,
            from_address: wallet.address.clone(),
        });

        remaining -= deduction;
    }

    if remaining > Decimal::ZERO {
        return Err(AppError::InsufficientBalance);
    }

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn wallet(balance: Decimal) -> WalletBalance {
        WalletBalance {
            wallet_id: Uuid::new_v4(),
            balance,
            address: Some(format!("addr-{}", balance)),
        }
    }

    #[test]
    fn test_greedy_order_and_amounts() {
        // Balances [50, 30, 20], withdraw 60: 50 from the largest,
        // then 10 from the next. Third wallet untouched.
        let w1 = wallet(dec!(50));
        let w2 = wallet(dec!(30));
        let w3 = wallet(dec!(20));
        let wallets = vec![w3.clone(), w1.clone(), w2.clone()];

        let plan = plan_deductions(dec!(60), &wallets).unwrap();

        assert_eq!(plan.len(), 2);
        assert_eq!(plan[0].wallet_id, w1.wallet_id);
        assert_eq!(plan[0].amount, dec!(50));
        assert_eq!(plan[0].balance_after, dec!(0));
        assert_eq!(plan[1].wallet_id, w2.wallet_id);
        assert_eq!(plan[1].amount, dec!(10));
        assert_eq!(plan[1].balance_after, dec!(20));
    }

    #[test]
    fn test_deductions_cover_exactly_the_amount() {
        let wallets = vec![wallet(dec!(7.5)), wallet(dec!(2.25)), wallet(dec!(100))];
        let plan = plan_deductions(dec!(42.75), &wallets).unwrap();

        let total: Decimal = plan.iter().map(|d| d.amount).sum();
        assert_eq!(total, dec!(42.75));
        assert!(plan.iter().all(|d| d.balance_after >= Decimal::ZERO));
    }

    #[test]
    fn test_exact_cover_drains_all_wallets() {
        let wallets = vec![wallet(dec!(50)), wallet(dec!(30)), wallet(dec!(20))];
        let plan = plan_deductions(dec!(100), &wallets).unwrap();

        assert_eq!(plan.len(), 3);
        assert!(plan.iter().all(|d| d.balance_after == Decimal::ZERO));
    }

    #[test]
    fn test_insufficient_balance_fails_without_partial_plan() {
        let wallets = vec![wallet(dec!(50)), wallet(dec!(30))];
        let err = plan_deductions(dec!(100), &wallets).unwrap_err();

        assert!(matches!(err, AppError::InsufficientBalance));
    }

    #[test]
    fn test_zero_and_negative_amounts_rejected() {
        let wallets = vec![wallet(dec!(50))];

        assert!(matches!(
            plan_deductions(Decimal::ZERO, &wallets),
            Err(AppError::InvalidInput(_))
        ));
        assert!(matches!(
            plan_deductions(dec!(-5), &wallets),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_zero_balance_wallets_are_skipped() {
        let empty = wallet(Decimal::ZERO);
        let funded = wallet(dec!(10));
        let plan = plan_deductions(dec!(10), &[empty.clone(), funded.clone()]).unwrap();

        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].wallet_id, funded.wallet_id);
    }
}
