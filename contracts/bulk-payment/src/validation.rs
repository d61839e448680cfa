//! Input validation for payment legs and administrative targets.

use soroban_sdk::{Address, Env};

use crate::error::BulkPaymentError;

/// Amounts may be zero but never negative.
pub fn validate_amount(amount: i128) -> Result<(), BulkPaymentError> {
    if amount < 0 {
        return Err(BulkPaymentError::InvalidAmount);
    }
    Ok(())
}

/// Rejects the contract's own address as an owner or withdrawal target.
pub fn validate_target(env: &Env, target: &Address) -> Result<(), BulkPaymentError> {
    if *target == env.current_contract_address() {
        return Err(BulkPaymentError::InvalidAddress);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BulkPaymentContract;
    use soroban_sdk::{testutils::Address as _, Env};

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount(0).is_ok());
        assert!(validate_amount(1).is_ok());
        assert!(validate_amount(i128::MAX).is_ok());
        assert_eq!(validate_amount(-1), Err(BulkPaymentError::InvalidAmount));
    }

    #[test]
    fn test_validate_target() {
        let env = Env::default();
        let contract_id = env.register(BulkPaymentContract, ());
        let other = Address::generate(&env);

        env.as_contract(&contract_id, || {
            assert!(validate_target(&env, &other).is_ok());
            assert_eq!(
                validate_target(&env, &contract_id),
                Err(BulkPaymentError::InvalidAddress)
            );
        });
    }
}
