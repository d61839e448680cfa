//! Protocol fee arithmetic.

use crate::error::BulkPaymentError;
use crate::types::FeeRatio;

/// Splits a gross amount into the net amount delivered and the fee retained.
///
/// Multiplies before dividing so no precision is lost; the net amount is
/// rounded down, which leaves any remainder with the fee.
pub fn split(ratio: &FeeRatio, gross: i128) -> Result<(i128, i128), BulkPaymentError> {
    if gross < 0 {
        return Err(BulkPaymentError::InvalidAmount);
    }

    let net = gross
        .checked_mul(ratio.numerator)
        .ok_or(BulkPaymentError::ArithmeticOverflow)?
        / ratio.denominator;

    Ok((net, gross - net))
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNIT: i128 = 10_000_000;

    #[test]
    fn test_split_grossed_up_amounts_deliver_exact_net() {
        let ratio = FeeRatio::protocol_default();

        assert_eq!(split(&ratio, 50_437_500), Ok((5 * UNIT, 437_500)));
        assert_eq!(split(&ratio, 100_875_000), Ok((10 * UNIT, 875_000)));
        assert_eq!(split(&ratio, 151_312_500), Ok((15 * UNIT, 1_312_500)));
        assert_eq!(split(&ratio, 252_187_500), Ok((25 * UNIT, 2_187_500)));
    }

    #[test]
    fn test_split_net_plus_fee_is_gross() {
        let ratio = FeeRatio::protocol_default();
        let samples: [i128; 9] = [0, 1, 7, 99, 100_874, 100_875, 123_456_789, UNIT, i128::MAX / 200_000];

        for gross in samples {
            let (net, fee) = split(&ratio, gross).unwrap();
            assert_eq!(net + fee, gross);
            assert!(net >= 0);
            assert!(net <= gross);
        }
    }

    #[test]
    fn test_split_rounds_net_down() {
        let ratio = FeeRatio::protocol_default();
        assert_eq!(split(&ratio, 1), Ok((0, 1)));

        let ratio = FeeRatio {
            numerator: 1,
            denominator: 3,
        };
        assert_eq!(split(&ratio, 10), Ok((3, 7)));
    }

    #[test]
    fn test_split_overflow() {
        let ratio = FeeRatio::protocol_default();
        assert_eq!(
            split(&ratio, i128::MAX),
            Err(BulkPaymentError::ArithmeticOverflow)
        );
    }

    #[test]
    fn test_split_negative() {
        let ratio = FeeRatio::protocol_default();
        assert_eq!(split(&ratio, -1), Err(BulkPaymentError::InvalidAmount));
    }

    #[test]
    fn test_fee_ratio_validity() {
        assert!(FeeRatio::protocol_default().is_valid());
        assert!(!FeeRatio {
            numerator: 0,
            denominator: 10
        }
        .is_valid());
        assert!(!FeeRatio {
            numerator: 10,
            denominator: 10
        }
        .is_valid());
        assert!(!FeeRatio {
            numerator: 11,
            denominator: 10
        }
        .is_valid());
    }
}
