//! Input boundary validation
//!
//! The engine's documented precondition is non-negative, bounded
//! quantities. Violations are operator/UI bugs and are rejected here
//! before any line is touched; nothing inside the engine itself can
//! fail.

use rust_decimal::Decimal;

use crate::error::SettleError;

/// Maximum accepted raw count per line
pub const MAX_QUANTITY: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Maximum accepted cash hand-back per report
pub const MAX_CASH_RETURNED: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Validate a raw quantity (issued or returned count)
pub fn validate_quantity(field: &'static str, value: Decimal) -> Result<(), SettleError> {
    if value < Decimal::ZERO {
        return Err(SettleError::NegativeAmount { field, value });
    }
    if value > MAX_QUANTITY {
        return Err(SettleError::AmountTooLarge {
            field,
            value,
            max: MAX_QUANTITY,
        });
    }
    Ok(())
}

/// Validate the report-level cash-returned adjustment
pub fn validate_cash_returned(value: Decimal) -> Result<(), SettleError> {
    if value < Decimal::ZERO {
        return Err(SettleError::NegativeAmount {
            field: "cash returned",
            value,
        });
    }
    if value > MAX_CASH_RETURNED {
        return Err(SettleError::AmountTooLarge {
            field: "cash returned",
            value,
            max: MAX_CASH_RETURNED,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_negative_quantity() {
        let err = validate_quantity("issued quantity", Decimal::from(-1)).unwrap_err();
        assert_eq!(
            err,
            SettleError::NegativeAmount {
                field: "issued quantity",
                value: Decimal::from(-1),
            }
        );
    }

    #[test]
    fn test_rejects_oversized_quantity() {
        assert!(validate_quantity("issued quantity", MAX_QUANTITY).is_ok());
        let err = validate_quantity("issued quantity", MAX_QUANTITY + Decimal::ONE).unwrap_err();
        assert!(matches!(err, SettleError::AmountTooLarge { .. }));
    }

    #[test]
    fn test_accepts_zero_and_fractional_quantities() {
        assert!(validate_quantity("returned quantity", Decimal::ZERO).is_ok());
        assert!(validate_quantity("returned quantity", Decimal::new(25, 1)).is_ok());
    }

    #[test]
    fn test_cash_returned_bounds() {
        assert!(validate_cash_returned(Decimal::ZERO).is_ok());
        assert!(validate_cash_returned(Decimal::from(-5)).is_err());
        assert!(validate_cash_returned(MAX_CASH_RETURNED + Decimal::ONE).is_err());
    }
}
