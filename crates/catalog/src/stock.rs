use kiosk_core::{DomainError, DomainResult};

/// Validate a proposed stock level.
///
/// Unlike `StockedEntry::sell` (a boolean outcome), an invalid level here is
/// a distinguished error meant to propagate up to the caller's boundary.
pub fn check_stock(stock: i64) -> DomainResult<()> {
    if stock < 0 {
        return Err(DomainError::validation("stock cannot be negative"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_stock_is_a_validation_error() {
        let err = check_stock(-5).unwrap_err();
        match err {
            DomainError::Validation(msg) => assert_eq!(msg, "stock cannot be negative"),
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn zero_and_positive_stock_pass() {
        assert!(check_stock(0).is_ok());
        assert!(check_stock(30).is_ok());
    }
}
