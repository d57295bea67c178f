use crate::server::error::validation::ValidationError;

/// Checks an optional integer against an inclusive range; `None` always passes.
///
/// # Arguments
/// - `field` - Request field name reported on failure
/// - `value` - The value to check
/// - `min` / `max` - Inclusive bounds
///
/// # Returns
/// - `Ok(())` - Value absent or within bounds
/// - `Err(ValidationError)` - Value outside the bounds
pub fn check_range(
    field: &str,
    value: Option<i32>,
    min: i32,
    max: i32,
) -> Result<(), ValidationError> {
    match value {
        Some(value) if value < min || value > max => {
            Err(ValidationError::out_of_range(field, min, max))
        }
        _ => Ok(()),
    }
}

/// Checks that an amount is zero or greater.
pub fn check_non_negative(field: &str, value: f64) -> Result<(), ValidationError> {
    if value < 0.0 || value.is_nan() {
        return Err(ValidationError::negative(field));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_bounds_are_inclusive() {
        assert!(check_range("age", Some(8), 8, 60).is_ok());
        assert!(check_range("age", Some(60), 8, 60).is_ok());
        assert!(check_range("age", None, 8, 60).is_ok());

        let err = check_range("age", Some(61), 8, 60).unwrap_err();
        assert_eq!(err.field, "age");
        assert_eq!(err.message, "age must be between 8 and 60");
        assert!(check_range("age", Some(7), 8, 60).is_err());
    }

    #[test]
    fn zero_is_not_negative() {
        assert!(check_non_negative("budget", 0.0).is_ok());
        assert!(check_non_negative("budget", 12.5).is_ok());
        assert_eq!(
            check_non_negative("budget", -0.01).unwrap_err().field,
            "budget"
        );
    }
}
