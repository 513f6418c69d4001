//! Scientific functions. Angles are in radians.

use super::error::CalcError;

/// Display name of the factorial operation.
pub const FACTORIAL: &str = "Factorial";

/// Largest argument whose factorial fits in an `i64`.
pub const FACTORIAL_LIMIT: i64 = 20;

pub fn sine(angle: f64) -> f64 {
    angle.sin()
}

pub fn cosine(angle: f64) -> f64 {
    angle.cos()
}

pub fn tangent(angle: f64) -> f64 {
    angle.tan()
}

/// Base-10 logarithm, defined for positive input only.
pub fn log10(x: f64) -> Result<f64, CalcError> {
    if x <= 0.0 {
        return Err(CalcError::InvalidDomain {
            operation: "Logarithm",
            domain: "positive numbers",
        });
    }
    Ok(x.log10())
}

/// Natural logarithm, defined for positive input only.
pub fn natural_log(x: f64) -> Result<f64, CalcError> {
    if x <= 0.0 {
        return Err(CalcError::InvalidDomain {
            operation: "Natural logarithm",
            domain: "positive numbers",
        });
    }
    Ok(x.ln())
}

/// Factorial of a non-negative integer.
///
/// Fails with `InvalidDomain` for negative input and with `Overflow`
/// above [`FACTORIAL_LIMIT`].
///
/// # Example
///
/// ```rust
/// use reckon::engine::scientific::factorial;
///
/// assert_eq!(factorial(0), Ok(1));
/// assert_eq!(factorial(5), Ok(120));
/// assert!(factorial(21).is_err());
/// ```
pub fn factorial(n: i64) -> Result<i64, CalcError> {
    if n < 0 {
        return Err(CalcError::InvalidDomain {
            operation: FACTORIAL,
            domain: "non-negative integers",
        });
    }
    if n > FACTORIAL_LIMIT {
        return Err(CalcError::Overflow {
            operation: FACTORIAL,
            value: n,
            limit: FACTORIAL_LIMIT,
        });
    }
    Ok((2..=n).product())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const TOLERANCE: f64 = 1e-4;

    #[test]
    fn trig_at_known_angles() {
        assert!(sine(0.0).abs() < TOLERANCE);
        assert!((cosine(0.0) - 1.0).abs() < TOLERANCE);
        assert!((sine(PI / 2.0) - 1.0).abs() < TOLERANCE);
        assert!((tangent(PI / 4.0) - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn log10_of_ten_is_one() {
        assert!((log10(10.0).unwrap() - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn logarithms_reject_non_positive_input() {
        assert!(log10(-1.0).is_err());
        assert!(log10(0.0).is_err());
        assert!(natural_log(0.0).is_err());
        assert!(matches!(
            natural_log(-2.5),
            Err(CalcError::InvalidDomain { .. })
        ));
    }

    #[test]
    fn natural_log_of_e_is_one() {
        assert!((natural_log(std::f64::consts::E).unwrap() - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn factorial_of_small_numbers() {
        assert_eq!(factorial(0), Ok(1));
        assert_eq!(factorial(1), Ok(1));
        assert_eq!(factorial(5), Ok(120));
    }

    #[test]
    fn factorial_at_limit_fits_i64() {
        assert_eq!(factorial(20), Ok(2_432_902_008_176_640_000));
    }

    #[test]
    fn factorial_of_negative_number_fails() {
        assert!(matches!(
            factorial(-5),
            Err(CalcError::InvalidDomain { .. })
        ));
    }

    #[test]
    fn factorial_above_limit_overflows() {
        assert_eq!(
            factorial(25),
            Err(CalcError::Overflow {
                operation: FACTORIAL,
                value: 25,
                limit: 20,
            })
        );
    }
}
