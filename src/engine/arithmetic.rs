//! Basic two-operand arithmetic and square root.

use super::error::CalcError;

/// Divisors with a magnitude below this are treated as zero.
pub const DIVISION_EPSILON: f64 = 1e-10;

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Divide `a` by `b`.
///
/// Fails with [`CalcError::DivisionByZero`] when `|b| < 1e-10`.
///
/// # Example
///
/// ```rust
/// use reckon::engine::{arithmetic, CalcError};
///
/// assert_eq!(arithmetic::divide(10.0, 4.0), Ok(2.5));
/// assert_eq!(arithmetic::divide(10.0, 0.0), Err(CalcError::DivisionByZero));
/// ```
pub fn divide(a: f64, b: f64) -> Result<f64, CalcError> {
    if b.abs() < DIVISION_EPSILON {
        return Err(CalcError::DivisionByZero);
    }
    Ok(a / b)
}

/// Raise `base` to `exponent`.
///
/// A negative base with a fractional exponent yields NaN; callers display
/// it as-is.
pub fn power(base: f64, exponent: f64) -> f64 {
    base.powf(exponent)
}

/// Square root, defined for non-negative input only.
pub fn square_root(x: f64) -> Result<f64, CalcError> {
    if x < 0.0 {
        return Err(CalcError::InvalidDomain {
            operation: "Square root",
            domain: "non-negative numbers",
        });
    }
    Ok(x.sqrt())
}

/// `pct` percent of `value`.
pub fn percentage(value: f64, pct: f64) -> f64 {
    value * pct / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-4;

    #[test]
    fn add_handles_mixed_signs() {
        assert!((add(5.5, 3.2) - 8.7).abs() < TOLERANCE);
        assert!((add(10.0, -3.0) - 7.0).abs() < TOLERANCE);
    }

    #[test]
    fn subtract_and_multiply() {
        assert_eq!(subtract(10.0, 4.0), 6.0);
        assert_eq!(multiply(4.0, 5.0), 20.0);
    }

    #[test]
    fn divide_returns_quotient() {
        assert_eq!(divide(15.0, 3.0), Ok(5.0));
    }

    #[test]
    fn divide_by_zero_fails() {
        assert_eq!(divide(10.0, 0.0), Err(CalcError::DivisionByZero));
        assert_eq!(divide(10.0, -0.0), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn divide_by_tiny_divisor_fails() {
        assert_eq!(divide(1.0, 5e-11), Err(CalcError::DivisionByZero));
        assert!(divide(1.0, 1e-10).is_ok());
    }

    #[test]
    fn power_of_positive_base() {
        assert!((power(2.0, 3.0) - 8.0).abs() < TOLERANCE);
        assert!((power(9.0, 0.5) - 3.0).abs() < TOLERANCE);
    }

    #[test]
    fn power_of_negative_base_with_fraction_is_nan() {
        assert!(power(-8.0, 0.5).is_nan());
    }

    #[test]
    fn square_root_of_positive_number() {
        assert_eq!(square_root(16.0), Ok(4.0));
        assert_eq!(square_root(0.0), Ok(0.0));
    }

    #[test]
    fn square_root_of_negative_number_fails() {
        let err = square_root(-16.0).unwrap_err();
        assert_eq!(err.kind(), "InvalidDomain");
    }

    #[test]
    fn percentage_of_value() {
        assert!((percentage(200.0, 15.0) - 30.0).abs() < TOLERANCE);
    }
}
