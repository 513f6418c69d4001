//! Typed catalogue of the operations the engine can perform.

use super::error::CalcError;
use super::{arithmetic, scientific, statistics};
use std::fmt::Debug;

/// Trait implemented by every operation catalogue.
///
/// All methods are pure. Implementations are normally generated by the
/// [`operation_enum!`](crate::operation_enum) macro.
pub trait Operation: Copy + PartialEq + Debug + Send + Sync {
    /// Human-readable name used in results, history and error messages.
    fn name(&self) -> &'static str;

    /// Whether the operation is only available in scientific mode.
    ///
    /// Default implementation returns `false`.
    fn is_scientific(&self) -> bool {
        false
    }
}

operation_enum! {
    /// Operations taking two operands.
    pub enum BinaryOp {
        Add => "Addition",
        Subtract => "Subtraction",
        Multiply => "Multiplication",
        Divide => "Division",
        Power => "Power",
        Percentage => "Percentage",
    }
}

impl BinaryOp {
    /// Infix symbol used when describing the calculation.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Power => "^",
            Self::Percentage => "%",
        }
    }

    /// Apply the operation. For `Percentage`, `lhs` is the value and `rhs`
    /// the percentage.
    pub fn apply(&self, lhs: f64, rhs: f64) -> Result<f64, CalcError> {
        match self {
            Self::Add => Ok(arithmetic::add(lhs, rhs)),
            Self::Subtract => Ok(arithmetic::subtract(lhs, rhs)),
            Self::Multiply => Ok(arithmetic::multiply(lhs, rhs)),
            Self::Divide => arithmetic::divide(lhs, rhs),
            Self::Power => Ok(arithmetic::power(lhs, rhs)),
            Self::Percentage => Ok(arithmetic::percentage(lhs, rhs)),
        }
    }
}

operation_enum! {
    /// Operations taking a single operand.
    pub enum UnaryOp {
        SquareRoot => "Square Root",
        Sine => "Sine",
        Cosine => "Cosine",
        Tangent => "Tangent",
        Log10 => "Logarithm (base 10)",
        NaturalLog => "Natural Logarithm",
    }
    scientific: [Sine, Cosine, Tangent, Log10, NaturalLog]
}

impl UnaryOp {
    pub fn apply(&self, value: f64) -> Result<f64, CalcError> {
        match self {
            Self::SquareRoot => arithmetic::square_root(value),
            Self::Sine => Ok(scientific::sine(value)),
            Self::Cosine => Ok(scientific::cosine(value)),
            Self::Tangent => Ok(scientific::tangent(value)),
            Self::Log10 => scientific::log10(value),
            Self::NaturalLog => scientific::natural_log(value),
        }
    }
}

operation_enum! {
    /// Descriptive statistics over a list of numbers.
    pub enum Statistic {
        Mean => "Mean",
        Median => "Median",
        Mode => "Mode",
        StandardDeviation => "Standard Deviation",
    }
}

/// Result of a statistical operation.
#[derive(Clone, Debug, PartialEq)]
pub enum StatValue {
    Single(f64),
    /// Several values; only produced by `Mode`.
    Many(Vec<f64>),
}

impl Statistic {
    pub fn apply(&self, numbers: &[f64]) -> Result<StatValue, CalcError> {
        match self {
            Self::Mean => statistics::mean(numbers).map(StatValue::Single),
            Self::Median => statistics::median(numbers).map(StatValue::Single),
            Self::Mode => statistics::mode(numbers).map(StatValue::Many),
            Self::StandardDeviation => {
                statistics::standard_deviation(numbers).map(StatValue::Single)
            }
        }
    }
}
