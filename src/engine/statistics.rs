//! Descriptive statistics over a non-empty list of numbers.
//!
//! Every function fails with [`CalcError::EmptyInput`] when handed an
//! empty slice. Sorting uses `f64::total_cmp`, so results are stable for
//! any finite input.

use super::error::CalcError;

fn ensure_non_empty(numbers: &[f64], operation: &'static str) -> Result<(), CalcError> {
    if numbers.is_empty() {
        return Err(CalcError::EmptyInput { operation });
    }
    Ok(())
}

fn sorted(numbers: &[f64]) -> Vec<f64> {
    let mut sorted = numbers.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Arithmetic average.
pub fn mean(numbers: &[f64]) -> Result<f64, CalcError> {
    ensure_non_empty(numbers, "mean")?;
    Ok(numbers.iter().sum::<f64>() / numbers.len() as f64)
}

/// Middle value of the sorted list, or the average of the two middle
/// values when the count is even.
pub fn median(numbers: &[f64]) -> Result<f64, CalcError> {
    ensure_non_empty(numbers, "median")?;
    let sorted = sorted(numbers);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Ok(sorted[mid])
    }
}

/// Most frequent value(s).
///
/// Ties are all returned, in ascending order. When every value is
/// distinct, every value is a mode.
///
/// # Example
///
/// ```rust
/// use reckon::engine::statistics::mode;
///
/// assert_eq!(mode(&[3.0, 1.0, 3.0, 1.0, 2.0]).unwrap(), vec![1.0, 3.0]);
/// ```
pub fn mode(numbers: &[f64]) -> Result<Vec<f64>, CalcError> {
    ensure_non_empty(numbers, "mode")?;

    // Run-length groups over the sorted values: (value, occurrences).
    let mut groups: Vec<(f64, usize)> = Vec::new();
    for value in sorted(numbers) {
        match groups.last_mut() {
            Some((last, count)) if *last == value => *count += 1,
            _ => groups.push((value, 1)),
        }
    }

    let max_count = groups.iter().map(|(_, count)| *count).max().unwrap_or(0);
    Ok(groups
        .into_iter()
        .filter(|(_, count)| *count == max_count)
        .map(|(value, _)| value)
        .collect())
}

/// Sample standard deviation (divides by `count - 1`).
///
/// A single value has a deviation of zero.
pub fn standard_deviation(numbers: &[f64]) -> Result<f64, CalcError> {
    ensure_non_empty(numbers, "standard deviation")?;
    if numbers.len() == 1 {
        return Ok(0.0);
    }

    let mean = mean(numbers)?;
    let squared_deviations: f64 = numbers.iter().map(|x| (x - mean).powi(2)).sum();
    Ok((squared_deviations / (numbers.len() - 1) as f64).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_list() {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), Ok(3.0));
    }

    #[test]
    fn empty_list_fails_everywhere() {
        assert_eq!(mean(&[]), Err(CalcError::EmptyInput { operation: "mean" }));
        assert!(median(&[]).is_err());
        assert!(mode(&[]).is_err());
        assert!(standard_deviation(&[]).is_err());
    }

    #[test]
    fn median_of_odd_count_is_middle_element() {
        assert_eq!(median(&[1.0, 3.0, 2.0, 5.0, 4.0]), Ok(3.0));
    }

    #[test]
    fn median_of_even_count_averages_middle_pair() {
        assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]), Ok(2.5));
    }

    #[test]
    fn median_does_not_reorder_input() {
        let numbers = [5.0, 1.0, 3.0];
        median(&numbers).unwrap();
        assert_eq!(numbers, [5.0, 1.0, 3.0]);
    }

    #[test]
    fn mode_returns_most_frequent_value() {
        assert_eq!(mode(&[1.0, 2.0, 2.0, 3.0]).unwrap(), vec![2.0]);
    }

    #[test]
    fn mode_returns_all_ties_ascending() {
        assert_eq!(mode(&[4.0, 1.0, 4.0, 1.0, 7.0]).unwrap(), vec![1.0, 4.0]);
    }

    #[test]
    fn mode_of_distinct_values_is_every_value() {
        assert_eq!(mode(&[3.0, 1.0, 2.0]).unwrap(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn standard_deviation_is_sample_based() {
        let result = standard_deviation(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert!((result - 2.138).abs() < 0.01);
    }

    #[test]
    fn standard_deviation_of_single_value_is_zero() {
        assert_eq!(standard_deviation(&[42.0]), Ok(0.0));
    }
}
