//! Growth-curve sampling over a linear grid of input sizes

use crate::class::ComplexityClass;
use ograph_common::{OGraphError, Result};

/// Number of sample points per curve
pub const SAMPLE_POINTS: usize = 1000;

/// A sampled growth curve: ordered `(input size, operation count)` pairs
///
/// `x` runs linearly from 1 to `n_max` inclusive; `x[0]` is pinned to 1 so
/// logarithmic classes never see the undefined region below the domain
/// boundary. `y` may be `f64::INFINITY` past the overflow cutoffs.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSeries {
    pub points: Vec<(f64, f64)>,
}

impl SampleSeries {
    /// Sample a growth class over `SAMPLE_POINTS` input sizes up to `n_max`
    pub fn generate(class: ComplexityClass, n_max: u32) -> Result<Self> {
        if n_max == 0 {
            return Err(OGraphError::validation_field(
                "n_max must be at least 1",
                "n_max",
            ));
        }

        let upper = n_max as f64;
        let step = (upper - 1.0) / (SAMPLE_POINTS - 1) as f64;
        let points = (0..SAMPLE_POINTS)
            .map(|i| {
                let x = if i == 0 { 1.0 } else { 1.0 + step * i as f64 };
                (x, class.evaluate(x))
            })
            .collect();

        Ok(Self { points })
    }

    /// Largest finite sampled value, or 0 when every sample is non-finite
    pub fn max_finite_value(&self) -> f64 {
        self.points
            .iter()
            .map(|&(_, y)| y)
            .filter(|y| y.is_finite())
            .fold(0.0, f64::max)
    }

    /// Whether any sampled value is non-finite (the unbounded tail)
    pub fn has_unbounded_tail(&self) -> bool {
        self.points.iter().any(|&(_, y)| !y.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_shape() {
        let series = SampleSeries::generate(ComplexityClass::Linear, 100).unwrap();
        assert_eq!(series.points.len(), SAMPLE_POINTS);
        assert_eq!(series.points[0].0, 1.0);
        let (last_x, _) = series.points[SAMPLE_POINTS - 1];
        assert!((last_x - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_first_sample_pinned_to_one() {
        // log2(1) = 0 keeps logarithmic curves finite at the boundary
        let series = SampleSeries::generate(ComplexityClass::Logarithmic, 50).unwrap();
        assert_eq!(series.points[0], (1.0, 0.0));

        let series = SampleSeries::generate(ComplexityClass::LogLinear, 50).unwrap();
        let (_, y0) = series.points[0];
        assert!(y0.is_finite());
        assert!(y0 >= 0.0);
    }

    #[test]
    fn test_n_max_of_one_collapses_grid() {
        let series = SampleSeries::generate(ComplexityClass::Quadratic, 1).unwrap();
        assert_eq!(series.points.len(), SAMPLE_POINTS);
        for &(x, y) in &series.points {
            assert_eq!(x, 1.0);
            assert_eq!(y, 1.0);
        }
    }

    #[test]
    fn test_zero_n_max_rejected() {
        let err = SampleSeries::generate(ComplexityClass::Linear, 0).unwrap_err();
        assert!(err.is_client_error());
        assert!(err.to_string().contains("n_max"));
    }

    #[test]
    fn test_exponential_tail_is_unbounded() {
        let series = SampleSeries::generate(ComplexityClass::Exponential, 100).unwrap();
        assert!(series.has_unbounded_tail());
        for &(x, y) in &series.points {
            if x < 30.0 {
                assert_eq!(y, 2f64.powf(x), "x = {x}");
            } else {
                assert_eq!(y, f64::INFINITY, "x = {x}");
            }
        }
        // the finite part stays below 2^30
        assert!(series.max_finite_value() < (1u64 << 30) as f64);
    }

    #[test]
    fn test_factorial_tail_is_unbounded() {
        let series = SampleSeries::generate(ComplexityClass::Factorial, 40).unwrap();
        assert!(series.has_unbounded_tail());
        for &(x, y) in &series.points {
            if x >= 20.0 {
                assert_eq!(y, f64::INFINITY, "x = {x}");
            } else {
                assert!(y.is_finite(), "x = {x}");
            }
        }
    }

    #[test]
    fn test_generation_is_idempotent() {
        let first = SampleSeries::generate(ComplexityClass::Quadratic, 50).unwrap();
        let second = SampleSeries::generate(ComplexityClass::Quadratic, 50).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_constant_has_no_unbounded_tail() {
        let series = SampleSeries::generate(ComplexityClass::Constant, 100_000).unwrap();
        assert!(!series.has_unbounded_tail());
        assert_eq!(series.max_finite_value(), 1.0);
    }
}
