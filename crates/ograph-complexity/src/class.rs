//! Growth classes and their evaluation

use serde::{Deserialize, Serialize};

/// Input sizes at or above this value make `2^n` overflow the useful `f64`
/// range for plotting, so the exponential class reports them as unbounded.
pub const EXPONENTIAL_CUTOFF: f64 = 30.0;

/// Input sizes at or above this value make `n!` overflow the useful `f64`
/// range for plotting, so the factorial class reports them as unbounded.
pub const FACTORIAL_CUTOFF: f64 = 20.0;

/// Supported asymptotic growth classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComplexityClass {
    Constant,
    Logarithmic,
    Linear,
    LogLinear,
    Quadratic,
    Cubic,
    Exponential,
    Factorial,
}

impl ComplexityClass {
    /// Evaluate the operation count for a single input size
    ///
    /// Pure and deterministic. Exponential and factorial values past their
    /// cutoffs come back as `f64::INFINITY` rather than overflowing.
    pub fn evaluate(&self, x: f64) -> f64 {
        match self {
            Self::Constant => 1.0,
            Self::Logarithmic => x.log2(),
            Self::Linear => x,
            Self::LogLinear => x * x.log2(),
            Self::Quadratic => x * x,
            Self::Cubic => x * x * x,
            Self::Exponential => {
                if x < EXPONENTIAL_CUTOFF {
                    2f64.powf(x)
                } else {
                    f64::INFINITY
                }
            }
            Self::Factorial => {
                if x < FACTORIAL_CUTOFF {
                    exact_factorial(x as u64)
                } else {
                    f64::INFINITY
                }
            }
        }
    }

    /// The canonical human-readable label for this class
    ///
    /// Exponential inputs carry their original form (`2^h` vs `2^n`), so the
    /// resolver replaces this label with one built from the normalized input.
    pub fn canonical_label(&self) -> &'static str {
        match self {
            Self::Constant => "O(1)",
            Self::Logarithmic => "O(log n)",
            Self::Linear => "O(n)",
            Self::LogLinear => "O(n log n)",
            Self::Quadratic => "O(n²)",
            Self::Cubic => "O(n³)",
            Self::Exponential => "O(2^n)",
            Self::Factorial => "O(n!)",
        }
    }
}

/// Exact factorial of a small integer, widened through `u128`
///
/// Callers guarantee `n < FACTORIAL_CUTOFF`, which keeps the product well
/// inside `u128` range.
fn exact_factorial(n: u64) -> f64 {
    (2..=n).fold(1u128, |acc, k| acc * k as u128) as f64
}
