//! Complexity-class resolution and growth-curve sampling for ograph
//!
//! Maps free-form complexity strings (e.g. `"n log n"`, `"O(n^2)"`, `"2^h"`)
//! to a closed set of growth classes and samples the corresponding curve over
//! a fixed-size grid of input sizes.

pub mod class;
pub mod resolver;
pub mod series;

// Re-export commonly used types
pub use class::{ComplexityClass, EXPONENTIAL_CUTOFF, FACTORIAL_CUTOFF};
pub use resolver::{normalize, resolve, ResolvedComplexity};
pub use series::{SampleSeries, SAMPLE_POINTS};
