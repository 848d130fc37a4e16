//! Free-form complexity string resolution

use once_cell::sync::Lazy;
use regex::Regex;

use crate::class::ComplexityClass;
use ograph_common::{OGraphError, Result};

/// Recognized forms per class, in normalized (lowercased, no whitespace) shape
const CONSTANT_FORMS: &[&str] = &["1", "c", "constant", "o(1)"];
const LOGARITHMIC_FORMS: &[&str] = &["log*n", "logn", "log(n)", "o(logn)", "o(log(n))"];
const LINEAR_FORMS: &[&str] = &["n*m", "m*n", "n", "linear", "o(n)"];
const LOG_LINEAR_FORMS: &[&str] = &["nlogn", "nlog(n)", "n*logn", "n*log(n)", "o(nlogn)"];
const QUADRATIC_FORMS: &[&str] = &[
    "n2", "n^2", "nsquared", "quadratic", "o(n2)", "o(n^2)", "n**2x", "n**2",
];
const CUBIC_FORMS: &[&str] = &["n3", "n^3", "ncubed", "cubic", "o(n3)", "o(n^3)", "n**3"];
const EXPONENTIAL_FORMS: &[&str] = &["exponential", "o(2^n)", "2**n", "2**h"];
const FACTORIAL_FORMS: &[&str] = &["n!", "factorial", "o(n!)"];

/// Guarded pattern for exponential forms like `2^h` or `2^n`
static EXPONENTIAL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^2\^[a-z]").expect("exponential pattern is valid"));

/// A resolved growth class together with its display label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedComplexity {
    pub class: ComplexityClass,
    pub label: String,
}

/// Normalize a complexity string: lowercase and strip all whitespace
pub fn normalize(input: &str) -> String {
    input
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// Resolve a free-form complexity string to a growth class and label
///
/// Matching is an exact membership test against fixed synonym tables, plus a
/// guarded prefix pattern for exponential forms such as `2^h`. Unrecognized
/// input fails with [`OGraphError::UnsupportedComplexity`] carrying the
/// normalized string.
pub fn resolve(input: &str) -> Result<ResolvedComplexity> {
    let normalized = normalize(input);

    if EXPONENTIAL_FORMS.contains(&normalized.as_str())
        || EXPONENTIAL_PATTERN.is_match(&normalized)
    {
        return Ok(ResolvedComplexity {
            class: ComplexityClass::Exponential,
            label: exponential_label(&normalized),
        });
    }

    let class = if CONSTANT_FORMS.contains(&normalized.as_str()) {
        ComplexityClass::Constant
    } else if LOGARITHMIC_FORMS.contains(&normalized.as_str()) {
        ComplexityClass::Logarithmic
    } else if LINEAR_FORMS.contains(&normalized.as_str()) {
        ComplexityClass::Linear
    } else if LOG_LINEAR_FORMS.contains(&normalized.as_str()) {
        ComplexityClass::LogLinear
    } else if QUADRATIC_FORMS.contains(&normalized.as_str()) {
        ComplexityClass::Quadratic
    } else if CUBIC_FORMS.contains(&normalized.as_str()) {
        ComplexityClass::Cubic
    } else if FACTORIAL_FORMS.contains(&normalized.as_str()) {
        ComplexityClass::Factorial
    } else {
        tracing::debug!(input = %normalized, "unrecognized complexity string");
        return Err(OGraphError::unsupported_complexity(normalized));
    };

    Ok(ResolvedComplexity {
        class,
        label: class.canonical_label().to_string(),
    })
}

/// Build the display label for an exponential input, preserving its form
///
/// `2^h` becomes `O(2^h)`; inputs already wrapped in big-O notation like
/// `o(2^n)` are uppercased instead of wrapped again.
fn exponential_label(normalized: &str) -> String {
    if normalized.starts_with("o(") {
        normalized.to_uppercase()
    } else {
        format!("O({normalized})")
    }
}
