//! Tolerance-based comparison helpers for pose test suites.
//!
//! This module is public to allow use across workspace test suites,
//! but is not intended for production use.

use crate::Real;

/// Absolute per-component tolerance used by the reference fixtures.
pub const TOLERANCE: Real = 1e-4;

/// Index of the first component where `a` and `b` differ by `tol` or more.
///
/// When the lengths differ and the shared prefix matches, the length of the
/// shorter slice is returned.
pub fn first_mismatch(a: &[Real], b: &[Real], tol: Real) -> Option<usize> {
    let shared = a.len().min(b.len());
    let differs = |i: usize| {
        let d = (a[i] - b[i]).abs();
        d.is_nan() || d >= tol
    };
    if let Some(i) = (0..shared).find(|&i| differs(i)) {
        return Some(i);
    }
    (a.len() != b.len()).then_some(shared)
}

/// Format components with 7 decimals, space separated.
pub fn format_components(a: &[Real]) -> String {
    a.iter()
        .map(|v| format!("{v:.7}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Panic with both arrays printed if any component differs by `tol` or more.
#[track_caller]
pub fn assert_components_eq(actual: &[Real], expected: &[Real], tol: Real) {
    if let Some(i) = first_mismatch(actual, expected, tol) {
        panic!(
            "component {i} differs (tol={tol})\n  actual   = {}\n  expected = {}",
            format_components(actual),
            format_components(expected)
        );
    }
}
