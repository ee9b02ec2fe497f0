//! Math helpers shared by the splitter and the tree builder.

/// Binary Shannon entropy of a label distribution.
///
/// * `num_positive` - Number of rows labeled 1.
/// * `total` - Number of rows in the subset.
///
/// A pure subset has zero entropy. An empty subset also reports zero so
/// callers never see a NaN from `log2(0)`.
pub fn entropy(num_positive: usize, total: usize) -> f64 {
    if total == 0 || num_positive == 0 || num_positive == total {
        return 0.0;
    }
    let p = num_positive as f64 / total as f64;
    let q = 1.0 - p;
    -p * p.log2() - q * q.log2()
}

/// Majority class label of a subset, `round(num_positive / total)`.
///
/// Computed in integer arithmetic so an exact half rounds up to `true`.
pub fn majority_label(num_positive: usize, total: usize) -> bool {
    2 * num_positive >= total
}

#[inline]
pub fn precision_round(n: f64, precision: i32) -> f64 {
    let p = (10.0_f64).powi(precision);
    (n * p).round() / p
}
