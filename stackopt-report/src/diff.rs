//! Percent difference between a baseline and an optimized measurement

/// Relative change of `optimized` versus `baseline`, in percent.
///
/// - both zero: `0`
/// - optimized zero, baseline non-zero: `-100`
/// - otherwise `(optimized - baseline) / baseline * 100`
///
/// The last case divides by `baseline` even when only `baseline` is zero,
/// which yields an infinite value.
pub fn percent_diff(baseline: i64, optimized: i64) -> f64 {
    if baseline == 0 && optimized == 0 {
        0.0
    } else if optimized == 0 {
        -100.0
    } else {
        (optimized as f64 - baseline as f64) / baseline as f64 * 100.0
    }
}
