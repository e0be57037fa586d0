/// `num` evenly spaced samples over the closed interval `[start, stop]`.
///
/// Returns `[start]` when `num` is one and an empty vector when `num` is zero.
///
/// # Example
///
/// ```rust
/// # use ldsgen_utils::linspace;
/// let xs = linspace(0.0, 1.0, 5);
///
/// assert_eq!(xs, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (num - 1) as f64;
            (0..num).map(|i| start + i as f64 * step).collect()
        }
    }
}

/// Largest backwards step, in units of `f64::EPSILON` scaled by the larger
/// magnitude (at least one), that still counts as ordered
pub const ORDER_SLACK_ULPS: f64 = 64.0;

/// Returns `true` if every element of `xs` is a number no smaller than the
/// one before it, up to round-off.
///
/// Tables built by a floating-point recurrence can step backwards by a few
/// ulps where they are flat. Steps back of at most [`ORDER_SLACK_ULPS`]
/// scaled epsilons are accepted; NaN and any larger decrease are not.
///
/// # Example
///
/// ```rust
/// # use ldsgen_utils::is_nondecreasing;
/// assert!(is_nondecreasing(&[0.0, 1.0, 1.0, 2.0]));
/// assert!(is_nondecreasing(&[0.0, 1.0, 1.0 - f64::EPSILON, 2.0]));
/// assert!(!is_nondecreasing(&[0.0, 2.0, 1.0]));
/// assert!(!is_nondecreasing(&[0.0, f64::NAN]));
/// ```
#[inline]
pub fn is_nondecreasing(xs: &[f64]) -> bool {
    !xs.iter().any(|x| x.is_nan())
        && xs.windows(2).all(|w| {
            let scale = w[0].abs().max(w[1].abs()).max(1.0);
            w[0] - w[1] <= ORDER_SLACK_ULPS * f64::EPSILON * scale
        })
}
