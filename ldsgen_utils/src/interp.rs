use thiserror::Error;

use crate::is_nondecreasing;

/// Reasons a pair of tables cannot be used for interpolation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterpError {
    /// One or both of the tables has no entries
    #[error("interpolation tables must be non-empty")]
    Empty,
    /// The abscissae and ordinates have different lengths
    #[error("interpolation tables differ in length: {n_xs} xs but {n_ys} ys")]
    LengthMismatch { n_xs: usize, n_ys: usize },
    /// The abscissae contain a NaN or decrease by more than round-off
    #[error("interpolation abscissae must be ordered and free of NaN")]
    Unordered,
}

/// Piecewise-linear interpolation of `(xs, ys)` at `x`.
///
/// Values of `x` outside `[xs[0], xs[n-1]]` clamp to the first or last
/// ordinate. `xs` must be non-decreasing up to round-off, as checked by
/// [`is_nondecreasing`](crate::is_nondecreasing).
///
/// # Example
///
/// ```rust
/// # use ldsgen_utils::simple_interp;
/// let xs = [0.0, 1.0, 2.0, 3.0];
/// let ys = [0.0, 2.0, 4.0, 6.0];
///
/// assert_eq!(simple_interp(1.5, &xs, &ys).unwrap(), 3.0);
/// assert_eq!(simple_interp(-0.5, &xs, &ys).unwrap(), 0.0);
/// assert_eq!(simple_interp(3.5, &xs, &ys).unwrap(), 6.0);
/// ```
pub fn simple_interp(
    x: f64,
    xs: &[f64],
    ys: &[f64],
) -> Result<f64, InterpError> {
    if xs.is_empty() || ys.is_empty() {
        return Err(InterpError::Empty);
    }
    if xs.len() != ys.len() {
        return Err(InterpError::LengthMismatch {
            n_xs: xs.len(),
            n_ys: ys.len(),
        });
    }
    if !is_nondecreasing(xs) {
        return Err(InterpError::Unordered);
    }
    Ok(interp_sorted(x, xs, ys))
}

/// Like [`simple_interp`] but without validating the tables.
///
/// The caller guarantees that `xs` and `ys` are non-empty, the same length,
/// and that `xs` is (close to) non-decreasing. Never divides by a zero-width
/// segment: if two neighboring abscissae coincide the right ordinate is used.
#[inline]
pub fn interp_sorted(x: f64, xs: &[f64], ys: &[f64]) -> f64 {
    let last = xs.len() - 1;
    if x <= xs[0] {
        return ys[0];
    }
    if x >= xs[last] {
        return ys[last];
    }

    // first abscissa at or beyond x; xs[0] < x so the segment is [ix-1, ix]
    let ix = xs.partition_point(|&xi| xi < x).clamp(1, last);
    let (x0, x1) = (xs[ix - 1], xs[ix]);
    let (y0, y1) = (ys[ix - 1], ys[ix]);

    let dx = x1 - x0;
    if dx > 0.0 {
        let t = (x - x0) / dx;
        y0 + t * (y1 - y0)
    } else {
        y1
    }
}
