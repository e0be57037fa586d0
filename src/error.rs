use ldsgen_utils::InterpError;
use thiserror::Error;

/// Every way a generator or table request can be rejected.
///
/// All variants are invalid-argument errors raised synchronously by the
/// faulty call; nothing is retried and generators never fail after they are
/// constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LdsError {
    /// A digit-reversal base must be at least 2
    #[error("base must be at least 2, got {0}")]
    BaseTooSmall(u64),
    /// The fixed-point scale `base^scale` does not fit in a `u64`
    #[error("base {base} raised to scale {scale} overflows u64")]
    ScaleOverflow { base: u64, scale: u32 },
    /// Not enough bases were supplied for the requested generator
    #[error("expected at least {expected} bases, got {got}")]
    TooFewBases { expected: usize, got: usize },
    /// The number of scales does not match the number of bases
    #[error("got {n_scales} scales for {n_bases} bases")]
    ScaleCountMismatch { n_bases: usize, n_scales: usize },
    /// Sphere tables are only defined for non-negative dimensions
    #[error("dimension must be non-negative, got {0}")]
    NegativeDimension(i64),
    /// The inputs to an interpolation were unusable
    #[error("interpolation error: {0}")]
    Interp(#[from] InterpError),
}

pub type Result<T> = std::result::Result<T, LdsError>;
