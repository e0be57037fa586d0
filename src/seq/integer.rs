//! Fixed-point variants of the Van der Corput and Halton generators.
//!
//! Values are unsigned integers equal to the real-valued sequence scaled by
//! `base^scale` and truncated, which makes them exact and cheap on hardware
//! without floating point.
use super::{Counter, Sequence};
use crate::error::{LdsError, Result};

/// Van der Corput value of `k` in `base`, scaled by `base^scale`.
///
/// Digits of `k` beyond the `scale`-th are dropped.
///
/// # Example
///
/// ```rust
/// # use ldsgen::seq::vdc_i;
/// assert_eq!(vdc_i(1, 2, 3), 4);
/// assert_eq!(vdc_i(2, 2, 3), 2);
/// assert_eq!(vdc_i(3, 2, 3), 6);
/// ```
///
/// # Panics
///
/// If `base^scale` overflows a `u64`. [`ScaledVdc`] checks this up front.
#[inline]
pub fn vdc_i(k: u64, base: u64, scale: u32) -> u64 {
    scaled_vdc(k, base, base.pow(scale))
}

#[inline]
fn scaled_vdc(k: u64, base: u64, factor: u64) -> u64 {
    let mut k = k;
    let mut factor = factor;
    let mut res = 0;
    while k != 0 {
        let rem = k % base;
        factor /= base;
        k /= base;
        res += rem * factor;
    }
    res
}

/// Fixed-point digit-reversal map for a validated base and scale
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScaledVdc {
    base: u64,
    scale: u32,
    factor: u64,
}

impl ScaledVdc {
    pub fn new(base: u64, scale: u32) -> Result<Self> {
        if base < 2 {
            return Err(LdsError::BaseTooSmall(base));
        }
        let factor = base
            .checked_pow(scale)
            .ok_or(LdsError::ScaleOverflow { base, scale })?;
        Ok(ScaledVdc {
            base,
            scale,
            factor,
        })
    }

    pub fn base(&self) -> u64 {
        self.base
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// `base^scale`; every output is strictly below this
    pub fn factor(&self) -> u64 {
        self.factor
    }

    #[inline]
    pub fn eval(&self, k: u64) -> u64 {
        scaled_vdc(k, self.base, self.factor)
    }
}

/// Fixed-point Van der Corput sequence generator
///
/// # Example
///
/// ```rust
/// use ldsgen::prelude::*;
///
/// let vgen = VdCorputI::new(2, 10).unwrap();
/// assert_eq!(vgen.pop(), 512);
/// assert_eq!(vgen.pop(), 256);
/// assert_eq!(vgen.pop(), 768);
/// ```
#[derive(Debug)]
pub struct VdCorputI {
    vdc: ScaledVdc,
    counter: Counter,
}

impl VdCorputI {
    pub fn new(base: u64, scale: u32) -> Result<Self> {
        Ok(VdCorputI {
            vdc: ScaledVdc::new(base, scale)?,
            counter: Counter::new(),
        })
    }

    pub fn base(&self) -> u64 {
        self.vdc.base()
    }

    pub fn scale(&self) -> u32 {
        self.vdc.scale()
    }
}

impl Sequence for VdCorputI {
    type Item = u64;

    fn counter(&self) -> &Counter {
        &self.counter
    }

    fn point(&self, index: u64) -> u64 {
        self.vdc.eval(index)
    }
}

/// Fixed-point two-dimensional Halton sequence generator
#[derive(Debug)]
pub struct HaltonI {
    vdcs: [ScaledVdc; 2],
    counter: Counter,
}

impl HaltonI {
    pub fn new(bases: [u64; 2], scales: [u32; 2]) -> Result<Self> {
        Ok(HaltonI {
            vdcs: [
                ScaledVdc::new(bases[0], scales[0])?,
                ScaledVdc::new(bases[1], scales[1])?,
            ],
            counter: Counter::new(),
        })
    }
}

impl Sequence for HaltonI {
    type Item = [u64; 2];

    fn counter(&self) -> &Counter {
        &self.counter
    }

    fn point(&self, index: u64) -> [u64; 2] {
        [self.vdcs[0].eval(index), self.vdcs[1].eval(index)]
    }
}
