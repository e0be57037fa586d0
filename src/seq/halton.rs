use super::{Counter, Sequence, Vdc};
use crate::error::{LdsError, Result};

/// Two-dimensional Halton sequence generator
///
/// Each coordinate is a Van der Corput sequence in its own base. The bases
/// should be pairwise coprime (typically distinct primes); this is not
/// checked.
///
/// # Example
///
/// ```rust
/// use ldsgen::prelude::*;
///
/// let hgen = Halton::new([2, 3]).unwrap();
/// let [x, y] = hgen.pop();
/// assert_eq!(x, 0.5);
/// assert!((y - 1.0 / 3.0).abs() < 1e-15);
/// ```
#[derive(Debug)]
pub struct Halton {
    vdcs: [Vdc; 2],
    counter: Counter,
}

impl Halton {
    pub fn new(bases: [u64; 2]) -> Result<Self> {
        Ok(Halton {
            vdcs: [Vdc::new(bases[0])?, Vdc::new(bases[1])?],
            counter: Counter::new(),
        })
    }
}

impl Sequence for Halton {
    type Item = [f64; 2];

    fn counter(&self) -> &Counter {
        &self.counter
    }

    fn point(&self, index: u64) -> [f64; 2] {
        [self.vdcs[0].eval(index), self.vdcs[1].eval(index)]
    }
}

/// Halton sequence generator in any number of dimensions
#[derive(Debug)]
pub struct HaltonN {
    vdcs: Vec<Vdc>,
    counter: Counter,
}

impl HaltonN {
    pub fn new(bases: &[u64]) -> Result<Self> {
        if bases.is_empty() {
            return Err(LdsError::TooFewBases {
                expected: 1,
                got: 0,
            });
        }
        Ok(HaltonN {
            vdcs: Vdc::many(bases)?,
            counter: Counter::new(),
        })
    }

    /// Number of coordinates in each point
    pub fn dim(&self) -> usize {
        self.vdcs.len()
    }
}

impl Sequence for HaltonN {
    type Item = Vec<f64>;

    fn counter(&self) -> &Counter {
        &self.counter
    }

    fn point(&self, index: u64) -> Vec<f64> {
        self.vdcs.iter().map(|vdc| vdc.eval(index)).collect()
    }
}
