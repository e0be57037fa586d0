//! Low-discrepancy points on spheres of any dimension.
//!
//! A point on the sphere in `R^(m+1)` is built from a point on the sphere in
//! `R^m` and one polar angle `θ`: `(sub · sin θ, cos θ)`. The angle comes
//! from a Van der Corput variate pushed through the inverse of the angle's
//! marginal CDF, read off a [`TableCache`] table by interpolation. The
//! recursion bottoms out at the closed-form 2-sphere map.
use ldsgen_utils::interp_sorted;

use crate::error::{LdsError, Result};
use crate::projection::SphereMap;
use crate::seq::{Counter, Sequence, Vdc};
use crate::table::{Table, TableCache};

/// What sits beneath a polar lift
#[derive(Debug)]
enum SubSphere {
    /// The 2-sphere in closed form
    Sphere2(SphereMap),
    /// A lower-dimensional lift
    Lift(Box<PolarLift>),
}

impl SubSphere {
    fn write(&self, k: u64, out: &mut Vec<f64>) {
        match self {
            Self::Sphere2(map) => out.extend_from_slice(&map.at(k)),
            Self::Lift(lift) => lift.write(k, out),
        }
    }
}

/// One level of the recursion: the polar angle for table dimension `n`
/// over the sub-sphere below it
#[derive(Debug)]
struct PolarLift {
    vdc: Vdc,
    grid: Table,
    table: Table,
    start: f64,
    range: f64,
    sub: SubSphere,
}

impl PolarLift {
    /// Needs at least three bases. The first drives this level's angle and
    /// the rest build the sub-sphere.
    fn new(bases: &[u64], cache: &TableCache) -> Result<Self> {
        if bases.len() < 3 {
            return Err(LdsError::TooFewBases {
                expected: 3,
                got: bases.len(),
            });
        }

        let n = bases.len() - 1;
        let vdc = Vdc::new(bases[0])?;
        let sub = if n == 2 {
            SubSphere::Sphere2(SphereMap::new([bases[1], bases[2]])?)
        } else {
            SubSphere::Lift(Box::new(PolarLift::new(&bases[1..], cache)?))
        };

        let table = cache.table(n);
        let start = table[0];
        let range = table[table.len() - 1] - start;

        Ok(PolarLift {
            vdc,
            grid: cache.grid(),
            table,
            start,
            range,
            sub,
        })
    }

    /// Number of coordinates this level produces
    fn dim(&self) -> usize {
        match &self.sub {
            SubSphere::Sphere2(_) => 4,
            SubSphere::Lift(lift) => lift.dim() + 1,
        }
    }

    fn write(&self, k: u64, out: &mut Vec<f64>) {
        let ti = self.start + self.range * self.vdc.eval(k);
        let xi = interp_sorted(ti, &self.table, &self.grid);
        let sinxi = xi.sin();

        let offset = out.len();
        self.sub.write(k, out);
        out[offset..].iter_mut().for_each(|x| *x *= sinxi);
        out.push(xi.cos());
    }

    fn at(&self, k: u64) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.dim());
        self.write(k, &mut out);
        out
    }
}

/// Low-discrepancy points on the unit 3-sphere
///
/// Uses the first three bases: one for the polar angle against the `n = 2`
/// table and two for the 2-sphere beneath it.
///
/// # Example
///
/// ```rust
/// use ldsgen::prelude::*;
///
/// let sgen = Sphere3::new(&[2, 3, 5]).unwrap();
/// let point = sgen.pop();
/// let norm2: f64 = point.iter().map(|x| x * x).sum();
/// assert!((norm2 - 1.0).abs() < 1e-10);
/// ```
#[derive(Debug)]
pub struct Sphere3 {
    lift: PolarLift,
    counter: Counter,
}

impl Sphere3 {
    pub fn new(bases: &[u64]) -> Result<Self> {
        Self::with_cache(bases, TableCache::global())
    }

    /// Like [`Sphere3::new`], taking tables from `cache`
    pub fn with_cache(bases: &[u64], cache: &TableCache) -> Result<Self> {
        if bases.len() < 3 {
            return Err(LdsError::TooFewBases {
                expected: 3,
                got: bases.len(),
            });
        }
        Ok(Sphere3 {
            lift: PolarLift::new(&bases[..3], cache)?,
            counter: Counter::new(),
        })
    }
}

impl Sequence for Sphere3 {
    type Item = [f64; 4];

    fn counter(&self) -> &Counter {
        &self.counter
    }

    fn point(&self, index: u64) -> [f64; 4] {
        let mut point = [0.0; 4];
        point.copy_from_slice(&self.lift.at(index));
        point
    }
}

/// Low-discrepancy points on the unit sphere in `R^(m+1)` for `m` bases
///
/// # Example
///
/// ```rust
/// use ldsgen::prelude::*;
///
/// let sgen = SphereN::new(&[2, 3, 5, 7]).unwrap();
/// assert_eq!(sgen.dim(), 5);
///
/// let point = sgen.pop();
/// assert_eq!(point.len(), 5);
/// ```
#[derive(Debug)]
pub struct SphereN {
    lift: PolarLift,
    counter: Counter,
}

impl SphereN {
    /// Needs at least three bases
    pub fn new(bases: &[u64]) -> Result<Self> {
        Self::with_cache(bases, TableCache::global())
    }

    /// Like [`SphereN::new`], taking tables from `cache`
    pub fn with_cache(bases: &[u64], cache: &TableCache) -> Result<Self> {
        Ok(SphereN {
            lift: PolarLift::new(bases, cache)?,
            counter: Counter::new(),
        })
    }

    /// Number of coordinates in each point
    pub fn dim(&self) -> usize {
        self.lift.dim()
    }
}

impl Sequence for SphereN {
    type Item = Vec<f64>;

    fn counter(&self) -> &Counter {
        &self.counter
    }

    fn point(&self, index: u64) -> Vec<f64> {
        self.lift.at(index)
    }
}
