//! Closed-form maps from Van der Corput streams onto the circle, the disk,
//! the 2-sphere, and the 3-sphere.
use std::f64::consts::TAU;

use crate::error::Result;
use crate::seq::{Counter, Sequence, Vdc};

#[inline]
fn circle_at(vdc: &Vdc, k: u64) -> [f64; 2] {
    let theta = vdc.eval(k) * TAU;
    [theta.cos(), theta.sin()]
}

/// The 2-sphere map on its own, without a counter. Shared by [`Sphere`] and
/// the base case of the n-sphere recursion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct SphereMap {
    polar: Vdc,
    azimuth: Vdc,
}

impl SphereMap {
    pub(crate) fn new(bases: [u64; 2]) -> Result<Self> {
        Ok(SphereMap {
            polar: Vdc::new(bases[0])?,
            azimuth: Vdc::new(bases[1])?,
        })
    }

    #[inline]
    pub(crate) fn at(&self, k: u64) -> [f64; 3] {
        let cosphi = 2.0 * self.polar.eval(k) - 1.0;
        let sinphi = (1.0 - cosphi * cosphi).sqrt();
        let [c, s] = circle_at(&self.azimuth, k);
        [sinphi * c, sinphi * s, cosphi]
    }
}

/// Low-discrepancy points on the unit circle
///
/// # Example
///
/// ```rust
/// use ldsgen::prelude::*;
///
/// let cgen = Circle::new(2).unwrap();
/// let [x, y] = cgen.pop();
/// assert_eq!(x, -1.0);
/// assert!(y.abs() < 1e-15);
/// ```
#[derive(Debug)]
pub struct Circle {
    vdc: Vdc,
    counter: Counter,
}

impl Circle {
    pub fn new(base: u64) -> Result<Self> {
        Ok(Circle {
            vdc: Vdc::new(base)?,
            counter: Counter::new(),
        })
    }
}

impl Sequence for Circle {
    type Item = [f64; 2];

    fn counter(&self) -> &Counter {
        &self.counter
    }

    fn point(&self, index: u64) -> [f64; 2] {
        circle_at(&self.vdc, index)
    }
}

/// Low-discrepancy points in the unit disk
///
/// The first base drives the angle and the second the radius.
#[derive(Debug)]
pub struct Disk {
    angle: Vdc,
    radius: Vdc,
    counter: Counter,
}

impl Disk {
    pub fn new(bases: [u64; 2]) -> Result<Self> {
        Ok(Disk {
            angle: Vdc::new(bases[0])?,
            radius: Vdc::new(bases[1])?,
            counter: Counter::new(),
        })
    }
}

impl Sequence for Disk {
    type Item = [f64; 2];

    fn counter(&self) -> &Counter {
        &self.counter
    }

    fn point(&self, index: u64) -> [f64; 2] {
        let [c, s] = circle_at(&self.angle, index);
        let radius = self.radius.eval(index).sqrt();
        [radius * c, radius * s]
    }
}

/// Low-discrepancy points on the unit 2-sphere
///
/// The first base drives `cos φ`, uniform on `[-1, 1]`, and the second
/// the azimuth.
#[derive(Debug)]
pub struct Sphere {
    map: SphereMap,
    counter: Counter,
}

impl Sphere {
    pub fn new(bases: [u64; 2]) -> Result<Self> {
        Ok(Sphere {
            map: SphereMap::new(bases)?,
            counter: Counter::new(),
        })
    }
}

impl Sequence for Sphere {
    type Item = [f64; 3];

    fn counter(&self) -> &Counter {
        &self.counter
    }

    fn point(&self, index: u64) -> [f64; 3] {
        self.map.at(index)
    }
}

/// Low-discrepancy points on the unit 3-sphere in Hopf coordinates
#[derive(Debug)]
pub struct Sphere3Hopf {
    vdcs: [Vdc; 3],
    counter: Counter,
}

impl Sphere3Hopf {
    pub fn new(bases: [u64; 3]) -> Result<Self> {
        Ok(Sphere3Hopf {
            vdcs: [
                Vdc::new(bases[0])?,
                Vdc::new(bases[1])?,
                Vdc::new(bases[2])?,
            ],
            counter: Counter::new(),
        })
    }
}

impl Sequence for Sphere3Hopf {
    type Item = [f64; 4];

    fn counter(&self) -> &Counter {
        &self.counter
    }

    fn point(&self, index: u64) -> [f64; 4] {
        let phi = self.vdcs[0].eval(index) * TAU;
        let psy = self.vdcs[1].eval(index) * TAU;
        let vd = self.vdcs[2].eval(index);
        let cos_eta = vd.sqrt();
        let sin_eta = (1.0 - vd).sqrt();
        [
            cos_eta * psy.cos(),
            cos_eta * psy.sin(),
            sin_eta * (phi + psy).cos(),
            sin_eta * (phi + psy).sin(),
        ]
    }
}
