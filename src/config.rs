//! Serializable description of a generator, used by the command line tool
//! and by anything that stores sampling setups next to its results.
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::{LdsError, Result};
use crate::projection::{Circle, Disk, Sphere, Sphere3Hopf};
use crate::seq::{
    Counter, Halton, HaltonI, HaltonN, Sequence, VdCorput, VdCorputI,
};
use crate::sphere_n::{Sphere3, SphereN};

/// Errors that can arise when loading a [`SequenceConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// The configuration parsed but describes an invalid generator
    #[error("invalid generator: {0}")]
    Invalid(#[from] LdsError),
}

/// The generators that can be described by a [`SequenceConfig`]
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SequenceKind {
    VdCorput,
    Halton,
    HaltonN,
    Circle,
    Disk,
    Sphere,
    Sphere3Hopf,
    Sphere3,
    SphereN,
    VdCorputI,
    HaltonI,
}

impl SequenceKind {
    pub const ALL: [SequenceKind; 11] = [
        Self::VdCorput,
        Self::Halton,
        Self::HaltonN,
        Self::Circle,
        Self::Disk,
        Self::Sphere,
        Self::Sphere3Hopf,
        Self::Sphere3,
        Self::SphereN,
        Self::VdCorputI,
        Self::HaltonI,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::VdCorput => "vd_corput",
            Self::Halton => "halton",
            Self::HaltonN => "halton_n",
            Self::Circle => "circle",
            Self::Disk => "disk",
            Self::Sphere => "sphere",
            Self::Sphere3Hopf => "sphere3_hopf",
            Self::Sphere3 => "sphere3",
            Self::SphereN => "sphere_n",
            Self::VdCorputI => "vd_corput_i",
            Self::HaltonI => "halton_i",
        }
    }

    /// Fewest bases the generator accepts
    pub fn min_bases(&self) -> usize {
        match self {
            Self::VdCorput | Self::Circle | Self::HaltonN | Self::VdCorputI => {
                1
            }
            Self::Halton | Self::Disk | Self::Sphere | Self::HaltonI => 2,
            Self::Sphere3Hopf | Self::Sphere3 | Self::SphereN => 3,
        }
    }

    /// Whether the generator produces fixed-point integers
    pub fn is_integer(&self) -> bool {
        matches!(self, Self::VdCorputI | Self::HaltonI)
    }
}

impl fmt::Display for SequenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for SequenceKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|kind| kind.name() == s)
            .copied()
            .ok_or_else(|| format!("cannot parse '{s}'"))
    }
}

/// Configuration for building a generator
///
/// # Example
///
/// ```rust
/// use ldsgen::config::{SequenceConfig, SequenceKind};
/// use ldsgen::prelude::*;
///
/// let config = SequenceConfig::new(SequenceKind::Halton)
///     .bases(vec![2, 3])
///     .seed(1);
///
/// let hgen = config.build().unwrap();
/// assert_eq!(hgen.get_index(), 1);
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SequenceConfig {
    /// Which generator to build
    pub kind: SequenceKind,
    /// One base per independent coordinate stream
    pub bases: Vec<u64>,
    /// Digit counts for the fixed-point generators, one per base
    #[serde(default)]
    pub scales: Vec<u32>,
    /// Index to start from
    #[serde(default)]
    pub seed: u64,
}

impl SequenceConfig {
    pub fn new(kind: SequenceKind) -> Self {
        Self {
            kind,
            bases: Vec::new(),
            scales: Vec::new(),
            seed: 0,
        }
    }

    pub fn bases(mut self, bases: Vec<u64>) -> Self {
        self.bases = bases;
        self
    }

    pub fn scales(mut self, scales: Vec<u32>) -> Self {
        self.scales = scales;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn from_yaml_str(yaml: &str) -> std::result::Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path<P: AsRef<Path>>(
        path: P,
    ) -> std::result::Result<Self, ConfigError> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    /// Check the configuration without building anything
    pub fn validate(&self) -> Result<()> {
        let min_bases = self.kind.min_bases();
        if self.bases.len() < min_bases {
            return Err(LdsError::TooFewBases {
                expected: min_bases,
                got: self.bases.len(),
            });
        }
        if let Some(&base) = self.bases.iter().find(|&&base| base < 2) {
            return Err(LdsError::BaseTooSmall(base));
        }
        if self.kind.is_integer() && self.scales.len() < min_bases {
            return Err(LdsError::ScaleCountMismatch {
                n_bases: self.bases.len(),
                n_scales: self.scales.len(),
            });
        }
        Ok(())
    }

    /// Build the generator and position it at `seed`
    pub fn build(&self) -> Result<AnySequence> {
        self.validate()?;
        let bases = &self.bases;
        let scales = &self.scales;
        let seq = match self.kind {
            SequenceKind::VdCorput => {
                AnySequence::VdCorput(VdCorput::new(bases[0])?)
            }
            SequenceKind::Halton => {
                AnySequence::Halton(Halton::new([bases[0], bases[1]])?)
            }
            SequenceKind::HaltonN => AnySequence::HaltonN(HaltonN::new(bases)?),
            SequenceKind::Circle => AnySequence::Circle(Circle::new(bases[0])?),
            SequenceKind::Disk => {
                AnySequence::Disk(Disk::new([bases[0], bases[1]])?)
            }
            SequenceKind::Sphere => {
                AnySequence::Sphere(Sphere::new([bases[0], bases[1]])?)
            }
            SequenceKind::Sphere3Hopf => AnySequence::Sphere3Hopf(
                Sphere3Hopf::new([bases[0], bases[1], bases[2]])?,
            ),
            SequenceKind::Sphere3 => AnySequence::Sphere3(Sphere3::new(bases)?),
            SequenceKind::SphereN => AnySequence::SphereN(SphereN::new(bases)?),
            SequenceKind::VdCorputI => {
                AnySequence::VdCorputI(VdCorputI::new(bases[0], scales[0])?)
            }
            SequenceKind::HaltonI => AnySequence::HaltonI(HaltonI::new(
                [bases[0], bases[1]],
                [scales[0], scales[1]],
            )?),
        };
        seq.reseed(self.seed);
        Ok(seq)
    }
}

/// One output point of an [`AnySequence`]
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum Row {
    Real(Vec<f64>),
    Int(Vec<u64>),
}

impl Row {
    pub fn len(&self) -> usize {
        match self {
            Self::Real(xs) => xs.len(),
            Self::Int(xs) => xs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Any generator, with points erased to [`Row`]s
#[derive(Debug)]
pub enum AnySequence {
    VdCorput(VdCorput),
    Halton(Halton),
    HaltonN(HaltonN),
    Circle(Circle),
    Disk(Disk),
    Sphere(Sphere),
    Sphere3Hopf(Sphere3Hopf),
    Sphere3(Sphere3),
    SphereN(SphereN),
    VdCorputI(VdCorputI),
    HaltonI(HaltonI),
}

impl Sequence for AnySequence {
    type Item = Row;

    fn counter(&self) -> &Counter {
        match self {
            Self::VdCorput(seq) => seq.counter(),
            Self::Halton(seq) => seq.counter(),
            Self::HaltonN(seq) => seq.counter(),
            Self::Circle(seq) => seq.counter(),
            Self::Disk(seq) => seq.counter(),
            Self::Sphere(seq) => seq.counter(),
            Self::Sphere3Hopf(seq) => seq.counter(),
            Self::Sphere3(seq) => seq.counter(),
            Self::SphereN(seq) => seq.counter(),
            Self::VdCorputI(seq) => seq.counter(),
            Self::HaltonI(seq) => seq.counter(),
        }
    }

    fn point(&self, index: u64) -> Row {
        match self {
            Self::VdCorput(seq) => Row::Real(vec![seq.point(index)]),
            Self::Halton(seq) => Row::Real(seq.point(index).to_vec()),
            Self::HaltonN(seq) => Row::Real(seq.point(index)),
            Self::Circle(seq) => Row::Real(seq.point(index).to_vec()),
            Self::Disk(seq) => Row::Real(seq.point(index).to_vec()),
            Self::Sphere(seq) => Row::Real(seq.point(index).to_vec()),
            Self::Sphere3Hopf(seq) => Row::Real(seq.point(index).to_vec()),
            Self::Sphere3(seq) => Row::Real(seq.point(index).to_vec()),
            Self::SphereN(seq) => Row::Real(seq.point(index)),
            Self::VdCorputI(seq) => Row::Int(vec![seq.point(index)]),
            Self::HaltonI(seq) => Row::Int(seq.point(index).to_vec()),
        }
    }
}
