//! Low-discrepancy sequence generators.
//!
//! Van der Corput and Halton sequences, and their projections onto the
//! circle, the disk, the 2-sphere, the 3-sphere, and spheres of any
//! dimension, for quasi-Monte Carlo sampling and deterministic point
//! placement.
//!
//! Every generator implements [`Sequence`]: a pure map from a logical index
//! to a point, driven by an atomic counter. Generators can be popped from
//! several threads at once; each index is consumed exactly once.
//!
//! ```rust
//! use ldsgen::prelude::*;
//!
//! let sgen = SphereN::new(&[2, 3, 5, 7]).unwrap();
//! sgen.reseed(0);
//!
//! let point = sgen.pop();
//! let norm2: f64 = point.iter().map(|x| x * x).sum();
//! assert!((norm2 - 1.0).abs() < 1e-10);
//! ```
#![warn(unused_extern_crates)]
#![warn(
    clippy::all,
    clippy::imprecise_flops,
    clippy::unseparated_literal_suffix,
    clippy::option_option,
    clippy::implicit_clone
)]
pub mod config;
pub mod error;
pub mod prelude;
pub mod projection;
pub mod seq;
pub mod sphere_n;
pub mod table;

pub use error::{LdsError, Result};
pub use seq::Sequence;
pub use table::get_tp;

pub use ldsgen_utils::{linspace, simple_interp, InterpError};
