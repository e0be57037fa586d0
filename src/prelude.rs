//! Common import for generator users
pub use crate::error::{LdsError, Result};
pub use crate::projection::{Circle, Disk, Sphere, Sphere3Hopf};
pub use crate::seq::{
    Halton, HaltonI, HaltonN, Sequence, VdCorput, VdCorputI,
};
pub use crate::sphere_n::{Sphere3, SphereN};
pub use crate::table::{get_tp, TableCache};
