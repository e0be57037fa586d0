mod interp;
mod misc;

pub use interp::*;
pub use misc::*;
