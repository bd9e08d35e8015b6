pub mod animation;
pub mod config;
pub mod constants;
pub mod curve;
pub mod error;
pub mod interpolate;
pub mod random;
pub mod render;

pub use animation::*;
pub use config::*;
pub use constants::*;
pub use curve::*;
pub use error::{CurveError, Result};
pub use interpolate::*;
pub use random::*;
pub use render::*;
