//! Genome abstractions and implementations
//!
//! This module provides the symbol sequence genome along with the alphabet
//! it is drawn from and the target it is evolved toward.

pub mod alphabet;
pub mod sequence;
pub mod target;
pub mod traits;

pub mod prelude {
    pub use super::alphabet::*;
    pub use super::sequence::*;
    pub use super::target::*;
    pub use super::traits::*;
}
