//! Fitness evaluation
//!
//! This module provides the fitness abstraction and the prefix-match
//! evaluator.

pub mod prefix;
pub mod traits;

pub mod prelude {
    pub use super::prefix::*;
    pub use super::traits::*;
}
