//! Evolutionary algorithms
//!
//! This module provides the generational genetic search.

pub mod genetic_search;

pub mod prelude {
    pub use super::genetic_search::*;
}
