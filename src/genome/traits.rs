//! Core genome traits
//!
//! This module defines the `Symbol` trait shared by every gene type.

use std::fmt::{Debug, Display};

use serde::{de::DeserializeOwned, Serialize};

/// A single gene value
///
/// Genes must be comparable for scoring, displayable for diagnostics,
/// serializable for the diagnostic stream, and thread-safe. Any type that
/// satisfies the bounds is a `Symbol`.
pub trait Symbol:
    Clone + Eq + Debug + Display + Send + Sync + Serialize + DeserializeOwned + 'static
{
}

impl<T> Symbol for T where
    T: Clone + Eq + Debug + Display + Send + Sync + Serialize + DeserializeOwned + 'static
{
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_symbol<S: Symbol>(_: &S) {}

    #[test]
    fn test_primitive_symbols() {
        assert_symbol(&'a');
        assert_symbol(&7u8);
        assert_symbol(&"START".to_string());
    }
}
