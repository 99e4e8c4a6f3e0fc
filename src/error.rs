//! Error types for the freqlist library.
//!
//! Lookups never fail: absence is `None`. The only error surfaced by the
//! crate is [`InvariantError`], returned by `check_invariants` when the
//! internal chain is inconsistent.
//!
//! ## Example Usage
//!
//! ```
//! use freqlist::SelfOrganizingMap;
//!
//! let mut map = SelfOrganizingMap::new();
//! map.set("a", 1);
//! map.set("b", 2);
//! assert!(map.check_invariants().is_ok());
//! ```

use std::fmt;

/// Error returned when internal container invariants are violated.
///
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invariant_display_shows_message() {
        let err = InvariantError::new("count mismatch");
        assert_eq!(err.to_string(), "count mismatch");
    }

    #[test]
    fn invariant_debug_includes_message() {
        let err = InvariantError::new("cycle detected");
        let dbg = format!("{:?}", err);
        assert!(dbg.contains("cycle detected"));
    }

    #[test]
    fn invariant_message_accessor() {
        let err = InvariantError::new("test");
        assert_eq!(err.message(), "test");
    }

    #[test]
    fn invariant_clone_and_eq() {
        let a = InvariantError::new("x");
        let b = a.clone();
        assert_eq!(a, b);
    }

    #[test]
    fn invariant_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<InvariantError>();
    }
}
