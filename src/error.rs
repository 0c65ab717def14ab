//! Error types for the freqcache library.
//!
//! ## Key Components
//!
//! - [`InvariantError`]: Returned when internal data-structure invariants are
//!   violated (`check_invariants` methods, used as the test-suite oracle).
//! - [`ConfigError`]: Returned when cache configuration parameters are
//!   invalid (e.g. zero capacity passed to a fallible constructor).
//!
//! Ordinary cache misses are not errors; they are `None` results. A
//! violated invariant detected *inside* an operation is not reported through
//! these types either — it panics, because it means the cache itself is
//! defective. These types cover the two remaining cases: validating caller
//! configuration up front, and letting tests interrogate structural
//! consistency without aborting.
//!
//! ## Example Usage
//!
//! ```
//! use freqcache::capacity::Capacity;
//! use freqcache::error::ConfigError;
//!
//! let ok: Result<Capacity, ConfigError> = Capacity::try_bounded(100);
//! assert!(ok.is_ok());
//!
//! let bad = Capacity::try_bounded(0);
//! assert!(bad.is_err());
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal cache invariants are violated.
///
/// Produced by `check_invariants` methods on cache types (e.g.
/// [`LfuCache::check_invariants`](crate::policy::lfu::LfuCache::check_invariants)).
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

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when cache configuration parameters are invalid.
///
/// Produced by fallible constructors such as
/// [`Capacity::try_bounded`](crate::capacity::Capacity::try_bounded).
/// Carries a human-readable description of which parameter failed
/// validation.
///
/// # Example
///
/// ```
/// use freqcache::capacity::Capacity;
///
/// let err = Capacity::try_bounded(0).unwrap_err();
/// assert!(err.to_string().contains("capacity"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
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

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
