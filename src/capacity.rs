//! Explicit cache capacity configuration.
//!
//! The reference cache overloaded a plain integer: `capacity <= 0` meant
//! "permanently disabled". [`Capacity`] makes the two states explicit while
//! preserving the observable behavior — a disabled cache accepts inserts
//! silently, stores nothing, and always misses.

use std::num::NonZeroUsize;

use crate::error::ConfigError;

/// Entry-count capacity of a cache instance.
///
/// `Disabled` caches never store anything; `Bounded` caches hold at most
/// the given number of entries and evict to stay within it.
///
/// # Example
///
/// ```
/// use freqcache::capacity::Capacity;
///
/// assert!(Capacity::new(0).is_disabled());
/// assert_eq!(Capacity::new(128).entry_limit(), 128);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capacity {
    /// The cache is permanently disabled: inserts are accepted and dropped.
    Disabled,
    /// The cache holds at most this many entries.
    Bounded(NonZeroUsize),
}

impl Capacity {
    /// Maps an entry count to a capacity; `0` yields [`Capacity::Disabled`].
    ///
    /// This mirrors the integer convention of the original interface, where
    /// a non-positive capacity disabled the cache without error.
    #[inline]
    pub fn new(capacity: usize) -> Self {
        match NonZeroUsize::new(capacity) {
            Some(n) => Capacity::Bounded(n),
            None => Capacity::Disabled,
        }
    }

    /// Builds a bounded capacity, rejecting `0` with a [`ConfigError`].
    ///
    /// For callers that consider a disabled cache a configuration mistake
    /// rather than a deliberate switch.
    ///
    /// # Example
    ///
    /// ```
    /// use freqcache::capacity::Capacity;
    ///
    /// assert!(Capacity::try_bounded(16).is_ok());
    /// assert!(Capacity::try_bounded(0).is_err());
    /// ```
    pub fn try_bounded(capacity: usize) -> Result<Self, ConfigError> {
        NonZeroUsize::new(capacity)
            .map(Capacity::Bounded)
            .ok_or_else(|| ConfigError::new("capacity must be > 0"))
    }

    /// Returns the maximum entry count; `0` for a disabled cache.
    #[inline]
    pub fn entry_limit(&self) -> usize {
        match self {
            Capacity::Disabled => 0,
            Capacity::Bounded(n) => n.get(),
        }
    }

    /// Returns `true` if the cache never stores entries.
    #[inline]
    pub fn is_disabled(&self) -> bool {
        matches!(self, Capacity::Disabled)
    }
}

impl From<usize> for Capacity {
    fn from(capacity: usize) -> Self {
        Capacity::new(capacity)
    }
}
