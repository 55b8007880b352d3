//! Common time types and shared traits

use serde::{Deserialize, Serialize};
use std::fmt;

/// Duration in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Duration(u64);

impl Duration {
    /// Zero duration constant
    pub const ZERO: Self = Self(0);

    /// Creates a duration from milliseconds
    pub fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    /// Creates a duration from seconds
    pub fn from_seconds(seconds: u64) -> Self {
        Self(seconds * 1000)
    }

    /// Returns the duration in milliseconds
    pub fn as_millis(&self) -> u64 {
        self.0
    }

    /// Returns the duration in seconds
    pub fn as_seconds(&self) -> u64 {
        self.0 / 1000
    }

    /// Returns true if the duration is zero
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Adds another duration, saturating at u64::MAX
    pub fn saturating_add(&self, other: Duration) -> Duration {
        Self(self.0.saturating_add(other.0))
    }

    /// Subtracts another duration, returning None on underflow
    pub fn checked_sub(&self, other: Duration) -> Option<Duration> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Formats as MM:SS, zero-padded. Minutes may exceed 59 for long
    /// tracks; this matches the transport display convention.
    pub fn as_mmss(&self) -> String {
        let minutes = self.0 / 60_000;
        let seconds = (self.0 % 60_000) / 1000;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_mmss())
    }
}

impl From<std::time::Duration> for Duration {
    fn from(d: std::time::Duration) -> Self {
        Self(d.as_millis() as u64)
    }
}

/// Signed offset in milliseconds applied to a playback position
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct SeekDelta(i64);

impl SeekDelta {
    /// Creates a delta from milliseconds
    pub fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Creates a delta from seconds
    pub fn from_seconds(seconds: i64) -> Self {
        Self(seconds * 1000)
    }

    /// Returns the delta in milliseconds
    pub fn as_millis(&self) -> i64 {
        self.0
    }

    /// Applies this delta to a position. Returns None when the result
    /// would be negative; range-checking against a duration is the
    /// caller's job.
    pub fn apply(&self, position: Duration) -> Option<Duration> {
        let candidate = position.as_millis() as i64 + self.0;
        if candidate < 0 {
            None
        } else {
            Some(Duration::from_millis(candidate as u64))
        }
    }
}

/// Trait for types that can validate themselves
pub trait Validator {
    /// Validates the instance and returns errors if invalid
    fn validate(&self) -> Result<(), Vec<String>>;

    /// Returns true if the instance is valid
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}
