//! Four-component version numbers as used by EasiCamera install directories
//!
//! Install directories carry versions like `3.1.2.0`. Ordering must be
//! numeric per component, not lexicographic, so that `10.0.0.0` sorts after
//! `9.0.0.0`.

use std::fmt;
use std::str::FromStr;

use crate::error::{LauncherError, Result};

/// Number of dot-separated components a version must have
const COMPONENT_COUNT: usize = 4;

/// A dotted four-component version number, ordered component-wise
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionNumber([u32; COMPONENT_COUNT]);

impl VersionNumber {
    /// Construct from explicit components (used by tests and fixtures)
    pub fn new(components: [u32; COMPONENT_COUNT]) -> Self {
        Self(components)
    }

    /// The version's components, newest-significant first
    pub fn components(&self) -> &[u32; COMPONENT_COUNT] {
        &self.0
    }
}

impl FromStr for VersionNumber {
    type Err = LauncherError;

    /// Parse a dotted version string, failing fast on wrong arity or
    /// non-numeric components rather than truncating.
    fn from_str(input: &str) -> Result<Self> {
        let parts: Vec<&str> = input.split('.').collect();
        if parts.len() != COMPONENT_COUNT {
            return Err(LauncherError::VersionParse {
                input: input.to_string(),
                reason: format!(
                    "expected {} components, found {}",
                    COMPONENT_COUNT,
                    parts.len()
                ),
            });
        }

        let mut components = [0u32; COMPONENT_COUNT];
        for (slot, part) in components.iter_mut().zip(&parts) {
            *slot = part.parse().map_err(|_| LauncherError::VersionParse {
                input: input.to_string(),
                reason: format!("component '{part}' is not a non-negative integer"),
            })?;
        }

        Ok(Self(components))
    }
}

impl fmt::Display for VersionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "{a}.{b}.{c}.{d}")
    }
}
