//! Three-component semantic versions

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    errors::{CloError, CloResult},
    value::OptionValue,
};

/// A `major.minor.patch` version
///
/// Ordering compares `major`, then `minor`, then `patch`.
///
/// Parsing is lenient: a leading `.` reads as `0.`, a trailing `.` as `.0`,
/// missing components are zero and anything after the last well-formed
/// component is ignored. Only input without a leading number is rejected.
///
/// # Examples
///
/// ```
/// use cloparser::SemanticVersion;
///
/// let v: SemanticVersion = "2.6".parse()?;
/// assert_eq!(v, SemanticVersion::new(2, 6, 0));
/// assert!(v < "2.10.1".parse::<SemanticVersion>()?);
/// assert_eq!(".5.".parse::<SemanticVersion>()?.to_string(), "0.5.0");
/// # Ok::<(), cloparser::CloError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SemanticVersion {
    /// Major version
    pub major: u32,
    /// Minor version
    pub minor: u32,
    /// Patch version
    pub patch: u32,
}

impl SemanticVersion {
    /// Create a version from its components
    #[must_use]
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl FromStr for SemanticVersion {
    type Err = CloError;

    fn from_str(s: &str) -> CloResult<Self> {
        let mut text = s.trim().to_string();
        if text.is_empty() {
            return Err(CloError::InvalidVersion(s.to_string()));
        }
        if text.starts_with('.') {
            text.insert(0, '0');
        }
        if text.ends_with('.') {
            text.push('0');
        }

        let mut components = [0u32; 3];
        let mut rest = text.as_str();
        for (i, component) in components.iter_mut().enumerate() {
            if i > 0 {
                match rest.strip_prefix('.') {
                    Some(after_dot) => rest = after_dot,
                    None => break,
                }
            }
            let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
            if digits == 0 {
                if i == 0 {
                    return Err(CloError::InvalidVersion(s.to_string()));
                }
                break;
            }
            *component = rest[..digits]
                .parse()
                .map_err(|_| CloError::InvalidVersion(s.to_string()))?;
            rest = &rest[digits..];
        }

        let [major, minor, patch] = components;
        Ok(Self::new(major, minor, patch))
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl OptionValue for SemanticVersion {
    fn from_option_text(text: &str) -> Option<Self> {
        text.parse().ok()
    }
}
