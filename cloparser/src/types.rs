//! Type definitions shared by the option scanner

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::CloError;

/// Default length up to which a keyword is "short"
pub const DEFAULT_SHORT_KEYWORD_LEN: usize = 2;

/// Tuning knobs for [`OptionScanner`](crate::OptionScanner)
///
/// # Examples
///
/// ```
/// use cloparser::{OptionScanner, ScanConfig};
///
/// let args = vec!["-jobs4".to_string()];
/// let config = ScanConfig::default().with_short_keyword_len(5);
/// let mut scanner = OptionScanner::with_config(&args, config);
///
/// let mut jobs = 0u32;
/// assert!(scanner.value("-jobs", &mut jobs));
/// assert_eq!(jobs, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScanConfig {
    /// Keywords of at most this many bytes accept a value glued to them
    /// (`-n5`) when the probe carries a value slot
    pub short_keyword_len: usize,
}

impl ScanConfig {
    /// Set the short keyword length
    #[must_use]
    pub fn with_short_keyword_len(mut self, len: usize) -> Self {
        self.short_keyword_len = len;
        self
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            short_keyword_len: DEFAULT_SHORT_KEYWORD_LEN,
        }
    }
}

/// What a single probe found at the cursor
///
/// Returned by [`OptionScanner::probe`](crate::OptionScanner::probe). The
/// cursor has already been placed according to the variant when this is
/// returned; the variant only tells the caller why.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MatchOutcome {
    /// No spelling matched the current token
    NoMatch,
    /// A presence-only flag matched
    Flag {
        /// The spelling that matched
        keyword: String,
    },
    /// A value was converted and stored in the slot
    Value {
        /// The spelling that matched
        keyword: String,
        /// Whether the value was glued to the keyword in one token
        combined: bool,
    },
    /// The keyword matched but no token followed it
    MissingValue {
        /// The spelling that matched
        keyword: String,
    },
    /// The value text did not convert to the slot's type
    UnparseableValue {
        /// The spelling that matched
        keyword: String,
        /// The text that failed to convert
        text: String,
        /// Whether the text was glued to the keyword in one token
        combined: bool,
    },
}

impl MatchOutcome {
    /// Whether this outcome counts as a match
    ///
    /// A missing value, or an unparseable value in its own token, is still a
    /// match when the option declared its value optional. A glued value that
    /// does not convert never is.
    #[must_use]
    pub fn is_match(&self, value_optional: bool) -> bool {
        match self {
            Self::NoMatch => false,
            Self::Flag { .. } | Self::Value { .. } => true,
            Self::MissingValue { .. } => value_optional,
            Self::UnparseableValue { combined, .. } => !combined && value_optional,
        }
    }

    /// Whether a value was written into the slot
    #[must_use]
    pub fn has_value(&self) -> bool {
        matches!(self, Self::Value { .. })
    }

    /// The spelling that matched, if any did
    #[must_use]
    pub fn keyword(&self) -> Option<&str> {
        match self {
            Self::NoMatch => None,
            Self::Flag { keyword }
            | Self::Value { keyword, .. }
            | Self::MissingValue { keyword }
            | Self::UnparseableValue { keyword, .. } => Some(keyword),
        }
    }

    /// Turn a failed value capture into the matching error
    ///
    /// Returns `None` for outcomes that carry no value problem.
    #[must_use]
    pub fn value_error(&self) -> Option<CloError> {
        match self {
            Self::MissingValue { keyword } => Some(CloError::MissingValue(keyword.clone())),
            Self::UnparseableValue { keyword, text, .. } => Some(CloError::InvalidValue {
                keyword: keyword.clone(),
                text: text.clone(),
            }),
            Self::NoMatch | Self::Flag { .. } | Self::Value { .. } => None,
        }
    }
}
