//! Space-separated option spellings

use std::str::SplitWhitespace;

use crate::types::ScanConfig;

/// The accepted spellings of one option, e.g. `"-n --count"`
///
/// Spellings are tried in the order they are written.
///
/// # Examples
///
/// ```
/// use cloparser::Spellings;
///
/// let keywords: Vec<&str> = Spellings::new("-n  --count").collect();
/// assert_eq!(keywords, vec!["-n", "--count"]);
/// ```
#[derive(Debug, Clone)]
pub struct Spellings<'s> {
    words: SplitWhitespace<'s>,
}

impl<'s> Spellings<'s> {
    /// Split a spelling list into keywords
    ///
    /// Lists must not contain `,` or `;`; this is only checked in debug builds.
    #[must_use]
    pub fn new(list: &'s str) -> Self {
        debug_assert!(
            !list.contains(','),
            "spelling list '{list}' must be space-separated, found ','"
        );
        debug_assert!(
            !list.contains(';'),
            "spelling list '{list}' must be space-separated, found ';'"
        );
        Self {
            words: list.split_whitespace(),
        }
    }

    /// Whether `keyword` is short enough to take a glued value
    #[must_use]
    pub fn is_short(keyword: &str, config: &ScanConfig) -> bool {
        keyword.len() <= config.short_keyword_len
    }
}

impl<'s> Iterator for Spellings<'s> {
    type Item = &'s str;

    fn next(&mut self) -> Option<Self::Item> {
        self.words.next()
    }
}
