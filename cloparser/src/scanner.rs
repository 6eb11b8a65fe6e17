//! Positional per-option scanner over command-line tokens

use tracing::{debug, trace};

use crate::{
    spelling::Spellings,
    types::{MatchOutcome, ScanConfig},
    value::OptionValue,
};

/// A cursor over command-line tokens that options are probed against
///
/// The scanner is meant to be driven by a loop that, for the token under the
/// cursor, probes every known option in turn. A probe that does not match
/// leaves the cursor where it was, so the next option sees the same token.
/// A probe that consumes a separate value token leaves the cursor on that
/// value; in every other case the cursor stays on the option token. Stepping
/// past the token is the caller's job ([`advance`](Self::advance)).
///
/// Three token shapes are recognized:
///
/// - presence flags: `-v`, `--verbose` (exact match only)
/// - combined values: `-n5` (only for keywords of at most
///   [`ScanConfig::short_keyword_len`] bytes)
/// - separate values: `-n 5`, `--count 5`
///
/// # Examples
///
/// ```
/// use cloparser::OptionScanner;
///
/// let args: Vec<String> = ["-v", "-n", "5", "-ofile.txt", "extra"]
///     .iter()
///     .map(ToString::to_string)
///     .collect();
///
/// let mut scanner = OptionScanner::new(&args);
/// let mut verbose = false;
/// let mut count = 1u32;
/// let mut output = String::new();
/// let mut rest = Vec::new();
///
/// while !scanner.is_done() {
///     if scanner.flag("-v --verbose") {
///         verbose = true;
///     } else if scanner.value("-n --count", &mut count) {
///     } else if scanner.value("-o --output", &mut output) {
///     } else if let Some(token) = scanner.current() {
///         rest.push(token.to_string());
///     }
///     scanner.advance();
/// }
///
/// assert!(verbose);
/// assert_eq!(count, 5);
/// assert_eq!(output, "file.txt");
/// assert_eq!(rest, vec!["extra"]);
/// ```
#[derive(Debug, Clone)]
pub struct OptionScanner<'a> {
    args: &'a [String],
    cursor: usize,
    config: ScanConfig,
}

impl<'a> OptionScanner<'a> {
    /// Create a scanner positioned on the first token
    #[must_use]
    pub fn new(args: &'a [String]) -> Self {
        Self::with_config(args, ScanConfig::default())
    }

    /// Create a scanner with a custom configuration
    #[must_use]
    pub fn with_config(args: &'a [String], config: ScanConfig) -> Self {
        Self {
            args,
            cursor: 0,
            config,
        }
    }

    /// Create a scanner positioned on `position`
    ///
    /// Commonly `1`, to skip the program name in `std::env::args()`.
    /// Positions past the end are clamped to the end.
    #[must_use]
    pub fn starting_at(args: &'a [String], position: usize) -> Self {
        let mut scanner = Self::new(args);
        scanner.set_position(position);
        scanner
    }

    /// The scanner's configuration
    #[must_use]
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Index of the token under the cursor
    #[must_use]
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Move the cursor, clamping to the end of the tokens
    pub fn set_position(&mut self, position: usize) {
        self.cursor = position.min(self.args.len());
    }

    /// Number of tokens being scanned
    #[must_use]
    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// Whether there are no tokens at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Whether the cursor has run past the last token
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.cursor >= self.args.len()
    }

    /// The token under the cursor
    #[must_use]
    pub fn current(&self) -> Option<&'a str> {
        self.args.get(self.cursor).map(String::as_str)
    }

    /// The tokens from the cursor on
    #[must_use]
    pub fn remaining(&self) -> &'a [String] {
        &self.args[self.cursor..]
    }

    /// Step past the token under the cursor
    ///
    /// Returns `false` if the cursor was already at the end.
    pub fn advance(&mut self) -> bool {
        if self.is_done() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Probe the current token against one option
    ///
    /// `spellings` is a space-separated list of accepted keywords, tried in
    /// order. Passing no `slot` makes this a presence flag. With a slot, a
    /// value is captured either glued to a short keyword or from the next
    /// token; `value_optional` decides whether a missing or unconvertible
    /// separate value still counts as a match.
    ///
    /// The slot is only written when a value was converted. On a miss the
    /// cursor is back where it started.
    ///
    /// # Examples
    ///
    /// ```
    /// use cloparser::OptionScanner;
    ///
    /// let args = vec!["-a".to_string(), "5".to_string()];
    /// let mut scanner = OptionScanner::new(&args);
    /// let mut abbrev = 0i32;
    ///
    /// assert!(scanner.get_option("-a -abbrev", Some(&mut abbrev), false));
    /// assert_eq!(abbrev, 5);
    /// // The cursor rests on the consumed value
    /// assert_eq!(scanner.position(), 1);
    /// ```
    pub fn get_option<T: OptionValue>(
        &mut self,
        spellings: &str,
        slot: Option<&mut T>,
        value_optional: bool,
    ) -> bool {
        self.probe(spellings, slot).is_match(value_optional)
    }

    /// Shorthand for [`get_option`](Self::get_option)
    pub fn get<T: OptionValue>(
        &mut self,
        spellings: &str,
        slot: Option<&mut T>,
        value_optional: bool,
    ) -> bool {
        self.get_option(spellings, slot, value_optional)
    }

    /// Probe a presence-only flag
    pub fn flag(&mut self, spellings: &str) -> bool {
        self.get_option::<String>(spellings, None, false)
    }

    /// Probe an option whose value is required
    pub fn value<T: OptionValue>(&mut self, spellings: &str, slot: &mut T) -> bool {
        self.get_option(spellings, Some(slot), false)
    }

    /// Probe an option whose value may be left out
    ///
    /// A trailing keyword, or one followed by a token that is not a value of
    /// the slot's type, still matches and leaves the slot untouched.
    pub fn optional_value<T: OptionValue>(&mut self, spellings: &str, slot: &mut T) -> bool {
        self.get_option(spellings, Some(slot), true)
    }

    /// Probe the current token and report what was found
    ///
    /// This is the algorithm behind every other probe. The cursor is placed
    /// exactly as [`get_option`](Self::get_option) would place it; whether
    /// the outcome counts as a match is decided by
    /// [`MatchOutcome::is_match`].
    pub fn probe<T: OptionValue>(&mut self, spellings: &str, slot: Option<&mut T>) -> MatchOutcome {
        let Some(arg) = self.current() else {
            trace!(spellings, "no token left to probe");
            return MatchOutcome::NoMatch;
        };
        let outcome = match slot {
            None => Self::probe_flag(arg, spellings),
            Some(slot) => self.probe_value(arg, spellings, slot),
        };
        trace!(arg, spellings, ?outcome, position = self.cursor, "probed option");
        outcome
    }

    fn probe_flag(arg: &str, spellings: &str) -> MatchOutcome {
        // Exact match only: a flag never absorbs trailing characters
        Spellings::new(spellings)
            .find(|keyword| arg == *keyword)
            .map_or(MatchOutcome::NoMatch, |keyword| {
                debug!(keyword, "matched flag");
                MatchOutcome::Flag {
                    keyword: keyword.to_string(),
                }
            })
    }

    fn probe_value<T: OptionValue>(
        &mut self,
        arg: &'a str,
        spellings: &str,
        slot: &mut T,
    ) -> MatchOutcome {
        for keyword in Spellings::new(spellings) {
            let matched = if Spellings::is_short(keyword, &self.config) {
                arg.starts_with(keyword)
            } else {
                arg == keyword
            };
            if !matched {
                continue;
            }

            let combined = keyword.len() < arg.len();
            let text = if combined {
                &arg[keyword.len()..]
            } else if let Some(next) = self.args.get(self.cursor + 1) {
                self.cursor += 1;
                next.as_str()
            } else {
                debug!(keyword, "option value missing at end of arguments");
                return MatchOutcome::MissingValue {
                    keyword: keyword.to_string(),
                };
            };

            let Some(value) = T::from_option_text(text) else {
                if !combined {
                    // Hand the value token back to the next probe
                    self.cursor -= 1;
                }
                debug!(keyword, text, combined, "option value did not convert");
                return MatchOutcome::UnparseableValue {
                    keyword: keyword.to_string(),
                    text: text.to_string(),
                    combined,
                };
            };

            *slot = value;
            debug!(keyword, text, combined, "captured option value");
            return MatchOutcome::Value {
                keyword: keyword.to_string(),
                combined,
            };
        }
        MatchOutcome::NoMatch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_combined_value() {
        let args = args(&["-a5"]);
        let mut scanner = OptionScanner::new(&args);
        let mut value = 0i32;

        assert!(scanner.get_option("-a -abbrev", Some(&mut value), false));
        assert_eq!(value, 5);
        assert_eq!(scanner.position(), 0);
    }

    #[test]
    fn test_separate_value() {
        let args = args(&["-a", "5"]);
        let mut scanner = OptionScanner::new(&args);
        let mut value = 0i32;

        assert!(scanner.get_option("-a -abbrev", Some(&mut value), false));
        assert_eq!(value, 5);
        assert_eq!(scanner.position(), 1);
        assert!(scanner.advance());
        assert_eq!(scanner.position(), 2);
        assert!(scanner.is_done());
    }

    #[test]
    fn test_long_spelling_takes_separate_value() {
        let args = args(&["-abbrev", "7"]);
        let mut scanner = OptionScanner::new(&args);
        let mut value = 0i32;

        assert!(scanner.value("-a -abbrev", &mut value));
        assert_eq!(value, 7);
        assert_eq!(scanner.position(), 1);
    }

    #[test]
    fn test_short_spelling_shadows_longer_one_with_value() {
        // "-a" is tried first and, being short, swallows "bbrev" as its value
        let args = args(&["-abbrev", "7"]);
        let mut scanner = OptionScanner::new(&args);
        let mut value = String::new();

        assert!(scanner.value("-a -abbrev", &mut value));
        assert_eq!(value, "bbrev");
        assert_eq!(scanner.position(), 0);
    }

    #[test]
    fn test_long_keyword_is_exact_with_value() {
        let args = args(&["--count5"]);
        let mut scanner = OptionScanner::new(&args);
        let mut value = 0u32;

        assert!(!scanner.value("--count", &mut value));
        assert_eq!(value, 0);
        assert_eq!(scanner.position(), 0);
    }

    #[test]
    fn test_dangling_optional_value() {
        let args = args(&["-a"]);
        let mut scanner = OptionScanner::new(&args);
        let mut value = 42i32;

        assert!(scanner.get_option("-a", Some(&mut value), true));
        assert_eq!(value, 42);
        assert_eq!(scanner.position(), 0);
    }

    #[test]
    fn test_dangling_required_value() {
        let args = args(&["-x", "-a"]);
        let mut scanner = OptionScanner::starting_at(&args, 1);
        let mut value = 42i32;

        assert_eq!(
            scanner.probe("-a", Some(&mut value)),
            MatchOutcome::MissingValue {
                keyword: "-a".to_string()
            }
        );
        assert!(!scanner.value("-a", &mut value));
        assert_eq!(value, 42);
        assert_eq!(scanner.position(), 1);
    }

    #[test]
    fn test_presence_flag() {
        let args = args(&["-a"]);
        let mut scanner = OptionScanner::new(&args);

        assert!(scanner.get_option::<i32>("-a", None, false));
        assert_eq!(scanner.position(), 0);
    }

    #[test]
    fn test_flag_rejects_trailing_characters() {
        let args = args(&["-ab"]);
        let mut scanner = OptionScanner::new(&args);

        assert!(!scanner.flag("-a"));
        assert_eq!(scanner.position(), 0);
    }

    #[test]
    fn test_unparseable_separate_value() {
        let args = args(&["-a", "notanumber"]);
        let mut scanner = OptionScanner::new(&args);
        let mut value = 3i32;

        assert!(!scanner.get_option("-a", Some(&mut value), false));
        assert_eq!(value, 3);
        assert_eq!(scanner.position(), 0);

        // Optional: the keyword still matches, the token is left for others
        assert!(scanner.get_option("-a", Some(&mut value), true));
        assert_eq!(value, 3);
        assert_eq!(scanner.position(), 0);
    }

    #[test]
    fn test_unparseable_combined_value_never_matches() {
        let args = args(&["-ax"]);
        let mut scanner = OptionScanner::new(&args);
        let mut value = 3i32;

        assert!(!scanner.get_option("-a", Some(&mut value), true));
        assert_eq!(value, 3);
        assert_eq!(scanner.position(), 0);
    }

    #[test]
    fn test_non_matching_probe_is_a_no_op() {
        let args = args(&["--other", "1"]);
        let mut scanner = OptionScanner::new(&args);
        let mut value = 9u8;

        for _ in 0..3 {
            assert!(!scanner.value("-a --all", &mut value));
            assert!(!scanner.optional_value("-a --all", &mut value));
            assert!(!scanner.flag("-a --all"));
        }
        assert_eq!(value, 9);
        assert_eq!(scanner.position(), 0);
    }

    #[test]
    fn test_end_of_input_is_not_an_error() {
        let args = args(&["-a"]);
        let mut scanner = OptionScanner::starting_at(&args, 5);
        assert_eq!(scanner.position(), 1);
        assert!(scanner.is_done());
        assert!(!scanner.flag("-a"));
        assert!(!scanner.advance());
        assert_eq!(scanner.position(), 1);
    }

    #[test]
    fn test_string_value_is_verbatim() {
        let args = args(&["-o", "-5"]);
        let mut scanner = OptionScanner::new(&args);
        let mut out = PathBuf::new();

        assert!(scanner.value("-o --output", &mut out));
        assert_eq!(out, PathBuf::from("-5"));
    }

    #[test]
    fn test_first_matching_spelling_wins() {
        let args = args(&["-v"]);
        let mut scanner = OptionScanner::new(&args);
        let outcome = scanner.probe::<String>("--verbose -v -v", None);
        assert_eq!(
            outcome,
            MatchOutcome::Flag {
                keyword: "-v".to_string()
            }
        );
    }

    #[test]
    fn test_remaining() {
        let args = args(&["-a", "1", "rest"]);
        let mut scanner = OptionScanner::new(&args);
        let mut value = 0u8;
        assert!(scanner.value("-a", &mut value));
        scanner.advance();
        assert_eq!(scanner.remaining(), &["rest".to_string()]);
    }

    #[test]
    fn test_scanner_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<OptionScanner<'static>>();
    }
}
