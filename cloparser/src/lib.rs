#![deny(
    unsafe_code,
    unused_must_use,
    unreachable_pub,
    rust_2018_idioms,
    missing_docs,
    clippy::pedantic
)]

//! Positional Command-Line Option Scanner
//!
//! This crate provides a small scanner that recognizes one option at a time
//! at a shared cursor over command-line tokens. Each option is described by a
//! space-separated list of spellings (`"-n --count"`) and optionally a typed
//! slot that receives its value.
//!
//! # Features
//!
//! - **Presence flags**: `-v`, `--verbose`, matched exactly
//! - **Combined values**: `-n5`, `-ofile.txt` for short keywords
//! - **Separate values**: `-n 5`, `--count 5`
//! - **Optional values**: a trailing keyword, or one followed by a token of
//!   the wrong type, can still match without capturing anything
//! - **Typed slots**: any primitive, strings, paths, [`SemanticVersion`], or
//!   your own types through [`OptionValue`]
//! - **Cursor safety**: a probe that does not match never moves the cursor
//! - **Helpers**: [`split_words`], [`NonZeroList`], [`check_io_status`],
//!   [`round_to_i64`]
//!
//! # Examples
//!
//! ## Probing Loop
//!
//! ```
//! use cloparser::OptionScanner;
//!
//! let args: Vec<String> = ["prog", "-j4", "--level", "2", "--dry-run", "input.mzn"]
//!     .iter()
//!     .map(ToString::to_string)
//!     .collect();
//!
//! let mut jobs = 1u32;
//! let mut level = 0u8;
//! let mut dry_run = false;
//! let mut files = Vec::new();
//!
//! let mut scanner = OptionScanner::starting_at(&args, 1);
//! while let Some(token) = scanner.current() {
//!     if scanner.value("-j --jobs", &mut jobs) {
//!     } else if scanner.value("-l --level", &mut level) {
//!     } else if scanner.flag("--dry-run") {
//!         dry_run = true;
//!     } else {
//!         files.push(token.to_string());
//!     }
//!     scanner.advance();
//! }
//!
//! assert_eq!(jobs, 4);
//! assert_eq!(level, 2);
//! assert!(dry_run);
//! assert_eq!(files, vec!["input.mzn"]);
//! ```
//!
//! ## Finding Out Why a Probe Missed
//!
//! ```
//! use cloparser::{CloError, OptionScanner};
//!
//! let args = vec!["--count".to_string(), "many".to_string()];
//! let mut scanner = OptionScanner::new(&args);
//! let mut count = 0u32;
//!
//! let outcome = scanner.probe("-c --count", Some(&mut count));
//! assert!(!outcome.is_match(false));
//! assert!(matches!(outcome.value_error(), Some(CloError::InvalidValue { .. })));
//! assert_eq!(scanner.position(), 0);
//! ```

mod errors;
mod io_status;
mod list_format;
#[cfg(feature = "logging")]
pub mod logger;
mod numeric;
mod scanner;
mod spelling;
mod types;
mod value;
mod version;
mod words;

pub use errors::{CloError, CloResult};
pub use io_status::check_io_status;
pub use list_format::{IsZero, NonZeroList};
pub use numeric::round_to_i64;
pub use scanner::OptionScanner;
pub use spelling::Spellings;
pub use types::{DEFAULT_SHORT_KEYWORD_LEN, MatchOutcome, ScanConfig};
pub use value::OptionValue;
pub use version::SemanticVersion;
pub use words::{append_words, split_words};
