//! Conversion of option value text into typed slots

use std::ffi::OsString;
use std::path::PathBuf;

/// A type an option value can be stored as
///
/// String-like types take the value text verbatim and never fail. Everything
/// else goes through the type's standard textual conversion.
///
/// # Examples
///
/// ```
/// use cloparser::OptionValue;
///
/// assert_eq!(u16::from_option_text("8080"), Some(8080));
/// assert_eq!(u16::from_option_text("80x"), None);
/// assert_eq!(String::from_option_text(" as is "), Some(" as is ".to_string()));
/// ```
pub trait OptionValue: Sized {
    /// Convert value text, or `None` if it is not a value of this type
    fn from_option_text(text: &str) -> Option<Self>;
}

impl OptionValue for String {
    fn from_option_text(text: &str) -> Option<Self> {
        Some(text.to_string())
    }
}

impl OptionValue for PathBuf {
    fn from_option_text(text: &str) -> Option<Self> {
        Some(PathBuf::from(text))
    }
}

impl OptionValue for OsString {
    fn from_option_text(text: &str) -> Option<Self> {
        Some(OsString::from(text))
    }
}

/// Accepts `true`/`false` and `1`/`0`, ignoring case
///
/// This is wider than `bool::from_str`, which only takes lowercase
/// `true`/`false`, so that numeric switches like `--color 0` also convert.
impl OptionValue for bool {
    fn from_option_text(text: &str) -> Option<Self> {
        match text.to_lowercase().as_str() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        }
    }
}

/// A slot that records whether a value was captured at all
impl<T: OptionValue> OptionValue for Option<T> {
    fn from_option_text(text: &str) -> Option<Self> {
        T::from_option_text(text).map(Some)
    }
}

macro_rules! impl_option_value_from_str {
    ($($t:ty),* $(,)?) => {
        $(
            impl OptionValue for $t {
                fn from_option_text(text: &str) -> Option<Self> {
                    text.parse().ok()
                }
            }
        )*
    };
}

impl_option_value_from_str!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char,
);
