//! Comma-separated listing of non-zero values

use std::fmt::{Display, Write};

/// Values that can be "zero", and so skipped by [`NonZeroList`]
pub trait IsZero {
    /// Whether this value should be left out of the list
    fn is_zero(&self) -> bool;
}

macro_rules! impl_is_zero {
    ($($t:ty),* $(,)?) => {
        $(
            impl IsZero for $t {
                fn is_zero(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

impl_is_zero!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl IsZero for f32 {
    fn is_zero(&self) -> bool {
        *self == 0.0
    }
}

impl IsZero for f64 {
    fn is_zero(&self) -> bool {
        *self == 0.0
    }
}

impl IsZero for bool {
    fn is_zero(&self) -> bool {
        !*self
    }
}

/// Formats non-zero values, prefixing every one after the first with `", "`
///
/// # Examples
///
/// ```
/// use cloparser::NonZeroList;
///
/// let mut list = NonZeroList::new();
/// let line: String = [
///     list.item(3, Some(" matched")),
///     list.item(0, Some(" skipped")),
///     list.item(1, Some(" unrecognized")),
/// ]
/// .concat();
///
/// assert_eq!(line, "3 matched, 1 unrecognized");
/// assert!(list.had_one());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NonZeroList {
    had_one: bool,
}

impl NonZeroList {
    /// Create an empty list
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Format `value` (followed by `descr`), or nothing if it is zero
    pub fn item<N: Display + IsZero>(&mut self, value: N, descr: Option<&str>) -> String {
        let mut out = String::new();
        if value.is_zero() {
            return out;
        }
        if self.had_one {
            out.push_str(", ");
        }
        self.had_one = true;
        let _ = write!(out, "{value}");
        if let Some(descr) = descr {
            out.push_str(descr);
        }
        out
    }

    /// Forget that anything was printed
    pub fn reset(&mut self) {
        self.had_one = false;
    }

    /// Whether a value has been printed since creation or the last reset
    #[must_use]
    pub fn had_one(&self) -> bool {
        self.had_one
    }
}
