//! Option definitions the tool probes tokens against

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use cloparser::{MatchOutcome, OptionScanner, OptionValue, SemanticVersion, Spellings};

use crate::errors::{CliError, CliResult};

/// The type of value an option takes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Presence-only flag
    Flag,
    /// Verbatim text
    String,
    /// Signed integer
    Int,
    /// Unsigned integer
    UInt,
    /// Floating point number
    Float,
    /// `true`/`false`/`1`/`0`
    Bool,
    /// `major.minor.patch`
    Version,
}

impl ValueKind {
    /// Convert the kind to a string
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Flag => "flag",
            Self::String => "string",
            Self::Int => "int",
            Self::UInt => "uint",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Version => "version",
        }
    }
}

impl FromStr for ValueKind {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "flag" => Ok(Self::Flag),
            "string" | "str" | "text" => Ok(Self::String),
            "int" | "integer" => Ok(Self::Int),
            "uint" | "unsigned" => Ok(Self::UInt),
            "float" | "double" => Ok(Self::Float),
            "bool" | "boolean" => Ok(Self::Bool),
            "version" => Ok(Self::Version),
            _ => Err(CliError::UnknownKind(s.to_string())),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value captured for a matched option
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CapturedValue {
    /// Verbatim text, or a version in `major.minor.patch` form
    Text(String),
    /// Signed integer
    Int(i64),
    /// Unsigned integer
    UInt(u64),
    /// Floating point number
    Float(f64),
    /// Boolean
    Bool(bool),
}

impl fmt::Display for CapturedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "\"{s}\""),
            Self::Int(i) => write!(f, "{i}"),
            Self::UInt(u) => write!(f, "{u}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// One option: its name, accepted spellings and value kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSpec {
    /// Name used in reports
    pub name: String,
    /// Space-separated accepted spellings
    pub spellings: String,
    /// Type of the value, or `Flag`
    pub kind: ValueKind,
    /// Whether the value may be left out
    pub optional: bool,
}

impl OptionSpec {
    /// Create an option definition
    ///
    /// An empty `name` is derived from the longest spelling.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::InvalidOptionSpec`] if `spellings` has no keyword
    /// or separates keywords with `,` or `;` instead of spaces.
    pub fn new(name: &str, spellings: &str, kind: ValueKind, optional: bool) -> CliResult<Self> {
        if spellings.contains([',', ';']) || Spellings::new(spellings).next().is_none() {
            return Err(CliError::InvalidOptionSpec(spellings.to_string()));
        }
        let name = if name.is_empty() {
            default_name(spellings)
        } else {
            name.to_string()
        };
        Ok(Self {
            name,
            spellings: spellings.to_string(),
            kind,
            optional,
        })
    }

    /// Probe the scanner's current token against this option
    ///
    /// Returns the outcome and, if one was converted, the captured value.
    pub fn probe(&self, scanner: &mut OptionScanner<'_>) -> (MatchOutcome, Option<CapturedValue>) {
        let spellings = self.spellings.as_str();
        match self.kind {
            ValueKind::Flag => (scanner.probe::<String>(spellings, None), None),
            ValueKind::String => capture::<String>(scanner, spellings, CapturedValue::Text),
            ValueKind::Int => capture::<i64>(scanner, spellings, CapturedValue::Int),
            ValueKind::UInt => capture::<u64>(scanner, spellings, CapturedValue::UInt),
            ValueKind::Float => capture::<f64>(scanner, spellings, CapturedValue::Float),
            ValueKind::Bool => capture::<bool>(scanner, spellings, CapturedValue::Bool),
            ValueKind::Version => capture::<SemanticVersion>(scanner, spellings, |v| {
                CapturedValue::Text(v.to_string())
            }),
        }
    }
}

fn capture<T: OptionValue>(
    scanner: &mut OptionScanner<'_>,
    spellings: &str,
    wrap: impl FnOnce(T) -> CapturedValue,
) -> (MatchOutcome, Option<CapturedValue>) {
    let mut slot: Option<T> = None;
    let outcome = scanner.probe(spellings, Some(&mut slot));
    (outcome, slot.map(wrap))
}

fn default_name(spellings: &str) -> String {
    Spellings::new(spellings)
        .max_by_key(|keyword| keyword.len())
        .unwrap_or_default()
        .trim_start_matches('-')
        .to_string()
}

/// Inline definitions: `KIND:SPELLINGS`, or `KIND?:SPELLINGS` for an
/// optional value
impl FromStr for OptionSpec {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, spellings) = s
            .split_once(':')
            .ok_or_else(|| CliError::InvalidOptionSpec(s.to_string()))?;
        let (kind, optional) = match kind.strip_suffix('?') {
            Some(kind) => (kind, true),
            None => (kind, false),
        };
        let kind = kind.trim().parse::<ValueKind>()?;
        Self::new("", spellings, kind, optional)
            .map_err(|_| CliError::InvalidOptionSpec(s.to_string()))
    }
}
