//! Loader for YAML option spec files

use std::fs;
use std::io;
use std::path::Path;

use yaml_rust2::{Yaml, YamlLoader};

use cloparser::check_io_status;

use crate::{
    errors::{CliError, CliResult},
    option_spec::{OptionSpec, ValueKind},
};

/// Contents of an option spec file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanSpec {
    /// Overrides the scanner's short keyword length
    pub short_keyword_len: Option<usize>,
    /// Options in probing order
    pub options: Vec<OptionSpec>,
}

/// Parse a YAML option spec file
///
/// The expected structure is:
/// ```yaml
/// short_keyword_len: 2     # optional
/// options:
///   - name: count          # optional, derived from the spellings
///     spellings: "-n --count"
///     kind: int            # optional, defaults to flag
///     optional: false      # optional
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - The file doesn't exist or cannot be read
/// - The file cannot be parsed as YAML
/// - The YAML structure is invalid
pub fn parse_spec_file<P: AsRef<Path>>(path: P) -> CliResult<ScanSpec> {
    let path_ref = path.as_ref();

    let content = match fs::read_to_string(path_ref) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(CliError::SpecFileNotFound(path_ref.to_path_buf()));
        }
        result => {
            let context = format!("Failed to read option spec file '{}'", path_ref.display());
            check_io_status(result, &context, true)?.unwrap_or_default()
        }
    };

    let docs = YamlLoader::load_from_str(&content)
        .map_err(|e| CliError::SpecFileParseError(path_ref.to_path_buf(), e.to_string()))?;

    match docs.first() {
        Some(doc) => parse_yaml_spec(doc),
        None => Ok(ScanSpec::default()),
    }
}

fn parse_yaml_spec(doc: &Yaml) -> CliResult<ScanSpec> {
    let root = doc.as_hash().ok_or_else(|| {
        CliError::InvalidSpecStructure("Root element must be a mapping/hash".to_string())
    })?;

    let short_keyword_len = match root.get(&Yaml::String("short_keyword_len".to_string())) {
        None => None,
        Some(value) => {
            let len = value
                .as_i64()
                .and_then(|len| usize::try_from(len).ok())
                .ok_or_else(|| {
                    CliError::InvalidSpecStructure(
                        "short_keyword_len must be a non-negative integer".to_string(),
                    )
                })?;
            Some(len)
        }
    };

    let mut options = Vec::new();
    if let Some(entries) = root.get(&Yaml::String("options".to_string())) {
        let entries = entries.as_vec().ok_or_else(|| {
            CliError::InvalidSpecStructure("'options' must be a list".to_string())
        })?;
        for (index, entry) in entries.iter().enumerate() {
            options.push(parse_yaml_option(index, entry)?);
        }
    }

    Ok(ScanSpec {
        short_keyword_len,
        options,
    })
}

fn parse_yaml_option(index: usize, entry: &Yaml) -> CliResult<OptionSpec> {
    let spellings = entry["spellings"].as_str().ok_or_else(|| {
        CliError::InvalidSpecStructure(format!("Option #{index} must have string 'spellings'"))
    })?;

    let name = match &entry["name"] {
        Yaml::BadValue => "",
        value => value.as_str().ok_or_else(|| {
            CliError::InvalidSpecStructure(format!("Option #{index}: 'name' must be a string"))
        })?,
    };

    let kind = match &entry["kind"] {
        Yaml::BadValue => ValueKind::Flag,
        value => value
            .as_str()
            .ok_or_else(|| {
                CliError::InvalidSpecStructure(format!("Option #{index}: 'kind' must be a string"))
            })?
            .parse()?,
    };

    let optional = match &entry["optional"] {
        Yaml::BadValue => false,
        value => value.as_bool().ok_or_else(|| {
            CliError::InvalidSpecStructure(format!("Option #{index}: 'optional' must be a bool"))
        })?,
    };

    OptionSpec::new(name, spellings, kind, optional).map_err(|_| {
        CliError::InvalidSpecStructure(format!(
            "Option #{index}: 'spellings' must be space-separated keywords, got '{spellings}'"
        ))
    })
}
