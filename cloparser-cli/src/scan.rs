//! The probing loop over user tokens

use serde::Serialize;
use tracing::{debug, warn};

use cloparser::{CloError, MatchOutcome, OptionScanner, ScanConfig};

use crate::{
    errors::CliResult,
    option_spec::{CapturedValue, OptionSpec},
};

/// An option recognized at some position
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchRecord {
    /// Index of the option token
    pub position: usize,
    /// Name of the option that matched
    pub option: String,
    /// Spelling that matched
    pub keyword: String,
    /// Captured value, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<CapturedValue>,
    /// Whether the value was glued to the keyword
    pub combined: bool,
}

/// A token no option accepted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Unrecognized {
    /// Index of the token
    pub position: usize,
    /// The token itself
    pub token: String,
}

/// Everything one scan found
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScanReport {
    /// Recognized options in token order
    pub matches: Vec<MatchRecord>,
    /// Tokens left over, in token order
    pub unrecognized: Vec<Unrecognized>,
}

/// Scan `tokens`, probing every option in order at each position
///
/// The first option that matches a token wins. Tokens nobody matches are
/// collected as unrecognized, or fail the scan when `strict` is set.
///
/// # Errors
///
/// In strict mode, returns the value problem of the first option whose
/// keyword matched an unaccepted token, or [`CloError::UnrecognizedArgument`].
pub fn scan_tokens(
    options: &[OptionSpec],
    tokens: &[String],
    config: ScanConfig,
    strict: bool,
) -> CliResult<ScanReport> {
    let mut scanner = OptionScanner::with_config(tokens, config);
    let mut report = ScanReport::default();

    while let Some(token) = scanner.current() {
        let position = scanner.position();
        let mut value_problem = None;
        let mut matched = false;

        for option in options {
            let (outcome, value) = option.probe(&mut scanner);
            if outcome.is_match(option.optional) {
                debug!(position, option = %option.name, "option matched");
                report.matches.push(MatchRecord {
                    position,
                    option: option.name.clone(),
                    keyword: outcome.keyword().unwrap_or_default().to_string(),
                    value,
                    combined: matches!(outcome, MatchOutcome::Value { combined: true, .. }),
                });
                matched = true;
                break;
            }
            if value_problem.is_none() {
                value_problem = outcome.value_error();
            }
        }

        if !matched {
            if strict {
                return Err(value_problem
                    .unwrap_or_else(|| CloError::UnrecognizedArgument(token.to_string()))
                    .into());
            }
            warn!(position, token, "unrecognized argument");
            report.unrecognized.push(Unrecognized {
                position,
                token: token.to_string(),
            });
        }
        scanner.advance();
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CliError;
    use cloparser::split_words;

    fn options(defs: &[&str]) -> Vec<OptionSpec> {
        defs.iter().map(|d| d.parse().unwrap()).collect()
    }

    #[test]
    fn test_scan_mixed_forms() {
        let options = options(&["flag:-v --verbose", "int:-n --count", "string:-o --output"]);
        let tokens = split_words("-v -n5 --output out.txt rest --count 2");

        let report = scan_tokens(&options, &tokens, ScanConfig::default(), false).unwrap();

        assert_eq!(report.matches.len(), 4);
        assert_eq!(report.matches[0].option, "verbose");
        assert_eq!(report.matches[0].value, None);
        assert_eq!(report.matches[1].keyword, "-n");
        assert_eq!(report.matches[1].value, Some(CapturedValue::Int(5)));
        assert!(report.matches[1].combined);
        assert_eq!(report.matches[2].position, 2);
        assert_eq!(
            report.matches[2].value,
            Some(CapturedValue::Text("out.txt".to_string()))
        );
        assert_eq!(report.matches[3].position, 5);
        assert_eq!(report.matches[3].value, Some(CapturedValue::Int(2)));
        assert!(!report.matches[3].combined);
        assert_eq!(
            report.unrecognized,
            vec![Unrecognized {
                position: 4,
                token: "rest".to_string()
            }]
        );
    }

    #[test]
    fn test_optional_value_declines_token() {
        let options = options(&["uint?:-t --time-limit"]);
        let tokens = split_words("-t model.mzn");

        let report = scan_tokens(&options, &tokens, ScanConfig::default(), false).unwrap();

        assert_eq!(report.matches.len(), 1);
        assert_eq!(report.matches[0].value, None);
        assert_eq!(report.unrecognized.len(), 1);
        assert_eq!(report.unrecognized[0].token, "model.mzn");
    }

    #[test]
    fn test_strict_reports_value_problem() {
        let options = options(&["int:-n --count"]);
        let tokens = split_words("--count many");

        let err = scan_tokens(&options, &tokens, ScanConfig::default(), true).unwrap_err();
        assert!(matches!(
            err,
            CliError::Scan(CloError::InvalidValue { ref keyword, ref text })
                if keyword == "--count" && text == "many"
        ));
    }

    #[test]
    fn test_strict_reports_missing_value() {
        let options = options(&["int:-n --count"]);
        let tokens = split_words("--count");

        let err = scan_tokens(&options, &tokens, ScanConfig::default(), true).unwrap_err();
        assert_eq!(err.to_string(), "Missing value for option '--count'");
    }

    #[test]
    fn test_strict_reports_unrecognized() {
        let options = options(&["flag:-v"]);
        let tokens = split_words("-v -x");

        let err = scan_tokens(&options, &tokens, ScanConfig::default(), true).unwrap_err();
        assert_eq!(err.to_string(), "Unrecognized argument '-x'");
    }

    #[test]
    fn test_declaration_order_decides() {
        let options = options(&["string:-a", "flag:-a"]);
        let tokens = split_words("-a x");

        let report = scan_tokens(&options, &tokens, ScanConfig::default(), false).unwrap();
        assert_eq!(report.matches.len(), 1);
        assert_eq!(report.matches[0].option, "a");
        assert_eq!(
            report.matches[0].value,
            Some(CapturedValue::Text("x".to_string()))
        );
        assert!(report.unrecognized.is_empty());
    }
}
