//! Command-line interface of clo-scan

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text listing
    #[default]
    Human,
    /// Pretty-printed JSON
    Json,
}

/// Scan a command line against option spellings and show what each token
/// matched
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// YAML file listing the options to probe
    #[arg(short, long, env = "CLO_SCAN_SPEC")]
    pub spec: Option<PathBuf>,

    /// Inline option as KIND:SPELLINGS (KIND?:SPELLINGS for an optional
    /// value), e.g. "int:-n --count"; probed after the spec file's options
    #[arg(short = 'O', long = "option", value_name = "KIND:SPELLINGS")]
    pub options: Vec<String>,

    /// Keywords up to this many bytes take glued values (default 2)
    #[arg(long, value_name = "N")]
    pub short_len: Option<usize>,

    /// A whole command line to split into tokens, scanned before TOKENS
    #[arg(short, long, allow_hyphen_values = true)]
    pub line: Option<String>,

    /// Fail on the first token no option accepts
    #[arg(long, default_value_t = false)]
    pub strict: bool,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Log every probe decision to stderr
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Tokens to scan
    #[arg(last = true)]
    pub tokens: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_tokens_after_separator() {
        let cli = Cli::try_parse_from([
            "clo-scan",
            "--option",
            "int:-n --count",
            "-O",
            "flag:-v",
            "--format",
            "json",
            "--",
            "-n",
            "5",
            "-v",
        ])
        .unwrap();

        assert_eq!(cli.options, vec!["int:-n --count", "flag:-v"]);
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.tokens, vec!["-n", "5", "-v"]);
        assert!(!cli.strict);
    }

    #[test]
    fn test_parse_line() {
        let cli = Cli::try_parse_from(["clo-scan", "-O", "flag:-v", "--line", "-v -x"]).unwrap();
        assert_eq!(cli.line.as_deref(), Some("-v -x"));
        assert!(cli.tokens.is_empty());
    }
}
