//! clo-scan: probe a command line against option spellings
//!
//! ```text
//! clo-scan -O "int:-n --count" -O "flag:-v --verbose" -- -v -n5 input.txt
//! ```

mod cli;
mod errors;
mod option_spec;
mod report;
mod scan;
mod spec_file;

use std::fs;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error};

use cloparser::{DEFAULT_SHORT_KEYWORD_LEN, ScanConfig, append_words, check_io_status, logger};

use crate::{
    cli::{Cli, OutputFormat},
    errors::{CliError, CliResult},
    option_spec::OptionSpec,
    report::{render_human, render_json},
    scan::scan_tokens,
    spec_file::parse_spec_file,
};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init_logging(if cli.verbose { "debug" } else { "warn" });

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("clo-scan: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> CliResult<()> {
    let mut options = Vec::new();
    let mut file_short_len = None;

    if let Some(path) = &cli.spec {
        let spec = parse_spec_file(path)?;
        debug!(path = %path.display(), count = spec.options.len(), "loaded option spec file");
        file_short_len = spec.short_keyword_len;
        options.extend(spec.options);
    }
    for inline in &cli.options {
        options.push(inline.parse::<OptionSpec>()?);
    }
    if options.is_empty() {
        return Err(CliError::NoOptions);
    }

    let short_len = cli
        .short_len
        .or(file_short_len)
        .unwrap_or(DEFAULT_SHORT_KEYWORD_LEN);
    let config = ScanConfig::default().with_short_keyword_len(short_len);

    let mut tokens = Vec::new();
    if let Some(line) = &cli.line {
        append_words(line, &mut tokens);
    }
    tokens.extend(cli.tokens.iter().cloned());

    let report = scan_tokens(&options, &tokens, config, cli.strict)?;
    let rendered = match cli.format {
        OutputFormat::Human => render_human(&report),
        OutputFormat::Json => render_json(&report)?,
    };

    match &cli.output {
        Some(path) => {
            let context = format!("Failed to write report to '{}'", path.display());
            check_io_status(fs::write(path, rendered), &context, true)?;
        }
        None => print!("{rendered}"),
    }
    Ok(())
}
