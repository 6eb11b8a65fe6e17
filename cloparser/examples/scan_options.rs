//! Example demonstrating option scanning
//!
//! Run with arguments to scan them, e.g.
//! `cargo run --example scan_options -- -v -j4 --time-limit 30 model.mzn`.
//! Without arguments a built-in command line is used.

use cloparser::{NonZeroList, OptionScanner, SemanticVersion, split_words};
use std::env;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Option Scanner Example ===\n");

    let mut args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        args = split_words("example -v -j4 --time-limit 30 -o out.txt --require 2.6 model.mzn");
    }
    println!("Scanning: {:?}\n", &args[1..]);

    let mut verbose = false;
    let mut jobs = 1u32;
    let mut time_limit: Option<u64> = None;
    let mut output: Option<PathBuf> = None;
    let mut required = SemanticVersion::default();
    let mut rest = Vec::new();

    let mut scanner = OptionScanner::starting_at(&args, 1);
    while let Some(token) = scanner.current() {
        let start = scanner.position();
        if scanner.flag("-v --verbose") {
            verbose = true;
        } else if scanner.value("-j --jobs", &mut jobs) {
        } else if scanner.optional_value("-t --time-limit", &mut time_limit) {
        } else if scanner.value("-o --output", &mut output) {
        } else if scanner.value("--require", &mut required) {
        } else {
            rest.push(token.to_string());
        }
        println!("  token {start} '{token}' -> cursor {}", scanner.position());
        scanner.advance();
    }

    println!("\nResult:");
    println!("  verbose:    {verbose}");
    println!("  jobs:       {jobs}");
    println!("  time limit: {time_limit:?}");
    println!("  output:     {output:?}");
    println!("  requires:   {required}");
    println!("  other:      {rest:?}");

    let mut list = NonZeroList::new();
    let summary = [
        list.item(rest.len(), Some(" positional")),
        list.item(u32::from(verbose), Some(" flag")),
        list.item(jobs, Some(" jobs")),
    ]
    .concat();
    println!("\nSummary: {summary}");

    if required > SemanticVersion::new(2, 5, 0) {
        println!("Requires a version newer than 2.5.0");
    }

    Ok(())
}
