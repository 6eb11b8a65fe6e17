//! Rendering of scan reports

use std::fmt::Write;

use cloparser::NonZeroList;

use crate::{errors::CliResult, scan::ScanReport};

/// Render a report for people
pub fn render_human(report: &ScanReport) -> String {
    let mut out = String::new();

    if !report.matches.is_empty() {
        out.push_str("matched:\n");
        for record in &report.matches {
            let _ = write!(out, "  [{}] {} ({})", record.position, record.keyword, record.option);
            if let Some(value) = &record.value {
                let _ = write!(out, " = {value}");
            }
            if record.combined {
                out.push_str(" [combined]");
            }
            out.push('\n');
        }
    }

    if !report.unrecognized.is_empty() {
        out.push_str("unrecognized:\n");
        for token in &report.unrecognized {
            let _ = writeln!(out, "  [{}] {}", token.position, token.token);
        }
    }

    let mut list = NonZeroList::new();
    let summary = [
        list.item(report.matches.len(), Some(" matched")),
        list.item(report.unrecognized.len(), Some(" unrecognized")),
    ]
    .concat();
    if list.had_one() {
        let _ = writeln!(out, "summary: {summary}");
    } else {
        out.push_str("summary: no tokens\n");
    }
    out
}

/// Render a report as pretty-printed JSON
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(report: &ScanReport) -> CliResult<String> {
    let mut json = serde_json::to_string_pretty(report)?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option_spec::CapturedValue;
    use crate::scan::{MatchRecord, Unrecognized};

    fn sample() -> ScanReport {
        ScanReport {
            matches: vec![
                MatchRecord {
                    position: 0,
                    option: "count".to_string(),
                    keyword: "-n".to_string(),
                    value: Some(CapturedValue::Int(5)),
                    combined: true,
                },
                MatchRecord {
                    position: 1,
                    option: "verbose".to_string(),
                    keyword: "-v".to_string(),
                    value: None,
                    combined: false,
                },
            ],
            unrecognized: vec![Unrecognized {
                position: 2,
                token: "extra".to_string(),
            }],
        }
    }

    #[test]
    fn test_render_human() {
        let text = render_human(&sample());
        assert_eq!(
            text,
            "matched:\n  [0] -n (count) = 5 [combined]\n  [1] -v (verbose)\n\
             unrecognized:\n  [2] extra\nsummary: 2 matched, 1 unrecognized\n"
        );
    }

    #[test]
    fn test_render_human_empty() {
        assert_eq!(render_human(&ScanReport::default()), "summary: no tokens\n");
    }

    #[test]
    fn test_render_json() {
        let json = render_json(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["matches"][0]["value"], 5);
        assert_eq!(value["matches"][0]["combined"], true);
        assert!(value["matches"][1].get("value").is_none());
        assert_eq!(value["unrecognized"][0]["token"], "extra");
    }
}
