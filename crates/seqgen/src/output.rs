//! Result rendering for text and JSON output.

use std::io::{self, Write};

use num_bigint::BigInt;
use serde::Serialize;

use crate::config::AppConfig;

/// Normalized output settings derived from the parsed configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit a JSON document instead of text.
    pub json: bool,
    /// Print bare values only.
    pub quiet: bool,
}

impl RenderOptions {
    /// Build render options from the CLI configuration.
    ///
    /// JSON output wins over quiet mode when both are requested.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            json: config.json,
            quiet: config.quiet && !config.json,
        }
    }
}

/// Outcome of one operation, ready for rendering.
///
/// Values are carried as decimal strings so that arbitrarily large numbers
/// survive JSON encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub operation: &'static str,
    pub values: Vec<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub truncated: bool,
}

impl Report {
    /// Report for an operation producing a sequence.
    pub fn sequence(operation: &'static str, values: impl IntoIterator<Item = BigInt>) -> Self {
        Self {
            operation,
            values: values.into_iter().map(|v| v.to_string()).collect(),
            truncated: false,
        }
    }

    /// Report for an operation producing one value.
    pub fn scalar(operation: &'static str, value: impl ToString) -> Self {
        Self {
            operation,
            values: vec![value.to_string()],
            truncated: false,
        }
    }

    /// Mark the sequence as cut short by an output limit.
    #[must_use]
    pub fn with_truncated(mut self, truncated: bool) -> Self {
        self.truncated = truncated;
        self
    }
}

/// Write a report to `out` according to `opts`.
///
/// # Errors
///
/// Returns an I/O error if writing fails.
pub fn render(report: &Report, opts: RenderOptions, out: &mut impl Write) -> io::Result<()> {
    if opts.json {
        serde_json::to_writer_pretty(&mut *out, report)?;
        writeln!(out)?;
        return Ok(());
    }

    if opts.quiet {
        for v in &report.values {
            writeln!(out, "{v}")?;
        }
        return Ok(());
    }

    match report.values.as_slice() {
        [single] => writeln!(out, "{}: {single}", report.operation)?,
        values => {
            writeln!(
                out,
                "{} ({} values): {}",
                report.operation,
                values.len(),
                values.join(", ")
            )?;
        }
    }
    if report.truncated {
        writeln!(out, "(output truncated)")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_string(report: &Report, opts: RenderOptions) -> String {
        let mut buf = Vec::new();
        render(report, opts, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn sample() -> Report {
        Report::sequence("progression", [1i64, 2, 4].map(BigInt::from))
    }

    #[test]
    fn text_sequence() {
        let text = render_to_string(&sample(), RenderOptions::default());
        assert_eq!(text, "progression (3 values): 1, 2, 4\n");
    }

    #[test]
    fn text_scalar() {
        let text = render_to_string(&Report::scalar("max", 5), RenderOptions::default());
        assert_eq!(text, "max: 5\n");
    }

    #[test]
    fn quiet_one_per_line() {
        let opts = RenderOptions {
            json: false,
            quiet: true,
        };
        assert_eq!(render_to_string(&sample(), opts), "1\n2\n4\n");
    }

    #[test]
    fn json_document() {
        let opts = RenderOptions {
            json: true,
            quiet: false,
        };
        let text = render_to_string(&sample(), opts);
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["operation"], "progression");
        assert_eq!(parsed["values"], serde_json::json!(["1", "2", "4"]));
        assert!(parsed.get("truncated").is_none());
    }

    #[test]
    fn truncated_flag() {
        let report = sample().with_truncated(true);
        let text = render_to_string(&report, RenderOptions::default());
        assert!(text.ends_with("(output truncated)\n"));
    }

    #[test]
    fn huge_values_survive_json() {
        let big: BigInt = "123456789012345678901234567890".parse().unwrap();
        let report = Report::scalar("element", &big);
        let opts = RenderOptions {
            json: true,
            quiet: false,
        };
        let text = render_to_string(&report, opts);
        assert!(text.contains("\"123456789012345678901234567890\""));
    }
}
