//! Console report formatter
//!
//! Renders a `ResultCollection` as the banner, progress bar, summary line and
//! failure stacks, or as JSON for other tools.

use serde::Serialize;
use thiserror::Error;

use crate::models::{ResultCollection, SpecResult, SpecStatus, StatusCounts};

const BANNER: &str = r"
      _                     _
     | |                   (_)
     | | __ _ ___ _ __ ___  _ _ __   ___
 _   | |/ _` / __| '_ ` _ \| | '_ \ / _ \
| |__| | (_| \__ \ | | | | | | | | |  __/
 \____/ \__,_|___/_| |_| |_|_|_| |_|\___|

";

/// Stack frames containing any of these belong to the test framework itself
const FRAMEWORK_MARKERS: [&str; 2] = ["__jasmine__", "__boot__"];

/// Formatting errors
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("Unknown color: {0}")]
    UnknownColor(String),

    #[error("Failed spec {} has no fullName", .id.as_deref().unwrap_or("without id"))]
    MissingFullName { id: Option<String> },

    #[error("Failed spec '{full_name}' has no failed expectations")]
    MissingExpectation { full_name: String },

    #[error("First failed expectation of '{full_name}' has no stack")]
    MissingStack { full_name: String },

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Output format options
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "console" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Terminal color palette
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Yellow,
    None,
}

impl Color {
    pub fn escape(self) -> &'static str {
        match self {
            Color::Red => "\x1b[0;31m",
            Color::Green => "\x1b[0;32m",
            Color::Yellow => "\x1b[0;33m",
            Color::None => "\x1b[0m",
        }
    }

    pub fn from_name(name: &str) -> Result<Self, FormatError> {
        match name {
            "red" => Ok(Color::Red),
            "green" => Ok(Color::Green),
            "yellow" => Ok(Color::Yellow),
            "none" => Ok(Color::None),
            _ => Err(FormatError::UnknownColor(name.to_string())),
        }
    }
}

/// Console report formatter
pub struct Formatter<'a> {
    results: &'a ResultCollection,
    colors: bool,
}

impl<'a> Formatter<'a> {
    pub fn new(results: &'a ResultCollection) -> Self {
        Self {
            results,
            colors: true,
        }
    }

    pub fn colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    pub fn no_color(self) -> Self {
        self.colors(false)
    }

    pub fn colorize(&self, color: Color, text: &str) -> String {
        if !self.colors {
            return text.to_string();
        }

        format!("{}{}{}", color.escape(), text, Color::None.escape())
    }

    /// Colorize by palette name; names outside the palette are an error
    pub fn colorize_named(&self, name: &str, text: &str) -> Result<String, FormatError> {
        Ok(self.colorize(Color::from_name(name)?, text))
    }

    /// Render in the requested output format
    pub fn render(&self, format: OutputFormat) -> Result<String, FormatError> {
        match format {
            OutputFormat::Text => self.format(),
            OutputFormat::Json => self.format_json(),
        }
    }

    /// Full console report
    pub fn format(&self) -> Result<String, FormatError> {
        let mut output = String::from(BANNER);
        output.push_str(&self.format_progress());
        output.push_str("\n\n");
        output.push_str(&self.format_summary());
        output.push_str("\n\n");
        output.push_str(&self.format_failures()?);

        Ok(output)
    }

    /// One glyph per spec, in collection order
    pub fn format_progress(&self) -> String {
        self.results
            .iter()
            .map(|result| match result.status() {
                Some(SpecStatus::Passed) => self.colorize(Color::Green, "."),
                Some(SpecStatus::Failed) => self.colorize(Color::Red, "X"),
                _ => self.colorize(Color::Yellow, "?"),
            })
            .collect()
    }

    pub fn format_summary(&self) -> String {
        let mut output = format!(
            "{} specs, {} failed",
            self.results.len(),
            self.results.failed().count()
        );

        let pending = self.results.pending().count();
        if pending > 0 {
            output.push_str(&format!(", {pending} pending"));
        }

        output
    }

    /// Name and cleaned stack of every failed spec
    ///
    /// Only the first failed expectation is shown. A failed spec without a
    /// name or an expectation is an error rather than a blank entry.
    pub fn format_failures(&self) -> Result<String, FormatError> {
        let mut output = String::new();

        for failure in self.results.failed() {
            let full_name = failure
                .full_name()
                .ok_or_else(|| FormatError::MissingFullName {
                    id: failure.id().map(str::to_string),
                })?;
            output.push_str(&self.colorize(Color::Red, full_name));
            output.push('\n');
            output.push_str(&clean_stack(first_stack(failure, full_name)?));
            output.push('\n');
        }

        Ok(output)
    }

    fn format_json(&self) -> Result<String, FormatError> {
        #[derive(Serialize)]
        struct ReportJson<'r> {
            summary: StatusCounts,
            results: &'r ResultCollection,
        }

        let report = ReportJson {
            summary: self.results.counts(),
            results: self.results,
        };

        Ok(serde_json::to_string_pretty(&report)?)
    }
}

fn first_stack<'r>(failure: &'r SpecResult, full_name: &str) -> Result<&'r str, FormatError> {
    let full_name = || full_name.to_string();

    let expectation =
        failure
            .failed_expectations()
            .first()
            .ok_or_else(|| FormatError::MissingExpectation {
                full_name: full_name(),
            })?;

    expectation.stack().ok_or_else(|| FormatError::MissingStack {
        full_name: full_name(),
    })
}

/// Drop framework-internal frames from a stack trace
pub fn clean_stack(stack: &str) -> String {
    stack
        .split('\n')
        .filter(|line| !FRAMEWORK_MARKERS.iter().any(|marker| line.contains(marker)))
        .collect::<Vec<_>>()
        .join("\n")
}
