//! CLI argument parsing
//!
//! Defines command-line interface using clap.

use clap::Parser;
use std::path::PathBuf;

/// Console reporter for Jasmine spec results
#[derive(Parser, Debug)]
#[command(name = "jasmine-console")]
#[command(version)]
#[command(about = "Render Jasmine spec results as a console report")]
#[command(long_about = None)]
pub struct Args {
    /// JSON file with the runner's spec results (`-` or omitted reads stdin)
    pub input: Option<PathBuf>,

    /// Disable ANSI colors
    #[arg(long)]
    pub no_color: bool,

    /// Output format (text, json)
    #[arg(short, long)]
    pub format: Option<String>,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Input path, or `None` for stdin
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|p| p.as_os_str() != "-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let args = Args::parse_from(["jasmine-console"]);
        assert!(args.input_path().is_none());
        assert!(!args.no_color);
        assert!(args.format.is_none());
        assert!(!args.verbose);
    }

    #[test]
    fn test_parse_flags() {
        let args = Args::parse_from([
            "jasmine-console",
            "results.json",
            "--no-color",
            "--format",
            "json",
            "-v",
        ]);
        assert_eq!(args.input_path(), Some(&PathBuf::from("results.json")));
        assert!(args.no_color);
        assert_eq!(args.format.as_deref(), Some("json"));
        assert!(args.verbose);
    }

    #[test]
    fn test_dash_means_stdin() {
        let args = Args::parse_from(["jasmine-console", "-"]);
        assert!(args.input_path().is_none());
    }

    #[test]
    fn test_command_is_valid() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
