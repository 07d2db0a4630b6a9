//! Console reporting for Jasmine spec results
//!
//! Parse the runner's raw records into a [`models::ResultCollection`], then
//! render it with [`output::Formatter`]:
//!
//! ```
//! use jasmine_console::output::Formatter;
//! use jasmine_console::parser::ResultParser;
//!
//! let results = ResultParser::new()
//!     .parse_str(r#"[{"status": "passed", "fullName": "Math adds"}]"#)
//!     .unwrap();
//! let formatter = Formatter::new(&results).no_color();
//! assert_eq!(formatter.format_summary(), "1 specs, 0 failed");
//! ```

pub mod config;
pub mod models;
pub mod output;
pub mod parser;
pub mod utils;
