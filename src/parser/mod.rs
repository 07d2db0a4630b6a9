//! Result parsing
//!
//! Turns raw runner records into a `ResultCollection`. Parsing is strict: the
//! first malformed record aborts the whole call.

use serde_json::Value;
use thiserror::Error;

use crate::models::{ResultCollection, SpecResult, FIELDS};

/// Result parsing errors
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Expected a JSON array of spec results, got {0}")]
    NotAnArray(&'static str),

    #[error("Record {index}: expected an object, got {kind}")]
    NotAnObject { index: usize, kind: &'static str },

    #[error("Record {index}: unexpected field '{field}'")]
    UnknownField { index: usize, field: String },

    #[error("Record {index}: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Parser for Jasmine spec result records
#[derive(Clone, Copy, Debug, Default)]
pub struct ResultParser;

impl ResultParser {
    pub fn new() -> Self {
        Self
    }

    /// Build one result per record, preserving input order
    pub fn parse(&self, items: Vec<Value>) -> Result<ResultCollection, ParseError> {
        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| Self::parse_record(index, item))
            .collect::<Result<Vec<_>, _>>()
            .map(ResultCollection::new)
    }

    /// Parse a JSON document holding an array of records
    pub fn parse_str(&self, input: &str) -> Result<ResultCollection, ParseError> {
        match serde_json::from_str(input)? {
            Value::Array(items) => self.parse(items),
            other => Err(ParseError::NotAnArray(kind_of(&other))),
        }
    }

    fn parse_record(index: usize, item: Value) -> Result<SpecResult, ParseError> {
        let Value::Object(fields) = &item else {
            return Err(ParseError::NotAnObject {
                index,
                kind: kind_of(&item),
            });
        };

        if let Some(field) = fields.keys().find(|k| !FIELDS.contains(&k.as_str())) {
            return Err(ParseError::UnknownField {
                index,
                field: field.clone(),
            });
        }

        serde_json::from_value(item).map_err(|source| ParseError::InvalidRecord { index, source })
    }
}
