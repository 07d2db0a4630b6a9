//! Spec result models
//!
//! Defines the outcome record of a single Jasmine spec and its status.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Field names in the order they appear on the wire and in `to_map`.
pub const FIELDS: [&str; 5] = [
    "status",
    "fullName",
    "failedExpectations",
    "id",
    "description",
];

/// Spec execution status as reported by the runner
///
/// Only `passed`, `failed` and `pending` are recognized; any other string is
/// kept verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SpecStatus {
    Passed,
    Failed,
    Pending,
    Other(String),
}

impl SpecStatus {
    pub fn as_str(&self) -> &str {
        match self {
            SpecStatus::Passed => "passed",
            SpecStatus::Failed => "failed",
            SpecStatus::Pending => "pending",
            SpecStatus::Other(raw) => raw,
        }
    }
}

impl From<String> for SpecStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "passed" => SpecStatus::Passed,
            "failed" => SpecStatus::Failed,
            "pending" => SpecStatus::Pending,
            _ => SpecStatus::Other(raw),
        }
    }
}

impl From<&str> for SpecStatus {
    fn from(raw: &str) -> Self {
        SpecStatus::from(raw.to_string())
    }
}

impl From<SpecStatus> for String {
    fn from(status: SpecStatus) -> Self {
        match status {
            SpecStatus::Other(raw) => raw,
            named => named.as_str().to_string(),
        }
    }
}

impl fmt::Display for SpecStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single failed expectation within a spec
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Expectation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    stack: Option<String>,

    /// Remaining runner-specific keys (matcherName, expected, actual, ...)
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl Expectation {
    pub fn new(message: impl Into<String>, stack: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            stack: Some(stack.into()),
            extra: Map::new(),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn stack(&self) -> Option<&str> {
        self.stack.as_deref()
    }

    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }
}

/// Outcome of a single spec
///
/// Immutable once built: fields are only reachable through accessors, and
/// `replace` hands back a new instance.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SpecResult {
    #[serde(default)]
    status: Option<SpecStatus>,

    #[serde(default)]
    full_name: Option<String>,

    #[serde(default, deserialize_with = "null_as_empty")]
    failed_expectations: Vec<Expectation>,

    #[serde(default)]
    id: Option<String>,

    #[serde(default)]
    description: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Expectation>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Expectation>>::deserialize(deserializer)?.unwrap_or_default())
}

impl SpecResult {
    /// Create an empty result; every field absent
    pub fn new() -> Self {
        Self::default()
    }

    pub fn passed(full_name: impl Into<String>) -> Self {
        Self::new()
            .with_status(SpecStatus::Passed)
            .with_full_name(full_name)
    }

    pub fn failed(full_name: impl Into<String>, expectations: Vec<Expectation>) -> Self {
        Self::new()
            .with_status(SpecStatus::Failed)
            .with_full_name(full_name)
            .with_failed_expectations(expectations)
    }

    pub fn pending(full_name: impl Into<String>) -> Self {
        Self::new()
            .with_status(SpecStatus::Pending)
            .with_full_name(full_name)
    }

    pub fn with_status(mut self, status: impl Into<SpecStatus>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    pub fn with_failed_expectations(mut self, expectations: Vec<Expectation>) -> Self {
        self.failed_expectations = expectations;
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn status(&self) -> Option<&SpecStatus> {
        self.status.as_ref()
    }

    pub fn full_name(&self) -> Option<&str> {
        self.full_name.as_deref()
    }

    pub fn failed_expectations(&self) -> &[Expectation] {
        &self.failed_expectations
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn has_status(&self, status: &SpecStatus) -> bool {
        self.status.as_ref() == Some(status)
    }

    /// Field name to value mapping, in declaration order
    pub fn to_map(&self) -> Result<Map<String, Value>, serde_json::Error> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => Err(serde::ser::Error::custom(format!(
                "result serialized to a non-object: {other}"
            ))),
        }
    }

    /// Return a new result with the given fields replaced
    ///
    /// Keys outside the known field set are rejected, as they are when parsing.
    pub fn replace(&self, patch: Map<String, Value>) -> Result<Self, serde_json::Error> {
        let mut fields = self.to_map()?;
        fields.extend(patch);
        serde_json::from_value(Value::Object(fields))
    }
}

fn repr(value: Option<&str>) -> String {
    match value {
        Some(s) => format!("{s:?}"),
        None => "null".to_string(),
    }
}

impl fmt::Display for SpecResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let expectations =
            serde_json::to_string(&self.failed_expectations).map_err(|_| fmt::Error)?;
        write!(
            f,
            "Result(status={}, fullName={}, failedExpectations={}, id={}, description={})",
            repr(self.status.as_ref().map(SpecStatus::as_str)),
            repr(self.full_name()),
            expectations,
            repr(self.id()),
            repr(self.description()),
        )
    }
}
