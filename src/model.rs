use crate::errors::ResolutionError;
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum::{Display, EnumString};

/// One element of an uploaded dataset. Keys keep document order.
pub type Record = Map<String, Value>;

/// The ordered records of one uploaded file.
pub type Dataset = Vec<Record>;

/// Dotted path to a string leaf, e.g. `patch.before`.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct FieldPath(String);

impl FieldPath {
    pub const SEPARATOR: char = '.';

    /// Path of `key` inside the object this path names.
    pub fn child(&self, key: &str) -> Self {
        Self(format!("{}{}{key}", self.0, Self::SEPARATOR))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(Self::SEPARATOR)
    }
}

impl std::fmt::Display for FieldPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FieldPath {
    fn from(path: &str) -> Self {
        Self(path.to_string())
    }
}

impl From<String> for FieldPath {
    fn from(path: String) -> Self {
        Self(path)
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Navigability of a single JSON value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    String(&'a str),
    Nested(&'a Record),
    Other,
}

impl<'a> FieldValue<'a> {
    /// Objects without keys are not navigable and classify as `Other`.
    pub fn classify(value: &'a Value) -> Self {
        match value {
            Value::String(text) => FieldValue::String(text),
            Value::Object(map) if !map.is_empty() => FieldValue::Nested(map),
            _ => FieldValue::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Direction {
    #[strum(to_string = "forward", serialize = "next", serialize = "increment")]
    Forward,
    #[strum(
        to_string = "backward",
        serialize = "previous",
        serialize = "prev",
        serialize = "decrement"
    )]
    Backward,
}

/// What happens to the selection when the dataset or position changes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum SelectionPolicy {
    /// Replace the selection with the first discovered field.
    #[default]
    Reset,
    /// Keep selected fields that still resolve, otherwise fall back to `Reset`.
    Retain,
}

/// Input file accepted by the loader: a JSON array of objects.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[schemars(
    title = "Datapoint file",
    description = "A JSON array whose elements are objects. String values, including ones \
                   inside nested objects, become viewable fields addressed by dotted paths."
)]
pub struct DatasetFile(pub Vec<Record>);

/// A selected field rendered either as its value or as an inline error.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct FieldView {
    pub field: FieldPath,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FieldView {
    pub fn from_resolution(field: FieldPath, resolved: Result<String, ResolutionError>) -> Self {
        match resolved {
            Ok(value) => Self {
                field,
                value: Some(value),
                error: None,
            },
            Err(error) => Self {
                field,
                value: None,
                error: Some(error.to_string()),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct DatasetSummary {
    pub file: String,
    pub record_count: usize,
    pub progress: String,
    pub fields: Vec<FieldPath>,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct FieldListResponse {
    pub position: usize,
    pub record_count: usize,
    pub fields: Vec<FieldPath>,
    pub available_fields: Vec<FieldPath>,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct ResolveResponse {
    pub position: usize,
    pub values: Vec<FieldView>,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct MultiFieldView {
    pub position: usize,
    pub record_count: usize,
    pub progress: String,
    pub selected: Vec<FieldView>,
    pub available_fields: Vec<FieldPath>,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct FieldComparison {
    pub position: usize,
    pub progress: String,
    pub left_field: Option<FieldPath>,
    pub right_field: Option<FieldPath>,
    pub left: String,
    pub right: String,
    pub identical: bool,
}
