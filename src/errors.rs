use crate::model::FieldPath;
use std::path::PathBuf;
use thiserror::Error;

pub const NOT_A_LIST_MESSAGE: &str =
    "Provided file is not in list format. Please see instructions for file format.";

/// Uploaded content could not be turned into a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("failed to parse dataset as JSON: {0}")]
    InvalidJson(String),
    #[error("{}", NOT_A_LIST_MESSAGE)]
    NotAList,
}

impl From<serde_json::Error> for ParseError {
    fn from(error: serde_json::Error) -> Self {
        ParseError::InvalidJson(error.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionFailure {
    NoRecord,
    MissingSegment(String),
    NotNested(String),
    NotString,
}

impl std::fmt::Display for ResolutionFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolutionFailure::NoRecord => write!(f, "no datapoint is loaded"),
            ResolutionFailure::MissingSegment(segment) => {
                write!(f, "segment '{segment}' is missing")
            }
            ResolutionFailure::NotNested(segment) => {
                write!(f, "segment '{segment}' is not a nested object")
            }
            ResolutionFailure::NotString => write!(f, "leaf value has another type"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("field {path} is not a string ({reason})")]
pub struct ResolutionError {
    path: FieldPath,
    reason: ResolutionFailure,
}

impl ResolutionError {
    pub fn new(path: impl Into<FieldPath>, reason: ResolutionFailure) -> Self {
        Self {
            path: path.into(),
            reason,
        }
    }

    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    pub fn reason(&self) -> &ResolutionFailure {
        &self.reason
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("dataset file {0:?} does not exist")]
    NotFound(PathBuf),
    #[error("dataset path {0:?} is not a file")]
    NotAFile(PathBuf),
    #[error("dataset file {path:?} does not match allowed extensions {allowed:?}")]
    UnsupportedExtension { path: PathBuf, allowed: Vec<String> },
    #[error("dataset file {path:?} is {size} bytes which exceeds the limit of {limit} bytes")]
    TooLarge { path: PathBuf, size: u64, limit: u64 },
    #[error("failed to read dataset file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Parse(#[from] ParseError),
}
