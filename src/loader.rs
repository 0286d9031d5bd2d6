use crate::config::ViewerConfig;
use crate::errors::{LoadError, ParseError};
use crate::model::Dataset;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Parse uploaded text into a dataset.
///
/// The top level must be a JSON array. Elements that are not objects are kept
/// as empty records so positions still line up with the file.
pub fn parse_dataset(contents: &str) -> Result<Dataset, ParseError> {
    parse_dataset_bytes(contents.as_bytes())
}

/// Like [`parse_dataset`] for raw file bytes; invalid UTF-8 is a JSON error.
pub fn parse_dataset_bytes(contents: &[u8]) -> Result<Dataset, ParseError> {
    let value: Value = serde_json::from_slice(contents)?;
    let Value::Array(items) = value else {
        return Err(ParseError::NotAList);
    };

    let dataset = items
        .into_iter()
        .map(|item| match item {
            Value::Object(record) => record,
            _ => Default::default(),
        })
        .collect::<Dataset>();
    Ok(dataset)
}

pub fn normalize_existing_file(path: &Path) -> Result<PathBuf, LoadError> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(|source| LoadError::Io {
                path: path.to_path_buf(),
                source,
            })?
            .join(path)
    };
    if !absolute.exists() {
        return Err(LoadError::NotFound(absolute));
    }
    if !absolute.is_file() {
        return Err(LoadError::NotAFile(absolute));
    }
    Ok(std::fs::canonicalize(&absolute).unwrap_or(absolute))
}

/// Read and parse a dataset file, enforcing the configured extension and size
/// limits. Returns the normalized path alongside the records.
pub async fn load_file(path: &Path, config: &ViewerConfig) -> Result<(PathBuf, Dataset), LoadError> {
    let path = normalize_existing_file(path)?;
    if !config.allows_extension(&path) {
        return Err(LoadError::UnsupportedExtension {
            path,
            allowed: config.supported_extensions.clone(),
        });
    }

    let io_error = |source: std::io::Error| LoadError::Io {
        path: path.clone(),
        source,
    };

    if let Some(limit) = config.max_file_bytes {
        let size = tokio::fs::metadata(&path).await.map_err(io_error)?.len();
        if size > limit {
            return Err(LoadError::TooLarge {
                path: path.clone(),
                size,
                limit,
            });
        }
    }

    let contents = tokio::fs::read(&path).await.map_err(io_error)?;
    let dataset = parse_dataset_bytes(&contents)?;
    tracing::debug!(path = %path.display(), records = dataset.len(), "dataset file read");
    Ok((path, dataset))
}
