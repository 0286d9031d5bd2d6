use crate::cli::OutputFormat;
use crate::errors::{LoadError, ParseError};
use anyhow::{Result, bail};
use serde::Serialize;

pub fn ensure_output_supported(format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => Ok(()),
        OutputFormat::Csv => {
            bail!("csv output is not implemented yet for datapoint-cli; use --format json")
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub did_you_mean: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub try_this: Option<String>,
}

impl ErrorEnvelope {
    fn new(code: &str, message: String) -> Self {
        Self {
            code: code.to_string(),
            message,
            did_you_mean: None,
            try_this: None,
        }
    }

    fn try_this(mut self, hint: &str) -> Self {
        self.try_this = Some(hint.to_string());
        self
    }
}

pub fn envelope_for(error: &anyhow::Error) -> ErrorEnvelope {
    let message = error.to_string();

    if let Some(load) = error.downcast_ref::<LoadError>() {
        return match load {
            LoadError::NotFound(_) | LoadError::NotAFile(_) => {
                ErrorEnvelope::new("FILE_NOT_FOUND", message)
                    .try_this("check the dataset path and permissions")
            }
            LoadError::UnsupportedExtension { .. } => {
                ErrorEnvelope::new("UNSUPPORTED_EXTENSION", message)
                    .try_this("rename the file or pass --extensions to accept it")
            }
            LoadError::TooLarge { .. } => ErrorEnvelope::new("FILE_TOO_LARGE", message)
                .try_this("raise --max-file-bytes, or pass 0 to disable the limit"),
            LoadError::Io { .. } => ErrorEnvelope::new("COMMAND_FAILED", message),
            LoadError::Parse(parse) => parse_envelope(parse, message),
        };
    }

    if let Some(parse) = error.downcast_ref::<ParseError>() {
        return parse_envelope(parse, message);
    }

    if message.contains("csv output is not implemented") {
        return ErrorEnvelope {
            did_you_mean: Some("json".to_string()),
            ..ErrorEnvelope::new("OUTPUT_FORMAT_UNSUPPORTED", message)
                .try_this("re-run with `--format json`")
        };
    }

    if message.contains("does not exist") {
        return ErrorEnvelope::new("FILE_NOT_FOUND", message)
            .try_this("check the config path and permissions");
    }

    ErrorEnvelope::new("COMMAND_FAILED", message)
}

fn parse_envelope(error: &ParseError, message: String) -> ErrorEnvelope {
    match error {
        ParseError::InvalidJson(_) => ErrorEnvelope::new("PARSE_ERROR", message)
            .try_this("check that the file contains valid JSON"),
        ParseError::NotAList => ErrorEnvelope::new("NOT_A_LIST", message)
            .try_this("wrap the datapoints in a top-level JSON array: `[{...}, {...}]`"),
    }
}
