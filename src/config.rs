use crate::model::SelectionPolicy;
use anyhow::{Context, Result};
use clap::Args;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_MAX_FILE_BYTES: u64 = 50 * 1024 * 1024;
const DEFAULT_EXTENSIONS: &[&str] = &["json"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    /// Upper bound on dataset file size; `None` disables the check.
    pub max_file_bytes: Option<u64>,
    pub supported_extensions: Vec<String>,
    pub selection_policy: SelectionPolicy,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            max_file_bytes: Some(DEFAULT_MAX_FILE_BYTES),
            supported_extensions: DEFAULT_EXTENSIONS
                .iter()
                .map(|ext| (*ext).to_string())
                .collect(),
            selection_policy: SelectionPolicy::default(),
        }
    }
}

impl ViewerConfig {
    pub fn from_args(args: ConfigArgs) -> Result<Self> {
        let ConfigArgs {
            config,
            max_file_bytes: cli_max_file_bytes,
            extensions: cli_extensions,
            selection_policy: cli_selection_policy,
        } = args;

        let file_config = if let Some(path) = config.as_ref() {
            load_config_file(path)?
        } else {
            PartialConfig::default()
        };

        let PartialConfig {
            max_file_bytes: file_max_file_bytes,
            extensions: file_extensions,
            selection_policy: file_selection_policy,
        } = file_config;

        let max_file_bytes = cli_max_file_bytes
            .or(file_max_file_bytes)
            .unwrap_or(DEFAULT_MAX_FILE_BYTES);
        let max_file_bytes = if max_file_bytes == 0 {
            None
        } else {
            Some(max_file_bytes)
        };

        let mut supported_extensions = cli_extensions
            .or(file_extensions)
            .unwrap_or_else(|| {
                DEFAULT_EXTENSIONS
                    .iter()
                    .map(|ext| (*ext).to_string())
                    .collect()
            })
            .into_iter()
            .map(|ext| ext.trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect::<Vec<_>>();

        supported_extensions.sort();
        supported_extensions.dedup();

        anyhow::ensure!(
            !supported_extensions.is_empty(),
            "at least one file extension must be provided"
        );

        let selection_policy = cli_selection_policy
            .or(file_selection_policy)
            .unwrap_or_default();

        Ok(Self {
            max_file_bytes,
            supported_extensions,
            selection_policy,
        })
    }

    pub fn allows_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .is_some_and(|ext| self.supported_extensions.contains(&ext))
    }
}

#[derive(Args, Debug, Default, Clone)]
pub struct ConfigArgs {
    #[arg(
        long,
        env = "DATAPOINT_VIEWER_CONFIG",
        value_name = "FILE",
        help = "Path to a configuration file (YAML or JSON)",
        global = true
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long,
        env = "DATAPOINT_VIEWER_MAX_FILE_BYTES",
        value_name = "BYTES",
        help = "Max dataset file size in bytes (default: 52428800; 0 disables)",
        value_parser = clap::value_parser!(u64),
        global = true
    )]
    pub max_file_bytes: Option<u64>,

    #[arg(
        long,
        env = "DATAPOINT_VIEWER_EXTENSIONS",
        value_name = "EXT",
        value_delimiter = ',',
        help = "Comma-separated list of accepted dataset file extensions",
        global = true
    )]
    pub extensions: Option<Vec<String>>,

    #[arg(
        long,
        env = "DATAPOINT_VIEWER_SELECTION_POLICY",
        value_enum,
        value_name = "POLICY",
        help = "Selection after moving between datapoints: reset (default) or retain",
        global = true
    )]
    pub selection_policy: Option<SelectionPolicy>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PartialConfig {
    max_file_bytes: Option<u64>,
    extensions: Option<Vec<String>>,
    selection_policy: Option<SelectionPolicy>,
}

fn load_config_file(path: &Path) -> Result<PartialConfig> {
    if !path.exists() {
        anyhow::bail!("config file {:?} does not exist", path);
    }
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {:?}", path))?;
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let parsed = match ext.as_str() {
        "json" => serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse JSON config {:?}", path))?,
        _ => serde_yaml::from_str(&contents)
            .with_context(|| format!("failed to parse YAML config {:?}", path))?,
    };
    Ok(parsed)
}
