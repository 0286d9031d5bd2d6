pub mod commands;
pub mod errors;
pub mod output;

use crate::config::{ConfigArgs, ViewerConfig};
use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::Value;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Csv,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SchemaTarget {
    Input,
    Summary,
    Fields,
    Resolve,
    View,
    Compare,
}

#[derive(Debug, Parser)]
#[command(
    name = "datapoint-cli",
    version,
    about = "Page through JSON datapoint files and compare their string fields",
    long_about = "Page through JSON datapoint files and compare their string fields.\n\nThe input file must be a JSON array of objects. Every string value, including ones inside nested objects, is a field addressed by its dotted path (for example `patch.after`).\n\nCommon workflows:\n  • Orientation: summary → fields --position N\n  • Multi-field view: view --position N --add patch.before --add patch.after\n  • Pairwise diff input: compare --left patch.before --right patch.after"
)]
pub struct Cli {
    #[arg(
        long,
        value_enum,
        default_value_t = OutputFormat::Json,
        global = true,
        help = "Output format (csv is currently unsupported)"
    )]
    pub format: OutputFormat,

    #[arg(
        long,
        global = true,
        help = "Emit compact JSON without pretty-printing"
    )]
    pub compact: bool,

    #[arg(long, global = true, help = "Suppress non-fatal warnings")]
    pub quiet: bool,

    #[command(flatten)]
    pub config: ConfigArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(about = "Count datapoints and list the fields of the first one")]
    Summary {
        #[arg(value_name = "FILE", help = "Path to the JSON datapoint file")]
        file: PathBuf,
    },
    #[command(about = "List the string fields of one datapoint")]
    Fields {
        #[arg(value_name = "FILE", help = "Path to the JSON datapoint file")]
        file: PathBuf,
        #[arg(long, default_value_t = 0, help = "Zero-based datapoint index (clamped)")]
        position: usize,
    },
    #[command(about = "Resolve dotted field paths to their string values")]
    Resolve {
        #[arg(value_name = "FILE", help = "Path to the JSON datapoint file")]
        file: PathBuf,
        #[arg(value_name = "PATH", required = true, help = "Dotted field paths")]
        paths: Vec<String>,
        #[arg(long, default_value_t = 0, help = "Zero-based datapoint index (clamped)")]
        position: usize,
    },
    #[command(about = "Render the multi-field view of one datapoint")]
    View {
        #[arg(value_name = "FILE", help = "Path to the JSON datapoint file")]
        file: PathBuf,
        #[arg(long, default_value_t = 0, help = "Zero-based datapoint index (clamped)")]
        position: usize,
        #[arg(
            long = "add",
            value_name = "PATH",
            help = "Add a field to the view; an empty value adds the next available field"
        )]
        add: Vec<String>,
        #[arg(long = "remove", value_name = "PATH", help = "Remove a field from the view")]
        remove: Vec<String>,
    },
    #[command(about = "Pick a left and right field of one datapoint for diffing")]
    Compare {
        #[arg(value_name = "FILE", help = "Path to the JSON datapoint file")]
        file: PathBuf,
        #[arg(long, default_value_t = 0, help = "Zero-based datapoint index (clamped)")]
        position: usize,
        #[arg(long, value_name = "PATH", help = "Left field (defaults to the first field)")]
        left: Option<String>,
        #[arg(long, value_name = "PATH", help = "Right field (defaults to the first field)")]
        right: Option<String>,
    },
    #[command(about = "Print the JSON Schema of the input file or of a command payload")]
    Schema {
        #[arg(value_enum, default_value_t = SchemaTarget::Input)]
        target: SchemaTarget,
    },
}

pub async fn run_command(command: Commands, config: &ViewerConfig) -> Result<Value> {
    match command {
        Commands::Summary { file } => commands::read::summary(file, config).await,
        Commands::Fields { file, position } => {
            commands::read::fields(file, position, config).await
        }
        Commands::Resolve {
            file,
            paths,
            position,
        } => commands::read::resolve(file, paths, position, config).await,
        Commands::View {
            file,
            position,
            add,
            remove,
        } => commands::view::view(file, position, add, remove, config).await,
        Commands::Compare {
            file,
            position,
            left,
            right,
        } => commands::view::compare(file, position, left, right, config).await,
        Commands::Schema { target } => commands::read::schema(target),
    }
}
