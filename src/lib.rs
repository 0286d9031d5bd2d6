pub mod cli;
pub mod config;
pub mod discover;
pub mod errors;
pub mod loader;
pub mod model;
pub mod navigator;
pub mod picker;
pub mod runtime;
pub mod state;

pub use config::{ConfigArgs, ViewerConfig};
pub use discover::{discover, resolve};
pub use errors::{LoadError, ParseError, ResolutionError, ResolutionFailure};
pub use model::{Dataset, Direction, FieldPath, FieldValue, Record, SelectionPolicy};
pub use navigator::Navigator;
pub use picker::FieldPicker;
pub use state::ViewerSession;
