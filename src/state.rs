use crate::config::ViewerConfig;
use crate::errors::ParseError;
use crate::loader::parse_dataset;
use crate::model::{
    Dataset, Direction, FieldComparison, FieldListResponse, FieldPath, MultiFieldView,
};
use crate::navigator::Navigator;
use crate::picker::FieldPicker;

/// Owner of a [`Navigator`] together with the upload error channel and the
/// left/right pickers of the pairwise comparison view.
#[derive(Debug, Clone, Default)]
pub struct ViewerSession {
    navigator: Navigator,
    last_error: Option<String>,
    left: FieldPicker,
    right: FieldPicker,
}

impl ViewerSession {
    pub fn new(config: &ViewerConfig) -> Self {
        Self {
            navigator: Navigator::with_policy(config.selection_policy),
            ..Self::default()
        }
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn report_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(error = %message, "dataset load failed");
        self.last_error = Some(message);
    }

    pub fn load(&mut self, dataset: Dataset) {
        self.navigator.load(dataset);
        self.last_error = None;
        self.sync_pickers();
    }

    /// Parse uploaded text and load it. On failure the error is recorded and
    /// the current dataset, position and selection are left untouched.
    pub fn upload(&mut self, contents: &str) -> Result<usize, ParseError> {
        match parse_dataset(contents) {
            Ok(dataset) => {
                let count = dataset.len();
                self.load(dataset);
                Ok(count)
            }
            Err(error) => {
                self.report_error(error.to_string());
                Err(error)
            }
        }
    }

    pub fn step(&mut self, direction: Direction) {
        self.navigator.step(direction);
        self.sync_pickers();
    }

    pub fn seek(&mut self, index: usize) {
        self.navigator.seek(index);
        self.sync_pickers();
    }

    pub fn add_field(&mut self, path: Option<FieldPath>) -> bool {
        self.navigator.add_field(path)
    }

    pub fn remove_field(&mut self, path: &FieldPath) -> bool {
        self.navigator.remove_field(path)
    }

    /// Returns `false` when `path` is not a field of the current datapoint and
    /// the picker fell back to the first field.
    pub fn choose_left(&mut self, path: impl Into<FieldPath>) -> bool {
        let path = path.into();
        self.left.choose(path.clone());
        self.sync_pickers();
        self.left.selected() == Some(&path)
    }

    /// Returns `false` when `path` is not a field of the current datapoint and
    /// the picker fell back to the first field.
    pub fn choose_right(&mut self, path: impl Into<FieldPath>) -> bool {
        let path = path.into();
        self.right.choose(path.clone());
        self.sync_pickers();
        self.right.selected() == Some(&path)
    }

    pub fn field_list(&self) -> FieldListResponse {
        FieldListResponse {
            position: self.navigator.position(),
            record_count: self.navigator.len(),
            fields: self.navigator.all_fields(),
            available_fields: self.navigator.available_fields(),
        }
    }

    pub fn view(&self) -> MultiFieldView {
        MultiFieldView {
            position: self.navigator.position(),
            record_count: self.navigator.len(),
            progress: self.navigator.progress_label(),
            selected: self.navigator.resolve_selected(),
            available_fields: self.navigator.available_fields(),
        }
    }

    /// Current left/right values. An unset side renders as an empty string.
    pub fn compare(&self) -> FieldComparison {
        let value_of = |picker: &FieldPicker| {
            picker
                .selected()
                .and_then(|field| self.navigator.resolve(field).ok())
                .unwrap_or_default()
                .to_string()
        };
        let left = value_of(&self.left);
        let right = value_of(&self.right);
        FieldComparison {
            position: self.navigator.position(),
            progress: self.navigator.progress_label(),
            left_field: self.left.selected().cloned(),
            right_field: self.right.selected().cloned(),
            identical: left == right,
            left,
            right,
        }
    }

    fn sync_pickers(&mut self) {
        let fields = self.navigator.all_fields();
        self.left.sync(&fields);
        self.right.sync(&fields);
    }
}
