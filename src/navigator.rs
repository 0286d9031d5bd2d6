use crate::discover::{discover, resolve};
use crate::errors::{ResolutionError, ResolutionFailure};
use crate::model::{Dataset, Direction, FieldPath, FieldView, Record, SelectionPolicy};
use indexmap::IndexSet;

/// Cursor over a loaded dataset plus the fields selected for display.
///
/// Every operation that changes the records or the position recomputes the
/// selection before returning, according to the configured [`SelectionPolicy`].
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    records: Dataset,
    position: usize,
    selected: IndexSet<FieldPath>,
    policy: SelectionPolicy,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: SelectionPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn load(&mut self, records: Dataset) {
        tracing::debug!(records = records.len(), "dataset loaded");
        self.records = records;
        self.position = 0;
        // A new dataset never inherits the previous selection.
        self.reset_selection();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn current(&self) -> Option<&Record> {
        self.records.get(self.position)
    }

    /// One-based position for display, `0` when nothing is loaded.
    pub fn display_position(&self) -> usize {
        (self.position + 1).min(self.records.len())
    }

    pub fn progress_label(&self) -> String {
        format!(
            "Viewing Datapoint {} out of {}",
            self.display_position(),
            self.records.len()
        )
    }

    /// Move one record in `direction`. Boundaries are clamped silently.
    pub fn step(&mut self, direction: Direction) {
        let target = match direction {
            Direction::Forward if self.position + 1 < self.records.len() => self.position + 1,
            Direction::Backward if self.position > 0 => self.position - 1,
            _ => return,
        };
        self.set_position(target);
    }

    /// Jump to `index`, clamped to the last record.
    pub fn seek(&mut self, index: usize) {
        let target = index.min(self.records.len().saturating_sub(1));
        if target != self.position {
            self.set_position(target);
        }
    }

    pub fn selected(&self) -> &IndexSet<FieldPath> {
        &self.selected
    }

    /// Every string field of the current record, selected or not.
    pub fn all_fields(&self) -> Vec<FieldPath> {
        self.current().map(discover).unwrap_or_default()
    }

    pub fn available_fields(&self) -> Vec<FieldPath> {
        self.all_fields()
            .into_iter()
            .filter(|field| !self.selected.contains(field))
            .collect()
    }

    /// Append `path` to the selection, or the first unselected field when
    /// `path` is absent or empty. Returns whether the selection changed.
    ///
    /// An explicit path is accepted even if it does not resolve on the current
    /// record.
    pub fn add_field(&mut self, path: Option<FieldPath>) -> bool {
        let candidate = match path.filter(|p| !p.is_empty()) {
            Some(path) => path,
            None => match self.available_fields().into_iter().next() {
                Some(first) => first,
                None => return false,
            },
        };
        self.selected.insert(candidate)
    }

    pub fn remove_field(&mut self, path: &FieldPath) -> bool {
        self.selected.shift_remove(path)
    }

    pub fn resolve(&self, path: &FieldPath) -> Result<&str, ResolutionError> {
        let record = self
            .current()
            .ok_or_else(|| ResolutionError::new(path.clone(), ResolutionFailure::NoRecord))?;
        resolve(record, path)
    }

    /// Resolve every selected field in selection order; failures stay per field.
    pub fn resolve_selected(&self) -> Vec<FieldView> {
        self.selected
            .iter()
            .map(|field| {
                let resolved = self.resolve(field).map(str::to_string);
                FieldView::from_resolution(field.clone(), resolved)
            })
            .collect()
    }

    fn set_position(&mut self, position: usize) {
        tracing::debug!(from = self.position, to = position, "position changed");
        self.position = position;
        match self.policy {
            SelectionPolicy::Reset => self.reset_selection(),
            SelectionPolicy::Retain => self.retain_selection(),
        }
    }

    fn reset_selection(&mut self) {
        self.selected.clear();
        if let Some(first) = self.all_fields().into_iter().next() {
            self.selected.insert(first);
        }
        tracing::debug!(selected = self.selected.len(), "selection reset");
    }

    fn retain_selection(&mut self) {
        let Some(record) = self.records.get(self.position) else {
            self.selected.clear();
            return;
        };
        self.selected.retain(|field| resolve(record, field).is_ok());
        if self.selected.is_empty() {
            self.reset_selection();
        }
    }
}
