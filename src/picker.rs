use crate::model::FieldPath;

/// Single-field selector that stays valid as the offered field list changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPicker {
    selected: Option<FieldPath>,
}

impl FieldPicker {
    pub fn new(fields: &[FieldPath]) -> Self {
        Self {
            selected: fields.first().cloned(),
        }
    }

    pub fn selected(&self) -> Option<&FieldPath> {
        self.selected.as_ref()
    }

    /// Choose `field`. The choice is checked against the offered fields on the
    /// next [`FieldPicker::sync`].
    pub fn choose(&mut self, field: impl Into<FieldPath>) {
        self.selected = Some(field.into());
    }

    pub fn sync(&mut self, fields: &[FieldPath]) {
        let keep = self
            .selected
            .as_ref()
            .is_some_and(|current| fields.contains(current));
        if !keep {
            self.selected = fields.first().cloned();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_picker_over_no_fields_selects_nothing() {
        assert_eq!(FieldPicker::new(&[]).selected(), None);
    }
}
