//! Field discovery over a single record.
//!
//! A record is walked in key order; every string leaf yields one dotted
//! [`FieldPath`]. Non-empty objects are descended into, everything else
//! (numbers, booleans, null, arrays, empty objects) is skipped.

use crate::errors::{ResolutionError, ResolutionFailure};
use crate::model::{FieldPath, FieldValue, Record};
use indexmap::IndexSet;

pub fn discover(record: &Record) -> Vec<FieldPath> {
    // A dotted key can spell the same path as a nested leaf; keep the first.
    let mut fields = IndexSet::new();
    collect_fields(record, None, &mut fields);
    fields.into_iter().collect()
}

fn collect_fields(record: &Record, prefix: Option<&FieldPath>, fields: &mut IndexSet<FieldPath>) {
    for (key, value) in record {
        let path = match prefix {
            Some(parent) => parent.child(key),
            None => FieldPath::from(key.as_str()),
        };
        match FieldValue::classify(value) {
            FieldValue::String(_) => {
                fields.insert(path);
            }
            FieldValue::Nested(child) => collect_fields(child, Some(&path), fields),
            FieldValue::Other => {}
        }
    }
}

/// Follow `path` through `record` and return the string it names.
pub fn resolve<'a>(record: &'a Record, path: &FieldPath) -> Result<&'a str, ResolutionError> {
    let mut cursor = record;
    let mut segments = path.segments().peekable();

    while let Some(segment) = segments.next() {
        let value = cursor.get(segment).ok_or_else(|| {
            ResolutionError::new(
                path.clone(),
                ResolutionFailure::MissingSegment(segment.to_string()),
            )
        })?;

        let is_last = segments.peek().is_none();
        match (FieldValue::classify(value), is_last) {
            (FieldValue::String(text), true) => return Ok(text),
            (_, true) => {
                return Err(ResolutionError::new(
                    path.clone(),
                    ResolutionFailure::NotString,
                ));
            }
            (FieldValue::Nested(child), false) => cursor = child,
            (_, false) => {
                return Err(ResolutionError::new(
                    path.clone(),
                    ResolutionFailure::NotNested(segment.to_string()),
                ));
            }
        }
    }

    // `split` always yields at least one segment, so the loop returns first.
    Err(ResolutionError::new(path.clone(), ResolutionFailure::NotString))
}
