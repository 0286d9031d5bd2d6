#![allow(dead_code)]
use datapoint_viewer::{Dataset, FieldPath, Record};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn record(value: Value) -> Record {
    match value {
        Value::Object(map) => map,
        other => panic!("fixture must be an object, got {other}"),
    }
}

pub fn dataset(value: Value) -> Dataset {
    match value {
        Value::Array(items) => items.into_iter().map(record).collect(),
        other => panic!("fixture must be an array, got {other}"),
    }
}

pub fn paths(items: &[&str]) -> Vec<FieldPath> {
    items.iter().copied().map(FieldPath::from).collect()
}

pub fn selected(items: impl IntoIterator<Item = FieldPath>) -> Vec<String> {
    items.into_iter().map(|p| p.as_str().to_string()).collect()
}

/// The two-record dataset used throughout: nested fields on the first record
/// only.
pub fn sample_json() -> Value {
    serde_json::json!([
        {"a": "x", "b": {"c": "y"}},
        {"a": "z"}
    ])
}

pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("tempdir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        self.write_bytes(name, contents.as_bytes())
    }

    pub fn write_bytes(&self, name: &str, contents: &[u8]) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).expect("write fixture");
        path
    }

    pub fn write_json(&self, name: &str, value: &Value) -> PathBuf {
        self.write(name, &serde_json::to_string_pretty(value).expect("serialize fixture"))
    }
}
