use anyhow::Result;
use schemars::schema_for;
use serde_json::Value;
use std::path::PathBuf;

use crate::cli::SchemaTarget;
use crate::config::ViewerConfig;
use crate::model::{
    DatasetFile, DatasetSummary, FieldComparison, FieldListResponse, FieldPath, FieldView,
    MultiFieldView, ResolveResponse,
};
use crate::runtime::stateless::StatelessRuntime;

pub async fn summary(file: PathBuf, config: &ViewerConfig) -> Result<Value> {
    let runtime = StatelessRuntime;
    let (file, session) = runtime.open_session(&file, config).await?;
    let navigator = session.navigator();
    Ok(serde_json::to_value(DatasetSummary {
        file: file.display().to_string(),
        record_count: navigator.len(),
        progress: navigator.progress_label(),
        fields: navigator.all_fields(),
    })?)
}

pub async fn fields(file: PathBuf, position: usize, config: &ViewerConfig) -> Result<Value> {
    let runtime = StatelessRuntime;
    let (_, session) = runtime.open_session_at(&file, position, config).await?;
    Ok(serde_json::to_value(session.field_list())?)
}

pub async fn resolve(
    file: PathBuf,
    paths: Vec<String>,
    position: usize,
    config: &ViewerConfig,
) -> Result<Value> {
    anyhow::ensure!(!paths.is_empty(), "at least one field path must be provided");
    let runtime = StatelessRuntime;
    let (_, session) = runtime.open_session_at(&file, position, config).await?;
    let navigator = session.navigator();

    let values = paths
        .into_iter()
        .map(FieldPath::from)
        .map(|field| {
            let resolved = navigator.resolve(&field).map(str::to_string);
            FieldView::from_resolution(field, resolved)
        })
        .collect();

    Ok(serde_json::to_value(ResolveResponse {
        position: navigator.position(),
        values,
    })?)
}

pub fn schema(target: SchemaTarget) -> Result<Value> {
    let schema = match target {
        SchemaTarget::Input => schema_for!(DatasetFile),
        SchemaTarget::Summary => schema_for!(DatasetSummary),
        SchemaTarget::Fields => schema_for!(FieldListResponse),
        SchemaTarget::Resolve => schema_for!(ResolveResponse),
        SchemaTarget::View => schema_for!(MultiFieldView),
        SchemaTarget::Compare => schema_for!(FieldComparison),
    };
    Ok(serde_json::to_value(schema)?)
}
