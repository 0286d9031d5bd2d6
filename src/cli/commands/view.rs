use anyhow::Result;
use serde_json::Value;
use std::path::PathBuf;

use crate::config::ViewerConfig;
use crate::model::FieldPath;
use crate::runtime::stateless::StatelessRuntime;

/// Replays adds then removes against the default selection at `position`.
pub async fn view(
    file: PathBuf,
    position: usize,
    add: Vec<String>,
    remove: Vec<String>,
    config: &ViewerConfig,
) -> Result<Value> {
    let runtime = StatelessRuntime;
    let (_, mut session) = runtime.open_session_at(&file, position, config).await?;

    for field in add {
        let requested = (!field.is_empty()).then(|| FieldPath::from(field));
        if !session.add_field(requested) {
            tracing::debug!("add field request left the selection unchanged");
        }
    }
    for field in remove {
        session.remove_field(&FieldPath::from(field));
    }

    Ok(serde_json::to_value(session.view())?)
}

pub async fn compare(
    file: PathBuf,
    position: usize,
    left: Option<String>,
    right: Option<String>,
    config: &ViewerConfig,
) -> Result<Value> {
    let runtime = StatelessRuntime;
    let (_, mut session) = runtime.open_session_at(&file, position, config).await?;

    if let Some(left) = left
        && !session.choose_left(left.as_str())
    {
        tracing::warn!(field = %left, "left field not present; using the first field");
    }
    if let Some(right) = right
        && !session.choose_right(right.as_str())
    {
        tracing::warn!(field = %right, "right field not present; using the first field");
    }

    Ok(serde_json::to_value(session.compare())?)
}
