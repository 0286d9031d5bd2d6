use crate::config::ViewerConfig;
use crate::loader;
use crate::state::ViewerSession;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Opens a fresh session per command; nothing survives between invocations.
#[derive(Debug, Default, Clone)]
pub struct StatelessRuntime;

impl StatelessRuntime {
    pub async fn open_session(
        &self,
        path: &Path,
        config: &ViewerConfig,
    ) -> Result<(PathBuf, ViewerSession)> {
        let (absolute, dataset) = loader::load_file(path, config).await?;
        let mut session = ViewerSession::new(config);
        session.load(dataset);
        Ok((absolute, session))
    }

    /// Open `path` and move to `position`, clamped to the last datapoint.
    pub async fn open_session_at(
        &self,
        path: &Path,
        position: usize,
        config: &ViewerConfig,
    ) -> Result<(PathBuf, ViewerSession)> {
        let (absolute, mut session) = self.open_session(path, config).await?;
        session.seek(position);
        Ok((absolute, session))
    }
}
