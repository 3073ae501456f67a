//! Dataset selection for CLI commands

use aewiki::WikiData;
use anyhow::{Context, Result};
use std::borrow::Cow;
use std::path::Path;

/// Load the dataset at `path`, or the bundled dataset when `None`
pub fn load(path: Option<&Path>) -> Result<Cow<'static, WikiData>> {
    match path {
        Some(path) => {
            tracing::info!("Loading wiki data from {}", path.display());
            let data = WikiData::from_path(path)
                .with_context(|| format!("Failed to load wiki data from {}", path.display()))?;
            Ok(Cow::Owned(data))
        }
        None => {
            tracing::debug!("Using bundled wiki data");
            WikiData::bundled()
                .map(Cow::Borrowed)
                .context("Bundled wiki data is invalid")
        }
    }
}
