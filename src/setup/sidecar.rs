// SPDX-License-Identifier: MPL-2.0
//! `.nukerc`: where the theme was installed, so re-runs can skip the prompt.

use crate::config::defaults::SIDECAR_FILE;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sidecar {
    /// Install location as entered, relative to the project root.
    pub theme_path: String,
}

impl Sidecar {
    #[must_use]
    pub fn new(theme_path: impl Into<String>) -> Self {
        Self {
            theme_path: theme_path.into(),
        }
    }

    /// Absolute location of the installed theme.
    #[must_use]
    pub fn theme_dir(&self, project_root: &Path) -> PathBuf {
        super::project_path(project_root, &self.theme_path)
    }
}

/// Location of the sidecar in `project_root`.
#[must_use]
pub fn path(project_root: &Path) -> PathBuf {
    project_root.join(SIDECAR_FILE)
}

/// Reads the sidecar, or `None` when the project has none.
pub fn load(project_root: &Path) -> Result<Option<Sidecar>> {
    let path = path(project_root);
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&path)?;
    Ok(Some(serde_json::from_str(&content)?))
}

/// Writes the sidecar as pretty-printed JSON.
pub fn save(project_root: &Path, sidecar: &Sidecar) -> Result<()> {
    let content = serde_json::to_string_pretty(sidecar)?;
    fs::write(path(project_root), content)?;
    Ok(())
}
