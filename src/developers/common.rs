use std::path::{Path, PathBuf};

use crate::config::DEFAULT_PROJECT_NAME;
use crate::error::{Result, ScaffoldError};

/// The project being created. Built once and handed to every step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectContext {
    pub name: String,
    /// Directory the generator runs in
    pub parent: PathBuf,
    /// `parent` joined with `name`
    pub root: PathBuf,
}

impl ProjectContext {
    pub fn new(name: impl Into<String>, parent: impl AsRef<Path>) -> Self {
        let name = name.into();
        let parent = parent.as_ref().to_path_buf();
        let root = parent.join(&name);
        Self { name, parent, root }
    }

    pub fn from_current_dir(name: impl Into<String>) -> Result<Self> {
        let parent =
            std::env::current_dir().map_err(|source| ScaffoldError::WorkingDirectory { source })?;
        Ok(Self::new(name, parent))
    }
}

/// First positional argument if it is non-empty, else the default name.
pub fn resolve_project_name(arg: Option<&str>) -> String {
    arg.filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_PROJECT_NAME)
        .to_string()
}
