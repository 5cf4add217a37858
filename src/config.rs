use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScaffoldError};

pub const DEFAULT_PROJECT_NAME: &str = "my-next-app";
pub const GENERATOR_PACKAGE: &str = "create-next-app@latest";
pub const FORMATTER_PACKAGE: &str = "prettier";
pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit from Create Next App Plus";
pub const PRETTIER_CONFIG_FILE: &str = ".prettierrc";
pub const PRE_COMMIT_HOOK_PATH: &[&str] = &[".husky", "pre-commit"];

/// Formatting options written to `.prettierrc`. Field order is the key order
/// in the written file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrettierConfig {
    pub semi: bool,
    pub single_quote: bool,
    pub print_width: u32,
    pub tab_width: u32,
}

impl Default for PrettierConfig {
    fn default() -> Self {
        Self {
            semi: true,
            single_quote: true,
            print_width: 80,
            tab_width: 2,
        }
    }
}

impl PrettierConfig {
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write to `<root>/.prettierrc`, replacing whatever is there.
    pub fn write_to(&self, root: &Path) -> Result<PathBuf> {
        let path = root.join(PRETTIER_CONFIG_FILE);
        let body = self.to_pretty_json().map_err(|e| ScaffoldError::Write {
            path: path.clone(),
            source: e.into(),
        })?;
        fs::write(&path, body.as_bytes()).map_err(|source| ScaffoldError::Write {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}

pub fn pre_commit_hook_path(root: &Path) -> PathBuf {
    PRE_COMMIT_HOOK_PATH
        .iter()
        .fold(root.to_path_buf(), |acc, part| acc.join(part))
}
