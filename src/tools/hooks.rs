use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::pre_commit_hook_path;
use crate::error::{Result, ScaffoldError};
use crate::utils::shell::{self, CommandSpec};

/// Pre-commit hook: check then fix formatting, then check then fix lint.
pub const PRE_COMMIT_HOOK: &str = r#"#!/usr/bin/env sh
. "$(dirname -- "$0")/_/husky.sh"

# Check prettier formatting, print issues, and then fix them
npx prettier --check . || {
  echo "Prettier found issues in the files listed above. Fixing them now..."
  npx prettier --write .
  echo "Prettier issues have been fixed."
}

# Check eslint issues, print issues, and then fix them
npx eslint . || {
  echo "ESLint found issues in the files listed above. Fixing them now..."
  npx eslint . --fix
  echo "ESLint issues have been fixed."
}
"#;

/// Bootstrap husky and replace its generated pre-commit hook.
pub fn install(root: &Path) -> Result<PathBuf> {
    info!("installing husky");
    shell::run_all(&husky_commands(root))?;
    write_pre_commit_hook(root)
}

pub fn husky_commands(root: &Path) -> Vec<CommandSpec> {
    vec![
        CommandSpec::new("npx", ["husky-init"], root),
        CommandSpec::new("npm", ["install"], root),
    ]
}

/// Overwrite `.husky/pre-commit`. The `.husky` directory must already exist.
pub fn write_pre_commit_hook(root: &Path) -> Result<PathBuf> {
    let path = pre_commit_hook_path(root);
    fs::write(&path, PRE_COMMIT_HOOK.as_bytes()).map_err(|source| ScaffoldError::Write {
        path: path.clone(),
        source,
    })?;
    mark_executable(&path)?;
    Ok(path)
}

#[cfg(unix)]
fn mark_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).map_err(|source| {
        ScaffoldError::Write {
            path: path.to_path_buf(),
            source,
        }
    })
}

#[cfg(not(unix))]
fn mark_executable(_path: &Path) -> Result<()> {
    Ok(())
}
