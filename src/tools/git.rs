use std::path::Path;

use git2::Repository;
use tracing::info;

use crate::config::INITIAL_COMMIT_MESSAGE;
use crate::error::{Result, ScaffoldError};
use crate::utils::shell::{self, CommandSpec};

/// Create the repository, stage everything and record the initial commit.
pub fn init_and_commit(root: &Path) -> Result<()> {
    init_repository(root)?;
    shell::run_all(&commit_commands(root))
}

/// Initialize a repository at `root`. An existing repository is reinitialized
/// in place, the same as `git init`.
pub fn init_repository(root: &Path) -> Result<()> {
    info!(path = %root.display(), "initializing git repository");
    Repository::init(root).map_err(|e| ScaffoldError::git(root, &e))?;
    Ok(())
}

pub fn commit_commands(root: &Path) -> Vec<CommandSpec> {
    vec![
        CommandSpec::new("git", ["add", "."], root),
        CommandSpec::new("git", ["commit", "-m", INITIAL_COMMIT_MESSAGE], root),
    ]
}
