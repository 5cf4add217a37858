use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::{Result, ScaffoldError};

/// A program plus its arguments, run in a fixed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl CommandSpec {
    pub fn new<I>(program: impl Into<String>, args: I, cwd: impl AsRef<Path>) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(|a| a.as_ref().to_string()).collect(),
            cwd: cwd.as_ref().to_path_buf(),
        }
    }

    pub fn render(&self) -> String {
        let mut parts = Vec::with_capacity(self.args.len() + 1);
        parts.push(quote_for_display(&self.program));
        for arg in &self.args {
            parts.push(quote_for_display(arg));
        }
        parts.join(" ")
    }
}

/// Run `spec` with inherited stdio and wait for it.
pub fn run(spec: &CommandSpec) -> Result<()> {
    let rendered = spec.render();
    debug!(command = %rendered, cwd = %spec.cwd.display(), "running command");

    let status = Command::new(&spec.program)
        .args(&spec.args)
        .current_dir(&spec.cwd)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| ScaffoldError::command(&rendered, format!("spawning {}: {e}", spec.program)))?;

    if !status.success() {
        let detail = match status.code() {
            Some(code) => format!("exited with code {code}"),
            None => "terminated by signal".to_string(),
        };
        return Err(ScaffoldError::command(rendered, detail));
    }
    Ok(())
}

/// Run each spec in order, stopping at the first failure.
pub fn run_all(specs: &[CommandSpec]) -> Result<()> {
    for spec in specs {
        run(spec)?;
    }
    Ok(())
}

fn quote_for_display(raw: &str) -> String {
    if !raw.is_empty() && !raw.chars().any(|c| c.is_whitespace() || c == '"') {
        return raw.to_string();
    }
    format!("\"{}\"", raw.replace('"', "\\\""))
}
