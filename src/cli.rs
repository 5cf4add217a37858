use clap::Parser;
use tracing::debug;

use crate::developers::common::{ProjectContext, resolve_project_name};
use crate::developers::next;
use crate::error::ScaffoldError;

/// Root CLI for create-next-app-plus. There are no flags: every argument is
/// taken literally and only the first one is used.
#[derive(Parser)]
#[command(name = "create-next-app-plus")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Project name, then anything else (ignored)
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

impl Cli {
    pub fn project_name(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }
}

/// Parse, scaffold, and exit 1 on the first failure.
pub fn run() {
    let cli = Cli::parse();
    let name = resolve_project_name(cli.project_name());

    if let Err(e) = ProjectContext::from_current_dir(name).and_then(|ctx| next::create(&ctx)) {
        fail(&e);
    }
}

fn fail(err: &ScaffoldError) -> ! {
    debug!(error = ?err, "scaffolding failed");
    eprintln!("{err}");
    std::process::exit(1);
}
