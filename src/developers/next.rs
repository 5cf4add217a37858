use tracing::info;

use crate::config::{FORMATTER_PACKAGE, GENERATOR_PACKAGE, PrettierConfig};
use crate::developers::common::ProjectContext;
use crate::error::Result;
use crate::tools::{git, hooks};
use crate::utils::shell::{self, CommandSpec};

/// Create a Next.js app and set up Prettier, git and husky inside it.
///
/// Steps run strictly in order; the first failure is returned and nothing
/// after it runs. Whatever was already created stays on disk.
pub fn create(ctx: &ProjectContext) -> Result<()> {
    info!(name = %ctx.name, "scaffolding project");
    shell::run(&scaffold_command(ctx))?;

    info!("installing formatter");
    shell::run(&formatter_install_command(ctx))?;

    let path = PrettierConfig::default().write_to(&ctx.root)?;
    println!("Created {}", path.display());

    git::init_and_commit(&ctx.root)?;

    let hook = hooks::install(&ctx.root)?;
    println!("Wrote {}", hook.display());

    println!("Next.js project setup complete with Prettier and Husky!");
    Ok(())
}

/// Runs in the invoking directory; the project directory does not exist yet.
fn scaffold_command(ctx: &ProjectContext) -> CommandSpec {
    CommandSpec::new("npx", [GENERATOR_PACKAGE, ctx.name.as_str()], &ctx.parent)
}

fn formatter_install_command(ctx: &ProjectContext) -> CommandSpec {
    CommandSpec::new("npm", ["install", "--save-dev", FORMATTER_PACKAGE], &ctx.root)
}
