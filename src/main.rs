mod cli;
mod config;
mod developers;
mod error;
mod tools;
mod utils;

const LOG_ENV: &str = "CREATE_NEXT_APP_PLUS_LOG";

fn main() {
    if let Err(e) = init_tracing() {
        eprintln!("warning: {e:#}");
    }
    cli::run();
}

fn init_tracing() -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing subscriber: {e}"))
}
