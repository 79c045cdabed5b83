//! CLI entry point - the composition root.
//!
//! Infrastructure is wired together via bootstrap; command dispatch routes
//! to handlers that only see the `CliContext`.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use punchline_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Load environment variables before clap reads its `env` fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    match run(&cli).await {
        Ok(code) => Ok(code),
        Err(err) => {
            eprintln!("Error: {err}");
            Ok(ExitCode::from(err.exit_code()))
        }
    }
}

/// Install the stderr subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;
    Ok(())
}

async fn run(cli: &Cli) -> Result<ExitCode, CliError> {
    let ctx = bootstrap(&CliConfig::from_cli(cli))?;
    let mut stdout = std::io::stdout();

    match cli.selected_command() {
        Commands::Once => {
            let outcome = handlers::once::execute(&ctx, cli.format, &mut stdout).await?;
            Ok(if outcome.is_ok() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Commands::Interactive => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            handlers::interactive::execute(&ctx, cli.format, stdin, &mut stdout).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
