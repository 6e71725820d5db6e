//! rad-build CLI
//!
//! Builds TypeScript packages with tsup or unbuild from layered configuration.

mod cli;
mod commands;
mod error;
mod interactive;
mod output;

use buildcfg_fs::NormalizedPath;
use clap::{CommandFactory, Parser};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use cli::{BuildArgs, Cli, Commands};
use commands::InitOptions;
use error::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let root = NormalizedPath::new(std::env::current_dir()?);
    match cli.command {
        Some(cmd) => execute_command(&root, cmd).await,
        None => commands::run_build(&root, &cli.build).await,
    }
}

/// Log to stderr, filtered by `RUST_LOG` when set.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .init();

    tracing::debug!("Verbose mode enabled");
}

async fn execute_command(root: &NormalizedPath, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Build(args) => commands::run_build(root, &args).await,
        Commands::Init {
            bundler,
            preset,
            force,
        } => commands::run_init(
            root,
            &InitOptions {
                bundler,
                preset,
                force,
            },
        ),
        Commands::Validate { config, bundler } => {
            commands::run_validate(root, config.as_deref(), bundler).await
        }
        Commands::Info { config } => commands::run_info(root, config.as_deref()).await,
        Commands::Watch {
            config,
            preset,
            bundler,
        } => {
            let args = BuildArgs {
                config,
                preset,
                bundler,
                ..Default::default()
            };
            commands::run_watch(root, args).await
        }
        Commands::ListPresets => commands::run_list_presets(),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "rad-build", &mut std::io::stdout());
            Ok(())
        }
    }
}
