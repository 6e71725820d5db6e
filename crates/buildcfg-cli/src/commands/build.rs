//! Build and watch commands

use buildcfg_core::{BundlerRunner, ConfigResolver, RunOptions};
use buildcfg_fs::NormalizedPath;
use colored::Colorize;

use crate::cli::BuildArgs;
use crate::error::Result;
use crate::output;

/// Run the build command
pub async fn run_build(root: &NormalizedPath, args: &BuildArgs) -> Result<()> {
    println!("{} Building project...", "→".cyan());

    let resolver = ConfigResolver::new(root.clone());
    let resolved = resolver.resolve(&args.resolve_options()).await;

    if let Some(path) = &resolved.config_path {
        println!("{}: {}", "Config".dimmed(), path.as_str().yellow());
    }
    println!("Using bundler: {}", output::bundler(resolved.bundler));

    let runner = BundlerRunner::new(root.clone());
    runner
        .run(
            resolved.bundler,
            &resolved.native_config(),
            RunOptions { watch: args.watch },
        )
        .await?;

    if args.watch {
        println!("{}", "Watch stopped.".dimmed());
    } else {
        println!("{} Build completed successfully!", "✓".green());
    }
    Ok(())
}

/// Run the watch command: a build with watch mode on and no entries.
pub async fn run_watch(root: &NormalizedPath, mut args: BuildArgs) -> Result<()> {
    println!("{} Starting watch mode...", "→".cyan());
    args.entries.clear();
    args.watch = true;
    run_build(root, &args).await
}
