//! CLI argument parsing using clap derive

use buildcfg_core::ResolveOptions;
use buildcfg_meta::{Bundler, BundlerChoice};
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use serde_json::{Map, Value};

/// rad-build - Build TypeScript packages with tsup or unbuild
///
/// Without a subcommand, builds the project in the current directory.
#[derive(Parser, Debug)]
#[command(name = "rad-build")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Build options used when no subcommand is given
    #[command(flatten)]
    pub build: BuildArgs,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Options shared by the default command and `build`.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildArgs {
    /// Entry points, replacing the configured ones
    pub entries: Vec<String>,

    /// Path to config file
    #[arg(long)]
    pub config: Option<String>,

    /// Use a preset configuration
    #[arg(long)]
    pub preset: Option<String>,

    /// Bundler to use: auto, tsup or unbuild
    #[arg(long, default_value = "auto")]
    pub bundler: BundlerChoice,

    /// Output formats (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub format: Vec<String>,

    /// Minify output
    #[arg(long)]
    pub minify: bool,

    /// Watch mode
    #[arg(long)]
    pub watch: bool,

    /// Generate sourcemaps
    #[arg(long)]
    pub sourcemap: bool,

    /// Generate TypeScript declarations
    #[arg(long)]
    pub dts: bool,

    /// Clean output directory before build
    #[arg(long)]
    pub clean: bool,
}

impl BuildArgs {
    /// Config layer built from the flags that were given.
    ///
    /// `--dts` sets both `dts` (tsup) and `declaration` (unbuild); entries
    /// set both `entry` and `entries`.
    pub fn cli_flags(&self) -> Value {
        let mut flags = Map::new();
        if !self.format.is_empty() {
            flags.insert("format".to_string(), Value::from(self.format.clone()));
        }
        if self.minify {
            flags.insert("minify".to_string(), Value::Bool(true));
        }
        if self.sourcemap {
            flags.insert("sourcemap".to_string(), Value::Bool(true));
        }
        if self.dts {
            flags.insert("dts".to_string(), Value::Bool(true));
            flags.insert("declaration".to_string(), Value::Bool(true));
        }
        if self.clean {
            flags.insert("clean".to_string(), Value::Bool(true));
        }
        if !self.entries.is_empty() {
            flags.insert("entry".to_string(), Value::from(self.entries.clone()));
            flags.insert("entries".to_string(), Value::from(self.entries.clone()));
        }
        Value::Object(flags)
    }

    pub fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions {
            config_path: self.config.clone(),
            preset: self.preset.clone(),
            bundler: self.bundler,
            cli_flags: self.cli_flags(),
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Build your project
    ///
    /// Examples:
    ///   rad-build build                       # Build with the detected bundler
    ///   rad-build build src/index.ts src/cli.ts
    ///   rad-build build --preset library-dual --minify
    Build(BuildArgs),

    /// Initialize build configuration
    ///
    /// Writes tsup.config.ts or build.config.ts and points package.json
    /// at the build output. Prompts for anything not given as a flag.
    Init {
        /// Bundler to configure: tsup or unbuild
        #[arg(long)]
        bundler: Option<Bundler>,

        /// Start from a preset
        #[arg(long)]
        preset: Option<String>,

        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Validate build configuration
    Validate {
        /// Path to config file
        #[arg(long)]
        config: Option<String>,

        /// Bundler to validate against: auto, tsup or unbuild
        #[arg(long, default_value = "auto")]
        bundler: BundlerChoice,
    },

    /// Show build configuration and environment info
    Info {
        /// Path to config file
        #[arg(long)]
        config: Option<String>,
    },

    /// Watch and rebuild on file changes
    Watch {
        /// Path to config file
        #[arg(long)]
        config: Option<String>,

        /// Use a preset configuration
        #[arg(long)]
        preset: Option<String>,

        /// Bundler to use: auto, tsup or unbuild
        #[arg(long, default_value = "auto")]
        bundler: BundlerChoice,
    },

    /// List all available presets
    ListPresets,

    /// Generate shell completions
    ///
    /// Examples:
    ///   rad-build completions bash > ~/.local/share/bash-completion/completions/rad-build
    ///   rad-build completions zsh > ~/.zfunc/_rad-build
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
