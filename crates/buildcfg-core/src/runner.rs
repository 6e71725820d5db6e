//! Bundler execution
//!
//! The resolved config is written to a transient ES module in the project
//! root and passed to the bundler with `--config`. The module is removed
//! again when the run ends, however it ends.

use crate::module::render_module;
use crate::{Error, Result};
use buildcfg_fs::{NormalizedPath, io};
use buildcfg_meta::Bundler;
use serde_json::Value;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

/// Prefix of the transient config module file name.
pub const TEMP_CONFIG_PREFIX: &str = ".rad-build-temp";

/// How long an interrupted bundler gets to exit before it is killed.
const INTERRUPT_GRACE: Duration = Duration::from_secs(3);

/// Path of the transient config module for `bundler` under `root`.
///
/// `.rad-build-temp.tsup.config.js` or `.rad-build-temp.build.config.js`.
pub fn temp_config_path(root: &NormalizedPath, bundler: Bundler) -> NormalizedPath {
    root.join(&format!(
        "{}.{}.js",
        TEMP_CONFIG_PREFIX,
        bundler.config_stem()
    ))
}

/// A config module on disk that is deleted on drop.
#[derive(Debug)]
pub struct TempConfig {
    path: NormalizedPath,
}

impl TempConfig {
    /// Render `config` as a module and write it to `path`.
    pub fn write(path: NormalizedPath, config: &Value) -> Result<Self> {
        io::write_text(&path, &render_module(config))?;
        tracing::debug!(path = %path, "Wrote temporary config");
        Ok(Self { path })
    }

    pub fn path(&self) -> &NormalizedPath {
        &self.path
    }
}

impl Drop for TempConfig {
    fn drop(&mut self) {
        match io::remove_if_exists(&self.path) {
            Ok(_) => tracing::debug!(path = %self.path, "Removed temporary config"),
            Err(e) => tracing::warn!(path = %self.path, error = %e, "Could not remove temporary config"),
        }
    }
}

/// Options for a single bundler run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Pass `--watch` and keep running until interrupted
    pub watch: bool,
}

/// Runs a bundler against a resolved config.
#[derive(Debug, Clone)]
pub struct BundlerRunner {
    root: NormalizedPath,
}

impl BundlerRunner {
    pub fn new(root: NormalizedPath) -> Self {
        Self { root }
    }

    /// The bundler executable: the project's `node_modules/.bin` copy if
    /// present, else the bare name for `PATH` lookup.
    pub fn executable(&self, bundler: Bundler) -> PathBuf {
        let name = if cfg!(windows) {
            format!("{}.cmd", bundler.command())
        } else {
            bundler.command().to_string()
        };
        let local = self.root.join("node_modules/.bin").join(&name);
        if local.is_file() {
            local.to_native()
        } else {
            PathBuf::from(name)
        }
    }

    /// Command-line arguments passed to the bundler.
    pub fn args(&self, config: &NormalizedPath, options: RunOptions) -> Vec<String> {
        let mut args = vec!["--config".to_string(), config.to_string()];
        if options.watch {
            args.push("--watch".to_string());
        }
        args
    }

    /// Write `native_config` to the transient module and run `bundler` on it.
    ///
    /// Output is inherited from this process. On Ctrl-C the bundler, which
    /// shares the terminal's process group, gets a grace period to exit on
    /// its own before it is killed. An interrupted watch run counts as success.
    pub async fn run(
        &self,
        bundler: Bundler,
        native_config: &Value,
        options: RunOptions,
    ) -> Result<()> {
        let temp = TempConfig::write(temp_config_path(&self.root, bundler), native_config)?;
        let executable = self.executable(bundler);
        let args = self.args(temp.path(), options);

        tracing::info!(tool = %bundler, executable = %executable.display(), ?args, "Running bundler");

        let mut child = Command::new(&executable)
            .args(&args)
            .current_dir(self.root.to_native())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| Error::BundlerSpawn {
                tool: bundler.to_string(),
                source,
            })?;

        let mut interrupted = false;
        let status = tokio::select! {
            status = child.wait() => status?,
            _ = tokio::signal::ctrl_c() => {
                interrupted = true;
                tracing::info!(tool = %bundler, "Interrupted, waiting for bundler to exit");
                match tokio::time::timeout(INTERRUPT_GRACE, child.wait()).await {
                    Ok(status) => status?,
                    Err(_) => {
                        tracing::warn!(tool = %bundler, "Bundler did not exit, killing it");
                        child.kill().await?;
                        child.wait().await?
                    }
                }
            }
        };

        drop(temp);

        if status.success() || (interrupted && options.watch) {
            Ok(())
        } else {
            Err(Error::BundlerFailed {
                tool: bundler.to_string(),
                code: status.code(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_temp_config_path() {
        let root = NormalizedPath::new("/work/lib");
        assert_eq!(
            temp_config_path(&root, Bundler::Tsup).as_str(),
            "/work/lib/.rad-build-temp.tsup.config.js"
        );
        assert_eq!(
            temp_config_path(&root, Bundler::Unbuild).as_str(),
            "/work/lib/.rad-build-temp.build.config.js"
        );
    }

    #[test]
    fn test_temp_config_is_removed_on_drop() {
        let temp = TempDir::new().unwrap();
        let root = NormalizedPath::new(temp.path());
        let path = temp_config_path(&root, Bundler::Tsup);

        let guard = TempConfig::write(path.clone(), &json!({ "minify": true })).unwrap();
        let written = std::fs::read_to_string(path.to_native()).unwrap();
        assert!(written.starts_with("export default {"));

        drop(guard);
        assert!(!path.exists());
    }

    #[test]
    fn test_args() {
        let runner = BundlerRunner::new(NormalizedPath::new("/work/lib"));
        let config = NormalizedPath::new("/work/lib/.rad-build-temp.tsup.config.js");

        assert_eq!(
            runner.args(&config, RunOptions::default()),
            vec!["--config", "/work/lib/.rad-build-temp.tsup.config.js"]
        );
        assert_eq!(
            runner.args(&config, RunOptions { watch: true }).last().map(String::as_str),
            Some("--watch")
        );
    }

    #[test]
    fn test_executable_prefers_local_bin() {
        let temp = TempDir::new().unwrap();
        let runner = BundlerRunner::new(NormalizedPath::new(temp.path()));
        assert_eq!(
            runner.executable(Bundler::Unbuild).file_name().unwrap(),
            if cfg!(windows) { "unbuild.cmd" } else { "unbuild" }
        );
        assert!(!runner.executable(Bundler::Unbuild).is_absolute());

        let bin = temp.path().join("node_modules/.bin");
        std::fs::create_dir_all(&bin).unwrap();
        let name = if cfg!(windows) { "unbuild.cmd" } else { "unbuild" };
        std::fs::write(bin.join(name), "").unwrap();
        assert!(runner.executable(Bundler::Unbuild).is_absolute());
    }

    #[tokio::test]
    async fn test_spawn_failure_still_removes_temp_config() {
        let temp = TempDir::new().unwrap();
        let root = NormalizedPath::new(temp.path());
        let bin = temp.path().join("node_modules/.bin");
        std::fs::create_dir_all(&bin).unwrap();
        let name = if cfg!(windows) { "tsup.cmd" } else { "tsup" };
        // Present but not executable
        std::fs::write(bin.join(name), "").unwrap();

        let runner = BundlerRunner::new(root.clone());
        let result = runner.run(Bundler::Tsup, &json!({}), RunOptions::default()).await;

        assert!(result.is_err());
        assert!(!temp_config_path(&root, Bundler::Tsup).exists());
    }
}
