//! [`TestProject`] builder for package directories under test.

use buildcfg_fs::NormalizedPath;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A temporary package directory with helpers for setup and assertion.
///
/// # Example
///
/// ```rust,no_run
/// use buildcfg_test_utils::TestProject;
/// use serde_json::json;
///
/// let project = TestProject::new()
///     .with_package_json(json!({ "name": "demo" }))
///     .with_file("build.config.json", r#"{ "entries": ["src/index"] }"#);
/// project.assert_file_exists("package.json");
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// A project with a bare `package.json` and `src/index.ts`.
    pub fn package(name: &str) -> Self {
        Self::new()
            .with_package_json(serde_json::json!({ "name": name, "version": "0.0.0" }))
            .with_file("src/index.ts", "export const answer = 42;\n")
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn root(&self) -> NormalizedPath {
        NormalizedPath::new(self.temp_dir.path())
    }

    /// Write `content` to `path` (relative to the root), creating parent directories.
    pub fn write_file(&self, path: &str, content: &str) {
        let full_path = self.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content).unwrap();
    }

    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.write_file(path, content);
        self
    }

    pub fn write_package_json(&self, manifest: &Value) {
        self.write_file(
            "package.json",
            &serde_json::to_string_pretty(manifest).unwrap(),
        );
    }

    pub fn with_package_json(self, manifest: Value) -> Self {
        self.write_package_json(&manifest);
        self
    }

    pub fn read_file(&self, path: &str) -> String {
        let full_path = self.path().join(path);
        fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()))
    }

    /// Parse `package.json`.
    ///
    /// # Panics
    /// Panics if the manifest is missing or not valid JSON.
    pub fn package_json(&self) -> Value {
        serde_json::from_str(&self.read_file("package.json"))
            .unwrap_or_else(|e| panic!("package.json is not valid JSON: {e}"))
    }

    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.path().join(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    pub fn assert_file_not_exists(&self, path: &str) {
        let full_path = self.path().join(path);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the file at `path` contains `content`.
    pub fn assert_file_contains(&self, path: &str, content: &str) {
        let file_content = self.read_file(path);
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            path,
            content,
            file_content
        );
    }
}
