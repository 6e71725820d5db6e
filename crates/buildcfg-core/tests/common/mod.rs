use async_trait::async_trait;
use buildcfg_core::{ConfigResolver, Error, ModuleEvaluator, Result};
use buildcfg_fs::NormalizedPath;
use buildcfg_test_utils::TestProject;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Serves canned default exports keyed by file name instead of running `node`.
#[derive(Default)]
pub struct FakeEvaluator {
    modules: HashMap<String, Value>,
}

impl FakeEvaluator {
    pub fn with_module(mut self, name: &str, export: Value) -> Self {
        self.modules.insert(name.to_string(), export);
        self
    }
}

#[async_trait]
impl ModuleEvaluator for FakeEvaluator {
    async fn evaluate(&self, _root: &NormalizedPath, path: &NormalizedPath) -> Result<Value> {
        let name = path.file_name().unwrap_or_default();
        self.modules.get(name).cloned().ok_or_else(|| Error::Evaluation {
            path: path.clone(),
            message: format!("no module registered for {name}"),
        })
    }
}

/// Write each module to disk and register its default export with a fake evaluator.
pub fn resolver_with_modules(project: &TestProject, modules: &[(&str, Value)]) -> ConfigResolver {
    let mut evaluator = FakeEvaluator::default();
    for (name, export) in modules {
        project.write_file(name, "export default {}\n");
        evaluator = evaluator.with_module(name, export.clone());
    }
    ConfigResolver::new(project.root()).with_evaluator(Arc::new(evaluator))
}
