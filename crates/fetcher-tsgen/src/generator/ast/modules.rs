use super::models::{DependencyDefinition, ModelDefinition};

/// Everything destined for one physical `types.ts`: all models whose schema
/// keys normalize to the same module path, plus their merged dependencies.
///
/// Model order is the registry's deterministic iteration order.
#[derive(Debug, Clone)]
pub struct ModuleDefinition {
  pub path: String,
  pub models: Vec<ModelDefinition>,
  pub dependencies: Vec<DependencyDefinition>,
}

impl ModuleDefinition {
  pub fn new(path: impl Into<String>) -> Self {
    Self {
      path: path.into(),
      models: Vec::new(),
      dependencies: Vec::new(),
    }
  }
}

/// A buffered output file. Nothing touches the filesystem until the whole
/// batch has been generated, so a failed run leaves no partial output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
  /// Output-directory-relative path, e.g. `example/cart/types.ts`.
  pub path: String,
  pub content: String,
}
