use std::collections::BTreeSet;

use indexmap::IndexMap;

/// The named imports a generated file needs from one module specifier.
///
/// At most one of these exists per distinct `module_specifier` within a given
/// consumer; merging is a set union of `named_imports`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyDefinition {
  pub module_specifier: String,
  pub named_imports: BTreeSet<String>,
}

impl DependencyDefinition {
  pub fn new(module_specifier: impl Into<String>, named_import: impl Into<String>) -> Self {
    Self {
      module_specifier: module_specifier.into(),
      named_imports: BTreeSet::from([named_import.into()]),
    }
  }
}

/// One generated TypeScript type.
///
/// `is_reference` marks a well-known library type that is imported instead of
/// declared. `properties` is `Some` for interface models (possibly empty for
/// open objects) and `None` for alias/primitive/enum models, whose shape
/// lives in `type_expr` instead.
#[derive(Debug, Clone)]
pub struct ModelDefinition {
  pub name: String,
  pub title: Option<String>,
  pub description: Option<String>,
  pub is_reference: bool,
  pub dependencies: Vec<DependencyDefinition>,
  pub properties: Option<IndexMap<String, String>>,
  pub type_expr: String,
}

impl ModelDefinition {
  /// JSDoc text for the declaration, joining title and description with a
  /// newline when both are present. `None` when neither is set.
  pub fn doc_text(&self) -> Option<String> {
    match (&self.title, &self.description) {
      (Some(title), Some(description)) => Some(format!("{title}\n{description}")),
      (Some(title), None) => Some(title.clone()),
      (None, Some(description)) => Some(description.clone()),
      (None, None) => None,
    }
  }
}
