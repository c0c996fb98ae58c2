use std::{
  cell::RefCell,
  collections::{BTreeMap, BTreeSet},
  string::ToString,
};

use indexmap::IndexMap;
use oas3::{
  Spec,
  spec::{ObjectOrReference, ObjectSchema, Schema},
};

/// Registry of every named schema in the document, with reference resolution,
/// a dependency graph, and cycle detection.
///
/// Reference failures (external `$ref`s, dangling targets) degrade to `None`
/// and are recorded as warnings; they never abort a run.
#[derive(Debug)]
pub struct SchemaRegistry {
  /// Schemas keyed by their dotted schema key, in deterministic order.
  schemas: IndexMap<String, ObjectSchema>,
  /// Dependency edges: schema key -> keys it references.
  dependencies: BTreeMap<String, BTreeSet<String>>,
  cycles: Vec<Vec<String>>,
  warnings: RefCell<Vec<String>>,
  spec: Spec,
}

impl SchemaRegistry {
  pub fn new(spec: Spec) -> Self {
    let mut registry = Self {
      schemas: IndexMap::new(),
      dependencies: BTreeMap::new(),
      cycles: Vec::new(),
      warnings: RefCell::new(Vec::new()),
      spec,
    };

    if let Some(components) = &registry.spec.components {
      for (key, schema_ref) in &components.schemas {
        match schema_ref.resolve(&registry.spec) {
          Ok(schema) => {
            registry.schemas.insert(key.clone(), schema);
          }
          Err(err) => {
            registry
              .warnings
              .borrow_mut()
              .push(format!("Skipping unresolvable schema {key}: {err}"));
          }
        }
      }
    }

    registry.build_dependencies();
    registry.detect_cycles();
    registry
  }

  pub fn spec(&self) -> &Spec {
    &self.spec
  }

  pub fn get(&self, key: &str) -> Option<&ObjectSchema> {
    self.schemas.get(key)
  }

  pub fn schemas(&self) -> impl Iterator<Item = (&String, &ObjectSchema)> {
    self.schemas.iter()
  }

  pub fn cycles(&self) -> &[Vec<String>] {
    &self.cycles
  }

  pub fn warn(&self, message: impl Into<String>) {
    self.warnings.borrow_mut().push(message.into());
  }

  pub fn take_warnings(&self) -> Vec<String> {
    std::mem::take(&mut self.warnings.borrow_mut())
  }

  /// Extracts the schema key from a `$ref` path. `None` for external
  /// references or anything not under `#/components/schemas/`.
  pub fn parse_ref(ref_path: &str) -> Option<String> {
    ref_path
      .strip_prefix("#/components/schemas/")
      .map(ToString::to_string)
  }

  /// Resolves a `$ref` path to its schema key and node, warning and returning
  /// `None` for external or dangling references.
  pub fn resolve_ref(&self, ref_path: &str) -> Option<(String, &ObjectSchema)> {
    let Some(key) = Self::parse_ref(ref_path) else {
      self.warn(format!("Unsupported external reference: {ref_path}"));
      return None;
    };

    match self.schemas.get(&key) {
      Some(schema) => Some((key, schema)),
      None => {
        self.warn(format!("Reference to unknown schema: {ref_path}"));
        None
      }
    }
  }

  fn extract_ref_key(obj_ref: &ObjectOrReference<ObjectSchema>) -> Option<String> {
    match obj_ref {
      ObjectOrReference::Ref { ref_path, .. } => Self::parse_ref(ref_path),
      ObjectOrReference::Object(_) => None,
    }
  }

  fn build_dependencies(&mut self) {
    let keys: Vec<String> = self.schemas.keys().cloned().collect();

    for key in keys {
      let mut deps = BTreeSet::new();
      if let Some(schema) = self.schemas.get(&key) {
        Self::collect_edges(schema, &mut deps);
      }
      self.dependencies.insert(key, deps);
    }
  }

  /// Recursively collects every schema key referenced from a schema node.
  fn collect_edges(schema: &ObjectSchema, deps: &mut BTreeSet<String>) {
    for prop_schema in schema.properties.values() {
      Self::collect_edges_from_ref(prop_schema, deps);
    }

    for member in schema
      .one_of
      .iter()
      .chain(schema.any_of.iter())
      .chain(schema.all_of.iter())
    {
      Self::collect_edges_from_ref(member, deps);
    }

    if let Some(ref items_box) = schema.items
      && let Schema::Object(ref schema_ref) = **items_box
    {
      Self::collect_edges_from_ref(schema_ref, deps);
    }
  }

  fn collect_edges_from_ref(schema_ref: &ObjectOrReference<ObjectSchema>, deps: &mut BTreeSet<String>) {
    if let Some(key) = Self::extract_ref_key(schema_ref) {
      deps.insert(key);
    }

    if let ObjectOrReference::Object(inline_schema) = schema_ref {
      Self::collect_edges(inline_schema, deps);
    }
  }

  /// DFS cycle detection over the dependency graph. Cyclic schemas are still
  /// generated; the cycles are only surfaced in statistics.
  fn detect_cycles(&mut self) {
    let mut visited = BTreeSet::new();
    let mut rec_stack = BTreeSet::new();
    let mut cycles = Vec::new();
    let mut path = Vec::new();

    let keys: Vec<String> = self.schemas.keys().cloned().collect();

    for key in keys {
      if !visited.contains(&key) {
        self.dfs_detect_cycle(&key, &mut visited, &mut rec_stack, &mut path, &mut cycles);
      }
    }

    self.cycles = cycles;
  }

  fn dfs_detect_cycle(
    &self,
    node: &str,
    visited: &mut BTreeSet<String>,
    rec_stack: &mut BTreeSet<String>,
    path: &mut Vec<String>,
    cycles: &mut Vec<Vec<String>>,
  ) {
    visited.insert(node.to_string());
    rec_stack.insert(node.to_string());
    path.push(node.to_string());

    if let Some(deps) = self.dependencies.get(node) {
      for dep in deps {
        if !visited.contains(dep) {
          self.dfs_detect_cycle(dep, visited, rec_stack, path, cycles);
        } else if rec_stack.contains(dep)
          && let Some(cycle_start) = path.iter().position(|n| n == dep)
        {
          cycles.push(path[cycle_start..].to_vec());
        }
      }
    }

    path.pop();
    rec_stack.remove(node);
  }
}
