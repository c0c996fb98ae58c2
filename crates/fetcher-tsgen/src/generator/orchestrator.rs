//! Orchestration for the OpenAPI to TypeScript generation pipeline.
//!
//! The pipeline is pure until the caller writes the returned files: build the
//! schema registry, resolve every named schema into a model, resolve clients
//! (minting synthetic request/response models), partition models into modules
//! by their resolved path, merge imports, and render file contents.

use indexmap::IndexMap;

use crate::generator::{
  ast::{ClientDefinition, GeneratedFile, ModelDefinition, ModuleDefinition},
  codegen::{render_clients_file, render_types_file},
  naming::module_info::resolve_model_info,
  resolver::{client_resolver::ClientResolver, dependencies::merge_dependencies, model_resolver::ModelResolver},
  schema_registry::SchemaRegistry,
};

pub struct Orchestrator {
  spec: oas3::Spec,
}

/// Statistics about one generation run.
#[derive(Debug, Default)]
pub struct GenerationStats {
  /// Models resolved from named schemas plus synthetic request/response
  /// models, excluding reference substitutions.
  pub models_resolved: usize,
  /// Schemas substituted with a well-known library import.
  pub reference_models: usize,
  pub clients_resolved: usize,
  pub endpoints_resolved: usize,
  pub modules_generated: usize,
  pub cycles_detected: usize,
  pub cycle_details: Vec<Vec<String>>,
  /// Non-fatal degradations collected during resolution.
  pub warnings: Vec<String>,
}

pub struct GenerationOutput {
  pub files: Vec<GeneratedFile>,
  pub stats: GenerationStats,
}

impl Orchestrator {
  pub fn new(spec: oas3::Spec) -> Self {
    Self { spec }
  }

  pub fn generate(&self) -> anyhow::Result<GenerationOutput> {
    let registry = SchemaRegistry::new(self.spec.clone());
    let model_resolver = ModelResolver::new(&registry);

    let mut models: Vec<(String, ModelDefinition)> = Vec::new();
    for (key, schema) in registry.schemas() {
      models.push((key.clone(), model_resolver.resolve(key, schema)));
    }

    let client_resolver = ClientResolver::new(&registry, &model_resolver);
    let resolution = client_resolver.resolve();
    models.extend(resolution.models);

    let mut stats = GenerationStats {
      cycles_detected: registry.cycles().len(),
      cycle_details: registry.cycles().to_vec(),
      ..GenerationStats::default()
    };

    let modules = partition_modules(models, &mut stats);
    let clients = group_clients(resolution.clients, &mut stats);

    let mut files = Vec::new();
    for module in modules.values() {
      files.push(render_types_file(module));
    }
    for (path, path_clients) in &clients {
      files.push(render_clients_file(path, path_clients));
    }

    stats.modules_generated = modules.len();
    stats.warnings = registry.take_warnings();

    Ok(GenerationOutput { files, stats })
  }
}

/// Groups models into one [`ModuleDefinition`] per resolved module path.
/// Keys that normalize to the same path intentionally share a file; module
/// order is first-seen order of the paths.
fn partition_modules(
  models: Vec<(String, ModelDefinition)>,
  stats: &mut GenerationStats,
) -> IndexMap<String, ModuleDefinition> {
  let mut modules: IndexMap<String, ModuleDefinition> = IndexMap::new();

  for (key, model) in models {
    if model.is_reference {
      stats.reference_models += 1;
      continue;
    }
    stats.models_resolved += 1;

    let path = resolve_model_info(&key).path;
    let module = modules
      .entry(path.clone())
      .or_insert_with(|| ModuleDefinition::new(path));
    merge_dependencies(&mut module.dependencies, model.dependencies.iter().cloned());
    module.models.push(model);
  }

  modules
}

fn group_clients(
  placed_clients: Vec<(String, ClientDefinition)>,
  stats: &mut GenerationStats,
) -> IndexMap<String, Vec<ClientDefinition>> {
  let mut grouped: IndexMap<String, Vec<ClientDefinition>> = IndexMap::new();

  for (path, client) in placed_clients {
    stats.clients_resolved += 1;
    stats.endpoints_resolved += client.endpoints.len();
    grouped.entry(path).or_default().push(client);
  }

  grouped
}
