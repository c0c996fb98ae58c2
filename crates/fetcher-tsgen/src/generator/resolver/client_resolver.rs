use std::collections::BTreeMap;

use indexmap::IndexMap;
use oas3::spec::{ObjectOrReference, ObjectSchema, Operation, ParameterIn, PathItem};

use super::{
  CLIENT_SUFFIX, JSON_CONTENT_TYPE, REQUEST_SUFFIX, RESPONSE_SUFFIX, SUCCESS_STATUS,
  dependencies::merge_dependency,
  model_resolver::ModelResolver,
  path_template,
};
use crate::generator::{
  ast::{ClientDefinition, DependencyDefinition, EndpointDefinition, HttpMethod, ModelDefinition},
  naming::{
    identifiers::{capitalize, pascal_case, sanitize_method_name},
    module_info::{resolve_model_info, resolve_tag_path},
  },
  schema_registry::SchemaRegistry,
  wow,
};

/// Output of client resolution: clients placed at their tag-derived module
/// paths, plus the synthetic request/response models minted along the way
/// (keyed like ordinary schemas so they join module partitioning).
pub struct ClientResolution {
  pub clients: Vec<(String, ClientDefinition)>,
  pub models: Vec<(String, ModelDefinition)>,
}

/// Walks `paths` and groups operations into per-tag clients.
///
/// Operations without tags or without an `operationId` are skipped. Grouping
/// uses the primary (first) tag only; secondary tags are ignored. Only the
/// `200` response and `application/json` content are considered.
pub struct ClientResolver<'a> {
  registry: &'a SchemaRegistry,
  model_resolver: &'a ModelResolver<'a>,
}

impl<'a> ClientResolver<'a> {
  pub fn new(registry: &'a SchemaRegistry, model_resolver: &'a ModelResolver<'a>) -> Self {
    Self {
      registry,
      model_resolver,
    }
  }

  pub fn resolve(&self) -> ClientResolution {
    let mut clients: IndexMap<String, ClientDefinition> = IndexMap::new();
    let mut models: Vec<(String, ModelDefinition)> = Vec::new();

    let Some(paths) = self.registry.spec().paths.as_ref() else {
      return ClientResolution {
        clients: Vec::new(),
        models: Vec::new(),
      };
    };

    for (path, path_item) in paths {
      for (method, operation) in operations_in_priority_order(path_item) {
        if operation.tags.is_empty() {
          continue;
        }
        let Some(operation_id) = operation.operation_id.as_deref() else {
          continue;
        };

        let primary_tag = operation.tags[0].clone();
        let method_name = derive_method_name(&primary_tag, operation_id);

        let rendered_path = match self.canonical_path(path, path_item, operation) {
          Ok(rendered) => rendered,
          Err(err) => {
            self
              .registry
              .warn(format!("Skipping {} {path}: {err}", method.as_str()));
            continue;
          }
        };

        let mut dependencies = Vec::new();
        let request_body =
          self.resolve_body_type(&primary_tag, &method_name, operation, &mut models, &mut dependencies);
        let response =
          self.resolve_response_type(&primary_tag, &method_name, operation, &mut models, &mut dependencies);

        let endpoint = EndpointDefinition {
          name: method_name,
          method,
          path: rendered_path,
          request_body,
          response,
          dependencies,
        };

        clients
          .entry(primary_tag.clone())
          .or_insert_with(|| ClientDefinition {
            name: client_name(&primary_tag),
            endpoints: Vec::new(),
          })
          .endpoints
          .push(endpoint);
      }
    }

    ClientResolution {
      clients: clients
        .into_iter()
        .map(|(tag, client)| (resolve_tag_path(&tag), client))
        .collect(),
      models,
    }
  }

  /// Re-renders the path template with its own placeholders, which verifies
  /// that every placeholder is declared as a path parameter on the operation
  /// or path item.
  fn canonical_path(&self, path: &str, path_item: &PathItem, operation: &Operation) -> anyhow::Result<String> {
    let spec = self.registry.spec();
    let mut declared: BTreeMap<String, String> = BTreeMap::new();

    for param_ref in path_item.parameters.iter().chain(operation.parameters.iter()) {
      if let Ok(param) = param_ref.resolve(spec)
        && param.location == ParameterIn::Path
      {
        declared.insert(param.name.clone(), format!("{{{}}}", param.name));
      }
    }

    path_template::render_path(path, &declared)
  }

  fn resolve_body_type(
    &self,
    tag: &str,
    method_name: &str,
    operation: &Operation,
    models: &mut Vec<(String, ModelDefinition)>,
    dependencies: &mut Vec<DependencyDefinition>,
  ) -> Option<String> {
    let body_ref = operation.request_body.as_ref()?;
    let body = body_ref.resolve(self.registry.spec()).ok()?;
    let media_type = body.content.get(JSON_CONTENT_TYPE)?;
    let schema_ref = media_type.schema.as_ref()?;

    self.named_model_for(tag, method_name, REQUEST_SUFFIX, schema_ref, models, dependencies)
  }

  fn resolve_response_type(
    &self,
    tag: &str,
    method_name: &str,
    operation: &Operation,
    models: &mut Vec<(String, ModelDefinition)>,
    dependencies: &mut Vec<DependencyDefinition>,
  ) -> Option<String> {
    let responses = operation.responses.as_ref()?;
    let response_ref = responses.get(SUCCESS_STATUS)?;
    let response = response_ref.resolve(self.registry.spec()).ok()?;
    let media_type = response.content.get(JSON_CONTENT_TYPE)?;
    let schema_ref = media_type.schema.as_ref()?;

    self.named_model_for(tag, method_name, RESPONSE_SUFFIX, schema_ref, models, dependencies)
  }

  /// Referenced bodies reuse the referenced schema's generated type; inline
  /// bodies are minted a named model under a synthetic schema key
  /// (`{tag}.{MethodName}{suffix}`) so they are generated rather than
  /// inlined into the signature. A broken body reference warns and leaves
  /// the endpoint untyped.
  fn named_model_for(
    &self,
    tag: &str,
    method_name: &str,
    suffix: &str,
    schema_ref: &ObjectOrReference<ObjectSchema>,
    models: &mut Vec<(String, ModelDefinition)>,
    dependencies: &mut Vec<DependencyDefinition>,
  ) -> Option<String> {
    match schema_ref {
      ObjectOrReference::Ref { ref_path, .. } => {
        if let Some(key) = SchemaRegistry::parse_ref(ref_path)
          && let Some(mapped) = wow::lookup(&key)
        {
          merge_dependency(dependencies, DependencyDefinition::new(wow::WOW_MODULE_SPECIFIER, mapped));
          return Some(mapped.to_string());
        }

        let (key, _) = self.registry.resolve_ref(ref_path)?;
        let info = resolve_model_info(&key);
        merge_dependency(dependencies, DependencyDefinition::new(info.path, info.name.clone()));
        Some(info.name)
      }
      ObjectOrReference::Object(schema) => {
        let key = format!("{tag}.{}{suffix}", pascal_case(method_name));
        let model = self.model_resolver.resolve(&key, schema);
        let info = resolve_model_info(&key);
        merge_dependency(dependencies, DependencyDefinition::new(info.path, info.name.clone()));
        models.push((key, model));
        Some(info.name)
      }
    }
  }
}

/// The eight HTTP methods a path item can define, visited in fixed priority
/// order so generation is deterministic when several coexist.
fn operations_in_priority_order(path_item: &PathItem) -> Vec<(HttpMethod, &Operation)> {
  let slots = [
    &path_item.get,
    &path_item.put,
    &path_item.post,
    &path_item.delete,
    &path_item.options,
    &path_item.head,
    &path_item.patch,
    &path_item.trace,
  ];

  HttpMethod::ALL
    .into_iter()
    .zip(slots)
    .filter_map(|(method, slot)| slot.as_ref().map(|operation| (method, operation)))
    .collect()
}

/// Method name: `operationId` minus the `"{tag}."` prefix when present, with
/// everything outside `[a-zA-Z0-9_$]` replaced by underscores.
fn derive_method_name(primary_tag: &str, operation_id: &str) -> String {
  let stripped = operation_id
    .strip_prefix(&format!("{primary_tag}."))
    .unwrap_or(operation_id);
  sanitize_method_name(stripped)
}

/// Client name: last dot-segment of the tag, capitalized, plus `Client`.
fn client_name(tag: &str) -> String {
  let last_segment = tag.rsplit('.').next().unwrap_or(tag);
  format!("{}{CLIENT_SUFFIX}", capitalize(last_segment))
}
