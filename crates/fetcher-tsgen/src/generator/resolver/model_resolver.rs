use indexmap::IndexMap;
use oas3::spec::{ObjectSchema, SchemaType, SchemaTypeSet};

use super::{dependencies::collect_dependencies, type_resolver::TypeResolver};
use crate::generator::{
  ast::{DependencyDefinition, ModelDefinition},
  naming::module_info::resolve_model_info,
  schema_registry::SchemaRegistry,
  wow,
};

/// Resolves one named schema into a [`ModelDefinition`].
///
/// Wow-mapped keys short-circuit into reference models that are imported and
/// never generated. Everything else becomes either an alias model (no
/// properties, shape in `type_expr`) or an interface model (property map plus
/// collected dependencies). Underspecified schemas degrade to `any`; a single
/// bad schema never aborts the run.
pub struct ModelResolver<'a> {
  registry: &'a SchemaRegistry,
  type_resolver: TypeResolver<'a>,
}

impl<'a> ModelResolver<'a> {
  pub fn new(registry: &'a SchemaRegistry) -> Self {
    Self {
      registry,
      type_resolver: TypeResolver::new(registry),
    }
  }

  pub fn resolve(&self, key: &str, schema: &ObjectSchema) -> ModelDefinition {
    if let Some(mapped) = wow::lookup(key) {
      return ModelDefinition {
        name: mapped.to_string(),
        title: schema.title.clone(),
        description: schema.description.clone(),
        is_reference: true,
        dependencies: vec![DependencyDefinition::new(wow::WOW_MODULE_SPECIFIER, mapped)],
        properties: None,
        type_expr: mapped.to_string(),
      };
    }

    let info = resolve_model_info(key);
    let declared_object = matches!(
      schema.schema_type,
      Some(SchemaTypeSet::Single(SchemaType::Object))
    );

    if schema.properties.is_empty() && !declared_object {
      // Alias, enum, or primitive model. The shape is the whole type
      // expression; no property map and no import list of its own.
      return ModelDefinition {
        name: info.name,
        title: schema.title.clone(),
        description: schema.description.clone(),
        is_reference: false,
        dependencies: Vec::new(),
        properties: None,
        type_expr: self.type_resolver.resolve_type(schema),
      };
    }

    if schema.properties.is_empty() {
      // `type: object` with no declared properties: an open object.
      return ModelDefinition {
        name: info.name,
        title: schema.title.clone(),
        description: schema.description.clone(),
        is_reference: false,
        dependencies: Vec::new(),
        properties: Some(IndexMap::new()),
        type_expr: "object".to_string(),
      };
    }

    let mut properties = IndexMap::new();
    for (prop_name, prop_ref) in &schema.properties {
      properties.insert(prop_name.clone(), self.type_resolver.resolve_type_ref(prop_ref));
    }

    ModelDefinition {
      name: info.name,
      title: schema.title.clone(),
      description: schema.description.clone(),
      is_reference: false,
      dependencies: collect_dependencies(self.registry, schema),
      properties: Some(properties),
      type_expr: "object".to_string(),
    }
  }
}
