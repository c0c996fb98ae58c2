use itertools::Itertools;
use oas3::spec::{ObjectOrReference, ObjectSchema, Schema, SchemaType, SchemaTypeSet};

use super::TS_ANY;
use crate::generator::{naming::module_info::resolve_model_info, schema_registry::SchemaRegistry, wow};

/// Maps one schema node to a TypeScript type expression string.
///
/// Pure with respect to its output: identical input always yields an
/// identical expression, which the union branch relies on for dedup.
/// Broken references degrade to `any` and are recorded on the registry as
/// warnings rather than failing the run.
pub struct TypeResolver<'a> {
  registry: &'a SchemaRegistry,
}

impl<'a> TypeResolver<'a> {
  pub fn new(registry: &'a SchemaRegistry) -> Self {
    Self { registry }
  }

  pub fn resolve_type_ref(&self, schema_ref: &ObjectOrReference<ObjectSchema>) -> String {
    match schema_ref {
      ObjectOrReference::Ref { ref_path, .. } => self.resolve_reference(ref_path),
      ObjectOrReference::Object(schema) => self.resolve_type(schema),
    }
  }

  /// Resolution order: unions, `allOf` (first member only), arrays, literal
  /// enums, scalar types, bare property bags, then `any`.
  pub fn resolve_type(&self, schema: &ObjectSchema) -> String {
    if !schema.one_of.is_empty() {
      return self.resolve_union(&schema.one_of);
    }
    if !schema.any_of.is_empty() {
      return self.resolve_union(&schema.any_of);
    }
    if !schema.all_of.is_empty() {
      return self.resolve_type_ref(&schema.all_of[0]);
    }
    if matches!(schema.schema_type, Some(SchemaTypeSet::Single(SchemaType::Array))) {
      return self.resolve_array(schema);
    }
    if !schema.enum_values.is_empty() {
      return Self::literal_union(&schema.enum_values);
    }
    if let Some(ref type_set) = schema.schema_type {
      return match type_set {
        SchemaTypeSet::Single(single) => self.scalar_type(*single, schema),
        SchemaTypeSet::Multiple(types) => types
          .iter()
          .map(|single| self.scalar_type(*single, schema))
          .unique()
          .join(" | "),
      };
    }
    if !schema.properties.is_empty() {
      return "object".to_string();
    }
    TS_ANY.to_string()
  }

  fn resolve_reference(&self, ref_path: &str) -> String {
    if let Some(key) = SchemaRegistry::parse_ref(ref_path)
      && let Some(mapped) = wow::lookup(&key)
    {
      return mapped.to_string();
    }

    match self.registry.resolve_ref(ref_path) {
      Some((key, _)) => resolve_model_info(&key).name,
      None => TS_ANY.to_string(),
    }
  }

  /// Union members are resolved recursively and deduplicated by resulting
  /// type string, preserving first-seen order.
  fn resolve_union(&self, members: &[ObjectOrReference<ObjectSchema>]) -> String {
    members
      .iter()
      .map(|member| self.resolve_type_ref(member))
      .unique()
      .join(" | ")
  }

  fn resolve_array(&self, schema: &ObjectSchema) -> String {
    match schema.items {
      Some(ref items_box) => match **items_box {
        Schema::Object(ref items_ref) => format!("{}[]", self.resolve_type_ref(items_ref)),
        Schema::Boolean(_) => format!("{TS_ANY}[]"),
      },
      None => format!("{TS_ANY}[]"),
    }
  }

  /// Renders an enum as a union of literals: strings are single-quoted,
  /// everything else is stringified as-is.
  fn literal_union(values: &[serde_json::Value]) -> String {
    values
      .iter()
      .map(|value| match value {
        serde_json::Value::String(text) => format!("'{text}'"),
        other => other.to_string(),
      })
      .join(" | ")
  }

  fn scalar_type(&self, single: SchemaType, schema: &ObjectSchema) -> String {
    match single {
      SchemaType::Boolean => "boolean".to_string(),
      SchemaType::Integer | SchemaType::Number => "number".to_string(),
      SchemaType::String => "string".to_string(),
      SchemaType::Null => "null".to_string(),
      SchemaType::Object => "object".to_string(),
      SchemaType::Array => self.resolve_array(schema),
    }
  }
}
