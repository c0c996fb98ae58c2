use oas3::spec::{ObjectOrReference, ObjectSchema, Schema};

use crate::generator::{
  ast::DependencyDefinition,
  naming::module_info::resolve_model_info,
  schema_registry::SchemaRegistry,
  wow,
};

/// Collects the imports a schema needs, walking the same structure the type
/// resolver recurses through: properties, union and intersection members, and
/// array items.
///
/// Collecting twice and merging both results equals collecting once; the
/// merge is a set union keyed by module specifier.
pub fn collect_dependencies(registry: &SchemaRegistry, schema: &ObjectSchema) -> Vec<DependencyDefinition> {
  let mut acc = Vec::new();
  collect_into(registry, schema, &mut acc);
  acc
}

fn collect_into(registry: &SchemaRegistry, schema: &ObjectSchema, acc: &mut Vec<DependencyDefinition>) {
  for prop_schema in schema.properties.values() {
    collect_from_ref(registry, prop_schema, acc);
  }

  for member in schema
    .one_of
    .iter()
    .chain(schema.any_of.iter())
    .chain(schema.all_of.iter())
  {
    collect_from_ref(registry, member, acc);
  }

  if let Some(ref items_box) = schema.items
    && let Schema::Object(ref items_ref) = **items_box
  {
    collect_from_ref(registry, items_ref, acc);
  }
}

fn collect_from_ref(registry: &SchemaRegistry, schema_ref: &ObjectOrReference<ObjectSchema>, acc: &mut Vec<DependencyDefinition>) {
  match schema_ref {
    ObjectOrReference::Ref { ref_path, .. } => {
      if let Some(dep) = dependency_for_ref(registry, ref_path) {
        merge_dependency(acc, dep);
      }
    }
    ObjectOrReference::Object(inline_schema) => collect_into(registry, inline_schema, acc),
  }
}

/// The import a single `$ref` translates to: the fixed Wow package for mapped
/// keys, otherwise the referenced schema's own module. Broken references
/// yield no import; the type resolver already degrades them to `any`.
pub fn dependency_for_ref(registry: &SchemaRegistry, ref_path: &str) -> Option<DependencyDefinition> {
  let key = SchemaRegistry::parse_ref(ref_path)?;

  if let Some(mapped) = wow::lookup(&key) {
    return Some(DependencyDefinition::new(wow::WOW_MODULE_SPECIFIER, mapped));
  }

  registry.get(&key)?;
  let info = resolve_model_info(&key);
  Some(DependencyDefinition::new(info.path, info.name))
}

/// Merges one dependency into an accumulator: union the named imports when
/// the module specifier already exists, append otherwise.
pub fn merge_dependency(acc: &mut Vec<DependencyDefinition>, dep: DependencyDefinition) {
  match acc
    .iter_mut()
    .find(|existing| existing.module_specifier == dep.module_specifier)
  {
    Some(existing) => existing.named_imports.extend(dep.named_imports),
    None => acc.push(dep),
  }
}

pub fn merge_dependencies(acc: &mut Vec<DependencyDefinition>, incoming: impl IntoIterator<Item = DependencyDefinition>) {
  for dep in incoming {
    merge_dependency(acc, dep);
  }
}
