use itertools::Itertools;

use super::{FILE_HEADER, SourceWriter, TYPES_FILE_NAME, imports::import_specifier, module_file_path};
use crate::generator::{
  ast::{GeneratedFile, ModelDefinition, ModuleDefinition},
  naming::identifiers::is_valid_ts_identifier,
};

/// Renders one module's `types.ts`: import declarations for the merged
/// dependencies, then one declaration per non-reference model. Reference
/// models never appear here; they are imported by their consumers.
pub fn render_types_file(module: &ModuleDefinition) -> GeneratedFile {
  let mut writer = SourceWriter::new();
  writer.line(FILE_HEADER);

  let mut wrote_imports = false;
  for dep in &module.dependencies {
    if let Some(specifier) = import_specifier(&module.path, &dep.module_specifier) {
      if !wrote_imports {
        writer.blank();
        wrote_imports = true;
      }
      writer.line(&format!(
        "import {{ {} }} from '{specifier}';",
        dep.named_imports.iter().join(", ")
      ));
    }
  }

  for model in &module.models {
    writer.blank();
    render_model(&mut writer, model);
  }

  GeneratedFile {
    path: module_file_path(&module.path, TYPES_FILE_NAME),
    content: writer.finish(),
  }
}

fn render_model(writer: &mut SourceWriter, model: &ModelDefinition) {
  if let Some(doc) = model.doc_text() {
    writer.jsdoc(&doc);
  }

  match &model.properties {
    Some(properties) if properties.is_empty() => {
      writer.line(&format!("export interface {} {{}}", model.name));
    }
    Some(properties) => {
      writer.line(&format!("export interface {} {{", model.name));
      for (prop_name, type_expr) in properties {
        writer.line(&format!("  {}: {type_expr};", property_key(prop_name)));
      }
      writer.line("}");
    }
    None => {
      writer.line(&format!("export type {} = {};", model.name, model.type_expr));
    }
  }
}

fn property_key(name: &str) -> String {
  if is_valid_ts_identifier(name) {
    name.to_string()
  } else {
    format!("'{name}'")
  }
}
