use itertools::Itertools;

use super::{CLIENTS_FILE_NAME, FILE_HEADER, SourceWriter, imports::client_import_specifier, module_file_path};
use crate::generator::{
  ast::{ClientDefinition, DependencyDefinition, EndpointDefinition, GeneratedFile},
  naming::identifiers::lower_first,
  resolver::dependencies::merge_dependencies,
};

/// Renders the `clients.ts` for one module path: imports for every type the
/// endpoints touch, one interface per client, and a static endpoint table
/// (`{ method, path }` per operation) the runtime binds against.
pub fn render_clients_file(module_path: &str, clients: &[ClientDefinition]) -> GeneratedFile {
  let mut writer = SourceWriter::new();
  writer.line(FILE_HEADER);

  let mut dependencies: Vec<DependencyDefinition> = Vec::new();
  for client in clients {
    for endpoint in &client.endpoints {
      merge_dependencies(&mut dependencies, endpoint.dependencies.iter().cloned());
    }
  }

  if !dependencies.is_empty() {
    writer.blank();
    for dep in &dependencies {
      writer.line(&format!(
        "import {{ {} }} from '{}';",
        dep.named_imports.iter().join(", "),
        client_import_specifier(module_path, &dep.module_specifier)
      ));
    }
  }

  for client in clients {
    writer.blank();
    render_client_interface(&mut writer, client);
    writer.blank();
    render_endpoint_table(&mut writer, client);
  }

  GeneratedFile {
    path: module_file_path(module_path, CLIENTS_FILE_NAME),
    content: writer.finish(),
  }
}

fn render_client_interface(writer: &mut SourceWriter, client: &ClientDefinition) {
  writer.line(&format!("export interface {} {{", client.name));
  for endpoint in &client.endpoints {
    writer.line(&format!("  {};", method_signature(endpoint)));
  }
  writer.line("}");
}

fn method_signature(endpoint: &EndpointDefinition) -> String {
  let parameter = endpoint
    .request_body
    .as_deref()
    .map(|request_type| format!("request: {request_type}"))
    .unwrap_or_default();
  let response_type = endpoint.response.as_deref().unwrap_or("void");
  format!("{}({parameter}): Promise<{response_type}>", endpoint.name)
}

fn render_endpoint_table(writer: &mut SourceWriter, client: &ClientDefinition) {
  writer.line(&format!("export const {}Endpoints = {{", lower_first(&client.name)));
  for endpoint in &client.endpoints {
    writer.line(&format!(
      "  {}: {{ method: '{}', path: '{}' }},",
      endpoint.name,
      endpoint.method.as_str(),
      endpoint.path
    ));
  }
  writer.line("} as const;");
}
