//! TypeScript source emission. Thin orchestration: the resolvers have already
//! decided every name, type expression, and import; this layer only renders
//! them into file contents.

mod clients_file;
mod imports;
mod types_file;
mod writer;


pub use clients_file::render_clients_file;
pub use types_file::render_types_file;
pub(crate) use writer::SourceWriter;

pub(crate) const FILE_HEADER: &str = "// Auto-generated by fetcher-tsgen. Do not edit.";
pub(crate) const TYPES_FILE_NAME: &str = "types.ts";
pub(crate) const CLIENTS_FILE_NAME: &str = "clients.ts";

/// Output-directory-relative file path for a module path, e.g.
/// `/example/cart` + `types.ts` -> `example/cart/types.ts`.
pub(crate) fn module_file_path(module_path: &str, file_name: &str) -> String {
  let trimmed = module_path.trim_matches('/');
  if trimmed.is_empty() {
    file_name.to_string()
  } else {
    format!("{trimmed}/{file_name}")
  }
}
