/// Computes the import specifier for a dependency as seen from a module's
/// `types.ts`.
///
/// Package specifiers (anything not starting with `/`) pass through
/// unchanged. A dependency on the module's own path needs no import at all.
/// Everything else becomes a relative path to the sibling module's `types`.
pub fn import_specifier(from_path: &str, dep_specifier: &str) -> Option<String> {
  if !dep_specifier.starts_with('/') {
    return Some(dep_specifier.to_string());
  }
  if dep_specifier == from_path {
    return None;
  }
  Some(format!("{}/types", relative_specifier(from_path, dep_specifier)))
}

/// Like [`import_specifier`], but for a `clients.ts` sitting next to its
/// module's `types.ts`: same-module dependencies import from `./types`.
pub(crate) fn client_import_specifier(from_path: &str, dep_specifier: &str) -> String {
  if !dep_specifier.starts_with('/') {
    return dep_specifier.to_string();
  }
  if dep_specifier == from_path {
    return "./types".to_string();
  }
  format!("{}/types", relative_specifier(from_path, dep_specifier))
}

fn relative_specifier(from_path: &str, to_path: &str) -> String {
  let from_parts: Vec<&str> = from_path.split('/').filter(|part| !part.is_empty()).collect();
  let to_parts: Vec<&str> = to_path.split('/').filter(|part| !part.is_empty()).collect();

  let common = from_parts
    .iter()
    .zip(to_parts.iter())
    .take_while(|(a, b)| a == b)
    .count();

  let ups = from_parts.len() - common;
  let mut parts: Vec<&str> = if ups == 0 {
    vec!["."]
  } else {
    vec![".."; ups]
  };
  parts.extend(&to_parts[common..]);
  parts.join("/")
}
