use super::identifiers::pascal_case;
use crate::generator::wow;

/// Where a schema's generated type lives: the interface name and the
/// output-directory-relative module path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleInfo {
  pub name: String,
  pub path: String,
}

/// Computes the [`ModuleInfo`] for a dot-delimited schema key.
///
/// The key is split on `.`; the first segment whose first character is
/// uppercase starts the name portion, and every segment before it forms the
/// module path. `example.cart.AddCartItem` places `AddCartItem` in
/// `/example/cart`, and `ai.AiMessage.Assistant` yields `AiMessageAssistant`
/// in `/ai`.
///
/// A key with no uppercase-leading segment keeps the whole key as the name,
/// verbatim, with path `/`. Note the asymmetry: only the name built from the
/// uppercase branch goes through [`pascal_case`].
///
/// Keys with a fixed counterpart in `@ahoo-wang/fetcher-wow` short-circuit to
/// that package specifier as their path and are never generated locally.
pub fn resolve_model_info(schema_key: &str) -> ModuleInfo {
  if let Some(mapped) = wow::lookup(schema_key) {
    return ModuleInfo {
      name: mapped.to_string(),
      path: wow::WOW_MODULE_SPECIFIER.to_string(),
    };
  }

  if schema_key.is_empty() {
    return ModuleInfo {
      name: String::new(),
      path: "/".to_string(),
    };
  }

  let segments: Vec<&str> = schema_key.split('.').collect();
  let boundary = segments
    .iter()
    .position(|segment| segment.chars().next().is_some_and(char::is_uppercase));

  match boundary {
    Some(index) => {
      let path = if index == 0 {
        "/".to_string()
      } else {
        format!("/{}", segments[..index].join("/"))
      };
      ModuleInfo {
        name: pascal_case(&segments[index..].join(".")),
        path,
      }
    }
    None => ModuleInfo {
      name: schema_key.to_string(),
      path: "/".to_string(),
    },
  }
}

/// Path portion of a client tag, under the same segmentation rule as
/// [`resolve_model_info`]: lowercase-leading segments are directories.
///
/// Tag `example.cart` maps to `/example/cart`, matching where the synthetic
/// request/response models for that tag are placed.
pub fn resolve_tag_path(tag: &str) -> String {
  if tag.is_empty() {
    return "/".to_string();
  }

  let segments: Vec<&str> = tag
    .split('.')
    .take_while(|segment| !segment.chars().next().is_some_and(char::is_uppercase))
    .collect();

  if segments.is_empty() {
    "/".to_string()
  } else {
    format!("/{}", segments.join("/"))
  }
}
