use std::sync::LazyLock;

use regex::Regex;

static METHOD_NAME_INVALID_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_$]").unwrap());

/// Converts a string into a `PascalCase` TypeScript identifier.
///
/// Words are split on hyphens, underscores, whitespace, dots, and existing
/// camel/Pascal boundaries (a new word starts before every uppercase letter).
/// Each word gets its first alphabetic character uppercased and the remainder
/// lowercased; leading non-alphabetic characters pass through unchanged, so
/// `"hello123-world"` becomes `"Hello123World"`.
pub fn pascal_case(input: &str) -> String {
  split_words(input).iter().map(|word| capitalize_word(word)).collect()
}

/// Uppercases only the first character, leaving the rest untouched.
///
/// Used for client naming (`cart` -> `Cart`), where the full `PascalCase`
/// tokenizer would mangle tag segments that are already cased.
pub fn capitalize(input: &str) -> String {
  let mut chars = input.chars();
  match chars.next() {
    None => String::new(),
    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
  }
}

/// Lowercases only the first character.
pub fn lower_first(input: &str) -> String {
  let mut chars = input.chars();
  match chars.next() {
    None => String::new(),
    Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
  }
}

/// Sanitizes an `operationId` fragment into a TypeScript method name by
/// replacing every character outside `[a-zA-Z0-9_$]` with an underscore.
pub fn sanitize_method_name(name: &str) -> String {
  METHOD_NAME_INVALID_RE.replace_all(name, "_").into_owned()
}

/// Whether a property name can be emitted bare in a TypeScript interface,
/// or needs to be quoted.
pub fn is_valid_ts_identifier(name: &str) -> bool {
  let mut chars = name.chars();
  match chars.next() {
    None => false,
    Some(first) if !first.is_ascii_alphabetic() && first != '_' && first != '$' => false,
    Some(_) => chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$'),
  }
}

fn split_words(input: &str) -> Vec<String> {
  let mut words = Vec::new();
  let mut current = String::new();

  for ch in input.chars() {
    if matches!(ch, '-' | '_' | '.') || ch.is_whitespace() {
      if !current.is_empty() {
        words.push(std::mem::take(&mut current));
      }
      continue;
    }
    if ch.is_uppercase() && !current.is_empty() {
      words.push(std::mem::take(&mut current));
    }
    current.push(ch);
  }

  if !current.is_empty() {
    words.push(current);
  }

  words
}

fn capitalize_word(word: &str) -> String {
  let mut out = String::with_capacity(word.len());
  let mut seen_alphabetic = false;

  for ch in word.chars() {
    if seen_alphabetic {
      out.extend(ch.to_lowercase());
    } else if ch.is_alphabetic() {
      seen_alphabetic = true;
      out.extend(ch.to_uppercase());
    } else {
      out.push(ch);
    }
  }

  out
}
