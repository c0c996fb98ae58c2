use std::{collections::BTreeMap, sync::LazyLock};

use regex::Regex;

static TEMPLATE_PARAM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{([^{}]+)\}").unwrap());

/// Interpolates a path template. Every placeholder must have a value;
/// an unresolved one is an explicit error, never a literal pass-through.
pub fn render_path(template: &str, values: &BTreeMap<String, String>) -> anyhow::Result<String> {
  let mut rendered = String::with_capacity(template.len());
  let mut last_end = 0;

  for captures in TEMPLATE_PARAM_RE.captures_iter(template) {
    let matched = captures.get(0).expect("capture group 0 always exists");
    let name = &captures[1];

    let Some(value) = values.get(name) else {
      anyhow::bail!("Missing required path parameter: {name}");
    };

    rendered.push_str(&template[last_end..matched.start()]);
    rendered.push_str(value);
    last_end = matched.end();
  }

  rendered.push_str(&template[last_end..]);
  Ok(rendered)
}
