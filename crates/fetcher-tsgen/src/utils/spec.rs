use std::{
  ffi::OsStr,
  path::{Path, PathBuf},
};

use anyhow::Context;
use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};
use oas3::OpenApiV3Spec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecFormat {
  Json,
  Yaml,
}

impl SpecFormat {
  #[must_use]
  pub fn from_extension(ext: &str) -> Option<Self> {
    match ext {
      "json" => Some(Self::Json),
      "yaml" | "yml" => Some(Self::Yaml),
      _ => None,
    }
  }

  /// Infers the format from the document body when the extension is
  /// ambiguous. A `{`/`[` prefix or a successful JSON parse means JSON; a
  /// `-`/`%YAML` prefix, or a failed JSON parse of non-empty content, means
  /// YAML. Empty content is unrecoverable.
  pub fn sniff(content: &str) -> anyhow::Result<Self> {
    let trimmed = content.trim_start();
    if trimmed.is_empty() {
      anyhow::bail!("unable to infer file format from empty document");
    }
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
      return Ok(Self::Json);
    }
    if trimmed.starts_with('-') || trimmed.starts_with("%YAML") {
      return Ok(Self::Yaml);
    }
    if serde_json::from_str::<serde_json::Value>(content).is_ok() {
      Ok(Self::Json)
    } else {
      Ok(Self::Yaml)
    }
  }
}

/// Memory-mapped OpenAPI document loader with extension-or-content format
/// inference. Parse failures are fatal and name the offending path.
pub struct SpecLoader {
  file: AsyncMmapFile,
  format: SpecFormat,
  path: PathBuf,
}

impl SpecLoader {
  pub async fn open(path: &Path) -> anyhow::Result<Self> {
    let file = AsyncMmapFile::open(path)
      .await
      .with_context(|| format!("failed to open spec file: {}", path.display()))?;

    let format = match path.extension().and_then(OsStr::to_str).and_then(SpecFormat::from_extension) {
      Some(format) => format,
      None => {
        let content = std::str::from_utf8(file.as_slice())
          .with_context(|| format!("spec file is not valid UTF-8: {}", path.display()))?;
        SpecFormat::sniff(content).with_context(|| format!("while reading {}", path.display()))?
      }
    };

    Ok(Self {
      file,
      format,
      path: path.to_path_buf(),
    })
  }

  pub fn format(&self) -> SpecFormat {
    self.format
  }

  pub fn parse(&self) -> anyhow::Result<oas3::Spec> {
    match self.format {
      SpecFormat::Json => serde_json::from_slice::<OpenApiV3Spec>(self.file.as_slice())
        .with_context(|| format!("failed to parse JSON spec: {}", self.path.display())),
      SpecFormat::Yaml => {
        let content = std::str::from_utf8(self.file.as_slice())
          .with_context(|| format!("spec file is not valid UTF-8: {}", self.path.display()))?;
        oas3::from_yaml(content).with_context(|| format!("failed to parse YAML spec: {}", self.path.display()))
      }
    }
  }
}
