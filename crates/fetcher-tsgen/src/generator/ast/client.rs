use super::models::DependencyDefinition;

/// The eight HTTP methods an OpenAPI path item can carry, in the priority
/// order operations are visited when several exist on one path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
  Get,
  Put,
  Post,
  Delete,
  Options,
  Head,
  Patch,
  Trace,
}

impl HttpMethod {
  pub const ALL: [Self; 8] = [
    Self::Get,
    Self::Put,
    Self::Post,
    Self::Delete,
    Self::Options,
    Self::Head,
    Self::Patch,
    Self::Trace,
  ];

  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Get => "GET",
      Self::Put => "PUT",
      Self::Post => "POST",
      Self::Delete => "DELETE",
      Self::Options => "OPTIONS",
      Self::Head => "HEAD",
      Self::Patch => "PATCH",
      Self::Trace => "TRACE",
    }
  }
}

/// One generated client method, derived from a `(path, method)` pair.
///
/// `request_body` and `response` hold resolved type names, not schemas.
#[derive(Debug, Clone)]
pub struct EndpointDefinition {
  pub name: String,
  pub method: HttpMethod,
  pub path: String,
  pub request_body: Option<String>,
  pub response: Option<String>,
  pub dependencies: Vec<DependencyDefinition>,
}

/// One client interface per primary tag; first occurrence of a tag wins the
/// grouping slot.
#[derive(Debug, Clone)]
pub struct ClientDefinition {
  pub name: String,
  pub endpoints: Vec<EndpointDefinition>,
}
