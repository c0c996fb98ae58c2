pub mod client_resolver;
pub mod dependencies;
pub mod model_resolver;
pub mod path_template;
pub mod type_resolver;

#[cfg(test)]
mod tests;

pub(crate) const JSON_CONTENT_TYPE: &str = "application/json";
pub(crate) const SUCCESS_STATUS: &str = "200";
pub(crate) const REQUEST_SUFFIX: &str = "Request";
pub(crate) const RESPONSE_SUFFIX: &str = "Response";
pub(crate) const CLIENT_SUFFIX: &str = "Client";

/// TypeScript's escape hatch, used wherever a schema is too underspecified
/// or a reference too broken to produce a real type.
pub(crate) const TS_ANY: &str = "any";
