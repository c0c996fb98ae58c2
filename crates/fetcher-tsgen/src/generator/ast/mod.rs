//! Resolved definitions produced by the resolver pipeline and consumed by the
//! code generator. All of these are built fresh per generation run and are
//! immutable once resolution finishes.

mod client;
mod models;
mod modules;

pub use client::{ClientDefinition, EndpointDefinition, HttpMethod};
pub use models::{DependencyDefinition, ModelDefinition};
pub use modules::{GeneratedFile, ModuleDefinition};
