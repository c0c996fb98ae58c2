pub mod ast;
pub mod codegen;
pub mod naming;
pub mod orchestrator;
pub mod resolver;
pub mod schema_registry;
pub mod wow;
