use oas3::spec::ObjectSchema;
use serde_json::json;

use crate::generator::schema_registry::SchemaRegistry;

pub(crate) fn create_test_spec(spec_json: serde_json::Value) -> oas3::Spec {
  serde_json::from_value(spec_json).unwrap()
}

pub(crate) fn create_test_registry(schemas: serde_json::Value) -> SchemaRegistry {
  SchemaRegistry::new(create_test_spec(json!({
    "openapi": "3.0.0",
    "info": { "title": "Test API", "version": "1.0.0" },
    "paths": {},
    "components": { "schemas": schemas }
  })))
}

pub(crate) fn schema(value: serde_json::Value) -> ObjectSchema {
  serde_json::from_value(value).unwrap()
}
