use serde_json::json;

use super::common::{create_test_registry, schema};
use crate::generator::{ast::DependencyDefinition, resolver::model_resolver::ModelResolver};

#[test]
fn test_wow_schema_becomes_a_reference_model() {
  let registry = create_test_registry(json!({}));
  let resolver = ModelResolver::new(&registry);

  let model = resolver.resolve("wow.api.ErrorInfo", &schema(json!({"type": "object"})));

  assert!(model.is_reference);
  assert_eq!(model.name, "ErrorInfo");
  assert_eq!(
    model.dependencies,
    vec![DependencyDefinition::new("@ahoo-wang/fetcher-wow", "ErrorInfo")]
  );
  assert!(model.properties.is_none());
}

#[test]
fn test_enum_schema_becomes_an_alias_model() {
  let registry = create_test_registry(json!({}));
  let resolver = ModelResolver::new(&registry);

  let model = resolver.resolve(
    "order.OrderStatus",
    &schema(json!({"type": "string", "enum": ["CREATED", "PAID"]})),
  );

  assert!(!model.is_reference);
  assert_eq!(model.name, "OrderStatus");
  assert!(model.properties.is_none());
  assert_eq!(model.type_expr, "'CREATED' | 'PAID'");
  assert!(model.dependencies.is_empty());
}

#[test]
fn test_union_alias_carries_no_imports_of_its_own() {
  let registry = create_test_registry(json!({
    "order.OrderA": {"type": "object", "properties": {"a": {"type": "string"}}},
    "order.OrderB": {"type": "object", "properties": {"b": {"type": "string"}}}
  }));
  let resolver = ModelResolver::new(&registry);

  let model = resolver.resolve(
    "order.AnyOrder",
    &schema(json!({
      "oneOf": [
        {"$ref": "#/components/schemas/order.OrderA"},
        {"$ref": "#/components/schemas/order.OrderB"}
      ]
    })),
  );

  assert_eq!(model.type_expr, "OrderA | OrderB");
  assert!(model.properties.is_none());
  assert!(model.dependencies.is_empty());
}

#[test]
fn test_declared_object_without_properties_is_an_open_interface() {
  let registry = create_test_registry(json!({}));
  let resolver = ModelResolver::new(&registry);

  let model = resolver.resolve("Metadata", &schema(json!({"type": "object"})));

  assert_eq!(model.name, "Metadata");
  assert_eq!(model.properties.as_ref().map(indexmap::IndexMap::len), Some(0));
}

#[test]
fn test_object_with_properties_becomes_an_interface_model() {
  let registry = create_test_registry(json!({
    "example.cart.CartItem": {"type": "object", "properties": {"id": {"type": "string"}}}
  }));
  let resolver = ModelResolver::new(&registry);

  let model = resolver.resolve(
    "example.cart.Cart",
    &schema(json!({
      "type": "object",
      "title": "Cart",
      "description": "A shopping cart.",
      "properties": {
        "id": {"type": "string"},
        "items": {"type": "array", "items": {"$ref": "#/components/schemas/example.cart.CartItem"}}
      }
    })),
  );

  assert_eq!(model.name, "Cart");
  let properties = model.properties.as_ref().unwrap();
  assert_eq!(properties.get("id").unwrap(), "string");
  assert_eq!(properties.get("items").unwrap(), "CartItem[]");
  assert_eq!(
    model.dependencies,
    vec![DependencyDefinition::new("/example/cart", "CartItem")]
  );
  assert_eq!(model.doc_text().unwrap(), "Cart\nA shopping cart.");
}

#[test]
fn test_underspecified_schema_degrades_to_any_alias() {
  let registry = create_test_registry(json!({}));
  let resolver = ModelResolver::new(&registry);

  let model = resolver.resolve("Mystery", &schema(json!({})));

  assert!(model.properties.is_none());
  assert_eq!(model.type_expr, "any");
}
