use serde_json::json;

use super::common::create_test_spec;
use crate::generator::{
  ast::HttpMethod,
  resolver::{
    client_resolver::{ClientResolution, ClientResolver},
    model_resolver::ModelResolver,
  },
  schema_registry::SchemaRegistry,
};

fn resolve_clients(spec_json: serde_json::Value) -> (SchemaRegistry, ClientResolution) {
  let registry = SchemaRegistry::new(create_test_spec(spec_json));
  let resolution = {
    let model_resolver = ModelResolver::new(&registry);
    ClientResolver::new(&registry, &model_resolver).resolve()
  };
  (registry, resolution)
}

fn cart_spec() -> serde_json::Value {
  json!({
    "openapi": "3.0.0",
    "info": { "title": "Test API", "version": "1.0.0" },
    "components": {
      "schemas": {
        "example.cart.CartItem": {
          "type": "object",
          "properties": { "id": { "type": "string" }, "quantity": { "type": "integer" } }
        }
      }
    },
    "paths": {
      "/cart/{id}": {
        "post": {
          "tags": ["example.cart"],
          "operationId": "example.cart.addCartItem",
          "parameters": [
            { "name": "id", "in": "path", "required": true, "schema": { "type": "string" } }
          ],
          "requestBody": {
            "content": {
              "application/json": {
                "schema": {
                  "type": "object",
                  "properties": { "productId": { "type": "string" }, "quantity": { "type": "integer" } }
                }
              }
            }
          },
          "responses": {
            "200": {
              "description": "the updated cart item",
              "content": {
                "application/json": {
                  "schema": { "$ref": "#/components/schemas/example.cart.CartItem" }
                }
              }
            }
          }
        }
      }
    }
  })
}

#[test]
fn test_operations_group_into_clients_by_primary_tag() {
  let (_registry, resolution) = resolve_clients(cart_spec());

  assert_eq!(resolution.clients.len(), 1);
  let (path, client) = &resolution.clients[0];
  assert_eq!(path, "/example/cart");
  assert_eq!(client.name, "CartClient");
  assert_eq!(client.endpoints.len(), 1);

  let endpoint = &client.endpoints[0];
  assert_eq!(endpoint.name, "addCartItem");
  assert_eq!(endpoint.method, HttpMethod::Post);
  assert_eq!(endpoint.path, "/cart/{id}");
}

#[test]
fn test_inline_request_body_mints_a_synthetic_model() {
  let (_registry, resolution) = resolve_clients(cart_spec());

  let endpoint = &resolution.clients[0].1.endpoints[0];
  assert_eq!(endpoint.request_body.as_deref(), Some("AddCartItemRequest"));

  assert_eq!(resolution.models.len(), 1);
  let (key, model) = &resolution.models[0];
  assert_eq!(key, "example.cart.AddCartItemRequest");
  assert_eq!(model.name, "AddCartItemRequest");
  let properties = model.properties.as_ref().unwrap();
  assert_eq!(properties.get("productId").unwrap(), "string");
  assert_eq!(properties.get("quantity").unwrap(), "number");
}

#[test]
fn test_referenced_response_reuses_the_schema_type() {
  let (_registry, resolution) = resolve_clients(cart_spec());

  let endpoint = &resolution.clients[0].1.endpoints[0];
  assert_eq!(endpoint.response.as_deref(), Some("CartItem"));
  assert!(
    endpoint
      .dependencies
      .iter()
      .any(|dep| dep.module_specifier == "/example/cart" && dep.named_imports.contains("CartItem"))
  );
}

#[test]
fn test_operations_without_tags_or_operation_id_are_skipped() {
  let (_registry, resolution) = resolve_clients(json!({
    "openapi": "3.0.0",
    "info": { "title": "Test API", "version": "1.0.0" },
    "paths": {
      "/untagged": {
        "get": { "operationId": "untagged.get", "responses": {} }
      },
      "/anonymous": {
        "get": { "tags": ["example"], "responses": {} }
      }
    }
  }));

  assert!(resolution.clients.is_empty());
  assert!(resolution.models.is_empty());
}

#[test]
fn test_method_name_strips_the_tag_prefix_and_sanitizes() {
  let (_registry, resolution) = resolve_clients(json!({
    "openapi": "3.0.0",
    "info": { "title": "Test API", "version": "1.0.0" },
    "paths": {
      "/orders": {
        "get": {
          "tags": ["order"],
          "operationId": "order.list-all",
          "responses": {}
        },
        "post": {
          "tags": ["order"],
          "operationId": "createOrder",
          "responses": {}
        }
      }
    }
  }));

  let client = &resolution.clients[0].1;
  assert_eq!(client.endpoints[0].name, "list_all");
  assert_eq!(client.endpoints[1].name, "createOrder");
}

#[test]
fn test_methods_are_visited_in_priority_order() {
  let (_registry, resolution) = resolve_clients(json!({
    "openapi": "3.0.0",
    "info": { "title": "Test API", "version": "1.0.0" },
    "paths": {
      "/orders": {
        "delete": { "tags": ["order"], "operationId": "order.remove", "responses": {} },
        "get": { "tags": ["order"], "operationId": "order.list", "responses": {} },
        "put": { "tags": ["order"], "operationId": "order.replace", "responses": {} }
      }
    }
  }));

  let methods: Vec<HttpMethod> = resolution.clients[0]
    .1
    .endpoints
    .iter()
    .map(|endpoint| endpoint.method)
    .collect();
  assert_eq!(methods, [HttpMethod::Get, HttpMethod::Put, HttpMethod::Delete]);
}

#[test]
fn test_undeclared_path_parameter_skips_the_operation_with_a_warning() {
  let (registry, resolution) = resolve_clients(json!({
    "openapi": "3.0.0",
    "info": { "title": "Test API", "version": "1.0.0" },
    "paths": {
      "/orders/{orderId}": {
        "get": {
          "tags": ["order"],
          "operationId": "order.getOrder",
          "responses": {}
        }
      }
    }
  }));

  assert!(resolution.clients.is_empty());
  let warnings = registry.take_warnings();
  assert!(
    warnings
      .iter()
      .any(|w| w.contains("Skipping GET /orders/{orderId}") && w.contains("Missing required path parameter: orderId")),
    "expected a skip warning, got {warnings:?}"
  );
}

#[test]
fn test_path_item_parameters_also_satisfy_placeholders() {
  let (registry, resolution) = resolve_clients(json!({
    "openapi": "3.0.0",
    "info": { "title": "Test API", "version": "1.0.0" },
    "paths": {
      "/orders/{orderId}": {
        "parameters": [
          { "name": "orderId", "in": "path", "required": true, "schema": { "type": "string" } }
        ],
        "get": {
          "tags": ["order"],
          "operationId": "order.getOrder",
          "responses": {}
        }
      }
    }
  }));

  assert_eq!(resolution.clients.len(), 1);
  assert!(registry.take_warnings().is_empty());
}

#[test]
fn test_client_name_uses_the_last_tag_segment() {
  let (_registry, resolution) = resolve_clients(json!({
    "openapi": "3.0.0",
    "info": { "title": "Test API", "version": "1.0.0" },
    "paths": {
      "/compensation/versions": {
        "get": {
          "tags": ["compensation"],
          "operationId": "compensation.listVersions",
          "responses": {}
        }
      }
    }
  }));

  assert_eq!(resolution.clients[0].1.name, "CompensationClient");
  assert_eq!(resolution.clients[0].0, "/compensation");
}

#[test]
fn test_dangling_body_reference_warns_and_leaves_the_endpoint_untyped() {
  let (registry, resolution) = resolve_clients(json!({
    "openapi": "3.0.0",
    "info": { "title": "Test API", "version": "1.0.0" },
    "paths": {
      "/orders": {
        "post": {
          "tags": ["order"],
          "operationId": "order.createOrder",
          "requestBody": {
            "content": {
              "application/json": {
                "schema": { "$ref": "#/components/schemas/order.NoSuchBody" }
              }
            }
          },
          "responses": {}
        }
      }
    }
  }));

  let endpoint = &resolution.clients[0].1.endpoints[0];
  assert!(endpoint.request_body.is_none());
  assert!(endpoint.dependencies.is_empty());

  let warnings = registry.take_warnings();
  assert!(
    warnings.iter().any(|w| w.contains("order.NoSuchBody")),
    "expected a dangling-reference warning, got {warnings:?}"
  );
}

#[test]
fn test_endpoint_without_json_success_response_has_void_shape() {
  let (_registry, resolution) = resolve_clients(json!({
    "openapi": "3.0.0",
    "info": { "title": "Test API", "version": "1.0.0" },
    "paths": {
      "/orders": {
        "delete": {
          "tags": ["order"],
          "operationId": "order.clear",
          "responses": { "204": { "description": "cleared" } }
        }
      }
    }
  }));

  let endpoint = &resolution.clients[0].1.endpoints[0];
  assert!(endpoint.request_body.is_none());
  assert!(endpoint.response.is_none());
}
