use serde_json::json;

pub(crate) fn spec_from_json(spec_json: serde_json::Value) -> oas3::Spec {
  serde_json::from_value(spec_json).unwrap()
}

/// A small but representative document: a nested-module schema, an enum, a
/// wow-mapped schema, and one tagged operation with an inline request body.
pub(crate) fn cart_spec_json() -> serde_json::Value {
  json!({
    "openapi": "3.0.0",
    "info": { "title": "Cart API", "version": "1.0.0" },
    "components": {
      "schemas": {
        "example.cart.CartItem": {
          "type": "object",
          "title": "Cart item",
          "properties": {
            "id": { "type": "string" },
            "quantity": { "type": "integer" },
            "error": { "$ref": "#/components/schemas/wow.api.ErrorInfo" }
          }
        },
        "example.cart.CartStatus": {
          "type": "string",
          "enum": ["ACTIVE", "CHECKED_OUT"]
        },
        "wow.api.ErrorInfo": {
          "type": "object",
          "properties": { "errCode": { "type": "string" } }
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
                  "properties": { "productId": { "type": "string" } }
                }
              }
            }
          },
          "responses": {
            "200": {
              "description": "the updated item",
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
