//! GraphQL request and response envelopes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ApiError;

/// A GraphQL request body: a query document plus optional variables.
#[derive(Debug, Clone, Serialize)]
pub struct GraphQlRequest<'a> {
    pub query: &'a str,
    #[serde(skip_serializing_if = "Value::is_null")]
    pub variables: Value,
}

impl<'a> GraphQlRequest<'a> {
    /// A request without variables (anonymous query).
    pub fn new(query: &'a str) -> Self {
        Self {
            query,
            variables: Value::Null,
        }
    }

    /// A request with variables.
    pub fn with_variables(query: &'a str, variables: Value) -> Self {
        Self { query, variables }
    }
}

/// The standard GraphQL response envelope.
///
/// The backend answers `{ "data": ... }` on success and adds an
/// `errors` array when the query failed, possibly alongside partial
/// data. Any error fails the whole operation.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

/// A single error entry in a GraphQL response.
#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

impl<T> GraphQlResponse<T> {
    /// Extract the data, surfacing the first backend error if any.
    pub fn into_data(self, operation: &'static str) -> Result<T, ApiError> {
        if let Some(error) = self.errors.first() {
            return Err(ApiError::Backend(error.message.clone()));
        }
        self.data.ok_or(ApiError::MissingData(operation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Payload {
        count: u32,
    }

    #[test]
    fn test_request_without_variables_omits_the_key() {
        let request = GraphQlRequest::new("{ products { id } }");
        let json = serde_json::to_string(&request).unwrap();

        assert!(json.contains("query"));
        assert!(!json.contains("variables"));
    }

    #[test]
    fn test_request_with_variables() {
        let request = GraphQlRequest::with_variables(
            "query getProduct($handle: String!) { product(handle: $handle) { id } }",
            serde_json::json!({"handle": "encre-panthera"}),
        );
        let json = serde_json::to_string(&request).unwrap();

        assert!(json.contains(r#""variables":{"handle":"encre-panthera"}"#));
    }

    #[test]
    fn test_into_data_success() {
        let response: GraphQlResponse<Payload> =
            serde_json::from_str(r#"{"data": {"count": 3}}"#).unwrap();
        assert_eq!(response.into_data("test").unwrap(), Payload { count: 3 });
    }

    #[test]
    fn test_into_data_surfaces_first_error() {
        let body = r#"{
            "data": null,
            "errors": [
                {"message": "Field 'produits' doesn't exist on type 'QueryRoot'"},
                {"message": "second error"}
            ]
        }"#;
        let response: GraphQlResponse<Payload> = serde_json::from_str(body).unwrap();

        match response.into_data("test") {
            Err(ApiError::Backend(message)) => {
                assert!(message.contains("doesn't exist"));
            }
            other => panic!("expected Backend error, got {:?}", other),
        }
    }

    #[test]
    fn test_into_data_missing_data() {
        let response: GraphQlResponse<Payload> = serde_json::from_str(r#"{}"#).unwrap();
        assert!(matches!(
            response.into_data("featured products"),
            Err(ApiError::MissingData("featured products"))
        ));
    }
}
