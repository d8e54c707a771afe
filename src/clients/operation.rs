//! Operation identifiers and their resolution into concrete requests.
//!
//! Store API operations are named by a single string of whitespace-separated
//! tokens:
//!
//! ```text
//! <name> <method> <path>[?<query-names>] [<header-name> ...]
//! ```
//!
//! For example `readCategory post /category/{navigationId}?slots` names the
//! `readCategory` operation, sent as `POST` to `/category/{navigationId}`,
//! with an optional `slots` query parameter.
//!
//! Resolution takes a [`RequestParams`] object and distributes its entries:
//!
//! - `{placeholder}` path segments consume the parameter of the same name
//! - query names consume their parameter when it is present
//! - header tokens consume their parameter, or default to `"true"`
//! - everything left over is the JSON body, or extra query parameters for `GET`
//!
//! # Example
//!
//! ```rust
//! use shopware_api::clients::{HttpMethod, Operation, RequestParams};
//!
//! let operation = Operation::parse(
//!     "readNavigation post /navigation/{activeId}/{rootId} sw-include-seo-urls",
//! )
//! .unwrap();
//! assert_eq!(operation.name(), "readNavigation");
//! assert_eq!(operation.method(), HttpMethod::Post);
//!
//! let params = RequestParams::new()
//!     .with("activeId", "main-navigation")
//!     .with("rootId", "main-navigation")
//!     .with("depth", 2);
//! let request = operation.resolve(params).unwrap();
//!
//! assert_eq!(request.path, "/navigation/main-navigation/main-navigation");
//! assert_eq!(request.headers, vec![("sw-include-seo-urls".to_string(), "true".to_string())]);
//! assert_eq!(request.body, Some(serde_json::json!({"depth": 2})));
//! ```

use std::fmt;

use crate::clients::errors::InvalidOperationError;
use crate::clients::params::{param_to_string, RequestParams};

/// HTTP methods an operation identifier may name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method.
    Get,
    /// HTTP POST method.
    Post,
    /// HTTP PUT method.
    Put,
    /// HTTP PATCH method.
    Patch,
    /// HTTP DELETE method.
    Delete,
}

impl HttpMethod {
    /// Parses a method token, ignoring case.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "get" => Some(Self::Get),
            "post" => Some(Self::Post),
            "put" => Some(Self::Put),
            "patch" => Some(Self::Patch),
            "delete" => Some(Self::Delete),
            _ => None,
        }
    }

    /// Returns `true` when the remaining parameters travel as a JSON body.
    #[must_use]
    pub const fn has_body(&self) -> bool {
        !matches!(self, Self::Get)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Patch => write!(f, "patch"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Put => Self::PUT,
            HttpMethod::Patch => Self::PATCH,
            HttpMethod::Delete => Self::DELETE,
        }
    }
}

/// A parsed operation identifier.
///
/// Borrows from the identifier string; parsing allocates only the token lists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Operation<'a> {
    identifier: &'a str,
    name: &'a str,
    method: HttpMethod,
    path_template: &'a str,
    query_names: Vec<&'a str>,
    header_names: Vec<&'a str>,
}

/// A request ready to be sent, produced by [`Operation::resolve`].
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedRequest {
    /// The HTTP method.
    pub method: HttpMethod,
    /// The path with all placeholders substituted, relative to the API base URL.
    pub path: String,
    /// Query parameters in the order they were collected.
    pub query: Vec<(String, String)>,
    /// Operation-specific headers.
    pub headers: Vec<(String, String)>,
    /// The JSON body, present for every method except `GET`.
    pub body: Option<serde_json::Value>,
}

impl<'a> Operation<'a> {
    /// Parses an operation identifier.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidOperationError::Malformed`] when fewer than three
    /// tokens are present or the path does not start with `/`, and
    /// [`InvalidOperationError::InvalidMethod`] for an unsupported method.
    pub fn parse(identifier: &'a str) -> Result<Self, InvalidOperationError> {
        let malformed = || InvalidOperationError::Malformed {
            operation: identifier.to_string(),
        };

        let mut tokens = identifier.split_whitespace();
        let name = tokens.next().ok_or_else(malformed)?;
        let method_token = tokens.next().ok_or_else(malformed)?;
        let path_with_query = tokens.next().ok_or_else(malformed)?;

        let method = HttpMethod::from_token(method_token).ok_or_else(|| {
            InvalidOperationError::InvalidMethod {
                operation: identifier.to_string(),
                method: method_token.to_string(),
            }
        })?;

        let (path_template, query) = path_with_query
            .split_once('?')
            .unwrap_or((path_with_query, ""));
        if !path_template.starts_with('/') {
            return Err(malformed());
        }

        let query_names = query.split(',').filter(|q| !q.is_empty()).collect();
        let header_names = tokens.collect();

        Ok(Self {
            identifier,
            name,
            method,
            path_template,
            query_names,
            header_names,
        })
    }

    /// Returns the full identifier this operation was parsed from.
    #[must_use]
    pub const fn identifier(&self) -> &'a str {
        self.identifier
    }

    /// Returns the operation name (e.g., `readCategory`).
    #[must_use]
    pub const fn name(&self) -> &'a str {
        self.name
    }

    /// Returns the HTTP method.
    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        self.method
    }

    /// Returns the path template with `{placeholder}` segments.
    #[must_use]
    pub const fn path_template(&self) -> &'a str {
        self.path_template
    }

    /// Returns the declared optional query parameter names.
    #[must_use]
    pub fn query_names(&self) -> &[&'a str] {
        &self.query_names
    }

    /// Returns the declared header names.
    #[must_use]
    pub fn header_names(&self) -> &[&'a str] {
        &self.header_names
    }

    /// Distributes `params` over path, query, headers, and body.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidOperationError::MissingPathParameter`] when a path
    /// placeholder has no matching (non-null) parameter, or
    /// [`InvalidOperationError::Malformed`] for an unterminated placeholder.
    pub fn resolve(
        &self,
        mut params: RequestParams,
    ) -> Result<ResolvedRequest, InvalidOperationError> {
        let path = self.build_path(&mut params)?;

        let mut query = Vec::new();
        for name in &self.query_names {
            if let Some(value) = take_present(&mut params, name) {
                query.push(((*name).to_string(), param_to_string(&value)));
            }
        }

        let headers: Vec<(String, String)> = self
            .header_names
            .iter()
            .map(|name| {
                let value = take_present(&mut params, name)
                    .map_or_else(|| "true".to_string(), |v| param_to_string(&v));
                ((*name).to_string(), value)
            })
            .collect();

        let body = if self.method.has_body() {
            Some(params.into())
        } else {
            query.extend(
                params
                    .into_inner()
                    .into_iter()
                    .filter(|(_, value)| !value.is_null())
                    .map(|(key, value)| (key, param_to_string(&value))),
            );
            None
        };

        Ok(ResolvedRequest {
            method: self.method,
            path,
            query,
            headers,
            body,
        })
    }

    /// Substitutes `{placeholder}` segments, consuming the matching parameters.
    fn build_path(&self, params: &mut RequestParams) -> Result<String, InvalidOperationError> {
        let mut path = String::with_capacity(self.path_template.len());
        let mut rest = self.path_template;

        while let Some(open) = rest.find('{') {
            path.push_str(&rest[..open]);
            let after_open = &rest[open + 1..];
            let close = after_open
                .find('}')
                .ok_or_else(|| InvalidOperationError::Malformed {
                    operation: self.identifier.to_string(),
                })?;
            let name = &after_open[..close];

            let value = take_present(params, name).ok_or_else(|| {
                InvalidOperationError::MissingPathParameter {
                    operation: self.identifier.to_string(),
                    name: name.to_string(),
                }
            })?;
            path.push_str(&urlencoding::encode(&param_to_string(&value)));

            rest = &after_open[close + 1..];
        }
        path.push_str(rest);

        Ok(path)
    }
}

impl fmt::Display for Operation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier)
    }
}

/// Removes a parameter, treating `null` as absent.
fn take_present(params: &mut RequestParams, name: &str) -> Option<serde_json::Value> {
    params.remove(name).filter(|value| !value.is_null())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "get");
        assert_eq!(HttpMethod::Post.to_string(), "post");
        assert_eq!(HttpMethod::Patch.to_string(), "patch");
        assert_eq!(HttpMethod::Delete.to_string(), "delete");
    }

    #[test]
    fn test_http_method_from_token_ignores_case() {
        assert_eq!(HttpMethod::from_token("POST"), Some(HttpMethod::Post));
        assert_eq!(HttpMethod::from_token("get"), Some(HttpMethod::Get));
        assert_eq!(HttpMethod::from_token("fetch"), None);
    }

    #[test]
    fn test_parse_extracts_all_parts() {
        let operation = Operation::parse("readCategory post /category/{navigationId}?slots").unwrap();

        assert_eq!(operation.name(), "readCategory");
        assert_eq!(operation.method(), HttpMethod::Post);
        assert_eq!(operation.path_template(), "/category/{navigationId}");
        assert_eq!(operation.query_names(), &["slots"]);
        assert!(operation.header_names().is_empty());
        assert_eq!(
            operation.to_string(),
            "readCategory post /category/{navigationId}?slots"
        );
    }

    #[test]
    fn test_parse_rejects_malformed_identifiers() {
        assert!(matches!(
            Operation::parse("readContext get"),
            Err(InvalidOperationError::Malformed { .. })
        ));
        assert!(matches!(
            Operation::parse("readContext get context"),
            Err(InvalidOperationError::Malformed { .. })
        ));
        assert!(matches!(
            Operation::parse(""),
            Err(InvalidOperationError::Malformed { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_unknown_method() {
        let result = Operation::parse("readContext fetch /context");
        assert!(matches!(
            result,
            Err(InvalidOperationError::InvalidMethod { method, .. }) if method == "fetch"
        ));
    }

    #[test]
    fn test_resolve_substitutes_placeholders_and_keeps_body() {
        let operation =
            Operation::parse("readProductCrossSellings post /product/{productId}/cross-selling")
                .unwrap();
        let params = RequestParams::new().with("productId", "p1").with("limit", 4);

        let request = operation.resolve(params).unwrap();

        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.path, "/product/p1/cross-selling");
        assert!(request.query.is_empty());
        assert_eq!(request.body, Some(json!({"limit": 4})));
    }

    #[test]
    fn test_resolve_encodes_path_values() {
        let operation = Operation::parse("readCategory post /category/{navigationId}").unwrap();
        let params = RequestParams::new().with("navigationId", "a b/c");

        let request = operation.resolve(params).unwrap();

        assert_eq!(request.path, "/category/a%20b%2Fc");
    }

    #[test]
    fn test_resolve_reports_missing_path_parameter() {
        let operation = Operation::parse("readCategory post /category/{navigationId}").unwrap();

        let result = operation.resolve(RequestParams::new().with("navigationId", serde_json::Value::Null));

        assert!(matches!(
            result,
            Err(InvalidOperationError::MissingPathParameter { name, .. }) if name == "navigationId"
        ));
    }

    #[test]
    fn test_resolve_reports_unterminated_placeholder() {
        let operation = Operation::parse("broken post /category/{navigationId").unwrap();
        let result = operation.resolve(RequestParams::new().with("navigationId", "x"));
        assert!(matches!(result, Err(InvalidOperationError::Malformed { .. })));
    }

    #[test]
    fn test_resolve_moves_declared_query_parameters() {
        let operation = Operation::parse("readCategory post /category/{navigationId}?slots").unwrap();
        let params = RequestParams::new()
            .with("navigationId", "c1")
            .with("slots", "slot-a|slot-b")
            .with("criteria", json!({"limit": 1}));

        let request = operation.resolve(params).unwrap();

        assert_eq!(
            request.query,
            vec![("slots".to_string(), "slot-a|slot-b".to_string())]
        );
        assert_eq!(request.body, Some(json!({"criteria": {"limit": 1}})));
    }

    #[test]
    fn test_resolve_omits_absent_query_parameters() {
        let operation = Operation::parse("readCategory post /category/{navigationId}?slots").unwrap();
        let request = operation
            .resolve(RequestParams::new().with("navigationId", "c1"))
            .unwrap();

        assert!(request.query.is_empty());
        assert_eq!(request.body, Some(json!({})));
    }

    #[test]
    fn test_resolve_uses_parameter_value_for_header_when_given() {
        let operation =
            Operation::parse("readNavigation post /navigation/{activeId}/{rootId} sw-include-seo-urls")
                .unwrap();
        let params = RequestParams::new()
            .with("activeId", "footer-navigation")
            .with("rootId", "footer-navigation")
            .with("sw-include-seo-urls", false);

        let request = operation.resolve(params).unwrap();

        assert_eq!(
            request.headers,
            vec![("sw-include-seo-urls".to_string(), "false".to_string())]
        );
        assert_eq!(request.body, Some(json!({})));
    }

    #[test]
    fn test_resolve_get_moves_remaining_parameters_to_query() {
        let operation = Operation::parse("readContext get /context").unwrap();
        let params = RequestParams::new()
            .with("a", "x")
            .with("b", 2)
            .with("skip", serde_json::Value::Null);

        let request = operation.resolve(params).unwrap();

        assert!(request.body.is_none());
        assert_eq!(
            request.query,
            vec![
                ("a".to_string(), "x".to_string()),
                ("b".to_string(), "2".to_string())
            ]
        );
    }

    #[test]
    fn test_resolve_get_without_parameters() {
        let operation = Operation::parse("readContext get /context").unwrap();
        let request = operation.resolve(RequestParams::new()).unwrap();

        assert_eq!(request.path, "/context");
        assert!(request.query.is_empty());
        assert!(request.headers.is_empty());
        assert!(request.body.is_none());
    }
}
