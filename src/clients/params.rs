//! Request parameter objects.
//!
//! A [`RequestParams`] is the parameter half of a request descriptor: a JSON
//! object with unique keys that mixes path placeholders, query and header
//! values, and body fields. The invoker sorts them out by name when the
//! operation identifier is resolved.

use serde::Serialize;
use serde_json::{Map, Value};

/// A JSON object of request parameters.
///
/// Later writes win, so the order of [`with`](Self::with) and
/// [`merge`](Self::merge) calls decides which value survives a key collision.
///
/// # Example
///
/// ```rust
/// use shopware_api::clients::RequestParams;
/// use serde_json::json;
///
/// let params = RequestParams::new()
///     .with("productId", "abc")
///     .merge(&json!({"limit": 5, "productId": "override"}))
///     .unwrap();
///
/// assert_eq!(params.get("productId"), Some(&json!("override")));
/// assert_eq!(params.get("limit"), Some(&json!(5)));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RequestParams(Map<String, Value>);

impl RequestParams {
    /// Creates an empty parameter object.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a parameter, replacing any previous value.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Sets a parameter only when a value is given.
    #[must_use]
    pub fn with_opt(self, key: impl Into<String>, value: Option<impl Into<Value>>) -> Self {
        match value {
            Some(value) => self.with(key, value),
            None => self,
        }
    }

    /// Serializes `source` and copies its top-level fields into this object.
    ///
    /// A source that serializes to `null` (such as `None`) contributes
    /// nothing.
    ///
    /// # Errors
    ///
    /// Returns an error when `source` cannot be serialized or does not
    /// serialize to a JSON object.
    pub fn merge<S>(mut self, source: &S) -> Result<Self, serde_json::Error>
    where
        S: Serialize + ?Sized,
    {
        match serde_json::to_value(source)? {
            Value::Object(fields) => self.0.extend(fields),
            Value::Null => {}
            other => {
                return Err(serde::ser::Error::custom(format!(
                    "request parameters must be a JSON object, got {other}"
                )))
            }
        }
        Ok(self)
    }

    /// Returns a parameter by name.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Removes a parameter and returns its value.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    /// Returns `true` if there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over the parameters in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Consumes the parameters and returns the underlying JSON object.
    #[must_use]
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for RequestParams {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<RequestParams> for Value {
    fn from(params: RequestParams) -> Self {
        Self::Object(params.0)
    }
}

/// Renders a parameter value for a URL path, query string, or header.
///
/// Strings are used verbatim; everything else uses its JSON text.
#[must_use]
pub(crate) fn param_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
