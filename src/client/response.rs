#![deny(clippy::all, clippy::pedantic)]

use reqwest::header::HeaderMap;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::ClientError;

/// A resolved response: status, headers and the body as JSON.
///
/// Empty bodies decode to `Value::Null`; bodies that are not JSON are kept as
/// a `Value::String` so they are still visible in assertion messages. Object
/// keys keep the order the server sent them in.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Value,
}

impl ApiResponse {
    pub(crate) async fn read(resp: Response) -> Result<Self, ClientError> {
        let status = resp.status();
        let headers = resp.headers().clone();
        let bytes = resp.bytes().await?;
        Ok(Self {
            status,
            headers,
            body: parse_body(&bytes),
        })
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    #[must_use]
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    #[must_use]
    pub fn body(&self) -> &Value {
        &self.body
    }

    #[must_use]
    pub fn into_body(self) -> Value {
        self.body
    }

    /// Decode the body into a typed record.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Decode`] when the body does not have `T`'s shape.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        T::deserialize(&self.body).map_err(ClientError::Decode)
    }

    /// The `error` message of a `{ "error": "..." }` body.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.body.get("error").and_then(Value::as_str)
    }

    /// A top-level field of an object body.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.body.get(key)
    }

    #[must_use]
    pub fn has_field(&self, key: &str) -> bool {
        self.field(key).is_some()
    }

    /// Length of an array body; `None` for any other shape.
    #[must_use]
    pub fn array_len(&self) -> Option<usize> {
        self.body.as_array().map(Vec::len)
    }

    /// Keys of the object at `index` of an array body, in server order.
    #[must_use]
    pub fn keys_at(&self, index: usize) -> Option<Vec<&str>> {
        self.body
            .get(index)
            .and_then(Value::as_object)
            .map(|obj| obj.keys().map(String::as_str).collect())
    }
}

fn parse_body(bytes: &[u8]) -> Value {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Value::Null;
    }
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}
