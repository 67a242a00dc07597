//! The three-way classification of an HTTP attempt.

use crate::error::{Error, Result};
use reqwest::header::HeaderMap;
use serde::Serialize;
use serde_json::{Map, Value};

/// A completed HTTP response, captured verbatim.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpReply {
    /// Status code.
    pub status: u16,
    /// Canonical reason phrase for the status code. The upstream's own
    /// phrase is not exposed by the HTTP client, and HTTP/2 has none.
    pub status_text: String,
    /// Body as JSON when it parses, otherwise the raw text.
    pub data: Value,
    /// Response headers keyed by lower-case name. A header sent once is a
    /// string; a repeated header is an array of its values in order.
    pub headers: Map<String, Value>,
}

impl HttpReply {
    /// Read a response body and capture status and headers.
    ///
    /// A body that cannot be read is a network failure: the response
    /// started but never completed.
    pub async fn read(response: reqwest::Response) -> Result<Self> {
        let status = response.status();
        let headers = headers_to_json(response.headers());
        let body = response
            .text()
            .await
            .map_err(|e| Error::from_transport(&e))?;

        Ok(Self {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            data: parse_body(body),
            headers,
        })
    }

    /// Returns `true` for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Result of executing one request.
#[derive(Debug)]
pub enum Outcome {
    /// The upstream answered with a 2xx status.
    Success(HttpReply),
    /// The upstream answered with any other status. Still a valid result.
    HttpError(HttpReply),
    /// No usable response (network failure, malformed request, ...).
    Failure(Error),
}

impl Outcome {
    /// Classify a completed response by its status code.
    pub fn from_reply(reply: HttpReply) -> Self {
        if reply.is_success() {
            Outcome::Success(reply)
        } else {
            Outcome::HttpError(reply)
        }
    }

    /// Returns `true` for [`Outcome::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Returns `true` for [`Outcome::HttpError`].
    pub fn is_http_error(&self) -> bool {
        matches!(self, Outcome::HttpError(_))
    }

    /// Returns `true` for [`Outcome::Failure`].
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// The tool payload for this outcome.
    ///
    /// `HttpError` payloads carry an extra `"error": true` field; `Failure`
    /// becomes an `Err`.
    pub fn into_payload(self) -> Result<Value> {
        match self {
            Outcome::Success(reply) => Ok(serde_json::to_value(reply)?),
            Outcome::HttpError(reply) => {
                let mut value = serde_json::to_value(reply)?;
                if let Value::Object(map) = &mut value {
                    map.insert("error".to_string(), Value::Bool(true));
                }
                Ok(value)
            }
            Outcome::Failure(err) => Err(err),
        }
    }
}

fn parse_body(body: String) -> Value {
    serde_json::from_str(&body).unwrap_or(Value::String(body))
}

fn headers_to_json(headers: &HeaderMap) -> Map<String, Value> {
    headers
        .keys()
        .map(|name| {
            let mut values: Vec<Value> = headers
                .get_all(name)
                .iter()
                .map(|v| Value::String(String::from_utf8_lossy(v.as_bytes()).into_owned()))
                .collect();
            let value = if values.len() == 1 {
                values.remove(0)
            } else {
                Value::Array(values)
            };
            (name.as_str().to_string(), value)
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
