use async_trait::async_trait;
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
        }
    }
}

/// A request ready to be sent: method, path relative to the API root, optional JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub method: Method,
    pub path: String,
    pub body: Option<serde_json::Value>,
}

/// Status and headers of a response, kept alongside results and errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseMeta {
    pub status: u16,
    pub headers: Vec<(String, String)>,
}

impl ResponseMeta {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: Vec::new(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn rate_limit_remaining(&self) -> Option<u32> {
        self.header("x-ratelimit-remaining")?.trim().parse().ok()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub meta: ResponseMeta,
    pub body: String,
}

/// A decoded value together with the response it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub value: T,
    pub meta: ResponseMeta,
}

impl<T> ApiResponse<T> {
    pub fn into_value(self) -> T {
        self.value
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("connection failed: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("unexpected status {status}{}", .message.as_ref().map(|m| format!(": {}", m)).unwrap_or_default())]
    Status { status: u16, message: Option<String> },
}

impl TransportError {
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// The HTTP client the tag bindings run on.
///
/// Implementations send the request and hand back status, headers and body
/// untouched. Non-2xx statuses are not errors at this level.
#[async_trait]
pub trait Transport: Send + Sync {
    fn new_request(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> RequestDescriptor {
        RequestDescriptor {
            method,
            path: path.to_string(),
            body,
        }
    }

    async fn execute(&self, request: RequestDescriptor) -> Result<RawResponse, TransportError>;
}
