//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! Requests and responses are plain data. The client builds `HttpRequest`
//! values and parses `HttpResponse` values; the single network primitive is
//! the host's [`Transport`] implementation. Everything else in the crate is
//! synchronous and never touches a socket.

use crate::cancel::AbortSignal;
use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// An HTTP request described as plain data.
///
/// `url` is absolute. Header names keep the caller's spelling; lookups are
/// case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Caller-supplied knobs for a single request.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Defaults to `GET`.
    pub method: Option<HttpMethod>,
    /// Merged after `Accept: application/json`; a caller `Accept` replaces it.
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    /// When absent the client manufactures its own controller.
    pub signal: Option<AbortSignal>,
}

impl RequestOptions {
    pub fn with_signal(signal: AbortSignal) -> Self {
        Self {
            signal: Some(signal),
            ..Self::default()
        }
    }
}

/// The host's network primitive.
///
/// Implementations should stop early when `signal` fires and report it as
/// [`ApiError::Aborted`]; transport failures map to [`ApiError::Network`].
/// Non-2xx statuses are data, not errors: return them as an `HttpResponse`.
pub trait Transport {
    fn fetch(&self, request: &HttpRequest, signal: &AbortSignal) -> Result<HttpResponse, ApiError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn fetch(&self, request: &HttpRequest, signal: &AbortSignal) -> Result<HttpResponse, ApiError> {
        (**self).fetch(request, signal)
    }
}
