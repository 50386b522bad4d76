//! Request builder, response parser and fetch entry points for the content API.
//!
//! # Design
//! `ContentClient` holds only its configuration and carries no mutable state
//! between calls. Every call is split into `build_request` (produces an
//! `HttpRequest` plus the signal that governs it) and `parse_response`
//! (consumes an `HttpResponse`). The `fetch_*` methods glue the two around a
//! host-supplied [`Transport`], then hand the payload to the synchronous
//! view-model builders.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument, warn};
use url::form_urlencoded;

use crate::asset::AssetResolver;
use crate::cancel::{AbortController, AbortSignal};
use crate::config::ApiConfig;
use crate::error::{ApiError, Result};
use crate::http::{HttpMethod, HttpRequest, HttpResponse, RequestOptions, Transport};
use crate::kind::ListingKind;
use crate::listing::{Listing, ListingItem};
use crate::sanitize::to_plain_text;
use crate::types::{ApiEnvelope, ContactPayload, ContactSubmission, Paginated, RawRecord};

/// Acknowledgement shown when the contact endpoint returns no message.
pub const DEFAULT_CONTACT_ACK: &str =
    "Thanks for contacting Abhidh Creative. We will reach out shortly.";

/// A request ready to hand to a transport, with the signal that governs it.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    pub request: HttpRequest,
    pub signal: AbortSignal,
    controller: Option<AbortController>,
}

impl PreparedRequest {
    /// The controller the client created because the caller supplied no
    /// signal. `None` when the caller's own signal is in charge.
    pub fn controller(&self) -> Option<&AbortController> {
        self.controller.as_ref()
    }
}

/// Synchronous, stateless client for the content API.
#[derive(Debug, Clone)]
pub struct ContentClient {
    config: ApiConfig,
    assets: AssetResolver,
}

impl ContentClient {
    pub fn new(config: ApiConfig) -> Self {
        let assets = AssetResolver::new(&config);
        Self { config, assets }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn assets(&self) -> &AssetResolver {
        &self.assets
    }

    /// Absolute URL for `path`, which may omit its leading slash.
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.config.base_url())
        } else {
            format!("{}/{path}", self.config.base_url())
        }
    }

    pub fn build_request(&self, path: &str, options: RequestOptions) -> PreparedRequest {
        let mut headers = vec![("Accept".to_string(), "application/json".to_string())];
        for (name, value) in options.headers {
            match headers.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(&name)) {
                Some(slot) => *slot = (name, value),
                None => headers.push((name, value)),
            }
        }

        let (signal, controller) = match options.signal {
            Some(signal) => (signal, None),
            None => {
                let controller = AbortController::new();
                (controller.signal(), Some(controller))
            }
        };

        PreparedRequest {
            request: HttpRequest {
                method: options.method.unwrap_or(HttpMethod::Get),
                url: self.endpoint(path),
                headers,
                body: options.body,
            },
            signal,
            controller,
        }
    }

    /// Interpret a response for the request made to `path`.
    ///
    /// An unparseable body is treated as JSON `null`. Non-2xx statuses become
    /// [`ApiError::Request`] with the server's `message` when it is a string,
    /// otherwise `Request to <path> failed with status <code>`.
    pub fn parse_response<T: DeserializeOwned>(&self, path: &str, response: HttpResponse) -> Result<T> {
        let payload = match serde_json::from_str::<Value>(&response.body) {
            Ok(value) => value,
            Err(e) => {
                debug!(path, status = response.status, error = %e, "response body is not JSON");
                Value::Null
            }
        };

        if !response.is_success() {
            let message = payload
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| format!("Request to {path} failed with status {}", response.status));
            warn!(path, status = response.status, %message, "request failed");
            return Err(ApiError::Request {
                status: response.status,
                message,
            });
        }

        serde_json::from_value(payload).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    /// Build, execute through `transport`, and parse.
    ///
    /// When `options.signal` is `None` the controller made for the call lives
    /// only inside it. Callers that want to cancel must pass a signal, or use
    /// [`build_request`](Self::build_request) and [`execute`](Self::execute)
    /// and keep [`PreparedRequest::controller`].
    pub fn request<T, X>(&self, transport: &X, path: &str, options: RequestOptions) -> Result<T>
    where
        T: DeserializeOwned,
        X: Transport + ?Sized,
    {
        let prepared = self.build_request(path, options);
        self.execute(transport, path, &prepared)
    }

    /// Execute an already built request through `transport`, and parse.
    ///
    /// A response that arrives after the signal fired is discarded as
    /// [`ApiError::Aborted`].
    #[instrument(skip_all, fields(path = %path))]
    pub fn execute<T, X>(&self, transport: &X, path: &str, prepared: &PreparedRequest) -> Result<T>
    where
        T: DeserializeOwned,
        X: Transport + ?Sized,
    {
        if prepared.signal.is_aborted() {
            return Err(ApiError::Aborted);
        }

        debug!(method = prepared.request.method.as_str(), url = %prepared.request.url, "dispatching request");
        let response = transport.fetch(&prepared.request, &prepared.signal)?;
        if prepared.signal.is_aborted() {
            debug!("response dropped after abort");
            return Err(ApiError::Aborted);
        }

        self.parse_response(path, response)
    }

    pub fn listing_path(kind: ListingKind, per_page: u32) -> String {
        format!("{}?per_page={per_page}", kind.collection_path())
    }

    /// Fetch one page of `kind` and build its view models and categories.
    ///
    /// A `null` or unparseable 2xx body yields an empty listing.
    pub fn fetch_listing<X: Transport + ?Sized>(
        &self,
        transport: &X,
        kind: ListingKind,
        per_page: u32,
        signal: Option<AbortSignal>,
    ) -> Result<Listing> {
        let path = Self::listing_path(kind, per_page);
        let options = RequestOptions {
            signal,
            ..RequestOptions::default()
        };
        let page: Paginated<RawRecord> = self
            .request::<Option<Paginated<RawRecord>>, X>(transport, &path, options)?
            .unwrap_or_default();

        if !page.is_consistent() {
            warn!(
                kind = kind.as_str(),
                len = page.data.len(),
                per_page = page.pagination.per_page,
                total = page.pagination.total,
                "page size disagrees with pagination metadata"
            );
        }

        Ok(Listing::from_collection(kind, page, &self.assets))
    }

    /// Fetch a single blog post by slug.
    pub fn fetch_blog<X: Transport + ?Sized>(
        &self,
        transport: &X,
        slug: &str,
        signal: Option<AbortSignal>,
    ) -> Result<ListingItem> {
        let path = format!("/blogs/{}", encode_path_segment(slug));
        let options = RequestOptions {
            signal,
            ..RequestOptions::default()
        };
        let envelope: ApiEnvelope<RawRecord> = self.request(transport, &path, options)?;
        Ok(ListingItem::build(ListingKind::Blog, envelope.data, &self.assets))
    }

    /// Post a contact-form submission and return the acknowledgement text.
    pub fn submit_contact<X: Transport + ?Sized>(
        &self,
        transport: &X,
        input: &ContactSubmission,
        signal: Option<AbortSignal>,
    ) -> Result<String> {
        let body = serde_json::to_string(&ContactPayload::from(input))
            .map_err(|e| ApiError::Serialization(e.to_string()))?;
        let options = RequestOptions {
            method: Some(HttpMethod::Post),
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: Some(body),
            signal,
        };
        let reply: Value = self.request(transport, "/contact-us", options)?;
        Ok(contact_acknowledgement(&reply))
    }
}

fn contact_acknowledgement(reply: &Value) -> String {
    match reply.get("message") {
        Some(Value::String(message)) => to_plain_text(Some(message)),
        Some(Value::Null) | None => DEFAULT_CONTACT_ACK.to_string(),
        Some(other) => to_plain_text(Some(&other.to_string())),
    }
}

fn encode_path_segment(segment: &str) -> String {
    form_urlencoded::byte_serialize(segment.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
