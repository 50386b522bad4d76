//! Content aggregation and normalization for the agency website.
//!
//! # Overview
//! Fetches blog, program, gallery and trainer listings from the content API
//! and turns their loosely-shaped records into stable view models: resolved
//! asset URLs, plain-text excerpts, read-time estimates, categories derived
//! from the data itself, and client-side filtering over those categories.
//!
//! # Design
//! - `ContentClient` builds `HttpRequest` values and parses `HttpResponse`
//!   values; the host performs the round-trip through a [`Transport`].
//! - Configuration is an explicit [`ApiConfig`] passed to the client and the
//!   asset resolver.
//! - Field-name differences between listings live in one [`FieldMap`] per
//!   [`ListingKind`], shared by the taxonomy deriver and view-model builder.
//! - Only the transport boundary returns errors; derivation never fails.

pub mod asset;
pub mod cancel;
pub mod client;
pub mod config;
pub mod error;
pub mod filter;
pub mod format;
pub mod http;
pub mod kind;
pub mod listing;
pub mod read_time;
pub mod sanitize;
pub mod screen;
pub mod taxonomy;
pub mod types;

pub use asset::AssetResolver;
pub use cancel::{AbortController, AbortSignal};
pub use client::{ContentClient, PreparedRequest};
pub use config::ApiConfig;
pub use error::{ApiError, Result};
pub use filter::{Categorized, FilterState};
pub use format::DateStyle;
pub use http::{HttpMethod, HttpRequest, HttpResponse, RequestOptions, Transport};
pub use kind::{FieldMap, ListingKind};
pub use listing::{Listing, ListingItem};
pub use read_time::estimate_minutes;
pub use sanitize::to_plain_text;
pub use screen::{ListingScreen, LoadState};
pub use taxonomy::{derive_categories, format_label, CategoryEntry};
pub use types::{ApiEnvelope, ContactSubmission, PaginationMeta, Paginated, RawRecord};
