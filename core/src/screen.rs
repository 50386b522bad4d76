//! State owned by one listing screen for its whole lifetime.
//!
//! A screen fetches its listing, keeps the last good snapshot, tracks the
//! active category and aborts whatever is in flight when it is torn down.
//! Screens never share state with each other.

use tracing::{debug, info, warn};

use crate::cancel::{AbortController, AbortSignal};
use crate::client::ContentClient;
use crate::error::ApiError;
use crate::filter::FilterState;
use crate::http::Transport;
use crate::kind::ListingKind;
use crate::listing::{Listing, ListingItem};
use crate::taxonomy::CategoryEntry;
use crate::types::PaginationMeta;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// Nothing fetched yet.
    Idle,
    Loaded,
    /// The last fetch failed; the message is ready for the error panel.
    Failed(String),
}

#[derive(Debug)]
pub struct ListingScreen {
    kind: ListingKind,
    per_page: u32,
    controller: AbortController,
    listing: Listing,
    filter: FilterState,
    state: LoadState,
}

impl ListingScreen {
    pub fn new(kind: ListingKind) -> Self {
        Self::with_page_size(kind, kind.default_page_size())
    }

    pub fn with_page_size(kind: ListingKind, per_page: u32) -> Self {
        Self {
            kind,
            per_page,
            controller: AbortController::new(),
            listing: Listing {
                kind,
                items: Vec::new(),
                categories: vec![CategoryEntry::all()],
                pagination: PaginationMeta::default(),
            },
            filter: FilterState::new(),
            state: LoadState::Idle,
        }
    }

    pub fn kind(&self) -> ListingKind {
        self.kind
    }

    /// Fetch the listing and replace the current snapshot.
    ///
    /// A failure keeps the previous snapshot and records the message. Once the
    /// screen is torn down, loads are no-ops and aborted fetches leave the
    /// state untouched.
    pub fn load<X: Transport + ?Sized>(&mut self, client: &ContentClient, transport: &X) -> &LoadState {
        if self.is_torn_down() {
            debug!(kind = self.kind.as_str(), "load skipped on torn-down screen");
            return &self.state;
        }

        match client.fetch_listing(transport, self.kind, self.per_page, Some(self.controller.signal())) {
            Ok(listing) => {
                info!(
                    kind = self.kind.as_str(),
                    items = listing.items.len(),
                    categories = listing.categories.len(),
                    "listing loaded"
                );
                self.listing = listing;
                self.state = LoadState::Loaded;
            }
            Err(ApiError::Aborted) => {
                debug!(kind = self.kind.as_str(), "listing fetch aborted");
            }
            Err(e) => {
                warn!(kind = self.kind.as_str(), error = %e, "listing fetch failed");
                self.state = LoadState::Failed(e.to_string());
            }
        }
        &self.state
    }

    /// Manual retry from the error panel. Never triggered automatically.
    pub fn retry<X: Transport + ?Sized>(&mut self, client: &ContentClient, transport: &X) -> &LoadState {
        self.load(client, transport)
    }

    /// Abort anything in flight and refuse further loads.
    pub fn teardown(&self) {
        self.controller.abort();
    }

    pub fn is_torn_down(&self) -> bool {
        self.controller.signal().is_aborted()
    }

    /// Handle for tearing the screen down from another thread while a load
    /// is blocked in the transport.
    pub fn abort_handle(&self) -> AbortController {
        self.controller.clone()
    }

    pub fn signal(&self) -> AbortSignal {
        self.controller.signal()
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    pub fn categories(&self) -> &[CategoryEntry] {
        &self.listing.categories
    }

    pub fn set_active(&mut self, key: impl Into<String>) {
        self.filter.set_active(key);
        debug!(kind = self.kind.as_str(), active = self.filter.active(), "category selected");
    }

    pub fn active(&self) -> &str {
        self.filter.active()
    }

    pub fn visible(&self) -> Vec<&ListingItem> {
        self.listing.visible(&self.filter)
    }

    /// Loaded, but nothing matches the active category.
    pub fn is_empty_state(&self) -> bool {
        self.state == LoadState::Loaded && self.visible().is_empty()
    }
}
