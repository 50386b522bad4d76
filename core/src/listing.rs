//! Render-ready view models built from fetched listing pages.
//!
//! # Design
//! Building is a pure, synchronous transform over an already-fetched page: no
//! I/O happens here and nothing can fail. Missing fields fall back to empty
//! strings, default keys and fallback labels so every record still renders.
//! A [`Listing`] is rebuilt wholesale on every fetch and never mutated after.

use serde::Serialize;

use crate::asset::AssetResolver;
use crate::filter::{Categorized, FilterState};
use crate::format::{format_date, hex_to_rgba, DateStyle};
use crate::kind::ListingKind;
use crate::read_time::estimate_minutes;
use crate::sanitize::{derive_highlights, to_plain_text};
use crate::taxonomy::{derive_categories, label_for, CategoryEntry};
use crate::types::{PaginationMeta, Paginated, RawRecord};

/// Accent colour for programs that do not carry their own.
pub const DEFAULT_ACCENT_COLOR: &str = "#1d4ed8";

/// Alpha of the tinted card background behind a program's accent colour.
pub const ACCENT_TINT_ALPHA: f32 = 0.12;

/// One record ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingItem {
    pub kind: ListingKind,
    pub id: Option<i64>,
    /// Original fields, untouched.
    pub record: RawRecord,
    /// Effective category key.
    pub category_key: String,
    pub category_label: String,
    /// Empty when the record has no image.
    pub asset_url: String,
    /// Body with markup removed; the display text when nothing curated exists.
    pub excerpt: String,
    /// Blogs only.
    pub read_minutes: Option<u32>,
    /// Blogs only: `published_at`, else `created_at`, as `Dec 15, 2024`.
    pub published_on: Option<String>,
    /// Programs only.
    pub accent_color: Option<String>,
    /// Programs only: `accent_color` as `rgba(..)` at [`ACCENT_TINT_ALPHA`].
    pub accent_tint: Option<String>,
    /// Programs only: up to four lines lifted from the description.
    pub highlights: Vec<String>,
}

impl ListingItem {
    pub fn build(kind: ListingKind, record: RawRecord, assets: &AssetResolver) -> Self {
        let fields = kind.fields();
        let body = fields.body(&record);

        let read_minutes = (kind == ListingKind::Blog).then(|| estimate_minutes(body));
        let published_on = (kind == ListingKind::Blog)
            .then(|| publish_date(&record, DateStyle::Short))
            .flatten();
        let (accent_color, accent_tint, highlights) = if kind == ListingKind::Program {
            let color = record.str_field("color").unwrap_or(DEFAULT_ACCENT_COLOR);
            (
                Some(color.to_string()),
                Some(hex_to_rgba(color, ACCENT_TINT_ALPHA)),
                derive_highlights(body),
            )
        } else {
            (None, None, Vec::new())
        };

        Self {
            kind,
            id: record.id(),
            category_key: fields.effective_key(&record).to_string(),
            category_label: label_for(fields, fields.raw_key(&record)),
            asset_url: assets.resolve(fields.asset(&record)),
            excerpt: to_plain_text(body),
            read_minutes,
            published_on,
            accent_color,
            accent_tint,
            highlights,
            record,
        }
    }

    /// Publication date in `style`; the article header uses
    /// [`DateStyle::Long`]. Blogs only.
    pub fn published(&self, style: DateStyle) -> Option<String> {
        if self.kind != ListingKind::Blog {
            return None;
        }
        publish_date(&self.record, style)
    }

    pub fn title(&self) -> Option<&str> {
        self.record
            .str_field("title")
            .or_else(|| self.record.str_field("name"))
    }

    pub fn slug(&self) -> Option<&str> {
        self.record.str_field("slug")
    }
}

fn publish_date(record: &RawRecord, style: DateStyle) -> Option<String> {
    let stamp = record
        .str_field("published_at")
        .or_else(|| record.str_field("created_at"));
    format_date(stamp, style)
}

impl Categorized for ListingItem {
    fn category_key(&self) -> &str {
        &self.category_key
    }
}

/// Build view models for every record, preserving order.
pub fn build_items(
    kind: ListingKind,
    records: impl IntoIterator<Item = RawRecord>,
    assets: &AssetResolver,
) -> Vec<ListingItem> {
    records
        .into_iter()
        .map(|record| ListingItem::build(kind, record, assets))
        .collect()
}

/// A fetched page turned into view models plus its derived categories.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Listing {
    pub kind: ListingKind,
    pub items: Vec<ListingItem>,
    pub categories: Vec<CategoryEntry>,
    pub pagination: PaginationMeta,
}

impl Listing {
    pub fn from_collection(
        kind: ListingKind,
        collection: Paginated<RawRecord>,
        assets: &AssetResolver,
    ) -> Self {
        let categories = derive_categories(&collection.data, kind.fields());
        Self {
            kind,
            items: build_items(kind, collection.data, assets),
            categories,
            pagination: collection.pagination,
        }
    }

    pub fn visible(&self, filter: &FilterState) -> Vec<&ListingItem> {
        filter.filtered(&self.items)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
