//! Listing types and the field maps that describe their raw records.
//!
//! # Design
//! Each listing endpoint names the same concepts differently (`option` vs
//! `category`, `content` vs `description`, `image_url` vs `photo_path`).
//! Rather than guessing at shapes, every [`ListingKind`] owns a static
//! [`FieldMap`] that the taxonomy deriver and view-model builder read from.

use serde::Serialize;

use crate::types::RawRecord;

/// Label table entries: raw taxonomy key to display label.
pub type LabelTable = &'static [(&'static str, &'static str)];

/// How to read taxonomy, body and asset data out of one listing type's records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMap {
    /// Field carrying the raw category key.
    pub key_field: &'static str,
    /// Effective key used when `key_field` is null or missing.
    pub default_key: &'static str,
    /// Label shown when `key_field` is null, missing or empty.
    pub fallback_label: &'static str,
    pub labels: LabelTable,
    /// Field carrying rich text, if the listing has one.
    pub body_field: Option<&'static str>,
    /// Field carrying a storage path, if the listing has one.
    pub asset_field: Option<&'static str>,
}

impl FieldMap {
    /// Category key after applying the default for null or missing values.
    pub fn effective_key<'a>(&self, record: &'a RawRecord) -> &'a str {
        record.str_field(self.key_field).unwrap_or(self.default_key)
    }

    pub fn raw_key<'a>(&self, record: &'a RawRecord) -> Option<&'a str> {
        record.str_field(self.key_field)
    }

    pub fn body<'a>(&self, record: &'a RawRecord) -> Option<&'a str> {
        self.body_field.and_then(|field| record.str_field(field))
    }

    pub fn asset<'a>(&self, record: &'a RawRecord) -> Option<&'a str> {
        self.asset_field.and_then(|field| record.str_field(field))
    }
}

const BLOG_LABELS: LabelTable = &[
    ("career", "Career Tips"),
    ("technology", "Technology"),
    ("design", "Design"),
    ("branding", "Branding"),
    ("seo", "SEO"),
];

const PROGRAM_LABELS: LabelTable = &[
    ("school", "School"),
    ("college", "College"),
    ("corporate", "Corporate"),
    ("it", "IT & Development"),
    ("digital_marketing", "Digital Marketing"),
];

const GALLERY_LABELS: LabelTable = &[
    ("digital_marketing", "Digital Marketing"),
    ("web_development", "Web Development"),
    ("creative_design", "Creative Design"),
    ("app_development", "App Development"),
];

const BLOG_FIELDS: FieldMap = FieldMap {
    key_field: "option",
    default_key: "insights",
    fallback_label: "Insights",
    labels: BLOG_LABELS,
    body_field: Some("content"),
    asset_field: Some("image_url"),
};

const PROGRAM_FIELDS: FieldMap = FieldMap {
    key_field: "category",
    default_key: "creative_strategy",
    fallback_label: "Creative Strategy",
    labels: PROGRAM_LABELS,
    body_field: Some("description"),
    asset_field: None,
};

const GALLERY_FIELDS: FieldMap = FieldMap {
    key_field: "option",
    default_key: "highlights",
    fallback_label: "Highlights",
    labels: GALLERY_LABELS,
    body_field: Some("description"),
    asset_field: Some("image_url"),
};

const TRAINER_FIELDS: FieldMap = FieldMap {
    key_field: "expertise",
    default_key: "trainers",
    fallback_label: "Trainer",
    labels: &[],
    body_field: None,
    asset_field: Some("photo_path"),
};

/// The listing screens backed by the content API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingKind {
    Blog,
    Program,
    Gallery,
    Trainer,
}

impl ListingKind {
    pub const ALL: [ListingKind; 4] = [
        ListingKind::Blog,
        ListingKind::Program,
        ListingKind::Gallery,
        ListingKind::Trainer,
    ];

    pub fn fields(self) -> &'static FieldMap {
        match self {
            ListingKind::Blog => &BLOG_FIELDS,
            ListingKind::Program => &PROGRAM_FIELDS,
            ListingKind::Gallery => &GALLERY_FIELDS,
            ListingKind::Trainer => &TRAINER_FIELDS,
        }
    }

    /// Collection path relative to the API base.
    pub fn collection_path(self) -> &'static str {
        match self {
            ListingKind::Blog => "/blogs",
            ListingKind::Program => "/programs",
            ListingKind::Gallery => "/galleries",
            ListingKind::Trainer => "/trainers",
        }
    }

    pub fn default_page_size(self) -> u32 {
        match self {
            ListingKind::Blog => 30,
            ListingKind::Program => 9,
            ListingKind::Gallery => 24,
            ListingKind::Trainer => 12,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ListingKind::Blog => "blog",
            ListingKind::Program => "program",
            ListingKind::Gallery => "gallery",
            ListingKind::Trainer => "trainer",
        }
    }
}
