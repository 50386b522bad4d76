//! Wire shapes of the content API.
//!
//! # Design
//! Listing records differ in field names per listing type and almost every
//! field is nullable, so a record is kept as an untyped JSON object
//! ([`RawRecord`]) and read through the explicit field maps in `kind`.
//! Envelopes are typed but fully defaulted: a payload with missing, `null` or
//! mistyped pieces still deserializes, with those pieces at their defaults.

use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One item exactly as the API returned it.
///
/// Non-object JSON values deserialize to an empty record instead of failing,
/// so one bad element never drops the whole page.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RawRecord(Map<String, Value>);

impl RawRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// String value of `field`. Null, missing and non-string values are `None`.
    pub fn str_field(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }

    pub fn id(&self) -> Option<i64> {
        self.0.get("id").and_then(Value::as_i64)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl<'de> Deserialize<'de> for RawRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(RawRecord::from_value)
    }
}

/// Field deserializer that maps `null` and values of the wrong type to
/// `T::default()`. Missing fields are covered by `#[serde(default)]`.
fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// `pagination` block of a listing response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationMeta {
    #[serde(deserialize_with = "or_default")]
    pub current_page: u32,
    #[serde(deserialize_with = "or_default")]
    pub last_page: u32,
    #[serde(deserialize_with = "or_default")]
    pub per_page: u32,
    #[serde(deserialize_with = "or_default")]
    pub total: u32,
    #[serde(deserialize_with = "or_default")]
    pub from: Option<u32>,
    #[serde(deserialize_with = "or_default")]
    pub to: Option<u32>,
}

/// Body of every `GET /<listing>?per_page=N` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "T: DeserializeOwned"))]
pub struct Paginated<T> {
    #[serde(deserialize_with = "or_default")]
    pub success: bool,
    #[serde(deserialize_with = "or_default")]
    pub data: Vec<T>,
    #[serde(deserialize_with = "or_default")]
    pub pagination: PaginationMeta,
    #[serde(deserialize_with = "or_default", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self {
            success: false,
            data: Vec::new(),
            pagination: PaginationMeta::default(),
            message: None,
        }
    }
}

impl<T> Paginated<T> {
    /// Whether `data` fits inside the advertised page and total.
    pub fn is_consistent(&self) -> bool {
        let len = self.data.len();
        len <= self.pagination.per_page as usize && self.pagination.total as usize >= len
    }
}

/// Body of single-item endpoints such as `GET /blogs/{slug}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default, deserialize_with = "or_default")]
    pub success: bool,
    pub data: T,
    #[serde(default, deserialize_with = "or_default", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A contact-form submission. Validation happens before this type is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
}

/// JSON body actually posted to `/contact-us`.
#[derive(Debug, Serialize)]
pub(crate) struct ContactPayload<'a> {
    pub source: &'static str,
    pub name: &'a str,
    pub email: &'a str,
    pub phone: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<&'a str>,
    pub message: &'a str,
}

impl<'a> From<&'a ContactSubmission> for ContactPayload<'a> {
    fn from(input: &'a ContactSubmission) -> Self {
        Self {
            source: "creative",
            name: &input.name,
            email: &input.email,
            phone: input.phone.as_deref().filter(|p| !p.is_empty()),
            subject: input.subject.as_deref(),
            message: &input.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn raw_record_reads_strings_and_ids() {
        let record: RawRecord =
            serde_json::from_value(json!({"id": 7, "option": "career", "content": null, "count": 3}))
                .unwrap();
        assert_eq!(record.id(), Some(7));
        assert_eq!(record.str_field("option"), Some("career"));
        assert_eq!(record.str_field("content"), None);
        assert_eq!(record.str_field("count"), None);
        assert_eq!(record.str_field("missing"), None);
    }

    #[test]
    fn non_object_records_become_empty() {
        let page: Paginated<RawRecord> =
            serde_json::from_value(json!({"success": true, "data": [null, 3, {"id": 1}]})).unwrap();
        assert_eq!(page.data.len(), 3);
        assert_eq!(page.data[0], RawRecord::default());
        assert_eq!(page.data[2].id(), Some(1));
    }

    #[test]
    fn paginated_tolerates_missing_blocks() {
        let page: Paginated<RawRecord> = serde_json::from_value(json!({})).unwrap();
        assert!(!page.success);
        assert!(page.data.is_empty());
        assert_eq!(page.pagination, PaginationMeta::default());
    }

    #[test]
    fn paginated_tolerates_null_blocks() {
        let page: Paginated<RawRecord> =
            serde_json::from_value(json!({"success": null, "data": null, "pagination": null}))
                .unwrap();
        assert!(!page.success);
        assert!(page.data.is_empty());
        assert_eq!(page.pagination, PaginationMeta::default());
    }

    #[test]
    fn records_survive_null_pagination() {
        let page: Paginated<RawRecord> = serde_json::from_value(json!({
            "success": true,
            "data": [{"id": 1, "option": "seo"}],
            "pagination": null,
        }))
        .unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].id(), Some(1));
        assert_eq!(page.pagination.total, 0);
    }

    #[test]
    fn null_and_mistyped_pagination_fields_default() {
        let page: Paginated<RawRecord> = serde_json::from_value(json!({
            "data": [],
            "pagination": {"current_page": 2, "per_page": null, "total": "many", "from": null, "to": 9},
            "message": 42,
        }))
        .unwrap();
        assert_eq!(page.pagination.current_page, 2);
        assert_eq!(page.pagination.per_page, 0);
        assert_eq!(page.pagination.total, 0);
        assert_eq!(page.pagination.from, None);
        assert_eq!(page.pagination.to, Some(9));
        assert_eq!(page.message, None);
    }

    #[test]
    fn envelope_tolerates_null_success() {
        let envelope: ApiEnvelope<RawRecord> =
            serde_json::from_value(json!({"success": null, "data": {"id": 3}})).unwrap();
        assert!(!envelope.success);
        assert_eq!(envelope.data.id(), Some(3));
    }

    #[test]
    fn consistency_checks_page_bounds() {
        let mut page: Paginated<RawRecord> = Paginated {
            success: true,
            data: vec![RawRecord::default(); 2],
            pagination: PaginationMeta {
                per_page: 2,
                total: 5,
                ..PaginationMeta::default()
            },
            message: None,
        };
        assert!(page.is_consistent());
        page.pagination.total = 1;
        assert!(!page.is_consistent());
    }

    #[test]
    fn contact_payload_nulls_blank_phone() {
        let input = ContactSubmission {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: Some(String::new()),
            subject: None,
            message: "Hello there, friends".to_string(),
        };
        let body = serde_json::to_value(ContactPayload::from(&input)).unwrap();
        assert_eq!(body["source"], "creative");
        assert!(body["phone"].is_null());
        assert!(body.get("subject").is_none());
    }
}
