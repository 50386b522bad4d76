//! Verify derivation and response handling against JSON fixtures stored in
//! `test-vectors/`.
//!
//! Each vector file describes inputs and expected outputs. Cases carry a
//! `name` that is threaded into every assertion message.

use creative_content::{
    derive_categories, estimate_minutes, to_plain_text, ApiConfig, ApiError, AssetResolver,
    ContentClient, FilterState, HttpResponse, ListingKind, Paginated, RawRecord,
};
use serde_json::Value;

fn kind_from(s: &str) -> ListingKind {
    match s {
        "blog" => ListingKind::Blog,
        "program" => ListingKind::Program,
        "gallery" => ListingKind::Gallery,
        "trainer" => ListingKind::Trainer,
        other => panic!("unknown kind: {other}"),
    }
}

// ---------------------------------------------------------------------------
// Taxonomy + filter
// ---------------------------------------------------------------------------

#[test]
fn taxonomy_test_vectors() {
    let raw = include_str!("../../test-vectors/taxonomy.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let kind = kind_from(case["kind"].as_str().unwrap());
        let records: Vec<RawRecord> = serde_json::from_value(case["records"].clone()).unwrap();

        let categories = derive_categories(&records, kind.fields());
        let got: Vec<(String, String)> = categories.into_iter().map(|c| (c.key, c.label)).collect();
        let expected: Vec<(String, String)> =
            serde_json::from_value(case["expected_categories"].clone()).unwrap();
        assert_eq!(got, expected, "{name}: categories");

        let mut filter = FilterState::new();
        for (key, ids) in case["filters"].as_object().unwrap() {
            filter.set_active(key.as_str());
            let picked: Vec<i64> = filter
                .filtered_records(&records, kind.fields())
                .iter()
                .filter_map(|r| r.id())
                .collect();
            let expected: Vec<i64> = serde_json::from_value(ids.clone()).unwrap();
            assert_eq!(picked, expected, "{name}: filter {key}");
        }
    }
}

// ---------------------------------------------------------------------------
// Asset URLs
// ---------------------------------------------------------------------------

#[test]
fn asset_test_vectors() {
    let raw = include_str!("../../test-vectors/assets.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    let config = ApiConfig::new(vectors["base_url"].as_str().unwrap()).unwrap();
    let resolver = AssetResolver::new(&config);
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let resolved = resolver.resolve(case["input"].as_str());
        assert_eq!(resolved, case["expected"].as_str().unwrap(), "{name}: resolved");
        assert_eq!(resolver.resolve(Some(&resolved)), resolved, "{name}: idempotent");
    }
}

// ---------------------------------------------------------------------------
// Excerpts + read time
// ---------------------------------------------------------------------------

#[test]
fn excerpt_test_vectors() {
    let raw = include_str!("../../test-vectors/excerpts.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let markup = case["markup"].as_str();
        assert_eq!(to_plain_text(markup), case["expected_text"].as_str().unwrap(), "{name}: text");
        assert_eq!(
            u64::from(estimate_minutes(markup)),
            case["expected_minutes"].as_u64().unwrap(),
            "{name}: minutes"
        );
    }
}

// ---------------------------------------------------------------------------
// Response interpretation
// ---------------------------------------------------------------------------

#[test]
fn error_test_vectors() {
    let raw = include_str!("../../test-vectors/errors.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    let client = ContentClient::new(ApiConfig::default());
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let path = case["path"].as_str().unwrap();
        let response = HttpResponse {
            status: case["status"].as_u64().unwrap() as u16,
            headers: Vec::new(),
            body: case["body"].as_str().unwrap().to_string(),
        };
        let result = client.parse_response::<Option<Paginated<RawRecord>>>(path, response);

        if let Some(expected) = case.get("expected_error") {
            let err = result.unwrap_err();
            match &err {
                ApiError::Request { status, message } => {
                    assert_eq!(u64::from(*status), expected["status"].as_u64().unwrap(), "{name}: status");
                    assert_eq!(message, expected["message"].as_str().unwrap(), "{name}: message");
                }
                other => panic!("{name}: unexpected error {other:?}"),
            }
        } else {
            let page = result.unwrap().unwrap_or_default();
            let expected = case["expected_items"].as_u64().unwrap() as usize;
            assert_eq!(page.data.len(), expected, "{name}: items");
        }
    }
}
