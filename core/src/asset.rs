//! Storage path to display URL resolution.

use crate::config::ApiConfig;

/// Path segment under which the API serves uploaded files.
pub const STORAGE_PREFIX: &str = "storage/";

/// Turns storage-relative paths from API records into absolute URLs.
#[derive(Debug, Clone)]
pub struct AssetResolver {
    origin: String,
}

impl AssetResolver {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            origin: config.asset_origin().to_string(),
        }
    }

    /// Resolve `path` against the asset origin.
    ///
    /// Returns an empty string for missing or empty input (the render layer
    /// treats that as "no image"). Absolute `http(s)://` URLs and URLs already
    /// under the origin come back unchanged, so resolving twice is a no-op.
    pub fn resolve(&self, path: Option<&str>) -> String {
        let Some(path) = path.filter(|p| !p.is_empty()) else {
            return String::new();
        };

        if is_absolute(path) || self.is_resolved(path) {
            return path.to_string();
        }

        let cleaned = path.trim_start_matches('/');
        if cleaned.starts_with(STORAGE_PREFIX) {
            format!("{}/{cleaned}", self.origin)
        } else {
            format!("{}/{STORAGE_PREFIX}{cleaned}", self.origin)
        }
    }

    fn is_resolved(&self, path: &str) -> bool {
        path.strip_prefix(self.origin.as_str())
            .is_some_and(|rest| rest.starts_with('/'))
    }
}

fn is_absolute(path: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        path.get(..scheme.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(scheme))
    })
}
