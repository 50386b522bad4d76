//! Rich-text to plain-text conversion for excerpts and heuristics.
//!
//! Output feeds display-length heuristics and card excerpts only; it is not a
//! security boundary.

use scraper::Html;

/// Maximum number of highlight lines extracted from a program description.
pub const MAX_HIGHLIGHTS: usize = 4;

/// Strip every markup tag from `markup`, concatenating the text between them.
///
/// Parsing goes through an HTML5 tokenizer, so unterminated or malformed tags
/// degrade to leftover text instead of failing. Entity references are decoded
/// as a side effect.
pub fn to_plain_text(markup: Option<&str>) -> String {
    let Some(markup) = markup.filter(|m| !m.is_empty()) else {
        return String::new();
    };
    if !markup.contains('<') && !markup.contains('&') {
        return markup.to_string();
    }

    let fragment = Html::parse_fragment(markup);
    fragment.root_element().text().collect()
}

/// Up to [`MAX_HIGHLIGHTS`] short lines from a program description.
///
/// The sanitized text is split on newlines and full stops; pieces are trimmed
/// and empty ones dropped.
pub fn derive_highlights(description: Option<&str>) -> Vec<String> {
    to_plain_text(description)
        .split(['\n', '.'])
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .take(MAX_HIGHLIGHTS)
        .map(str::to_string)
        .collect()
}
