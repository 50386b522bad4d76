//! Reading-time estimate for blog bodies.

use crate::sanitize::to_plain_text;

pub const WORDS_PER_MINUTE: f64 = 200.0;

/// Number of whitespace-separated words left after stripping markup.
pub fn word_count(markup: Option<&str>) -> usize {
    to_plain_text(markup).split_whitespace().count()
}

/// Minutes needed to read `markup`, rounded to the nearest minute and never
/// below one.
pub fn estimate_minutes(markup: Option<&str>) -> u32 {
    let minutes = (word_count(markup) as f64 / WORDS_PER_MINUTE).round() as u32;
    minutes.max(1)
}
