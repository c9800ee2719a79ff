//! Wire representation of a bookmark.
//!
//! Every response that echoes bookmark content goes through
//! [`serialize_bookmark`], so user-supplied text is escaped the same way on
//! every path.

use serde::Serialize;
use serde_json::Number;

use super::model::Bookmark;

/// Largest integer an f64 holds exactly.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Sanitized bookmark as sent to clients
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SerializedBookmark {
    pub id: i32,
    pub title: String,
    pub url: String,
    pub description: String,
    pub rating: Number,
}

pub fn serialize_bookmark(bookmark: &Bookmark) -> SerializedBookmark {
    SerializedBookmark {
        id: bookmark.id,
        title: escape_html(&bookmark.title),
        url: escape_html(&bookmark.url),
        description: escape_html(&bookmark.description),
        rating: rating_number(bookmark.rating),
    }
}

/// Escape the characters that let stored text open or close markup.
///
/// Quotes are left alone: the output is meant for text content, and the
/// escaped brackets already prevent any attribute from being parsed.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
    out
}

/// Whole ratings go out as JSON integers (`4`, not `4.0`).
fn rating_number(rating: f64) -> Number {
    if rating.fract() == 0.0 && rating.abs() <= MAX_EXACT_INTEGER {
        return Number::from(rating as i64);
    }
    // Stored ratings are always finite, so from_f64 only fails on corrupt rows.
    Number::from_f64(rating).unwrap_or_else(|| Number::from(0))
}
