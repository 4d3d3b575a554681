//! Answer text normalization
//!
//! Remote answers arrive as HTML/Markdown-flavored text. `clean` flattens
//! them to plain prose; `bullet_points` extracts displayable key points.
//! Both are pure and total over arbitrary input.
//!
//! The pipeline order is a contract: tags before entities (so decoded
//! angle brackets survive), entities before whitespace collapsing, list
//! markers after asterisk runs (an asterisk bullet loses its marker in the
//! asterisk pass).

use std::sync::LazyLock;

use regex::Regex;

/// Minimum character count for a sentence fragment to qualify as a key
/// point. Strictly greater than; a 10-char fragment is dropped.
pub const MIN_POINT_CHARS: usize = 10;

static TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));
static ASTERISK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*+").expect("valid regex"));
static BULLET_MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*[*\-+]\s+").expect("valid regex"));
static NUMBERED_MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*\d+\.\s+").expect("valid regex"));
static LINK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\([^)]+\)").expect("valid regex"));
static BACKTICK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("valid regex"));
static HEADING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#{1,6}\s*").expect("valid regex"));
static WHITESPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Fixed entity set, decoded in this order. `&amp;` runs before the
/// bracket entities, so `&amp;lt;` decodes all the way to `<`.
const ENTITIES: [(&str, &str); 6] = [
    ("&nbsp;", " "),
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
];

/// Flatten HTML/Markdown-flavored answer text to single-line plain prose.
///
/// Steps, in order: strip `<...>` tags, decode the fixed entity set,
/// drop asterisk runs, drop line-leading list markers (unordered then
/// numbered), unwrap Markdown links and inline code, strip heading
/// markers, collapse whitespace, trim.
pub fn clean(raw: &str) -> String {
    let text = TAG_REGEX.replace_all(raw, "");

    let mut text = text.into_owned();
    for (entity, replacement) in ENTITIES {
        text = text.replace(entity, replacement);
    }

    let text = ASTERISK_REGEX.replace_all(&text, "");
    let text = BULLET_MARKER_REGEX.replace_all(&text, "");
    let text = NUMBERED_MARKER_REGEX.replace_all(&text, "");
    let text = LINK_REGEX.replace_all(&text, "$1");
    let text = BACKTICK_REGEX.replace_all(&text, "$1");
    let text = HEADING_REGEX.replace_all(&text, "");
    let text = WHITESPACE_REGEX.replace_all(&text, " ");

    text.trim().to_string()
}

/// Split cleaned text into key points: sentence fragments delimited by
/// runs of `.`, `!` or `?`, trimmed, keeping only fragments longer than
/// [`MIN_POINT_CHARS`] characters. Order is preserved.
pub fn bullet_points(cleaned: &str) -> Vec<String> {
    static SENTENCE_REGEX: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid regex"));

    SENTENCE_REGEX
        .split(cleaned)
        .map(str::trim)
        .filter(|segment| segment.chars().count() > MIN_POINT_CHARS)
        .map(ToString::to_string)
        .collect()
}
