use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::extract::Entry;

/// Site base, no trailing slash.
pub const SITE: &str = "https://osloandrew.github.io/norwegian";

/// Everything outside the unreserved set (letters, digits, `-_.~`) gets
/// percent-encoded, UTF-8 bytes first. Spaces become %20, never `+`, and
/// `&`, `=`, `?`, `/` are all encoded so values can't bleed into the query
/// structure.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

pub fn encode(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

/// Vocabulary Entry → word URL. The `pos` parameter is present only when the
/// row carried a category tag, and always precedes `word`.
pub fn word_url(entry: &Entry) -> String {
    match &entry.category {
        Some(pos) => format!(
            "{}/?type=words&pos={}&word={}",
            SITE,
            encode(pos),
            encode(&entry.value)
        ),
        None => format!("{}/?type=words&word={}", SITE, encode(&entry.value)),
    }
}

/// Story Entry → story URL, addressed by the verbatim title.
pub fn story_url(entry: &Entry) -> String {
    format!("{}/?type=story&story={}", SITE, encode(&entry.value))
}
