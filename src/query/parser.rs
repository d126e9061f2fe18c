//! Query string tokenizer.
//!
//! Grammar: whitespace-separated tokens. A token of the form `Key=value`
//! or `Key="quoted value"` (quoted values may contain spaces) populates
//! the matching structured array; repeated keys append. Every other token
//! — including tokens with an unrecognized key prefix or an empty value —
//! degrades to a free-text word. Parsing never fails.

use super::filter::{FilterKey, SearchFilter};

impl SearchFilter {
    /// Parses a free-form query string.
    ///
    /// The empty string parses to the all-empty filter, which the search
    /// engine treats as "show everything".
    pub fn parse(query: &str) -> SearchFilter {
        let mut filter = SearchFilter::default();
        let mut cursor = 0usize;

        while cursor < query.len() {
            let rest = &query[cursor..];
            let ch = rest.chars().next().expect("cursor checked");
            if ch.is_whitespace() {
                cursor += ch.len_utf8();
                continue;
            }

            // Structured token: Key=... with a recognized key.
            if let Some((key, after_eq)) = split_key(rest) {
                if let Some(after_quote) = after_eq.strip_prefix('"') {
                    let quote_start = query.len() - after_quote.len();
                    let (value, next_cursor) = consume_quoted_value(query, quote_start);
                    filter.push(key, value);
                    cursor = next_cursor;
                    continue;
                }

                let value = leading_word(after_eq);
                if !value.is_empty() {
                    filter.push(key, value.to_string());
                    cursor = query.len() - after_eq.len() + value.len();
                    continue;
                }
                // `Key=` with nothing behind it: fall through to free text.
            }

            let word = leading_word(rest);
            filter.words.push(word.to_string());
            cursor += word.len();
        }

        filter
    }
}

/// Splits `Key=` off the front of a token, returning the recognized key
/// and the remainder. `None` when the prefix is not a reserved key.
fn split_key(rest: &str) -> Option<(FilterKey, &str)> {
    let word = leading_word(rest);
    let eq = word.find('=')?;
    let key = FilterKey::parse(&word[..eq])?;
    Some((key, &rest[eq + 1..]))
}

/// The maximal run of non-whitespace characters at the front of `rest`.
fn leading_word(rest: &str) -> &str {
    let end = rest
        .char_indices()
        .find(|(_, ch)| ch.is_whitespace())
        .map(|(index, _)| index)
        .unwrap_or(rest.len());
    &rest[..end]
}

/// Consumes a quoted value starting just past the opening quote at
/// `start`. An unterminated quote runs to the end of the input.
fn consume_quoted_value(query: &str, start: usize) -> (String, usize) {
    match query[start..].find('"') {
        Some(offset) => {
            let end = start + offset;
            (query[start..end].to_string(), end + 1)
        }
        None => (query[start..].to_string(), query.len()),
    }
}
