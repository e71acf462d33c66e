// SPDX-License-Identifier: Apache-2.0

use regex::Regex;
use std::sync::LazyLock;

// Semicolon, comma, or the standalone word "and" (any case).
static LIST_DELIMITER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i);|,|\band\b").expect("list delimiter regex"));

/// Tidy one raw cell value: NBSP to space, whitespace runs collapsed to a
/// single space, mis-encoded apostrophe sequences to U+2019, en/em dashes
/// to a plain hyphen, trimmed. Idempotent.
#[must_use]
pub fn clean_text(raw: &str) -> String {
    // NBSP counts as whitespace, so the collapse absorbs it and trims in
    // one pass.
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace("??", "\u{2019}")
        .replace('\u{0092}', "\u{2019}")
        .replace(['\u{2013}', '\u{2014}'], "-")
}

/// Split a multi-item cell into cleaned pieces, dropping blanks and
/// preserving source order.
#[must_use]
pub fn split_list(raw: &str) -> Vec<String> {
    LIST_DELIMITER
        .split(raw)
        .map(clean_text)
        .filter(|piece| !piece.is_empty())
        .collect()
}
