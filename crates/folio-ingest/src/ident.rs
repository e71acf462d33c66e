// SPDX-License-Identifier: Apache-2.0

use crate::text::clean_text;
use regex::Regex;
use std::sync::LazyLock;

pub const SLUG_MAX_LEN: usize = 80;

static CITATION_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(19|20)\d{2}\b").expect("citation year regex"));

/// Canonicalize a DOI-like value to an absolute `https://doi.org/` URL.
/// Absolute URLs pass through unchanged; anything unrecognized stays as
/// the cleaned input.
#[must_use]
pub fn normalize_doi(raw: &str) -> String {
    let v = clean_text(raw);
    if v.is_empty() {
        return v;
    }
    let lower = v.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        return v;
    }
    if v.starts_with("10.") {
        return format!("https://doi.org/{v}");
    }
    if lower.starts_with("doi:") {
        let rest = v["doi:".len()..].trim_start();
        return format!("https://doi.org/{rest}");
    }
    v
}

/// First word-bounded 4-digit year starting 19 or 20, if any.
#[must_use]
pub fn year_from_citation(citation: &str) -> Option<u16> {
    CITATION_YEAR
        .find(citation)
        .and_then(|m| m.as_str().parse().ok())
}

/// Lowercase, runs outside [a-z0-9] become one hyphen, no leading or
/// trailing hyphen even after the length cap.
#[must_use]
pub fn slugify(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len().min(SLUG_MAX_LEN));
    let mut pending_hyphen = false;
    for c in raw.chars() {
        let lower = c.to_ascii_lowercase();
        if lower.is_ascii_lowercase() || lower.is_ascii_digit() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(lower);
        } else {
            pending_hyphen = true;
        }
    }
    out.truncate(SLUG_MAX_LEN);
    while out.ends_with('-') {
        out.pop();
    }
    out
}

/// Slug of a normalized DOI with the resolver prefix stripped.
#[must_use]
pub fn doi_slug(doi: &str) -> String {
    let stripped = doi
        .strip_prefix("https://doi.org/")
        .or_else(|| doi.strip_prefix("http://doi.org/"))
        .unwrap_or(doi);
    slugify(stripped)
}

/// Identifier fallback chain: DOI slug, then title+year slug, then joined
/// authors slug, then the positional `item-N` (1-based).
#[must_use]
pub fn derive_article_id(
    doi: &str,
    title: &str,
    year: Option<u16>,
    authors: &[String],
    row_index: usize,
) -> String {
    let from_doi = doi_slug(doi);
    if !from_doi.is_empty() {
        return from_doi;
    }
    let year_part = year.map(|y| y.to_string()).unwrap_or_default();
    let from_title = slugify(&format!("{title}-{year_part}"));
    if !from_title.is_empty() {
        return from_title;
    }
    let from_authors = slugify(&authors.join("-"));
    if !from_authors.is_empty() {
        return from_authors;
    }
    format!("item-{}", row_index + 1)
}
