// SPDX-License-Identifier: Apache-2.0

use folio_model::ArticleCatalog;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Distinct facet values with occurrence counts. Years are newest-first;
/// the string facets are sorted ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FacetCounts {
    pub years: Vec<(u16, u64)>,
    pub authors: Vec<(String, u64)>,
    pub journals: Vec<(String, u64)>,
    pub methods: Vec<(String, u64)>,
    pub datasets: Vec<(String, u64)>,
}

#[must_use]
pub fn collect_facets(catalog: &ArticleCatalog) -> FacetCounts {
    let mut years: BTreeMap<u16, u64> = BTreeMap::new();
    let mut authors: BTreeMap<String, u64> = BTreeMap::new();
    let mut journals: BTreeMap<String, u64> = BTreeMap::new();
    let mut methods: BTreeMap<String, u64> = BTreeMap::new();
    let mut datasets: BTreeMap<String, u64> = BTreeMap::new();

    for article in catalog.articles() {
        if let Some(year) = article.year {
            *years.entry(year).or_default() += 1;
        }
        for author in &article.authors {
            *authors.entry(author.clone()).or_default() += 1;
        }
        if !article.journal.is_empty() {
            *journals.entry(article.journal.clone()).or_default() += 1;
        }
        for method in &article.methods {
            *methods.entry(method.clone()).or_default() += 1;
        }
        if !article.data.source_dataset.is_empty() {
            *datasets
                .entry(article.data.source_dataset.clone())
                .or_default() += 1;
        }
    }

    FacetCounts {
        years: years.into_iter().rev().collect(),
        authors: authors.into_iter().collect(),
        journals: journals.into_iter().collect(),
        methods: methods.into_iter().collect(),
        datasets: datasets.into_iter().collect(),
    }
}
