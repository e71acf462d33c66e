// SPDX-License-Identifier: Apache-2.0

use folio_model::Article;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 50;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QueryLimits {
    pub max_page_size: usize,
    pub max_keyword_len: usize,
}

impl Default for QueryLimits {
    fn default() -> Self {
        Self {
            max_page_size: 200,
            max_keyword_len: 256,
        }
    }
}

/// Facet values match exactly; the keyword matches as a folded substring;
/// a flag set to true keeps only records with that research flag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ArticleFilter {
    pub keyword: Option<String>,
    pub year: Option<u16>,
    pub author: Option<String>,
    pub journal: Option<String>,
    pub method: Option<String>,
    pub dataset: Option<String>,
    pub historical: bool,
    pub comparative: bool,
    pub interdisciplinary: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleQueryRequest {
    pub filter: ArticleFilter,
    /// 1-based.
    pub page: usize,
    /// 0 means the default page size.
    pub page_size: usize,
}

impl Default for ArticleQueryRequest {
    fn default() -> Self {
        Self {
            filter: ArticleFilter::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Listing projection of one matching record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleSummary {
    pub id: String,
    pub title: String,
    pub authors: Vec<String>,
    pub journal: String,
    pub year: Option<u16>,
}

impl ArticleSummary {
    #[must_use]
    pub fn from_article(article: &Article) -> Self {
        Self {
            id: article.id.as_str().to_string(),
            title: article.title.clone(),
            authors: article.authors.clone(),
            journal: article.journal.clone(),
            year: article.year,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleQueryResponse {
    pub rows: Vec<ArticleSummary>,
    pub total_matches: usize,
    pub page: usize,
    pub page_count: usize,
}
