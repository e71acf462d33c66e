// SPDX-License-Identifier: Apache-2.0

use crate::article::{Article, ArticleId};
use crate::ValidationError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The emitted catalog: an ordered sequence of normalized articles,
/// serialized as one JSON array. Built once offline; immutable input for
/// everything downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct ArticleCatalog {
    articles: Vec<Article>,
}

impl ArticleCatalog {
    #[must_use]
    pub fn new(articles: Vec<Article>) -> Self {
        Self { articles }
    }

    #[must_use]
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    #[must_use]
    pub fn find(&self, id: &ArticleId) -> Option<&Article> {
        self.articles.iter().find(|a| &a.id == id)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut seen: BTreeSet<&str> = BTreeSet::new();
        for article in &self.articles {
            let id = article.id.as_str();
            if !seen.insert(id) {
                return Err(ValidationError(format!("duplicate article id: {id}")));
            }
            if article.title_char_len() < 3 {
                return Err(ValidationError(format!(
                    "article {id} has a title shorter than 3 characters"
                )));
            }
            if !article.has_supporting_content() {
                return Err(ValidationError(format!(
                    "article {id} has a title but no supporting content"
                )));
            }
        }
        Ok(())
    }
}
