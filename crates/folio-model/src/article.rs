// SPDX-License-Identifier: Apache-2.0

use crate::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

// Slugs are capped at 80 bytes; the extra headroom absorbs dedupe suffixes.
pub const ID_MAX_LEN: usize = 96;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
#[non_exhaustive]
pub struct ArticleId(String);

impl ArticleId {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        if input.is_empty() {
            return Err(ValidationError("article id must not be empty".to_string()));
        }
        if input.len() > ID_MAX_LEN {
            return Err(ValidationError(format!(
                "article id exceeds max length {ID_MAX_LEN}"
            )));
        }
        if !input
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(ValidationError(format!(
                "article id must match [a-z0-9-]+: {input}"
            )));
        }
        if input.starts_with('-') || input.ends_with('-') {
            return Err(ValidationError(format!(
                "article id must not start or end with '-': {input}"
            )));
        }
        Ok(Self(input.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ArticleId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Research {
    pub questions: String,
    pub answers: String,
    pub notes: String,
    pub historical: bool,
    pub comparative: bool,
    pub interdisciplinary: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct LegalSources {
    #[serde(rename = "type")]
    pub kind: String,
    pub citations: String,
    #[serde(rename = "policyDocuments")]
    pub policy_documents: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct DataProvenance {
    #[serde(rename = "sourceIdentification")]
    pub source_identification: String,
    #[serde(rename = "authorsDataDescription")]
    pub authors_data_description: String,
    #[serde(rename = "sourceDataset")]
    pub source_dataset: String,
}

/// One normalized catalog record. Absent fields stay as empty strings,
/// empty lists, or a null year — consumers must tolerate any of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub authors: Vec<String>,
    pub journal: String,
    pub citation: String,
    pub year: Option<u16>,
    pub url: String,
    pub doi: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub conclusion: String,
    pub keywords: Vec<String>,
    pub methods: Vec<String>,
    #[serde(rename = "subMethods")]
    pub sub_methods: Vec<String>,
    pub theories: Vec<String>,
    pub research: Research,
    #[serde(rename = "legalSources")]
    pub legal_sources: LegalSources,
    pub data: DataProvenance,
    pub notes: String,
    pub license: String,
}

impl Article {
    #[must_use]
    pub fn title_char_len(&self) -> usize {
        self.title.chars().count()
    }

    /// A record with a title but no other signal carries nothing worth
    /// keeping; the filter rule checks these fields.
    #[must_use]
    pub fn has_supporting_content(&self) -> bool {
        !self.abstract_text.is_empty()
            || !self.citation.is_empty()
            || !self.journal.is_empty()
            || !self.url.is_empty()
            || !self.authors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{Article, ArticleId, DataProvenance, LegalSources, Research};

    fn blank_article(id: &str, title: &str) -> Article {
        Article {
            id: ArticleId::parse(id).expect("id"),
            title: title.to_string(),
            authors: Vec::new(),
            journal: String::new(),
            citation: String::new(),
            year: None,
            url: String::new(),
            doi: String::new(),
            abstract_text: String::new(),
            conclusion: String::new(),
            keywords: Vec::new(),
            methods: Vec::new(),
            sub_methods: Vec::new(),
            theories: Vec::new(),
            research: Research::default(),
            legal_sources: LegalSources::default(),
            data: DataProvenance::default(),
            notes: String::new(),
            license: String::new(),
        }
    }

    #[test]
    fn article_id_accepts_slugs_and_positional_ids() {
        assert_eq!(ArticleId::parse("smith-2020").expect("slug").as_str(), "smith-2020");
        assert_eq!(ArticleId::parse("item-17").expect("positional").as_str(), "item-17");
    }

    #[test]
    fn article_id_rejects_bad_shapes() {
        assert!(ArticleId::parse("").is_err());
        assert!(ArticleId::parse("Smith-2020").is_err());
        assert!(ArticleId::parse("smith 2020").is_err());
        assert!(ArticleId::parse("-smith").is_err());
        assert!(ArticleId::parse("smith-").is_err());
        assert!(ArticleId::parse(&"a".repeat(97)).is_err());
    }

    #[test]
    fn supporting_content_requires_one_signal_field() {
        let bare = blank_article("item-1", "Valid Title");
        assert!(!bare.has_supporting_content());

        let mut with_journal = blank_article("item-2", "Valid Title");
        with_journal.journal = "Law Review".to_string();
        assert!(with_journal.has_supporting_content());

        let mut with_authors = blank_article("item-3", "Valid Title");
        with_authors.authors = vec!["Jane Doe".to_string()];
        assert!(with_authors.has_supporting_content());
    }

    #[test]
    fn serialized_field_names_match_the_catalog_contract() {
        let mut article = blank_article("item-1", "T. One");
        article.abstract_text = "An abstract.".to_string();
        article.legal_sources.kind = "statute".to_string();
        article.data.source_dataset = "CNKI".to_string();
        let value = serde_json::to_value(&article).expect("serialize");
        assert_eq!(value["abstract"], "An abstract.");
        assert_eq!(value["legalSources"]["type"], "statute");
        assert_eq!(value["data"]["sourceDataset"], "CNKI");
        assert_eq!(value["year"], serde_json::Value::Null);
        assert!(value.get("abstract_text").is_none());
    }
}
