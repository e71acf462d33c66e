// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Canonical form used to compare column headers across source revisions:
/// BOM characters stripped, internal whitespace runs collapsed to one
/// space, leading/trailing whitespace removed, lowercased.
#[must_use]
pub fn normalize_header(raw: &str) -> String {
    raw.replace('\u{feff}', "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Spreadsheet-style truthiness: the flag is set iff the value starts
/// with `y` after trim + ASCII lowercase.
#[must_use]
pub fn flag_is_set(raw: &str) -> bool {
    raw.trim().to_ascii_lowercase().starts_with('y')
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldAliases {
    pub aliases: Vec<String>,
}

impl FieldAliases {
    #[must_use]
    pub fn new(aliases: &[&str]) -> Self {
        Self {
            aliases: aliases.iter().map(ToString::to_string).collect(),
        }
    }

    /// First alias (priority order) whose value in the row is non-blank
    /// wins; no match resolves to the empty string. Row keys must already
    /// be in normalized-header form.
    #[must_use]
    pub fn resolve(&self, row: &BTreeMap<String, String>) -> String {
        for alias in &self.aliases {
            if let Some(value) = row.get(&normalize_header(alias)) {
                if !value.trim().is_empty() {
                    return value.clone();
                }
            }
        }
        String::new()
    }
}

/// Prioritized header-alias table for every logical article field.
///
/// `theories_primary` and `theories_secondary` are distinct groups that
/// are both resolved and concatenated downstream, even when they hit the
/// same column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColumnAliases {
    pub title: FieldAliases,
    pub author: FieldAliases,
    pub citation: FieldAliases,
    pub journal: FieldAliases,
    pub url: FieldAliases,
    pub doi: FieldAliases,
    pub abstract_text: FieldAliases,
    pub conclusion: FieldAliases,
    pub keywords: FieldAliases,
    pub research_questions: FieldAliases,
    pub answers: FieldAliases,
    pub research_notes: FieldAliases,
    pub methods: FieldAliases,
    pub sub_methods: FieldAliases,
    pub historical: FieldAliases,
    pub comparative: FieldAliases,
    pub interdisciplinary: FieldAliases,
    pub theories_primary: FieldAliases,
    pub theories_secondary: FieldAliases,
    pub legal_source_type: FieldAliases,
    pub legal_source_citations: FieldAliases,
    pub policy_documents: FieldAliases,
    pub data_source_identification: FieldAliases,
    pub authors_data_description: FieldAliases,
    pub source_dataset: FieldAliases,
    pub notes: FieldAliases,
    pub license: FieldAliases,
}

impl Default for ColumnAliases {
    fn default() -> Self {
        Self {
            title: FieldAliases::new(&["Title"]),
            author: FieldAliases::new(&["Author", "Authors"]),
            citation: FieldAliases::new(&["Citation"]),
            journal: FieldAliases::new(&["Journal Title", "Journal"]),
            url: FieldAliases::new(&["URL"]),
            doi: FieldAliases::new(&["Article DOI if available", "DOI"]),
            abstract_text: FieldAliases::new(&["Abstract"]),
            conclusion: FieldAliases::new(&["Conclusion"]),
            keywords: FieldAliases::new(&["Keywords if provided by the article", "Keywords"]),
            research_questions: FieldAliases::new(&["Research Question(s)"]),
            answers: FieldAliases::new(&["Answers"]),
            research_notes: FieldAliases::new(&["Research Question and Answer Note"]),
            methods: FieldAliases::new(&["Research Methods"]),
            sub_methods: FieldAliases::new(&["Sub-research method types"]),
            historical: FieldAliases::new(&["Historical Research"]),
            comparative: FieldAliases::new(&["Is it comparative research"]),
            interdisciplinary: FieldAliases::new(&["Is it interdisciplinary research"]),
            theories_primary: FieldAliases::new(&["Research Theories"]),
            theories_secondary: FieldAliases::new(&["Research Theories"]),
            legal_source_type: FieldAliases::new(&["Type of Legal Sources"]),
            legal_source_citations: FieldAliases::new(&["Legal Sources Citations"]),
            policy_documents: FieldAliases::new(&["Policy documents"]),
            data_source_identification: FieldAliases::new(&["Data Source Identification"]),
            authors_data_description: FieldAliases::new(&[
                "Author's Data Description",
                "Authors Data Description",
            ]),
            source_dataset: FieldAliases::new(&["Source Dataset"]),
            notes: FieldAliases::new(&["Additional Notes"]),
            license: FieldAliases::new(&["Article License Type"]),
        }
    }
}
