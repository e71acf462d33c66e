// SPDX-License-Identifier: Apache-2.0

use crate::ident::{derive_article_id, normalize_doi, year_from_citation};
use crate::table::RawRow;
use crate::text::{clean_text, split_list};
use crate::IngestError;
use folio_model::{
    flag_is_set, Article, ArticleId, ColumnAliases, DataProvenance, LegalSources, Research,
};
use std::collections::BTreeSet;

#[derive(Debug, Clone)]
pub struct ExtractResult {
    pub articles: Vec<Article>,
    pub source_rows: u64,
    pub dropped_rows: u64,
    pub suffixed_ids: u64,
    pub positional_ids: u64,
}

/// Map every row independently, drop rows without a usable title or any
/// supporting content, then make identifiers unique in source order.
/// Per-field problems never fail a row; they degrade to absent values.
pub fn extract_articles(
    rows: &[RawRow],
    aliases: &ColumnAliases,
) -> Result<ExtractResult, IngestError> {
    let mut positional_ids = 0u64;
    let mut kept = Vec::new();
    for (index, row) in rows.iter().enumerate() {
        let (article, positional) = map_row(row, aliases, index)?;
        if article.title_char_len() < 3 || !article.has_supporting_content() {
            continue;
        }
        if positional {
            positional_ids += 1;
        }
        kept.push(article);
    }

    let dropped_rows = rows.len() as u64 - kept.len() as u64;
    let suffixed_ids = dedupe_ids(&mut kept)?;

    Ok(ExtractResult {
        articles: kept,
        source_rows: rows.len() as u64,
        dropped_rows,
        suffixed_ids,
        positional_ids,
    })
}

fn map_row(
    row: &RawRow,
    aliases: &ColumnAliases,
    index: usize,
) -> Result<(Article, bool), IngestError> {
    let title = clean_text(&aliases.title.resolve(row));
    let authors = split_list(&aliases.author.resolve(row));
    let citation = clean_text(&aliases.citation.resolve(row));
    let doi = normalize_doi(&aliases.doi.resolve(row));
    let year = year_from_citation(&citation);

    // Both theories groups are resolved and concatenated; when they hit
    // the same column the items repeat, matching the source pipeline.
    let mut theories = split_list(&aliases.theories_primary.resolve(row));
    theories.extend(split_list(&aliases.theories_secondary.resolve(row)));

    let id_base = derive_article_id(&doi, &title, year, &authors, index);
    let positional = id_base == format!("item-{}", index + 1);
    let id = ArticleId::parse(&id_base)
        .map_err(|e| IngestError(format!("derived id for row {}: {e}", index + 1)))?;

    let article = Article {
        id,
        title,
        authors,
        journal: clean_text(&aliases.journal.resolve(row)),
        citation,
        year,
        url: clean_text(&aliases.url.resolve(row)),
        doi,
        abstract_text: clean_text(&aliases.abstract_text.resolve(row)),
        conclusion: clean_text(&aliases.conclusion.resolve(row)),
        keywords: split_list(&aliases.keywords.resolve(row)),
        methods: split_list(&aliases.methods.resolve(row)),
        sub_methods: split_list(&aliases.sub_methods.resolve(row)),
        theories,
        research: Research {
            questions: clean_text(&aliases.research_questions.resolve(row)),
            answers: clean_text(&aliases.answers.resolve(row)),
            notes: clean_text(&aliases.research_notes.resolve(row)),
            historical: flag_is_set(&aliases.historical.resolve(row)),
            comparative: flag_is_set(&aliases.comparative.resolve(row)),
            interdisciplinary: flag_is_set(&aliases.interdisciplinary.resolve(row)),
        },
        legal_sources: LegalSources {
            kind: clean_text(&aliases.legal_source_type.resolve(row)),
            citations: clean_text(&aliases.legal_source_citations.resolve(row)),
            policy_documents: clean_text(&aliases.policy_documents.resolve(row)),
        },
        data: DataProvenance {
            source_identification: clean_text(&aliases.data_source_identification.resolve(row)),
            authors_data_description: clean_text(&aliases.authors_data_description.resolve(row)),
            source_dataset: clean_text(&aliases.source_dataset.resolve(row)),
        },
        notes: clean_text(&aliases.notes.resolve(row)),
        license: clean_text(&aliases.license.resolve(row)),
    };
    Ok((article, positional))
}

// On collision the suffix counts up from -2 over the original base until
// an unused id is found.
fn dedupe_ids(articles: &mut [Article]) -> Result<u64, IngestError> {
    let mut seen: BTreeSet<String> = BTreeSet::new();
    let mut suffixed = 0u64;
    for article in articles.iter_mut() {
        let base = article.id.as_str().to_string();
        if seen.contains(&base) {
            let mut n = 2u64;
            let mut candidate = format!("{base}-{n}");
            while seen.contains(&candidate) {
                n += 1;
                candidate = format!("{base}-{n}");
            }
            article.id = ArticleId::parse(&candidate)
                .map_err(|e| IngestError(format!("deduplicated id {candidate}: {e}")))?;
            suffixed += 1;
        }
        seen.insert(article.id.as_str().to_string());
    }
    Ok(suffixed)
}
