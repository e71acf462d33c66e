// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

mod extract;
mod hashing;
mod ident;
mod logging;
mod table;
mod text;
mod write;

use folio_model::{ArticleCatalog, CatalogManifest, ColumnAliases};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const CRATE_NAME: &str = "folio-ingest";

pub use extract::{extract_articles, ExtractResult};
pub use hashing::{hash_file, sha256_hex};
pub use ident::{derive_article_id, doi_slug, normalize_doi, slugify, year_from_citation};
pub use logging::{IngestEvent, IngestLog, IngestStage};
pub use table::{read_rows, RawRow};
pub use text::{clean_text, split_list};

#[derive(Debug)]
pub struct IngestError(pub String);

impl Display for IngestError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for IngestError {}

#[derive(Debug, Clone)]
pub struct IngestOptions {
    pub source_path: PathBuf,
    pub output_root: PathBuf,
    pub catalog_name: String,
    pub manifest_name: String,
    pub aliases: ColumnAliases,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            source_path: PathBuf::new(),
            output_root: PathBuf::new(),
            catalog_name: "articles.json".to_string(),
            manifest_name: "manifest.json".to_string(),
            aliases: ColumnAliases::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct IngestResult {
    pub catalog_path: PathBuf,
    pub manifest_path: PathBuf,
    pub catalog: ArticleCatalog,
    pub manifest: CatalogManifest,
    pub events: Vec<IngestEvent>,
}

pub fn ingest_catalog(opts: &IngestOptions) -> Result<IngestResult, IngestError> {
    ingest_catalog_with_events(opts).map(|(result, _)| result)
}

pub fn ingest_catalog_with_events(
    opts: &IngestOptions,
) -> Result<(IngestResult, Vec<IngestEvent>), IngestError> {
    let mut log = IngestLog::default();
    log.emit(IngestStage::Prepare, "ingest.start", BTreeMap::new());

    if opts.source_path.as_os_str().is_empty() {
        return Err(IngestError("source path is required".to_string()));
    }
    if opts.output_root.as_os_str().is_empty() {
        return Err(IngestError("output root is required".to_string()));
    }

    log.emit(IngestStage::Read, "ingest.read.begin", BTreeMap::new());
    let rows = table::read_rows(&opts.source_path)?;
    let source_sha256 = hashing::hash_file(&opts.source_path)?;
    log.emit(
        IngestStage::Read,
        "ingest.read.complete",
        BTreeMap::from([("rows".to_string(), rows.len().to_string())]),
    );

    log.emit(IngestStage::Extract, "ingest.extract.begin", BTreeMap::new());
    let extracted = extract::extract_articles(&rows, &opts.aliases)?;
    log.emit(
        IngestStage::Extract,
        "ingest.extract.complete",
        BTreeMap::from([
            ("articles".to_string(), extracted.articles.len().to_string()),
            ("dropped_rows".to_string(), extracted.dropped_rows.to_string()),
            ("suffixed_ids".to_string(), extracted.suffixed_ids.to_string()),
        ]),
    );

    log.emit(IngestStage::Persist, "ingest.persist.begin", BTreeMap::new());
    let mut result = write::write_catalog_outputs(opts, extracted, source_sha256)?;
    log.emit(
        IngestStage::Finalize,
        "ingest.persist.complete",
        BTreeMap::new(),
    );

    result.events = log.events().to_vec();
    Ok((result, log.events().to_vec()))
}
