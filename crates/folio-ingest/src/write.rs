// SPDX-License-Identifier: Apache-2.0

use crate::extract::ExtractResult;
use crate::hashing::sha256_hex;
use crate::{IngestError, IngestOptions, IngestResult};
use folio_model::{ArticleCatalog, CatalogManifest, CatalogStats};
use std::fs;

/// Write the catalog artifact and its manifest. A failed write is
/// reported as-is; callers treat any aborted write as wholly invalid.
pub fn write_catalog_outputs(
    opts: &IngestOptions,
    extracted: ExtractResult,
    source_sha256: String,
) -> Result<IngestResult, IngestError> {
    fs::create_dir_all(&opts.output_root)
        .map_err(|e| IngestError(format!("cannot create output root: {e}")))?;

    let stats = CatalogStats {
        source_rows: extracted.source_rows,
        articles: extracted.articles.len() as u64,
        dropped_rows: extracted.dropped_rows,
        suffixed_ids: extracted.suffixed_ids,
        positional_ids: extracted.positional_ids,
    };
    let catalog = ArticleCatalog::new(extracted.articles);

    let catalog_bytes =
        serde_json::to_vec_pretty(&catalog).map_err(|e| IngestError(e.to_string()))?;
    let catalog_path = opts.output_root.join(&opts.catalog_name);
    fs::write(&catalog_path, &catalog_bytes)
        .map_err(|e| IngestError(format!("cannot write catalog: {e}")))?;

    let manifest = CatalogManifest::new(source_sha256, sha256_hex(&catalog_bytes), stats);
    let manifest_bytes =
        serde_json::to_vec_pretty(&manifest).map_err(|e| IngestError(e.to_string()))?;
    let manifest_path = opts.output_root.join(&opts.manifest_name);
    fs::write(&manifest_path, &manifest_bytes)
        .map_err(|e| IngestError(format!("cannot write manifest: {e}")))?;

    Ok(IngestResult {
        catalog_path,
        manifest_path,
        catalog,
        manifest,
        events: Vec::new(),
    })
}
