// SPDX-License-Identifier: Apache-2.0

use crate::QueryError;
use folio_model::ArticleCatalog;
use std::fs;
use std::path::Path;

/// Load the catalog artifact. Well-formedness beyond JSON shape is the
/// ingest side's responsibility; `folio validate` re-checks it.
pub fn load_catalog(path: &Path) -> Result<ArticleCatalog, QueryError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| QueryError(format!("cannot read catalog {}: {e}", path.display())))?;
    serde_json::from_str(&raw)
        .map_err(|e| QueryError(format!("cannot parse catalog {}: {e}", path.display())))
}
