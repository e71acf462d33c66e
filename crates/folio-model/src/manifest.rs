// SPDX-License-Identifier: Apache-2.0

use crate::ValidationError;
use serde::{Deserialize, Serialize};

pub const MANIFEST_VERSION: &str = "1";
pub const CATALOG_SCHEMA_VERSION: &str = "1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CatalogStats {
    pub source_rows: u64,
    pub articles: u64,
    pub dropped_rows: u64,
    pub suffixed_ids: u64,
    pub positional_ids: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogManifest {
    pub manifest_version: String,
    pub schema_version: String,
    pub source_sha256: String,
    pub catalog_sha256: String,
    pub stats: CatalogStats,
    // Left empty by default so repeated runs over the same source produce
    // byte-identical artifacts.
    #[serde(default)]
    pub created_at: String,
}

impl CatalogManifest {
    #[must_use]
    pub fn new(source_sha256: String, catalog_sha256: String, stats: CatalogStats) -> Self {
        Self {
            manifest_version: MANIFEST_VERSION.to_string(),
            schema_version: CATALOG_SCHEMA_VERSION.to_string(),
            source_sha256,
            catalog_sha256,
            stats,
            created_at: String::new(),
        }
    }

    pub fn validate_strict(&self) -> Result<(), ValidationError> {
        if self.manifest_version.trim().is_empty() {
            return Err(ValidationError(
                "manifest_version must not be empty".to_string(),
            ));
        }
        if self.schema_version.trim().is_empty() {
            return Err(ValidationError(
                "schema_version must not be empty".to_string(),
            ));
        }
        if self.source_sha256.trim().is_empty() {
            return Err(ValidationError(
                "source_sha256 must not be empty".to_string(),
            ));
        }
        if self.catalog_sha256.trim().is_empty() {
            return Err(ValidationError(
                "catalog_sha256 must not be empty".to_string(),
            ));
        }
        if self.stats.articles == 0 {
            return Err(ValidationError(
                "manifest article count must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}
