// SPDX-License-Identifier: Apache-2.0

use crate::IngestError;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

#[must_use]
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

pub fn hash_file(path: &Path) -> Result<String, IngestError> {
    let bytes = fs::read(path).map_err(|e| IngestError(e.to_string()))?;
    Ok(sha256_hex(&bytes))
}
