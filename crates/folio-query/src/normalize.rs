// SPDX-License-Identifier: Apache-2.0

use unicode_normalization::UnicodeNormalization;

#[must_use]
pub fn fold_for_search(input: &str) -> String {
    // Canonical search folding policy: NFKC + Unicode lowercase.
    input.nfkc().collect::<String>().to_lowercase()
}
