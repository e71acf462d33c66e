// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

mod executor;
mod facets;
mod filters;
mod normalize;
mod store;

use std::fmt::{Display, Formatter};

pub const CRATE_NAME: &str = "folio-query";

pub use executor::{find_article, query_articles};
pub use facets::{collect_facets, FacetCounts};
pub use filters::{
    ArticleFilter, ArticleQueryRequest, ArticleQueryResponse, ArticleSummary, QueryLimits,
    DEFAULT_PAGE_SIZE,
};
pub use normalize::fold_for_search;
pub use store::load_catalog;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryError(pub String);

impl Display for QueryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for QueryError {}
