// SPDX-License-Identifier: Apache-2.0

use crate::filters::{
    ArticleFilter, ArticleQueryRequest, ArticleQueryResponse, ArticleSummary, QueryLimits,
    DEFAULT_PAGE_SIZE,
};
use crate::normalize::fold_for_search;
use crate::QueryError;
use folio_model::{Article, ArticleCatalog};

/// Linear scan over the catalog: filter, then paginate. Out-of-range
/// pages return empty rows with the real totals.
pub fn query_articles(
    catalog: &ArticleCatalog,
    req: &ArticleQueryRequest,
    limits: &QueryLimits,
) -> Result<ArticleQueryResponse, QueryError> {
    if req.page == 0 {
        return Err(QueryError("page numbers are 1-based".to_string()));
    }
    let page_size = if req.page_size == 0 {
        DEFAULT_PAGE_SIZE
    } else {
        req.page_size
    };
    if page_size > limits.max_page_size {
        return Err(QueryError(format!(
            "page size {page_size} exceeds limit {}",
            limits.max_page_size
        )));
    }
    let keyword = req.filter.keyword.as_deref().unwrap_or("").trim();
    if keyword.len() > limits.max_keyword_len {
        return Err(QueryError(format!(
            "keyword exceeds {} bytes",
            limits.max_keyword_len
        )));
    }
    let folded_keyword = fold_for_search(keyword);

    let matches: Vec<&Article> = catalog
        .articles()
        .iter()
        .filter(|a| matches_filter(a, &req.filter, &folded_keyword))
        .collect();

    let total_matches = matches.len();
    let page_count = total_matches.div_ceil(page_size).max(1);
    let start = (req.page - 1).saturating_mul(page_size);
    let rows = matches
        .iter()
        .skip(start)
        .take(page_size)
        .map(|a| ArticleSummary::from_article(a))
        .collect();

    Ok(ArticleQueryResponse {
        rows,
        total_matches,
        page: req.page,
        page_count,
    })
}

/// Detail lookup by identifier.
#[must_use]
pub fn find_article<'a>(catalog: &'a ArticleCatalog, id: &str) -> Option<&'a Article> {
    catalog.articles().iter().find(|a| a.id.as_str() == id)
}

fn matches_filter(article: &Article, filter: &ArticleFilter, folded_keyword: &str) -> bool {
    if !folded_keyword.is_empty() && !haystack(article).contains(folded_keyword) {
        return false;
    }
    if let Some(year) = filter.year {
        if article.year != Some(year) {
            return false;
        }
    }
    if let Some(author) = &filter.author {
        if !article.authors.iter().any(|a| a == author) {
            return false;
        }
    }
    if let Some(journal) = &filter.journal {
        if &article.journal != journal {
            return false;
        }
    }
    if let Some(method) = &filter.method {
        if !article.methods.iter().any(|m| m == method) {
            return false;
        }
    }
    if let Some(dataset) = &filter.dataset {
        if &article.data.source_dataset != dataset {
            return false;
        }
    }
    if filter.historical && !article.research.historical {
        return false;
    }
    if filter.comparative && !article.research.comparative {
        return false;
    }
    if filter.interdisciplinary && !article.research.interdisciplinary {
        return false;
    }
    true
}

// The fixed keyword haystack: title, abstract, journal, authors, methods,
// keywords, and the dataset name.
fn haystack(article: &Article) -> String {
    let mut parts: Vec<&str> = vec![
        &article.title,
        &article.abstract_text,
        &article.journal,
    ];
    parts.extend(article.authors.iter().map(String::as_str));
    parts.extend(article.methods.iter().map(String::as_str));
    parts.extend(article.keywords.iter().map(String::as_str));
    parts.push(&article.data.source_dataset);
    fold_for_search(
        &parts
            .into_iter()
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join(" "),
    )
}
