// SPDX-License-Identifier: Apache-2.0

use folio_model::{
    Article, ArticleCatalog, ArticleId, DataProvenance, LegalSources, Research,
};
use folio_query::{
    collect_facets, find_article, query_articles, ArticleFilter, ArticleQueryRequest, QueryLimits,
};

fn article(id: &str, title: &str) -> Article {
    Article {
        id: ArticleId::parse(id).expect("id"),
        title: title.to_string(),
        authors: Vec::new(),
        journal: String::new(),
        citation: String::new(),
        year: None,
        url: String::new(),
        doi: String::new(),
        abstract_text: String::new(),
        conclusion: String::new(),
        keywords: Vec::new(),
        methods: Vec::new(),
        sub_methods: Vec::new(),
        theories: Vec::new(),
        research: Research::default(),
        legal_sources: LegalSources::default(),
        data: DataProvenance::default(),
        notes: String::new(),
        license: String::new(),
    }
}

fn fixture_catalog() -> ArticleCatalog {
    let mut rule = article("rule-of-law-2021", "The Rule of Law");
    rule.authors = vec!["Jane Doe".to_string(), "John Smith".to_string()];
    rule.journal = "J. Pol.".to_string();
    rule.year = Some(2021);
    rule.methods = vec!["Doctrinal analysis".to_string()];
    rule.research.historical = true;

    let mut courts = article("courts-and-policy-2019", "Courts and Policy");
    courts.authors = vec!["Ada Lee".to_string()];
    courts.journal = "Asia L. J.".to_string();
    courts.year = Some(2019);
    courts.keywords = vec!["judicial politics".to_string()];
    courts.data.source_dataset = "CNKI".to_string();
    courts.research.comparative = true;

    // Absent everything except the minimum; consumers must tolerate it.
    let mut sparse = article("item-3", "Sparse Record");
    sparse.url = "https://example.org/sparse".to_string();

    ArticleCatalog::new(vec![rule, courts, sparse])
}

fn request(filter: ArticleFilter) -> ArticleQueryRequest {
    ArticleQueryRequest {
        filter,
        ..ArticleQueryRequest::default()
    }
}

#[test]
fn keyword_match_is_fold_insensitive_and_spans_fields() {
    let catalog = fixture_catalog();
    let limits = QueryLimits::default();

    let by_title = query_articles(
        &catalog,
        &request(ArticleFilter {
            keyword: Some("RULE of".to_string()),
            ..ArticleFilter::default()
        }),
        &limits,
    )
    .expect("query");
    assert_eq!(by_title.total_matches, 1);
    assert_eq!(by_title.rows[0].id, "rule-of-law-2021");

    let by_keyword_field = query_articles(
        &catalog,
        &request(ArticleFilter {
            keyword: Some("judicial".to_string()),
            ..ArticleFilter::default()
        }),
        &limits,
    )
    .expect("query");
    assert_eq!(by_keyword_field.total_matches, 1);
    assert_eq!(by_keyword_field.rows[0].id, "courts-and-policy-2019");

    let blank = query_articles(&catalog, &request(ArticleFilter::default()), &limits)
        .expect("query");
    assert_eq!(blank.total_matches, 3);
}

#[test]
fn facet_filters_match_exactly() {
    let catalog = fixture_catalog();
    let limits = QueryLimits::default();

    let by_year = query_articles(
        &catalog,
        &request(ArticleFilter {
            year: Some(2019),
            ..ArticleFilter::default()
        }),
        &limits,
    )
    .expect("query");
    assert_eq!(by_year.total_matches, 1);
    assert_eq!(by_year.rows[0].id, "courts-and-policy-2019");

    let by_author = query_articles(
        &catalog,
        &request(ArticleFilter {
            author: Some("Jane Doe".to_string()),
            ..ArticleFilter::default()
        }),
        &limits,
    )
    .expect("query");
    assert_eq!(by_author.total_matches, 1);

    // Substrings of a facet value must not match.
    let partial_author = query_articles(
        &catalog,
        &request(ArticleFilter {
            author: Some("Jane".to_string()),
            ..ArticleFilter::default()
        }),
        &limits,
    )
    .expect("query");
    assert_eq!(partial_author.total_matches, 0);

    let by_dataset = query_articles(
        &catalog,
        &request(ArticleFilter {
            dataset: Some("CNKI".to_string()),
            ..ArticleFilter::default()
        }),
        &limits,
    )
    .expect("query");
    assert_eq!(by_dataset.total_matches, 1);
}

#[test]
fn flag_filters_only_constrain_when_enabled() {
    let catalog = fixture_catalog();
    let limits = QueryLimits::default();

    let historical = query_articles(
        &catalog,
        &request(ArticleFilter {
            historical: true,
            ..ArticleFilter::default()
        }),
        &limits,
    )
    .expect("query");
    assert_eq!(historical.total_matches, 1);
    assert_eq!(historical.rows[0].id, "rule-of-law-2021");

    let both = query_articles(
        &catalog,
        &request(ArticleFilter {
            historical: true,
            comparative: true,
            ..ArticleFilter::default()
        }),
        &limits,
    )
    .expect("query");
    assert_eq!(both.total_matches, 0);
}

#[test]
fn pagination_reports_totals_and_tolerates_out_of_range_pages() {
    let catalog = fixture_catalog();
    let limits = QueryLimits::default();

    let page_one = query_articles(
        &catalog,
        &ArticleQueryRequest {
            filter: ArticleFilter::default(),
            page: 1,
            page_size: 2,
        },
        &limits,
    )
    .expect("query");
    assert_eq!(page_one.rows.len(), 2);
    assert_eq!(page_one.total_matches, 3);
    assert_eq!(page_one.page_count, 2);

    let page_two = query_articles(
        &catalog,
        &ArticleQueryRequest {
            filter: ArticleFilter::default(),
            page: 2,
            page_size: 2,
        },
        &limits,
    )
    .expect("query");
    assert_eq!(page_two.rows.len(), 1);

    let beyond = query_articles(
        &catalog,
        &ArticleQueryRequest {
            filter: ArticleFilter::default(),
            page: 9,
            page_size: 2,
        },
        &limits,
    )
    .expect("query");
    assert!(beyond.rows.is_empty());
    assert_eq!(beyond.total_matches, 3);

    let zero_page = query_articles(
        &catalog,
        &ArticleQueryRequest {
            filter: ArticleFilter::default(),
            page: 0,
            page_size: 2,
        },
        &limits,
    );
    assert!(zero_page.is_err());

    let oversized = query_articles(
        &catalog,
        &ArticleQueryRequest {
            filter: ArticleFilter::default(),
            page: 1,
            page_size: 1000,
        },
        &limits,
    );
    assert!(oversized.is_err());
}

#[test]
fn detail_lookup_finds_by_id() {
    let catalog = fixture_catalog();
    let found = find_article(&catalog, "item-3").expect("present");
    assert_eq!(found.title, "Sparse Record");
    assert!(find_article(&catalog, "missing-id").is_none());
}

#[test]
fn facets_enumerate_sorted_values_with_counts() {
    let catalog = fixture_catalog();
    let facets = collect_facets(&catalog);

    assert_eq!(facets.years, vec![(2021, 1), (2019, 1)]);
    assert_eq!(
        facets.authors,
        vec![
            ("Ada Lee".to_string(), 1),
            ("Jane Doe".to_string(), 1),
            ("John Smith".to_string(), 1),
        ]
    );
    assert_eq!(
        facets.journals,
        vec![("Asia L. J.".to_string(), 1), ("J. Pol.".to_string(), 1)]
    );
    assert_eq!(facets.datasets, vec![("CNKI".to_string(), 1)]);
}
