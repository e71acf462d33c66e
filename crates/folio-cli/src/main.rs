// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use folio_ingest::{hash_file, ingest_catalog, sha256_hex, IngestOptions};
use folio_model::{ArticleCatalog, CatalogManifest, ColumnAliases};
use folio_query::{
    collect_facets, find_article, load_catalog, query_articles, ArticleFilter,
    ArticleQueryRequest, QueryLimits, DEFAULT_PAGE_SIZE,
};
use serde_json::json;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode as ProcessExitCode;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExitCode {
    Success = 0,
    Usage = 2,
    Validation = 3,
    Internal = 10,
}

#[derive(Debug)]
struct CliError {
    code: ExitCode,
    message: String,
}

impl CliError {
    fn usage(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::Usage,
            message: message.into(),
        }
    }

    fn validation(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::Validation,
            message: message.into(),
        }
    }

    fn internal(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::Internal,
            message: message.into(),
        }
    }
}

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Folio article catalog operations CLI")]
struct Cli {
    #[arg(long, global = true, default_value_t = false)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize a source CSV into the catalog artifact and manifest.
    Ingest {
        #[arg(long)]
        csv: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value = "articles.json")]
        catalog_name: String,
        #[arg(long, default_value = "manifest.json")]
        manifest_name: String,
    },
    /// Re-check an emitted catalog against its manifest.
    Validate {
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value = "articles.json")]
        catalog_name: String,
        #[arg(long, default_value = "manifest.json")]
        manifest_name: String,
        /// Also re-verify the source checksum.
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Search the catalog with keyword, facet, and flag filters.
    Search {
        #[arg(long)]
        catalog: PathBuf,
        #[arg(long)]
        keyword: Option<String>,
        #[arg(long)]
        year: Option<u16>,
        #[arg(long)]
        author: Option<String>,
        #[arg(long)]
        journal: Option<String>,
        #[arg(long)]
        method: Option<String>,
        #[arg(long)]
        dataset: Option<String>,
        #[arg(long, default_value_t = false)]
        historical: bool,
        #[arg(long, default_value_t = false)]
        comparative: bool,
        #[arg(long, default_value_t = false)]
        interdisciplinary: bool,
        #[arg(long, default_value_t = 1)]
        page: usize,
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: usize,
    },
    /// Print one record by identifier.
    Show {
        #[arg(long)]
        catalog: PathBuf,
        #[arg(long)]
        id: String,
    },
    /// Enumerate facet values with counts.
    Facets {
        #[arg(long)]
        catalog: PathBuf,
    },
}

fn main() -> ProcessExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ProcessExitCode::from(ExitCode::Success as u8),
        Err(err) => {
            eprintln!("{}", err.message);
            ProcessExitCode::from(err.code as u8)
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Ingest {
            csv,
            out,
            catalog_name,
            manifest_name,
        } => run_ingest(csv, out, catalog_name, manifest_name, cli.json),
        Commands::Validate {
            out,
            catalog_name,
            manifest_name,
            csv,
        } => run_validate(out, &catalog_name, &manifest_name, csv),
        Commands::Search {
            catalog,
            keyword,
            year,
            author,
            journal,
            method,
            dataset,
            historical,
            comparative,
            interdisciplinary,
            page,
            page_size,
        } => run_search(
            catalog,
            ArticleFilter {
                keyword,
                year,
                author,
                journal,
                method,
                dataset,
                historical,
                comparative,
                interdisciplinary,
            },
            page,
            page_size,
            cli.json,
        ),
        Commands::Show { catalog, id } => run_show(catalog, &id),
        Commands::Facets { catalog } => run_facets(catalog, cli.json),
    }
}

fn run_ingest(
    csv: PathBuf,
    out: PathBuf,
    catalog_name: String,
    manifest_name: String,
    machine_json: bool,
) -> Result<(), CliError> {
    let result = ingest_catalog(&IngestOptions {
        source_path: csv,
        output_root: out,
        catalog_name,
        manifest_name,
        aliases: ColumnAliases::default(),
    })
    .map_err(|e| CliError::internal(e.to_string()))?;

    let stats = &result.manifest.stats;
    if machine_json {
        let payload = json!({
            "catalog": result.catalog_path,
            "manifest": result.manifest_path,
            "stats": stats,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).map_err(|e| CliError::internal(e.to_string()))?
        );
    } else {
        println!("ingest catalog: {}", result.catalog_path.display());
        println!("ingest manifest: {}", result.manifest_path.display());
        println!(
            "ingest stats: rows={} articles={} dropped={} suffixed_ids={} positional_ids={}",
            stats.source_rows,
            stats.articles,
            stats.dropped_rows,
            stats.suffixed_ids,
            stats.positional_ids
        );
    }
    Ok(())
}

fn run_validate(
    out: PathBuf,
    catalog_name: &str,
    manifest_name: &str,
    csv: Option<PathBuf>,
) -> Result<(), CliError> {
    let manifest_raw = fs::read_to_string(out.join(manifest_name))
        .map_err(|e| CliError::internal(format!("cannot read manifest: {e}")))?;
    let manifest: CatalogManifest = serde_json::from_str(&manifest_raw)
        .map_err(|e| CliError::validation(format!("cannot parse manifest: {e}")))?;
    manifest
        .validate_strict()
        .map_err(|e| CliError::validation(e.to_string()))?;

    let catalog_bytes = fs::read(out.join(catalog_name))
        .map_err(|e| CliError::internal(format!("cannot read catalog: {e}")))?;
    let actual = sha256_hex(&catalog_bytes);
    if actual != manifest.catalog_sha256 {
        return Err(CliError::validation(format!(
            "catalog checksum mismatch: expected {}, got {}",
            manifest.catalog_sha256, actual
        )));
    }

    let catalog: ArticleCatalog = serde_json::from_slice(&catalog_bytes)
        .map_err(|e| CliError::validation(format!("cannot parse catalog: {e}")))?;
    catalog
        .validate()
        .map_err(|e| CliError::validation(e.to_string()))?;

    if let Some(source) = csv {
        let source_sha = hash_file(&source).map_err(|e| CliError::internal(e.to_string()))?;
        if source_sha != manifest.source_sha256 {
            return Err(CliError::validation(format!(
                "source checksum mismatch: expected {}, got {}",
                manifest.source_sha256, source_sha
            )));
        }
    }

    println!("catalog validation: OK ({} articles)", catalog.len());
    Ok(())
}

fn run_search(
    catalog_path: PathBuf,
    filter: ArticleFilter,
    page: usize,
    page_size: usize,
    machine_json: bool,
) -> Result<(), CliError> {
    let catalog = load_catalog(&catalog_path).map_err(|e| CliError::internal(e.to_string()))?;
    let response = query_articles(
        &catalog,
        &ArticleQueryRequest {
            filter,
            page,
            page_size,
        },
        &QueryLimits::default(),
    )
    .map_err(|e| CliError::usage(e.to_string()))?;

    if machine_json {
        println!(
            "{}",
            serde_json::to_string_pretty(&response)
                .map_err(|e| CliError::internal(e.to_string()))?
        );
        return Ok(());
    }

    for row in &response.rows {
        let year = row
            .year
            .map(|y| y.to_string())
            .unwrap_or_else(|| "n.d.".to_string());
        println!("{} ({year}) [{}]", row.title, row.id);
        if !row.authors.is_empty() {
            println!("    {}", row.authors.join("; "));
        }
    }
    println!(
        "matches={} page={}/{}",
        response.total_matches, response.page, response.page_count
    );
    Ok(())
}

fn run_show(catalog_path: PathBuf, id: &str) -> Result<(), CliError> {
    let catalog = load_catalog(&catalog_path).map_err(|e| CliError::internal(e.to_string()))?;
    let article = find_article(&catalog, id)
        .ok_or_else(|| CliError::validation(format!("article not found: {id}")))?;
    println!(
        "{}",
        serde_json::to_string_pretty(article).map_err(|e| CliError::internal(e.to_string()))?
    );
    Ok(())
}

fn run_facets(catalog_path: PathBuf, machine_json: bool) -> Result<(), CliError> {
    let catalog = load_catalog(&catalog_path).map_err(|e| CliError::internal(e.to_string()))?;
    let facets = collect_facets(&catalog);

    if machine_json {
        println!(
            "{}",
            serde_json::to_string_pretty(&facets).map_err(|e| CliError::internal(e.to_string()))?
        );
        return Ok(());
    }

    println!("years:");
    for (year, count) in &facets.years {
        println!("    {year} ({count})");
    }
    for (label, values) in [
        ("authors", &facets.authors),
        ("journals", &facets.journals),
        ("methods", &facets.methods),
        ("datasets", &facets.datasets),
    ] {
        println!("{label}:");
        for (value, count) in values {
            println!("    {value} ({count})");
        }
    }
    Ok(())
}
