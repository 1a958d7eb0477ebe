//! Movie ranking command.

use std::path::Path;
use std::time::Instant;

use algolab_adapters::ingest::load_movies;
use algolab_common::{MovieRecord, SortAttribute};
use algolab_core::Config;
use algolab_core::sort::quick_sort_movies;
use anyhow::Result;
use serde::Serialize;

use crate::OutputFormat;
use crate::input::Prompter;
use crate::output::{self, Format};

#[derive(Serialize)]
struct MoviesOutput<'a> {
    sorted_by: SortAttribute,
    total: usize,
    elapsed_ms: f64,
    top: &'a [MovieRecord],
}

/// Run the movies command.
pub fn run(
    path: &Path,
    by: Option<&str>,
    config: &Config,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let mut movies = load_movies(path)?;
    tracing::info!(movies = movies.len(), "movies loaded");

    let raw = match by {
        Some(raw) => raw.to_string(),
        None => Prompter::stdio().line("Sort by (rating / year / popularity): ")?,
    };
    let attribute = resolve_attribute(&raw);

    let started = Instant::now();
    quick_sort_movies(&mut movies, attribute);
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
    tracing::info!(%attribute, elapsed_ms, "movies sorted (quicksort)");

    let top = &movies[..config.top_n.min(movies.len())];
    let fmt: Format = format.into();
    match fmt {
        Format::Json => output::print_json(
            &MoviesOutput {
                sorted_by: attribute,
                total: movies.len(),
                elapsed_ms,
                top,
            },
            quiet,
        )?,
        Format::Table => {
            let mut table = output::create_table();
            output::add_header(&mut table, &["#", "Title", "Rating", "Year", "Popularity"]);
            for (i, movie) in top.iter().enumerate() {
                table.add_row(vec![
                    (i + 1).to_string(),
                    movie.name.clone(),
                    format!("{:.1}", movie.rating),
                    movie.year.to_string(),
                    movie.popularity.to_string(),
                ]);
            }
            output::status(&format!("Top {} movies by {attribute}:", top.len()), quiet);
            output::print_table(&table, quiet);
        }
    }

    Ok(())
}

/// Parses a sort key, falling back to rating on anything unrecognized.
fn resolve_attribute(raw: &str) -> SortAttribute {
    raw.parse().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "defaulting to rating");
        SortAttribute::Rating
    })
}
