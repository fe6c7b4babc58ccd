//! Non-interactive output of search results and the watched list.

use crate::interactive::domain::watched::{WatchedList, WatchedSummary};
use crate::interactive::ui::components::watched_list::format_average;
use crate::schemas::{SearchResultItem, WatchedMovie};
use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use std::io::Write;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    #[value(name = "jsonl")]
    JsonL,
}

pub fn format_search_result(item: &SearchResultItem, use_color: bool) -> String {
    if use_color {
        format!(
            "{} {} {}",
            item.title.bright_white().bold(),
            format!("({})", item.year).bright_yellow(),
            item.id.dimmed()
        )
    } else {
        format!("{} ({}) {}", item.title, item.year, item.id)
    }
}

pub fn format_watched_movie(movie: &WatchedMovie, use_color: bool) -> String {
    let runtime = movie
        .runtime_minutes
        .map(|m| format!("{m} min"))
        .unwrap_or_else(|| "N/A".to_string());
    let imdb = format_average(movie.imdb_rating, 1);

    if use_color {
        format!(
            "{} {}\n  ⭐ {}  🌟 {}  ⏳ {}",
            movie.title.bright_white().bold(),
            format!("({})", movie.year).bright_yellow(),
            imdb.bright_yellow(),
            movie.user_rating.to_string().bright_green(),
            runtime
        )
    } else {
        format!(
            "{} ({})\n  ⭐ {}  🌟 {}  ⏳ {}",
            movie.title, movie.year, imdb, movie.user_rating, runtime
        )
    }
}

pub fn format_summary(summary: &WatchedSummary) -> String {
    format!(
        "#️⃣ {} movies  ⭐ {}  🌟 {}  ⏳ {} min",
        summary.count,
        format_average(summary.avg_imdb_rating, 2),
        format_average(summary.avg_user_rating, 2),
        format_average(summary.avg_runtime_minutes, 0)
    )
}

pub fn write_search_results<W: Write>(
    out: &mut W,
    query: &str,
    results: &[SearchResultItem],
    format: OutputFormat,
    use_color: bool,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            if results.is_empty() {
                writeln!(out, "No results found.")?;
            } else {
                writeln!(out, "Found {} results:\n", results.len())?;
                for item in results {
                    writeln!(out, "{}", format_search_result(item, use_color))?;
                }
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "query": query,
                "results": results,
                "count": results.len(),
            });
            serde_json::to_writer_pretty(&mut *out, &output)?;
            writeln!(out)?;
        }
        OutputFormat::JsonL => {
            for item in results {
                serde_json::to_writer(&mut *out, item)?;
                writeln!(out)?;
            }
        }
    }
    Ok(())
}

pub fn write_watched<W: Write>(
    out: &mut W,
    list: &WatchedList,
    format: OutputFormat,
    use_color: bool,
) -> Result<()> {
    let summary = list.summary();
    match format {
        OutputFormat::Text => {
            writeln!(out, "Movies you watched")?;
            writeln!(out, "{}\n", format_summary(&summary))?;
            if list.is_empty() {
                writeln!(out, "Rate a movie and add it to your list")?;
            }
            for movie in list.movies() {
                writeln!(out, "{}", format_watched_movie(movie, use_color))?;
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "movies": list.movies(),
                "summary": summary,
            });
            serde_json::to_writer_pretty(&mut *out, &output)?;
            writeln!(out)?;
        }
        OutputFormat::JsonL => {
            for movie in list.movies() {
                serde_json::to_writer(&mut *out, movie)?;
                writeln!(out)?;
            }
            // Summary as the last line
            serde_json::to_writer(&mut *out, &serde_json::json!({ "_summary": summary }))?;
            writeln!(out)?;
        }
    }
    Ok(())
}
