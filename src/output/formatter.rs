use std::io::IsTerminal;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

use crate::scoring::{ChartSeries, Dimension, Listing, RankedListing};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a weighted score to two decimals -- the presentation precision for
/// ranked output.
pub fn format_score(score: f64) -> String {
    format!("{:.2}", score)
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a listing name to fit available width, accounting for Unicode
fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format ranked listings as a table with columns: Rank, Score, Name, URL.
/// Rank column: 3 chars (fits "99."), right-aligned.
/// Score column is right-aligned, 6 chars wide (fits "99.99").
pub fn format_ranked_table(ranked: &[RankedListing], use_colors: bool) -> String {
    if ranked.is_empty() {
        return "No listings to rank.".to_string();
    }

    let term_width = get_terminal_width();

    let rank_width = 3;
    let score_width = 6;
    let separator = "  ";

    ranked
        .iter()
        .map(|entry| {
            let rank_str = format!("{:>2}.", entry.rank);
            let score_padded = format!("{:>width$}", format_score(entry.score), width = score_width);

            // Leave the rest of the line for the name
            let fixed_width = rank_width + 1 + score_width + separator.len() * 2 + entry.url.len();

            let name = if let Some(width) = term_width {
                if width > fixed_width + 10 {
                    truncate_name(&entry.name, width - fixed_width)
                } else {
                    // Very narrow terminal, show truncated
                    truncate_name(&entry.name, 20)
                }
            } else {
                // No terminal (pipe), don't truncate
                entry.name.clone()
            };

            if use_colors {
                format!(
                    "{} {}{}{}{}{}",
                    rank_str.dimmed(),
                    score_padded.bold(),
                    separator,
                    name,
                    separator,
                    entry.url.underline()
                )
            } else {
                format!(
                    "{} {}{}{}{}{}",
                    rank_str, score_padded, separator, name, separator, entry.url
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a single listing with detailed multi-line output (for verbose mode)
pub fn format_listing_detail(listing: &Listing, use_colors: bool) -> String {
    let mut lines = Vec::with_capacity(Dimension::COUNT + 3);

    if use_colors {
        lines.push(format!("{}", listing.name.bold()));
    } else {
        lines.push(listing.name.clone());
    }

    for dimension in Dimension::ALL {
        let attribute = listing.attribute(dimension);
        lines.push(format!(
            "  {}: {} (normalized {:.2}, weight {})",
            dimension.label(),
            attribute.value(),
            attribute.normalized(),
            attribute.weight()
        ));
    }

    lines.push(format!("  Score: {}", format_score(listing.weighted_score())));
    if use_colors {
        lines.push(format!("  URL: {}", listing.url.underline()));
    } else {
        lines.push(format!("  URL: {}", listing.url));
    }

    lines.join("\n")
}

/// Serialize chart series as JSON for the external radar-chart renderer.
pub fn format_vectors_json(series: &[ChartSeries]) -> Result<String> {
    serde_json::to_string_pretty(series).context("Failed to serialize chart vectors")
}
