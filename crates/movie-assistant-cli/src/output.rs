use std::io::Write;

use movie_assistant_core::state::NO_MATCHES_TEXT;
use movie_assistant_core::{AppOptions, Movie};
use owo_colors::OwoColorize;

/// Overview lines longer than this are cut with an ellipsis.
const OVERVIEW_WIDTH: usize = 160;

/// Whether to use colored output.
#[derive(Debug, Clone, Copy)]
pub struct ColorMode(pub bool);

impl ColorMode {
    pub fn enabled(&self) -> bool {
        self.0
    }
}

/// Print the genre and mood choices.
pub fn print_options(
    w: &mut dyn Write,
    options: &AppOptions,
    color: ColorMode,
) -> std::io::Result<()> {
    print_option_list(w, "Genres", &options.genres, color)?;
    writeln!(w)?;
    print_option_list(w, "Moods", &options.moods, color)?;
    Ok(())
}

fn print_option_list(
    w: &mut dyn Write,
    heading: &str,
    values: &[String],
    color: ColorMode,
) -> std::io::Result<()> {
    if color.enabled() {
        writeln!(w, "{}", heading.bold())?;
    } else {
        writeln!(w, "{}", heading)?;
    }
    if values.is_empty() {
        writeln!(w, "  (none)")?;
    }
    for value in values {
        writeln!(w, "  {}", value)?;
    }
    Ok(())
}

/// Print the ranked recommendations, one block per movie.
pub fn print_recommendations(
    w: &mut dyn Write,
    movies: &[Movie],
    color: ColorMode,
) -> std::io::Result<()> {
    if movies.is_empty() {
        writeln!(w, "{}", NO_MATCHES_TEXT)?;
        return Ok(());
    }

    for (i, movie) in movies.iter().enumerate() {
        let pct = movie.match_percent();
        let year = if movie.year.is_empty() {
            String::new()
        } else {
            format!(" ({})", movie.year)
        };
        let badge = format!("{}% Match", pct);

        if color.enabled() {
            let badge = match pct {
                70.. => badge.green().to_string(),
                40..=69 => badge.yellow().to_string(),
                _ => badge.red().to_string(),
            };
            writeln!(
                w,
                "{:>2}. {}{}  {}",
                i + 1,
                movie.title.bold(),
                year.dimmed(),
                badge
            )?;
        } else {
            writeln!(w, "{:>2}. {}{}  {}", i + 1, movie.title, year, badge)?;
        }

        let mut meta = Vec::new();
        let tags = movie.genre_tags();
        if !tags.is_empty() {
            meta.push(tags.join(", "));
        }
        if movie.runtime > 0 {
            meta.push(format!("{} min", movie.runtime));
        }
        if movie.rating > 0.0 {
            meta.push(format!("{}/10", movie.rating));
        }
        if !meta.is_empty() {
            let meta = meta.join(" | ");
            if color.enabled() {
                writeln!(w, "    {}", meta.cyan())?;
            } else {
                writeln!(w, "    {}", meta)?;
            }
        }

        if !movie.overview.is_empty() {
            writeln!(w, "    {}", shorten(&movie.overview, OVERVIEW_WIDTH))?;
        }
        writeln!(w)?;
    }

    let noun = if movies.len() == 1 { "movie" } else { "movies" };
    if color.enabled() {
        writeln!(w, "{}", format!("{} {} found", movies.len(), noun).dimmed())?;
    } else {
        writeln!(w, "{} {} found", movies.len(), noun)?;
    }
    Ok(())
}

fn shorten(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", cut.trim_end())
}
