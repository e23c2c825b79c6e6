//! Interactive recommendation walk over the classification index.
//!
//! Linear state machine, no backtracking: three category prompts, a
//! numbered listing, one detail pick. Selections are raw free text; a
//! miss at any stage is a terminating error, not a re-prompt.

use std::io::{BufRead, Write};

use crate::config::IMDB_TITLE_URL;
use crate::movie_normalizer::Movie;
use crate::recommendation_index::{RecommendationIndex, GENRES, RATING_BUCKETS, YEAR_BUCKETS};

/// Terminal state of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The chosen leaf held no movies.
    NoMatch,
    /// A recommendation was shown; the preview URL is opened by the caller.
    Shown { title: String, preview_url: String },
}

fn read_failed(err: std::io::Error) -> String {
    format!("console read failed: {}", err)
}

fn write_failed(err: std::io::Error) -> String {
    format!("console write failed: {}", err)
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> Result<String, String> {
    write!(output, "{}", label).map_err(write_failed)?;
    output.flush().map_err(write_failed)?;
    let mut line = String::new();
    input.read_line(&mut line).map_err(read_failed)?;
    Ok(line.trim().to_string())
}

/// Parses a 1-based listing selection against the listing length.
pub fn parse_selection(text: &str, len: usize) -> Result<usize, String> {
    let number: usize = text
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", text.trim()))?;
    if number == 0 || number > len {
        return Err(format!("selection {} is out of range 1-{}", number, len));
    }
    Ok(number - 1)
}

/// Walks the user from the three category prompts to a recommendation.
///
/// `movies` is the full normalized list, used to resolve the picked
/// title's IMDb identifier for the preview URL.
pub fn run_session<R: BufRead, W: Write>(
    index: &RecommendationIndex,
    movies: &[Movie],
    input: &mut R,
    output: &mut W,
) -> Result<SessionOutcome, String> {
    writeln!(output, "Welcome to the movie recommendation system!").map_err(write_failed)?;

    let genre = prompt(input, output, &format!("Choose a genre in {:?}: ", GENRES))?;
    let rating_bucket = prompt(
        input,
        output,
        &format!("Choose an IMDb rating range in {:?}: ", RATING_BUCKETS),
    )?;
    let year_bucket = prompt(
        input,
        output,
        &format!("Choose a year range in {:?}: ", YEAR_BUCKETS),
    )?;

    let leaf = index
        .movies_for(&genre, &rating_bucket, &year_bucket)
        .ok_or_else(|| {
            format!(
                "no category matches genre '{}', rating '{}', year '{}'",
                genre, rating_bucket, year_bucket
            )
        })?;

    writeln!(output, "This is your movie recommendation:").map_err(write_failed)?;
    if leaf.is_empty() {
        writeln!(output, "Sorry, there is no movie that matches your choices.")
            .map_err(write_failed)?;
        return Ok(SessionOutcome::NoMatch);
    }

    writeln!(
        output,
        "There are {} movies that match your choices:",
        leaf.len()
    )
    .map_err(write_failed)?;
    for (position, movie) in leaf.iter().enumerate() {
        writeln!(output, "{}. {}", position + 1, movie.title).map_err(write_failed)?;
    }

    let choice = prompt(
        input,
        output,
        "Which movie do you want to see the details? We will provide you the plot \
         and a website preview of the movie. Please enter the number of the movie: ",
    )?;
    let picked = &leaf[parse_selection(&choice, leaf.len())?];
    writeln!(output, "Here is the plot: {}", picked.plot).map_err(write_failed)?;

    let imdb_id = movies
        .iter()
        .find(|movie| movie.title == picked.title)
        .map(|movie| movie.imdb_id.clone())
        .unwrap_or_default();
    let preview_url = format!("{}{}/", IMDB_TITLE_URL, imdb_id);
    // The URL itself is left to the browser; the console shows the label only.
    writeln!(output, "Here is the website preview: ").map_err(write_failed)?;

    Ok(SessionOutcome::Shown {
        title: picked.title.clone(),
        preview_url,
    })
}
