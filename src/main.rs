//! Console movie recommender over the Best Picture nominee list.
//!
//! Pipeline: scrape nominee titles, enrich through OMDb (cached to a
//! local JSON file), normalize into typed movies, classify into the
//! fixed genre/rating/year index, then prompt the user to a pick.

mod config;
mod metadata_cache;
mod movie_normalizer;
mod nominee_scraper;
mod recommendation_index;
mod session;

use std::io;
use std::path::Path;

use log::{error, info, warn};

use crate::config::{load_config, CACHE_FILE, NOMINEE_PAGE_URL};
use crate::recommendation_index::RecommendationIndex;
use crate::session::SessionOutcome;

fn run() -> Result<(), String> {
    let config = load_config(Path::new("config.toml"))?;
    let agent = ureq::Agent::new();

    let titles = nominee_scraper::fetch_nominee_titles(&agent, NOMINEE_PAGE_URL)?;
    let records = metadata_cache::load_or_fetch(
        Path::new(CACHE_FILE),
        &titles,
        &agent,
        &config.omdb.api_key,
    )?;
    let movies = movie_normalizer::normalize_records(&records);
    info!(
        "{} of {} metadata records survived normalization",
        movies.len(),
        records.len()
    );

    let index = RecommendationIndex::build(&movies);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    let outcome = session::run_session(&index, &movies, &mut input, &mut output)?;

    if let SessionOutcome::Shown { title, preview_url } = outcome {
        info!("Opening preview for '{}'", title);
        if let Err(err) = webbrowser::open(&preview_url) {
            warn!("Failed to open preview URL '{}': {}", preview_url, err);
        }
    }
    Ok(())
}

fn main() {
    let mut clog = colog::default_builder();
    clog.filter(None, log::LevelFilter::Info);
    clog.init();

    if let Err(err) = run() {
        error!("{}", err);
        std::process::exit(1);
    }
}
