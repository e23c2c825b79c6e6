//! JSON-file-backed OMDb metadata lookup.
//!
//! An existing cache file wins unconditionally: once a cache exists the
//! requested title list is ignored and the file is never invalidated.

use std::fs;
use std::path::Path;

use log::info;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};

use crate::config::OMDB_BASE_URL;

/// Turns a display title into the OMDb query token.
fn query_token(title: &str) -> String {
    title.to_lowercase().replace(' ', "+")
}

/// Returns one metadata record per title, in input order.
///
/// Records come from the cache file when it exists, otherwise from one
/// OMDb request per title. Not-found payloads (`"Response": "False"`) are
/// collected like any other record. A single transport error aborts the
/// whole fetch and nothing is cached.
pub fn load_or_fetch(
    cache_path: &Path,
    titles: &[String],
    agent: &ureq::Agent,
    api_key: &str,
) -> Result<Vec<Value>, String> {
    if cache_path.exists() {
        info!("Using cached metadata from {}", cache_path.display());
        return read_cache(cache_path);
    }

    info!("Fetching metadata for {} titles", titles.len());
    let mut records = Vec::with_capacity(titles.len());
    for title in titles {
        let url = format!(
            "{}?apikey={}&t={}",
            OMDB_BASE_URL,
            api_key,
            query_token(title)
        );
        let response = agent
            .get(&url)
            .call()
            .map_err(|err| format!("metadata request failed for '{}': {}", title, err))?;
        let record: Value = response
            .into_json()
            .map_err(|err| format!("metadata response parse failed for '{}': {}", title, err))?;
        records.push(record);
    }
    write_cache(cache_path, &records)?;
    Ok(records)
}

/// Reads the whole cached record array into memory.
pub fn read_cache(path: &Path) -> Result<Vec<Value>, String> {
    let text = fs::read_to_string(path)
        .map_err(|err| format!("failed to read cache {}: {}", path.display(), err))?;
    serde_json::from_str(&text)
        .map_err(|err| format!("failed to parse cache {}: {}", path.display(), err))
}

/// Writes the whole record array at once, pretty-printed with a 4-space
/// indent. Not atomic: a crash mid-write can corrupt the file.
pub fn write_cache(path: &Path, records: &[Value]) -> Result<(), String> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    records
        .serialize(&mut serializer)
        .map_err(|err| format!("failed to serialize metadata cache: {}", err))?;
    fs::write(path, buffer)
        .map_err(|err| format!("failed to write cache {}: {}", path.display(), err))
}
