//! Total per-field sanitizers turning raw OMDb records into typed movies.
//!
//! Every sanitizer is a pure function of one raw field: it never fails,
//! substitutes a typed default on any parse error, and passes its own
//! output shape through unchanged, so re-applying one is a no-op.

use serde_json::Value;

/// Fully normalized movie; every field always holds a value.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub title: String,
    pub year: i32,
    pub genres: Vec<String>,
    pub rating: f64,
    pub box_office: i64,
    pub plot: String,
    pub imdb_id: String,
}

/// Splits a comma-joined genre field into a list; an already-split array
/// passes through; anything else becomes the empty list.
pub fn normalize_genres(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::String(joined)) => joined.split(", ").map(str::to_string).collect(),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

/// Parses the release year; anything unparsable becomes 0.
pub fn normalize_year(value: Option<&Value>) -> i32 {
    match value {
        Some(Value::String(text)) => text.trim().parse().unwrap_or(0),
        Some(Value::Number(number)) => number
            .as_i64()
            .and_then(|year| i32::try_from(year).ok())
            .unwrap_or(0),
        _ => 0,
    }
}

/// Parses the IMDb rating; `"N/A"`, missing, or junk becomes 0, the
/// sentinel that keeps a movie out of every rating bucket.
pub fn normalize_rating(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::String(text)) => text.trim().parse().unwrap_or(0.0),
        Some(Value::Number(number)) => number.as_f64().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Parses a dollar-formatted box office figure (`"$123,456,789"`) into a
/// whole-dollar amount; anything unparsable becomes 0.
pub fn normalize_box_office(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::String(text)) => text.replace(['$', ','], "").trim().parse().unwrap_or(0),
        Some(Value::Number(number)) => number.as_i64().unwrap_or(0),
        _ => 0,
    }
}

/// Coerces a free-text field (title, plot, identifier) to a string;
/// missing or null becomes empty, other scalars are stringified.
pub fn normalize_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(text)) => text.clone(),
        None | Some(Value::Null) => String::new(),
        Some(other) => other.to_string(),
    }
}

fn normalize_record(record: &Value) -> Movie {
    Movie {
        title: normalize_text(record.get("Title")),
        year: normalize_year(record.get("Year")),
        genres: normalize_genres(record.get("Genre")),
        rating: normalize_rating(record.get("imdbRating")),
        box_office: normalize_box_office(record.get("BoxOffice")),
        plot: normalize_text(record.get("Plot")),
        imdb_id: normalize_text(record.get("imdbID")),
    }
}

/// Normalizes every record in order, then drops the ones whose title came
/// out empty. OMDb not-found payloads carry no `Title` key, so those are
/// exactly the unresolved lookups.
pub fn normalize_records(records: &[Value]) -> Vec<Movie> {
    records
        .iter()
        .map(normalize_record)
        .filter(|movie| !movie.title.is_empty())
        .collect()
}
