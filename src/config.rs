//! Persistent configuration model and fixed pipeline constants.

use std::path::Path;

/// Wikipedia page listing every Best Picture winner and nominee.
pub const NOMINEE_PAGE_URL: &str =
    "https://en.wikipedia.org/wiki/Academy_Award_for_Best_Picture";

/// OMDb title-lookup endpoint.
pub const OMDB_BASE_URL: &str = "http://www.omdbapi.com/";

/// Metadata cache file, written in the working directory.
pub const CACHE_FILE: &str = "movie_cache.json";

/// IMDb title page prefix for the browser preview.
pub const IMDB_TITLE_URL: &str = "https://www.imdb.com/title/";

/// Root configuration read from `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Config {
    /// OMDb API credentials.
    #[serde(default)]
    pub omdb: OmdbConfig,
}

/// OMDb credentials; keys are issued per user at omdbapi.com.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct OmdbConfig {
    #[serde(default)]
    pub api_key: String,
}

/// Loads the configuration file, failing when it is missing, malformed,
/// or carries no API key.
pub fn load_config(path: &Path) -> Result<Config, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|err| format!("failed to read config {}: {}", path.display(), err))?;
    let config = toml::from_str::<Config>(&text)
        .map_err(|err| format!("failed to parse config {}: {}", path.display(), err))?;
    if config.omdb.api_key.trim().is_empty() {
        return Err(format!("no OMDb api_key configured in {}", path.display()));
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn test_parse_config_with_api_key() {
        let config = toml::from_str::<Config>("[omdb]\napi_key = \"abc123\"\n")
            .expect("config should parse");
        assert_eq!(config.omdb.api_key, "abc123");
    }

    #[test]
    fn test_parse_empty_config_defaults_to_blank_key() {
        let config = toml::from_str::<Config>("").expect("empty config should parse");
        assert_eq!(config.omdb.api_key, "");
    }
}
