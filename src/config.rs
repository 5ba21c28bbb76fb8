use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    pub auth: AuthSettings,
    #[serde(default)]
    pub providers: ProviderSettings,
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8086 }

/// Service-level authentication
///
/// Both fields are required: the service refuses to start without its own
/// bearer token and identifying number.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    pub token: String,
    pub my_number: String,
}

/// Credentials and endpoints for the external content providers
///
/// Every credential is optional. A missing credential degrades only that
/// provider: its result list comes back empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderSettings {
    #[serde(default)]
    pub spotify: SpotifySettings,
    #[serde(default)]
    pub youtube: YoutubeSettings,
    #[serde(default)]
    pub books: BooksSettings,
    #[serde(default)]
    pub omdb: OmdbSettings,
    #[serde(default)]
    pub google_maps: GoogleMapsSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpotifySettings {
    #[serde(default = "default_spotify_accounts_url")]
    pub accounts_url: String,
    #[serde(default = "default_spotify_api_url")]
    pub api_url: String,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
}

impl Default for SpotifySettings {
    fn default() -> Self {
        Self {
            accounts_url: default_spotify_accounts_url(),
            api_url: default_spotify_api_url(),
            client_id: None,
            client_secret: None,
        }
    }
}

fn default_spotify_accounts_url() -> String { "https://accounts.spotify.com".to_string() }
fn default_spotify_api_url() -> String { "https://api.spotify.com".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct YoutubeSettings {
    #[serde(default = "default_googleapis_url")]
    pub api_url: String,
    pub api_key: Option<String>,
}

impl Default for YoutubeSettings {
    fn default() -> Self {
        Self {
            api_url: default_googleapis_url(),
            api_key: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BooksSettings {
    #[serde(default = "default_googleapis_url")]
    pub api_url: String,
}

impl Default for BooksSettings {
    fn default() -> Self {
        Self { api_url: default_googleapis_url() }
    }
}

fn default_googleapis_url() -> String { "https://www.googleapis.com".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct OmdbSettings {
    #[serde(default = "default_omdb_url")]
    pub api_url: String,
    pub api_key: Option<String>,
}

impl Default for OmdbSettings {
    fn default() -> Self {
        Self {
            api_url: default_omdb_url(),
            api_key: None,
        }
    }
}

fn default_omdb_url() -> String { "https://www.omdbapi.com".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct GoogleMapsSettings {
    #[serde(default = "default_google_maps_url")]
    pub api_url: String,
    pub api_key: Option<String>,
}

impl Default for GoogleMapsSettings {
    fn default() -> Self {
        Self {
            api_url: default_google_maps_url(),
            api_key: None,
        }
    }
}

fn default_google_maps_url() -> String { "https://maps.googleapis.com".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    #[serde(default = "default_result_limit")]
    pub result_limit: usize,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_place_radius_m")]
    pub place_radius_m: u32,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            result_limit: default_result_limit(),
            request_timeout_secs: default_request_timeout_secs(),
            place_radius_m: default_place_radius_m(),
        }
    }
}

fn default_result_limit() -> usize { 5 }
fn default_request_timeout_secs() -> u64 { 20 }
fn default_place_radius_m() -> u32 { 5000 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with VIBE_)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with VIBE_)
            // e.g., VIBE_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("VIBE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        // Apply the well-known unprefixed variables (AUTH_TOKEN, provider keys)
        settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("VIBE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Overlay the conventional environment variable names onto the config tree
///
/// Each provider credential keeps the name its upstream documentation uses,
/// so a plain .env file works without VIBE__ prefixes.
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    const DIRECT_OVERRIDES: &[(&str, &str)] = &[
        ("auth.token", "AUTH_TOKEN"),
        ("auth.my_number", "MY_NUMBER"),
        ("providers.spotify.client_id", "SPOTIFY_CLIENT_ID"),
        ("providers.spotify.client_secret", "SPOTIFY_CLIENT_SECRET"),
        ("providers.youtube.api_key", "YOUTUBE_API_KEY"),
        ("providers.omdb.api_key", "OMDB_API_KEY"),
        ("providers.google_maps.api_key", "GOOGLE_MAPS_API_KEY"),
    ];

    let mut builder = Config::builder().add_source(settings);

    for (key, var) in DIRECT_OVERRIDES {
        if let Ok(value) = env::var(var) {
            builder = builder.set_override(*key, value)?;
        }
    }

    builder.build()
}
