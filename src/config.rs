use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Settings for the lookup client and the view controller
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FinderConfig {
    /// API root; `search.php` is appended to it
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// User agent sent with each lookup
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Canned queries offered on the welcome view
    #[serde(default = "default_suggestions")]
    pub suggestions: Vec<String>,
    /// Characters of instructions shown on a result card
    #[serde(default = "default_preview_length")]
    pub preview_length: usize,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: default_timeout(),
            user_agent: default_user_agent(),
            suggestions: default_suggestions(),
            preview_length: default_preview_length(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://www.themealdb.com/api/json/v1/1".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("meal-finder/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_suggestions() -> Vec<String> {
    vec![
        "Chicken".to_string(),
        "Pasta".to_string(),
        "Beef".to_string(),
        "Dessert".to_string(),
    ]
}

fn default_preview_length() -> usize {
    120
}

impl FinderConfig {
    /// Load configuration from file and environment variables
    ///
    /// See [`load_config`] for the lookup order.
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. Environment variables with MEAL_FINDER__ prefix
/// 2. config.toml file in current directory
/// 3. Default values
///
/// Environment variable format: MEAL_FINDER__BASE_URL, and a comma separated
/// list for MEAL_FINDER__SUGGESTIONS
pub fn load_config() -> Result<FinderConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // Use double underscore for nested keys: MEAL_FINDER__BASE_URL
        .add_source(
            Environment::with_prefix("MEAL_FINDER")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("suggestions"),
        )
        .build()?;

    settings.try_deserialize()
}
