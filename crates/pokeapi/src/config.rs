/// Public PokeAPI v2 root.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct PokeApiConfig {
    /// API root that `pokemon/` and `pokemon-species/` hang off.
    pub base_url: String,
}

impl Default for PokeApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl PokeApiConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var            | Default                     |
    /// |--------------------|-----------------------------|
    /// | `POKEAPI_BASE_URL` | `https://pokeapi.co/api/v2` |
    pub fn from_env() -> Self {
        let base_url = std::env::var("POKEAPI_BASE_URL")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self { base_url }
    }
}
