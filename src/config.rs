use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Default presentation mode: "home" or "restaurant".
    #[serde(default = "default_mode")]
    pub mode: String,
    /// Weekly grocery budget; 0 disables the budget summary.
    #[serde(default)]
    pub weekly_budget: f64,
    /// Whether the runtime offers speech-to-text capture.
    #[serde(default = "default_voice_supported")]
    pub voice_supported: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            weekly_budget: 0.0,
            voice_supported: default_voice_supported(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_mode() -> String {
    "home".to_string()
}

fn default_voice_supported() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load from an optional TOML file with `FOODWISE_`-prefixed
    /// environment overrides (e.g. `FOODWISE_APP__MODE=restaurant`).
    pub fn load(path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = match path {
            Some(path) => builder.add_source(File::with_name(&path)),
            None => builder.add_source(File::with_name("foodwise").required(false)),
        };

        builder = builder.add_source(Environment::with_prefix("FOODWISE").separator("__"));

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if !matches!(self.app.mode.as_str(), "home" | "restaurant") {
            return Err(format!(
                "unknown mode '{}', expected 'home' or 'restaurant'",
                self.app.mode
            ));
        }
        if self.app.weekly_budget < 0.0 {
            return Err("weekly_budget must not be negative".to_string());
        }
        Ok(())
    }
}
