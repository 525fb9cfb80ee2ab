use chrono::format::{Item, StrftimeItems};
use core_types::MAX_RATIO_DECIMALS;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use error::ConfigError;
pub use settings::{Calculator, Config, ExportFormat, Language, Logging, Report, TableStyle};

/// Prefix of the environment variables that override file settings,
/// e.g. `RISKCALC__REPORT__CURRENCY=USD`.
pub const ENV_PREFIX: &str = "RISKCALC";

/// Loads the application configuration.
///
/// Sources, later ones winning: built-in defaults, the given file (or an
/// optional `config.toml` in the working directory), then `RISKCALC__*`
/// environment variables. The result is validated before it is returned.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let file = match path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name("config.toml").required(false),
    };

    let builder = config::Config::builder()
        .add_source(file)
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    validate(&config)?;

    tracing::debug!(?config, "Configuration loaded");
    Ok(config)
}

/// Rejects settings the report and calculator cannot work with.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.calculator.ratio_decimals > MAX_RATIO_DECIMALS {
        return Err(ConfigError::ValidationError(format!(
            "calculator.ratio_decimals must be at most {MAX_RATIO_DECIMALS}, got {}",
            config.calculator.ratio_decimals
        )));
    }
    if !(1..=6).contains(&config.report.thousands_group) {
        return Err(ConfigError::ValidationError(format!(
            "report.thousands_group must be between 1 and 6, got {}",
            config.report.thousands_group
        )));
    }
    if config.report.amount_decimals > 10 {
        return Err(ConfigError::ValidationError(format!(
            "report.amount_decimals must be at most 10, got {}",
            config.report.amount_decimals
        )));
    }
    let timestamp_format = &config.report.timestamp_format;
    if timestamp_format.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "report.timestamp_format must not be empty".to_string(),
        ));
    }
    if StrftimeItems::new(timestamp_format).any(|item| matches!(item, Item::Error)) {
        return Err(ConfigError::ValidationError(format!(
            "report.timestamp_format is not a valid strftime format: '{timestamp_format}'"
        )));
    }
    Ok(())
}
