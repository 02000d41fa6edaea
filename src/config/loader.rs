use super::types::Config;
use crate::billing::{CatalogError, RateCatalog};
use crate::utils::debug::debug_println;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable pointing at an alternative config file
pub const CONFIG_PATH_ENV: &str = "CLOUDCALC_CONFIG";
/// Environment variable overriding the currency symbol
pub const CURRENCY_ENV: &str = "CLOUDCALC_CURRENCY";

/// Error types for loading and validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to access configuration file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Configuration file is corrupted: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Invalid resource catalog: {0}")]
    Catalog(#[from] CatalogError),
    #[error("Currency symbol must not be empty")]
    EmptyCurrency,
}

pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Resolve the config file: explicit path, then env, then home default
    pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
        if let Some(path) = explicit {
            return path.to_path_buf();
        }
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            if !path.trim().is_empty() {
                return PathBuf::from(path);
            }
        }
        Self::default_path()
    }

    /// Get the default config file path (~/.cloudcalc/config.toml)
    pub fn default_path() -> PathBuf {
        if let Some(home) = dirs::home_dir() {
            home.join(".cloudcalc").join("config.toml")
        } else {
            PathBuf::from(".cloudcalc/config.toml")
        }
    }
}

impl Config {
    /// Load configuration from `path` or the default location
    ///
    /// A missing file yields the builtin defaults. The currency env override
    /// is applied on top in both cases.
    pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
        let config_path = ConfigLoader::resolve_path(path);

        let mut config = if config_path.exists() {
            debug_println!("Loading config from {}", config_path.display());
            ConfigLoader::load_from_path(&config_path)?
        } else {
            debug_println!(
                "No config at {}, using builtin rates",
                config_path.display()
            );
            Config::default()
        };

        config.apply_currency_override(std::env::var(CURRENCY_ENV).ok());
        Ok(config)
    }

    /// Replace the currency symbol when a non-empty override is given
    pub fn apply_currency_override(&mut self, currency: Option<String>) {
        if let Some(symbol) = currency {
            if !symbol.trim().is_empty() {
                self.currency = symbol;
            }
        }
    }

    /// Save configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Create the config file with defaults unless one already exists
    ///
    /// Returns the path and whether a file was written.
    pub fn init(path: Option<&Path>) -> Result<(PathBuf, bool), ConfigError> {
        let config_path = ConfigLoader::resolve_path(path);
        if config_path.exists() {
            return Ok((config_path, false));
        }

        Config::default().save_to(&config_path)?;
        Ok((config_path, true))
    }

    /// Validate configuration
    pub fn check(&self) -> Result<(), ConfigError> {
        if self.currency.trim().is_empty() {
            return Err(ConfigError::EmptyCurrency);
        }
        self.catalog()?;
        Ok(())
    }

    /// Build the rate catalog described by this configuration
    pub fn catalog(&self) -> Result<RateCatalog, CatalogError> {
        RateCatalog::new(self.resources.clone())
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_CURRENCY;
    use rust_decimal_macros::dec;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("cloudcalc-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let path = temp_path("missing/config.toml");
        let config = Config::load(Some(&path)).unwrap();

        assert_eq!(config.resources, Config::default().resources);
    }

    #[test]
    fn test_save_and_load() {
        let path = temp_path("roundtrip/config.toml");
        let mut config = Config::default();
        config.currency = "$".to_string();
        config.save_to(&path).unwrap();

        let loaded = ConfigLoader::load_from_path(&path).unwrap();
        assert_eq!(loaded, config);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_synthetic_rates() {
        let path = temp_path("synthetic/config.toml");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(
            &path,
            r#"
currency = "€"

[[resources]]
id = "gpu"
name = "GPU Node"
rate = 12.5
unit = "hours"
description = "Accelerated instance"

[[resources]]
id = "egress"
name = "Egress"
rate = "0.09"
unit = "GB"
description = "Outbound traffic"
"#,
        )
        .unwrap();

        let config = ConfigLoader::load_from_path(&path).unwrap();
        assert!(config.check().is_ok());

        let catalog = config.catalog().unwrap();
        assert_eq!(catalog.ids(), vec!["gpu", "egress"]);
        assert_eq!(catalog.line_item("gpu", dec!(2)).unwrap().cost, dec!(25.00));
        assert_eq!(catalog.get("egress").unwrap().unit_price, dec!(0.09));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_partial_file() {
        let path = temp_path("partial/config.toml");
        fs::create_dir_all(path.parent().unwrap()).unwrap();

        fs::write(&path, "currency = \"$\"\n").unwrap();
        let config = ConfigLoader::load_from_path(&path).unwrap();
        assert_eq!(config.currency, "$");
        assert_eq!(config.resources, Config::default().resources);
        assert!(config.check().is_ok());

        fs::write(
            &path,
            r#"
[[resources]]
id = "gpu"
name = "GPU Node"
rate = 12.5
unit = "hours"
description = "Accelerated instance"
"#,
        )
        .unwrap();
        let config = ConfigLoader::load_from_path(&path).unwrap();
        assert_eq!(config.currency, DEFAULT_CURRENCY);
        assert_eq!(config.catalog().unwrap().ids(), vec!["gpu"]);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_corrupted_file() {
        let path = temp_path("corrupted/config.toml");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "currency = [").unwrap();

        assert!(matches!(
            ConfigLoader::load_from_path(&path),
            Err(ConfigError::Parse(_))
        ));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_init_does_not_overwrite() {
        let path = temp_path("init/config.toml");
        let _ = fs::remove_file(&path);

        let (written_path, created) = Config::init(Some(&path)).unwrap();
        assert_eq!(written_path, path);
        assert!(created);

        let (_, created_again) = Config::init(Some(&path)).unwrap();
        assert!(!created_again);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_check_rejects_bad_config() {
        let mut config = Config::default();
        config.currency = " ".to_string();
        assert!(matches!(config.check(), Err(ConfigError::EmptyCurrency)));

        let mut config = Config::default();
        config.resources.push(config.resources[0].clone());
        assert!(matches!(
            config.check(),
            Err(ConfigError::Catalog(CatalogError::DuplicateId(_)))
        ));

        let mut config = Config::default();
        config.resources.clear();
        assert!(matches!(
            config.check(),
            Err(ConfigError::Catalog(CatalogError::Empty))
        ));
    }

    #[test]
    fn test_currency_override() {
        let mut config = Config::default();

        config.apply_currency_override(Some(String::new()));
        assert_eq!(config.currency, "₹");

        config.apply_currency_override(None);
        assert_eq!(config.currency, "₹");

        config.apply_currency_override(Some("$".to_string()));
        assert_eq!(config.currency, "$");
    }
}
