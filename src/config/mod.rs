use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Seconds per lap gained as fuel burns off.
    #[serde(default = "default_fuel_coeff")]
    pub fuel_coeff: f64,
    #[serde(default = "default_format")]
    pub default_format: ExportFormat,
    /// Rows shown by the ranking commands.
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    #[serde(default = "default_color")]
    pub color: bool,
    /// Used when RUST_LOG is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Decimals shown for times and gaps in terminal tables.
    #[serde(default = "default_decimals")]
    pub decimals: usize,
}

fn default_fuel_coeff() -> f64 {
    crate::core::calculator::pace::DEFAULT_FUEL_COEFF
}
fn default_format() -> ExportFormat {
    ExportFormat::Csv
}
fn default_top_n() -> usize {
    10
}
fn default_color() -> bool {
    true
}
fn default_log_level() -> String {
    "warn".to_string()
}
fn default_decimals() -> usize {
    3
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fuel_coeff: default_fuel_coeff(),
            default_format: default_format(),
            top_n: default_top_n(),
            color: default_color(),
            log_level: default_log_level(),
            decimals: default_decimals(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.rlapdelta`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rlapdelta")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rlapdelta.conf")
    }

    /// Load configuration from `path` (or the standard file), defaults if not found
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> AppResult<()> {
        if !self.fuel_coeff.is_finite() || self.fuel_coeff < 0.0 {
            return Err(AppError::Config(format!(
                "fuel_coeff must be a non-negative number, got {}",
                self.fuel_coeff
            )));
        }
        if self.top_n == 0 {
            return Err(AppError::Config("top_n must be at least 1".into()));
        }
        Ok(())
    }

    /// Write the default configuration file, keeping an existing one unless `force`.
    pub fn init(path: Option<&Path>, force: bool) -> AppResult<PathBuf> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if path.exists() && !force {
            return Err(AppError::Config(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(&Config::default())?;
        let mut file = fs::File::create(&path)?;
        file.write_all(yaml.as_bytes())?;

        Ok(path)
    }
}
