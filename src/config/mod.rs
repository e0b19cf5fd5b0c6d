use crate::core::calculator::compliance::CompliancePolicy;
use crate::core::calculator::pattern::PatternThresholds;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod migrate;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_max_daily_hours")]
    pub max_daily_hours: f64,
    #[serde(default = "default_long_shift_hours")]
    pub long_shift_hours: f64,
    #[serde(default = "default_min_break_minutes")]
    pub min_break_minutes: u32,
    #[serde(default = "default_regular_std_dev")]
    pub regular_std_dev: f64,
    #[serde(default = "default_moderate_std_dev")]
    pub moderate_std_dev: f64,
    #[serde(default = "default_expiry_warning_days")]
    pub expiry_warning_days: i64,
    #[serde(default = "default_annual_vacation_days")]
    pub annual_vacation_days: f64,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_max_daily_hours() -> f64 {
    10.0
}
fn default_long_shift_hours() -> f64 {
    6.0
}
fn default_min_break_minutes() -> u32 {
    30
}
fn default_regular_std_dev() -> f64 {
    1.0
}
fn default_moderate_std_dev() -> f64 {
    2.0
}
fn default_expiry_warning_days() -> i64 {
    30
}
fn default_annual_vacation_days() -> f64 {
    25.0
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file())
    }
}

impl Config {
    fn with_database(db_path: PathBuf) -> Self {
        Self {
            database: db_path.to_string_lossy().to_string(),
            max_daily_hours: default_max_daily_hours(),
            long_shift_hours: default_long_shift_hours(),
            min_break_minutes: default_min_break_minutes(),
            regular_std_dev: default_regular_std_dev(),
            moderate_std_dev: default_moderate_std_dev(),
            expiry_warning_days: default_expiry_warning_days(),
            annual_vacation_days: default_annual_vacation_days(),
            separator_char: default_separator_char(),
        }
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("staffmetrics")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".staffmetrics")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("staffmetrics.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("staffmetrics.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        Ok(serde_yaml::from_str(&content)?)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Initialize configuration directory, config file and empty DB file.
    /// Returns the database path that was configured.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        // DB name: user provided or default
        let db_path = match custom_db {
            Some(name) => {
                let p = Path::new(name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => Self::database_file(),
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            Self::with_database(db_path.clone()).save_to(&Self::config_file())?;
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        Ok(db_path)
    }

    pub fn compliance_policy(&self) -> CompliancePolicy {
        CompliancePolicy {
            max_daily_hours: self.max_daily_hours,
            long_shift_hours: self.long_shift_hours,
            min_break_minutes: self.min_break_minutes,
        }
    }

    pub fn pattern_thresholds(&self) -> PatternThresholds {
        PatternThresholds {
            regular_below: self.regular_std_dev,
            moderate_below: self.moderate_std_dev,
        }
    }

    /// First char of `separator_char`, `-` when empty.
    pub fn separator(&self) -> char {
        self.separator_char.chars().next().unwrap_or('-')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_take_defaults() {
        let cfg: Config = serde_yaml::from_str("database: /tmp/x.sqlite\nmax_daily_hours: 9.5\n").unwrap();
        assert_eq!(cfg.max_daily_hours, 9.5);
        assert_eq!(cfg.min_break_minutes, 30);
        assert_eq!(cfg.compliance_policy().max_daily_hours, 9.5);
        assert_eq!(cfg.pattern_thresholds(), PatternThresholds::default());
    }

    #[test]
    fn database_is_required() {
        assert!(serde_yaml::from_str::<Config>("max_daily_hours: 8\n").is_err());
    }

    #[test]
    fn load_from_missing_file_gives_defaults() {
        let p = env::temp_dir().join("staffmetrics_no_such_config.conf");
        fs::remove_file(&p).ok();
        let cfg = Config::load_from(&p).unwrap();
        assert_eq!(cfg.expiry_warning_days, 30);
    }

    #[test]
    fn save_and_reload() {
        let p = env::temp_dir().join("staffmetrics_roundtrip.conf");
        let mut cfg = Config::with_database(PathBuf::from("/tmp/rt.sqlite"));
        cfg.annual_vacation_days = 28.0;
        cfg.save_to(&p).unwrap();
        assert_eq!(Config::load_from(&p).unwrap(), cfg);
        fs::remove_file(&p).ok();
    }
}
