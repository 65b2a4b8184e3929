use crate::errors::AppResult;
use crate::models::OvertimeMultiplier;
use crate::utils::path::{expand_tilde, is_absolute, resolve_in};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const SALARY_FILE: &str = "salary_data.json";
pub const ENTRIES_FILE: &str = "overtime_data.json";
pub const LOG_FILE: &str = "rovertime.log";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub data_dir: String,
    #[serde(default = "default_salary_file")]
    pub salary_file: String,
    #[serde(default = "default_entries_file")]
    pub entries_file: String,
    #[serde(default = "default_log_file")]
    pub log_file: String,
    #[serde(default = "default_report_dir")]
    pub report_dir: String,
    #[serde(default = "default_multiplier")]
    pub default_multiplier: String,
}

fn default_salary_file() -> String {
    SALARY_FILE.to_string()
}
fn default_entries_file() -> String {
    ENTRIES_FILE.to_string()
}
fn default_log_file() -> String {
    LOG_FILE.to_string()
}
fn default_report_dir() -> String {
    Config::config_dir()
        .join("reports")
        .to_string_lossy()
        .to_string()
}
fn default_multiplier() -> String {
    OvertimeMultiplier::X1.label().to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self::with_data_dir(&Self::config_dir().to_string_lossy())
    }
}

impl Config {
    /// Default configuration rooted at `data_dir`.
    pub fn with_data_dir(data_dir: &str) -> Self {
        Self {
            data_dir: data_dir.to_string(),
            salary_file: default_salary_file(),
            entries_file: default_entries_file(),
            log_file: default_log_file(),
            report_dir: default_report_dir(),
            default_multiplier: default_multiplier(),
        }
    }

    /// Return the standard configuration directory (~/.rovertime)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rovertime")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rovertime.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            Ok(serde_yaml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Point all data files at another directory (used by `--data-dir`).
    /// Absolute file names in the config are replaced by their bare names.
    pub fn override_data_dir(&mut self, dir: &str) {
        self.data_dir = dir.to_string();
        for f in [
            &mut self.salary_file,
            &mut self.entries_file,
            &mut self.log_file,
        ] {
            if !is_absolute(f) {
                continue;
            }
            let name = Path::new(f.as_str())
                .file_name()
                .map(|n| n.to_string_lossy().to_string());
            if let Some(name) = name {
                *f = name;
            }
        }
    }

    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_dir)
    }

    pub fn salary_path(&self) -> PathBuf {
        resolve_in(&self.data_path(), &self.salary_file)
    }

    pub fn entries_path(&self) -> PathBuf {
        resolve_in(&self.data_path(), &self.entries_file)
    }

    pub fn log_path(&self) -> PathBuf {
        resolve_in(&self.data_path(), &self.log_file)
    }

    pub fn report_path(&self) -> PathBuf {
        resolve_in(&self.data_path(), &self.report_dir)
    }

    /// Multiplier used when the CLI does not pass `--multiplier`.
    pub fn multiplier(&self) -> AppResult<OvertimeMultiplier> {
        OvertimeMultiplier::from_code(&self.default_multiplier)
    }

    /// Write the configuration file and make sure the data directory exists.
    pub fn init_all(&self, is_test: bool) -> AppResult<()> {
        fs::create_dir_all(self.data_path())?;

        if !is_test {
            fs::create_dir_all(Self::config_dir())?;
            let yaml = serde_yaml::to_string(self)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(())
    }
}
