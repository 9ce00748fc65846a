use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Directory where the two artifacts are written.
    pub save_path: String,
    #[serde(default = "default_export_format")]
    pub export_format: String,
    #[serde(default = "default_board_prefix")]
    pub board_file_prefix: String,
    #[serde(default = "default_updated_prefix")]
    pub updated_file_prefix: String,
}

fn default_export_format() -> String {
    "xlsx".to_string()
}
fn default_board_prefix() -> String {
    "Trello_Formatado".to_string()
}
fn default_updated_prefix() -> String {
    "Faltas_Atualizadas".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            save_path: ".".to_string(),
            export_format: default_export_format(),
            board_file_prefix: default_board_prefix(),
            updated_file_prefix: default_updated_prefix(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("pontoboard")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".pontoboard")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("pontoboard.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)
        } else {
            Ok(Self::default())
        }
    }

    /// Persist the configuration, creating the directory when needed
    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir()).map_err(|_| AppError::ConfigSave)?;

        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(Self::config_file()).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes()).map_err(|_| AppError::ConfigSave)?;

        Ok(())
    }

    /// Create the config directory and file when missing; returns the file path
    pub fn init_all() -> AppResult<PathBuf> {
        let path = Self::config_file();
        if !path.exists() {
            Config::default().save()?;
        }
        Ok(path)
    }

    /// Report missing or invalid fields (`config --check`).
    pub fn check(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.save_path.trim().is_empty() {
            problems.push("save_path".to_string());
        }
        if ExportFormat::from_name(&self.export_format).is_err() {
            problems.push(format!("export_format ('{}')", self.export_format));
        }
        if self.board_file_prefix.trim().is_empty() {
            problems.push("board_file_prefix".to_string());
        }
        if self.updated_file_prefix.trim().is_empty() {
            problems.push("updated_file_prefix".to_string());
        }

        problems
    }
}
