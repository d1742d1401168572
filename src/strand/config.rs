use crate::error::{Result, StrandError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Default rendering for record-returning commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Table,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Configuration for strand, stored in `config.json` next to the records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StrandConfig {
    /// Default output rendering ("table" or "json")
    #[serde(default = "default_output")]
    pub output: OutputFormat,
}

fn default_output() -> OutputFormat {
    OutputFormat::Table
}

impl Default for StrandConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
        }
    }
}

impl StrandConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: StrandConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "output" => Ok(self.output.to_string()),
            other => Err(StrandError::Config(format!("unknown config key {other:?}"))),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "output" => {
                self.output = match value {
                    "table" => OutputFormat::Table,
                    "json" => OutputFormat::Json,
                    other => {
                        return Err(StrandError::Config(format!(
                            "expected table or json, got {other:?}"
                        )))
                    }
                };
                Ok(())
            }
            other => Err(StrandError::Config(format!("unknown config key {other:?}"))),
        }
    }
}
