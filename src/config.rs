use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fs, path::PathBuf};

const APP_NAME: &str = "hey";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_HISTORY_WINDOW: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehaviorConfig {
    pub confirm_by_default: bool,
    pub history_window: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchConfig {
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub behavior: BehaviorConfig,
    pub dispatch: DispatchConfig,
    #[serde(default)]
    pub tools: HashMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            behavior: BehaviorConfig {
                confirm_by_default: true,
                history_window: DEFAULT_HISTORY_WINDOW,
            },
            dispatch: DispatchConfig {
                timeout_secs: DEFAULT_TIMEOUT_SECS,
            },
            tools: HashMap::new(),
        }
    }
}

pub fn get_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
        .join("config.toml")
}

pub fn load_config() -> Config {
    let path = get_config_path();
    if path.exists() {
        if let Ok(content) = fs::read_to_string(&path) {
            if let Ok(config) = toml::from_str(&content) {
                return config;
            }
        }
    }
    Config::default()
}

pub fn save_config(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let path = get_config_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
