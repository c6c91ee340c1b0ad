use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use tictactoe_engine::tictactoe::{Difficulty, GameMode, Mark, TicTacToeSessionSettings};

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";
const MAX_THINKING_DELAY_MS: u64 = 10_000;

pub fn default_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

pub trait ConfigContentProvider {
    fn get_config_content(&self) -> Result<Option<String>, String>;
    fn set_config_content(&self, content: &str) -> Result<(), String>;
}

pub struct FileContentConfigProvider {
    file_path: String,
}

impl FileContentConfigProvider {
    pub fn new(file_path: String) -> Self {
        Self { file_path }
    }
}

impl ConfigContentProvider for FileContentConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, String> {
        match std::fs::read_to_string(self.file_path.as_str()) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(format!("Failed to read config file {}: {}", self.file_path, err)),
        }
    }

    fn set_config_content(&self, content: &str) -> Result<(), String> {
        std::fs::write(self.file_path.as_str(), content)
            .map_err(|e| format!("Failed to write config file {}: {}", self.file_path, e))
    }
}

/// Reads and writes [`ClientConfig`] as YAML. A missing file means defaults.
pub struct ConfigManager<TConfigContentProvider: ConfigContentProvider> {
    content_provider: TConfigContentProvider,
}

impl ConfigManager<FileContentConfigProvider> {
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self::new(FileContentConfigProvider::new(file_path.to_string()))
    }
}

impl<TConfigContentProvider: ConfigContentProvider> ConfigManager<TConfigContentProvider> {
    pub fn new(content_provider: TConfigContentProvider) -> Self {
        Self { content_provider }
    }

    pub fn get_config(&self) -> Result<ClientConfig, String> {
        let Some(content) = self.content_provider.get_config_content()? else {
            return Ok(ClientConfig::default());
        };

        let config: ClientConfig = serde_yaml_ng::from_str(&content)
            .map_err(|e| format!("Failed to deserialize config: {}", e))?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;
        Ok(config)
    }

    pub fn set_config(&self, config: &ClientConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;
        let content = serde_yaml_ng::to_string(config)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;
        self.content_provider.set_config_content(&content)
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ClientConfig {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub computer_mark: Mark,
    pub thinking_delay_ms: u64,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl ClientConfig {
    pub fn session_settings(&self) -> TicTacToeSessionSettings {
        TicTacToeSessionSettings {
            mode: self.mode,
            difficulty: self.difficulty,
            computer_mark: self.computer_mark,
        }
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<(), String> {
        if self.thinking_delay_ms > MAX_THINKING_DELAY_MS {
            return Err(format!(
                "thinking_delay_ms must not exceed {} (got {})",
                MAX_THINKING_DELAY_MS, self.thinking_delay_ms
            ));
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::HumanVsHuman,
            difficulty: Difficulty::Medium,
            computer_mark: Mark::O,
            thinking_delay_ms: 500,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.subsec_nanos())
            .unwrap_or(0);
        path.push(format!("temp_tictactoe_client_config_{}_{}.yaml", std::process::id(), nanos));
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_missing_file_returns_default_config() {
        let manager = ConfigManager::from_yaml_file("this_file_does_not_exist.yaml");
        assert_eq!(manager.get_config().unwrap(), ClientConfig::default());
    }

    #[test]
    fn test_config_survives_a_trip_through_a_file() {
        let config = ClientConfig {
            mode: GameMode::HumanVsComputer,
            difficulty: Difficulty::Hard,
            computer_mark: Mark::X,
            thinking_delay_ms: 0,
            seed: Some(99),
        };
        let file_path = get_temp_file_path();
        let manager = ConfigManager::from_yaml_file(&file_path);

        manager.set_config(&config).unwrap();
        let loaded = manager.get_config().unwrap();
        let _ = std::fs::remove_file(&file_path);

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_yaml_uses_readable_names() {
        let yaml = "mode: human_vs_computer\ndifficulty: easy\ncomputer_mark: o\nthinking_delay_ms: 250\n";
        let config: ClientConfig = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.mode, GameMode::HumanVsComputer);
        assert_eq!(config.difficulty, Difficulty::Easy);
        assert_eq!(config.computer_mark, Mark::O);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_excessive_delay_is_rejected() {
        let config = ClientConfig {
            thinking_delay_ms: 60_000,
            ..ClientConfig::default()
        };
        assert!(config.validate().is_err());
        let manager = ConfigManager::from_yaml_file(&get_temp_file_path());
        assert!(manager.set_config(&config).is_err());
    }
}
