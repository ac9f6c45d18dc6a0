use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

/// Loads a YAML config from `path`. A missing file yields the default
/// config; a present but malformed or invalid file is an error.
pub fn load_yaml_config<T>(path: &Path) -> Result<T, String>
where
    T: Default + DeserializeOwned + Validate,
{
    if !path.exists() {
        return Ok(T::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
    let config: T = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("Failed to deserialize config: {}", e))?;
    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;
    Ok(config)
}

pub fn save_yaml_config<T>(path: &Path, config: &T) -> Result<(), String>
where
    T: Serialize + Validate,
{
    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;
    let content = serde_yaml_ng::to_string(config)
        .map_err(|e| format!("Failed to serialize config: {}", e))?;
    std::fs::write(path, content)
        .map_err(|e| format!("Failed to write config {}: {}", path.display(), e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct SampleConfig {
        name: String,
        count: u32,
    }

    impl Default for SampleConfig {
        fn default() -> Self {
            Self {
                name: "sample".to_string(),
                count: 3,
            }
        }
    }

    impl Validate for SampleConfig {
        fn validate(&self) -> Result<(), String> {
            if self.count == 0 {
                return Err("count must be positive".to_string());
            }
            Ok(())
        }
    }

    fn temp_config_path(tag: &str) -> std::path::PathBuf {
        let file_name = format!("tictactoe_config_test_{}_{}.yaml", tag, std::process::id());
        std::env::temp_dir().join(file_name)
    }

    #[test]
    fn test_missing_file_yields_default_config() {
        let path = temp_config_path("missing");
        let _ = std::fs::remove_file(&path);
        let config: SampleConfig = load_yaml_config(&path).unwrap();
        assert_eq!(config, SampleConfig::default());
    }

    #[test]
    fn test_config_round_trips_through_file() {
        let path = temp_config_path("round_trip");
        let config = SampleConfig {
            name: "round trip".to_string(),
            count: 7,
        };
        save_yaml_config(&path, &config).unwrap();
        let loaded: SampleConfig = load_yaml_config(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_invalid_config_rejected_on_save() {
        let path = temp_config_path("invalid");
        let config = SampleConfig {
            name: "broken".to_string(),
            count: 0,
        };
        let result = save_yaml_config(&path, &config);
        assert!(result.is_err());
        assert!(!path.exists());
    }
}
