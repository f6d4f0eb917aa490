use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_extension, validate_non_empty_string, validate_path, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// TOML configuration for the web front end:
///
/// ```toml
/// [server]
/// bind = "127.0.0.1:8080"
///
/// [data]
/// dataset = "./data/doctors.csv"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    pub server: ServerConfig,
    pub data: DataConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind: String,
    #[serde(default)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    pub dataset: String,
}

impl WebConfig {
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: WebConfig = toml::from_str(&content)?;
        Ok(config)
    }
}

impl ConfigProvider for WebConfig {
    fn dataset_path(&self) -> &str {
        &self.data.dataset
    }

    fn verbose(&self) -> bool {
        self.server.verbose
    }
}

impl Validate for WebConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("server.bind", &self.server.bind)?;
        validate_path("data.dataset", &self.data.dataset)?;
        validate_file_extension("data.dataset", &self.data.dataset, &["csv"])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let config: WebConfig = toml::from_str(
            r#"
            [server]
            bind = "127.0.0.1:8080"

            [data]
            dataset = "./data/doctors.csv"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.bind, "127.0.0.1:8080");
        assert!(!config.server.verbose);
        assert_eq!(config.dataset_path(), "./data/doctors.csv");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_blank_bind_rejected() {
        let config: WebConfig = toml::from_str(
            r#"
            [server]
            bind = " "

            [data]
            dataset = "./data/doctors.csv"
            "#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }
}
