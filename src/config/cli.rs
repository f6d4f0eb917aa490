use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_file_extension, validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "medmatch")]
#[command(about = "Symptom-to-specialist lookup over a static doctor dataset")]
pub struct CliConfig {
    #[arg(long, default_value = "./data/doctors.csv")]
    pub dataset: String,

    /// Comma-separated symptoms; prompts interactively when omitted
    #[arg(long)]
    pub symptoms: Option<String>,

    #[arg(long)]
    pub city: Option<String>,

    #[arg(long)]
    pub state: Option<String>,

    #[arg(long, help = "Print the report as JSON instead of text")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn dataset_path(&self) -> &str {
        &self.dataset
    }

    fn verbose(&self) -> bool {
        self.verbose
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("dataset", &self.dataset)?;
        validate_file_extension("dataset", &self.dataset, &["csv"])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> CliConfig {
        CliConfig {
            dataset: "./data/doctors.csv".to_string(),
            symptoms: Some("cough, fever".to_string()),
            city: None,
            state: None,
            json: false,
            verbose: false,
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_non_csv_dataset_rejected() {
        let mut config = base_config();
        config.dataset = "./data/doctors.xlsx".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_dataset_path_rejected() {
        let mut config = base_config();
        config.dataset = String::new();
        assert!(config.validate().is_err());
    }
}
