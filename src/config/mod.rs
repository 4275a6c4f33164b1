pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{
    self, validate_non_empty_string, validate_path, validate_url, Validate,
};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "site-etl")]
#[command(about = "Populates a static marketing page from an image catalog")]
pub struct CliConfig {
    #[arg(long, default_value = "http://localhost:8000/data/images.json")]
    pub catalog_endpoint: String,

    #[arg(long, default_value = "index.html")]
    pub page_path: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(
        long,
        value_delimiter = ',',
        default_value = "professional,automobile,trash"
    )]
    pub service_keys: Vec<String>,

    #[arg(long, help = "Catalog request timeout in seconds")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Enable system monitoring")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn catalog_endpoint(&self) -> &str {
        &self.catalog_endpoint
    }

    fn page_path(&self) -> &str {
        &self.page_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn service_keys(&self) -> &[String] {
        &self.service_keys
    }

    fn request_timeout_seconds(&self) -> Option<u64> {
        self.timeout_seconds
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("catalog_endpoint", &self.catalog_endpoint)?;
        validate_path("page_path", &self.page_path)?;
        validate_path("output_path", &self.output_path)?;

        for key in &self.service_keys {
            validate_non_empty_string("service_keys", key)?;
        }

        if let Some(timeout) = self.timeout_seconds {
            validation::validate_positive_number("timeout_seconds", timeout as usize, 1)?;
        }

        Ok(())
    }
}
