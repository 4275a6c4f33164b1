use crate::core::ConfigProvider;
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub pipeline: PipelineConfig,
    pub source: SourceConfig,
    pub page: PageConfig,
    pub load: LoadConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub name: String,
    pub description: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub r#type: String,
    pub endpoint: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    pub input_path: String,
    #[serde(default = "default_service_keys")]
    pub service_keys: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
    pub log_level: Option<String>,
}

/// 頁面上服務卡片的預設順序
fn default_service_keys() -> Vec<String> {
    vec![
        "professional".to_string(),
        "automobile".to_string(),
        "trash".to_string(),
    ]
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SiteError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SiteError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CATALOG_URL})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SiteError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        crate::utils::validation::validate_url("source.endpoint", &self.source.endpoint)?;
        crate::utils::validation::validate_path("page.input_path", &self.page.input_path)?;
        crate::utils::validation::validate_path("load.output_path", &self.load.output_path)?;

        if self.page.service_keys.is_empty() {
            return Err(SiteError::MissingConfigError {
                field: "page.service_keys".to_string(),
            });
        }
        for key in &self.page.service_keys {
            crate::utils::validation::validate_non_empty_string("page.service_keys", key)?;
        }

        if let Some(timeout) = self.source.timeout_seconds {
            crate::utils::validation::validate_positive_number(
                "source.timeout_seconds",
                timeout as usize,
                1,
            )?;
        }

        Ok(())
    }

    /// 取得監控設定
    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring
            .as_ref()
            .map(|monitoring| monitoring.enabled)
            .unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn catalog_endpoint(&self) -> &str {
        &self.source.endpoint
    }

    fn page_path(&self) -> &str {
        &self.page.input_path
    }

    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn service_keys(&self) -> &[String] {
        &self.page.service_keys
    }

    fn request_timeout_seconds(&self) -> Option<u64> {
        self.source.timeout_seconds
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
