use crate::domain::model::ReportFormat;
use crate::utils::error::{IoListError, Result};
use crate::utils::validation::{self, Validate};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

lazy_static! {
    static ref ENV_VAR: Regex = Regex::new(r"\$\{([^}]+)\}").unwrap();
}

/// 選用的 TOML 預設值檔案，所有欄位皆可省略，命令列參數優先
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub output: Option<OutputConfig>,
    pub extraction: Option<ExtractionConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: Option<String>,
    pub formats: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractionConfig {
    pub strict: Option<bool>,
    pub strip_comments: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(IoListError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| IoListError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${OUTPUT_DIR})，未定義者保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn output_path(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.path.as_deref())
    }

    /// 解析輸出格式；未設定時回傳 None
    pub fn formats(&self) -> Result<Option<Vec<ReportFormat>>> {
        let Some(raw) = self.output.as_ref().and_then(|o| o.formats.as_ref()) else {
            return Ok(None);
        };

        raw.iter()
            .map(|value| validation::parse_format("output.formats", value))
            .collect::<Result<Vec<_>>>()
            .map(Some)
    }

    pub fn strict(&self) -> Option<bool> {
        self.extraction.as_ref().and_then(|e| e.strict)
    }

    pub fn strip_comments(&self) -> Option<bool> {
        self.extraction.as_ref().and_then(|e| e.strip_comments)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = self.output_path() {
            validation::validate_path("output.path", path)?;
        }
        self.formats()?;
        Ok(())
    }
}
