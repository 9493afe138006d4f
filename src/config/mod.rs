pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::ReportFormat;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate, HDL_EXTENSIONS};
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "hdl-iolist")]
#[command(about = "Extract the I/O list of a Verilog/SystemVerilog module into a report")]
pub struct CliConfig {
    /// Path to the Verilog or SystemVerilog module description
    #[arg(long)]
    pub filename: Option<String>,

    /// Directory the report is written to
    #[arg(long)]
    pub output_path: Option<String>,

    /// Report formats (csv, json)
    #[arg(long, value_delimiter = ',')]
    pub format: Vec<String>,

    /// Fail when no inputs or no outputs are identified
    #[arg(long)]
    pub strict: bool,

    /// Match declarations inside comments as well
    #[arg(long)]
    pub keep_comments: bool,

    /// Optional TOML file with default settings
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 合併 TOML 預設值，命令列參數優先
    pub fn resolve(&self) -> Result<RunConfig> {
        let file = match &self.config {
            Some(path) => {
                tracing::debug!("Loading defaults from {}", path);
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                file
            }
            None => TomlConfig::default(),
        };

        let source_file = validation::validate_required_field("filename", &self.filename)?.clone();

        let formats = if self.format.is_empty() {
            file.formats()?.unwrap_or_else(|| vec![ReportFormat::Csv])
        } else {
            self.format
                .iter()
                .map(|value| validation::parse_format("format", value))
                .collect::<Result<Vec<_>>>()?
        };

        Ok(RunConfig {
            source_file,
            output_path: self
                .output_path
                .clone()
                .or_else(|| file.output_path().map(str::to_string))
                .unwrap_or_else(|| ".".to_string()),
            formats,
            strict: self.strict || file.strict().unwrap_or(false),
            strip_comments: !self.keep_comments && file.strip_comments().unwrap_or(true),
        })
    }
}

/// 解析完成、可直接交給 pipeline 的設定
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    pub source_file: String,
    pub output_path: String,
    pub formats: Vec<ReportFormat>,
    pub strict: bool,
    pub strip_comments: bool,
}

impl RunConfig {
    pub fn new(source_file: impl Into<String>, output_path: impl Into<String>) -> Self {
        Self {
            source_file: source_file.into(),
            output_path: output_path.into(),
            formats: vec![ReportFormat::Csv],
            strict: false,
            strip_comments: true,
        }
    }
}

impl ConfigProvider for RunConfig {
    fn source_file(&self) -> &str {
        &self.source_file
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn formats(&self) -> &[ReportFormat] {
        &self.formats
    }

    fn strict(&self) -> bool {
        self.strict
    }

    fn strip_comments(&self) -> bool {
        self.strip_comments
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("filename", &self.source_file)?;
        validation::validate_file_extension("filename", &self.source_file, HDL_EXTENSIONS)?;
        validation::validate_path("output_path", &self.output_path)?;
        if self.formats.is_empty() {
            return Err(crate::utils::error::IoListError::InvalidConfigValueError {
                field: "format".to_string(),
                value: String::new(),
                reason: "At least one report format is required".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use crate::utils::error::IoListError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn parse(args: &[&str]) -> CliConfig {
        let mut argv = vec!["hdl-iolist"];
        argv.extend_from_slice(args);
        CliConfig::parse_from(argv)
    }

    #[test]
    fn test_resolve_defaults() {
        let config = parse(&["--filename", "rtl/top.v"]).resolve().unwrap();
        assert_eq!(config.source_file, "rtl/top.v");
        assert_eq!(config.output_path, ".");
        assert_eq!(config.formats, vec![ReportFormat::Csv]);
        assert!(!config.strict);
        assert!(config.strip_comments);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_resolve_without_filename() {
        let err = parse(&[]).resolve().unwrap_err();
        assert!(matches!(err, IoListError::MissingConfigError { ref field } if field == "filename"));
    }

    #[test]
    fn test_resolve_format_list() {
        let config = parse(&["--filename", "a.sv", "--format", "csv,json", "--keep-comments"])
            .resolve()
            .unwrap();
        assert_eq!(config.formats, vec![ReportFormat::Csv, ReportFormat::Json]);
        assert!(!config.strip_comments);
    }

    #[test]
    fn test_cli_overrides_toml_defaults() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[output]\npath = \"from-file\"\nformats = [\"json\"]\n\n[extraction]\nstrict = true\n")
            .unwrap();
        let config_path = temp_file.path().to_string_lossy().into_owned();

        let from_file = parse(&["--filename", "a.v", "--config", config_path.as_str()])
            .resolve()
            .unwrap();
        assert_eq!(from_file.output_path, "from-file");
        assert_eq!(from_file.formats, vec![ReportFormat::Json]);
        assert!(from_file.strict);

        let overridden = parse(&[
            "--filename",
            "a.v",
            "--config",
            config_path.as_str(),
            "--output-path",
            "cli-dir",
            "--format",
            "csv",
        ])
        .resolve()
        .unwrap();
        assert_eq!(overridden.output_path, "cli-dir");
        assert_eq!(overridden.formats, vec![ReportFormat::Csv]);
    }

    #[test]
    fn test_validate_rejects_unknown_extension() {
        let config = RunConfig::new("top.vhd", ".");
        assert!(config.validate().is_err());
    }
}
