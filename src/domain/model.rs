use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Input,
    Output,
}

impl Direction {
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Input => "Input",
            Direction::Output => "Output",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StorageClass {
    #[default]
    Unspecified,
    Wire,
    Reg,
}

impl StorageClass {
    /// 將擷取到的原始字串轉成列舉，空字串或未知內容一律視為 Unspecified
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "wire" => StorageClass::Wire,
            "reg" => StorageClass::Reg,
            _ => StorageClass::Unspecified,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StorageClass::Unspecified => "",
            StorageClass::Wire => "wire",
            StorageClass::Reg => "reg",
        }
    }
}

/// 單一埠宣告
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Port {
    pub name: String,
    pub direction: Direction,
    pub storage_class: StorageClass,
    /// 零到兩個方括號範圍原樣串接；純量埠為空字串
    pub dimension: String,
}

impl Port {
    pub fn is_scalar(&self) -> bool {
        self.dimension.is_empty()
    }
}

/// 埠規則的一次原始擷取結果 (storage, dim_a, dim_b, name)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPortMatch {
    pub storage_class: String,
    pub dim_a: String,
    pub dim_b: String,
    pub name: String,
    pub span: (usize, usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
}

/// 模組標頭候選，用於回報無法唯一辨識模組名稱的情況
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleCandidate {
    pub name: String,
    pub span: (usize, usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceRecord {
    pub module_name: String,
    pub inputs: IndexMap<String, Port>,
    pub outputs: IndexMap<String, Port>,
}

impl InterfaceRecord {
    pub fn new(module_name: impl Into<String>) -> Self {
        Self {
            module_name: module_name.into(),
            inputs: IndexMap::new(),
            outputs: IndexMap::new(),
        }
    }

    pub fn port_count(&self) -> usize {
        self.inputs.len() + self.outputs.len()
    }
}

/// 不影響擷取結果的提示性狀況
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Advisory {
    NoInputsIdentified,
    NoOutputsIdentified,
    NoParametersFound,
}

impl Advisory {
    pub fn message(&self) -> &'static str {
        match self {
            Advisory::NoInputsIdentified => "No module inputs were identified.",
            Advisory::NoOutputsIdentified => "No module outputs were identified.",
            Advisory::NoParametersFound => "No parameters were identified for this module.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub record: InterfaceRecord,
    pub parameters: Vec<Parameter>,
    pub advisories: Vec<Advisory>,
}

/// 報表的一列: (name, direction, storage class, dimension)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub name: String,
    pub direction: String,
    pub storage_class: String,
    pub dimension: String,
}

impl ReportRow {
    pub fn header() -> Self {
        Self {
            name: "Signal Name".to_string(),
            direction: "Input/Output".to_string(),
            storage_class: "Signal Type".to_string(),
            dimension: "Dimension".to_string(),
        }
    }

    pub fn from_port(port: &Port) -> Self {
        Self {
            name: port.name.clone(),
            direction: port.direction.label().to_string(),
            storage_class: port.storage_class.label().to_string(),
            dimension: port.dimension.clone(),
        }
    }

    pub fn as_record(&self) -> [&str; 4] {
        [
            self.name.as_str(),
            self.direction.as_str(),
            self.storage_class.as_str(),
            self.dimension.as_str(),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Csv,
    Json,
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Csv => "csv",
            ReportFormat::Json => "json",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "csv" => Some(ReportFormat::Csv),
            "json" => Some(ReportFormat::Json),
            _ => None,
        }
    }
}

/// 單一報表輸出 (檔名 + 內容)
#[derive(Debug, Clone)]
pub struct RenderedReport {
    pub file_name: String,
    pub format: ReportFormat,
    pub content: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub extraction: ExtractionResult,
    pub reports: Vec<RenderedReport>,
}
