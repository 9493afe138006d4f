use crate::core::extractor::{self, PortMatches};
use crate::domain::model::{
    Advisory, Direction, ExtractionResult, InterfaceRecord, Port, RawPortMatch, StorageClass,
};
use crate::utils::error::Result;
use indexmap::IndexMap;
use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    /// 比對前先將註解遮蔽成空白
    pub strip_comments: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            strip_comments: true,
        }
    }
}

impl ExtractOptions {
    fn prepare<'a>(&self, source: &'a str) -> Cow<'a, str> {
        if self.strip_comments {
            extractor::mask_comments(source)
        } else {
            Cow::Borrowed(source)
        }
    }
}

pub fn to_port(raw: RawPortMatch, direction: Direction) -> Port {
    Port {
        name: raw.name,
        direction,
        storage_class: StorageClass::from_raw(&raw.storage_class),
        dimension: raw.dim_a + &raw.dim_b,
    }
}

/// 以名稱為鍵併入；重複名稱覆寫先前的值但保留首次出現的位置
pub fn merge_ports(target: &mut IndexMap<String, Port>, matches: Vec<RawPortMatch>, direction: Direction) {
    for raw in matches {
        let port = to_port(raw, direction);
        if let Some(previous) = target.insert(port.name.clone(), port) {
            tracing::debug!(
                "Duplicate {} port '{}' overrides earlier declaration",
                direction.label().to_lowercase(),
                previous.name
            );
        }
    }
}

/// 從原始碼組出完整介面；模組名稱無法唯一辨識時直接回傳錯誤
pub fn assemble(source: &str, options: &ExtractOptions) -> Result<ExtractionResult> {
    let text = options.prepare(source);

    let module_name = extractor::extract_module_name(&text)?;
    tracing::debug!("Identified module '{}'", module_name);

    let PortMatches { inputs, outputs } = extractor::extract_ports(&text);
    let parameters = extractor::extract_parameters(&text);

    let mut advisories = Vec::new();
    if inputs.is_empty() {
        advisories.push(Advisory::NoInputsIdentified);
    }
    if outputs.is_empty() {
        advisories.push(Advisory::NoOutputsIdentified);
    }
    if parameters.is_empty() {
        advisories.push(Advisory::NoParametersFound);
    }

    let mut record = InterfaceRecord::new(module_name);
    merge_ports(&mut record.inputs, inputs, Direction::Input);
    merge_ports(&mut record.outputs, outputs, Direction::Output);

    Ok(ExtractionResult {
        record,
        parameters,
        advisories,
    })
}
