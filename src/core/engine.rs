use crate::core::Pipeline;
use crate::domain::model::{Advisory, InterfaceRecord, Parameter};
use crate::utils::error::{IoListError, Result};

/// 一次執行的摘要，供 CLI 顯示
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub record: InterfaceRecord,
    pub parameters: Vec<Parameter>,
    pub advisories: Vec<Advisory>,
    pub written: Vec<String>,
}

pub struct IoListEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> IoListEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<RunSummary> {
        tracing::info!("Starting I/O list extraction");

        let source = self.pipeline.extract().await?;

        let result = self.pipeline.transform(source).await?;
        let extraction = &result.extraction;
        tracing::info!(
            "Identified module '{}' with {} inputs and {} outputs",
            extraction.record.module_name,
            extraction.record.inputs.len(),
            extraction.record.outputs.len()
        );

        for advisory in &extraction.advisories {
            match advisory {
                Advisory::NoParametersFound => tracing::info!("ℹ️ {}", advisory.message()),
                _ => tracing::warn!("⚠️ {}", advisory.message()),
            }
        }

        // strict 模式下單邊介面視為錯誤，且不寫出任何報表
        if self.pipeline.is_strict() {
            let missing: Vec<&str> = extraction
                .advisories
                .iter()
                .filter_map(|advisory| match advisory {
                    Advisory::NoInputsIdentified => Some("inputs"),
                    Advisory::NoOutputsIdentified => Some("outputs"),
                    Advisory::NoParametersFound => None,
                })
                .collect();

            if !missing.is_empty() {
                return Err(IoListError::IncompleteInterface {
                    module: extraction.record.module_name.clone(),
                    missing: missing.join(" or "),
                });
            }
        }

        let record = extraction.record.clone();
        let parameters = extraction.parameters.clone();
        let advisories = extraction.advisories.clone();

        let written = self.pipeline.load(result).await?;
        for path in &written {
            tracing::info!("📁 Report saved to: {}", path);
        }

        Ok(RunSummary {
            record,
            parameters,
            advisories,
            written,
        })
    }
}
