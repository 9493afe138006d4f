use crate::core::assembler::{self, ExtractOptions};
use crate::core::report;
use crate::core::{ConfigProvider, Pipeline, Storage, TransformResult};
use crate::utils::error::{IoListError, Result};
use std::path::Path;

/// 讀取單一 HDL 檔案、擷取介面並輸出 `<module>_io.*` 報表
pub struct IoListPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> IoListPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn options(&self) -> ExtractOptions {
        ExtractOptions {
            strip_comments: self.config.strip_comments(),
        }
    }

    fn output_file(&self, file_name: &str) -> String {
        Path::new(self.config.output_path())
            .join(file_name)
            .to_string_lossy()
            .into_owned()
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for IoListPipeline<S, C> {
    async fn extract(&self) -> Result<String> {
        let path = self.config.source_file();

        if !self.storage.exists(path).await {
            return Err(IoListError::NoSuchFile {
                path: path.to_string(),
            });
        }

        let bytes = self
            .storage
            .read_file(path)
            .await
            .map_err(|e| IoListError::FileReadError {
                path: path.to_string(),
                reason: e.to_string(),
            })?;

        let source = String::from_utf8(bytes).map_err(|e| IoListError::FileReadError {
            path: path.to_string(),
            reason: e.to_string(),
        })?;

        tracing::info!("✅ The module file was read in successfully ({} bytes)", source.len());
        Ok(source)
    }

    async fn transform(&self, source: String) -> Result<TransformResult> {
        let extraction = assembler::assemble(&source, &self.options())?;

        tracing::debug!(
            "Module '{}': {} inputs, {} outputs, {} parameters",
            extraction.record.module_name,
            extraction.record.inputs.len(),
            extraction.record.outputs.len(),
            extraction.parameters.len()
        );

        let reports = report::render(&extraction, self.config.formats())?;

        Ok(TransformResult {
            extraction,
            reports,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<Vec<String>> {
        let mut written = Vec::with_capacity(result.reports.len());

        for rendered in &result.reports {
            let path = self.output_file(&rendered.file_name);
            tracing::debug!("Writing {} ({} bytes)", path, rendered.content.len());
            self.storage.write_file(&path, &rendered.content).await?;
            written.push(path);
        }

        Ok(written)
    }

    fn is_strict(&self) -> bool {
        self.config.strict()
    }
}
