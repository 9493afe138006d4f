use crate::domain::model::{ReportFormat, TransformResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn exists(&self, path: &str) -> impl std::future::Future<Output = bool> + Send;
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn source_file(&self) -> &str;
    fn output_path(&self) -> &str;
    fn formats(&self) -> &[ReportFormat];
    fn strict(&self) -> bool;
    fn strip_comments(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<String>;
    async fn transform(&self, source: String) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<Vec<String>>;

    fn is_strict(&self) -> bool {
        false
    }
}
