pub mod assembler;
pub mod engine;
pub mod extractor;
pub mod patterns;
pub mod pipeline;
pub mod report;

pub use crate::domain::model::TransformResult;
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
