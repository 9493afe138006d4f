pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, RunConfig};
pub use crate::core::{
    assembler::{assemble, ExtractOptions},
    engine::{IoListEngine, RunSummary},
    pipeline::IoListPipeline,
};
pub use domain::model::{
    Advisory, Direction, ExtractionResult, InterfaceRecord, Parameter, Port, ReportFormat,
    StorageClass,
};
pub use utils::error::{IoListError, Result};
