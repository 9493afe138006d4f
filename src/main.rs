use clap::Parser;
use hdl_iolist::utils::error::ErrorSeverity;
use hdl_iolist::utils::{logger, validation::Validate};
use hdl_iolist::{CliConfig, IoListEngine, IoListError, IoListPipeline, LocalStorage};

fn exit_with(e: &IoListError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    // 依錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose, cli.log_json);

    tracing::info!("Starting hdl-iolist");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.resolve().and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            exit_with(&e);
        }
    };

    // 相對路徑以目前工作目錄為根
    let storage = LocalStorage::new(".".to_string());
    let pipeline = IoListPipeline::new(storage, config);
    let engine = IoListEngine::new(pipeline);

    match engine.run().await {
        Ok(summary) => {
            for path in &summary.written {
                println!(
                    "✅ The I/O list for {} can be found in {}",
                    summary.record.module_name, path
                );
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Extraction failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            exit_with(&e);
        }
    }

    Ok(())
}
