use anyhow::Result;
use hdl_iolist::{
    Advisory, IoListEngine, IoListError, IoListPipeline, LocalStorage, ReportFormat, RunConfig,
};
use tempfile::TempDir;

const SERIAL_TX: &str = r#"// Serial transmitter
module serialTX #
    (
    parameter INCR = 26'd25770 // amount by which the accumulator is incremented
    )
    (
    input clk,
    input reset,
    input [7:0] data,
    input send,
    output reg txOut,
    output busy
    );
    // The module description or logic goes below
endmodule
"#;

async fn write_source(dir: &TempDir, name: &str, content: &str) -> Result<String> {
    let path = dir.path().join(name);
    tokio::fs::write(&path, content).await?;
    Ok(path.to_string_lossy().into_owned())
}

fn engine_for(config: RunConfig) -> IoListEngine<IoListPipeline<LocalStorage, RunConfig>> {
    let storage = LocalStorage::new(".".to_string());
    IoListEngine::new(IoListPipeline::new(storage, config))
}

#[tokio::test]
async fn test_end_to_end_writes_module_csv() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let source = write_source(&temp_dir, "serial_tx.v", SERIAL_TX).await?;
    let output_dir = temp_dir.path().join("out");
    let output_path = output_dir.to_string_lossy().into_owned();

    let summary = engine_for(RunConfig::new(source, output_path)).run().await?;

    assert_eq!(summary.record.module_name, "serialTX");
    assert_eq!(summary.parameters.len(), 1);
    assert!(summary.advisories.is_empty());

    let csv_path = output_dir.join("serialTX_io.csv");
    assert!(csv_path.exists());

    let csv = tokio::fs::read_to_string(&csv_path).await?;
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Signal Name,Input/Output,Signal Type,Dimension",
            "clk,Input,,",
            "reset,Input,,",
            "data,Input,,[7:0]",
            "send,Input,,",
            "txOut,Output,reg,",
            "busy,Output,,",
        ]
    );

    Ok(())
}

#[tokio::test]
async fn test_end_to_end_json_report() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let source = write_source(&temp_dir, "serial_tx.sv", SERIAL_TX).await?;
    let output_path = temp_dir.path().to_string_lossy().into_owned();

    let mut config = RunConfig::new(source, output_path);
    config.formats = vec![ReportFormat::Csv, ReportFormat::Json];
    let summary = engine_for(config).run().await?;
    assert_eq!(summary.written.len(), 2);

    let json_path = temp_dir.path().join("serialTX_io.json");
    let json: serde_json::Value = serde_json::from_str(&tokio::fs::read_to_string(json_path).await?)?;
    assert_eq!(json["record"]["module_name"], "serialTX");
    assert_eq!(json["record"]["outputs"]["txOut"]["storage_class"], "Reg");
    assert_eq!(json["parameters"][0]["name"], "INCR");

    Ok(())
}

#[tokio::test]
async fn test_missing_file_reports_no_such_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let missing = temp_dir.path().join("absent.v").to_string_lossy().into_owned();
    let output_path = temp_dir.path().to_string_lossy().into_owned();

    let err = engine_for(RunConfig::new(missing, output_path))
        .run()
        .await
        .unwrap_err();
    assert!(matches!(err, IoListError::NoSuchFile { .. }));

    Ok(())
}

#[tokio::test]
async fn test_two_modules_write_no_report() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let source = write_source(
        &temp_dir,
        "pair.v",
        "module a (input x, output y);\nendmodule\nmodule b (input p, output q);\nendmodule\n",
    )
    .await?;
    let output_dir = temp_dir.path().join("out");

    let err = engine_for(RunConfig::new(source, output_dir.to_string_lossy()))
        .run()
        .await
        .unwrap_err();

    match err {
        IoListError::ModuleNameNotIdentified { candidates } => assert_eq!(candidates.len(), 2),
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(!output_dir.exists());

    Ok(())
}

#[tokio::test]
async fn test_one_sided_interface_is_advisory_unless_strict() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let source = write_source(&temp_dir, "sink.v", "module sink (input wire [3:0] d);\nendmodule\n").await?;
    let output_path = temp_dir.path().to_string_lossy().into_owned();

    let summary = engine_for(RunConfig::new(source.clone(), output_path.clone()))
        .run()
        .await?;
    assert!(summary.advisories.contains(&Advisory::NoOutputsIdentified));
    assert!(summary.record.outputs.is_empty());
    assert_eq!(summary.written.len(), 1);

    tokio::fs::remove_file(temp_dir.path().join("sink_io.csv")).await?;

    let mut strict = RunConfig::new(source, output_path);
    strict.strict = true;
    let err = engine_for(strict).run().await.unwrap_err();
    assert!(matches!(err, IoListError::IncompleteInterface { .. }));
    assert!(!temp_dir.path().join("sink_io.csv").exists());

    Ok(())
}
