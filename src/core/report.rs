use crate::domain::model::{
    ExtractionResult, InterfaceRecord, RenderedReport, ReportFormat, ReportRow,
};
use crate::utils::error::{IoListError, Result};

/// 表頭加上每個埠一列，先輸入後輸出，各自依表內順序
pub fn rows(record: &InterfaceRecord) -> Vec<ReportRow> {
    let mut rows = Vec::with_capacity(record.port_count() + 1);
    rows.push(ReportRow::header());
    rows.extend(record.inputs.values().map(ReportRow::from_port));
    rows.extend(record.outputs.values().map(ReportRow::from_port));
    rows
}

pub fn to_csv(rows: &[ReportRow]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());

    for row in rows {
        writer.write_record(row.as_record())?;
    }

    writer
        .into_inner()
        .map_err(|e| IoListError::IoError(e.into_error()))
}

pub fn to_json(result: &ExtractionResult) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(result)?)
}

pub fn report_file_name(module_name: &str, format: ReportFormat) -> String {
    format!("{}_io.{}", module_name, format.extension())
}

pub fn render(result: &ExtractionResult, formats: &[ReportFormat]) -> Result<Vec<RenderedReport>> {
    let mut reports = Vec::with_capacity(formats.len());

    for &format in formats {
        let content = match format {
            ReportFormat::Csv => to_csv(&rows(&result.record))?,
            ReportFormat::Json => to_json(result)?,
        };
        tracing::debug!(
            "Rendered {} report ({} bytes)",
            format.extension(),
            content.len()
        );
        reports.push(RenderedReport {
            file_name: report_file_name(&result.record.module_name, format),
            format,
            content,
        });
    }

    Ok(reports)
}
