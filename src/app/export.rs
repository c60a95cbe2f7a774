use crate::core::{Assignment, ConstraintRegistry, Couple, Pair, Storage};
use crate::utils::error::{Result, SantaError};
use crate::utils::validation::validate_file_extension;
use chrono::{DateTime, Utc};
use serde::Serialize;

pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["csv", "tsv", "json"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
    Json,
}

impl ExportFormat {
    /// 依副檔名決定輸出格式
    pub fn from_path(path: &str) -> Result<Self> {
        validate_file_extension("output", path, &SUPPORTED_EXTENSIONS)?;

        let extension = std::path::Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        match extension {
            "csv" => Ok(ExportFormat::Csv),
            "tsv" => Ok(ExportFormat::Tsv),
            _ => Ok(ExportFormat::Json),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DrawReport<'a> {
    pub drawn_at: DateTime<Utc>,
    pub participant_count: usize,
    pub couples: &'a [Couple],
    pub assignment: &'a [Pair],
}

impl<'a> DrawReport<'a> {
    pub fn new(assignment: &'a Assignment, registry: &'a ConstraintRegistry) -> Self {
        Self {
            drawn_at: Utc::now(),
            participant_count: registry.participant_count(),
            couples: registry.couples(),
            assignment: assignment.pairs(),
        }
    }
}

pub fn render(
    assignment: &Assignment,
    registry: &ConstraintRegistry,
    format: ExportFormat,
) -> Result<Vec<u8>> {
    match format {
        ExportFormat::Csv => write_delimited(assignment, b','),
        ExportFormat::Tsv => write_delimited(assignment, b'\t'),
        ExportFormat::Json => {
            let report = DrawReport::new(assignment, registry);
            Ok(serde_json::to_vec_pretty(&report)?)
        }
    }
}

fn write_delimited(assignment: &Assignment, delimiter: u8) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());
    for pair in assignment {
        writer.serialize(pair)?;
    }
    writer
        .into_inner()
        .map_err(|e| SantaError::IoError(e.into_error()))
}

/// 將抽籤結果寫入 `path`，回傳寫入的格式
pub async fn export_assignment<S: Storage>(
    storage: &S,
    path: &str,
    assignment: &Assignment,
    registry: &ConstraintRegistry,
) -> Result<ExportFormat> {
    let format = ExportFormat::from_path(path)?;
    let data = render(assignment, registry, format)?;

    tracing::info!("Writing {} pairs to {} ({:?})", assignment.len(), path, format);
    storage.write_file(path, &data).await?;
    Ok(format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DrawEngine;

    fn drawn() -> (Assignment, ConstraintRegistry) {
        let mut registry = ConstraintRegistry::new();
        for name in ["Alice", "Bob", "Carol", "Dave"] {
            registry.add_participant(name);
        }
        registry.add_couple("Alice", "Bob");
        let assignment = DrawEngine::seeded(9)
            .draw(registry.participants(), &registry)
            .unwrap();
        (assignment, registry)
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(ExportFormat::from_path("out.csv").unwrap(), ExportFormat::Csv);
        assert_eq!(ExportFormat::from_path("a/b.tsv").unwrap(), ExportFormat::Tsv);
        assert_eq!(ExportFormat::from_path("r.json").unwrap(), ExportFormat::Json);
        assert!(ExportFormat::from_path("r.xlsx").is_err());
    }

    #[test]
    fn test_render_csv_has_header_and_rows() {
        let (assignment, registry) = drawn();
        let csv = String::from_utf8(render(&assignment, &registry, ExportFormat::Csv).unwrap()).unwrap();

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "giver,receiver");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_render_tsv_uses_tabs() {
        let (assignment, registry) = drawn();
        let tsv = String::from_utf8(render(&assignment, &registry, ExportFormat::Tsv).unwrap()).unwrap();
        assert!(tsv.starts_with("giver\treceiver"));
    }

    #[test]
    fn test_render_json_report() {
        let (assignment, registry) = drawn();
        let json = render(&assignment, &registry, ExportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&json).unwrap();

        assert_eq!(value["participant_count"], 4);
        assert_eq!(value["couples"][0]["first"], "Alice");
        assert_eq!(value["assignment"].as_array().unwrap().len(), 4);
        assert!(value["drawn_at"].is_string());
    }
}
