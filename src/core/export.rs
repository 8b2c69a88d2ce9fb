use crate::domain::model::{CourseAverages, DishEntry};
use crate::domain::ports::MenuExporter;
use crate::utils::error::{MenuError, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
    Json,
}

impl FromStr for ExportFormat {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "tsv" => Ok(ExportFormat::Tsv),
            "json" => Ok(ExportFormat::Json),
            other => Err(MenuError::InvalidCommand {
                input: other.to_string(),
                reason: "Unsupported format. Valid formats: csv, tsv, json".to_string(),
            }),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Json => "json",
        };
        f.write_str(name)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonSnapshot<'a> {
    generated_at: String,
    total_items: usize,
    averages: BTreeMap<&'static str, f64>,
    dishes: &'a [DishEntry],
}

impl ExportFormat {
    fn delimited(&self, delimiter: u8, dishes: &[DishEntry]) -> Result<String> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .from_writer(Vec::new());

        // 標題列由 DishEntry 的 serde 欄位名稱產生
        for dish in dishes {
            writer.serialize(dish)?;
        }
        if dishes.is_empty() {
            writer.write_record(["dishName", "description", "course", "price"])?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| MenuError::IoError(e.into_error()))?;
        String::from_utf8(bytes).map_err(|e| {
            MenuError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })
    }

    fn json(dishes: &[DishEntry], averages: &CourseAverages) -> Result<String> {
        let snapshot = JsonSnapshot {
            generated_at: chrono::Utc::now().to_rfc3339(),
            total_items: dishes.len(),
            averages: averages
                .iter()
                .map(|(course, avg)| (course.label(), *avg))
                .collect(),
            dishes,
        };
        Ok(serde_json::to_string_pretty(&snapshot)?)
    }
}

impl MenuExporter for ExportFormat {
    fn export(&self, dishes: &[DishEntry], averages: &CourseAverages) -> Result<String> {
        match self {
            ExportFormat::Csv => self.delimited(b',', dishes),
            ExportFormat::Tsv => self.delimited(b'\t', dishes),
            ExportFormat::Json => Self::json(dishes, averages),
        }
    }
}
