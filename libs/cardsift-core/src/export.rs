//! Serialization of scan reports for download.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{CardEntry, ScanReport, ScanStats, FIELD_DELIMITER};

/// Download format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// One record per line, fields separated by the extraction delimiter.
    Pipe,
    /// Comma-separated table with a header row.
    Csv,
    /// JSON envelope with stats and a generation timestamp.
    Json,
}

impl Default for ExportFormat {
    fn default() -> Self {
        Self::Pipe
    }
}

impl ExportFormat {
    /// Get the format name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pipe => "pipe",
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pipe" => Some(Self::Pipe),
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// File extension for the downloaded artifact.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Pipe => "txt",
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }

    /// MIME type for the download response.
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Pipe => "text/plain; charset=utf-8",
            Self::Csv => "text/csv",
            Self::Json => "application/json",
        }
    }
}

/// Serialize a report in the requested format.
///
/// `generated_at` stamps the JSON envelope; the other formats ignore it.
pub fn render(
    report: &ScanReport,
    format: ExportFormat,
    generated_at: DateTime<Utc>,
) -> Result<String> {
    match format {
        ExportFormat::Pipe => Ok(to_pipe(&report.entries)),
        ExportFormat::Csv => to_csv(&report.entries),
        ExportFormat::Json => to_json(report, generated_at),
    }
}

/// One `NUMBER|MM|YYYY|CVV` record per line.
pub fn to_pipe(entries: &[CardEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&entry.number);
        out.push(FIELD_DELIMITER);
        out.push_str(&entry.exp_month);
        out.push(FIELD_DELIMITER);
        out.push_str(&entry.exp_year);
        out.push(FIELD_DELIMITER);
        out.push_str(&entry.cvv);
        out.push('\n');
    }
    out
}

/// Comma-separated table with a header row, including the validity flag
/// and reason per entry.
pub fn to_csv(entries: &[CardEntry]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["number", "exp_month", "exp_year", "cvv", "valid", "reason"])?;

    for entry in entries {
        writer.write_record([
            entry.number.as_str(),
            entry.exp_month.as_str(),
            entry.exp_year.as_str(),
            entry.cvv.as_str(),
            if entry.valid { "true" } else { "false" },
            entry.reason.map(|r| r.as_str()).unwrap_or(""),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[derive(Debug, Serialize)]
struct JsonEnvelope<'a> {
    generated_at: DateTime<Utc>,
    stats: ScanStats,
    entries: &'a [CardEntry],
}

/// JSON envelope with the generation time, counts and all entries.
pub fn to_json(report: &ScanReport, generated_at: DateTime<Utc>) -> Result<String> {
    let envelope = JsonEnvelope {
        generated_at,
        stats: report.stats,
        entries: &report.entries,
    };
    Ok(serde_json::to_string_pretty(&envelope)?)
}

/// Timestamped filename for a download in the given format.
pub fn download_filename(format: ExportFormat, at: DateTime<Utc>) -> String {
    format!(
        "cardsift_results_{}.{}",
        at.format("%Y%m%d_%H%M%S"),
        format.extension()
    )
}
