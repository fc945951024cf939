//! CSV import of approach history and template catalogs exported by the
//! sending collaborator.

use crate::workflows::outreach::domain::{ApproachEvent, ApproachStatus, EmailTemplate, TargetType};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum HistoryImportError {
    #[error("failed to read export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: '{value}' is not an RFC 3339 timestamp or YYYY-MM-DD date")]
    InvalidTimestamp { row: usize, value: String },
    #[error("row {row}: unknown approach status '{value}'")]
    UnknownStatus { row: usize, value: String },
    #[error("row {row}: unknown target type '{value}'")]
    UnknownTargetType { row: usize, value: String },
}

#[derive(Debug, Deserialize)]
struct HistoryRow {
    id: String,
    target_type: String,
    target_id: String,
    template_id: String,
    status: String,
    sent_at: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    opened_at: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    replied_at: Option<String>,
}

impl HistoryRow {
    fn into_event(self, row: usize) -> Result<ApproachEvent, HistoryImportError> {
        let target_type = TargetType::parse(&self.target_type).ok_or_else(|| {
            HistoryImportError::UnknownTargetType {
                row,
                value: self.target_type.clone(),
            }
        })?;
        let status = ApproachStatus::parse(&self.status).ok_or_else(|| {
            HistoryImportError::UnknownStatus {
                row,
                value: self.status.clone(),
            }
        })?;

        Ok(ApproachEvent {
            id: self.id,
            target_type,
            target_id: self.target_id,
            template_id: self.template_id,
            status,
            sent_at: timestamp(row, &self.sent_at)?,
            opened_at: self
                .opened_at
                .as_deref()
                .map(|value| timestamp(row, value))
                .transpose()?,
            replied_at: self
                .replied_at
                .as_deref()
                .map(|value| timestamp(row, value))
                .transpose()?,
        })
    }
}

#[derive(Debug, Deserialize)]
struct TemplateRow {
    id: String,
    name: String,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

pub(crate) fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn timestamp(row: usize, value: &str) -> Result<DateTime<Utc>, HistoryImportError> {
    parse_timestamp(value).ok_or_else(|| HistoryImportError::InvalidTimestamp {
        row,
        value: value.to_string(),
    })
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
}

pub struct ApproachHistoryImporter;

impl ApproachHistoryImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<ApproachEvent>, HistoryImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<ApproachEvent>, HistoryImportError> {
        let mut reader = csv_reader(reader);
        let events = reader
            .deserialize::<HistoryRow>()
            .enumerate()
            .map(|(index, record)| record?.into_event(index + 1))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(events = events.len(), "imported approach history");
        Ok(events)
    }
}

pub struct TemplateCatalogImporter;

impl TemplateCatalogImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<EmailTemplate>, HistoryImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<EmailTemplate>, HistoryImportError> {
        let mut reader = csv_reader(reader);
        let mut templates = Vec::new();
        for record in reader.deserialize::<TemplateRow>() {
            let row = record?;
            templates.push(EmailTemplate {
                id: row.id,
                name: row.name,
            });
        }
        Ok(templates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::io::Cursor;

    #[test]
    fn parse_timestamp_supports_rfc3339_and_date_strings() {
        assert_eq!(
            parse_timestamp("2025-09-24T19:00:00+09:00"),
            Some(Utc.with_ymd_and_hms(2025, 9, 24, 10, 0, 0).unwrap())
        );
        assert_eq!(
            parse_timestamp("2025-09-30"),
            Some(Utc.with_ymd_and_hms(2025, 9, 30, 0, 0, 0).unwrap())
        );
        assert!(parse_timestamp("  ").is_none());
        assert!(parse_timestamp("not-a-date").is_none());
    }

    #[test]
    fn importer_reads_optional_columns() {
        let csv = "id,target_type,target_id,template_id,status,sent_at,opened_at,replied_at\n\
a-1, freelancer ,f-1,tpl-1,Replied,2025-09-01T09:00:00Z,2025-09-01T10:00:00Z,2025-09-02T08:00:00Z\n\
a-2,company,acme,tpl-2,sent,2025-09-03,,\n";

        let events = ApproachHistoryImporter::from_reader(Cursor::new(csv)).expect("import succeeds");

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].target_type, TargetType::Freelancer);
        assert_eq!(events[0].status, ApproachStatus::Replied);
        assert!(events[0].replied_at.is_some());
        assert!(events[1].opened_at.is_none());
        assert!(events[1].replied_at.is_none());
    }

    #[test]
    fn importer_reports_row_of_bad_timestamp() {
        let csv = "id,target_type,target_id,template_id,status,sent_at,opened_at,replied_at\n\
a-1,company,acme,tpl-1,sent,2025-09-01,,\n\
a-2,company,acme,tpl-1,sent,yesterday,,\n";

        let error = ApproachHistoryImporter::from_reader(Cursor::new(csv)).expect_err("bad row");
        match error {
            HistoryImportError::InvalidTimestamp { row, value } => {
                assert_eq!(row, 2);
                assert_eq!(value, "yesterday");
            }
            other => panic!("expected timestamp error, got {other:?}"),
        }
    }

    #[test]
    fn importer_rejects_unknown_status() {
        let csv = "id,target_type,target_id,template_id,status,sent_at,opened_at,replied_at\n\
a-1,company,acme,tpl-1,bounced,2025-09-01,,\n";

        let error = ApproachHistoryImporter::from_reader(Cursor::new(csv)).expect_err("bad status");
        assert!(matches!(error, HistoryImportError::UnknownStatus { row: 1, .. }));
    }

    #[test]
    fn template_catalog_import() {
        let csv = "id,name\ntpl-1,Warm intro\ntpl-2, Follow-up \n";
        let templates = TemplateCatalogImporter::from_reader(Cursor::new(csv)).expect("import");
        assert_eq!(templates[1].name, "Follow-up");
    }

    #[test]
    fn importer_from_path_propagates_io_errors() {
        let error = ApproachHistoryImporter::from_path("./does-not-exist.csv")
            .expect_err("expected io error");
        assert!(matches!(error, HistoryImportError::Io(_)));
    }
}
