use serde_json::Value;

use herald_common::types::{HomeworkStatus, SubmissionRecord};
use herald_common::{HeraldError, Result};

/// Check a raw `homeworks` entry and turn it into a typed record.
///
/// Fails with `Schema` when the entry is not an object or when the name or
/// status is missing, blank or not a string, and with `UnknownVerdict` when
/// the status code is not one of the known verdicts. Other fields are ignored.
pub fn parse_record(record: &Value) -> Result<SubmissionRecord> {
    if !record.is_object() {
        tracing::error!("Submission record is not an object");
        return Err(HeraldError::Schema("homework is not an object".into()));
    }

    let name = required(record, "homework_name")?;
    let code = required(record, "status")?;

    let status = code.parse::<HomeworkStatus>().inspect_err(|_| {
        tracing::error!(homework = name, status = code, "Unknown homework status");
    })?;

    Ok(SubmissionRecord {
        homework_name: name.to_string(),
        status,
    })
}

/// Render the notification text for a single raw submission.
pub fn format_status(record: &Value) -> Result<String> {
    let record = parse_record(record)?;

    tracing::info!(
        homework = %record.homework_name,
        status = %record.status,
        "Homework status parsed"
    );

    Ok(render(&record))
}

/// Notification text for an already checked record.
pub fn render(record: &SubmissionRecord) -> String {
    format!(
        "Изменился статус проверки работы \"{}\". {}",
        record.homework_name,
        record.status.verdict()
    )
}

fn required<'a>(record: &'a Value, field: &str) -> Result<&'a str> {
    match record.get(field) {
        Some(Value::String(v)) if !v.trim().is_empty() => Ok(v.as_str()),
        Some(Value::String(_)) | Some(Value::Null) => {
            tracing::error!(field, "Submission record has an empty field");
            Err(HeraldError::Schema(format!("'{field}' in homework is empty")))
        }
        Some(_) => {
            tracing::error!(field, "Submission record field is not a string");
            Err(HeraldError::Schema(format!(
                "'{field}' in homework is not a string"
            )))
        }
        None => {
            tracing::error!(field, "Submission record is missing a field");
            Err(HeraldError::Schema(format!("homework has no '{field}' key")))
        }
    }
}
