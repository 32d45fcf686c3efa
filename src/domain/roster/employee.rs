// ============================================================
// NORMALIZED EMPLOYEE
// ============================================================
// Output shape of the per-record cleanup pass

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::dates::{convert_mdy_date, is_no_termination};
use super::raw_record::RawRecord;
use crate::domain::error::{AppError, Result};

static NAME_SPLIT_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*,\s*").unwrap());

/// A fully normalized roster record, ready for storage.
///
/// `hisp` and `race` are read from the source but not carried here; the
/// destination table has no columns for them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    /// Recomposed as "First Last".
    pub name: String,
    pub first_name: String,
    pub last_name: String,
    pub empno: String,
    pub state: String,
    pub zip: String,
    /// ISO date, YYYY-MM-DD.
    pub dob: String,
    pub age: Option<i64>,
    pub sex: String,
    pub marital_status: String,
    pub citizenship: String,
    /// ISO date, YYYY-MM-DD.
    pub hire_date: String,
    /// ISO date, or the unconverted sentinel when not terminated.
    pub termination_date: String,
    pub term_reason: String,
    pub status: String,
    pub department: String,
    pub position: String,
    pub hourly_rate: Option<f64>,
    pub manager: String,
    pub source: String,
    pub performance_score: String,
}

impl Employee {
    /// Normalize one raw record into a new `Employee`.
    ///
    /// The raw record is never mutated; every failure reports the offending
    /// field and reason as a `ParseError`.
    pub fn from_raw(raw: &RawRecord) -> Result<Self> {
        let (last_name, first_name) = split_name(&raw.name)?;

        let dob = convert_mdy_date("dob", &raw.dob)?;
        let hire_date = convert_mdy_date("hire_date", &raw.hire_date)?;
        let termination_date = if is_no_termination(&raw.termination_date) {
            raw.termination_date.trim().to_string()
        } else {
            convert_mdy_date("termination_date", &raw.termination_date)?
        };

        let age = parse_optional_int("age", &raw.age)?;
        let hourly_rate = parse_optional_float("hourly_rate", &raw.hourly_rate)?;

        Ok(Self {
            name: format!("{} {}", first_name, last_name),
            first_name,
            last_name,
            empno: raw.empno.trim().to_string(),
            state: raw.state.trim().to_string(),
            zip: raw.zip.trim().to_string(),
            dob,
            age,
            sex: raw.sex.trim().to_string(),
            marital_status: raw.marital_status.trim().to_string(),
            citizenship: raw.citizenship.trim().to_string(),
            hire_date,
            termination_date,
            term_reason: raw.term_reason.trim().to_string(),
            status: raw.status.trim().to_string(),
            department: raw.department.trim().to_string(),
            position: raw.position.trim().to_string(),
            hourly_rate,
            manager: raw.manager.trim().to_string(),
            source: raw.source.trim().to_string(),
            performance_score: raw.performance_score.trim().to_string(),
        })
    }
}

/// Split a "Last, First" name into `(last, first)`.
///
/// The separator is a comma optionally surrounded by whitespace; the split
/// must yield exactly two non-empty parts.
fn split_name(name: &str) -> Result<(String, String)> {
    let parts: Vec<&str> = NAME_SPLIT_PATTERN.split(name.trim()).collect();
    match parts.as_slice() {
        [last, first] if !last.trim().is_empty() && !first.trim().is_empty() => {
            Ok((last.trim().to_string(), first.trim().to_string()))
        }
        _ => Err(AppError::ParseError(format!(
            "name '{}' does not split into exactly two parts on a comma",
            name
        ))),
    }
}

fn parse_optional_int(field: &str, value: &str) -> Result<Option<i64>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed.parse::<i64>().map(Some).map_err(|e| {
        AppError::ParseError(format!("{}: invalid integer '{}': {}", field, value, e))
    })
}

fn parse_optional_float(field: &str, value: &str) -> Result<Option<f64>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed.parse::<f64>().map(Some).map_err(|e| {
        AppError::ParseError(format!("{}: invalid number '{}': {}", field, value, e))
    })
}
