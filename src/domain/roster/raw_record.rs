// ============================================================
// RAW ROSTER RECORD
// ============================================================
// One source row zipped onto the fixed positional field list

use serde::{Deserialize, Serialize};

use crate::domain::error::{AppError, Result};

/// Positional field names of the source file, in file order.
/// There is no header row; this list IS the schema of the input.
pub const FIELD_NAMES: [&str; 21] = [
    "name",
    "empno",
    "state",
    "zip",
    "dob",
    "age",
    "sex",
    "marital_status",
    "citizenship",
    "hisp",
    "race",
    "hire_date",
    "termination_date",
    "term_reason",
    "status",
    "department",
    "position",
    "hourly_rate",
    "manager",
    "source",
    "performance_score",
];

/// Number of columns every source row must carry.
pub const FIELD_COUNT: usize = FIELD_NAMES.len();

/// A single unnormalized roster row. All values are raw strings as read
/// from the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRecord {
    pub name: String,
    pub empno: String,
    pub state: String,
    pub zip: String,
    pub dob: String,
    pub age: String,
    pub sex: String,
    pub marital_status: String,
    pub citizenship: String,
    pub hisp: String,
    pub race: String,
    pub hire_date: String,
    pub termination_date: String,
    pub term_reason: String,
    pub status: String,
    pub department: String,
    pub position: String,
    pub hourly_rate: String,
    pub manager: String,
    pub source: String,
    pub performance_score: String,
}

impl RawRecord {
    /// Build a record from one row of positional values.
    ///
    /// The row must carry exactly `FIELD_COUNT` values: a shorter row would
    /// zip onto the wrong field names, a longer one would silently lose its
    /// tail.
    pub fn from_row(index: usize, values: &[&str]) -> Result<Self> {
        if values.len() != FIELD_COUNT {
            return Err(AppError::FormatError(format!(
                "row {}: expected {} fields, found {}",
                index + 1,
                FIELD_COUNT,
                values.len()
            )));
        }

        Ok(Self {
            name: values[0].to_string(),
            empno: values[1].to_string(),
            state: values[2].to_string(),
            zip: values[3].to_string(),
            dob: values[4].to_string(),
            age: values[5].to_string(),
            sex: values[6].to_string(),
            marital_status: values[7].to_string(),
            citizenship: values[8].to_string(),
            hisp: values[9].to_string(),
            race: values[10].to_string(),
            hire_date: values[11].to_string(),
            termination_date: values[12].to_string(),
            term_reason: values[13].to_string(),
            status: values[14].to_string(),
            department: values[15].to_string(),
            position: values[16].to_string(),
            hourly_rate: values[17].to_string(),
            manager: values[18].to_string(),
            source: values[19].to_string(),
            performance_score: values[20].to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_values() -> Vec<&'static str> {
        vec![
            "Smith, John",
            "E1001",
            "CA",
            "94000",
            "01/15/1980",
            "44",
            "M",
            "Married",
            "US",
            "N",
            "White",
            "03/01/2015",
            "NULL",
            "",
            "Active",
            "Sales",
            "Rep",
            "25.50",
            "Jane Doe",
            "Referral",
            "Meets",
        ]
    }

    #[test]
    fn test_from_row_maps_fields_positionally() {
        let values = sample_values();
        let record = RawRecord::from_row(0, &values).unwrap();

        assert_eq!(record.name, "Smith, John");
        assert_eq!(record.empno, "E1001");
        assert_eq!(record.dob, "01/15/1980");
        assert_eq!(record.hisp, "N");
        assert_eq!(record.race, "White");
        assert_eq!(record.termination_date, "NULL");
        assert_eq!(record.performance_score, "Meets");
    }

    #[test]
    fn test_short_row_is_format_error() {
        let mut values = sample_values();
        values.pop();

        let err = RawRecord::from_row(3, &values).unwrap_err();
        match err {
            AppError::FormatError(msg) => {
                assert!(msg.contains("row 4"));
                assert!(msg.contains("expected 21 fields, found 20"));
            }
            other => panic!("expected FormatError, got {:?}", other),
        }
    }

    #[test]
    fn test_long_row_is_format_error() {
        let mut values = sample_values();
        values.push("extra");

        let err = RawRecord::from_row(0, &values).unwrap_err();
        assert!(matches!(err, AppError::FormatError(_)));
    }

    #[test]
    fn test_field_names_match_field_count() {
        assert_eq!(FIELD_NAMES.len(), FIELD_COUNT);
        assert_eq!(FIELD_COUNT, 21);
    }
}
