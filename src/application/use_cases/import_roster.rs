// ============================================================
// ROSTER IMPORT USE CASE
// ============================================================
// Orchestrate read, normalization, and full-replace load

use std::path::Path;

use tracing::{error, info};

use crate::domain::error::{AppError, Result};
use crate::domain::roster::{Employee, ImportConfig, RawRecord};
use crate::infrastructure::csv::RosterReader;
use crate::infrastructure::db::EmployeeRepository;

/// Outcome of a completed import run.
#[derive(Debug, Clone)]
pub struct ImportSummary {
    pub rows_read: usize,
    pub rows_inserted: u64,
    pub rows_skipped: usize,
}

/// Roster import use case
pub struct ImportRosterUseCase {
    config: ImportConfig,
}

impl ImportRosterUseCase {
    pub fn new(config: ImportConfig) -> Result<Self> {
        config.validate().map_err(AppError::ValidationError)?;
        Ok(Self { config })
    }

    /// Run the full import: read the roster file, normalize each record,
    /// then replace the employees table with the survivors.
    ///
    /// Structural file errors and store errors are fatal. A record that
    /// fails normalization is reported and skipped; the run only fails on
    /// skips when not a single record survived.
    pub async fn run(&self) -> Result<ImportSummary> {
        let csv_path = Path::new(&self.config.csv_path);
        let raw_records = RosterReader::new().read_file(csv_path)?;
        info!(
            rows = raw_records.len(),
            csv = %self.config.csv_path,
            "roster file read"
        );

        let (employees, rows_skipped) = normalize_all(&raw_records);
        if employees.is_empty() && !raw_records.is_empty() {
            return Err(AppError::ParseError(format!(
                "no record in {} survived normalization ({} skipped)",
                self.config.csv_path, rows_skipped
            )));
        }

        let repository = EmployeeRepository::connect(Path::new(&self.config.db_path)).await?;
        repository.reset_table().await?;
        let rows_inserted = repository.insert_all(&employees).await?;

        info!(
            rows_read = raw_records.len(),
            rows_inserted,
            rows_skipped,
            db = %self.config.db_path,
            "import complete"
        );

        Ok(ImportSummary {
            rows_read: raw_records.len(),
            rows_inserted,
            rows_skipped,
        })
    }
}

/// Normalize every record, skipping and reporting the ones that fail.
///
/// Each skipped record is logged with its row number, raw contents, and the
/// reason; the remaining records are unaffected.
fn normalize_all(raw_records: &[RawRecord]) -> (Vec<Employee>, usize) {
    let mut employees = Vec::with_capacity(raw_records.len());
    let mut skipped = 0;

    for (index, raw) in raw_records.iter().enumerate() {
        match Employee::from_raw(raw) {
            Ok(employee) => employees.push(employee),
            Err(err) => {
                let record_json =
                    serde_json::to_string(raw).unwrap_or_else(|_| format!("{:?}", raw));
                error!(row = index + 1, error = %err, record = %record_json, "skipping record");
                skipped += 1;
            }
        }
    }

    (employees, skipped)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = "\
\"Smith, John\",E1001,CA,94000,01/15/1980,44,M,Married,US,N,White,03/01/2015,NULL,,Active,Sales,Rep,25.50,Jane Doe,Referral,Meets
Jane Doe,E1002,NY,10001,07/04/1975,49,F,Single,US,N,Asian,06/15/2010,NULL,,Active,Engineering,Manager,48.75,Sam Lee,Agency,Exceeds
\"Nguyen, Linh\",E1005,WA,98101,09/22/1986,37,F,Married,US,N,Asian,04/05/2012,null,,Active,Engineering,Lead,52.10,Sam Lee,Agency,Exceeds
";

    #[test]
    fn test_normalize_all_skips_bad_records_and_keeps_the_rest() {
        let raw_records = RosterReader::new().read_content(SAMPLE_CSV).unwrap();
        let (employees, skipped) = normalize_all(&raw_records);

        // Row 2 has no comma in the name field.
        assert_eq!(skipped, 1);
        assert_eq!(employees.len(), 2);
        assert_eq!(employees[0].name, "John Smith");
        assert_eq!(employees[1].name, "Linh Nguyen");
        assert_eq!(employees[1].termination_date, "null");
    }

    #[test]
    fn test_validation_rejects_empty_paths() {
        let config = ImportConfig {
            csv_path: String::new(),
            ..Default::default()
        };
        let err = ImportRosterUseCase::new(config).err().unwrap();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_content_to_store_pipeline() {
        let raw_records = RosterReader::new().read_content(SAMPLE_CSV).unwrap();
        let (employees, skipped) = normalize_all(&raw_records);

        let repository = EmployeeRepository::connect_memory().await.unwrap();
        repository.reset_table().await.unwrap();
        let inserted = repository.insert_all(&employees).await.unwrap();

        assert_eq!(inserted, 2);
        assert_eq!(skipped, 1);
        assert_eq!(repository.count().await.unwrap(), 2);
    }
}
