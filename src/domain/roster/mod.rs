// ============================================================
// ROSTER DOMAIN LAYER
// ============================================================
// Core types and transforms for the employee roster import

mod dates;
mod employee;
mod import_config;
mod raw_record;

pub use dates::{convert_mdy_date, is_no_termination, NO_TERMINATION_SENTINEL};
pub use employee::Employee;
pub use import_config::{ImportConfig, ENV_ROSTER_CSV_PATH, ENV_ROSTER_DB_PATH};
pub use raw_record::{RawRecord, FIELD_COUNT, FIELD_NAMES};
