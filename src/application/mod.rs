pub mod use_cases;

pub use use_cases::import_roster::{ImportRosterUseCase, ImportSummary};
