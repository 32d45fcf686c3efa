pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{ImportRosterUseCase, ImportSummary};
pub use domain::roster::ImportConfig;
