// ============================================================
// DATABASE INFRASTRUCTURE LAYER
// ============================================================
// SQLite persistence for the imported roster

mod employees;

pub use employees::EmployeeRepository;
