pub mod error;

// Roster import module
pub mod roster;
