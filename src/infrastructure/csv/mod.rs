// ============================================================
// CSV INFRASTRUCTURE LAYER
// ============================================================
// Headerless roster file reading with encoding fallback

mod roster_reader;

pub use roster_reader::RosterReader;
