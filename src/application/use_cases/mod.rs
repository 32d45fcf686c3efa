pub mod import_roster;
