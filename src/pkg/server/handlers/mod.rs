pub mod players;
pub mod probes;
pub mod reports;
pub mod ui;
