/// Datetime parsing, formatting, and zone-offset helpers
pub mod datetime;
