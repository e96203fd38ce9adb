pub mod alerts;
pub mod connection;
pub mod stats;

pub use alerts::{AlertRepository, SqliteAlerts};
pub use connection::{init_db, Database};
pub use stats::SqliteStats;
