pub mod builder;
pub mod date;
pub mod trend;
pub mod types;

pub use builder::build_report;
pub use trend::build_trend;
pub use types::{CategoryEmission, EnrichedTransaction, Report, Transaction, TrendPoint};
