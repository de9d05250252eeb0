pub mod benefits;
pub mod catalogs;
pub mod common;
pub mod report;
pub mod trend;
pub mod wallet;
