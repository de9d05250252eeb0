pub mod benefits;
pub mod classify;
pub mod commands;
pub mod contracts;
pub mod error;
pub mod migrations;
pub mod report;
mod source;
pub mod state;
pub mod wallet;

pub use contracts::envelope::{FailureEnvelope, SuccessEnvelope};
pub use error::{CoreError, CoreResult};

pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");
