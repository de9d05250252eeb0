pub mod emission;
pub mod rules;

pub use emission::estimate_gco2e;
pub use rules::{RuleOutcome, RuleSet, TxnKind};
