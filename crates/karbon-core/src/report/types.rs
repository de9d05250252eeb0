use chrono::NaiveDateTime;

use crate::classify::{RuleOutcome, TxnKind};

/// One card transaction as supplied by a source. Never mutated.
#[derive(Debug, Clone)]
pub struct Transaction {
    pub txn_id: String,
    pub amount: i64,
    pub merchant: String,
    pub ts: NaiveDateTime,
    pub channel: String,
    pub kind: TxnKind,
}

/// A transaction plus its resolved rule and estimated emission. Derived on
/// every report build and never persisted.
#[derive(Debug, Clone)]
pub struct EnrichedTransaction {
    pub txn: Transaction,
    pub outcome: RuleOutcome,
    pub gco2e: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryEmission {
    pub category_id: String,
    pub gco2e: i64,
}

#[derive(Debug, Clone)]
pub struct Report {
    pub total_gco2e: i64,
    pub eco_score: i64,
    pub top_categories: Vec<CategoryEmission>,
    pub guides: Vec<String>,
    pub enriched: Vec<EnrichedTransaction>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendPoint {
    pub day: String,
    pub gco2e: i64,
}
