use std::collections::BTreeMap;

use crate::report::types::{EnrichedTransaction, TrendPoint};

/// Per-day emission series over enriched transactions. Keys are zero-padded
/// `MM-DD` strings, so BTreeMap order is calendar order within a year.
pub fn build_trend(enriched: &[EnrichedTransaction]) -> Vec<TrendPoint> {
    let mut by_day: BTreeMap<String, i64> = BTreeMap::new();
    for row in enriched {
        let day = row.txn.ts.format("%m-%d").to_string();
        *by_day.entry(day).or_insert(0) += row.gco2e;
    }

    by_day
        .into_iter()
        .map(|(day, gco2e)| TrendPoint { day, gco2e })
        .collect()
}
