use std::collections::BTreeMap;

use crate::classify::{RuleSet, estimate_gco2e};
use crate::report::types::{CategoryEmission, EnrichedTransaction, Report, Transaction};

/// Guide texts keyed on the presence of a category among the top groups.
const GUIDE_COFFEE: &str =
    "Using a tumbler twice a week can save roughly 150-300 gCO2e per month.";
const GUIDE_TAXI: &str =
    "Replacing one commute taxi ride with public transit saves roughly 200-400 g per month.";
const GUIDE_DEFAULT: &str =
    "Low-carbon categories dominate this period. Keep the current pattern going.";

pub fn enrich(transactions: &[Transaction], rules: &RuleSet) -> Vec<EnrichedTransaction> {
    transactions
        .iter()
        .map(|txn| {
            let outcome = rules.resolve(&txn.merchant, txn.kind);
            let gco2e = estimate_gco2e(txn.amount, &outcome);
            EnrichedTransaction {
                txn: txn.clone(),
                outcome,
                gco2e,
            }
        })
        .collect()
}

/// Builds the full emission report. Pure and deterministic: enrichment order
/// follows input order, category ties break on category id ascending, and an
/// empty input yields a zero-valued report.
pub fn build_report(transactions: &[Transaction], rules: &RuleSet, top_n: usize) -> Report {
    let enriched = enrich(transactions, rules);
    let total_gco2e = enriched.iter().map(|row| row.gco2e).sum::<i64>();

    let mut by_category: BTreeMap<&str, i64> = BTreeMap::new();
    for row in &enriched {
        *by_category.entry(row.outcome.category_id).or_insert(0) += row.gco2e;
    }

    let mut groups = by_category
        .into_iter()
        .map(|(category_id, gco2e)| CategoryEmission {
            category_id: category_id.to_string(),
            gco2e,
        })
        .collect::<Vec<CategoryEmission>>();
    groups.sort_by(|left, right| {
        right
            .gco2e
            .cmp(&left.gco2e)
            .then_with(|| left.category_id.cmp(&right.category_id))
    });
    groups.truncate(top_n);

    let guides = build_guides(&groups);

    Report {
        total_gco2e,
        eco_score: eco_score(total_gco2e),
        top_categories: groups,
        guides,
        enriched,
    }
}

/// Bounded score, monotonically decreasing in total emission. Placeholder
/// heuristic carried over from the demo: 100 minus one point per kilogram.
pub fn eco_score(total_gco2e: i64) -> i64 {
    (100 - total_gco2e / 1000).clamp(0, 100)
}

fn build_guides(top_categories: &[CategoryEmission]) -> Vec<String> {
    let mut guides = Vec::new();
    if top_categories
        .iter()
        .any(|group| group.category_id == "FNB.COFFEE")
    {
        guides.push(GUIDE_COFFEE.to_string());
    }
    if top_categories
        .iter()
        .any(|group| group.category_id == "MOBILITY.TAXI")
    {
        guides.push(GUIDE_TAXI.to_string());
    }
    if guides.is_empty() {
        guides.push(GUIDE_DEFAULT.to_string());
    }
    guides
}
