use crate::classify::rules::RuleOutcome;

/// Estimated emission in grams CO2e for a spend of `amount` currency units
/// under the resolved rule: `round((amount / 1000) * factor * multiplier)`.
/// Rounding is half-up; the result is never negative.
pub fn estimate_gco2e(amount: i64, outcome: &RuleOutcome) -> i64 {
    let grams =
        (amount as f64 / 1000.0) * outcome.factor_g_per_1000 * outcome.effective_multiplier();
    grams.round().max(0.0) as i64
}
