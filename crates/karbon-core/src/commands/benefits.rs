use crate::benefits::{BenefitInputs, estimate};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::BenefitsData;
use crate::{CoreError, CoreResult};

#[derive(Debug, Default)]
pub struct BenefitsRunOptions {
    pub esg_score: Option<i64>,
    pub deposit: Option<i64>,
    pub transit_spend: Option<i64>,
    pub zerowaste_spend: Option<i64>,
    pub other_spend: Option<i64>,
}

pub fn run(
    esg_score: Option<i64>,
    deposit: Option<i64>,
    transit_spend: Option<i64>,
    zerowaste_spend: Option<i64>,
    other_spend: Option<i64>,
) -> CoreResult<SuccessEnvelope> {
    run_with_options(BenefitsRunOptions {
        esg_score,
        deposit,
        transit_spend,
        zerowaste_spend,
        other_spend,
    })
}

#[doc(hidden)]
pub fn run_with_options(options: BenefitsRunOptions) -> CoreResult<SuccessEnvelope> {
    let esg_score = match options.esg_score {
        Some(value) if (0..=100).contains(&value) => value,
        Some(_) => {
            return Err(CoreError::invalid_argument_for_command(
                "`esg` must be a score between 0 and 100.",
                Some("benefits"),
            ));
        }
        None => demo_score()?,
    };

    let defaults = BenefitInputs::default();
    let inputs = BenefitInputs {
        esg_score,
        deposit: non_negative(options.deposit, defaults.deposit, "deposit")?,
        transit_spend: non_negative(options.transit_spend, defaults.transit_spend, "transit")?,
        zerowaste_spend: non_negative(
            options.zerowaste_spend,
            defaults.zerowaste_spend,
            "zerowaste",
        )?,
        other_spend: non_negative(options.other_spend, defaults.other_spend, "other")?,
    };

    let result = estimate(&inputs);
    success(
        "benefits",
        BenefitsData {
            esg_score,
            bonus_rate_pp: result.bonus_rate_pp,
            annual_bonus_interest: result.annual_bonus_interest,
            monthly_card_reward: result.monthly_card_reward,
        },
    )
}

/// Without an explicit score, use the eco score of the bundled demo
/// statement, mirroring the report-to-benefits handoff.
fn demo_score() -> CoreResult<i64> {
    let rules = crate::classify::RuleSet::builtin()?;
    let transactions = crate::source::fixture::demo_transactions();
    let report = crate::report::builder::build_report(&transactions, &rules, 3);
    Ok(report.eco_score)
}

fn non_negative(value: Option<i64>, default: i64, field: &str) -> CoreResult<i64> {
    match value {
        Some(amount) if amount >= 0 => Ok(amount),
        Some(_) => Err(CoreError::invalid_argument_for_command(
            &format!("`{field}` must be a non-negative amount."),
            Some("benefits"),
        )),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_the_demo_score() {
        let envelope = run(None, None, None, None, None);
        assert!(envelope.is_ok());
        if let Ok(result) = envelope {
            assert_eq!(result.command, "benefits");
            assert_eq!(result.data["esg_score"], 92);
            assert_eq!(result.data["annual_bonus_interest"], 27_600);
            assert_eq!(result.data["monthly_card_reward"], 10_100);
        }
    }

    #[test]
    fn out_of_range_score_is_rejected() {
        let envelope = run(Some(120), None, None, None, None);
        assert!(envelope.is_err());
        if let Err(error) = envelope {
            assert_eq!(error.code, "invalid_argument");
        }
    }

    #[test]
    fn negative_spend_is_rejected() {
        let envelope = run(Some(80), None, Some(-1), None, None);
        assert!(envelope.is_err());
    }
}
