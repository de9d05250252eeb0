//! Green-banking benefit estimates driven by the eco score: a deposit rate
//! bonus capped at +0.3 percentage points and a capped monthly card reward.

pub const MAX_BONUS_RATE_PP: f64 = 0.3;
pub const MONTHLY_REWARD_CAP: i64 = 20_000;

pub const DEFAULT_DEPOSIT: i64 = 10_000_000;
pub const DEFAULT_TRANSIT_SPEND: i64 = 80_000;
pub const DEFAULT_ZEROWASTE_SPEND: i64 = 50_000;
pub const DEFAULT_OTHER_SPEND: i64 = 120_000;

#[derive(Debug, Clone, Copy)]
pub struct BenefitInputs {
    pub esg_score: i64,
    pub deposit: i64,
    pub transit_spend: i64,
    pub zerowaste_spend: i64,
    pub other_spend: i64,
}

impl Default for BenefitInputs {
    fn default() -> Self {
        Self {
            esg_score: 0,
            deposit: DEFAULT_DEPOSIT,
            transit_spend: DEFAULT_TRANSIT_SPEND,
            zerowaste_spend: DEFAULT_ZEROWASTE_SPEND,
            other_spend: DEFAULT_OTHER_SPEND,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenefitEstimate {
    pub bonus_rate_pp: f64,
    pub annual_bonus_interest: i64,
    pub monthly_card_reward: i64,
}

/// Rate bonus scales linearly with the score (80 points = 0.24 %p,
/// 100 points = 0.30 %p). Card reward is 5% on transit and zero-waste
/// spend and 3% elsewhere, capped per month.
pub fn estimate(inputs: &BenefitInputs) -> BenefitEstimate {
    let bonus_rate_pp = (inputs.esg_score as f64 / 100.0 * MAX_BONUS_RATE_PP).min(MAX_BONUS_RATE_PP);
    let annual_bonus_interest = (inputs.deposit as f64 * (bonus_rate_pp / 100.0)).floor() as i64;

    let monthly_raw = inputs.transit_spend as f64 * 0.05
        + inputs.zerowaste_spend as f64 * 0.05
        + inputs.other_spend as f64 * 0.03;
    let monthly_card_reward = (monthly_raw.round() as i64).min(MONTHLY_REWARD_CAP);

    BenefitEstimate {
        bonus_rate_pp,
        annual_bonus_interest,
        monthly_card_reward,
    }
}
