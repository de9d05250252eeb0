/// A voucher the wallet balance can be exchanged for.
#[derive(Debug, Clone, Copy)]
pub struct Reward {
    pub reward_id: &'static str,
    pub title: &'static str,
    pub cost_c: i64,
    pub note: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstrumentKind {
    Fund,
    Bond,
}

impl InstrumentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fund => "fund",
            Self::Bond => "bond",
        }
    }

    pub fn code_prefix(&self) -> &'static str {
        match self {
            Self::Fund => "FUND",
            Self::Bond => "BOND",
        }
    }
}

/// An investable product with a minimum coin stake.
#[derive(Debug, Clone, Copy)]
pub struct Instrument {
    pub instrument_id: &'static str,
    pub kind: InstrumentKind,
    pub title: &'static str,
    pub min_stake_c: i64,
    pub note: Option<&'static str>,
}

pub const REWARDS: [Reward; 5] = [
    Reward {
        reward_id: "ev10",
        title: "EV charging credit 10 kWh",
        cost_c: 10,
        note: Some("Mobile barcode"),
    },
    Reward {
        reward_id: "ev30",
        title: "EV charging credit 30 kWh",
        cost_c: 30,
        note: None,
    },
    Reward {
        reward_id: "appl1",
        title: "Eco air purifier discount coupon",
        cost_c: 80,
        note: None,
    },
    Reward {
        reward_id: "fash1",
        title: "Recycled fashion brand gift card",
        cost_c: 30,
        note: None,
    },
    Reward {
        reward_id: "re100",
        title: "Renewable energy plan voucher",
        cost_c: 80,
        note: None,
    },
];

pub const INSTRUMENTS: [Instrument; 3] = [
    Instrument {
        instrument_id: "f1",
        kind: InstrumentKind::Fund,
        title: "ESG index fund A",
        min_stake_c: 10,
        note: Some("Tracks a sustainability index"),
    },
    Instrument {
        instrument_id: "f2",
        kind: InstrumentKind::Fund,
        title: "Green energy theme fund",
        min_stake_c: 20,
        note: Some("Renewables-heavy, expect volatility"),
    },
    Instrument {
        instrument_id: "b1",
        kind: InstrumentKind::Bond,
        title: "Carbon reduction bond 2025-1",
        min_stake_c: 15,
        note: Some("Project financing with verified abatement"),
    },
];

pub fn find_reward(reward_id: &str) -> Option<&'static Reward> {
    REWARDS
        .iter()
        .find(|reward| reward.reward_id.eq_ignore_ascii_case(reward_id.trim()))
}

pub fn find_instrument(instrument_id: &str) -> Option<&'static Instrument> {
    INSTRUMENTS.iter().find(|instrument| {
        instrument
            .instrument_id
            .eq_ignore_ascii_case(instrument_id.trim())
    })
}
