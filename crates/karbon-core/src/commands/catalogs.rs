use crate::CoreResult;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{InstrumentData, InstrumentListData, RewardData, RewardListData};
use crate::wallet::catalog::{INSTRUMENTS, REWARDS};

pub fn run_rewards() -> CoreResult<SuccessEnvelope> {
    let rewards = REWARDS
        .iter()
        .map(|reward| RewardData {
            reward_id: reward.reward_id.to_string(),
            title: reward.title.to_string(),
            cost_c: reward.cost_c,
            note: reward.note.map(str::to_string),
        })
        .collect::<Vec<RewardData>>();

    success("rewards", RewardListData { rewards })
}

pub fn run_instruments() -> CoreResult<SuccessEnvelope> {
    let instruments = INSTRUMENTS
        .iter()
        .map(|instrument| InstrumentData {
            instrument_id: instrument.instrument_id.to_string(),
            kind: instrument.kind.as_str().to_string(),
            title: instrument.title.to_string(),
            min_stake_c: instrument.min_stake_c,
            note: instrument.note.map(str::to_string),
        })
        .collect::<Vec<InstrumentData>>();

    success("instruments", InstrumentListData { instruments })
}
