use std::path::Path;

use chrono::{DateTime, Utc};

use crate::commands::common::coin_entry_contract;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{
    AwardData, InvestData, RedeemData, ResetHistoryData, WalletBalanceData, WalletHistoryData,
};
use crate::wallet::ops;
use crate::wallet::store::{SqliteWalletStore, WalletStore};
use crate::wallet::types::CoinEntryKind;
use crate::{CoreError, CoreResult};

#[derive(Debug, Default)]
pub struct WalletRunOptions<'a> {
    pub home_override: Option<&'a Path>,
    pub now_override: Option<DateTime<Utc>>,
}

pub fn run_balance() -> CoreResult<SuccessEnvelope> {
    run_balance_with_options(WalletRunOptions::default())
}

#[doc(hidden)]
pub fn run_balance_with_options(options: WalletRunOptions<'_>) -> CoreResult<SuccessEnvelope> {
    let mut store = SqliteWalletStore::open(options.home_override)?;
    let state = ops::balance(&mut store)?;
    success(
        "wallet balance",
        WalletBalanceData {
            balance_c: state.balance,
            last_awarded_month: state.last_awarded_month,
        },
    )
}

pub fn run_history(kind: Option<&str>, search: Option<&str>) -> CoreResult<SuccessEnvelope> {
    run_history_with_options(kind, search, WalletRunOptions::default())
}

#[doc(hidden)]
pub fn run_history_with_options(
    kind: Option<&str>,
    search: Option<&str>,
    options: WalletRunOptions<'_>,
) -> CoreResult<SuccessEnvelope> {
    let kind_filter = parse_kind_filter(kind)?;
    let mut store = SqliteWalletStore::open(options.home_override)?;
    let state = ops::balance(&mut store)?;
    let entries = ops::history(&mut store, kind_filter, search)?;

    success(
        "wallet history",
        WalletHistoryData {
            balance_c: state.balance,
            kind_filter: kind_filter.map(|value| value.as_str().to_string()),
            search: search.map(str::to_string),
            entries: entries.iter().map(coin_entry_contract).collect(),
        },
    )
}

pub fn run_redeem(reward_id: &str) -> CoreResult<SuccessEnvelope> {
    run_redeem_with_options(reward_id, WalletRunOptions::default())
}

#[doc(hidden)]
pub fn run_redeem_with_options(
    reward_id: &str,
    options: WalletRunOptions<'_>,
) -> CoreResult<SuccessEnvelope> {
    let now = resolve_now(&options);
    let mut store = SqliteWalletStore::open(options.home_override)?;
    let (entry, state) = ops::redeem(&mut store, reward_id, now)?;

    let code = entry.id.clone();
    success(
        "wallet redeem",
        RedeemData {
            reward_id: reward_id.trim().to_ascii_lowercase(),
            title: entry.title,
            cost_c: entry.amount_c,
            code,
            balance_c: state.balance,
        },
    )
}

pub fn run_invest(instrument_id: &str) -> CoreResult<SuccessEnvelope> {
    run_invest_with_options(instrument_id, WalletRunOptions::default())
}

#[doc(hidden)]
pub fn run_invest_with_options(
    instrument_id: &str,
    options: WalletRunOptions<'_>,
) -> CoreResult<SuccessEnvelope> {
    let now = resolve_now(&options);
    let mut store = SqliteWalletStore::open(options.home_override)?;
    let (entry, state) = ops::invest(&mut store, instrument_id, now)?;

    let code = entry.id.clone();
    success(
        "wallet invest",
        InvestData {
            instrument_id: instrument_id.trim().to_ascii_lowercase(),
            title: entry.title,
            staked_c: entry.amount_c,
            code,
            balance_c: state.balance,
        },
    )
}

pub fn run_award(saving_g: i64) -> CoreResult<SuccessEnvelope> {
    run_award_with_options(saving_g, WalletRunOptions::default())
}

#[doc(hidden)]
pub fn run_award_with_options(
    saving_g: i64,
    options: WalletRunOptions<'_>,
) -> CoreResult<SuccessEnvelope> {
    if saving_g < 0 {
        return Err(CoreError::invalid_argument_for_command(
            "`saving-g` must be a non-negative gram amount.",
            Some("wallet award"),
        ));
    }

    let now = resolve_now(&options);
    let mut store = SqliteWalletStore::open(options.home_override)?;
    let outcome = ops::maybe_auto_award(&mut store, saving_g, now)?;

    success(
        "wallet award",
        AwardData {
            awarded: outcome.awarded,
            month: outcome.month,
            amount_c: outcome.amount_c,
            balance_c: outcome.balance_c,
            skipped_reason: outcome.skipped_reason.map(str::to_string),
        },
    )
}

pub fn run_reset_history() -> CoreResult<SuccessEnvelope> {
    run_reset_history_with_options(WalletRunOptions::default())
}

#[doc(hidden)]
pub fn run_reset_history_with_options(
    options: WalletRunOptions<'_>,
) -> CoreResult<SuccessEnvelope> {
    let mut store = SqliteWalletStore::open(options.home_override)?;
    let removed = ops::reset_history(&mut store)?;
    let state = store.load_state()?;

    success(
        "wallet reset-history",
        ResetHistoryData {
            removed_entries: removed,
            balance_c: state.balance,
        },
    )
}

fn parse_kind_filter(kind: Option<&str>) -> CoreResult<Option<CoinEntryKind>> {
    let Some(raw) = kind else {
        return Ok(None);
    };
    match CoinEntryKind::parse(raw) {
        Some(parsed) => Ok(Some(parsed)),
        None => Err(CoreError::invalid_argument_for_command(
            &format!("`kind` must be one of redeem, invest, award; got \"{raw}\"."),
            Some("wallet history"),
        )),
    }
}

fn resolve_now(options: &WalletRunOptions<'_>) -> DateTime<Utc> {
    options.now_override.unwrap_or_else(Utc::now)
}
