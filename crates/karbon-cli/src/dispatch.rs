use karbon_core::commands;
use karbon_core::{CoreResult, SuccessEnvelope};

use crate::cli::{Cli, Commands, WalletCommand};

pub fn dispatch(cli: &Cli) -> CoreResult<SuccessEnvelope> {
    match &cli.command {
        Commands::Report {
            from,
            to,
            top,
            input,
            ..
        } => commands::report::run(
            from.as_ref().map(|value| value.as_str()),
            to.as_ref().map(|value| value.as_str()),
            *top,
            input.as_deref(),
        ),
        Commands::Trend {
            from, to, input, ..
        } => commands::trend::run(
            from.as_ref().map(|value| value.as_str()),
            to.as_ref().map(|value| value.as_str()),
            input.as_deref(),
        ),
        Commands::Wallet { command } => match command {
            WalletCommand::Balance { .. } => commands::wallet::run_balance(),
            WalletCommand::History { kind, search, .. } => {
                commands::wallet::run_history(kind.as_deref(), search.as_deref())
            }
            WalletCommand::Redeem { reward_id, .. } => commands::wallet::run_redeem(reward_id),
            WalletCommand::Invest { instrument_id, .. } => {
                commands::wallet::run_invest(instrument_id)
            }
            WalletCommand::Award { saving_g, .. } => commands::wallet::run_award(*saving_g),
            WalletCommand::ResetHistory { .. } => commands::wallet::run_reset_history(),
        },
        Commands::Rewards { .. } => commands::catalogs::run_rewards(),
        Commands::Instruments { .. } => commands::catalogs::run_instruments(),
        Commands::Benefits {
            esg,
            deposit,
            transit,
            zerowaste,
            other,
            ..
        } => commands::benefits::run(*esg, *deposit, *transit, *zerowaste, *other),
    }
}
