use crate::cli::{Commands, WalletCommand};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

fn from_flag(json: bool) -> OutputMode {
    if json { OutputMode::Json } else { OutputMode::Text }
}

pub fn mode_for_command(command: &Commands) -> OutputMode {
    match command {
        Commands::Report { json, .. }
        | Commands::Trend { json, .. }
        | Commands::Rewards { json }
        | Commands::Instruments { json }
        | Commands::Benefits { json, .. } => from_flag(*json),
        Commands::Wallet { command } => match command {
            WalletCommand::Balance { json }
            | WalletCommand::History { json, .. }
            | WalletCommand::Redeem { json, .. }
            | WalletCommand::Invest { json, .. }
            | WalletCommand::Award { json, .. }
            | WalletCommand::ResetHistory { json } => from_flag(*json),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{OutputMode, mode_for_command};
    use crate::cli::parse_from;

    #[test]
    fn json_flag_switches_mode_per_command() {
        let report = parse_from(["karbon", "report", "--json"]);
        assert!(report.is_ok());
        if let Ok(cli) = report {
            assert_eq!(mode_for_command(&cli.command), OutputMode::Json);
        }

        let balance = parse_from(["karbon", "wallet", "balance"]);
        assert!(balance.is_ok());
        if let Ok(cli) = balance {
            assert_eq!(mode_for_command(&cli.command), OutputMode::Text);
        }

        let redeem = parse_from(["karbon", "wallet", "redeem", "ev10", "--json"]);
        assert!(redeem.is_ok());
        if let Ok(cli) = redeem {
            assert_eq!(mode_for_command(&cli.command), OutputMode::Json);
        }
    }
}
