mod cli;
mod dispatch;
mod output;
mod stdout_io;

use std::process::ExitCode;

use clap::{Parser, error::ErrorKind};
use karbon_core::CoreError;
use stdout_io::write_stdout_text;

const ROOT_HELP: &str = "Karbon - carbon receipt and rewards toolkit

Usage:
  karbon <command>

Start here:
  karbon report
  karbon rewards
  karbon wallet balance
";

const TOP_LEVEL_HELP: &str = "Karbon — carbon receipt and rewards toolkit

USAGE: karbon <command>

See your carbon receipt:
  karbon report                                           Total, top categories, eco score and guides
  karbon report --from 2025-08-01 --to 2025-08-31         Narrow the period
  karbon report --input txns.json                         Use your own JSON/CSV transactions
  karbon trend                                            Per-day emission series

Run the coin wallet:
  karbon wallet balance                                   Current balance
  karbon wallet award --saving-g 8028                     Monthly payout for last month's saving
  karbon rewards                                          List redeemable rewards
  karbon wallet redeem ev10                               Exchange coins for a voucher
  karbon instruments                                      List investable instruments
  karbon wallet invest f1                                 Stake coins into an instrument
  karbon wallet history                                   All wallet activity, newest first

Estimate banking perks:
  karbon benefits                                         Rate bonus and card reward from the eco score

Need details?
  Run `karbon report --help` for the transaction input schema,
  or `karbon <command> --help` for command usage.
";

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(code) => code,
    }
}

fn run() -> Result<ExitCode, ExitCode> {
    let raw_args = std::env::args().collect::<Vec<String>>();
    if raw_args.len() == 1 {
        if write_stdout_text(ROOT_HELP).is_err() {
            return Err(ExitCode::from(2));
        }
        return Ok(ExitCode::SUCCESS);
    }

    let parsed = cli::Cli::try_parse();
    let cli = match parsed {
        Ok(value) => value,
        Err(err) => {
            if matches!(
                err.kind(),
                ErrorKind::DisplayHelp
                    | ErrorKind::DisplayVersion
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) {
                if matches!(
                    err.kind(),
                    ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                ) && is_top_level_help_request(&raw_args)
                {
                    if write_stdout_text(TOP_LEVEL_HELP).is_err() {
                        return Err(ExitCode::from(2));
                    }
                } else if write_stdout_text(&err.to_string()).is_err() {
                    return Err(ExitCode::from(2));
                }
                return Ok(ExitCode::SUCCESS);
            }

            let command_hint = if matches!(
                err.kind(),
                ErrorKind::MissingRequiredArgument
                    | ErrorKind::InvalidValue
                    | ErrorKind::ValueValidation
                    | ErrorKind::WrongNumberOfValues
                    | ErrorKind::UnknownArgument
                    | ErrorKind::InvalidSubcommand
            ) {
                command_path_from_args(&raw_args)
            } else {
                None
            };
            let clean_message = strip_clap_boilerplate(&err.to_string());
            let parse_error =
                CoreError::invalid_argument_for_command(&clean_message, command_hint.as_deref());
            let mode = infer_requested_output_mode(&raw_args);
            if output::print_failure(&parse_error, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            return Err(ExitCode::from(1));
        }
    };
    let mode = output::mode_for_command(&cli.command);

    let dispatched = dispatch::dispatch(&cli);
    match dispatched {
        Ok(success) => {
            if output::print_success(&success, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            if output::print_failure(&error, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            Err(exit_code_for_error(&error))
        }
    }
}

fn is_top_level_help_request(raw_args: &[String]) -> bool {
    raw_args.len() == 2 && matches!(raw_args[1].as_str(), "--help" | "-h")
}

/// Strips clap's trailing boilerplate (Usage line, "For more information"
/// hint) so the "What to do next" section is the single source of guidance.
fn strip_clap_boilerplate(message: &str) -> String {
    let trimmed = if let Some(pos) = message.find("\n\nUsage:") {
        &message[..pos]
    } else if let Some(pos) = message.find("\nFor more information") {
        &message[..pos]
    } else {
        message
    };
    trimmed.trim_end().to_string()
}

/// Builds the subcommand path from raw CLI args for use in help hints.
fn command_path_from_args(raw_args: &[String]) -> Option<String> {
    let non_flags: Vec<&str> = raw_args
        .iter()
        .skip(1)
        .filter(|value| !value.starts_with('-'))
        .map(String::as_str)
        .collect();
    if non_flags.is_empty() {
        return None;
    }

    let hint = match non_flags.as_slice() {
        ["wallet", "balance", ..] => Some("wallet balance"),
        ["wallet", "history", ..] => Some("wallet history"),
        ["wallet", "redeem", ..] => Some("wallet redeem"),
        ["wallet", "invest", ..] => Some("wallet invest"),
        ["wallet", "award", ..] => Some("wallet award"),
        ["wallet", "reset-history", ..] => Some("wallet reset-history"),
        ["wallet", ..] => Some("wallet"),
        ["report", ..] => Some("report"),
        ["trend", ..] => Some("trend"),
        ["rewards", ..] => Some("rewards"),
        ["instruments", ..] => Some("instruments"),
        ["benefits", ..] => Some("benefits"),
        _ => None,
    };
    hint.map(std::string::ToString::to_string)
}

fn exit_code_for_error(error: &CoreError) -> ExitCode {
    if is_internal_error(error) {
        ExitCode::from(2)
    } else {
        ExitCode::from(1)
    }
}

fn is_internal_error(error: &CoreError) -> bool {
    error.code.starts_with("internal_")
        || matches!(
            error.code.as_str(),
            "wallet_init_permission_denied"
                | "wallet_locked"
                | "wallet_corrupt"
                | "wallet_init_failed"
                | "migration_failed"
        )
}

fn infer_requested_output_mode(raw_args: &[String]) -> output::OutputMode {
    if raw_args.iter().skip(1).any(|value| value == "--json") {
        return output::OutputMode::Json;
    }
    output::OutputMode::Text
}
