use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsoDate(pub String);

impl IsoDate {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub fn parse_iso_date(value: &str) -> Result<IsoDate, String> {
    if value.len() != 10 {
        return Err("date must use YYYY-MM-DD format".to_string());
    }

    let bytes = value.as_bytes();
    if bytes[4] != b'-' || bytes[7] != b'-' {
        return Err("date must use YYYY-MM-DD format".to_string());
    }

    for index in [0usize, 1, 2, 3, 5, 6, 8, 9] {
        if !bytes[index].is_ascii_digit() {
            return Err("date must use YYYY-MM-DD format".to_string());
        }
    }

    if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
        return Err("date must use valid calendar values".to_string());
    }

    Ok(IsoDate(value.to_string()))
}

pub fn parse_entry_kind(value: &str) -> Result<String, String> {
    match value {
        "redeem" | "invest" | "award" => Ok(value.to_string()),
        _ => Err("kind must be one of: redeem, invest, award".to_string()),
    }
}

/// Extended help shown after `karbon report --help`.
pub const REPORT_AFTER_HELP: &str = "\
Transaction input:
  Without --input, the bundled demo statement is used.
  With --input, pass a local file path or `-` to read stdin.

  Accepted formats:
    JSON — one top-level array of transaction objects
    CSV  — one header row with schema field names

  JSON example (one top-level array):
  [
    {
      \"txn_id\": \"T1\",
      \"amount\": 5800,
      \"merchant\": \"STARBUCKS SEOUL\",
      \"ts\": \"2025-08-13T09:45:00\",
      \"channel\": \"CARD\",
      \"kind\": \"card\"
    }
  ]

  CSV example (header + rows):
  txn_id,amount,merchant,ts,channel,kind
  T1,5800,STARBUCKS SEOUL,2025-08-13T09:45:00,CARD,card

Field rules:
  txn_id (required):   unique id per transaction
  amount (required):   non-negative integer in currency units
  merchant (required): raw merchant label, matched case-insensitively
  ts (required):       `YYYY-MM-DDTHH:MM:SS`, or `YYYY-MM-DD` for midnight
  channel (optional):  defaults to `CARD`
  kind (optional):     card, online_payment or transfer; defaults to card
";

#[derive(Debug, Parser)]
#[command(
    name = "karbon",
    version,
    about = "carbon receipt and rewards toolkit",
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build the emission report for a period: total, top categories, score
    #[command(after_long_help = REPORT_AFTER_HELP)]
    Report {
        /// Start date filter (YYYY-MM-DD)
        #[arg(long, value_parser = parse_iso_date)]
        from: Option<IsoDate>,
        /// End date filter (YYYY-MM-DD)
        #[arg(long, value_parser = parse_iso_date)]
        to: Option<IsoDate>,
        /// Number of top categories to show (1-10)
        #[arg(long)]
        top: Option<i64>,
        /// Path to a JSON or CSV transaction file (use `-` for stdin)
        #[arg(long)]
        input: Option<String>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Show the per-day emission series for a period
    Trend {
        /// Start date filter (YYYY-MM-DD)
        #[arg(long, value_parser = parse_iso_date)]
        from: Option<IsoDate>,
        /// End date filter (YYYY-MM-DD)
        #[arg(long, value_parser = parse_iso_date)]
        to: Option<IsoDate>,
        /// Path to a JSON or CSV transaction file (use `-` for stdin)
        #[arg(long)]
        input: Option<String>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Manage the rewards-coin wallet
    #[command(arg_required_else_help = true)]
    Wallet {
        #[command(subcommand)]
        command: WalletCommand,
    },
    /// List redeemable rewards
    Rewards {
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// List investable instruments
    Instruments {
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Estimate green-banking benefits from an eco score
    Benefits {
        /// Eco score 0-100 (defaults to the demo statement's score)
        #[arg(long)]
        esg: Option<i64>,
        /// Deposit amount for the rate bonus estimate
        #[arg(long)]
        deposit: Option<i64>,
        /// Monthly public-transit spend
        #[arg(long)]
        transit: Option<i64>,
        /// Monthly zero-waste store spend
        #[arg(long)]
        zerowaste: Option<i64>,
        /// Monthly spend at other eco merchants
        #[arg(long)]
        other: Option<i64>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum WalletCommand {
    /// Show the current coin balance
    Balance {
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// List wallet history, newest first
    History {
        /// Filter by entry kind: redeem, invest or award
        #[arg(long, value_parser = parse_entry_kind)]
        kind: Option<String>,
        /// Case-insensitive keyword over titles and voucher codes
        #[arg(long)]
        search: Option<String>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Exchange coins for a reward voucher
    Redeem {
        /// Reward id (see `karbon rewards`)
        reward_id: String,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Stake coins into an instrument
    Invest {
        /// Instrument id (see `karbon instruments`)
        instrument_id: String,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Pay out last month's CO2e saving as coins (first week of the month)
    Award {
        /// Grams of CO2e saved last month
        #[arg(long)]
        saving_g: i64,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Clear wallet history, keeping the balance
    ResetHistory {
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
pub fn parse_from<I, T>(itr: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(itr)
}
