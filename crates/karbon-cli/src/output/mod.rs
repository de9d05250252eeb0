mod benefits_text;
mod error_text;
mod format;
mod json;
mod mode;
mod report_text;
mod wallet_text;

use std::io;

use karbon_core::{CoreError, SuccessEnvelope};

pub use mode::{OutputMode, mode_for_command};

use crate::stdout_io::write_stdout_text;

pub fn print_success(success: &SuccessEnvelope, mode: OutputMode) -> io::Result<()> {
    let body = match mode {
        OutputMode::Text => render_text_success(success)?,
        OutputMode::Json => json::render_success_json(success)?,
    };
    write_stdout_text(&body)?;
    write_stdout_text("\n")
}

pub fn print_failure(error: &CoreError, mode: OutputMode) -> io::Result<()> {
    let body = match mode {
        OutputMode::Json => json::render_error_json(error)?,
        OutputMode::Text => error_text::render_error(error),
    };
    write_stdout_text(&body)?;
    write_stdout_text("\n")
}

fn render_text_success(success: &SuccessEnvelope) -> io::Result<String> {
    match success.command.as_str() {
        "report" => report_text::render_report(&success.data),
        "trend" => report_text::render_trend(&success.data),
        "wallet balance" => wallet_text::render_balance(&success.data),
        "wallet history" => wallet_text::render_history(&success.data),
        "wallet redeem" => wallet_text::render_redeem(&success.data),
        "wallet invest" => wallet_text::render_invest(&success.data),
        "wallet award" => wallet_text::render_award(&success.data),
        "wallet reset-history" => wallet_text::render_reset_history(&success.data),
        "rewards" => wallet_text::render_rewards(&success.data),
        "instruments" => wallet_text::render_instruments(&success.data),
        "benefits" => benefits_text::render_benefits(&success.data),
        _ => Err(io::Error::other(format!(
            "unsupported text output command `{}`",
            success.command
        ))),
    }
}
