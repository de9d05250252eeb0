use crate::CoreResult;
use crate::classify::RuleSet;
use crate::classify::rules::CLASSIFY_POLICY_VERSION;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{TrendData, TrendPointData};
use crate::report::builder::enrich;
use crate::report::date::{build_filter, filter_transactions, format_iso_date};
use crate::report::trend::build_trend;
use crate::source::load_transactions;

#[derive(Debug, Default)]
pub struct TrendRunOptions {
    pub from: Option<String>,
    pub to: Option<String>,
    pub input: Option<String>,
    pub stdin_override: Option<String>,
}

pub fn run(from: Option<&str>, to: Option<&str>, input: Option<&str>) -> CoreResult<SuccessEnvelope> {
    run_with_options(TrendRunOptions {
        from: from.map(std::string::ToString::to_string),
        to: to.map(std::string::ToString::to_string),
        input: input.map(std::string::ToString::to_string),
        stdin_override: None,
    })
}

#[doc(hidden)]
pub fn run_with_options(options: TrendRunOptions) -> CoreResult<SuccessEnvelope> {
    let filter = build_filter(options.from.as_deref(), options.to.as_deref(), "trend")?;
    let loaded = load_transactions(options.input, options.stdin_override)?;
    let transactions = filter_transactions(&loaded.transactions, &filter);

    let rules = RuleSet::builtin()?;
    let enriched = enrich(&transactions, &rules);
    let total_gco2e = enriched.iter().map(|row| row.gco2e).sum::<i64>();
    let days = build_trend(&enriched)
        .into_iter()
        .map(|point| TrendPointData {
            day: point.day,
            gco2e: point.gco2e,
        })
        .collect::<Vec<TrendPointData>>();

    let data = TrendData {
        policy_version: CLASSIFY_POLICY_VERSION.to_string(),
        source: loaded.source_label,
        from: filter.from.as_ref().map(format_iso_date),
        to: filter.to.as_ref().map(format_iso_date),
        total_gco2e,
        days,
    };

    success("trend", data)
}
