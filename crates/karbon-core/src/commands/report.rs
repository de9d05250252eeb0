use crate::CoreResult;
use crate::classify::RuleSet;
use crate::classify::rules::CLASSIFY_POLICY_VERSION;
use crate::commands::common::{category_contract, enriched_contract, resolve_top_n};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::ReportData;
use crate::report::builder::build_report;
use crate::report::date::{build_filter, filter_transactions, format_iso_date};
use crate::source::load_transactions;

#[derive(Debug, Default)]
pub struct ReportRunOptions {
    pub from: Option<String>,
    pub to: Option<String>,
    pub top: Option<i64>,
    pub input: Option<String>,
    pub stdin_override: Option<String>,
}

pub fn run(
    from: Option<&str>,
    to: Option<&str>,
    top: Option<i64>,
    input: Option<&str>,
) -> CoreResult<SuccessEnvelope> {
    run_with_options(ReportRunOptions {
        from: from.map(std::string::ToString::to_string),
        to: to.map(std::string::ToString::to_string),
        top,
        input: input.map(std::string::ToString::to_string),
        stdin_override: None,
    })
}

#[doc(hidden)]
pub fn run_with_options(options: ReportRunOptions) -> CoreResult<SuccessEnvelope> {
    let top_n = resolve_top_n(options.top, "report")?;
    let filter = build_filter(options.from.as_deref(), options.to.as_deref(), "report")?;
    let loaded = load_transactions(options.input, options.stdin_override)?;
    let transactions = filter_transactions(&loaded.transactions, &filter);

    let rules = RuleSet::builtin()?;
    let report = build_report(&transactions, &rules, top_n);

    let data = ReportData {
        policy_version: CLASSIFY_POLICY_VERSION.to_string(),
        source: loaded.source_label,
        from: filter.from.as_ref().map(format_iso_date),
        to: filter.to.as_ref().map(format_iso_date),
        total_gco2e: report.total_gco2e,
        eco_score: report.eco_score,
        top_categories: report.top_categories.iter().map(category_contract).collect(),
        guides: report.guides.clone(),
        transactions: report.enriched.iter().map(enriched_contract).collect(),
    };

    success("report", data)
}
