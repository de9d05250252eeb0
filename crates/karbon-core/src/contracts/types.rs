use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Serialize)]
pub struct SourceIssue {
    pub row: i64,
    pub field: String,
    pub code: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportData {
    pub policy_version: String,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    pub total_gco2e: i64,
    pub eco_score: i64,
    pub top_categories: Vec<CategoryEmissionData>,
    pub guides: Vec<String>,
    pub transactions: Vec<EnrichedTxnData>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryEmissionData {
    pub category_id: String,
    pub gco2e: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnrichedTxnData {
    pub txn_id: String,
    pub merchant: String,
    pub amount: i64,
    pub ts: String,
    pub channel: String,
    pub kind: String,
    pub category_id: String,
    pub factor_g_per_1000: f64,
    pub multiplier: f64,
    pub factor_source: String,
    pub assumptions: Vec<String>,
    pub gco2e: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrendData {
    pub policy_version: String,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    pub total_gco2e: i64,
    pub days: Vec<TrendPointData>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrendPointData {
    pub day: String,
    pub gco2e: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct WalletBalanceData {
    pub balance_c: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_awarded_month: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CoinEntryData {
    pub id: String,
    pub ts: i64,
    pub kind: String,
    pub title: String,
    pub amount_c: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WalletHistoryData {
    pub balance_c: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind_filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    pub entries: Vec<CoinEntryData>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RedeemData {
    pub reward_id: String,
    pub title: String,
    pub cost_c: i64,
    pub code: String,
    pub balance_c: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct InvestData {
    pub instrument_id: String,
    pub title: String,
    pub staked_c: i64,
    pub code: String,
    pub balance_c: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AwardData {
    pub awarded: bool,
    pub month: String,
    pub amount_c: i64,
    pub balance_c: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped_reason: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResetHistoryData {
    pub removed_entries: i64,
    pub balance_c: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RewardListData {
    pub rewards: Vec<RewardData>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RewardData {
    pub reward_id: String,
    pub title: String,
    pub cost_c: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InstrumentListData {
    pub instruments: Vec<InstrumentData>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InstrumentData {
    pub instrument_id: String,
    pub kind: String,
    pub title: String,
    pub min_stake_c: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BenefitsData {
    pub esg_score: i64,
    pub bonus_rate_pp: f64,
    pub annual_bonus_interest: i64,
    pub monthly_card_reward: i64,
}
