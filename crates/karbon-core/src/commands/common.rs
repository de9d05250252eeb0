use crate::contracts::types::{CategoryEmissionData, CoinEntryData, EnrichedTxnData};
use crate::report::types::{CategoryEmission, EnrichedTransaction};
use crate::wallet::types::CoinEntry;
use crate::{CoreError, CoreResult};

pub const TOP_CATEGORIES_DEFAULT: usize = 3;
pub const TOP_CATEGORIES_MAX: usize = 10;

pub fn resolve_top_n(top: Option<i64>, command: &str) -> CoreResult<usize> {
    let Some(value) = top else {
        return Ok(TOP_CATEGORIES_DEFAULT);
    };
    if value < 1 || value > TOP_CATEGORIES_MAX as i64 {
        return Err(CoreError::invalid_argument_for_command(
            &format!("`top` must be between 1 and {TOP_CATEGORIES_MAX}."),
            Some(command),
        ));
    }
    Ok(value as usize)
}

pub fn category_contract(group: &CategoryEmission) -> CategoryEmissionData {
    CategoryEmissionData {
        category_id: group.category_id.clone(),
        gco2e: group.gco2e,
    }
}

pub fn enriched_contract(row: &EnrichedTransaction) -> EnrichedTxnData {
    EnrichedTxnData {
        txn_id: row.txn.txn_id.clone(),
        merchant: row.txn.merchant.clone(),
        amount: row.txn.amount,
        ts: row.txn.ts.format("%Y-%m-%dT%H:%M:%S").to_string(),
        channel: row.txn.channel.clone(),
        kind: row.txn.kind.as_str().to_string(),
        category_id: row.outcome.category_id.to_string(),
        factor_g_per_1000: row.outcome.factor_g_per_1000,
        multiplier: row.outcome.effective_multiplier(),
        factor_source: row.outcome.source.to_string(),
        assumptions: row
            .outcome
            .assumptions
            .iter()
            .map(|value| value.to_string())
            .collect(),
        gco2e: row.gco2e,
    }
}

pub fn coin_entry_contract(entry: &CoinEntry) -> CoinEntryData {
    CoinEntryData {
        id: entry.id.clone(),
        ts: entry.ts,
        kind: entry.kind.as_str().to_string(),
        title: entry.title.clone(),
        amount_c: entry.amount_c,
        meta: entry.meta.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_defaults_and_bounds() {
        let default = resolve_top_n(None, "report");
        assert!(default.is_ok());
        if let Ok(value) = default {
            assert_eq!(value, TOP_CATEGORIES_DEFAULT);
        }

        assert!(resolve_top_n(Some(10), "report").is_ok());
        assert!(resolve_top_n(Some(0), "report").is_err());
        assert!(resolve_top_n(Some(11), "report").is_err());
    }
}
