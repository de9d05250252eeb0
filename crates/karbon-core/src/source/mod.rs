pub(crate) mod fixture;
pub(crate) mod input;
pub(crate) mod parse;
pub(crate) mod validate;

use crate::CoreResult;
use crate::report::types::Transaction;

#[derive(Debug, Clone)]
pub(crate) struct LoadedTransactions {
    pub(crate) transactions: Vec<Transaction>,
    pub(crate) source_label: String,
}

/// Loads transactions from `--input` (file path or `-` for stdin) when given,
/// falling back to the bundled demo fixture.
pub(crate) fn load_transactions(
    input: Option<String>,
    stdin_override: Option<String>,
) -> CoreResult<LoadedTransactions> {
    let Some(path) = input else {
        return Ok(LoadedTransactions {
            transactions: fixture::demo_transactions(),
            source_label: "fixture".to_string(),
        });
    };

    let resolved = input::resolve_source(path, stdin_override)?;
    let parsed_rows = parse::parse_source(&resolved.content)?;
    let transactions = validate::validate_rows(parsed_rows)?;

    Ok(LoadedTransactions {
        transactions,
        source_label: resolved.source_kind.as_str().to_string(),
    })
}
