use chrono::NaiveDate;

use crate::classify::TxnKind;
use crate::report::types::Transaction;

/// The bundled demo statement: six card transactions from August 2025.
pub(crate) fn demo_transactions() -> Vec<Transaction> {
    vec![
        demo_txn("T1", 5800, "STARBUCKS SEOUL", 2025, 8, 13, 9, 45),
        demo_txn("T2", 4300, "GS25 HONGDAE", 2025, 8, 13, 20, 10),
        demo_txn("T3", 15500, "BAEMIN DELIVERY", 2025, 8, 12, 19, 5),
        demo_txn("T4", 12000, "KAKAO TAXI", 2025, 8, 11, 22, 10),
        demo_txn("T5", 8900, "EDIYA COFFEE", 2025, 8, 9, 10, 5),
        demo_txn("T6", 24000, "LOTTE MART", 2025, 8, 8, 18, 35),
    ]
}

fn demo_txn(
    txn_id: &str,
    amount: i64,
    merchant: &str,
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
) -> Transaction {
    // Static calendar values; the fallback is unreachable for the rows above.
    let ts = NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .unwrap_or_default();
    Transaction {
        txn_id: txn_id.to_string(),
        amount,
        merchant: merchant.to_string(),
        ts,
        channel: "CARD".to_string(),
        kind: TxnKind::Card,
    }
}
