use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Persisted wallet balance plus the month of the last automatic award.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinState {
    pub balance: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_awarded_month: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoinEntryKind {
    Redeem,
    Invest,
    Award,
}

impl CoinEntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Redeem => "redeem",
            Self::Invest => "invest",
            Self::Award => "award",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "redeem" => Some(Self::Redeem),
            "invest" => Some(Self::Invest),
            "award" => Some(Self::Award),
            _ => None,
        }
    }
}

/// One append-only wallet history entry. `ts` is epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinEntry {
    pub id: String,
    pub ts: i64,
    pub kind: CoinEntryKind,
    pub title: String,
    pub amount_c: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coin_state_round_trips_without_award_month() {
        let state = CoinState {
            balance: 42,
            last_awarded_month: None,
        };
        let encoded = serde_json::to_string(&state);
        assert!(encoded.is_ok());
        if let Ok(body) = encoded {
            assert!(!body.contains("last_awarded_month"));
            let decoded = serde_json::from_str::<CoinState>(&body);
            assert!(decoded.is_ok());
            if let Ok(restored) = decoded {
                assert_eq!(restored, state);
            }
        }
    }

    #[test]
    fn entry_kind_serializes_lowercase() {
        let encoded = serde_json::to_string(&CoinEntryKind::Award);
        assert!(encoded.is_ok());
        if let Ok(body) = encoded {
            assert_eq!(body, "\"award\"");
        }
        assert_eq!(CoinEntryKind::parse("REDEEM"), Some(CoinEntryKind::Redeem));
        assert_eq!(CoinEntryKind::parse("crypto"), None);
    }
}
