use regex::Regex;

use crate::{CoreError, CoreResult};

/// Deterministic classification policy identifier, emitted with reports so
/// factor-table changes stay auditable across versions.
pub const CLASSIFY_POLICY_VERSION: &str = "classify/v1";

/// Transaction-type tag. The fallback table below is a `match` over this
/// enum, so every transaction resolves to a category by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxnKind {
    Card,
    OnlinePayment,
    Transfer,
}

impl TxnKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::OnlinePayment => "online_payment",
            Self::Transfer => "transfer",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "card" => Some(Self::Card),
            "online_payment" => Some(Self::OnlinePayment),
            "transfer" => Some(Self::Transfer),
            _ => None,
        }
    }
}

/// The category assignment a rule (or type default) produces.
#[derive(Debug, Clone, Copy)]
pub struct RuleOutcome {
    pub category_id: &'static str,
    pub factor_g_per_1000: f64,
    pub source: &'static str,
    pub assumptions: &'static [&'static str],
    pub multiplier: Option<f64>,
}

impl RuleOutcome {
    pub fn effective_multiplier(&self) -> f64 {
        self.multiplier.unwrap_or(1.0)
    }
}

#[derive(Debug)]
struct MerchantRule {
    pattern: Regex,
    outcome: RuleOutcome,
}

/// Ordered merchant-pattern rule table with a total per-kind fallback.
/// Patterns are evaluated in declaration order; the first match wins.
#[derive(Debug)]
pub struct RuleSet {
    rules: Vec<MerchantRule>,
}

const BUILTIN_PATTERNS: [(&str, RuleOutcome); 5] = [
    (
        "STARBUCKS|EDIYA|COFFEE",
        RuleOutcome {
            category_id: "FNB.COFFEE",
            factor_g_per_1000: 120.0,
            source: "SAMPLE_DEFRA",
            assumptions: &["in-store"],
            multiplier: None,
        },
    ),
    (
        "GS25|CU|SEVENELEVEN|CONVENIENCE",
        RuleOutcome {
            category_id: "RETAIL.CONVENIENCE",
            factor_g_per_1000: 60.0,
            source: "SAMPLE_DEFRA",
            assumptions: &[],
            multiplier: None,
        },
    ),
    (
        "BAEMIN|DELIVERY|YOGIYO",
        RuleOutcome {
            category_id: "FNB.DELIVERY",
            factor_g_per_1000: 120.0,
            source: "SAMPLE_DEFRA",
            assumptions: &["delivery"],
            multiplier: Some(1.1),
        },
    ),
    (
        "KAKAO TAXI|TAXI|UBER",
        RuleOutcome {
            category_id: "MOBILITY.TAXI",
            factor_g_per_1000: 220.0,
            source: "SAMPLE_DEFRA",
            assumptions: &[],
            multiplier: None,
        },
    ),
    (
        "MART|EMART|HOMEPLUS",
        RuleOutcome {
            category_id: "RETAIL.GROCERY",
            factor_g_per_1000: 55.0,
            source: "SAMPLE_DEFRA",
            assumptions: &[],
            multiplier: None,
        },
    ),
];

impl RuleSet {
    pub fn builtin() -> CoreResult<Self> {
        let mut rules = Vec::with_capacity(BUILTIN_PATTERNS.len());
        for (pattern, outcome) in BUILTIN_PATTERNS {
            let compiled = Regex::new(&format!("(?i){pattern}")).map_err(|error| {
                CoreError::internal_rule_table(&format!(
                    "Built-in merchant pattern `{pattern}` failed to compile: {error}"
                ))
            })?;
            rules.push(MerchantRule {
                pattern: compiled,
                outcome,
            });
        }
        Ok(Self { rules })
    }

    /// First merchant-pattern match wins; otherwise the type default for
    /// `kind`. Total over all inputs.
    pub fn resolve(&self, merchant_label: &str, kind: TxnKind) -> RuleOutcome {
        for rule in &self.rules {
            if rule.pattern.is_match(merchant_label) {
                return rule.outcome;
            }
        }
        type_default(kind)
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

const fn type_default(kind: TxnKind) -> RuleOutcome {
    match kind {
        TxnKind::Card | TxnKind::OnlinePayment => RuleOutcome {
            category_id: "OTHER",
            factor_g_per_1000: 50.0,
            source: "SAMPLE_DEFRA",
            assumptions: &[],
            multiplier: None,
        },
        TxnKind::Transfer => RuleOutcome {
            category_id: "FINANCE.TRANSFER",
            factor_g_per_1000: 10.0,
            source: "SAMPLE_DEFRA",
            assumptions: &[],
            multiplier: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{RuleSet, TxnKind};

    #[test]
    fn merchant_patterns_match_case_insensitively() {
        let rules = RuleSet::builtin();
        assert!(rules.is_ok());
        if let Ok(rules) = rules {
            let outcome = rules.resolve("starbucks seoul", TxnKind::Card);
            assert_eq!(outcome.category_id, "FNB.COFFEE");
            let outcome = rules.resolve("EDIYA COFFEE", TxnKind::Card);
            assert_eq!(outcome.category_id, "FNB.COFFEE");
        }
    }

    #[test]
    fn first_declared_pattern_wins_on_overlap() {
        // "COFFEE DELIVERY" matches both the coffee and the delivery rule;
        // the coffee rule is declared first.
        let rules = RuleSet::builtin();
        assert!(rules.is_ok());
        if let Ok(rules) = rules {
            let outcome = rules.resolve("COFFEE DELIVERY", TxnKind::Card);
            assert_eq!(outcome.category_id, "FNB.COFFEE");
        }
    }

    #[test]
    fn unmatched_merchants_fall_back_per_kind() {
        let rules = RuleSet::builtin();
        assert!(rules.is_ok());
        if let Ok(rules) = rules {
            let card = rules.resolve("MYSTERY VENDOR", TxnKind::Card);
            assert_eq!(card.category_id, "OTHER");
            assert_eq!(card.factor_g_per_1000, 50.0);

            let online = rules.resolve("MYSTERY VENDOR", TxnKind::OnlinePayment);
            assert_eq!(online.category_id, "OTHER");

            let transfer = rules.resolve("MYSTERY VENDOR", TxnKind::Transfer);
            assert_eq!(transfer.category_id, "FINANCE.TRANSFER");
        }
    }

    #[test]
    fn delivery_rule_carries_its_multiplier() {
        let rules = RuleSet::builtin();
        assert!(rules.is_ok());
        if let Ok(rules) = rules {
            let outcome = rules.resolve("BAEMIN DELIVERY", TxnKind::Card);
            assert_eq!(outcome.category_id, "FNB.DELIVERY");
            assert_eq!(outcome.effective_multiplier(), 1.1);

            let plain = rules.resolve("LOTTE MART", TxnKind::Card);
            assert_eq!(plain.effective_multiplier(), 1.0);
        }
    }

    #[test]
    fn txn_kind_parses_known_tags_only() {
        assert_eq!(TxnKind::parse("card"), Some(TxnKind::Card));
        assert_eq!(TxnKind::parse(" CARD "), Some(TxnKind::Card));
        assert_eq!(TxnKind::parse("transfer"), Some(TxnKind::Transfer));
        assert_eq!(TxnKind::parse("wire"), None);
    }
}
