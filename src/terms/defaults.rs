//! Default terms dictionaries.
//!
//! Each deployment helper starts from one of these tables and lets the
//! test override individual keys. Amounts are ULPS-exact; durations are in
//! seconds and always whole days where a bylaw will consume them.

use alloy_primitives::U256;

use crate::gov::GovTokenVotingRule;
use crate::terms::TermsDictionary;
use crate::units::{days_to_seconds, Q18};

/// Equity tokens minted per share.
pub const TOKENS_PER_SHARE: u64 = 1_000_000;

/// Decimals of the equity token (equity tokens are indivisible).
pub const EQUITY_TOKEN_DECIMALS: u64 = 0;

/// Whole units in ULPS.
fn ulps(whole: u64) -> U256 {
    Q18 * U256::from(whole)
}

/// Default tokenholder rights terms, bylaws not yet applied.
pub fn default_tokenholder_terms() -> TermsDictionary {
    let mut terms = TermsDictionary::new();
    terms.insert("GENERAL_VOTING_RULE", GovTokenVotingRule::Positive as u64);
    terms.insert("TAG_ALONG_VOTING_RULE", GovTokenVotingRule::Negative as u64);
    // 1.5x liquidation preference
    terms.insert(
        "LIQUIDATION_PREFERENCE_MULTIPLIER_FRAC",
        U256::from(1_500_000_000_000_000_000u64),
    );
    terms.insert("HAS_FOUNDERS_VESTING", true);
    terms.insert("GENERAL_VOTING_DURATION", days_to_seconds(10));
    terms.insert("RESTRICTED_ACT_VOTING_DURATION", days_to_seconds(14));
    // 10% quorum, 50% majority
    terms.insert(
        "SHAREHOLDERS_VOTING_QUORUM_FRAC",
        U256::from(100_000_000_000_000_000u64),
    );
    terms.insert("VOTING_MAJORITY_FRAC", U256::from(500_000_000_000_000_000u64));
    terms
}

/// Default tokenholder-resolution voting rule terms.
pub fn default_thr_terms() -> TermsDictionary {
    TermsDictionary::from([(
        "GENERAL_THR_VOTING_RULE",
        U256::from(GovTokenVotingRule::Prorata as u8),
    )])
}

/// Default offering phase durations.
pub fn default_duration_terms() -> TermsDictionary {
    TermsDictionary::from([
        ("WHITELIST_DURATION", days_to_seconds(7)),
        ("PUBLIC_DURATION", days_to_seconds(30)),
        ("SIGNING_DURATION", days_to_seconds(14)),
        ("CLAIM_DURATION", days_to_seconds(10)),
    ])
}

/// Default equity token terms.
pub fn default_token_terms() -> TermsDictionary {
    let mut terms = TermsDictionary::new();
    terms.insert("EQUITY_TOKEN_NAME", "Quintessence");
    terms.insert("EQUITY_TOKEN_SYMBOL", "FFT");
    terms.insert("ISIN", "DE037652");
    terms.insert("MIN_NUMBER_OF_TOKENS", TOKENS_PER_SHARE * 20);
    terms.insert("MAX_NUMBER_OF_TOKENS", TOKENS_PER_SHARE * 100);
    // 0.12376189651788 EUR
    terms.insert("TOKEN_PRICE_EUR_ULPS", U256::from(123_761_896_517_880_000u64));
    terms.insert("MAX_NUMBER_OF_TOKENS_IN_WHITELIST", TOKENS_PER_SHARE * 40);
    // 4.24566 EUR
    terms.insert(
        "SHARE_NOMINAL_VALUE_EUR_ULPS",
        U256::from(4_245_660_000_000_000_000u64),
    );
    terms.insert("SHARE_NOMINAL_VALUE_ULPS", Q18);
    terms.insert("EQUITY_TOKENS_PER_SHARE", TOKENS_PER_SHARE);
    terms.insert("EQUITY_TOKEN_DECIMALS", EQUITY_TOKEN_DECIMALS);
    terms
}

/// Default offering terms.
///
/// The linked contract addresses (`UNIVERSE`, `DURATION_TERMS`,
/// `TOKEN_TERMS`, `TOKENHOLDER_RIGHTS`, `ETO_TERMS_CONSTRAINTS`) are not
/// part of the defaults; [`crate::deploy::deploy_eto_terms`] injects them
/// from the contracts it is handed.
pub fn default_eto_terms() -> TermsDictionary {
    let mut terms = TermsDictionary::new();
    terms.insert("SHARE_CAPITAL_CURRENCY_CODE", "PLN");
    terms.insert("EXISTING_SHARE_CAPITAL", ulps(32_000));
    terms.insert("AUTHORIZED_CAPITAL", ulps(1_254));
    terms.insert("MIN_TICKET_EUR_ULPS", ulps(500));
    terms.insert("MAX_TICKET_EUR_ULPS", ulps(1_000_000));
    terms.insert("ENABLE_TRANSFERS_ON_SUCCESS", false);
    terms.insert("INVESTOR_OFFERING_DOCUMENT_URL", "893289290300923809jdkljoi3");
    terms.insert("INVESTMENT_AGREEMENT_TEMPLATE_URL", "9032ujidjosa9012809919293");
    // 30% whitelist discount, no public discount
    terms.insert("WHITELIST_DISCOUNT_FRAC", U256::from(300_000_000_000_000_000u64));
    terms.insert("PUBLIC_DISCOUNT_FRAC", U256::ZERO);
    terms
}

/// Default offering constraints ("product").
pub fn default_terms_constraints() -> TermsDictionary {
    let mut terms = TermsDictionary::new();
    terms.insert("CAN_SET_TRANSFERABILITY", true);
    terms.insert("HAS_NOMINEE", true);
    terms.insert("MIN_TICKET_SIZE_EUR_ULPS", U256::ZERO);
    // zero means unlimited
    terms.insert("MAX_TICKET_SIZE_EUR_ULPS", U256::ZERO);
    terms.insert("MIN_INVESTMENT_AMOUNT_EUR_ULPS", U256::ZERO);
    // zero means unlimited
    terms.insert("MAX_INVESTMENT_AMOUNT_EUR_ULPS", U256::ZERO);
    terms.insert("NAME", "Some Constraints");
    terms.insert("OFFERING_DOCUMENT_TYPE", 1u64);
    terms.insert("OFFERING_DOCUMENT_SUB_TYPE", 1u64);
    terms.insert("JURISDICTION", "DE");
    terms.insert("ASSET_TYPE", 0u64);
    terms.insert("TOKEN_OFFERING_OPERATOR", "0xC5a96Db085dDA36FfBE390f455315D30D6D3DC52");
    terms
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terms::TermValue;

    #[test]
    fn test_tokenholder_defaults() {
        let terms = default_tokenholder_terms();
        assert_eq!(terms.len(), 8);
        assert_eq!(terms.get("HAS_FOUNDERS_VESTING"), Some(&TermValue::Bool(true)));
        assert_eq!(
            terms.get("GENERAL_VOTING_DURATION"),
            Some(&TermValue::uint(864_000u64))
        );
        assert_eq!(
            terms.get("VOTING_MAJORITY_FRAC"),
            Some(&TermValue::Uint(Q18 / U256::from(2u64)))
        );
    }

    #[test]
    fn test_thr_defaults() {
        let terms = default_thr_terms();
        assert_eq!(
            terms.get("GENERAL_THR_VOTING_RULE"),
            Some(&TermValue::uint(GovTokenVotingRule::Prorata as u64))
        );
    }

    #[test]
    fn test_token_defaults_are_share_multiples() {
        let terms = default_token_terms();
        assert_eq!(
            terms.get("MIN_NUMBER_OF_TOKENS"),
            Some(&TermValue::uint(20 * TOKENS_PER_SHARE))
        );
        assert_eq!(
            terms.get("MAX_NUMBER_OF_TOKENS"),
            Some(&TermValue::uint(100 * TOKENS_PER_SHARE))
        );
    }

    #[test]
    fn test_eto_defaults_have_no_linked_addresses() {
        let terms = default_eto_terms();
        for key in ["UNIVERSE", "DURATION_TERMS", "TOKEN_TERMS", "TOKENHOLDER_RIGHTS"] {
            assert!(!terms.contains_key(key), "{key} must be injected at deploy time");
        }
    }
}
