//! Declared key/parameter bindings.
//!
//! Every dictionary key is bound to its constructor parameter name in one
//! static table. The validator resolves parameters through this table
//! rather than by case-converting strings at runtime: acronym parameters
//! (`ISIN`) and abbreviation-heavy names would defeat any conversion rule,
//! and a declared table makes the key set reviewable in one place.

/// Dictionary key ↔ constructor parameter name, for every term the default
/// dictionaries and deployment helpers use.
pub const PARAM_BINDINGS: &[(&str, &str)] = &[
    // tokenholder rights
    ("GENERAL_VOTING_RULE", "generalVotingRule"),
    ("TAG_ALONG_VOTING_RULE", "tagAlongVotingRule"),
    ("GENERAL_THR_VOTING_RULE", "generalTHRVotingRule"),
    ("LIQUIDATION_PREFERENCE_MULTIPLIER_FRAC", "liquidationPreferenceMultiplierFrac"),
    ("HAS_FOUNDERS_VESTING", "hasFoundersVesting"),
    ("GENERAL_VOTING_DURATION", "generalVotingDuration"),
    ("RESTRICTED_ACT_VOTING_DURATION", "restrictedActVotingDuration"),
    ("SHAREHOLDERS_VOTING_QUORUM_FRAC", "shareholdersVotingQuorumFrac"),
    ("VOTING_MAJORITY_FRAC", "votingMajorityFrac"),
    ("HAS_VOTING_RIGHTS", "hasVotingRights"),
    ("ACTION_BYLAWS", "actionBylaws"),
    // offering durations
    ("WHITELIST_DURATION", "whitelistDuration"),
    ("PUBLIC_DURATION", "publicDuration"),
    ("SIGNING_DURATION", "signingDuration"),
    ("CLAIM_DURATION", "claimDuration"),
    // equity token terms
    ("EQUITY_TOKEN_NAME", "equityTokenName"),
    ("EQUITY_TOKEN_SYMBOL", "equityTokenSymbol"),
    ("ISIN", "ISIN"),
    ("MIN_NUMBER_OF_TOKENS", "minNumberOfTokens"),
    ("MAX_NUMBER_OF_TOKENS", "maxNumberOfTokens"),
    ("TOKEN_PRICE_EUR_ULPS", "tokenPriceEurUlps"),
    ("MAX_NUMBER_OF_TOKENS_IN_WHITELIST", "maxNumberOfTokensInWhitelist"),
    ("SHARE_NOMINAL_VALUE_EUR_ULPS", "shareNominalValueEurUlps"),
    ("SHARE_NOMINAL_VALUE_ULPS", "shareNominalValueUlps"),
    ("EQUITY_TOKENS_PER_SHARE", "equityTokensPerShare"),
    ("EQUITY_TOKEN_DECIMALS", "equityTokenDecimals"),
    // offering terms
    ("UNIVERSE", "universe"),
    ("DURATION_TERMS", "durationTerms"),
    ("TOKEN_TERMS", "tokenTerms"),
    ("TOKENHOLDER_RIGHTS", "tokenholderRights"),
    ("ETO_TERMS_CONSTRAINTS", "etoTermsConstraints"),
    ("SHARE_CAPITAL_CURRENCY_CODE", "shareCapitalCurrencyCode"),
    ("EXISTING_SHARE_CAPITAL", "existingShareCapital"),
    ("AUTHORIZED_CAPITAL", "authorizedCapital"),
    ("MIN_TICKET_EUR_ULPS", "minTicketEurUlps"),
    ("MAX_TICKET_EUR_ULPS", "maxTicketEurUlps"),
    ("ENABLE_TRANSFERS_ON_SUCCESS", "enableTransfersOnSuccess"),
    ("INVESTOR_OFFERING_DOCUMENT_URL", "investorOfferingDocumentUrl"),
    ("INVESTMENT_AGREEMENT_TEMPLATE_URL", "investmentAgreementTemplateUrl"),
    ("WHITELIST_DISCOUNT_FRAC", "whitelistDiscountFrac"),
    ("PUBLIC_DISCOUNT_FRAC", "publicDiscountFrac"),
    // offering constraints
    ("CAN_SET_TRANSFERABILITY", "canSetTransferability"),
    ("HAS_NOMINEE", "hasNominee"),
    ("MIN_TICKET_SIZE_EUR_ULPS", "minTicketSizeEurUlps"),
    ("MAX_TICKET_SIZE_EUR_ULPS", "maxTicketSizeEurUlps"),
    ("MIN_INVESTMENT_AMOUNT_EUR_ULPS", "minInvestmentAmountEurUlps"),
    ("MAX_INVESTMENT_AMOUNT_EUR_ULPS", "maxInvestmentAmountEurUlps"),
    ("NAME", "name"),
    ("OFFERING_DOCUMENT_TYPE", "offeringDocumentType"),
    ("OFFERING_DOCUMENT_SUB_TYPE", "offeringDocumentSubType"),
    ("JURISDICTION", "jurisdiction"),
    ("ASSET_TYPE", "assetType"),
    ("TOKEN_OFFERING_OPERATOR", "tokenOfferingOperator"),
];

/// Constructor parameter name bound to a dictionary key.
pub fn parameter_name(key: &str) -> Option<&'static str> {
    PARAM_BINDINGS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, param)| *param)
}

/// Dictionary key bound to a constructor parameter name.
pub fn dictionary_key(param: &str) -> Option<&'static str> {
    PARAM_BINDINGS
        .iter()
        .find(|(_, p)| *p == param)
        .map(|(key, _)| *key)
}
