//! Shared fixtures: contract artifacts matching the default dictionaries,
//! plus a stand-in universe contract.

use alloy_primitives::Address;
use async_trait::async_trait;

use eto_terms::abi::AbiInput;
use eto_terms::deploy::{ConnectorError, DeployedContract};
use eto_terms::{ContractArtifact, TermValue};

fn input(name: &str, kind: &str) -> AbiInput {
    AbiInput { name: name.to_string(), kind: kind.to_string() }
}

pub fn tokenholder_rights_artifact() -> ContractArtifact {
    ContractArtifact::new(
        "TokenholderRights",
        vec![
            input("hasVotingRights", "bool"),
            input("liquidationPreferenceMultiplierFrac", "uint256"),
            input("hasFoundersVesting", "bool"),
            input("actionBylaws", "uint56[26]"),
        ],
    )
}

pub fn duration_terms_artifact() -> ContractArtifact {
    ContractArtifact::new(
        "ETODurationTerms",
        vec![
            input("whitelistDuration", "uint32"),
            input("publicDuration", "uint32"),
            input("signingDuration", "uint32"),
            input("claimDuration", "uint32"),
        ],
    )
}

pub fn token_terms_artifact() -> ContractArtifact {
    ContractArtifact::new(
        "ETOTokenTerms",
        vec![
            input("equityTokenName", "string"),
            input("equityTokenSymbol", "string"),
            input("ISIN", "string"),
            input("minNumberOfTokens", "uint256"),
            input("maxNumberOfTokens", "uint256"),
            input("tokenPriceEurUlps", "uint256"),
            input("maxNumberOfTokensInWhitelist", "uint256"),
            input("shareNominalValueEurUlps", "uint256"),
            input("shareNominalValueUlps", "uint256"),
            input("equityTokensPerShare", "uint256"),
            input("equityTokenDecimals", "uint8"),
        ],
    )
}

pub fn eto_terms_artifact() -> ContractArtifact {
    ContractArtifact::new(
        "ETOTerms",
        vec![
            input("universe", "address"),
            input("durationTerms", "address"),
            input("tokenTerms", "address"),
            input("tokenholderRights", "address"),
            input("etoTermsConstraints", "address"),
            input("shareCapitalCurrencyCode", "string"),
            input("existingShareCapital", "uint256"),
            input("authorizedCapital", "uint256"),
            input("minTicketEurUlps", "uint256"),
            input("maxTicketEurUlps", "uint256"),
            input("enableTransfersOnSuccess", "bool"),
            input("investorOfferingDocumentUrl", "string"),
            input("investmentAgreementTemplateUrl", "string"),
            input("whitelistDiscountFrac", "uint256"),
            input("publicDiscountFrac", "uint256"),
        ],
    )
}

pub fn terms_constraints_artifact() -> ContractArtifact {
    ContractArtifact::new(
        "ETOTermsConstraints",
        vec![
            input("canSetTransferability", "bool"),
            input("hasNominee", "bool"),
            input("minTicketSizeEurUlps", "uint256"),
            input("maxTicketSizeEurUlps", "uint256"),
            input("minInvestmentAmountEurUlps", "uint256"),
            input("maxInvestmentAmountEurUlps", "uint256"),
            input("name", "string"),
            input("offeringDocumentType", "uint8"),
            input("offeringDocumentSubType", "uint8"),
            input("jurisdiction", "string"),
            input("assetType", "uint8"),
            input("tokenOfferingOperator", "address"),
        ],
    )
}

/// The universe is deployed outside this crate; tests only need its
/// address.
pub struct StubUniverse {
    pub address: Address,
}

#[async_trait]
impl DeployedContract for StubUniverse {
    fn address(&self) -> Address {
        self.address
    }

    async fn read(&self, accessor: &str) -> Result<TermValue, ConnectorError> {
        Err(ConnectorError::UnknownAccessor(accessor.to_string()))
    }
}

/// Install the test log subscriber once; repeated calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_test_writer()
        .try_init();
}
