//! Well-known artifact names.
//!
//! Maps stable platform identifiers to the artifact (contract) names the
//! build pipeline emits. Deployment scripts key off the identifier so that
//! renaming a contract stays a one-line change here.

/// Identifier/artifact-name pairs for every platform contract this crate
/// deals with.
pub const KNOWN_ARTIFACTS: &[(&str, &str)] = &[
    ("ROLE_BASED_ACCESS_POLICY", "RoleBasedAccessPolicy"),
    ("ETHEREUM_FORK_ARBITER", "EthereumForkArbiter"),
    ("NEUMARK", "Neumark"),
    ("ICBM_LOCKED_ACCOUNT", "ICBMLockedAccount"),
    ("ICBM_ETHER_TOKEN", "ICBMEtherToken"),
    ("ICBM_EURO_TOKEN", "ICBMEuroToken"),
    ("ICBM_COMMITMENT", "ICBMCommitment"),
    ("UNIVERSE", "Universe"),
    ("LOCKED_ACCOUNT", "LockedAccount"),
    ("ETHER_TOKEN", "EtherToken"),
    ("EURO_TOKEN", "EuroToken"),
    ("EURO_TOKEN_CONTROLLER", "EuroTokenController"),
    ("IDENTITY_REGISTRY", "IdentityRegistry"),
    ("GAS_EXCHANGE", "SimpleExchange"),
    ("TOKEN_RATE_ORACLE", "ITokenExchangeRateOracle"),
    ("FEE_DISBURSAL", "IFeeDisbursal"),
    ("COMMITMENT_INTERFACE", "ETOCommitment"),
    ("EQUITY_TOKEN", "EquityToken"),
    ("EQUITY_TOKEN_CONTROLLER", "IEquityTokenController"),
];

/// Look up the artifact name for a platform identifier.
pub fn artifact_name(identifier: &str) -> Option<&'static str> {
    KNOWN_ARTIFACTS
        .iter()
        .find(|(id, _)| *id == identifier)
        .map(|(_, name)| *name)
}
