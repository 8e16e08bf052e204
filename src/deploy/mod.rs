//! Deployment helpers.
//!
//! Each helper merges a default dictionary with per-test overrides,
//! validates the result against the artifact and constructs the contract
//! through a [`ContractConnector`]. The connector is the only I/O seam in
//! the crate; everything up to `construct` is pure.

use alloy_primitives::Address;
use async_trait::async_trait;
use tracing::{debug, info};

use crate::abi::ContractArtifact;
use crate::gov::bylaw::BylawError;
use crate::gov::defaults::{
    apply_bylaws_to_rights, generate_default_bylaws, GovTermsError, VotingTerms,
};
use crate::terms::defaults::{
    default_duration_terms, default_eto_terms, default_terms_constraints,
    default_token_terms, default_tokenholder_terms,
};
use crate::terms::{validate_terms, TermValue, TermsDictionary, TermsError};

pub mod memory;

/// Failures reported by a connector or a deployed contract.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConnectorError {
    /// The constructor rejected the supplied arguments
    #[error("constructor of {contract} rejected arguments: {reason}")]
    Rejected {
        /// Contract name
        contract: String,
        /// Backend-supplied reason
        reason: String,
    },
    /// No zero-argument accessor with the requested name
    #[error("no accessor named {0}")]
    UnknownAccessor(String),
    /// Any other backend failure
    #[error("backend failure: {0}")]
    Backend(String),
}

/// Deployment failures: validation, bylaw derivation, or the connector.
#[derive(Debug, thiserror::Error)]
pub enum DeployError {
    /// Terms did not validate against the artifact
    #[error(transparent)]
    Terms(#[from] TermsError),
    /// Voting terms could not be extracted for bylaw generation
    #[error(transparent)]
    Gov(#[from] GovTermsError),
    /// A derived bylaw failed to encode
    #[error(transparent)]
    Bylaw(#[from] BylawError),
    /// The connector failed
    #[error(transparent)]
    Connector(#[from] ConnectorError),
}

/// Constructs contract instances from validated argument lists.
#[async_trait]
pub trait ContractConnector: Send + Sync {
    /// Deploy a new instance of `artifact` with ordered constructor args.
    async fn construct(
        &self,
        artifact: &ContractArtifact,
        args: &[TermValue],
    ) -> Result<Box<dyn DeployedContract>, ConnectorError>;
}

/// A deployed contract instance: an address plus zero-argument accessors
/// named after the dictionary keys.
#[async_trait]
pub trait DeployedContract: Send + Sync {
    /// On-chain address of this instance.
    fn address(&self) -> Address;

    /// Read a zero-argument accessor.
    async fn read(&self, accessor: &str) -> Result<TermValue, ConnectorError>;
}

/// Everything a deploy helper hands back: the instance, the effective
/// dictionary, and the validated keys/values in constructor order.
pub struct DeployedTerms {
    /// The constructed contract
    pub contract: Box<dyn DeployedContract>,
    /// The effective dictionary after defaults, overrides and bylaws
    pub terms: TermsDictionary,
    /// Dictionary keys in constructor order
    pub keys: Vec<String>,
    /// Values in constructor order
    pub values: Vec<TermValue>,
}

impl std::fmt::Debug for DeployedTerms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeployedTerms")
            .field("contract", &self.contract.address())
            .field("terms", &self.terms)
            .field("keys", &self.keys)
            .field("values", &self.values)
            .finish()
    }
}

/// Validate `terms` against `artifact` and construct the contract.
async fn construct_terms(
    connector: &dyn ContractConnector,
    artifact: &ContractArtifact,
    terms: TermsDictionary,
) -> Result<DeployedTerms, DeployError> {
    let (keys, values) = validate_terms(artifact, &terms)?;
    info!(
        contract = %artifact.contract_name,
        args = values.len(),
        "deploying terms contract"
    );
    let contract = connector.construct(artifact, &values).await?;
    debug!(contract = %artifact.contract_name, address = %contract.address(), "deployed");
    Ok(DeployedTerms { contract, terms, keys, values })
}

/// Merge a default table with overrides; `full_terms` skips the defaults
/// entirely and takes the overrides as the complete dictionary.
fn effective_terms(
    defaults: TermsDictionary,
    overrides: Option<&TermsDictionary>,
    full_terms: bool,
) -> TermsDictionary {
    let base = if full_terms { TermsDictionary::new() } else { defaults };
    match overrides {
        Some(overrides) => base.overridden_by(overrides),
        None => base,
    }
}

/// Deploy tokenholder rights. When the dictionary carries no
/// `ACTION_BYLAWS`, the default bylaw matrix is generated from the voting
/// terms and folded in first.
pub async fn deploy_tokenholder_rights(
    connector: &dyn ContractConnector,
    artifact: &ContractArtifact,
    overrides: Option<&TermsDictionary>,
    full_terms: bool,
) -> Result<DeployedTerms, DeployError> {
    let mut terms = effective_terms(default_tokenholder_terms(), overrides, full_terms);
    if !terms.contains_key("ACTION_BYLAWS") {
        let voting = VotingTerms::from_dictionary(&terms)?;
        let bylaws = generate_default_bylaws(&voting)?;
        terms = apply_bylaws_to_rights(&terms, &voting, &bylaws);
    }
    construct_terms(connector, artifact, terms).await
}

/// Deploy offering phase durations.
pub async fn deploy_duration_terms(
    connector: &dyn ContractConnector,
    artifact: &ContractArtifact,
    overrides: Option<&TermsDictionary>,
    full_terms: bool,
) -> Result<DeployedTerms, DeployError> {
    let terms = effective_terms(default_duration_terms(), overrides, full_terms);
    construct_terms(connector, artifact, terms).await
}

/// Deploy equity token terms.
pub async fn deploy_token_terms(
    connector: &dyn ContractConnector,
    artifact: &ContractArtifact,
    overrides: Option<&TermsDictionary>,
    full_terms: bool,
) -> Result<DeployedTerms, DeployError> {
    let terms = effective_terms(default_token_terms(), overrides, full_terms);
    construct_terms(connector, artifact, terms).await
}

/// Deploy offering constraints.
pub async fn deploy_eto_terms_constraints(
    connector: &dyn ContractConnector,
    artifact: &ContractArtifact,
    overrides: Option<&TermsDictionary>,
    full_terms: bool,
) -> Result<DeployedTerms, DeployError> {
    let terms = effective_terms(default_terms_constraints(), overrides, full_terms);
    construct_terms(connector, artifact, terms).await
}

/// Deploy offering terms, wiring in the addresses of the universe and the
/// previously deployed term contracts.
#[allow(clippy::too_many_arguments)]
pub async fn deploy_eto_terms(
    connector: &dyn ContractConnector,
    artifact: &ContractArtifact,
    universe: &dyn DeployedContract,
    duration_terms: &dyn DeployedContract,
    token_terms: &dyn DeployedContract,
    tokenholder_rights: &dyn DeployedContract,
    terms_constraints: &dyn DeployedContract,
    overrides: Option<&TermsDictionary>,
    full_terms: bool,
) -> Result<DeployedTerms, DeployError> {
    let mut terms = effective_terms(default_eto_terms(), overrides, full_terms);
    terms.insert("UNIVERSE", universe.address().to_string());
    terms.insert("DURATION_TERMS", duration_terms.address().to_string());
    terms.insert("TOKEN_TERMS", token_terms.address().to_string());
    terms.insert("TOKENHOLDER_RIGHTS", tokenholder_rights.address().to_string());
    terms.insert("ETO_TERMS_CONSTRAINTS", terms_constraints.address().to_string());
    construct_terms(connector, artifact, terms).await
}
