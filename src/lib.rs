//! # ETO Terms
//!
//! Test-support library for equity token offering (ETO) smart contracts.
//!
//! ## Components
//!
//! - **Terms dictionaries**: human-readable `UPPER_SNAKE_CASE` terms mapped
//!   to typed values, validated against a contract artifact's constructor
//!   and projected into an ordered argument list
//! - **Bylaw codec**: the compact 7-byte bitfield describing the voting
//!   rules of a single governance action, serialized as `0x` + 14 hex digits
//! - **Deployment helpers**: merge defaults with per-test overrides,
//!   validate, construct through an abstract connector, and verify deployed
//!   state against the expected dictionary
//!
//! The library never talks to a chain directly: everything behind the
//! [`deploy::ContractConnector`] seam is the caller's business.

#![forbid(unsafe_code)]
#![deny(clippy::all, rust_2018_idioms)]
#![warn(clippy::pedantic, missing_docs)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // Intentional numeric casts - bylaw fields are byte-bounded
    clippy::cast_possible_truncation,
    clippy::cast_lossless,
    // must_use on every fn is excessive
    clippy::must_use_candidate
)]

pub mod abi;
pub mod deploy;
pub mod gov;
pub mod terms;
pub mod units;

pub use abi::{AbiType, ContractArtifact};
pub use deploy::{ContractConnector, DeployedContract, DeployedTerms};
pub use gov::bylaw::{decode_bylaw, Bylaw, BylawError, BylawTerms, DecodedBylaw};
pub use gov::{GovAction, GovActionEscalation, GovActionLegalRep, GovTokenVotingRule};
pub use terms::{validate_terms, verify_terms, TermValue, TermsDictionary, TermsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
