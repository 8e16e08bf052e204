//! Contract artifact metadata.
//!
//! An artifact is the queryable surface the contract build pipeline leaves
//! behind: the contract name and its ABI, of which only the constructor
//! entry matters here. The JSON shape mirrors the artifact files on disk,
//! so fixtures can be loaded verbatim.

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod names;

/// A single constructor (or function) input: name plus raw ABI type tag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiInput {
    /// Parameter name as declared in the contract source
    pub name: String,
    /// Raw ABI type tag, e.g. `"uint256"` or `"uint56[26]"`
    #[serde(rename = "type")]
    pub kind: String,
}

/// One entry of a contract ABI. Only `kind == "constructor"` is consumed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiEntry {
    /// Entry kind: `"constructor"`, `"function"`, `"event"`, ...
    #[serde(rename = "type")]
    pub kind: String,
    /// Ordered inputs of the entry
    #[serde(default)]
    pub inputs: Vec<AbiInput>,
}

/// Artifact metadata for a compiled contract.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractArtifact {
    /// Contract name, e.g. `"ETODurationTerms"`
    pub contract_name: String,
    /// Full ABI as emitted by the compiler
    pub abi: Vec<AbiEntry>,
}

impl ContractArtifact {
    /// Build an artifact from a name and constructor inputs alone.
    ///
    /// Convenience for fixtures; real artifacts come from JSON.
    pub fn new(
        contract_name: impl Into<String>,
        constructor_inputs: Vec<AbiInput>,
    ) -> Self {
        Self {
            contract_name: contract_name.into(),
            abi: vec![AbiEntry {
                kind: "constructor".to_string(),
                inputs: constructor_inputs,
            }],
        }
    }

    /// Parse an artifact from its JSON representation.
    pub fn from_json(json: &serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(json.clone())
    }

    /// The constructor entry of the ABI, if the contract declares one.
    pub fn constructor(&self) -> Option<&AbiEntry> {
        self.abi.iter().find(|e| e.kind == "constructor")
    }
}

/// The closed set of ABI types a terms constructor may use.
///
/// Anything outside this set is a defect in the caller's artifact, not
/// user input — see [`crate::terms::TermsError::UnsupportedType`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AbiType {
    /// 20-byte address, carried as a hex string term
    Address,
    /// UTF-8 string
    String,
    /// Unsigned integer, 8 bits
    Uint8,
    /// Unsigned integer, 32 bits
    Uint32,
    /// Unsigned integer, 128 bits
    Uint128,
    /// Unsigned integer, 256 bits
    Uint256,
    /// Boolean flag
    Bool,
    /// Fixed-length array of uint56, length 24..=27 (bylaw matrices)
    Uint56Array(usize),
}

impl AbiType {
    /// Parse a raw ABI type tag. Returns `None` for tags outside the
    /// supported set.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "address" => Some(Self::Address),
            "string" => Some(Self::String),
            "uint8" => Some(Self::Uint8),
            "uint32" => Some(Self::Uint32),
            "uint128" => Some(Self::Uint128),
            "uint256" => Some(Self::Uint256),
            "bool" => Some(Self::Bool),
            "uint56[24]" => Some(Self::Uint56Array(24)),
            "uint56[25]" => Some(Self::Uint56Array(25)),
            "uint56[26]" => Some(Self::Uint56Array(26)),
            "uint56[27]" => Some(Self::Uint56Array(27)),
            _ => None,
        }
    }
}

impl fmt::Display for AbiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Address => write!(f, "address"),
            Self::String => write!(f, "string"),
            Self::Uint8 => write!(f, "uint8"),
            Self::Uint32 => write!(f, "uint32"),
            Self::Uint128 => write!(f, "uint128"),
            Self::Uint256 => write!(f, "uint256"),
            Self::Bool => write!(f, "bool"),
            Self::Uint56Array(len) => write!(f, "uint56[{len}]"),
        }
    }
}
