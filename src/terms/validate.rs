//! Terms validation against a contract artifact.
//!
//! Pure projection: no side effects, no partial success. Either the full
//! ordered argument list comes back or the first violation is raised.

use crate::abi::{AbiType, ContractArtifact};
use crate::terms::{binding, TermValue, TermsDictionary};

/// Validation failures, in the order they are checked.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TermsError {
    /// The artifact declares no constructor at all
    #[error("artifact of {contract} has no constructor")]
    NoConstructor {
        /// Contract name from the artifact
        contract: String,
    },
    /// Dictionary size differs from constructor arity
    #[error("no. params in terms ({terms}) not equal no. inputs ({inputs}) in constructor of {contract}")]
    ArityMismatch {
        /// Contract name from the artifact
        contract: String,
        /// Number of dictionary keys supplied
        terms: usize,
        /// Number of constructor inputs declared
        inputs: usize,
    },
    /// A constructor input has no term bound to it
    #[error("input at {index} name in constructor \"{input}\" could not be found in terms of {contract}")]
    MissingField {
        /// Contract name from the artifact
        contract: String,
        /// Constructor input name
        input: String,
        /// Zero-based input position
        index: usize,
    },
    /// A term value does not fit the declared input type
    #[error("type mismatch type {kind} name {input} value {value} of {contract}")]
    TypeMismatch {
        /// Contract name from the artifact
        contract: String,
        /// Constructor input name
        input: String,
        /// Declared input type
        kind: AbiType,
        /// The offending value
        value: TermValue,
    },
    /// The artifact declares a type outside the supported set — a defect
    /// in the caller's artifact, not in the supplied terms
    #[error("unsupported abi type {kind} name {input} of {contract}")]
    UnsupportedType {
        /// Contract name from the artifact
        contract: String,
        /// Constructor input name
        input: String,
        /// The unrecognized raw type tag
        kind: String,
    },
}

/// Match a terms dictionary against an artifact's constructor.
///
/// Returns the dictionary keys and their values as parallel sequences,
/// both ordered by constructor position.
pub fn validate_terms(
    artifact: &ContractArtifact,
    terms: &TermsDictionary,
) -> Result<(Vec<String>, Vec<TermValue>), TermsError> {
    let contract = &artifact.contract_name;
    let constructor = artifact.constructor().ok_or_else(|| TermsError::NoConstructor {
        contract: contract.clone(),
    })?;

    if terms.len() != constructor.inputs.len() {
        return Err(TermsError::ArityMismatch {
            contract: contract.clone(),
            terms: terms.len(),
            inputs: constructor.inputs.len(),
        });
    }

    let mut keys = Vec::with_capacity(constructor.inputs.len());
    let mut values = Vec::with_capacity(constructor.inputs.len());
    for (index, input) in constructor.inputs.iter().enumerate() {
        let entry = binding::dictionary_key(&input.name)
            .and_then(|key| terms.get(key).map(|value| (key, value)));
        let Some((key, value)) = entry else {
            return Err(TermsError::MissingField {
                contract: contract.clone(),
                input: input.name.clone(),
                index,
            });
        };

        let Some(kind) = AbiType::parse(&input.kind) else {
            return Err(TermsError::UnsupportedType {
                contract: contract.clone(),
                input: input.name.clone(),
                kind: input.kind.clone(),
            });
        };
        if !value.matches(kind) {
            return Err(TermsError::TypeMismatch {
                contract: contract.clone(),
                input: input.name.clone(),
                kind,
                value: value.clone(),
            });
        }

        keys.push(key.to_string());
        values.push(value.clone());
    }

    Ok((keys, values))
}
