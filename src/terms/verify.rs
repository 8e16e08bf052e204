//! Deployed-state verification oracle.
//!
//! Reads back every term's accessor from a deployed contract and compares
//! it against the expected dictionary. This is test tooling, not
//! production logic: the first mismatch fails the run, naming the field.

use tracing::debug;

use crate::deploy::{ConnectorError, DeployedContract};
use crate::terms::{TermValue, TermsDictionary};

/// A verification failure, always naming the offending field.
#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    /// Accessor value differs from the expected term
    #[error("field {field}: expected {expected}, got {got}")]
    ValueMismatch {
        /// Field (accessor) name, with `[index]` suffix for array elements
        field: String,
        /// Expected value from the dictionary
        expected: TermValue,
        /// Value read from the deployed contract
        got: TermValue,
    },
    /// Array accessor returned the wrong number of elements
    #[error("field {field}: expected {expected} elements, got {got}")]
    LengthMismatch {
        /// Field (accessor) name
        field: String,
        /// Expected element count
        expected: usize,
        /// Element count read from the deployed contract
        got: usize,
    },
    /// A verified key has no entry in the expected dictionary
    #[error("field {field} has no expected value")]
    MissingExpectation {
        /// Field (accessor) name
        field: String,
    },
    /// The deployed contract could not serve a read
    #[error(transparent)]
    Connector(#[from] ConnectorError),
}

/// Read each key's accessor from `contract` and compare against
/// `expected`. Array values compare by length, then element-wise; scalars
/// compare directly. Reads are awaited one at a time.
pub async fn verify_terms(
    contract: &dyn DeployedContract,
    keys: &[String],
    expected: &TermsDictionary,
) -> Result<(), VerifyError> {
    for key in keys {
        let want = expected
            .get(key)
            .ok_or_else(|| VerifyError::MissingExpectation { field: key.clone() })?;
        let got = contract.read(key).await?;
        debug!(field = %key, value = %got, "read accessor");

        match (want, &got) {
            (TermValue::UintArray(want_items), TermValue::UintArray(got_items)) => {
                if want_items.len() != got_items.len() {
                    return Err(VerifyError::LengthMismatch {
                        field: key.clone(),
                        expected: want_items.len(),
                        got: got_items.len(),
                    });
                }
                for (i, (want_item, got_item)) in
                    want_items.iter().zip(got_items.iter()).enumerate()
                {
                    if want_item != got_item {
                        return Err(VerifyError::ValueMismatch {
                            field: format!("{key}[{i}]"),
                            expected: TermValue::Uint(*want_item),
                            got: TermValue::Uint(*got_item),
                        });
                    }
                }
            }
            _ if *want != got => {
                return Err(VerifyError::ValueMismatch {
                    field: key.clone(),
                    expected: want.clone(),
                    got,
                });
            }
            _ => {}
        }
    }
    Ok(())
}
