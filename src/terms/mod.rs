//! Terms dictionaries and their validation against contract artifacts.

pub mod binding;
pub mod defaults;
pub mod dict;
pub mod validate;
pub mod value;
pub mod verify;

pub use dict::TermsDictionary;
pub use validate::{validate_terms, TermsError};
pub use value::TermValue;
pub use verify::{verify_terms, VerifyError};
