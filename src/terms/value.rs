//! Typed term values.
//!
//! A dictionary value is one of four shapes, fixed at construction time.
//! Whether a value fits a constructor parameter is a closed match on this
//! enum against [`AbiType`] — there is no runtime type sniffing anywhere.

use alloy_primitives::U256;
use std::fmt;

use crate::abi::AbiType;

/// A single terms-dictionary value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TermValue {
    /// Text: strings, URLs, ISIN/currency codes, hex-encoded addresses
    Text(String),
    /// Boolean flag
    Bool(bool),
    /// Unsigned integer of any width up to 256 bits
    Uint(U256),
    /// Array of unsigned integers (bylaw matrices)
    UintArray(Vec<U256>),
}

impl TermValue {
    /// Text value from anything string-like.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Integer value from anything convertible to `U256`.
    pub fn uint(value: impl Into<u64>) -> Self {
        Self::Uint(U256::from(value.into()))
    }

    /// Whether this value is structurally compatible with a declared
    /// constructor parameter type.
    pub fn matches(&self, kind: AbiType) -> bool {
        match (self, kind) {
            (Self::Text(_), AbiType::Address | AbiType::String) => true,
            (
                Self::Uint(_),
                AbiType::Uint8 | AbiType::Uint32 | AbiType::Uint128 | AbiType::Uint256,
            ) => true,
            (Self::Bool(_), AbiType::Bool) => true,
            (Self::UintArray(values), AbiType::Uint56Array(len)) => values.len() == len,
            _ => false,
        }
    }
}

impl fmt::Display for TermValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s:?}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Uint(v) => write!(f, "{v}"),
            Self::UintArray(values) => {
                write!(f, "[")?;
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{v}")?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<&str> for TermValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for TermValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for TermValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<U256> for TermValue {
    fn from(value: U256) -> Self {
        Self::Uint(value)
    }
}

impl From<u64> for TermValue {
    fn from(value: u64) -> Self {
        Self::Uint(U256::from(value))
    }
}

impl From<Vec<U256>> for TermValue {
    fn from(values: Vec<U256>) -> Self {
        Self::UintArray(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_matches_string_and_address() {
        let value = TermValue::text("0xC5a96Db085dDA36FfBE390f455315D30D6D3DC52");
        assert!(value.matches(AbiType::Address));
        assert!(value.matches(AbiType::String));
        assert!(!value.matches(AbiType::Uint256));
        assert!(!value.matches(AbiType::Bool));
    }

    #[test]
    fn test_uint_matches_all_widths() {
        let value = TermValue::uint(42u64);
        for kind in [AbiType::Uint8, AbiType::Uint32, AbiType::Uint128, AbiType::Uint256] {
            assert!(value.matches(kind));
        }
        assert!(!value.matches(AbiType::String));
    }

    #[test]
    fn test_array_matches_exact_length_only() {
        let value = TermValue::UintArray(vec![U256::ZERO; 26]);
        assert!(value.matches(AbiType::Uint56Array(26)));
        assert!(!value.matches(AbiType::Uint56Array(27)));
        assert!(!value.matches(AbiType::Uint256));
    }

    #[test]
    fn test_display() {
        assert_eq!(TermValue::text("DE").to_string(), "\"DE\"");
        assert_eq!(TermValue::Bool(true).to_string(), "true");
        assert_eq!(TermValue::uint(7u64).to_string(), "7");
        assert_eq!(
            TermValue::UintArray(vec![U256::from(1u64), U256::from(2u64)]).to_string(),
            "[1, 2]"
        );
    }
}
