//! Bylaw codec.
//!
//! A bylaw packs the voting rules of one governance action into seven
//! bytes, serialized as `0x` + 14 hex digits. The wire order is fixed:
//!
//! ```text
//! | escalation | duration (days) | quorum % | majority % | absolute majority % | voting rule | voting info |
//! ```
//!
//! Voting info is a single packed byte: bits 0-2 legal rep, bits 3-5
//! initiator, bit 6 tokenholder initiative. The deployed governance
//! contract consumes this format byte-exact.

use alloy_primitives::U256;

use crate::gov::{is_voting_escalation, GovAction, GovActionEscalation, GovActionLegalRep, GovTokenVotingRule};
use crate::units::{DAY_IN_SECONDS, Q16, Q18};

/// Serialized length in bytes.
pub const BYLAW_BYTES: usize = 7;

/// Bylaw codec errors. Encoding and decoding either fully succeed or fail
/// with one of these before producing output.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BylawError {
    /// A voting escalation needs a voting window
    #[error("voting duration must be set for a voting bylaw")]
    MissingVotingDuration,
    /// A voting escalation needs a way to pass: quorum with majority, or
    /// an absolute majority
    #[error("quorum/majority or absolute majority must be set for a voting bylaw")]
    MissingVotingThreshold,
    /// Fraction does not reduce to a whole percentage in [0, 100]
    #[error("fraction {0} ULPS is not a whole percentage in [0, 100]")]
    InvalidFraction(U256),
    /// Duration does not reduce to a whole day count in [0, 255]
    #[error("duration of {0} seconds is not a whole day count in [0, 255]")]
    InvalidDuration(U256),
    /// Decode index outside the governance action table
    #[error("no governance action at index {0}")]
    UnknownAction(u8),
    /// Serialized bylaw is not a 0x-prefixed hex string
    #[error("bylaw {0:?} must be a 0x-prefixed hex number")]
    MalformedHex(String),
    /// Serialized bylaw does not hold exactly seven bytes
    #[error("bylaw must contain exactly {BYLAW_BYTES} byte elements, got {0}")]
    WrongLength(usize),
}

/// Voting rules for one governance action, in dictionary-native units:
/// durations in seconds, fractions in ULPS (`Q18` = 100%).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BylawTerms {
    /// Who must resolve on the action
    pub escalation: GovActionEscalation,
    /// Voting window in seconds; must be a whole number of days
    pub voting_duration: U256,
    /// Quorum fraction in ULPS
    pub quorum: U256,
    /// Majority fraction in ULPS
    pub majority: U256,
    /// Absolute majority fraction in ULPS
    pub absolute_majority: U256,
    /// How token votes count
    pub voting_rule: GovTokenVotingRule,
    /// Legal representative for the vote
    pub voting_legal_rep: GovActionLegalRep,
    /// Who may initiate the vote
    pub voting_initiator: GovActionLegalRep,
    /// Whether tokenholders may campaign for the action themselves
    pub tokenholder_initiative: bool,
}

impl BylawTerms {
    /// Pack the terms into a [`Bylaw`].
    ///
    /// Voting escalations (THR/SHR) must carry a nonzero duration and
    /// either quorum with majority or an absolute majority. Fractions must
    /// reduce to whole percents, durations to whole day counts.
    pub fn encode(&self) -> Result<Bylaw, BylawError> {
        if is_voting_escalation(self.escalation) {
            if self.voting_duration.is_zero() {
                return Err(BylawError::MissingVotingDuration);
            }
            let has_quorum = !self.quorum.is_zero() && !self.majority.is_zero();
            let has_absolute_majority = !self.absolute_majority.is_zero();
            if !has_quorum && !has_absolute_majority {
                return Err(BylawError::MissingVotingThreshold);
            }
        }

        let voting_info = pack_voting_info(
            self.voting_legal_rep,
            self.voting_initiator,
            self.tokenholder_initiative,
        );

        Ok(Bylaw {
            escalation: self.escalation as u8,
            voting_duration_days: whole_days(self.voting_duration)?,
            quorum_percent: whole_percent(self.quorum)?,
            majority_percent: whole_percent(self.majority)?,
            absolute_majority_percent: whole_percent(self.absolute_majority)?,
            voting_rule: self.voting_rule as u8,
            voting_info,
        })
    }
}

/// Reduce a ULPS fraction to a whole percentage byte.
fn whole_percent(fraction: U256) -> Result<u8, BylawError> {
    let scaled = fraction
        .checked_mul(U256::from(100u64))
        .ok_or(BylawError::InvalidFraction(fraction))?;
    if scaled % Q18 != U256::ZERO {
        return Err(BylawError::InvalidFraction(fraction));
    }
    let percent = scaled / Q18;
    if percent > U256::from(100u64) {
        return Err(BylawError::InvalidFraction(fraction));
    }
    Ok(percent.to::<u8>())
}

/// Reduce a duration in seconds to a whole day-count byte.
fn whole_days(seconds: U256) -> Result<u8, BylawError> {
    let day = U256::from(DAY_IN_SECONDS);
    if seconds % day != U256::ZERO {
        return Err(BylawError::InvalidDuration(seconds));
    }
    let days = seconds / day;
    if days > U256::from(u8::MAX) {
        return Err(BylawError::InvalidDuration(seconds));
    }
    Ok(days.to::<u8>())
}

/// Pack legal rep, initiator and initiative flag into one byte
/// (initiative 1b | initiator 3b | legal rep 3b).
const fn pack_voting_info(
    legal_rep: GovActionLegalRep,
    initiator: GovActionLegalRep,
    initiative: bool,
) -> u8 {
    (legal_rep as u8) | ((initiator as u8) << 3) | if initiative { 0x40 } else { 0 }
}

/// The packed 7-byte bylaw record. Immutable once built; any change goes
/// through a fresh [`BylawTerms::encode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bylaw {
    /// Escalation code
    pub escalation: u8,
    /// Voting window in whole days
    pub voting_duration_days: u8,
    /// Quorum as a whole percentage
    pub quorum_percent: u8,
    /// Majority as a whole percentage
    pub majority_percent: u8,
    /// Absolute majority as a whole percentage
    pub absolute_majority_percent: u8,
    /// Token voting rule code
    pub voting_rule: u8,
    /// Packed legal rep / initiator / initiative byte
    pub voting_info: u8,
}

impl Bylaw {
    /// The seven wire bytes, in fixed order.
    pub const fn to_bytes(self) -> [u8; BYLAW_BYTES] {
        [
            self.escalation,
            self.voting_duration_days,
            self.quorum_percent,
            self.majority_percent,
            self.absolute_majority_percent,
            self.voting_rule,
            self.voting_info,
        ]
    }

    /// Serialize as `0x` + 14 lowercase hex digits.
    pub fn to_hex(self) -> String {
        format!("0x{}", hex::encode(self.to_bytes()))
    }

    /// The bylaw as an unsigned integer (big-endian interpretation of the
    /// wire bytes), the form stored in `ACTION_BYLAWS` constructor arrays.
    pub fn to_uint(self) -> U256 {
        U256::from_be_slice(&self.to_bytes())
    }

    /// Parse a `0x`-prefixed hex serialization of exactly seven bytes.
    pub fn from_hex(s: &str) -> Result<Self, BylawError> {
        let stripped = s
            .strip_prefix("0x")
            .ok_or_else(|| BylawError::MalformedHex(s.to_string()))?;
        let bytes =
            hex::decode(stripped).map_err(|_| BylawError::MalformedHex(s.to_string()))?;
        if bytes.len() != BYLAW_BYTES {
            return Err(BylawError::WrongLength(bytes.len()));
        }
        Ok(Self {
            escalation: bytes[0],
            voting_duration_days: bytes[1],
            quorum_percent: bytes[2],
            majority_percent: bytes[3],
            absolute_majority_percent: bytes[4],
            voting_rule: bytes[5],
            voting_info: bytes[6],
        })
    }
}

/// A decoded bylaw in dictionary-native units.
///
/// Escalation, voting rule and the 3-bit codes are carried raw: decoding
/// must invert whatever the wire holds, including codes a newer contract
/// version may have minted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedBylaw {
    /// The governance action this bylaw was stored under
    pub action: GovAction,
    /// Raw escalation code
    pub escalation: u8,
    /// Voting window in seconds
    pub voting_duration: U256,
    /// Quorum fraction in ULPS
    pub quorum: U256,
    /// Majority fraction in ULPS
    pub majority: U256,
    /// Absolute majority fraction in ULPS
    pub absolute_majority: U256,
    /// Raw token voting rule code
    pub voting_rule: u8,
    /// Raw legal rep code (bits 0-2 of voting info)
    pub voting_legal_rep: u8,
    /// Raw initiator code (bits 3-5 of voting info)
    pub voting_initiator: u8,
    /// Tokenholder initiative flag (bit 6 of voting info)
    pub tokenholder_initiative: bool,
}

/// Decode a serialized bylaw stored at `index` of a bylaw matrix.
///
/// The index resolves the human-readable action name; everything else is
/// the exact structural inverse of [`BylawTerms::encode`].
pub fn decode_bylaw(index: u8, bylaw: &str) -> Result<DecodedBylaw, BylawError> {
    let action = GovAction::try_from(index).map_err(BylawError::UnknownAction)?;
    let packed = Bylaw::from_hex(bylaw)?;
    Ok(DecodedBylaw {
        action,
        escalation: packed.escalation,
        voting_duration: U256::from(packed.voting_duration_days as u64 * DAY_IN_SECONDS),
        quorum: U256::from(packed.quorum_percent) * Q16,
        majority: U256::from(packed.majority_percent) * Q16,
        absolute_majority: U256::from(packed.absolute_majority_percent) * Q16,
        voting_rule: packed.voting_rule,
        voting_legal_rep: packed.voting_info & 0x7,
        voting_initiator: (packed.voting_info & 0x38) >> 3,
        tokenholder_initiative: (packed.voting_info & 0x40) != 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::days_to_seconds;

    fn voting_terms() -> BylawTerms {
        BylawTerms {
            escalation: GovActionEscalation::CompanyLegalRep,
            voting_duration: days_to_seconds(10),
            quorum: Q18 / U256::from(10u64),
            majority: Q18 / U256::from(2u64),
            absolute_majority: U256::ZERO,
            voting_rule: GovTokenVotingRule::Positive,
            voting_legal_rep: GovActionLegalRep::CompanyLegalRep,
            voting_initiator: GovActionLegalRep::CompanyLegalRep,
            tokenholder_initiative: false,
        }
    }

    #[test]
    fn test_encode_known_vector() {
        // escalation 2, 10 days, 10% quorum, 50% majority, rule 1,
        // legal rep 1, initiator 1, no initiative -> packed info 0x09
        let bylaw = voting_terms().encode().unwrap();
        assert_eq!(bylaw.to_hex(), "0x020a0a32000109");
        assert_eq!(bylaw.voting_info, 0x09);
    }

    #[test]
    fn test_encode_initiative_sets_bit_six() {
        let mut terms = voting_terms();
        terms.tokenholder_initiative = true;
        terms.voting_legal_rep = GovActionLegalRep::None;
        terms.voting_initiator = GovActionLegalRep::Nominee;
        let bylaw = terms.encode().unwrap();
        // nominee initiator (2 << 3) plus initiative bit
        assert_eq!(bylaw.voting_info, 0x50);
    }

    #[test]
    fn test_encode_duration_boundary() {
        let mut terms = voting_terms();
        terms.voting_duration = days_to_seconds(255);
        assert_eq!(terms.encode().unwrap().voting_duration_days, 255);

        terms.voting_duration = days_to_seconds(256);
        assert_eq!(
            terms.encode(),
            Err(BylawError::InvalidDuration(days_to_seconds(256)))
        );
    }

    #[test]
    fn test_encode_rejects_partial_days() {
        let mut terms = voting_terms();
        terms.voting_duration = days_to_seconds(2) + U256::from(1u64);
        assert!(matches!(terms.encode(), Err(BylawError::InvalidDuration(_))));
    }

    #[test]
    fn test_encode_fraction_boundary() {
        let mut terms = voting_terms();
        terms.quorum = Q18;
        assert_eq!(terms.encode().unwrap().quorum_percent, 100);

        terms.quorum = Q18 + Q16;
        assert!(matches!(terms.encode(), Err(BylawError::InvalidFraction(_))));
    }

    #[test]
    fn test_encode_rejects_fractional_percent() {
        let mut terms = voting_terms();
        // 33.3% does not reduce to a whole percentage
        terms.quorum = U256::from(333u64) * Q18 / U256::from(1000u64);
        assert!(matches!(terms.encode(), Err(BylawError::InvalidFraction(_))));
    }

    #[test]
    fn test_voting_escalation_requires_duration() {
        for escalation in [GovActionEscalation::THR, GovActionEscalation::SHR] {
            let mut terms = voting_terms();
            terms.escalation = escalation;
            terms.voting_duration = U256::ZERO;
            assert_eq!(terms.encode(), Err(BylawError::MissingVotingDuration));
        }
    }

    #[test]
    fn test_voting_escalation_requires_threshold() {
        let mut terms = voting_terms();
        terms.escalation = GovActionEscalation::SHR;
        terms.quorum = U256::ZERO;
        terms.majority = U256::ZERO;
        terms.absolute_majority = U256::ZERO;
        assert_eq!(terms.encode(), Err(BylawError::MissingVotingThreshold));

        // quorum alone is not enough, majority must come with it
        terms.quorum = Q16;
        assert_eq!(terms.encode(), Err(BylawError::MissingVotingThreshold));

        // an absolute majority alone is
        terms.quorum = U256::ZERO;
        terms.absolute_majority = Q18 / U256::from(2u64);
        assert!(terms.encode().is_ok());
    }

    #[test]
    fn test_non_voting_escalation_allows_empty_bylaw() {
        let terms = BylawTerms {
            escalation: GovActionEscalation::Anyone,
            voting_duration: U256::ZERO,
            quorum: U256::ZERO,
            majority: U256::ZERO,
            absolute_majority: U256::ZERO,
            voting_rule: GovTokenVotingRule::NoVotingRights,
            voting_legal_rep: GovActionLegalRep::None,
            voting_initiator: GovActionLegalRep::None,
            tokenholder_initiative: false,
        };
        assert_eq!(terms.encode().unwrap().to_hex(), "0x00000000000000");
    }

    #[test]
    fn test_decode_inverts_encode() {
        let terms = voting_terms();
        let bylaw = terms.encode().unwrap();
        let decoded = decode_bylaw(GovAction::None.index(), &bylaw.to_hex()).unwrap();

        assert_eq!(decoded.action, GovAction::None);
        assert_eq!(decoded.escalation, terms.escalation as u8);
        assert_eq!(decoded.voting_duration, terms.voting_duration);
        assert_eq!(decoded.quorum, terms.quorum);
        assert_eq!(decoded.majority, terms.majority);
        assert_eq!(decoded.absolute_majority, terms.absolute_majority);
        assert_eq!(decoded.voting_rule, terms.voting_rule as u8);
        assert_eq!(decoded.voting_legal_rep, terms.voting_legal_rep as u8);
        assert_eq!(decoded.voting_initiator, terms.voting_initiator as u8);
        assert!(!decoded.tokenholder_initiative);
    }

    #[test]
    fn test_decode_rejects_missing_prefix() {
        assert!(matches!(
            decode_bylaw(0, "020a0a32000109"),
            Err(BylawError::MalformedHex(_))
        ));
    }

    #[test]
    fn test_decode_rejects_bad_hex() {
        assert!(matches!(
            decode_bylaw(0, "0x02xa0a32000109"),
            Err(BylawError::MalformedHex(_))
        ));
    }

    #[test]
    fn test_decode_rejects_wrong_length() {
        assert_eq!(
            decode_bylaw(0, "0x020a0a320001"),
            Err(BylawError::WrongLength(6))
        );
        assert_eq!(
            decode_bylaw(0, "0x020a0a3200010900"),
            Err(BylawError::WrongLength(8))
        );
    }

    #[test]
    fn test_decode_rejects_unknown_action_index() {
        assert_eq!(
            decode_bylaw(26, "0x00000000000000"),
            Err(BylawError::UnknownAction(26))
        );
    }

    #[test]
    fn test_hex_roundtrip() {
        let bylaw = voting_terms().encode().unwrap();
        assert_eq!(Bylaw::from_hex(&bylaw.to_hex()), Ok(bylaw));
    }

    #[test]
    fn test_to_uint() {
        let bylaw = voting_terms().encode().unwrap();
        assert_eq!(bylaw.to_uint(), U256::from(0x020a_0a32_0001_09u64));
    }
}
