//! Default bylaw matrix.
//!
//! Derives one bylaw per governance action from a tokenholder-rights terms
//! dictionary, then folds the encoded matrix back into the dictionary in
//! the shape the rights contract constructor expects.

use alloy_primitives::U256;

use crate::gov::bylaw::{Bylaw, BylawError, BylawTerms};
use crate::gov::{
    has_voting_rights, GovAction, GovActionEscalation, GovActionLegalRep, GovTokenVotingRule,
};
use crate::terms::{TermValue, TermsDictionary};

/// Dictionary keys consumed by bylaw generation and dropped by
/// [`apply_bylaws_to_rights`].
pub const VOTING_TERM_KEYS: [&str; 6] = [
    "GENERAL_VOTING_RULE",
    "TAG_ALONG_VOTING_RULE",
    "GENERAL_VOTING_DURATION",
    "RESTRICTED_ACT_VOTING_DURATION",
    "SHAREHOLDERS_VOTING_QUORUM_FRAC",
    "VOTING_MAJORITY_FRAC",
];

/// Failures while pulling voting terms out of a dictionary.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GovTermsError {
    /// A required voting term is absent
    #[error("voting term {0} is missing")]
    MissingTerm(&'static str),
    /// A voting term is not an unsigned integer
    #[error("voting term {0} must be a number")]
    NotNumeric(&'static str),
    /// A voting-rule term holds a code outside [`GovTokenVotingRule`]
    #[error("voting term {key} holds unknown voting rule {code}")]
    UnknownVotingRule {
        /// The offending key
        key: &'static str,
        /// The out-of-range code
        code: U256,
    },
}

/// The six voting-related tokenholder terms, extracted and typed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VotingTerms {
    /// Voting rule for general resolutions
    pub general_voting_rule: GovTokenVotingRule,
    /// Voting rule for tag-along
    pub tag_along_voting_rule: GovTokenVotingRule,
    /// Voting window for general resolutions, seconds
    pub general_voting_duration: U256,
    /// Voting window for restricted acts, seconds
    pub restricted_act_voting_duration: U256,
    /// Shareholder voting quorum, ULPS fraction
    pub shareholders_voting_quorum: U256,
    /// Voting majority, ULPS fraction
    pub voting_majority: U256,
}

impl VotingTerms {
    /// Pull the voting terms out of a tokenholder-rights dictionary.
    pub fn from_dictionary(terms: &TermsDictionary) -> Result<Self, GovTermsError> {
        Ok(Self {
            general_voting_rule: rule_term(terms, "GENERAL_VOTING_RULE")?,
            tag_along_voting_rule: rule_term(terms, "TAG_ALONG_VOTING_RULE")?,
            general_voting_duration: uint_term(terms, "GENERAL_VOTING_DURATION")?,
            restricted_act_voting_duration: uint_term(terms, "RESTRICTED_ACT_VOTING_DURATION")?,
            shareholders_voting_quorum: uint_term(terms, "SHAREHOLDERS_VOTING_QUORUM_FRAC")?,
            voting_majority: uint_term(terms, "VOTING_MAJORITY_FRAC")?,
        })
    }
}

fn uint_term(terms: &TermsDictionary, key: &'static str) -> Result<U256, GovTermsError> {
    match terms.get(key) {
        Some(TermValue::Uint(value)) => Ok(*value),
        Some(_) => Err(GovTermsError::NotNumeric(key)),
        None => Err(GovTermsError::MissingTerm(key)),
    }
}

fn rule_term(
    terms: &TermsDictionary,
    key: &'static str,
) -> Result<GovTokenVotingRule, GovTermsError> {
    let code = uint_term(terms, key)?;
    let byte =
        u8::try_from(code).map_err(|_| GovTermsError::UnknownVotingRule { key, code })?;
    GovTokenVotingRule::try_from(byte)
        .map_err(|_| GovTermsError::UnknownVotingRule { key, code })
}

/// Encode the default bylaw for every governance action, in
/// [`GovAction::ALL`] order.
pub fn generate_default_bylaws(voting: &VotingTerms) -> Result<Vec<Bylaw>, BylawError> {
    GovAction::ALL.iter().map(|action| default_bylaw(*action, voting)).collect()
}

fn default_bylaw(action: GovAction, voting: &VotingTerms) -> Result<Bylaw, BylawError> {
    use GovAction::*;

    let terms = match action {
        // restricted acts: shareholder resolution on the restricted window
        RestrictedNone | ChangeOfControl | DissolveCompany => shr_bylaw(
            voting,
            voting.restricted_act_voting_duration,
            voting.general_voting_rule,
            false,
        ),
        // tag-along is decided by tokenholders alone
        TagAlong => BylawTerms {
            escalation: GovActionEscalation::THR,
            voting_duration: voting.general_voting_duration,
            quorum: voting.shareholders_voting_quorum,
            majority: voting.voting_majority,
            absolute_majority: U256::ZERO,
            voting_rule: voting.tag_along_voting_rule,
            voting_legal_rep: GovActionLegalRep::None,
            voting_initiator: GovActionLegalRep::Nominee,
            tokenholder_initiative: false,
        },
        THRNone => BylawTerms {
            escalation: GovActionEscalation::THR,
            voting_duration: voting.general_voting_duration,
            quorum: voting.shareholders_voting_quorum,
            majority: voting.voting_majority,
            absolute_majority: U256::ZERO,
            voting_rule: GovTokenVotingRule::Prorata,
            voting_legal_rep: GovActionLegalRep::None,
            voting_initiator: GovActionLegalRep::Nominee,
            tokenholder_initiative: true,
        },
        ChangeNominee => empty_bylaw(GovActionEscalation::Nominee),
        AntiDilutionProtection => empty_bylaw(GovActionEscalation::TokenHolder),
        CloseToken => empty_bylaw(GovActionEscalation::ParentResolution),
        ChangeTokenController | CancelResolution => empty_bylaw(GovActionEscalation::Anyone),
        CompanyNone | StopToken | ContinueToken | OrdinaryPayout | EstablishESOP
        | ConvertESOP | AmendSharesAndValuation | AmendValuation => {
            empty_bylaw(GovActionEscalation::CompanyLegalRep)
        }
        ExtraordinaryPayout | RegisterOffer | AmendGovernance
        | IssueTokensForExistingShares | IssueSharesForExistingTokens
        | EstablishAuthorizedCapital | AnnualGeneralMeeting => shr_bylaw(
            voting,
            voting.general_voting_duration,
            voting.general_voting_rule,
            false,
        ),
        // the catch-all general resolution may be campaigned by tokenholders
        None => shr_bylaw(
            voting,
            voting.general_voting_duration,
            voting.general_voting_rule,
            true,
        ),
    };
    terms.encode()
}

/// Shareholder resolution bylaw with company legal rep on both seats.
fn shr_bylaw(
    voting: &VotingTerms,
    duration: U256,
    rule: GovTokenVotingRule,
    initiative: bool,
) -> BylawTerms {
    BylawTerms {
        escalation: GovActionEscalation::SHR,
        voting_duration: duration,
        quorum: voting.shareholders_voting_quorum,
        majority: voting.voting_majority,
        absolute_majority: U256::ZERO,
        voting_rule: rule,
        voting_legal_rep: GovActionLegalRep::CompanyLegalRep,
        voting_initiator: GovActionLegalRep::CompanyLegalRep,
        tokenholder_initiative: initiative,
    }
}

/// A no-vote bylaw: the escalation alone decides.
fn empty_bylaw(escalation: GovActionEscalation) -> BylawTerms {
    BylawTerms {
        escalation,
        voting_duration: U256::ZERO,
        quorum: U256::ZERO,
        majority: U256::ZERO,
        absolute_majority: U256::ZERO,
        voting_rule: GovTokenVotingRule::NoVotingRights,
        voting_legal_rep: GovActionLegalRep::None,
        voting_initiator: GovActionLegalRep::None,
        tokenholder_initiative: false,
    }
}

/// Fold an encoded bylaw matrix into a rights dictionary: the raw voting
/// keys are dropped, `HAS_VOTING_RIGHTS` and `ACTION_BYLAWS` appended.
pub fn apply_bylaws_to_rights(
    terms: &TermsDictionary,
    voting: &VotingTerms,
    bylaws: &[Bylaw],
) -> TermsDictionary {
    let mut rights = terms.clone();
    for key in VOTING_TERM_KEYS {
        rights.remove(key);
    }
    rights.insert(
        "HAS_VOTING_RIGHTS",
        has_voting_rights(voting.general_voting_rule),
    );
    rights.insert(
        "ACTION_BYLAWS",
        TermValue::UintArray(bylaws.iter().map(|b| b.to_uint()).collect()),
    );
    rights
}
