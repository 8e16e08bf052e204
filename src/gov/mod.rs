//! Governance state model.
//!
//! Enumerations shared between the bylaw codec and the default bylaw
//! matrix: which actions exist, who may trigger them, and how tokenholder
//! votes count. The numeric discriminants are part of the on-chain format
//! and must not be reordered.

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod bylaw;
pub mod defaults;

/// Governance actions a company can resolve on.
///
/// One bylaw is encoded per action; `ACTION_BYLAWS` arrays are indexed by
/// this enum's discriminant.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum GovAction {
    None = 0,
    RestrictedNone = 1,
    CompanyNone = 2,
    THRNone = 3,
    StopToken = 4,
    ContinueToken = 5,
    CloseToken = 6,
    OrdinaryPayout = 7,
    ExtraordinaryPayout = 8,
    RegisterOffer = 9,
    ChangeTokenController = 10,
    AmendGovernance = 11,
    CancelResolution = 12,
    ChangeOfControl = 13,
    DissolveCompany = 14,
    TagAlong = 15,
    ChangeNominee = 16,
    AntiDilutionProtection = 17,
    EstablishESOP = 18,
    ConvertESOP = 19,
    AmendSharesAndValuation = 20,
    AmendValuation = 21,
    IssueTokensForExistingShares = 22,
    IssueSharesForExistingTokens = 23,
    EstablishAuthorizedCapital = 24,
    AnnualGeneralMeeting = 25,
}

impl GovAction {
    /// Every action, in discriminant order.
    pub const ALL: [Self; 26] = [
        Self::None,
        Self::RestrictedNone,
        Self::CompanyNone,
        Self::THRNone,
        Self::StopToken,
        Self::ContinueToken,
        Self::CloseToken,
        Self::OrdinaryPayout,
        Self::ExtraordinaryPayout,
        Self::RegisterOffer,
        Self::ChangeTokenController,
        Self::AmendGovernance,
        Self::CancelResolution,
        Self::ChangeOfControl,
        Self::DissolveCompany,
        Self::TagAlong,
        Self::ChangeNominee,
        Self::AntiDilutionProtection,
        Self::EstablishESOP,
        Self::ConvertESOP,
        Self::AmendSharesAndValuation,
        Self::AmendValuation,
        Self::IssueTokensForExistingShares,
        Self::IssueSharesForExistingTokens,
        Self::EstablishAuthorizedCapital,
        Self::AnnualGeneralMeeting,
    ];

    /// Number of governance actions (the length of `ACTION_BYLAWS` arrays).
    pub const COUNT: usize = Self::ALL.len();

    /// Action name as used in diagnostics and decode output.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::RestrictedNone => "RestrictedNone",
            Self::CompanyNone => "CompanyNone",
            Self::THRNone => "THRNone",
            Self::StopToken => "StopToken",
            Self::ContinueToken => "ContinueToken",
            Self::CloseToken => "CloseToken",
            Self::OrdinaryPayout => "OrdinaryPayout",
            Self::ExtraordinaryPayout => "ExtraordinaryPayout",
            Self::RegisterOffer => "RegisterOffer",
            Self::ChangeTokenController => "ChangeTokenController",
            Self::AmendGovernance => "AmendGovernance",
            Self::CancelResolution => "CancelResolution",
            Self::ChangeOfControl => "ChangeOfControl",
            Self::DissolveCompany => "DissolveCompany",
            Self::TagAlong => "TagAlong",
            Self::ChangeNominee => "ChangeNominee",
            Self::AntiDilutionProtection => "AntiDilutionProtection",
            Self::EstablishESOP => "EstablishESOP",
            Self::ConvertESOP => "ConvertESOP",
            Self::AmendSharesAndValuation => "AmendSharesAndValuation",
            Self::AmendValuation => "AmendValuation",
            Self::IssueTokensForExistingShares => "IssueTokensForExistingShares",
            Self::IssueSharesForExistingTokens => "IssueSharesForExistingTokens",
            Self::EstablishAuthorizedCapital => "EstablishAuthorizedCapital",
            Self::AnnualGeneralMeeting => "AnnualGeneralMeeting",
        }
    }

    /// The action's index in the bylaw matrix.
    pub const fn index(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for GovAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u8> for GovAction {
    type Error = u8;

    fn try_from(index: u8) -> Result<Self, u8> {
        Self::ALL.get(index as usize).copied().ok_or(index)
    }
}

/// Who must resolve before a governance action may execute.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GovActionEscalation {
    /// No escalation, anyone may trigger
    Anyone = 0,
    /// Any single tokenholder
    TokenHolder = 1,
    /// The company legal representative
    CompanyLegalRep = 2,
    /// The nominee
    Nominee = 3,
    /// Company legal representative or nominee
    CompanyOrNominee = 4,
    /// Tokenholder resolution (a vote)
    THR = 5,
    /// Shareholder resolution (a vote)
    SHR = 6,
    /// Resolution of the parent entity
    ParentResolution = 7,
}

impl TryFrom<u8> for GovActionEscalation {
    type Error = u8;

    fn try_from(code: u8) -> Result<Self, u8> {
        match code {
            0 => Ok(Self::Anyone),
            1 => Ok(Self::TokenHolder),
            2 => Ok(Self::CompanyLegalRep),
            3 => Ok(Self::Nominee),
            4 => Ok(Self::CompanyOrNominee),
            5 => Ok(Self::THR),
            6 => Ok(Self::SHR),
            7 => Ok(Self::ParentResolution),
            other => Err(other),
        }
    }
}

/// How equity token votes convert into shareholder resolution votes.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GovTokenVotingRule {
    /// Tokenholders do not vote on this action
    NoVotingRights = 0,
    /// Absent votes count as yes
    Positive = 1,
    /// Absent votes count as no
    Negative = 2,
    /// Only cast votes count, pro rata
    Prorata = 3,
}

impl TryFrom<u8> for GovTokenVotingRule {
    type Error = u8;

    fn try_from(code: u8) -> Result<Self, u8> {
        match code {
            0 => Ok(Self::NoVotingRights),
            1 => Ok(Self::Positive),
            2 => Ok(Self::Negative),
            3 => Ok(Self::Prorata),
            other => Err(other),
        }
    }
}

/// Legal representative (and voting initiator) codes, packed in 3 bits of
/// the bylaw voting-info byte.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GovActionLegalRep {
    /// No legal representative involved
    None = 0,
    /// The company legal representative
    CompanyLegalRep = 1,
    /// The nominee
    Nominee = 2,
}

/// Whether the escalation level requires an on-chain vote.
pub const fn is_voting_escalation(escalation: GovActionEscalation) -> bool {
    matches!(
        escalation,
        GovActionEscalation::THR | GovActionEscalation::SHR
    )
}

/// Whether a voting rule grants tokenholders any voting rights at all.
pub const fn has_voting_rights(rule: GovTokenVotingRule) -> bool {
    !matches!(rule, GovTokenVotingRule::NoVotingRights)
}
