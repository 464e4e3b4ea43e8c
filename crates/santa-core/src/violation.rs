//! Rule violations reported by validation and feasibility checks.

use std::fmt;

use crate::participant::ParticipantId;

/// The rule a violation breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Every active participant gives exactly once and receives exactly once.
    Bijection,
    /// Nobody is assigned to themselves.
    SelfAssignment,
    /// Nobody receives someone they gave to within the lookback window.
    RepeatPair,
    /// Every participant keeps at least one allowed partner.
    Eligibility,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Bijection => write!(f, "bijection"),
            Rule::SelfAssignment => write!(f, "self-assignment"),
            Rule::RepeatPair => write!(f, "repeat-pair"),
            Rule::Eligibility => write!(f, "eligibility"),
        }
    }
}

/// A single broken invariant, naming the offending participant(s).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Violation {
    /// A giver that is not in the active roster.
    UnknownGiver(ParticipantId),
    /// An active participant that gives to nobody.
    MissingGiver(ParticipantId),
    /// A giver listed more than once, with every receiver it was listed with.
    DuplicateGiver {
        giver: ParticipantId,
        receivers: Vec<ParticipantId>,
    },
    /// A receiver that is not in the active roster.
    UnknownReceiver {
        giver: ParticipantId,
        receiver: ParticipantId,
    },
    /// A receiver assigned to more than one giver.
    DuplicateReceiver {
        receiver: ParticipantId,
        givers: Vec<ParticipantId>,
    },
    /// An active participant that receives from nobody.
    MissingReceiver(ParticipantId),
    /// A participant assigned to themselves.
    SelfAssignment(ParticipantId),
    /// A pairing that occurred within the lookback window.
    RepeatPair {
        giver: ParticipantId,
        receiver: ParticipantId,
    },
    /// A giver whose forbidden set covers the entire roster.
    NoEligibleReceiver(ParticipantId),
    /// A receiver that every other participant is forbidden to give to.
    NoEligibleGiver(ParticipantId),
}

impl Violation {
    /// Returns the rule this violation breaks.
    pub fn rule(&self) -> Rule {
        match self {
            Violation::SelfAssignment(_) => Rule::SelfAssignment,
            Violation::RepeatPair { .. } => Rule::RepeatPair,
            Violation::NoEligibleReceiver(_) | Violation::NoEligibleGiver(_) => Rule::Eligibility,
            Violation::UnknownGiver(_)
            | Violation::MissingGiver(_)
            | Violation::DuplicateGiver { .. }
            | Violation::UnknownReceiver { .. }
            | Violation::DuplicateReceiver { .. }
            | Violation::MissingReceiver(_) => Rule::Bijection,
        }
    }

    /// Returns every participant identifier involved in this violation.
    pub fn participants(&self) -> Vec<ParticipantId> {
        match self {
            Violation::UnknownGiver(id)
            | Violation::MissingGiver(id)
            | Violation::MissingReceiver(id)
            | Violation::SelfAssignment(id)
            | Violation::NoEligibleReceiver(id)
            | Violation::NoEligibleGiver(id) => vec![*id],
            Violation::UnknownReceiver { giver, receiver }
            | Violation::RepeatPair { giver, receiver } => vec![*giver, *receiver],
            Violation::DuplicateGiver { giver, receivers } => {
                let mut ids = Vec::with_capacity(receivers.len() + 1);
                ids.push(*giver);
                ids.extend(receivers.iter().copied());
                ids
            }
            Violation::DuplicateReceiver { receiver, givers } => {
                let mut ids = Vec::with_capacity(givers.len() + 1);
                ids.push(*receiver);
                ids.extend(givers.iter().copied());
                ids
            }
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::UnknownGiver(id) => write!(f, "giver {id} is not an active participant"),
            Violation::MissingGiver(id) => write!(f, "participant {id} gives to nobody"),
            Violation::DuplicateGiver { giver, receivers } => {
                write!(f, "participant {giver} gives to ")?;
                write_ids(f, receivers)
            }
            Violation::UnknownReceiver { giver, receiver } => write!(
                f,
                "giver {giver} is assigned to {receiver}, who is not an active participant"
            ),
            Violation::DuplicateReceiver { receiver, givers } => {
                write!(f, "participant {receiver} receives from ")?;
                write_ids(f, givers)
            }
            Violation::MissingReceiver(id) => write!(f, "participant {id} receives from nobody"),
            Violation::SelfAssignment(id) => write!(f, "participant {id} is assigned to themselves"),
            Violation::RepeatPair { giver, receiver } => write!(
                f,
                "giver {giver} already gave to {receiver} within the lookback window"
            ),
            Violation::NoEligibleReceiver(id) => {
                write!(f, "participant {id} has no eligible receiver")
            }
            Violation::NoEligibleGiver(id) => write!(f, "participant {id} has no eligible giver"),
        }
    }
}

fn write_ids(f: &mut fmt::Formatter<'_>, ids: &[ParticipantId]) -> fmt::Result {
    for (i, id) in ids.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{id}")?;
    }
    Ok(())
}
