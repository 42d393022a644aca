//! Validation outcome types.

use core::fmt;

use crate::hand::HandKind;

/// Outcome of checking a card selection against a claimed hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Not enough cards have been selected yet.
    NeedsCards {
        /// The claimed hand.
        kind: HandKind,
        /// Number of cards the hand needs.
        required: usize,
        /// Number of cards selected so far.
        selected: usize,
    },
    /// The cards form the claimed hand.
    Valid(HandKind),
    /// The cards do not form the claimed hand.
    Invalid(HandKind),
}

impl Verdict {
    /// Returns whether the cards form the claimed hand.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Returns the claimed hand.
    #[must_use]
    pub const fn kind(&self) -> HandKind {
        match self {
            Self::NeedsCards { kind, .. } | Self::Valid(kind) | Self::Invalid(kind) => *kind,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NeedsCards { kind, required, .. } => {
                write!(f, "Select {required} cards to form a {kind}.")
            }
            Self::Valid(kind) => write!(f, "Valid hand! The cards form a {kind}."),
            Self::Invalid(kind) => write!(f, "The selected cards do not form a {kind}."),
        }
    }
}
