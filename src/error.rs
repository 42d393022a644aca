//! Error types for catalog and validation operations.

use thiserror::Error;

/// Errors that can occur when parsing a card token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// The token is empty.
    #[error("card token is empty")]
    Empty,
    /// The rank text is not one of A, K, Q, J, 10 down to 2.
    #[error("unknown card rank")]
    UnknownRank,
    /// The last character is not a suit symbol.
    #[error("unknown suit symbol")]
    UnknownSuit,
}

/// Errors that can occur during catalog lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Category identifier not found.
    #[error("unknown hand category")]
    UnknownCategory,
}

/// Errors that can occur during hand validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidateError {
    /// Category identifier not found.
    #[error("unknown hand category")]
    UnknownCategory,
    /// A card token could not be parsed.
    #[error("invalid card token at position {index}: {reason}")]
    InvalidCardToken {
        /// Position of the token in the input.
        index: usize,
        /// Why the token was rejected.
        reason: CardError,
    },
}

impl From<CatalogError> for ValidateError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::UnknownCategory => Self::UnknownCategory,
        }
    }
}

/// Errors that can occur when building a hand template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// A rank needed by the category was not given.
    #[error("a rank is required for this hand")]
    MissingRank,
    /// A suit needed by the category was not given.
    #[error("a suit is required for this hand")]
    MissingSuit,
    /// The starting rank leaves fewer than five ranks below it.
    #[error("rank is too low to start a sequence")]
    RankOutOfRange,
    /// Both ranks of a two-rank hand are the same.
    #[error("the two ranks of this hand must differ")]
    SameRank,
}
