//! Hand validation and classification.

use alloc::vec::Vec;
use log::{debug, trace};

use crate::card::Card;
use crate::error::ValidateError;
use crate::hand::HandKind;
use crate::options::ValidatorOptions;
use crate::result::Verdict;
use crate::selection::CardSelection;

mod rules;
mod template;

pub use rules::HAND_SIZE;
pub use template::template;

/// Parses card tokens into cards.
///
/// # Errors
///
/// Returns [`ValidateError::InvalidCardToken`] for the first token that is
/// not a rank followed by a suit symbol.
pub fn parse_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Card>, ValidateError> {
    tokens
        .iter()
        .enumerate()
        .map(|(index, token)| {
            token.as_ref().parse().map_err(|reason| {
                debug!("rejecting card token {:?}: {reason}", token.as_ref());
                ValidateError::InvalidCardToken { index, reason }
            })
        })
        .collect()
}

/// Decides whether selected cards form a claimed hand.
///
/// The validator holds no state besides its options, so a single instance
/// can be shared freely.
///
/// # Example
///
/// ```
/// use pokerhands::{Validator, ValidatorOptions};
///
/// let validator = Validator::new(ValidatorOptions::default());
/// assert_eq!(validator.validate("straight", &["A♠", "5♥", "4♦", "3♣", "2♠"]), Ok(true));
/// assert_eq!(validator.validate("straight", &["K♠", "Q♥", "J♦", "9♣", "8♠"]), Ok(false));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validator {
    options: ValidatorOptions,
}

impl Validator {
    /// Creates a validator with the given options.
    #[must_use]
    pub const fn new(options: ValidatorOptions) -> Self {
        Self { options }
    }

    /// Returns the validator options.
    #[must_use]
    pub const fn options(&self) -> &ValidatorOptions {
        &self.options
    }

    /// Validates card tokens against a category identifier.
    ///
    /// Returns `Ok(false)` when fewer cards than the category needs are
    /// given.
    ///
    /// # Errors
    ///
    /// Returns an error if the category is unknown or a token is malformed.
    pub fn validate<S: AsRef<str>>(&self, id: &str, tokens: &[S]) -> Result<bool, ValidateError> {
        let kind = id.parse::<HandKind>().inspect_err(|_| {
            debug!("rejecting unknown hand category {id:?}");
        })?;
        let cards = parse_tokens(tokens)?;
        Ok(self.validate_cards(kind, &cards))
    }

    /// Validates parsed cards against a category.
    #[must_use]
    pub fn validate_cards(&self, kind: HandKind, cards: &[Card]) -> bool {
        let required = kind.min_cards();
        if cards.len() < required {
            trace!("{kind}: {} of {required} cards selected", cards.len());
            return false;
        }

        if self.options.strict_card_count && cards.len() != required {
            trace!("{kind}: expected exactly {required} cards, got {}", cards.len());
            return false;
        }

        let valid = rules::matches(kind, cards);
        trace!("{kind}: {cards:?} -> {valid}");
        valid
    }

    /// Checks parsed cards against a category, telling incomplete selections
    /// apart from wrong ones.
    #[must_use]
    pub fn check(&self, kind: HandKind, cards: &[Card]) -> Verdict {
        let required = kind.min_cards();
        if cards.len() < required {
            Verdict::NeedsCards {
                kind,
                required,
                selected: cards.len(),
            }
        } else if self.validate_cards(kind, cards) {
            Verdict::Valid(kind)
        } else {
            Verdict::Invalid(kind)
        }
    }

    /// Returns the strongest category the cards satisfy.
    ///
    /// Returns `None` if the cards satisfy no category.
    #[must_use]
    pub fn classify(&self, cards: &[Card]) -> Option<HandKind> {
        HandKind::ALL
            .into_iter()
            .find(|&kind| self.validate_cards(kind, cards))
    }

    /// Creates an empty selection sized by [`ValidatorOptions::max_cards`].
    #[must_use]
    pub fn selection(&self) -> CardSelection {
        CardSelection::with_capacity(self.options.max_cards)
    }
}
