//! A poker hand catalog and validation engine with optional `no_std` support.
//!
//! The crate answers one question for hand-entry forms: do the selected
//! cards really form the claimed hand? Cards are written as tokens made of a
//! rank (`A`, `K`, `Q`, `J`, `10` down to `2`) followed by a suit symbol
//! (`♠`, `♥`, `♦`, `♣`).
//!
//! # Example
//!
//! ```
//! use pokerhands::{categories, lookup, validate};
//!
//! assert_eq!(categories().len(), 10);
//! assert_eq!(lookup("royal-flush").unwrap().strength, 10);
//! assert_eq!(validate("full-house", &["K♠", "K♥", "K♦", "10♣", "10♠"]), Ok(true));
//! assert_eq!(validate("full-house", &["K♠", "K♥", "K♦", "10♣", "9♠"]), Ok(false));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod hand;
pub mod options;
pub mod result;
pub mod selection;
pub mod validator;

// Re-export main types
pub use card::{Card, DECK_SIZE, Deck, Rank, Suit};
pub use error::{CardError, CatalogError, TemplateError, ValidateError};
pub use hand::{HandInfo, HandKind, best_hand, categories, lookup};
pub use options::ValidatorOptions;
pub use result::Verdict;
pub use selection::CardSelection;
pub use validator::{HAND_SIZE, Validator, parse_tokens, template};

/// Validates card tokens against a category identifier with default options.
///
/// # Errors
///
/// Returns an error if the category is unknown or a token is malformed.
pub fn validate<S: AsRef<str>>(id: &str, tokens: &[S]) -> Result<bool, ValidateError> {
    Validator::default().validate(id, tokens)
}
