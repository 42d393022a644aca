//! Validator configuration options.

/// Configuration options for a [`Validator`](crate::Validator).
///
/// Use the builder pattern to customize options:
///
/// ```
/// use pokerhands::ValidatorOptions;
///
/// let options = ValidatorOptions::default()
///     .with_strict_card_count(true)
///     .with_max_cards(7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValidatorOptions {
    /// Whether a card set must hold exactly the number of cards its
    /// category needs. When `false`, four of a kind, three of a kind, two
    /// pairs and one pair also accept sets carrying extra cards.
    pub strict_card_count: bool,
    /// Maximum number of cards a selection may hold.
    pub max_cards: usize,
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self {
            strict_card_count: false,
            max_cards: 5,
        }
    }
}

impl ValidatorOptions {
    /// Sets whether card sets must hold exactly the required card count.
    ///
    /// # Example
    ///
    /// ```
    /// use pokerhands::ValidatorOptions;
    ///
    /// let options = ValidatorOptions::default().with_strict_card_count(true);
    /// assert!(options.strict_card_count);
    /// ```
    #[must_use]
    pub const fn with_strict_card_count(mut self, strict: bool) -> Self {
        self.strict_card_count = strict;
        self
    }

    /// Sets the maximum number of cards a selection may hold.
    ///
    /// # Example
    ///
    /// ```
    /// use pokerhands::ValidatorOptions;
    ///
    /// let options = ValidatorOptions::default().with_max_cards(7);
    /// assert_eq!(options.max_cards, 7);
    /// ```
    #[must_use]
    pub const fn with_max_cards(mut self, max_cards: usize) -> Self {
        self.max_cards = max_cards;
        self
    }
}
