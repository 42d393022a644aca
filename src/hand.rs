//! Hand categories and the static hand catalog.

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use crate::error::CatalogError;

/// A poker hand category.
///
/// Categories compare by strength, so `HandKind::RoyalFlush` is the
/// greatest value and `HandKind::HighCard` the least.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandKind {
    /// A, K, Q, J, 10 of the same suit.
    RoyalFlush,
    /// Five consecutive ranks of the same suit.
    StraightFlush,
    /// Four cards of the same rank.
    FourOfAKind,
    /// Three of one rank and two of another.
    FullHouse,
    /// Five cards of the same suit.
    Flush,
    /// Five consecutive ranks.
    Straight,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Two different pairs.
    TwoPairs,
    /// Two cards of the same rank.
    OnePair,
    /// No combination.
    HighCard,
}

/// Display metadata for a hand category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandInfo {
    /// The category.
    pub kind: HandKind,
    /// Stable identifier (e.g. `"full-house"`).
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Short description of the hand.
    pub description: &'static str,
    /// Strength rank, 10 for the best hand and 1 for the worst.
    pub strength: u8,
    /// Minimum number of cards needed to prove the hand.
    pub min_cards: usize,
    /// Example cards for the hand.
    pub example: &'static str,
}

static CATALOG: [HandInfo; 10] = [
    HandInfo {
        kind: HandKind::RoyalFlush,
        id: "royal-flush",
        name: "Royal Flush",
        description: "A, K, Q, J, 10 of the same suit",
        strength: 10,
        min_cards: 5,
        example: "A♠ K♠ Q♠ J♠ 10♠",
    },
    HandInfo {
        kind: HandKind::StraightFlush,
        id: "straight-flush",
        name: "Straight Flush",
        description: "Five cards in sequence of the same suit",
        strength: 9,
        min_cards: 5,
        example: "9♥ 8♥ 7♥ 6♥ 5♥",
    },
    HandInfo {
        kind: HandKind::FourOfAKind,
        id: "four-of-a-kind",
        name: "Four of a Kind",
        description: "Four cards of the same rank",
        strength: 8,
        min_cards: 4,
        example: "Q♠ Q♥ Q♦ Q♣",
    },
    HandInfo {
        kind: HandKind::FullHouse,
        id: "full-house",
        name: "Full House",
        description: "Three of a kind and a pair",
        strength: 7,
        min_cards: 5,
        example: "K♠ K♥ K♦ 10♣ 10♠",
    },
    HandInfo {
        kind: HandKind::Flush,
        id: "flush",
        name: "Flush",
        description: "Five cards of the same suit",
        strength: 6,
        min_cards: 5,
        example: "A♣ J♣ 8♣ 6♣ 2♣",
    },
    HandInfo {
        kind: HandKind::Straight,
        id: "straight",
        name: "Straight",
        description: "Five cards in sequence",
        strength: 5,
        min_cards: 5,
        example: "Q♠ J♥ 10♦ 9♣ 8♠",
    },
    HandInfo {
        kind: HandKind::ThreeOfAKind,
        id: "three-of-a-kind",
        name: "Three of a Kind",
        description: "Three cards of the same rank",
        strength: 4,
        min_cards: 3,
        example: "7♠ 7♥ 7♦",
    },
    HandInfo {
        kind: HandKind::TwoPairs,
        id: "two-pairs",
        name: "Two Pairs",
        description: "Two different pairs",
        strength: 3,
        min_cards: 4,
        example: "A♠ A♥ 6♦ 6♣",
    },
    HandInfo {
        kind: HandKind::OnePair,
        id: "one-pair",
        name: "One Pair",
        description: "Two cards of the same rank",
        strength: 2,
        min_cards: 2,
        example: "J♠ J♥",
    },
    HandInfo {
        kind: HandKind::HighCard,
        id: "high-card",
        name: "High Card",
        description: "No combination, the highest card plays",
        strength: 1,
        min_cards: 1,
        example: "A♠",
    },
];

/// Returns every hand category, strongest first.
#[must_use]
pub fn categories() -> &'static [HandInfo] {
    &CATALOG
}

/// Looks up a hand category by identifier.
///
/// # Errors
///
/// Returns [`CatalogError::UnknownCategory`] if the identifier is not known.
///
/// # Example
///
/// ```
/// use pokerhands::{CatalogError, lookup};
///
/// assert_eq!(lookup("full-house").unwrap().min_cards, 5);
/// assert_eq!(lookup("five-aces"), Err(CatalogError::UnknownCategory));
/// ```
pub fn lookup(id: &str) -> Result<&'static HandInfo, CatalogError> {
    id.parse::<HandKind>().map(HandKind::info)
}

/// Returns the strongest of the given hands.
///
/// Returns `None` if there are no hands.
#[must_use]
pub fn best_hand<I>(hands: I) -> Option<HandKind>
where
    I: IntoIterator<Item = HandKind>,
{
    hands.into_iter().max()
}

impl HandKind {
    /// All categories, strongest first.
    pub const ALL: [Self; 10] = [
        Self::RoyalFlush,
        Self::StraightFlush,
        Self::FourOfAKind,
        Self::FullHouse,
        Self::Flush,
        Self::Straight,
        Self::ThreeOfAKind,
        Self::TwoPairs,
        Self::OnePair,
        Self::HighCard,
    ];

    const fn position(self) -> usize {
        match self {
            Self::RoyalFlush => 0,
            Self::StraightFlush => 1,
            Self::FourOfAKind => 2,
            Self::FullHouse => 3,
            Self::Flush => 4,
            Self::Straight => 5,
            Self::ThreeOfAKind => 6,
            Self::TwoPairs => 7,
            Self::OnePair => 8,
            Self::HighCard => 9,
        }
    }

    /// Returns the catalog entry for this category.
    #[must_use]
    pub fn info(self) -> &'static HandInfo {
        &CATALOG[self.position()]
    }

    /// Returns the stable identifier.
    #[must_use]
    pub fn id(self) -> &'static str {
        self.info().id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// Returns the strength rank (10 = best).
    #[must_use]
    pub fn strength(self) -> u8 {
        self.info().strength
    }

    /// Returns the minimum number of cards needed to prove the hand.
    #[must_use]
    pub fn min_cards(self) -> usize {
        self.info().min_cards
    }
}

impl PartialOrd for HandKind {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandKind {
    fn cmp(&self, other: &Self) -> Ordering {
        self.strength().cmp(&other.strength())
    }
}

impl FromStr for HandKind {
    type Err = CatalogError;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        if id == "two-pair" {
            return Ok(Self::TwoPairs);
        }

        CATALOG
            .iter()
            .find(|info| info.id == id)
            .map(|info| info.kind)
            .ok_or(CatalogError::UnknownCategory)
    }
}

impl fmt::Display for HandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
