//! Structural rules for each hand category.

use crate::card::{Card, Rank};
use crate::hand::HandKind;

/// Number of cards in a complete poker hand.
pub const HAND_SIZE: usize = 5;

/// Rank indices of A-5-4-3-2, the only straight where the ace plays low.
const WHEEL: [usize; HAND_SIZE] = [0, 9, 10, 11, 12];

const ROYAL: [Rank; HAND_SIZE] = [Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Ten];

fn rank_counts(cards: &[Card]) -> [u8; 13] {
    let mut counts = [0_u8; 13];
    for card in cards {
        let count = &mut counts[card.rank.index()];
        *count = count.saturating_add(1);
    }
    counts
}

fn has_rank_count(cards: &[Card], n: u8) -> bool {
    rank_counts(cards).iter().any(|&count| count >= n)
}

fn same_suit(cards: &[Card]) -> bool {
    cards
        .first()
        .is_some_and(|first| cards.iter().all(|card| card.suit == first.suit))
}

fn royal_flush(cards: &[Card]) -> bool {
    cards.len() == HAND_SIZE
        && same_suit(cards)
        && ROYAL
            .iter()
            .all(|rank| cards.iter().any(|card| card.rank == *rank))
}

fn straight_flush(cards: &[Card]) -> bool {
    cards.len() == HAND_SIZE && same_suit(cards) && straight(cards)
}

fn full_house(cards: &[Card]) -> bool {
    if cards.len() != HAND_SIZE {
        return false;
    }

    let counts = rank_counts(cards);
    counts.contains(&3) && counts.contains(&2)
}

fn flush(cards: &[Card]) -> bool {
    cards.len() == HAND_SIZE && same_suit(cards)
}

fn straight(cards: &[Card]) -> bool {
    if cards.len() != HAND_SIZE {
        return false;
    }

    let mut indices = [0_usize; HAND_SIZE];
    for (slot, card) in indices.iter_mut().zip(cards) {
        *slot = card.rank.index();
    }
    indices.sort_unstable();

    indices == WHEEL || indices.windows(2).all(|pair| pair[1] == pair[0] + 1)
}

fn two_pairs(cards: &[Card]) -> bool {
    cards.len() >= 4 && rank_counts(cards).iter().filter(|&&count| count >= 2).count() >= 2
}

/// Returns whether the cards satisfy the structural rule of a category.
///
/// The minimum card count of the category is checked by the caller.
pub fn matches(kind: HandKind, cards: &[Card]) -> bool {
    match kind {
        HandKind::RoyalFlush => royal_flush(cards),
        HandKind::StraightFlush => straight_flush(cards),
        HandKind::FourOfAKind => cards.len() >= 4 && has_rank_count(cards, 4),
        HandKind::FullHouse => full_house(cards),
        HandKind::Flush => flush(cards),
        HandKind::Straight => straight(cards),
        HandKind::ThreeOfAKind => cards.len() >= 3 && has_rank_count(cards, 3),
        HandKind::TwoPairs => two_pairs(cards),
        HandKind::OnePair => cards.len() >= 2 && has_rank_count(cards, 2),
        HandKind::HighCard => (1..=HAND_SIZE).contains(&cards.len()),
    }
}
