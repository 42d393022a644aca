//! Canonical example cards for each hand category.

use alloc::vec::Vec;

use crate::card::{Card, Rank, Suit};
use crate::error::TemplateError;
use crate::hand::HandKind;

use super::rules::HAND_SIZE;

/// Five consecutive ranks starting at `high` and going down.
fn sequence(high: Rank) -> Result<impl Iterator<Item = (usize, Rank)>, TemplateError> {
    let start = high.index();
    if start + HAND_SIZE > Rank::ALL.len() {
        return Err(TemplateError::RankOutOfRange);
    }

    Ok((start..start + HAND_SIZE).map(|index| (index, Rank::ALL[index])))
}

fn of_rank(rank: Rank, suits: &[Suit]) -> impl Iterator<Item = Card> + '_ {
    suits.iter().map(move |&suit| Card::new(rank, suit))
}

fn royal(suit: Suit) -> Vec<Card> {
    [Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Ten]
        .into_iter()
        .map(|rank| Card::new(rank, suit))
        .collect()
}

/// Builds the canonical cards that prove a hand category.
///
/// `primary` is the main rank of the hand (the rank of the quads, trips or
/// first pair, or the top card of a sequence), `secondary` the rank of the
/// pair in a full house or of the second pair. Parameters a category does
/// not use are ignored.
///
/// # Errors
///
/// Returns an error if a parameter the category needs is missing, a
/// sequence would run below the two, or the two ranks of a full house or
/// two pairs are equal.
///
/// # Example
///
/// ```
/// use pokerhands::{HandKind, Rank, Suit, template};
///
/// let cards = template(HandKind::FullHouse, Some(Rank::King), Some(Rank::Ten), None).unwrap();
/// let tokens: Vec<String> = cards.iter().map(ToString::to_string).collect();
/// assert_eq!(tokens, ["K♠", "K♥", "K♦", "10♠", "10♥"]);
/// ```
pub fn template(
    kind: HandKind,
    primary: Option<Rank>,
    secondary: Option<Rank>,
    suit: Option<Suit>,
) -> Result<Vec<Card>, TemplateError> {
    let primary_rank = || primary.ok_or(TemplateError::MissingRank);
    let secondary_rank = |first: Rank| -> Result<Rank, TemplateError> {
        let second = secondary.ok_or(TemplateError::MissingRank)?;
        if second == first {
            return Err(TemplateError::SameRank);
        }
        Ok(second)
    };
    let required_suit = || suit.ok_or(TemplateError::MissingSuit);

    let cards = match kind {
        HandKind::RoyalFlush | HandKind::Flush => royal(required_suit()?),
        HandKind::StraightFlush => {
            let suit = required_suit()?;
            sequence(primary_rank()?)?
                .map(|(_, rank)| Card::new(rank, suit))
                .collect()
        }
        HandKind::FourOfAKind => of_rank(primary_rank()?, &Suit::ALL).collect(),
        HandKind::FullHouse => {
            let first = primary_rank()?;
            let second = secondary_rank(first)?;
            of_rank(first, &Suit::ALL[..3])
                .chain(of_rank(second, &Suit::ALL[..2]))
                .collect()
        }
        HandKind::Straight => sequence(primary_rank()?)?
            .map(|(index, rank)| Card::new(rank, Suit::ALL[index % Suit::ALL.len()]))
            .collect(),
        HandKind::ThreeOfAKind => of_rank(primary_rank()?, &Suit::ALL[..3]).collect(),
        HandKind::TwoPairs => {
            let first = primary_rank()?;
            let second = secondary_rank(first)?;
            of_rank(first, &[Suit::Spades, Suit::Hearts])
                .chain(of_rank(second, &[Suit::Diamonds, Suit::Clubs]))
                .collect()
        }
        HandKind::OnePair => of_rank(primary_rank()?, &[Suit::Spades, Suit::Hearts]).collect(),
        HandKind::HighCard => alloc::vec![Card::new(primary_rank()?, required_suit()?)],
    };

    Ok(cards)
}
