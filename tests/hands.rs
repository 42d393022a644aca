//! Hand validation integration tests.

use std::collections::HashSet;

use pokerhands::{
    Card, CardError, CardSelection, CatalogError, DECK_SIZE, Deck, HandKind, Rank, Suit,
    TemplateError, ValidateError, Validator, ValidatorOptions, Verdict, best_hand, categories,
    lookup, parse_tokens, template, validate,
};

fn cards(tokens: &[&str]) -> Vec<Card> {
    parse_tokens(tokens).unwrap()
}

fn example_cards(kind: HandKind) -> Vec<Card> {
    let tokens: Vec<&str> = kind.info().example.split(' ').collect();
    cards(&tokens)
}

#[test]
fn catalog_has_ten_ordered_categories() {
    let all = categories();
    assert_eq!(all.len(), 10);

    let strengths: Vec<u8> = all.iter().map(|info| info.strength).collect();
    assert_eq!(strengths, [10, 9, 8, 7, 6, 5, 4, 3, 2, 1]);

    let ids: HashSet<&str> = all.iter().map(|info| info.id).collect();
    assert_eq!(ids.len(), 10);

    for info in all {
        assert_eq!(info.kind.info(), info);
        assert_eq!(lookup(info.id).unwrap(), info);
    }

    assert_eq!(categories(), categories());
}

#[test]
fn catalog_min_cards() {
    let min_cards: Vec<(&str, usize)> = categories()
        .iter()
        .map(|info| (info.id, info.min_cards))
        .collect();

    assert_eq!(
        min_cards,
        [
            ("royal-flush", 5),
            ("straight-flush", 5),
            ("four-of-a-kind", 4),
            ("full-house", 5),
            ("flush", 5),
            ("straight", 5),
            ("three-of-a-kind", 3),
            ("two-pairs", 4),
            ("one-pair", 2),
            ("high-card", 1),
        ]
    );
}

#[test]
fn lookup_unknown_category_fails() {
    assert_eq!(
        lookup("not-a-real-category"),
        Err(CatalogError::UnknownCategory)
    );
    assert_eq!(lookup(""), Err(CatalogError::UnknownCategory));
    assert_eq!(lookup("Full House"), Err(CatalogError::UnknownCategory));
    assert_eq!(lookup("two-pair").unwrap().kind, HandKind::TwoPairs);
}

#[test]
fn hand_kinds_compare_by_strength() {
    assert!(HandKind::RoyalFlush > HandKind::StraightFlush);
    assert!(HandKind::FullHouse > HandKind::Flush);
    assert!(HandKind::OnePair > HandKind::HighCard);

    let mut sorted = HandKind::ALL.to_vec();
    sorted.sort();
    sorted.reverse();
    assert_eq!(sorted, HandKind::ALL);

    assert_eq!(
        best_hand([HandKind::OnePair, HandKind::Flush, HandKind::TwoPairs]),
        Some(HandKind::Flush)
    );
    assert_eq!(best_hand(std::iter::empty()), None);
}

#[test]
fn catalog_examples_form_their_hands() {
    let validator = Validator::default();
    for kind in HandKind::ALL {
        let example = example_cards(kind);
        assert_eq!(example.len(), kind.min_cards(), "{kind}");
        assert!(validator.validate_cards(kind, &example), "{kind}");
    }
}

#[test]
fn too_few_cards_never_validate() {
    let validator = Validator::default();
    let deck = Deck::new();

    for kind in HandKind::ALL {
        for len in 0..kind.min_cards() {
            assert!(
                !validator.validate_cards(kind, &example_cards(kind)[..len]),
                "{kind} with {len} example cards"
            );
            assert!(
                !validator.validate_cards(kind, &deck.cards()[..len]),
                "{kind} with {len} deck cards"
            );
        }
    }
}

#[test]
fn royal_flush() {
    let royal = ["A♠", "K♠", "Q♠", "J♠", "10♠"];
    assert_eq!(validate("royal-flush", &royal), Ok(true));

    for index in 0..royal.len() {
        let mut changed = royal.map(String::from);
        changed[index] = changed[index].replace('♠', "♥");
        assert_eq!(validate("royal-flush", &changed), Ok(false), "{changed:?}");

        let mut removed = royal.to_vec();
        removed.remove(index);
        assert_eq!(validate("royal-flush", &removed), Ok(false), "{removed:?}");
    }

    assert_eq!(
        validate("royal-flush", &["K♠", "Q♠", "J♠", "10♠", "9♠"]),
        Ok(false)
    );
    assert_eq!(
        validate("royal-flush", &["A♠", "A♠", "Q♠", "J♠", "10♠"]),
        Ok(false)
    );
}

#[test]
fn straights() {
    assert_eq!(validate("straight", &["9♠", "8♥", "7♦", "6♣", "5♠"]), Ok(true));
    assert_eq!(validate("straight", &["5♠", "9♥", "7♦", "8♣", "6♠"]), Ok(true));
    assert_eq!(validate("straight", &["A♠", "K♥", "Q♦", "J♣", "10♠"]), Ok(true));

    // The ace plays low only in A-5-4-3-2.
    assert_eq!(validate("straight", &["A♠", "5♥", "4♦", "3♣", "2♠"]), Ok(true));
    assert_eq!(validate("straight", &["2♠", "3♥", "4♦", "5♣", "A♠"]), Ok(true));
    assert_eq!(validate("straight", &["K♠", "A♥", "2♦", "3♣", "4♠"]), Ok(false));
    assert_eq!(validate("straight", &["Q♠", "K♥", "A♦", "2♣", "3♠"]), Ok(false));

    assert_eq!(validate("straight", &["K♠", "Q♥", "J♦", "9♣", "8♠"]), Ok(false));
    assert_eq!(validate("straight", &["9♠", "9♥", "8♦", "7♣", "6♠"]), Ok(false));
    assert_eq!(validate("straight", &["9♠", "8♥", "7♦", "6♣"]), Ok(false));
    assert_eq!(
        validate("straight", &["10♠", "9♥", "8♦", "7♣", "6♠", "5♥"]),
        Ok(false)
    );
}

#[test]
fn full_house() {
    assert_eq!(
        validate("full-house", &["K♠", "K♥", "K♦", "10♣", "10♠"]),
        Ok(true)
    );
    assert_eq!(
        validate("full-house", &["10♣", "K♠", "10♠", "K♥", "K♦"]),
        Ok(true)
    );
    assert_eq!(
        validate("full-house", &["K♠", "K♥", "K♦", "10♣", "9♠"]),
        Ok(false)
    );
    assert_eq!(
        validate("full-house", &["K♠", "K♥", "K♦", "K♣", "10♠"]),
        Ok(false)
    );
    assert_eq!(
        validate("full-house", &["K♠", "K♥", "10♦", "10♣", "9♠"]),
        Ok(false)
    );
}

#[test]
fn flush_and_straight_flush() {
    let flush = ["A♣", "J♣", "8♣", "6♣", "2♣"];
    assert_eq!(validate("flush", &flush), Ok(true));
    assert_eq!(validate("straight-flush", &flush), Ok(false));

    let straight_flush = ["9♥", "8♥", "7♥", "6♥", "5♥"];
    assert_eq!(validate("straight-flush", &straight_flush), Ok(true));
    assert_eq!(validate("flush", &straight_flush), Ok(true));
    assert_eq!(validate("straight", &straight_flush), Ok(true));
    assert_eq!(validate("royal-flush", &straight_flush), Ok(false));

    assert_eq!(
        validate("straight-flush", &["5♦", "4♦", "3♦", "2♦", "A♦"]),
        Ok(true)
    );
    assert_eq!(
        validate("straight-flush", &["9♥", "8♥", "7♥", "6♥", "5♠"]),
        Ok(false)
    );
    assert_eq!(validate("flush", &["A♣", "J♣", "8♣", "6♣", "2♦"]), Ok(false));
}

#[test]
fn sets_and_pairs() {
    assert_eq!(validate("four-of-a-kind", &["Q♠", "Q♥", "Q♦", "Q♣"]), Ok(true));
    assert_eq!(validate("four-of-a-kind", &["Q♠", "Q♥", "Q♦", "J♣"]), Ok(false));

    assert_eq!(validate("three-of-a-kind", &["7♠", "7♥", "7♦"]), Ok(true));
    assert_eq!(validate("three-of-a-kind", &["7♠", "7♥", "6♦"]), Ok(false));

    assert_eq!(validate("two-pairs", &["A♠", "A♥", "6♦", "6♣"]), Ok(true));
    assert_eq!(validate("two-pairs", &["A♠", "A♥", "A♦", "A♣"]), Ok(false));
    assert_eq!(validate("two-pairs", &["A♠", "A♥", "6♦", "5♣"]), Ok(false));

    assert_eq!(validate("one-pair", &["J♠", "J♥"]), Ok(true));
    assert_eq!(validate("one-pair", &["J♠", "10♥"]), Ok(false));

    assert_eq!(validate("high-card", &["A♠"]), Ok(true));
    assert_eq!(validate("high-card", &["2♠", "7♥", "9♦", "J♣", "K♠"]), Ok(true));
    assert_eq!(
        validate("high-card", &["2♠", "7♥", "9♦", "J♣", "K♠", "A♠"]),
        Ok(false)
    );
    assert_eq!(validate::<&str>("high-card", &[]), Ok(false));
}

#[test]
fn extra_cards_accepted_unless_strict() {
    let quads_with_kicker = cards(&["Q♠", "Q♥", "Q♦", "Q♣", "3♠"]);
    let trips_with_kickers = cards(&["7♠", "7♥", "7♦", "K♣", "2♠"]);
    let two_pairs_with_kicker = cards(&["A♠", "A♥", "6♦", "6♣", "9♠"]);
    let pair_with_kickers = cards(&["J♠", "J♥", "4♦"]);

    let permissive = Validator::default();
    assert!(permissive.validate_cards(HandKind::FourOfAKind, &quads_with_kicker));
    assert!(permissive.validate_cards(HandKind::ThreeOfAKind, &trips_with_kickers));
    assert!(permissive.validate_cards(HandKind::TwoPairs, &two_pairs_with_kicker));
    assert!(permissive.validate_cards(HandKind::OnePair, &pair_with_kickers));

    let strict = Validator::new(ValidatorOptions::default().with_strict_card_count(true));
    assert!(!strict.validate_cards(HandKind::FourOfAKind, &quads_with_kicker));
    assert!(!strict.validate_cards(HandKind::ThreeOfAKind, &trips_with_kickers));
    assert!(!strict.validate_cards(HandKind::TwoPairs, &two_pairs_with_kicker));
    assert!(!strict.validate_cards(HandKind::OnePair, &pair_with_kickers));
    assert!(!strict.validate_cards(HandKind::HighCard, &pair_with_kickers));

    for kind in HandKind::ALL {
        assert!(strict.validate_cards(kind, &example_cards(kind)), "{kind}");
    }
}

#[test]
fn validation_is_repeatable() {
    let tokens = ["K♠", "K♥", "K♦", "10♣", "10♠"];
    for kind in HandKind::ALL {
        let first = validate(kind.id(), &tokens);
        assert_eq!(validate(kind.id(), &tokens), first);
    }
}

#[test]
fn malformed_tokens_are_errors() {
    assert_eq!("".parse::<Card>(), Err(CardError::Empty));
    assert_eq!("A".parse::<Card>(), Err(CardError::UnknownSuit));
    assert_eq!("10".parse::<Card>(), Err(CardError::UnknownSuit));
    assert_eq!("A♤".parse::<Card>(), Err(CardError::UnknownSuit));
    assert_eq!("♠".parse::<Card>(), Err(CardError::UnknownRank));
    assert_eq!("1♠".parse::<Card>(), Err(CardError::UnknownRank));
    assert_eq!("T♠".parse::<Card>(), Err(CardError::UnknownRank));
    assert_eq!("a♠".parse::<Card>(), Err(CardError::UnknownRank));
    assert_eq!(" A♠".parse::<Card>(), Err(CardError::UnknownRank));

    assert_eq!(
        validate("one-pair", &["J♠", "J♥", "X♦"]),
        Err(ValidateError::InvalidCardToken {
            index: 2,
            reason: CardError::UnknownRank,
        })
    );

    // Malformed input is reported even when too few cards are given.
    assert_eq!(
        validate("flush", &[""]),
        Err(ValidateError::InvalidCardToken {
            index: 0,
            reason: CardError::Empty,
        })
    );
}

#[test]
fn unknown_category_is_an_error() {
    assert_eq!(
        validate("not-a-real-category", &["A♠"]),
        Err(ValidateError::UnknownCategory)
    );
    assert_eq!(
        validate("five-of-a-kind", &["bad"]),
        Err(ValidateError::UnknownCategory)
    );
    assert_eq!(validate("two-pair", &["A♠", "A♥", "6♦", "6♣"]), Ok(true));
}

#[test]
fn deck_tokens_parse_back() {
    let deck = Deck::new();
    assert_eq!(deck.len(), DECK_SIZE);

    let unique: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);

    for card in deck {
        assert_eq!(card.to_string().parse::<Card>(), Ok(card));
    }

    assert_eq!(Card::new(Rank::Ten, Suit::Diamonds).to_string(), "10♦");
    assert_eq!(Rank::Ace.index(), 0);
    assert_eq!(Rank::Ten.index(), 4);
    assert_eq!(Rank::Two.index(), 12);
    assert_eq!(Rank::from_index(9), Some(Rank::Five));
    assert_eq!(Rank::from_index(13), None);
}

#[test]
fn shuffled_deck_is_seeded() {
    let a = Deck::shuffled(7);
    let b = Deck::shuffled(7);
    assert_eq!(a, b);
    assert_eq!(a.len(), DECK_SIZE);
    assert_ne!(a, Deck::new());

    let unique: HashSet<Card> = a.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
}

#[test]
fn classify_known_hands() {
    let validator = Validator::default();
    for kind in HandKind::ALL {
        assert_eq!(validator.classify(&example_cards(kind)), Some(kind), "{kind}");
    }

    assert_eq!(
        validator.classify(&cards(&["Q♠", "Q♥", "Q♦", "Q♣", "3♠"])),
        Some(HandKind::FourOfAKind)
    );
    assert_eq!(
        validator.classify(&cards(&["2♠", "7♥", "9♦", "J♣", "K♠"])),
        Some(HandKind::HighCard)
    );
    assert_eq!(validator.classify(&[]), None);
}

#[test]
fn classify_agrees_with_validate() {
    let validator = Validator::default();

    for seed in 0..200 {
        let mut deck = Deck::shuffled(seed);
        let hand: Vec<Card> = (0..5).map_while(|_| deck.draw()).collect();
        assert_eq!(hand.len(), 5);

        let kind = validator.classify(&hand).unwrap();
        assert!(validator.validate_cards(kind, &hand));
        for stronger in HandKind::ALL.into_iter().filter(|k| *k > kind) {
            assert!(
                !validator.validate_cards(stronger, &hand),
                "{hand:?} classified as {kind} but is a {stronger}"
            );
        }
    }
}

#[test]
fn templates_form_their_hands() {
    let validator = Validator::default();

    for kind in HandKind::ALL {
        let cards = template(kind, Some(Rank::King), Some(Rank::Ten), Some(Suit::Hearts)).unwrap();
        assert_eq!(cards.len(), kind.min_cards(), "{kind}");
        assert!(validator.validate_cards(kind, &cards), "{kind}: {cards:?}");
    }

    let straight = template(HandKind::Straight, Some(Rank::Six), None, None).unwrap();
    let tokens: Vec<String> = straight.iter().map(ToString::to_string).collect();
    assert_eq!(tokens, ["6♠", "5♥", "4♦", "3♣", "2♠"]);

    let royal = template(HandKind::RoyalFlush, None, None, Some(Suit::Clubs)).unwrap();
    assert_eq!(royal, cards(&["A♣", "K♣", "Q♣", "J♣", "10♣"]));
}

#[test]
fn template_errors() {
    assert_eq!(
        template(HandKind::Straight, Some(Rank::Five), None, None),
        Err(TemplateError::RankOutOfRange)
    );
    assert_eq!(
        template(HandKind::StraightFlush, Some(Rank::Nine), None, None),
        Err(TemplateError::MissingSuit)
    );
    assert_eq!(
        template(HandKind::OnePair, None, None, Some(Suit::Spades)),
        Err(TemplateError::MissingRank)
    );
    assert_eq!(
        template(HandKind::FullHouse, Some(Rank::Ace), None, None),
        Err(TemplateError::MissingRank)
    );
    assert_eq!(
        template(HandKind::TwoPairs, Some(Rank::Ace), Some(Rank::Ace), None),
        Err(TemplateError::SameRank)
    );
}

#[test]
fn verdicts() {
    let validator = Validator::default();

    let verdict = validator.check(HandKind::FullHouse, &cards(&["K♠", "K♥"]));
    assert_eq!(
        verdict,
        Verdict::NeedsCards {
            kind: HandKind::FullHouse,
            required: 5,
            selected: 2,
        }
    );
    assert!(!verdict.is_valid());
    assert_eq!(verdict.to_string(), "Select 5 cards to form a Full House.");

    let verdict = validator.check(HandKind::OnePair, &cards(&["J♠", "J♥"]));
    assert_eq!(verdict, Verdict::Valid(HandKind::OnePair));
    assert!(verdict.is_valid());
    assert_eq!(verdict.to_string(), "Valid hand! The cards form a One Pair.");

    let verdict = validator.check(HandKind::OnePair, &cards(&["J♠", "Q♥"]));
    assert_eq!(verdict, Verdict::Invalid(HandKind::OnePair));
    assert_eq!(verdict.kind(), HandKind::OnePair);
    assert_eq!(
        verdict.to_string(),
        "The selected cards do not form a One Pair."
    );
}

#[test]
fn selection_toggles_unique_cards() {
    let mut selection = CardSelection::new();
    let deck = Deck::new();

    for &card in &deck.cards()[..5] {
        assert!(selection.toggle(card));
    }
    assert!(selection.is_full());
    assert!(!selection.toggle(deck.cards()[5]));
    assert_eq!(selection.cards(), &deck.cards()[..5]);

    assert!(!selection.toggle(deck.cards()[2]));
    assert_eq!(selection.len(), 4);
    assert!(!selection.contains(deck.cards()[2]));

    assert!(selection.toggle(deck.cards()[5]));
    assert_eq!(selection.cards().last(), Some(&deck.cards()[5]));

    selection.clear();
    assert!(selection.is_empty());

    let wide = Validator::new(ValidatorOptions::default().with_max_cards(7)).selection();
    assert_eq!(wide.capacity(), 7);
}
