//! CLI hand checker example.
//!
//! Run with `RUST_LOG=trace` to see each validation decision.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};

use pokerhands::{Card, CardSelection, HandKind, Suit, Validator, ValidatorOptions, categories};

fn main() {
    env_logger::init();

    println!("Poker hand checker (type 'q' to quit)");

    let strict = prompt_line("Reject extra cards? (y/n): ");
    let options =
        ValidatorOptions::default().with_strict_card_count(matches!(strict.as_str(), "y" | "yes"));
    let validator = Validator::new(options);

    loop {
        print_categories();

        let Some(kind) = prompt_kind("Hand (number or id): ") else {
            println!("Goodbye.");
            break;
        };

        let info = kind.info();
        println!(
            "\n{} - {} (needs {} cards, e.g. {})",
            info.name, info.description, info.min_cards, info.example
        );
        println!("Enter cards like 'A♠' or 'as', again to remove, 'done' to finish.");

        let mut selection = validator.selection();
        loop {
            print_selection(&selection);

            let input = prompt_line("Card: ");
            match input.as_str() {
                "q" | "quit" => return,
                "done" | "" => break,
                _ => {}
            }

            let card = match parse_card(&input) {
                Ok(card) => card,
                Err(err) => {
                    println!("Card error: {err}");
                    continue;
                }
            };

            if !selection.toggle(card) && !selection.contains(card) && selection.is_full() {
                println!("At most {} cards can be selected.", selection.capacity());
            }

            let verdict = validator.check(kind, selection.cards());
            let code = if verdict.is_valid() { "32" } else { "33" };
            println!("{}", colorize(&verdict.to_string(), code));
        }

        match validator.classify(selection.cards()) {
            Some(best) if best != kind => println!("These cards make a {best}."),
            Some(_) => {}
            None => println!("These cards make no hand."),
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_kind(prompt: &str) -> Option<HandKind> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }

        let by_number = input
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|index| HandKind::ALL.get(index).copied());

        match by_number.map_or_else(|| input.parse::<HandKind>(), Ok) {
            Ok(kind) => return Some(kind),
            Err(err) => println!("{err}."),
        }
    }
}

/// Parses a token, accepting `s`, `h`, `d` and `c` for the suit symbols.
fn parse_card(input: &str) -> Result<Card, pokerhands::CardError> {
    let mut token = input.to_uppercase();
    let symbol = match token.chars().last() {
        Some('S') => Some(Suit::Spades),
        Some('H') => Some(Suit::Hearts),
        Some('D') => Some(Suit::Diamonds),
        Some('C') => Some(Suit::Clubs),
        _ => None,
    };

    if let Some(suit) = symbol {
        token.pop();
        token.push(suit.symbol());
    }

    token.parse()
}

fn print_categories() {
    println!();
    for (index, info) in categories().iter().enumerate() {
        println!("{:>2}. {:<16} {}", index + 1, info.id, info.example);
    }
}

fn print_selection(selection: &CardSelection) {
    let cards = selection
        .cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ");
    let empty = "__ ".repeat(selection.capacity().saturating_sub(selection.len()));
    println!("\nSelected: {cards} {}", colorize(empty.trim_end(), "90"));
}

fn format_card(card: &Card) -> String {
    let code = if card.suit.is_red() { "31" } else { "34" };
    colorize(&card.to_string(), code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
