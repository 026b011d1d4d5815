//! CLI concentration example.

use std::io::{self, Write};
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use memrs::{Card, Difficulty, Game, GameOptions, Suit, TurnOutcome};

fn main() {
    println!("Concentration CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let Some(difficulty) = prompt_difficulty() else {
        println!("Goodbye.");
        return;
    };

    let options = GameOptions::default().with_difficulty(difficulty);
    let mut game = match Game::new(options, seed) {
        Ok(game) => game,
        Err(err) => {
            println!("Could not start the game: {err}");
            return;
        }
    };

    println!(
        "\nFind all {} pairs. Fewer misses means a better score.",
        game.total_pairs()
    );

    while !game.is_won() {
        print_board(&game, difficulty);

        let Some(position) = prompt_position(game.board().len()) else {
            println!("Goodbye.");
            return;
        };

        match game.select(position) {
            TurnOutcome::Ignored => println!("That card cannot be picked right now."),
            TurnOutcome::Revealed => {
                println!("You revealed {}.", format_card(game.card_at(position)));
            }
            TurnOutcome::Matched { pairs_remaining } => {
                println!(
                    "A pair of {}! {pairs_remaining} to go.",
                    format_card(game.card_at(position))
                );
            }
            TurnOutcome::Mismatched { score, hide } => {
                print_board(&game, difficulty);
                println!("No match (misses: {score}). Memorize them...");
                thread::sleep(hide.delay);
                game.conceal_mismatch(hide.token);
            }
            TurnOutcome::Won { score } => {
                println!("You found every pair! Final score: {score} misses.");
            }
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

fn prompt_difficulty() -> Option<Difficulty> {
    loop {
        let input = prompt_line("Difficulty (easy/medium/hard): ");
        match input.as_str() {
            "e" | "easy" => return Some(Difficulty::Easy),
            "m" | "medium" => return Some(Difficulty::Medium),
            "h" | "hard" => return Some(Difficulty::Hard),
            "q" | "quit" | "" => return None,
            _ => println!("Please pick easy, medium, or hard."),
        }
    }
}

fn prompt_position(board_len: usize) -> Option<usize> {
    loop {
        let input = prompt_line("Pick a card: ");
        if input == "q" || input == "quit" || input.is_empty() {
            return None;
        }
        match input.parse::<usize>() {
            Ok(position) if position < board_len => return Some(position),
            _ => println!("Please enter a card number below {board_len}."),
        }
    }
}

fn print_board(game: &Game, difficulty: Difficulty) {
    let columns = difficulty.columns();
    println!(
        "\nMisses: {} | Pairs found: {}/{}",
        game.score(),
        game.pairs_found(),
        game.total_pairs()
    );

    for position in 0..game.board().len() {
        if position % columns == 0 {
            println!();
        }
        if game.is_removed(position) {
            print!("{:>5}", "--");
        } else if game.is_face_up(position) {
            let (code, color) = card_code(game.card_at(position));
            print!("{}", colorize(&format!("{code:>5}"), color));
        } else {
            print!("{position:>5}");
        }
    }
    println!();
    println!();
}

fn card_code(card: Card) -> (String, &'static str) {
    let (suit, color_code) = match card.suit {
        Suit::Spades => ("S", "34"),
        Suit::Hearts => ("H", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Diamonds => ("D", "31"),
    };

    let rank = match card.rank.ordinal() {
        1 => "A".to_string(),
        11 => "J".to_string(),
        12 => "Q".to_string(),
        13 => "K".to_string(),
        n => n.to_string(),
    };

    (format!("{rank}{suit}"), color_code)
}

fn format_card(card: Card) -> String {
    let (code, color) = card_code(card);
    colorize(&code, color)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
