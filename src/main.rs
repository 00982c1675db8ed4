//! WOF Bot CLI
//!
//! Reads one puzzle line from stdin and prints the candidates for each word.

use std::io::{self, BufRead, Write};

use log::warn;
use wof_bot::{resolve_wordlist_path, Dictionary, Puzzle, PuzzleSolver};

const USAGE_TEXT: &str = include_str!("text/usage.txt");
const PROMPT: &str = "Enter what you see in the puzzle, with a dash(-) for any unknown letter, \
                      and a space to mark a separation between words:";

fn read_puzzle_line() -> io::Result<String> {
    println!("{}", PROMPT);
    io::stdout().flush()?;

    let mut bytes = Vec::new();
    if io::stdin().lock().read_until(b'\n', &mut bytes)? == 0 {
        warn!("no puzzle input on stdin");
    }
    let line = String::from_utf8_lossy(&bytes);
    Ok(line.trim_end_matches(&['\r', '\n'][..]).to_lowercase())
}

fn run() {
    let input = match read_puzzle_line() {
        Ok(input) => input,
        Err(err) => {
            eprintln!("error: failed to read puzzle: {}", err);
            std::process::exit(1);
        }
    };

    let dictionary = match Dictionary::load(resolve_wordlist_path()) {
        Ok(dictionary) => dictionary,
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(1);
        }
    };

    let puzzle = Puzzle::parse(&input);
    let solver = PuzzleSolver::new(&dictionary);

    for report in solver.solve(&puzzle) {
        println!("{}", report);
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--help" | "-h" => {
                println!("{}", USAGE_TEXT);
            }
            _ => {
                eprintln!("Unknown argument: {}", args[1]);
                eprintln!("Use --help for usage information.");
                std::process::exit(1);
            }
        }
    } else {
        run();
    }
}
