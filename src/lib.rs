//! # WOF Bot
//!
//! Narrows a word list down to the words that could fill each word of a
//! partially revealed letter-guessing puzzle.
//!
//! Every revealed letter on the board is common knowledge, so a letter shown
//! anywhere in the puzzle can never sit behind a hidden slot in any word.

pub mod dictionary;
pub mod puzzle;
pub mod report;
pub mod solver;

pub use dictionary::{resolve_wordlist_path, Dictionary, DictionaryError};
pub use puzzle::{KnownLetters, Puzzle, PuzzleToken, Slot};
pub use report::TokenReport;
pub use solver::PuzzleSolver;

/// Marks an unrevealed letter in puzzle input
pub const PLACEHOLDER: char = '-';

/// Separates the words of a puzzle
pub const WORD_SEPARATOR: char = ' ';

/// Largest candidate count that is still listed in full
pub const REPORT_LIST_LIMIT: usize = 30;

/// Word list read when no override is configured
pub const DEFAULT_WORDLIST: &str = "wordlist.txt";

/// Environment variable pointing at an alternative word list
pub const WORDLIST_ENV: &str = "WOF_WORDLIST";
