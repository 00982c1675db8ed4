//! Candidate filtering.
//!
//! Each puzzle word starts from the whole dictionary and is narrowed by a
//! length cut followed by one positional cut per slot. Every stage builds a
//! fresh vector from the previous one, so dictionary order survives and no
//! stage can bring back a word an earlier one rejected.

use log::{debug, info};
use rayon::prelude::*;

use crate::dictionary::Dictionary;
use crate::puzzle::{KnownLetters, Puzzle, PuzzleToken, Slot};
use crate::report::TokenReport;

/// Character at `index`, counting characters rather than bytes
fn char_at(word: &str, index: usize) -> Option<char> {
    word.chars().nth(index)
}

/// Filters a borrowed dictionary against puzzle words.
#[derive(Debug, Clone, Copy)]
pub struct PuzzleSolver<'d> {
    dictionary: &'d Dictionary,
}

impl<'d> PuzzleSolver<'d> {
    pub fn new(dictionary: &'d Dictionary) -> Self {
        Self { dictionary }
    }

    /// Dictionary words with exactly `len` characters
    pub fn filter_by_length(&self, len: usize) -> Vec<&'d str> {
        self.dictionary
            .iter()
            .filter(|word| word.chars().count() == len)
            .collect()
    }

    /// Keep candidates showing `letter` at `index`
    pub fn filter_by_letter(candidates: &[&'d str], index: usize, letter: char) -> Vec<&'d str> {
        candidates
            .iter()
            .copied()
            .filter(|word| char_at(word, index) == Some(letter))
            .collect()
    }

    /// Drop candidates whose letter at `index` is already revealed somewhere
    /// on the board.
    pub fn filter_out_letters(
        candidates: &[&'d str],
        index: usize,
        known: &KnownLetters,
    ) -> Vec<&'d str> {
        candidates
            .iter()
            .copied()
            .filter(|word| match char_at(word, index) {
                Some(c) => !known.contains(c),
                None => false,
            })
            .collect()
    }

    /// Every dictionary word consistent with `token`, in dictionary order.
    ///
    /// `known` must be the letter pool of the whole puzzle, not just of this
    /// token.
    pub fn candidates(&self, token: &PuzzleToken, known: &KnownLetters) -> Vec<&'d str> {
        let mut candidates = self.filter_by_length(token.len());
        debug!(
            "{}: {} words of length {}",
            token.as_str(),
            candidates.len(),
            token.len()
        );

        for (index, slot) in token.slots().iter().enumerate() {
            if candidates.is_empty() {
                break;
            }
            candidates = match *slot {
                Slot::Known(letter) => Self::filter_by_letter(&candidates, index, letter),
                Slot::Placeholder => Self::filter_out_letters(&candidates, index, known),
            };
            debug!(
                "{}: {} left after slot {} ({})",
                token.as_str(),
                candidates.len(),
                index,
                slot.to_char()
            );
        }

        candidates
    }

    /// One report per puzzle word, in input order.
    ///
    /// Words are filtered in parallel; the dictionary and letter pool are
    /// only read.
    pub fn solve(&self, puzzle: &Puzzle) -> Vec<TokenReport> {
        let known = puzzle.known_letters();
        info!(
            "solving {} words against {} entries, {} letters revealed",
            puzzle.tokens().len(),
            self.dictionary.len(),
            known.len()
        );

        puzzle
            .tokens()
            .par_iter()
            .map(|token| TokenReport::new(token.as_str(), self.candidates(token, known)))
            .collect()
    }
}
