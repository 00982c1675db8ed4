//! Puzzle input parsing.
//!
//! A puzzle line such as `"c-t -og"` becomes one [`PuzzleToken`] per word,
//! plus the [`KnownLetters`] revealed anywhere on the board.

use crate::{PLACEHOLDER, WORD_SEPARATOR};

/// One character position of a puzzle word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Revealed letter
    Known(char),
    /// Unrevealed position
    Placeholder,
}

impl Slot {
    pub fn from_char(c: char) -> Self {
        if c == PLACEHOLDER {
            Slot::Placeholder
        } else {
            Slot::Known(c)
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Slot::Known(c) => c,
            Slot::Placeholder => PLACEHOLDER,
        }
    }
}

/// A single word of the puzzle, as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleToken {
    text: String,
    slots: Vec<Slot>,
}

impl PuzzleToken {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            slots: text.chars().map(Slot::from_char).collect(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Revealed letters of this word only, in slot order
    pub fn revealed(&self) -> impl Iterator<Item = char> + '_ {
        self.slots.iter().filter_map(|slot| match slot {
            Slot::Known(c) => Some(*c),
            Slot::Placeholder => None,
        })
    }
}

/// Every distinct letter revealed across the whole puzzle, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnownLetters {
    letters: Vec<char>,
}

impl KnownLetters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tokens<'a>(tokens: impl IntoIterator<Item = &'a PuzzleToken>) -> Self {
        let mut known = Self::new();
        for token in tokens {
            for c in token.revealed() {
                known.insert(c);
            }
        }
        known
    }

    fn insert(&mut self, c: char) {
        if !self.letters.contains(&c) {
            self.letters.push(c);
        }
    }

    pub fn contains(&self, c: char) -> bool {
        self.letters.contains(&c)
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

/// A parsed puzzle line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Puzzle {
    tokens: Vec<PuzzleToken>,
    known_letters: KnownLetters,
}

impl Puzzle {
    /// Split a line on single spaces. Empty fragments produced by repeated
    /// or edge spaces are dropped.
    pub fn parse(line: &str) -> Self {
        let tokens: Vec<PuzzleToken> = line
            .split(WORD_SEPARATOR)
            .filter(|fragment| !fragment.is_empty())
            .map(PuzzleToken::new)
            .collect();
        // Must see every token before any filtering happens.
        let known_letters = KnownLetters::from_tokens(&tokens);
        Self {
            tokens,
            known_letters,
        }
    }

    pub fn tokens(&self) -> &[PuzzleToken] {
        &self.tokens
    }

    pub fn known_letters(&self) -> &KnownLetters {
        &self.known_letters
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
