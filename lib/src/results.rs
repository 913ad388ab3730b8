use std::fmt;
use std::io;
use std::ops::Deref;
use std::result::Result;
use std::str::FromStr;
use std::sync::Arc;

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::data::canonical_key;

/// The number of letters in every puzzle.
pub const PUZZLE_LENGTH: usize = 7;

/// Indicates that an error occurred while building an index or reading a puzzle.
#[derive(Debug, Error)]
pub enum SpellingBeeError {
    /// Indicates that the given letters do not form a valid puzzle. The puzzle must be exactly
    /// [`PUZZLE_LENGTH`] distinct alphabetic letters.
    #[error("invalid puzzle: {0}")]
    InvalidPuzzle(String),
    /// Indicates that the word list could not be read.
    #[error("unable to read words: {0}")]
    Io(#[from] io::Error),
}

/// Seven distinct letters, the first of which is the base letter.
///
/// The base letter must appear in every word in the puzzle's solution.
///
/// ```
/// use rs_spelling_bee_solver::Puzzle;
///
/// let puzzle = Puzzle::new("Acefdxy").unwrap();
///
/// assert_eq!(puzzle.base_letter(), 'a');
/// assert_eq!(puzzle.letters(), "acefdxy");
/// assert!(Puzzle::new("aacefdx").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Puzzle {
    letters: Box<str>,
    base_letter: char,
}

impl Puzzle {
    /// Constructs a puzzle from the given letters. The letters are trimmed and converted to lower
    /// case before being validated.
    pub fn new(letters: &str) -> Result<Puzzle, SpellingBeeError> {
        let letters = letters.trim().to_lowercase();
        let num_letters = letters.chars().count();
        if num_letters != PUZZLE_LENGTH {
            return Err(SpellingBeeError::InvalidPuzzle(format!(
                "\"{}\" has {} letters, but a puzzle needs exactly {}",
                letters, num_letters, PUZZLE_LENGTH
            )));
        }
        if let Some(letter) = letters.chars().find(|letter| !letter.is_alphabetic()) {
            return Err(SpellingBeeError::InvalidPuzzle(format!(
                "\"{}\" contains the non-alphabetic character '{}'",
                letters, letter
            )));
        }
        for (index, letter) in letters.chars().enumerate() {
            if letters
                .chars()
                .take(index)
                .any(|other_letter| other_letter == letter)
            {
                return Err(SpellingBeeError::InvalidPuzzle(format!(
                    "\"{}\" repeats the letter '{}'",
                    letters, letter
                )));
            }
        }
        let base_letter = match letters.chars().next() {
            Some(letter) => letter,
            None => {
                return Err(SpellingBeeError::InvalidPuzzle(
                    "a puzzle cannot be empty".to_string(),
                ))
            }
        };
        Ok(Puzzle {
            letters: letters.into_boxed_str(),
            base_letter,
        })
    }

    /// All seven letters, starting with the base letter.
    pub fn letters(&self) -> &str {
        &self.letters
    }

    /// The letter that every word in the solution must contain.
    pub fn base_letter(&self) -> char {
        self.base_letter
    }

    /// The six letters other than the base letter, in puzzle order.
    pub fn other_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.chars().skip(1)
    }

    /// Returns `true` iff the letter is one of the puzzle's letters.
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(letter)
    }

    /// Returns `true` iff the word uses every one of the puzzle's letters and no others.
    pub fn is_pangram(&self, word: &str) -> bool {
        is_pangram(word) && word.chars().all(|letter| self.contains(letter))
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.letters)
    }
}

impl FromStr for Puzzle {
    type Err = SpellingBeeError;

    fn from_str(letters: &str) -> Result<Self, Self::Err> {
        Puzzle::new(letters)
    }
}

impl TryFrom<String> for Puzzle {
    type Error = SpellingBeeError;

    fn try_from(letters: String) -> Result<Self, Self::Error> {
        Puzzle::new(&letters)
    }
}

impl From<Puzzle> for String {
    fn from(puzzle: Puzzle) -> String {
        puzzle.letters.into_string()
    }
}

/// Returns `true` iff the word contains [`PUZZLE_LENGTH`] distinct letters.
pub fn is_pangram(word: &str) -> bool {
    canonical_key(word).chars().count() == PUZZLE_LENGTH
}

/// All the words from an index that can be spelled with a given puzzle.
///
/// Words are kept in the order they were discovered, not alphabetically. Use
/// [`Solution::sorted_words`] for a sorted list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    puzzle: Puzzle,
    words: Vec<Arc<str>>,
}

impl Solution {
    pub(crate) fn new(puzzle: Puzzle, words: Vec<Arc<str>>) -> Solution {
        Solution { puzzle, words }
    }

    /// The puzzle that was solved.
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// The matching words, in discovery order.
    pub fn words(&self) -> &[Arc<str>] {
        &self.words
    }

    /// Returns `true` iff the given word is part of this solution.
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|other| other.as_ref() == word)
    }

    /// Returns `true` iff the given word uses all seven of the puzzle's letters.
    pub fn is_pangram(&self, word: &str) -> bool {
        self.puzzle.is_pangram(word)
    }

    /// Iterates over the words in this solution that use all seven letters.
    pub fn pangrams(&self) -> impl Iterator<Item = &Arc<str>> {
        self.words.iter().filter(|word| self.puzzle.is_pangram(word))
    }

    /// Returns a copy of the words, sorted alphabetically.
    pub fn sorted_words(&self) -> Vec<Arc<str>> {
        let mut words = self.words.clone();
        words.sort_unstable();
        words
    }

    /// Consumes the solution, returning the words in discovery order.
    pub fn into_words(self) -> Vec<Arc<str>> {
        self.words
    }
}

impl Deref for Solution {
    type Target = [Arc<str>];

    fn deref(&self) -> &Self::Target {
        &self.words
    }
}
