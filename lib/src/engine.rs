use crate::data::*;
use crate::results::*;
use log::debug;
use log::trace;
use std::collections::HashSet;
use std::result::Result;
use std::sync::Arc;

/// The minimum number of letters in a word for it to count as part of a solution.
pub const MIN_WORD_LENGTH: usize = 4;

/// Iterates over the canonical key of every candidate for the given puzzle.
///
/// Each candidate is the base letter plus one subset of the other six letters, so there are
/// exactly 2<sup>6</sup> = 64 keys, and every one of them contains the base letter.
///
/// ```
/// use rs_spelling_bee_solver::Puzzle;
/// use rs_spelling_bee_solver::details::candidate_keys;
///
/// let puzzle = Puzzle::new("acefdxy").unwrap();
/// let keys: Vec<Box<str>> = candidate_keys(&puzzle).collect();
///
/// assert_eq!(keys.len(), 64);
/// assert_eq!(keys[0].as_ref(), "a");
/// assert!(keys.iter().any(|key| key.as_ref() == "acdefxy"));
/// ```
pub fn candidate_keys(puzzle: &Puzzle) -> impl Iterator<Item = Box<str>> + '_ {
    let other_letters: Vec<char> = puzzle.other_letters().collect();
    let num_subsets: u32 = 1 << other_letters.len();
    (0..num_subsets).map(move |subset| {
        let candidate: String = std::iter::once(puzzle.base_letter())
            .chain(
                other_letters
                    .iter()
                    .enumerate()
                    .filter(|(index, _)| subset & (1 << *index) != 0)
                    .map(|(_, letter)| *letter),
            )
            .collect();
        canonical_key(&candidate)
    })
}

/// Finds every indexed word that can be spelled from a puzzle's letters.
///
/// A word matches when it uses only the puzzle's letters, contains the base letter, and has at
/// least [`MIN_WORD_LENGTH`] letters (or the minimum given to
/// [`Matcher::with_min_word_length`]).
///
/// ```
/// use rs_spelling_bee_solver::Matcher;
/// use rs_spelling_bee_solver::WordIndex;
///
/// let index = WordIndex::build(["face", "cafe", "cod", "decaf", "ace"]);
/// let matcher = Matcher::new(&index);
///
/// let solution = matcher.solve_letters("acefdxy").unwrap();
///
/// assert_eq!(solution.sorted_words().len(), 3);
/// assert!(solution.contains("decaf"));
/// assert!(!solution.contains("cod"));
/// assert!(!solution.contains("ace"));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Matcher<'a> {
    index: &'a WordIndex,
    min_word_length: usize,
}

impl<'a> Matcher<'a> {
    /// Constructs a matcher over the given index, using the default [`MIN_WORD_LENGTH`].
    pub fn new(index: &'a WordIndex) -> Matcher<'a> {
        Matcher::with_min_word_length(index, MIN_WORD_LENGTH)
    }

    /// Constructs a matcher that only accepts words with at least `min_word_length` letters.
    pub fn with_min_word_length(index: &'a WordIndex, min_word_length: usize) -> Matcher<'a> {
        Matcher {
            index,
            min_word_length,
        }
    }

    /// The index this matcher searches.
    pub fn index(&self) -> &'a WordIndex {
        self.index
    }

    /// The minimum number of letters in a matching word.
    pub fn min_word_length(&self) -> usize {
        self.min_word_length
    }

    /// Finds all the matching words for the given puzzle.
    ///
    /// Words are returned in the order they are discovered, without duplicates. This performs at
    /// most 64 lookups, regardless of the size of the index.
    pub fn solve(&self, puzzle: &Puzzle) -> Solution {
        let mut seen: HashSet<&'a str> = HashSet::new();
        let mut words: Vec<Arc<str>> = Vec::new();
        for key in candidate_keys(puzzle) {
            let matches = self.index.lookup(&key);
            if matches.is_empty() {
                continue;
            }
            trace!("Key {} matched {} words.", key, matches.len());
            for word in matches {
                if word.chars().count() < self.min_word_length {
                    continue;
                }
                if seen.insert(word.as_ref()) {
                    words.push(Arc::clone(word));
                }
            }
        }
        debug!("Puzzle {} has {} words.", puzzle, words.len());
        Solution::new(puzzle.clone(), words)
    }

    /// Parses the given letters as a [`Puzzle`], then solves it.
    ///
    /// Fails with [`SpellingBeeError::InvalidPuzzle`] if the letters are not exactly seven
    /// distinct letters.
    pub fn solve_letters(&self, letters: &str) -> Result<Solution, SpellingBeeError> {
        let puzzle = Puzzle::new(letters)?;
        Ok(self.solve(&puzzle))
    }
}
