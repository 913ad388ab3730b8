use crate::data::WordIndex;
use crate::engine::Matcher;
use crate::results::*;
use log::debug;
use log::trace;
use rand::seq::SliceRandom;
use rand::Rng;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The fewest words a puzzle needs to be playable.
pub const MIN_PLAYABLE_WORDS: usize = 5;
/// The most words a puzzle may have to be playable.
pub const MAX_PLAYABLE_WORDS: usize = 50;
/// The fewest short (under five letter) words a puzzle needs to be playable.
pub const MIN_PLAYABLE_SHORT_WORDS: usize = 3;

/// How hard a puzzle is to complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Rates a solution.
    ///
    /// * More than 200 words is hard.
    /// * Fewer than 20 words, where more than 10 of them are longer than five letters, is hard.
    /// * More than 50 words is medium.
    /// * Anything else is easy.
    pub fn of(solution: &[Arc<str>]) -> Difficulty {
        let num_words = solution.len();
        if num_words > 200 {
            return Difficulty::Hard;
        }
        let num_long_words = solution
            .iter()
            .filter(|word| word.chars().count() > 5)
            .count();
        if num_words < 20 && num_long_words > 10 {
            return Difficulty::Hard;
        }
        if num_words > 50 {
            return Difficulty::Medium;
        }
        Difficulty::Easy
    }

    /// The lower case name of this difficulty.
    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns `true` iff the solution makes for a fair game: not too few words, not too many, and
/// enough short words to get started.
pub fn is_playable(solution: &[Arc<str>]) -> bool {
    let num_short_words = solution
        .iter()
        .filter(|word| word.chars().count() < 5)
        .count();
    (MIN_PLAYABLE_WORDS..=MAX_PLAYABLE_WORDS).contains(&solution.len())
        && num_short_words >= MIN_PLAYABLE_SHORT_WORDS
}

/// Lists a puzzle for every set of seven letters that spells at least one word in the index.
///
/// Each puzzle's letters are the sorted key, so the base letter is the alphabetically first
/// letter. Every one of these puzzles has at least one pangram. The puzzles are sorted.
pub fn pangram_puzzles(index: &WordIndex) -> Vec<Puzzle> {
    let mut puzzles: Vec<Puzzle> = index
        .keys()
        .filter(|key| key.chars().count() == PUZZLE_LENGTH)
        .filter_map(|key| Puzzle::new(key).ok())
        .collect();
    puzzles.sort_unstable();
    puzzles
}

/// Picks random pangram puzzles until one [`is_playable`], giving up after `max_attempts`.
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use rs_spelling_bee_solver::*;
///
/// let index = WordIndex::build(["face", "cafe", "fade", "aced", "decaf", "faced", "facedxy"]);
/// let matcher = Matcher::new(&index);
/// let mut rng = StdRng::seed_from_u64(1);
///
/// let solution = random_playable_puzzle(&matcher, &mut rng, 10).unwrap();
///
/// assert_eq!(solution.puzzle().letters(), "acdefxy");
/// ```
pub fn random_playable_puzzle<R: Rng + ?Sized>(
    matcher: &Matcher,
    rng: &mut R,
    max_attempts: usize,
) -> Option<Solution> {
    let puzzles = pangram_puzzles(matcher.index());
    for _ in 0..max_attempts {
        let puzzle = puzzles.choose(rng)?;
        let solution = matcher.solve(puzzle);
        if is_playable(&solution) {
            return Some(solution);
        }
        trace!("Puzzle {} is not playable.", puzzle);
    }
    None
}

/// Every pangram puzzle from an index, along with its sorted solution, grouped by difficulty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PuzzleBank {
    easy: BTreeMap<Puzzle, Vec<Arc<str>>>,
    medium: BTreeMap<Puzzle, Vec<Arc<str>>>,
    hard: BTreeMap<Puzzle, Vec<Arc<str>>>,
}

impl PuzzleBank {
    /// Solves every one of the [`pangram_puzzles`] in the matcher's index, in parallel.
    pub fn generate(matcher: &Matcher) -> PuzzleBank {
        let puzzles = pangram_puzzles(matcher.index());
        let solutions: Vec<Solution> = puzzles
            .par_iter()
            .map(|puzzle| matcher.solve(puzzle))
            .collect();
        let mut bank = PuzzleBank::default();
        for solution in solutions {
            bank.insert(solution);
        }
        debug!(
            "Generated {} easy, {} medium, and {} hard puzzles.",
            bank.easy.len(),
            bank.medium.len(),
            bank.hard.len()
        );
        bank
    }

    /// Adds a solved puzzle to the bank, rating it with [`Difficulty::of`].
    pub fn insert(&mut self, solution: Solution) -> Difficulty {
        let difficulty = Difficulty::of(&solution);
        let words = solution.sorted_words();
        self.puzzles_mut(difficulty)
            .insert(solution.puzzle().clone(), words);
        difficulty
    }

    /// The puzzles of the given difficulty, mapped to their sorted solutions.
    pub fn puzzles(&self, difficulty: Difficulty) -> &BTreeMap<Puzzle, Vec<Arc<str>>> {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }

    fn puzzles_mut(&mut self, difficulty: Difficulty) -> &mut BTreeMap<Puzzle, Vec<Arc<str>>> {
        match difficulty {
            Difficulty::Easy => &mut self.easy,
            Difficulty::Medium => &mut self.medium,
            Difficulty::Hard => &mut self.hard,
        }
    }

    /// The total number of puzzles across all difficulties.
    pub fn len(&self) -> usize {
        self.easy.len() + self.medium.len() + self.hard.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
