use crate::engine::MIN_WORD_LENGTH;
use crate::results::*;
use rand::seq::SliceRandom;
use rand::Rng;
use std::sync::Arc;

/// The number of letters revealed by a hint.
pub const HINT_LENGTH: usize = 3;

/// The result of a single guess in a [`Game`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum GuessOutcome {
    /// The word is in the solution, and uses all seven letters.
    Pangram,
    /// The word is in the solution.
    Correct,
    /// The word was already found earlier in the game.
    AlreadyFound,
    /// The word has too few letters.
    TooShort,
    /// The word does not contain the base letter.
    MissingBaseLetter,
    /// The word is not in the solution.
    Unrecognized,
}

impl GuessOutcome {
    /// Returns `true` iff the guess found a new word.
    pub fn is_correct(&self) -> bool {
        matches!(self, GuessOutcome::Pangram | GuessOutcome::Correct)
    }
}

/// Returns the number of points a found word is worth.
///
/// | Word                | Points |
/// |---------------------|--------|
/// | Up to four letters  | 1      |
/// | Five letters        | 2      |
/// | Six letters         | 3      |
/// | Seven or more       | 5      |
/// | Pangram             | 7      |
pub fn points(word: &str) -> u32 {
    match word.chars().count() {
        0..=4 => 1,
        5 => 2,
        6 => 3,
        _ if is_pangram(word) => 7,
        _ => 5,
    }
}

/// Tracks a player's progress through a single puzzle.
///
/// ```
/// use rs_spelling_bee_solver::*;
///
/// let index = WordIndex::build(["face", "cafe", "decaf"]);
/// let solution = Matcher::new(&index).solve_letters("acefdxy").unwrap();
/// let mut game = Game::new(solution);
///
/// assert_eq!(game.guess("cafe"), GuessOutcome::Correct);
/// assert_eq!(game.guess("cafe"), GuessOutcome::AlreadyFound);
/// assert_eq!(game.guess("dyed"), GuessOutcome::MissingBaseLetter);
/// assert_eq!(game.num_found(), 1);
/// assert!(!game.is_solved());
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    solution: Solution,
    found: Vec<Arc<str>>,
    min_word_length: usize,
}

impl Game {
    /// Starts a game for the given solution, using the default [`MIN_WORD_LENGTH`].
    pub fn new(solution: Solution) -> Game {
        Game::with_min_word_length(solution, MIN_WORD_LENGTH)
    }

    /// Starts a game that rejects guesses with fewer than `min_word_length` letters.
    pub fn with_min_word_length(solution: Solution, min_word_length: usize) -> Game {
        Game {
            solution,
            found: Vec::new(),
            min_word_length,
        }
    }

    pub fn puzzle(&self) -> &Puzzle {
        self.solution.puzzle()
    }

    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    /// Checks the given guess, recording it if it is a new word from the solution.
    ///
    /// The guess is trimmed and converted to lower case first.
    pub fn guess(&mut self, guess: &str) -> GuessOutcome {
        let guess = guess.trim().to_lowercase();
        let found_index = self
            .found
            .binary_search_by(|word| word.as_ref().cmp(guess.as_str()));
        let insert_at = match found_index {
            Ok(_) => return GuessOutcome::AlreadyFound,
            Err(insert_at) => insert_at,
        };
        if guess.chars().count() < self.min_word_length {
            return GuessOutcome::TooShort;
        }
        if let Some(word) = self
            .solution
            .iter()
            .find(|word| word.as_ref() == guess.as_str())
        {
            self.found.insert(insert_at, Arc::clone(word));
            if self.solution.is_pangram(&guess) {
                return GuessOutcome::Pangram;
            }
            return GuessOutcome::Correct;
        }
        if !guess.contains(self.puzzle().base_letter()) {
            return GuessOutcome::MissingBaseLetter;
        }
        GuessOutcome::Unrecognized
    }

    /// Returns the first few letters of a randomly chosen word that has not been found yet, or
    /// `None` if every word has been found.
    pub fn hint<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        let remaining: Vec<&Arc<str>> = self
            .solution
            .iter()
            .filter(|word| !self.is_found(word))
            .collect();
        remaining.choose(rng).copied().map(|word| {
            let end = word
                .char_indices()
                .nth(HINT_LENGTH)
                .map_or(word.len(), |(index, _)| index);
            &word[..end]
        })
    }

    /// Returns `true` iff the given word has already been found.
    pub fn is_found(&self, word: &str) -> bool {
        self.found
            .binary_search_by(|found| found.as_ref().cmp(word))
            .is_ok()
    }

    /// The words found so far, in alphabetical order.
    pub fn found(&self) -> &[Arc<str>] {
        &self.found
    }

    pub fn num_found(&self) -> usize {
        self.found.len()
    }

    pub fn num_words(&self) -> usize {
        self.solution.len()
    }

    /// Returns `true` once every word in the solution has been found.
    pub fn is_solved(&self) -> bool {
        self.found.len() == self.solution.len()
    }

    /// The total points for the words found so far.
    pub fn score(&self) -> u32 {
        self.found.iter().map(|word| points(word)).sum()
    }

    /// The points available if every word is found.
    pub fn max_score(&self) -> u32 {
        self.solution.iter().map(|word| points(word)).sum()
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::data::WordIndex;
    use crate::engine::Matcher;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn new_game(words: &[&str], letters: &str) -> Game {
        let index = WordIndex::build(words);
        let solution = Matcher::new(&index).solve_letters(letters).unwrap();
        Game::new(solution)
    }

    #[test]
    fn points_by_length() {
        assert_eq!(points("gobi"), 1);
        assert_eq!(points("bough"), 2);
        assert_eq!(points("boohoo"), 3);
        assert_eq!(points("hoohaas"), 5);
        assert_eq!(points("abigohu"), 7);
        assert_eq!(points("abigohuu"), 7);
    }

    #[test]
    fn guess_outcomes() {
        let mut game = new_game(&["gobi", "bough", "abigohu", "hobo"], "gabhiou");

        assert_eq!(game.guess("bough"), GuessOutcome::Correct);
        assert_eq!(game.guess(" ABIGOHU "), GuessOutcome::Pangram);
        assert_eq!(game.guess("bough"), GuessOutcome::AlreadyFound);
        assert_eq!(game.guess("gob"), GuessOutcome::TooShort);
        assert_eq!(game.guess("hobo"), GuessOutcome::MissingBaseLetter);
        assert_eq!(game.guess("gabby"), GuessOutcome::Unrecognized);
        assert_eq!(game.found(), &[Arc::<str>::from("abigohu"), Arc::<str>::from("bough")]);
    }

    #[test]
    fn game_is_solved_when_all_found() {
        let mut game = new_game(&["gobi", "bough"], "gabhiou");

        assert!(game.guess("gobi").is_correct());
        assert!(!game.is_solved());
        assert!(game.guess("bough").is_correct());
        assert!(game.is_solved());
        assert_eq!(game.score(), 3);
        assert_eq!(game.max_score(), 3);
    }

    #[test]
    fn hint_returns_prefix_of_unfound_word() {
        let mut game = new_game(&["gobi", "bough"], "gabhiou");
        let mut rng = StdRng::seed_from_u64(7);

        game.guess("gobi");

        assert_eq!(game.hint(&mut rng), Some("bou"));
        game.guess("bough");
        assert_eq!(game.hint(&mut rng), None);
    }

    #[test]
    fn empty_solution_is_solved() {
        let game = new_game(&[], "gabhiou");

        assert!(game.is_solved());
        assert_eq!(game.max_score(), 0);
    }
}
