#![cfg_attr(feature = "unstable", feature(test))]

//! Solves Spelling Bee-style puzzles: given seven distinct letters, the first of which is the
//! base letter, find every word with at least four letters that contains the base letter and
//! uses no other letters.
//!
//! ```
//! use rs_spelling_bee_solver::Matcher;
//! use rs_spelling_bee_solver::WordIndex;
//!
//! let index = WordIndex::build(["face", "cafe", "aced", "fade", "decaf", "cod"]);
//! let matcher = Matcher::new(&index);
//!
//! let solution = matcher.solve_letters("acefdxy").unwrap();
//!
//! assert_eq!(solution.len(), 5);
//! assert!(!solution.contains("cod"));
//! ```

mod data;
mod engine;
mod game;
mod puzzles;
mod results;

pub use data::WordIndex;
pub use engine::Matcher;
pub use engine::MIN_WORD_LENGTH;
pub use game::*;
pub use puzzles::*;
pub use results::*;

/// Building blocks used by the [`Matcher`], exposed for callers that want to probe the index
/// directly.
pub mod details {
    pub use crate::data::canonical_key;
    pub use crate::engine::candidate_keys;
}
