#[macro_use]
extern crate assert_matches;

use rs_spelling_bee_solver::details::*;
use rs_spelling_bee_solver::*;

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

const WORDS: [&str; 14] = [
    "face", "cafe", "aced", "fade", "decaf", "cod", "dace", "faced", "effaced", "defacxy", "ace",
    "yaff", "cede", "decay",
];

fn solution_set(solution: &Solution) -> HashSet<&str> {
    solution.iter().map(|word| word.as_ref()).collect()
}

#[test]
fn solve_finds_all_words() {
    let index = WordIndex::build(["face", "cafe", "aced", "fade", "decaf"]);
    let matcher = Matcher::new(&index);

    let solution = matcher.solve_letters("acefdxy").unwrap();

    assert_eq!(
        solution_set(&solution),
        HashSet::from(["face", "cafe", "aced", "fade", "decaf"])
    );
    assert_eq!(canonical_key("cafe"), canonical_key("face"));
}

#[test]
fn solve_excludes_words_without_base_letter() {
    let index = WordIndex::build(["cod", "code", "coda", "decode"]);
    let matcher = Matcher::new(&index);

    let solution = matcher.solve_letters("aocdexy").unwrap();

    assert_eq!(solution_set(&solution), HashSet::from(["coda"]));
}

#[test]
fn solve_words_satisfy_puzzle_rules() {
    let index = WordIndex::build(WORDS);
    let matcher = Matcher::new(&index);
    let puzzle = Puzzle::new("acefdxy").unwrap();

    let solution = matcher.solve(&puzzle);

    assert!(!solution.is_empty());
    for word in solution.iter() {
        assert!(WORDS.contains(&word.as_ref()));
        assert!(word.chars().count() >= MIN_WORD_LENGTH);
        assert!(word.contains(puzzle.base_letter()));
        assert!(word.chars().all(|letter| puzzle.contains(letter)));
    }
    assert!(!solution.contains("ace"));
    assert!(!solution.contains("cede"));
}

#[test]
fn solve_has_no_duplicates() {
    let index = WordIndex::build(["face", "face", "cafe", "face"]);
    let matcher = Matcher::new(&index);

    let solution = matcher.solve_letters("acefdxy").unwrap();

    assert_eq!(solution.len(), 2);
}

#[test]
fn solve_is_deterministic() {
    let index = WordIndex::build(WORDS);
    let matcher = Matcher::new(&index);

    let first = matcher.solve_letters("acefdxy").unwrap();
    let second = matcher.solve_letters("acefdxy").unwrap();
    let other_index = WordIndex::build(WORDS);
    let third = Matcher::new(&other_index).solve_letters("acefdxy").unwrap();

    assert_eq!(first, second);
    assert_eq!(solution_set(&first), solution_set(&third));
}

#[test]
fn solve_reports_pangrams() {
    let index = WordIndex::build(WORDS);
    let matcher = Matcher::new(&index);

    let solution = matcher.solve_letters("acefdxy").unwrap();

    assert!(solution.contains("defacxy"));
    assert!(solution.is_pangram("defacxy"));
    assert!(!solution.is_pangram("decaf"));
    assert_eq!(
        solution.pangrams().map(|word| word.as_ref()).collect::<Vec<&str>>(),
        vec!["defacxy"]
    );
}

#[test]
fn solve_empty_index() {
    let index = WordIndex::build(Vec::<&str>::new());
    let matcher = Matcher::new(&index);

    assert!(matcher.solve_letters("acefdxy").unwrap().is_empty());
}

#[test]
fn solve_letters_invalid_puzzle_fails() {
    let index = WordIndex::build(WORDS);
    let matcher = Matcher::new(&index);

    assert_matches!(
        matcher.solve_letters("acef"),
        Err(SpellingBeeError::InvalidPuzzle(_))
    );
    assert_matches!(
        matcher.solve_letters("acefdxa"),
        Err(SpellingBeeError::InvalidPuzzle(_))
    );
}

#[test]
fn solve_shared_across_threads() {
    let index = Arc::new(WordIndex::build(WORDS));
    let expected = Matcher::new(&index).solve_letters("acefdxy").unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let index = Arc::clone(&index);
            thread::spawn(move || {
                Matcher::new(&index)
                    .solve_letters("acefdxy")
                    .unwrap()
                    .sorted_words()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected.sorted_words());
    }
}
