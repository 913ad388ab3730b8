use crate::results::SpellingBeeError;
use log::debug;
use std::collections::HashMap;
use std::io::BufRead;
use std::result::Result;
use std::sync::Arc;

/// Computes the canonical key for the given word: its distinct letters, sorted.
///
/// Two words share a key iff they are made from exactly the same set of letters, regardless of
/// letter order or how many times each letter repeats.
///
/// ```
/// use rs_spelling_bee_solver::details::canonical_key;
///
/// assert_eq!(canonical_key("cafe").as_ref(), "acef");
/// assert_eq!(canonical_key("face").as_ref(), "acef");
/// assert_eq!(canonical_key("effaced").as_ref(), "acdef");
/// ```
pub fn canonical_key(word: &str) -> Box<str> {
    let mut letters: Vec<char> = word.chars().collect();
    letters.sort_unstable();
    letters.dedup();
    letters.into_iter().collect()
}

/// Indexes a list of words by their distinct letters.
///
/// Every word is filed under its [`canonical_key`], so all the words that can be spelled with
/// exactly a given set of letters can be retrieved with a single lookup. The index is immutable
/// once built, and may be shared freely between solvers and threads.
#[derive(Clone, Debug, Default)]
pub struct WordIndex {
    words_by_key: HashMap<Box<str>, Vec<Arc<str>>>,
    num_words: usize,
}

impl WordIndex {
    /// Builds an index from the given words.
    ///
    /// Empty words are skipped, and a word that appears more than once is only indexed once.
    /// Words keep the order they were given in within each key. Words are indexed exactly as
    /// given; see [`WordIndex::from_reader`] for a loader that normalizes them.
    ///
    /// ```
    /// use rs_spelling_bee_solver::WordIndex;
    ///
    /// let index = WordIndex::build(["face", "cafe", "", "face", "fade"]);
    ///
    /// assert_eq!(index.len(), 3);
    /// assert_eq!(index.num_keys(), 2);
    /// ```
    pub fn build<I, S>(words: I) -> WordIndex
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = WordIndex::default();
        for word in words {
            index.insert(word.as_ref());
        }
        debug!(
            "Indexed {} words under {} keys.",
            index.num_words,
            index.words_by_key.len()
        );
        index
    }

    /// Builds an index by reading words from the given reader.
    ///
    /// The reader should provide one word per line. Each word is trimmed and converted to lower
    /// case, and blank lines are ignored.
    pub fn from_reader<R: BufRead>(word_reader: R) -> Result<WordIndex, SpellingBeeError> {
        let words = word_reader
            .lines()
            .map(|maybe_word| maybe_word.map(|word| word.trim().to_lowercase()))
            .collect::<Result<Vec<String>, _>>()?;
        Ok(WordIndex::build(words))
    }

    fn insert(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }
        let bucket = self.words_by_key.entry(canonical_key(word)).or_default();
        if bucket.iter().any(|existing| existing.as_ref() == word) {
            return;
        }
        bucket.push(Arc::from(word));
        self.num_words += 1;
    }

    /// Retrieves the words made from exactly the letters in `key`, or an empty slice if there are
    /// none.
    ///
    /// The key must already be canonical, as returned by [`canonical_key`].
    pub fn lookup(&self, key: &str) -> &[Arc<str>] {
        self.words_by_key
            .get(key)
            .map(|words| words.as_slice())
            .unwrap_or_default()
    }

    /// Iterates over every key that has at least one word.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.words_by_key.keys().map(|key| key.as_ref())
    }

    /// Returns the number of distinct keys.
    pub fn num_keys(&self) -> usize {
        self.words_by_key.len()
    }

    /// Returns the number of distinct words in the index.
    pub fn len(&self) -> usize {
        self.num_words
    }

    /// Returns `true` iff no words have been indexed.
    pub fn is_empty(&self) -> bool {
        self.num_words == 0
    }
}
