//! Keyword selection.
//!
//! Keywords are the words of a stimulus phrase that reply generation should
//! try to echo. Selection runs two passes over the (swapped) input words:
//!
//! 1. **Primary**: known, alphanumeric-leading words that are neither banned
//!    nor auxiliary.
//! 2. **Auxiliary**: only if the primary pass found something, known
//!    alphanumeric-leading words that *are* auxiliary.
//!
//! The swap table maps perspective words ("I" ↔ "YOU", "MY" ↔ "YOUR", ...)
//! before any check, so replies are driven from the opposite point of view.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use hal_symbols::SymbolTable;
use serde::{Deserialize, Serialize};

mod defaults;

pub use defaults::{DEFAULT_AUXILIARY, DEFAULT_BANNED, DEFAULT_SWAPS};

/// One-to-one perspective substitution applied before keyword checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapTable {
    pairs: BTreeMap<String, String>,
}

impl SwapTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `from` to `to`, replacing any earlier mapping for `from`.
    pub fn insert(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.pairs.insert(from.into(), to.into());
    }

    pub fn remove(&mut self, from: &str) -> Option<String> {
        self.pairs.remove(from)
    }

    /// The substitute for `word`, or `word` itself.
    pub fn apply<'a>(&'a self, word: &'a str) -> &'a str {
        self.pairs.get(word).map_or(word, String::as_str)
    }

    pub fn get(&self, from: &str) -> Option<&str> {
        self.pairs.get(from).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(f, t)| (f.as_str(), t.as_str()))
    }
}

impl<F: Into<String>, T: Into<String>> FromIterator<(F, T)> for SwapTable {
    fn from_iter<I: IntoIterator<Item = (F, T)>>(iter: I) -> Self {
        SwapTable {
            pairs: iter
                .into_iter()
                .map(|(f, t)| (f.into(), t.into()))
                .collect(),
        }
    }
}

/// The three configuration lists that steer keyword selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordLists {
    /// Never keywords.
    pub banned: BTreeSet<String>,
    /// Keywords only alongside at least one primary keyword.
    pub auxiliary: BTreeSet<String>,
    pub swap: SwapTable,
}

impl WordLists {
    /// Lists with nothing in them.
    pub fn empty() -> Self {
        WordLists {
            banned: BTreeSet::new(),
            auxiliary: BTreeSet::new(),
            swap: SwapTable::new(),
        }
    }

    pub fn is_banned(&self, word: &str) -> bool {
        self.banned.contains(word)
    }

    pub fn is_auxiliary(&self, word: &str) -> bool {
        self.auxiliary.contains(word)
    }
}

impl Default for WordLists {
    /// The built-in English lists.
    fn default() -> Self {
        WordLists {
            banned: DEFAULT_BANNED.iter().map(|w| w.to_string()).collect(),
            auxiliary: DEFAULT_AUXILIARY.iter().map(|w| w.to_string()).collect(),
            swap: DEFAULT_SWAPS.iter().copied().collect(),
        }
    }
}

/// Ordered set of unique keywords, in the order they were found.
#[derive(Debug, Clone, Default)]
pub struct Keywords {
    ordered: Vec<String>,
    lookup: HashSet<String>,
}

impl Keywords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `word` unless already present. Returns whether it was added.
    pub fn insert(&mut self, word: &str) -> bool {
        if self.lookup.contains(word) {
            return false;
        }
        self.lookup.insert(word.to_owned());
        self.ordered.push(word.to_owned());
        true
    }

    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.lookup.contains(word)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.ordered
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.ordered.iter()
    }

    /// Whether `words` is exactly this keyword list, in order.
    pub fn same_as<W: AsRef<str>>(&self, words: &[W]) -> bool {
        self.ordered.len() == words.len()
            && self
                .ordered
                .iter()
                .zip(words)
                .all(|(k, w)| {
                    let w: &str = w.as_ref();
                    k == w
                })
    }
}

impl<S: AsRef<str>> FromIterator<S> for Keywords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut keys = Keywords::new();
        for word in iter {
            keys.insert(word.as_ref());
        }
        keys
    }
}

impl PartialEq for Keywords {
    fn eq(&self, other: &Self) -> bool {
        self.ordered == other.ordered
    }
}

impl Eq for Keywords {}

/// Select the keywords of `words` (an uppercase, tokenized phrase).
///
/// A word is only ever a keyword if `symbols` already knows it and it starts
/// with an alphanumeric character; unknown words, punctuation and banned words
/// are always left out.
pub fn make_keywords<W: AsRef<str>>(
    words: &[W],
    symbols: &SymbolTable,
    lists: &WordLists,
) -> Keywords {
    let mut keys = Keywords::new();

    for word in words {
        let word = lists.swap.apply(word.as_ref());
        if eligible(word, symbols) && !lists.is_banned(word) && !lists.is_auxiliary(word) {
            keys.insert(word);
        }
    }

    if !keys.is_empty() {
        for word in words {
            let word = lists.swap.apply(word.as_ref());
            if eligible(word, symbols) && lists.is_auxiliary(word) && !lists.is_banned(word) {
                keys.insert(word);
            }
        }
    }

    keys
}

fn eligible(word: &str, symbols: &SymbolTable) -> bool {
    word.chars().next().is_some_and(char::is_alphanumeric) && symbols.contains(word)
}
