//! Symbol identifiers and the word interning table.
//!
//! Every word the model has ever seen is assigned a compact [`SymbolId`] on
//! first use. Ids are positions in insertion order, so they never change for
//! the lifetime of a brain. Two ids are reserved and pre-populated:
//!
//! - [`ERROR_ID`] (0) for `<ERROR>`, which doubles as "unknown word"
//! - [`END_ID`] (1) for `<FIN>`, the end-of-sequence marker

use serde::{Deserialize, Serialize};

/// Compact identifier assigned to a word by a [`SymbolTable`].
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Serialize, Deserialize)]
pub struct SymbolId(pub u32);

impl SymbolId {
    /// Build an id from a table position. Panics if the id space is exhausted.
    #[inline]
    pub fn from_usize(index: usize) -> Self {
        assert!(index <= u32::MAX as usize, "SymbolId overflow: {index}");
        SymbolId(index as u32)
    }

    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// Whether this id is one of the two reserved sentinels.
    #[inline]
    pub fn is_sentinel(self) -> bool {
        self == ERROR_ID || self == END_ID
    }
}

/// Reserved id for the error word; also returned for unknown words.
pub const ERROR_ID: SymbolId = SymbolId(0);

/// Reserved id for the end-of-sequence word.
pub const END_ID: SymbolId = SymbolId(1);

/// Spelling of the error sentinel.
pub const ERROR_WORD: &str = "<ERROR>";

/// Spelling of the end-of-sequence sentinel.
pub const END_WORD: &str = "<FIN>";

/// Bidirectional mapping between words and [`SymbolId`]s.
///
/// `words[id]` gives the word for an id. `sorted` holds the same ids ordered
/// by their word, so lookups are a binary search rather than a scan.
/// The table only grows; there is no removal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymbolTable {
    words: Vec<String>,
    sorted: Vec<SymbolId>,
}

impl SymbolTable {
    /// Create a table holding only the two sentinels.
    pub fn new() -> Self {
        let mut table = SymbolTable {
            words: Vec::new(),
            sorted: Vec::new(),
        };
        table.ensure_sentinels();
        table
    }

    /// Make sure ids 0 and 1 are the sentinels.
    ///
    /// A freshly decoded table already has them; calling this again is a no-op.
    pub fn ensure_sentinels(&mut self) {
        self.add(ERROR_WORD);
        self.add(END_WORD);
    }

    /// Return the id of `word`, appending it first if it is new. Never fails.
    pub fn add(&mut self, word: &str) -> SymbolId {
        match self.search(word) {
            Ok(pos) => self.sorted[pos],
            Err(pos) => {
                let id = SymbolId::from_usize(self.words.len());
                self.words.push(word.to_owned());
                self.sorted.insert(pos, id);
                id
            }
        }
    }

    /// Return the id of `word`, or [`ERROR_ID`] if it has never been added.
    pub fn find(&self, word: &str) -> SymbolId {
        match self.search(word) {
            Ok(pos) => self.sorted[pos],
            Err(_) => ERROR_ID,
        }
    }

    /// Whether `word` resolves to a real id. `<FIN>` does; `<ERROR>` never
    /// does, since its id is the one reported for unknown words.
    pub fn contains(&self, word: &str) -> bool {
        self.find(word) != ERROR_ID
    }

    /// The word for `id`.
    ///
    /// # Panics
    /// Panics if `id` was not issued by this table.
    #[inline]
    pub fn word(&self, id: SymbolId) -> &str {
        &self.words[id.as_usize()]
    }

    /// Number of entries, sentinels included.
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether only the sentinels are present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.len() <= 2
    }

    /// Whether a decoded table upholds the shape `add` maintains: the
    /// sentinels at ids 0 and 1, and `sorted` a permutation of every id in
    /// strictly increasing word order.
    pub fn is_consistent(&self) -> bool {
        if self.words.len() < 2
            || self.words[ERROR_ID.as_usize()] != ERROR_WORD
            || self.words[END_ID.as_usize()] != END_WORD
            || self.sorted.len() != self.words.len()
        {
            return false;
        }
        if self.sorted.iter().any(|id| id.as_usize() >= self.words.len()) {
            return false;
        }
        self.sorted
            .windows(2)
            .all(|pair| self.words[pair[0].as_usize()] < self.words[pair[1].as_usize()])
    }

    fn search(&self, word: &str) -> Result<usize, usize> {
        self.sorted
            .binary_search_by(|&id| self.words[id.as_usize()].as_str().cmp(word))
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
