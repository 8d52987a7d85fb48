//! BrainHAL: a conversational brain built on two order-N Markov tries.
//!
//! This is the facade crate that wires the lower-level pieces together:
//! - [`hal_symbols`]: word interning and the two sentinel symbols
//! - [`hal_trie`]: arena-backed frequency trie
//! - [`hal_model`]: forward/backward tries and the context cursor
//! - [`hal_tokenizer`]: phrase tokenization
//! - [`hal_keywords`]: keyword extraction and the banned/auxiliary/swap lists
//! - [`hal_reply`]: reply generation, surprise scoring and selection
//! - [`hal_store`]: single-file persistence
//!
//! # Quick Start
//!
//! ```
//! use brainhal::{Brain, GenerationLimit};
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//!
//! let mut brain = Brain::in_memory(2, SmallRng::seed_from_u64(42));
//! brain.set_limit(GenerationLimit::Iterations(20));
//! brain.learn("The cat sat on the mat.");
//! let reply = brain.reply("Tell me about the cat.");
//! assert!(!reply.is_empty());
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use hal_model::Model;
use hal_reply::{capitalize, select_reply};
use hal_store::{
    AUXWORDS_KEY, BACKWARD_KEY, BANWORDS_KEY, DICTIONARY_KEY, FORWARD_KEY, SWAPWORDS_KEY, Store,
};
use hal_symbols::SymbolTable;
use hal_trie::Trie;
use rand::Rng;
use thiserror::Error;
use tracing::{debug, info, warn};

pub use hal_keywords::{Keywords, SwapTable, WordLists, make_keywords};
pub use hal_reply::{DEFAULT_TIMEOUT, GenerationLimit};
pub use hal_store::StoreError;
pub use hal_symbols::{END_ID, ERROR_ID, SymbolId};
pub use hal_tokenizer::tokenize;

/// Model order used when none is given.
pub const DEFAULT_ORDER: u8 = 5;

/// Said when no acceptable reply could be produced.
const CANNED_REPLY: &str = "I don't know enough to answer yet!";

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// How to open a [`Brain`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrainConfig {
    /// Backing file; `None` keeps the brain in memory only.
    pub path: Option<PathBuf>,
    pub order: u8,
    pub limit: GenerationLimit,
}

impl BrainConfig {
    /// Default settings persisted at `path`.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        BrainConfig {
            path: Some(path.into()),
            ..Self::default()
        }
    }
}

impl Default for BrainConfig {
    fn default() -> Self {
        BrainConfig {
            path: None,
            order: DEFAULT_ORDER,
            limit: GenerationLimit::default(),
        }
    }
}

/// A learning, replying brain.
///
/// Generic over the PRNG so tests can seed it. The model lives in memory;
/// [`Brain::sync`] writes it to the backing store, [`Brain::close`] syncs a
/// final time, and an unclosed brain syncs when dropped.
pub struct Brain<R: Rng> {
    store: Store,
    model: Model,
    lists: WordLists,
    limit: GenerationLimit,
    rng: R,
    closed: bool,
}

impl<R: Rng> Brain<R> {
    /// Open (or create) the brain described by `config`.
    ///
    /// A stored brain keeps the order it was created with; asking for a
    /// different one fails with [`StoreError::OrderMismatch`]. Stored word
    /// lists take precedence over the built-in ones. A dictionary or trie
    /// that decodes but breaks its own invariants fails with
    /// [`StoreError::Corrupt`].
    pub fn open(config: BrainConfig, rng: R) -> Result<Self> {
        let mut store = match &config.path {
            Some(path) => Store::open(path)?,
            None => Store::in_memory(),
        };
        store.check_header(config.order)?;

        let symbols = store
            .get_checked(DICTIONARY_KEY, SymbolTable::is_consistent)?
            .unwrap_or_else(SymbolTable::new);
        let known = symbols.len();
        let forward = store
            .get_checked(FORWARD_KEY, |t: &Trie| t.is_consistent(known))?
            .unwrap_or_else(Trie::new);
        let backward = store
            .get_checked(BACKWARD_KEY, |t: &Trie| t.is_consistent(known))?
            .unwrap_or_else(Trie::new);
        let model = Model::from_parts(config.order, symbols, forward, backward);

        let WordLists {
            banned,
            auxiliary,
            swap,
        } = WordLists::default();
        let lists = WordLists {
            banned: store.get_or_insert_with(BANWORDS_KEY, || banned)?,
            auxiliary: store.get_or_insert_with(AUXWORDS_KEY, || auxiliary)?,
            swap: store.get_or_insert_with(SWAPWORDS_KEY, || swap)?,
        };

        info!(
            path = ?config.path,
            order = config.order,
            symbols = model.symbols.len(),
            "brain opened"
        );
        Ok(Brain {
            store,
            model,
            lists,
            limit: config.limit,
            rng,
            closed: false,
        })
    }

    /// A fresh brain that is never written anywhere.
    pub fn in_memory(order: u8, rng: R) -> Self {
        Brain {
            store: Store::in_memory(),
            model: Model::new(order),
            lists: WordLists::default(),
            limit: GenerationLimit::default(),
            rng,
            closed: false,
        }
    }

    pub fn order(&self) -> u8 {
        self.model.order
    }

    pub fn limit(&self) -> GenerationLimit {
        self.limit
    }

    pub fn set_limit(&mut self, limit: GenerationLimit) {
        self.limit = limit;
    }

    pub fn word_lists(&self) -> &WordLists {
        &self.lists
    }

    /// Changes are persisted on the next sync.
    pub fn word_lists_mut(&mut self) -> &mut WordLists {
        &mut self.lists
    }

    /// The underlying model, for inspection.
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Learn from `phrase` without replying.
    pub fn learn(&mut self, phrase: &str) {
        self.communicate(phrase, true, false);
    }

    /// Learn from `phrase`, then reply to it.
    pub fn reply(&mut self, phrase: &str) -> String {
        self.communicate(phrase, true, true).unwrap_or_default()
    }

    /// Reply to `phrase` without learning from it.
    pub fn reply_nolearn(&mut self, phrase: &str) -> String {
        self.communicate(phrase, false, true).unwrap_or_default()
    }

    /// Tokenize `phrase`, optionally learn it, and optionally reply.
    ///
    /// Learning always happens before replying, so a reply may draw on the
    /// phrase it answers.
    pub fn communicate(&mut self, phrase: &str, learn: bool, reply: bool) -> Option<String> {
        let words = tokenize(phrase);
        if learn {
            self.train_phrase(&words);
        }
        let limit = self.limit;
        reply.then(|| capitalize(&self.reply_words(&words, limit)))
    }

    /// Learn an already tokenized phrase.
    pub fn train_phrase<W: AsRef<str>>(&mut self, words: &[W]) {
        self.model.train_phrase(words);
    }

    /// The uncapitalized reply to already tokenized input, searched for
    /// until `limit` is reached. Does not learn from `words`.
    pub fn reply_words<W: AsRef<str>>(
        &mut self,
        words: &[W],
        limit: GenerationLimit,
    ) -> Vec<String> {
        let keywords = make_keywords(words, &self.model.symbols, &self.lists);
        debug!(keywords = ?keywords.as_slice(), "keywords extracted");
        select_reply(
            &self.model,
            words,
            &keywords,
            &self.lists,
            &limit,
            &mut self.rng,
        )
        .unwrap_or_else(|| tokenize(CANNED_REPLY))
    }

    /// Id of `word`, interning it if new.
    pub fn lookup_or_create_symbol(&mut self, word: &str) -> SymbolId {
        self.model.symbols.add(word)
    }

    /// Id of `word`, or [`ERROR_ID`] if it was never seen.
    pub fn lookup_symbol(&self, word: &str) -> SymbolId {
        self.model.symbols.find(word)
    }

    /// Learn every line of a text file.
    ///
    /// Lines are trimmed; blank lines and `#` comments are skipped. Returns
    /// the number of lines learned.
    pub fn train_file(&mut self, path: &Path) -> Result<usize> {
        let content = fs::read_to_string(path)?;
        let mut learned = 0;
        for line in content.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            self.learn(line);
            learned += 1;
        }
        info!(
            path = %path.display(),
            phrases = learned,
            symbols = self.model.symbols.len(),
            "training file learned"
        );
        Ok(learned)
    }

    /// Write the model and word lists to the backing store.
    pub fn sync(&mut self) -> Result<()> {
        let Some(path) = self.store.path().map(Path::to_path_buf) else {
            return Ok(());
        };
        self.store.put(DICTIONARY_KEY, &self.model.symbols)?;
        self.store.put(FORWARD_KEY, &self.model.forward)?;
        self.store.put(BACKWARD_KEY, &self.model.backward)?;
        self.store.put(BANWORDS_KEY, &self.lists.banned)?;
        self.store.put(AUXWORDS_KEY, &self.lists.auxiliary)?;
        self.store.put(SWAPWORDS_KEY, &self.lists.swap)?;
        self.store.flush()?;
        info!(
            path = %path.display(),
            symbols = self.model.symbols.len(),
            forward_nodes = self.model.forward.len(),
            backward_nodes = self.model.backward.len(),
            "brain synced"
        );
        Ok(())
    }

    /// Sync one last time and release the brain.
    pub fn close(mut self) -> Result<()> {
        self.closed = true;
        self.sync()?;
        info!("brain closed");
        Ok(())
    }
}

impl<R: Rng> Drop for Brain<R> {
    fn drop(&mut self) {
        if self.closed {
            return;
        }
        if let Err(error) = self.sync() {
            warn!(%error, "sync on drop failed");
        }
    }
}

/// Parse a word list: one word per line, `#` comments and blanks skipped.
/// Words are uppercased.
pub fn parse_word_list(text: &str) -> Vec<String> {
    meaningful_lines(text).map(str::to_uppercase).collect()
}

/// Parse a swap list of whitespace-separated `FROM TO` pairs.
///
/// Lines with fewer than two fields are ignored.
pub fn parse_swap_list(text: &str) -> SwapTable {
    meaningful_lines(text)
        .filter_map(|line| {
            let mut fields = line.split_whitespace();
            let from = fields.next()?.to_uppercase();
            let to = fields.next()?.to_uppercase();
            Some((from, to))
        })
        .collect()
}

pub fn load_word_list(path: &Path) -> io::Result<Vec<String>> {
    Ok(parse_word_list(&fs::read_to_string(path)?))
}

pub fn load_swap_file(path: &Path) -> io::Result<SwapTable> {
    Ok(parse_swap_list(&fs::read_to_string(path)?))
}

fn meaningful_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
}
