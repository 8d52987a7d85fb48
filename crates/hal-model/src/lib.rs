//! The trained model and the cursor used to walk it.
//!
//! [`Model`] bundles the symbol table with two tries over the same phrases:
//! `forward` reads each phrase left to right, `backward` right to left.
//! [`Cursor`] keeps one live node per context length while a symbol sequence
//! is scanned, which lets a single pass record statistics at every order from
//! 0 up to the configured maximum.

use hal_symbols::{END_ID, SymbolId, SymbolTable};
use hal_trie::{NodeRef, Trie};

/// Per-traversal view into a [`Trie`].
///
/// Slot `d` holds the node for the most recent `d` symbols, or `None` when
/// that context has never been seen. Slot 0 is the root and never changes.
/// There are `order + 2` slots so that contexts of length `order` carry
/// continuation children.
///
/// A cursor holds handles, not nodes, and is only meaningful for the trie it
/// was created from. Create a fresh one per pass.
#[derive(Debug, Clone)]
pub struct Cursor {
    root: NodeRef,
    slots: Vec<Option<NodeRef>>,
    order: u8,
    /// Set once generation has eagerly picked a keyword.
    pub used_key: bool,
}

impl Cursor {
    /// A cursor positioned at `root` with no context.
    pub fn new(root: NodeRef, order: u8) -> Self {
        let mut slots = vec![None; order as usize + 2];
        slots[0] = Some(root);
        Cursor {
            root,
            slots,
            order,
            used_key: false,
        }
    }

    /// Training step: push `symbol` onto every open context, creating and
    /// counting nodes as needed.
    ///
    /// Depths are walked deepest first so each one reads its parent slot as it
    /// was before this symbol.
    pub fn extend(&mut self, trie: &mut Trie, symbol: SymbolId) {
        for d in (1..self.slots.len()).rev() {
            if let Some(parent) = self.slots[d - 1] {
                self.slots[d] = Some(trie.extend_child(parent, symbol));
            }
        }
    }

    /// Read-only step: same walk as [`Cursor::extend`], but only follows
    /// existing children. A context that was never trained becomes unset.
    pub fn advance(&mut self, trie: &Trie, symbol: SymbolId) {
        for d in (1..self.slots.len()).rev() {
            self.slots[d] = self.slots[d - 1].and_then(|parent| trie.find_child(parent, symbol));
        }
    }

    /// Node for the most recent `depth` symbols, if any.
    #[inline]
    pub fn at_depth(&self, depth: usize) -> Option<NodeRef> {
        self.slots.get(depth).copied().flatten()
    }

    /// The most specific context among depths `0..=order`.
    pub fn deepest(&self) -> NodeRef {
        self.slots[..=self.order as usize]
            .iter()
            .rev()
            .find_map(|slot| *slot)
            .unwrap_or(self.root)
    }

    #[inline]
    pub fn order(&self) -> u8 {
        self.order
    }
}

/// Symbol table plus forward and backward tries of one order.
#[derive(Debug, Clone)]
pub struct Model {
    pub order: u8,
    pub symbols: SymbolTable,
    pub forward: Trie,
    pub backward: Trie,
}

impl Model {
    /// An empty model.
    pub fn new(order: u8) -> Self {
        Model {
            order,
            symbols: SymbolTable::new(),
            forward: Trie::new(),
            backward: Trie::new(),
        }
    }

    /// Reassemble a model from persisted parts. The sentinels are re-added if
    /// the table somehow lacks them.
    pub fn from_parts(order: u8, mut symbols: SymbolTable, forward: Trie, backward: Trie) -> Self {
        symbols.ensure_sentinels();
        Model {
            order,
            symbols,
            forward,
            backward,
        }
    }

    /// Train both tries on one phrase. Phrases of `order` words or fewer are
    /// ignored.
    ///
    /// The forward pass interns every word; the backward pass reuses those ids
    /// in reverse. Both passes finish with the end sentinel.
    pub fn train_phrase<W: AsRef<str>>(&mut self, words: &[W]) {
        if words.len() <= self.order as usize {
            return;
        }

        let ids: Vec<SymbolId> = words
            .iter()
            .map(|w| self.symbols.add(w.as_ref()))
            .collect();

        let mut cursor = self.forward_cursor();
        for &id in &ids {
            cursor.extend(&mut self.forward, id);
        }
        cursor.extend(&mut self.forward, END_ID);

        let mut cursor = self.backward_cursor();
        for &id in ids.iter().rev() {
            cursor.extend(&mut self.backward, id);
        }
        cursor.extend(&mut self.backward, END_ID);
    }

    pub fn forward_cursor(&self) -> Cursor {
        Cursor::new(self.forward.root(), self.order)
    }

    pub fn backward_cursor(&self) -> Cursor {
        Cursor::new(self.backward.root(), self.order)
    }
}
