//! Arena-backed frequency trie for order-N symbol statistics.
//!
//! Each node stands for one suffix of symbols: the root is the empty suffix,
//! its children are single symbols, their children two-symbol suffixes, and so
//! on. A node's `count` is how often that suffix was reached from its parent;
//! its `usage` is the sum of its children's counts, i.e. how many
//! continuations were ever recorded after it. `usage == Σ child.count` holds
//! for every node at all times.
//!
//! Nodes live in one `Vec` and are addressed by [`NodeRef`] indices. The trie
//! owns every node; handles do not borrow it, so a cursor can keep a handle per
//! depth while the trie is being extended. Nodes are never removed.

use hal_symbols::{ERROR_ID, SymbolId};
use serde::{Deserialize, Serialize};

/// Handle to a node inside a [`Trie`]. Only meaningful for the trie that issued it.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct NodeRef(u32);

impl NodeRef {
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }

    #[inline]
    fn from_usize(index: usize) -> Self {
        assert!(index <= u32::MAX as usize, "trie node arena overflow: {index}");
        NodeRef(index as u32)
    }
}

/// One suffix in the trie and its continuation statistics.
///
/// `P(child | node) = child.count / node.usage`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrieNode {
    /// Last symbol of the suffix. Meaningless on the root.
    pub symbol: SymbolId,
    /// Sum of the children's `count`.
    pub usage: u64,
    /// Times this suffix was reached from its parent.
    pub count: u32,
    /// At most one child per symbol, sorted by symbol.
    children: Vec<NodeRef>,
}

impl TrieNode {
    fn new(symbol: SymbolId) -> Self {
        TrieNode {
            symbol,
            usage: 0,
            count: 0,
            children: Vec::new(),
        }
    }
}

/// Order-N frequency trie. The root is always node 0.
///
/// ```
/// use hal_trie::Trie;
/// use hal_symbols::SymbolId;
///
/// let mut trie = Trie::new();
/// let root = trie.root();
/// let child = trie.extend_child(root, SymbolId(2));
/// trie.extend_child(root, SymbolId(2));
///
/// assert_eq!(trie.node(child).count, 2);
/// assert_eq!(trie.node(root).usage, 2);
/// assert_eq!(trie.find_child(root, SymbolId(3)), None);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trie {
    nodes: Vec<TrieNode>,
}

impl Trie {
    pub fn new() -> Self {
        Trie {
            nodes: vec![TrieNode::new(ERROR_ID)],
        }
    }

    #[inline]
    pub fn root(&self) -> NodeRef {
        NodeRef(0)
    }

    #[inline]
    pub fn node(&self, r: NodeRef) -> &TrieNode {
        &self.nodes[r.as_usize()]
    }

    /// Read-only child lookup. Never creates or counts anything.
    pub fn find_child(&self, parent: NodeRef, symbol: SymbolId) -> Option<NodeRef> {
        self.search(parent, symbol)
            .ok()
            .map(|pos| self.nodes[parent.as_usize()].children[pos])
    }

    /// Look up or create the child of `parent` labelled `symbol`, then count
    /// one more observation of it.
    ///
    /// The child's `count` and the parent's `usage` move together. Once a
    /// count reaches `u32::MAX` further observations are dropped for both, so
    /// the usage invariant survives saturation.
    pub fn extend_child(&mut self, parent: NodeRef, symbol: SymbolId) -> NodeRef {
        let child = match self.search(parent, symbol) {
            Ok(pos) => self.nodes[parent.as_usize()].children[pos],
            Err(pos) => {
                let child = NodeRef::from_usize(self.nodes.len());
                self.nodes.push(TrieNode::new(symbol));
                self.nodes[parent.as_usize()].children.insert(pos, child);
                child
            }
        };

        let node = &mut self.nodes[child.as_usize()];
        if node.count < u32::MAX {
            node.count += 1;
            self.nodes[parent.as_usize()].usage += 1;
        }
        child
    }

    /// Children of `parent`, sorted by symbol.
    #[inline]
    pub fn children(&self, parent: NodeRef) -> &[NodeRef] {
        &self.nodes[parent.as_usize()].children
    }

    /// Total number of nodes, root included.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether nothing has been recorded yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Whether a decoded trie upholds the shape `extend_child` maintains.
    ///
    /// Every non-root node has exactly one parent stored before it, children
    /// are strictly sorted by symbol, each node's `usage` is the sum of its
    /// children's `count`, and every symbol is below `symbol_count`.
    pub fn is_consistent(&self, symbol_count: usize) -> bool {
        if self.nodes.is_empty() {
            return false;
        }
        let mut parents = vec![0u8; self.nodes.len()];
        for (index, node) in self.nodes.iter().enumerate() {
            if index > 0 && node.symbol.as_usize() >= symbol_count {
                return false;
            }
            let mut total = 0u64;
            for &child in &node.children {
                let at = child.as_usize();
                if at <= index || at >= self.nodes.len() || parents[at] > 0 {
                    return false;
                }
                parents[at] = 1;
                total += u64::from(self.nodes[at].count);
            }
            let sorted = node.children.windows(2).all(|pair| {
                self.nodes[pair[0].as_usize()].symbol < self.nodes[pair[1].as_usize()].symbol
            });
            if !sorted || total != node.usage {
                return false;
            }
        }
        parents.iter().skip(1).all(|&seen| seen == 1)
    }

    fn search(&self, parent: NodeRef, symbol: SymbolId) -> Result<usize, usize> {
        self.nodes[parent.as_usize()]
            .children
            .binary_search_by(|child| self.nodes[child.as_usize()].symbol.cmp(&symbol))
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}
