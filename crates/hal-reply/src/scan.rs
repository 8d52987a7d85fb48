//! Round-robin scan over a node's children starting at a random index.

/// What a visitor decided about the index it was shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Visit {
    Take,
    Skip,
}

/// Visit `start, start + 1, ...` modulo `len` until `visit` takes one or
/// `max_visits` indices have been shown.
///
/// Seeding uses it with pass/fail predicates; babbling turns it into a
/// roulette wheel by decrementing a random threshold inside `visit`.
pub(crate) fn circular(
    start: usize,
    len: usize,
    max_visits: usize,
    mut visit: impl FnMut(usize) -> Visit,
) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let mut i = start % len;
    for _ in 0..max_visits {
        if visit(i) == Visit::Take {
            return Some(i);
        }
        i = if i + 1 == len { 0 } else { i + 1 };
    }
    None
}
