//! Reply generation: seeding, babbling, surprise scoring and selection.
//!
//! A reply is grown outward from one seed word. The forward trie extends it
//! to the right until an end marker, then the backward trie, primed with the
//! reply's leading words, extends it to the left. Each step is a
//! count-weighted random pick among the continuations of the most specific
//! known context, except that an unused keyword met during the pick wins
//! outright.
//!
//! [`select_reply`] repeats this under a [`GenerationLimit`] and keeps the
//! candidate whose keywords were least predictable ([`evaluate`]).
//!
//! Nothing here mutates the model.

use std::time::{Duration, Instant};

use hal_keywords::{Keywords, WordLists};
use hal_model::{Cursor, Model};
use hal_symbols::{ERROR_ID, SymbolId, SymbolTable};
use hal_trie::Trie;
use rand::Rng;
use tracing::debug;

mod scan;

use scan::Visit;

/// Search budget used when nothing else is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

/// Bounds the candidate search in [`select_reply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationLimit {
    /// Stop once this much wall-clock time has passed.
    Timeout(Duration),
    /// Stop after this many keyword-biased candidates.
    Iterations(usize),
    /// Stop at whichever comes first.
    Both {
        timeout: Duration,
        max_iterations: usize,
    },
}

impl GenerationLimit {
    fn reached(&self, start: Instant, iterations: usize) -> bool {
        match *self {
            GenerationLimit::Timeout(timeout) => start.elapsed() >= timeout,
            GenerationLimit::Iterations(n) => iterations >= n,
            GenerationLimit::Both {
                timeout,
                max_iterations,
            } => iterations >= max_iterations || start.elapsed() >= timeout,
        }
    }
}

impl Default for GenerationLimit {
    fn default() -> Self {
        GenerationLimit::Timeout(DEFAULT_TIMEOUT)
    }
}

/// Pick the first word of a forward walk.
///
/// Keywords are tried in order from a random starting point, skipping
/// auxiliary and unknown ones. Without a usable keyword, any word seen at the
/// root of the forward trie is chosen uniformly; an empty trie gives
/// [`ERROR_ID`].
pub fn seed<R: Rng>(model: &Model, keywords: &Keywords, lists: &WordLists, rng: &mut R) -> SymbolId {
    let keys = keywords.as_slice();
    if !keys.is_empty() {
        let start = rng.random_range(0..keys.len());
        let usable = scan::circular(start, keys.len(), keys.len(), |i| {
            let key = keys[i].as_str();
            if !lists.is_auxiliary(key) && model.symbols.contains(key) {
                Visit::Take
            } else {
                Visit::Skip
            }
        });
        if let Some(i) = usable {
            return model.symbols.find(&keys[i]);
        }
    }

    let children = model.forward.children(model.forward.root());
    if children.is_empty() {
        return ERROR_ID;
    }
    let i = rng.random_range(0..children.len());
    model.forward.node(children[i]).symbol
}

/// Choose the next symbol from the deepest context held by `cursor`.
///
/// Children are scanned round-robin from a random index while a random
/// threshold in `[0, usage)` is worn down by each child's count; the child
/// that exhausts it is returned. A keyword child not yet in `reply` is taken
/// immediately instead, provided it is not auxiliary or a keyword was already
/// taken on this cursor.
///
/// Returns [`ERROR_ID`] when the context has no continuations.
pub fn babble<R: Rng>(
    trie: &Trie,
    cursor: &mut Cursor,
    symbols: &SymbolTable,
    keywords: &Keywords,
    lists: &WordLists,
    reply: &[SymbolId],
    rng: &mut R,
) -> SymbolId {
    let node = cursor.deepest();
    let children = trie.children(node);
    if children.is_empty() {
        return ERROR_ID;
    }

    let usage = trie.node(node).usage;
    let start = rng.random_range(0..children.len());
    let mut threshold = if usage > 0 { rng.random_range(0..usage) } else { 0 };
    let mut used_key = cursor.used_key;

    // Counts sum to `usage`, so one cycle always exhausts the threshold; the
    // second cycle only matters for a node whose counts are all zero.
    let picked = scan::circular(start, children.len(), 2 * children.len(), |i| {
        let child = trie.node(children[i]);
        let word = symbols.word(child.symbol);
        if keywords.contains(word)
            && (used_key || !lists.is_auxiliary(word))
            && !reply.contains(&child.symbol)
        {
            used_key = true;
            return Visit::Take;
        }
        let weight = u64::from(child.count);
        if threshold < weight {
            Visit::Take
        } else {
            threshold -= weight;
            Visit::Skip
        }
    });

    cursor.used_key = used_key;
    picked.map_or(ERROR_ID, |i| trie.node(children[i]).symbol)
}

/// Generate one candidate reply, biased toward `keywords`.
pub fn generate<R: Rng>(
    model: &Model,
    keywords: &Keywords,
    lists: &WordLists,
    rng: &mut R,
) -> Vec<String> {
    let mut reply: Vec<SymbolId> = Vec::new();

    let mut cursor = model.forward_cursor();
    let mut symbol = seed(model, keywords, lists, rng);
    while !symbol.is_sentinel() {
        reply.push(symbol);
        cursor.advance(&model.forward, symbol);
        symbol = babble(
            &model.forward,
            &mut cursor,
            &model.symbols,
            keywords,
            lists,
            &reply,
            rng,
        );
    }

    // Prime with the leading words, last to first, so the cursor ends on the
    // reply's first word.
    let mut cursor = model.backward_cursor();
    if let Some(last) = reply.len().checked_sub(1) {
        let primed = last.min(model.order as usize);
        for &id in reply[..=primed].iter().rev() {
            cursor.advance(&model.backward, id);
        }
    }
    loop {
        let symbol = babble(
            &model.backward,
            &mut cursor,
            &model.symbols,
            keywords,
            lists,
            &reply,
            rng,
        );
        if symbol.is_sentinel() {
            break;
        }
        reply.insert(0, symbol);
        cursor.advance(&model.backward, symbol);
    }

    reply
        .iter()
        .map(|&id| model.symbols.word(id).to_owned())
        .collect()
}

/// Surprise of `reply`: how unpredictable its keyword occurrences were.
///
/// Every keyword occurrence is scored in both directions against the
/// contexts of lengths `0..order` preceding it, averaging `count / usage`
/// over the contexts that have seen it and adding the negative log of that
/// average. Long replies are damped: by `sqrt(n - 1)` from 8 keyword
/// occurrences, and by `n` again from 16.
pub fn evaluate<W: AsRef<str>>(model: &Model, keywords: &Keywords, reply: &[W]) -> f64 {
    let mut surprise = Surprise::default();
    if reply.is_empty() {
        return 0.0;
    }

    surprise.scan(
        model,
        &model.forward,
        model.forward_cursor(),
        keywords,
        reply.iter().map(AsRef::as_ref),
    );
    surprise.scan(
        model,
        &model.backward,
        model.backward_cursor(),
        keywords,
        reply.iter().rev().map(AsRef::as_ref),
    );
    surprise.finish()
}

#[derive(Debug, Default)]
struct Surprise {
    entropy: f64,
    occurrences: usize,
}

impl Surprise {
    fn scan<'w>(
        &mut self,
        model: &Model,
        trie: &Trie,
        mut cursor: Cursor,
        keywords: &Keywords,
        words: impl Iterator<Item = &'w str>,
    ) {
        for word in words {
            let symbol = model.symbols.find(word);
            if keywords.contains(word) {
                let mut probability = 0.0;
                let mut levels = 0usize;
                for depth in 0..model.order as usize {
                    if let Some(parent) = cursor.at_depth(depth)
                        && let Some(child) = trie.find_child(parent, symbol)
                    {
                        let usage = trie.node(parent).usage;
                        probability += f64::from(trie.node(child).count) / usage as f64;
                        levels += 1;
                    }
                }
                if levels > 0 {
                    self.entropy -= (probability / levels as f64).ln();
                }
                self.occurrences += 1;
            }
            cursor.advance(trie, symbol);
        }
    }

    fn finish(self) -> f64 {
        let n = self.occurrences;
        let mut entropy = self.entropy;
        if n >= 8 {
            entropy /= ((n - 1) as f64).sqrt();
        }
        if n >= 16 {
            entropy /= n as f64;
        }
        entropy
    }
}

/// Search for the best reply to `words` until `limit` is reached.
///
/// A reply generated without keywords is the fallback, unless it is empty or
/// just repeats `words`. Keyword-biased candidates then replace it whenever
/// they are non-empty, not the keyword list itself, and more surprising than
/// anything kept so far. `None` means nothing usable was produced.
pub fn select_reply<W: AsRef<str>, R: Rng>(
    model: &Model,
    words: &[W],
    keywords: &Keywords,
    lists: &WordLists,
    limit: &GenerationLimit,
    rng: &mut R,
) -> Option<Vec<String>> {
    let baseline = generate(model, &Keywords::new(), lists, rng);
    let echoes_input = baseline.len() == words.len()
        && baseline.iter().zip(words).all(|(b, w)| {
            let w: &str = w.as_ref();
            b == w
        });
    let mut best = (!baseline.is_empty() && !echoes_input).then_some(baseline);

    let mut max_surprise = -1.0;
    let mut iterations = 0usize;
    let start = Instant::now();
    while !limit.reached(start, iterations) {
        let candidate = generate(model, keywords, lists, rng);
        let surprise = evaluate(model, keywords, &candidate);
        if !candidate.is_empty() && surprise > max_surprise && !keywords.same_as(&candidate) {
            max_surprise = surprise;
            best = Some(candidate);
        }
        iterations += 1;
    }

    debug!(
        iterations,
        keywords = keywords.len(),
        max_surprise,
        found = best.is_some(),
        "reply search finished"
    );
    best
}

/// Join reply words into display text: first character uppercase, the rest
/// lowercase.
pub fn capitalize<W: AsRef<str>>(words: &[W]) -> String {
    let mut text = String::new();
    for word in words {
        text.push_str(word.as_ref());
    }
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hal_symbols::END_ID;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn rng(seed: u64) -> SmallRng {
        SmallRng::seed_from_u64(seed)
    }

    fn trained(order: u8, phrases: &[&[&str]]) -> Model {
        let mut model = Model::new(order);
        for &phrase in phrases {
            model.train_phrase(phrase);
        }
        model
    }

    fn pets() -> Model {
        trained(
            2,
            &[&["I", "LIKE", "CATS", "."], &["I", "LIKE", "DOGS", "."]],
        )
    }

    fn keys(words: &[&str]) -> Keywords {
        words.iter().collect()
    }

    fn no_lists() -> WordLists {
        WordLists::empty()
    }

    // --- seed ---

    #[test]
    fn seed_prefers_keyword() {
        let model = pets();
        let id = seed(&model, &keys(&["DOGS"]), &no_lists(), &mut rng(1));
        assert_eq!(id, model.symbols.find("DOGS"));
    }

    #[test]
    fn seed_skips_auxiliary_and_unknown_keywords() {
        let model = pets();
        let mut lists = no_lists();
        lists.auxiliary.insert("I".into());
        for s in 0..20 {
            let id = seed(&model, &keys(&["I", "FISH", "CATS"]), &lists, &mut rng(s));
            assert_eq!(id, model.symbols.find("CATS"));
        }
    }

    #[test]
    fn seed_falls_back_to_root_children() {
        let model = pets();
        let mut lists = no_lists();
        lists.auxiliary.insert("I".into());
        for s in 0..20 {
            let id = seed(&model, &keys(&["I"]), &lists, &mut rng(s));
            let root = model.forward.root();
            assert!(model.forward.find_child(root, id).is_some());
        }
    }

    #[test]
    fn seed_on_empty_model_is_error() {
        let model = Model::new(2);
        assert_eq!(seed(&model, &Keywords::new(), &no_lists(), &mut rng(3)), ERROR_ID);
    }

    // --- babble ---

    #[test]
    fn babble_after_like_only_continues_with_seen_words() {
        let model = pets();
        let cats = model.symbols.find("CATS");
        let dogs = model.symbols.find("DOGS");
        let like = model.symbols.find("LIKE");

        for s in 0..50 {
            let mut cursor = model.forward_cursor();
            cursor.advance(&model.forward, like);
            let next = babble(
                &model.forward,
                &mut cursor,
                &model.symbols,
                &Keywords::new(),
                &no_lists(),
                &[like],
                &mut rng(s),
            );
            assert!(next == cats || next == dogs, "unexpected {next:?}");
        }
    }

    #[test]
    fn babble_on_leaf_context_is_error() {
        let model = Model::new(2);
        let mut cursor = model.forward_cursor();
        let next = babble(
            &model.forward,
            &mut cursor,
            &model.symbols,
            &Keywords::new(),
            &no_lists(),
            &[],
            &mut rng(0),
        );
        assert_eq!(next, ERROR_ID);
    }

    #[test]
    fn babble_ends_a_finished_phrase() {
        let model = pets();
        let mut cursor = model.forward_cursor();
        for w in ["LIKE", "CATS", "."] {
            cursor.advance(&model.forward, model.symbols.find(w));
        }
        let next = babble(
            &model.forward,
            &mut cursor,
            &model.symbols,
            &Keywords::new(),
            &no_lists(),
            &[],
            &mut rng(9),
        );
        assert_eq!(next, END_ID);
    }

    fn cats_after_like(model: &Model, keywords: &Keywords, reply: &[SymbolId]) -> usize {
        let like = model.symbols.find("LIKE");
        let cats = model.symbols.find("CATS");
        let mut rng = rng(11);
        (0..200)
            .filter(|_| {
                let mut cursor = model.forward_cursor();
                cursor.advance(&model.forward, like);
                let next = babble(
                    &model.forward,
                    &mut cursor,
                    &model.symbols,
                    keywords,
                    &WordLists::empty(),
                    reply,
                    &mut rng,
                );
                next == cats
            })
            .count()
    }

    fn rare_cats() -> Model {
        let mut phrases: Vec<&[&str]> = vec![&["I", "LIKE", "CATS", "."][..]];
        phrases.extend(std::iter::repeat_n(&["I", "LIKE", "DOGS", "."][..], 9));
        trained(2, &phrases)
    }

    #[test]
    fn babble_follows_counts_without_keywords() {
        let model = rare_cats();
        let like = model.symbols.find("LIKE");
        // P(CATS) = 0.1
        assert!(cats_after_like(&model, &Keywords::new(), &[like]) < 60);
    }

    #[test]
    fn babble_favours_unused_keyword() {
        let model = rare_cats();
        let like = model.symbols.find("LIKE");
        // P(CATS) = 0.55: every scan starting on CATS, plus threshold 9.
        assert!(cats_after_like(&model, &keys(&["CATS"]), &[like]) > 60);
    }

    #[test]
    fn babble_ignores_keyword_already_in_reply() {
        let model = rare_cats();
        let like = model.symbols.find("LIKE");
        let cats = model.symbols.find("CATS");
        assert!(cats_after_like(&model, &keys(&["CATS"]), &[cats, like]) < 60);
    }

    #[test]
    fn babble_marks_keyword_use() {
        let model = trained(1, &[&["A", "B"], &["A", "B"]]);
        let mut cursor = model.forward_cursor();
        cursor.advance(&model.forward, model.symbols.find("A"));
        let next = babble(
            &model.forward,
            &mut cursor,
            &model.symbols,
            &keys(&["B"]),
            &no_lists(),
            &[],
            &mut rng(5),
        );
        assert_eq!(next, model.symbols.find("B"));
        assert!(cursor.used_key);
    }

    #[test]
    fn babble_always_lands_on_a_child_of_a_used_context() {
        let mut counts = rng(5);
        let words: Vec<String> = (0..9).map(|i| format!("W{i}")).collect();
        let mut model = Model::new(1);
        let mut fewest = (usize::MAX, ERROR_ID);
        for word in &words {
            let times = counts.random_range(1..15);
            for _ in 0..times {
                let phrase = [word.as_str(), "GO", "."];
                model.train_phrase(&phrase[..]);
            }
            if times < fewest.0 {
                fewest = (times, model.symbols.find(word));
            }
        }

        let root = model.forward.root();
        let go = model.symbols.find("GO");
        let (mut go_hits, mut rare_hits) = (0, 0);
        for s in 0..400 {
            let mut cursor = model.forward_cursor();
            let next = babble(
                &model.forward,
                &mut cursor,
                &model.symbols,
                &Keywords::new(),
                &no_lists(),
                &[],
                &mut rng(s),
            );
            assert_ne!(next, ERROR_ID, "seed {s} fell off the wheel");
            assert!(model.forward.find_child(root, next).is_some());
            go_hits += usize::from(next == go);
            rare_hits += usize::from(next == fewest.1);
        }
        // GO follows every phrase, so it carries a quarter of the root's usage.
        assert!(go_hits > rare_hits, "GO {go_hits}, rarest {rare_hits}");
    }

    /// Root with two children whose counts are all zero, as a damaged
    /// brain file could hold.
    fn zero_usage() -> (Trie, SymbolTable) {
        let trie: Trie = serde_json::from_str(
            r#"{"nodes":[{"symbol":0,"usage":0,"count":0,"children":[1,2]},
                         {"symbol":2,"usage":0,"count":0,"children":[]},
                         {"symbol":3,"usage":0,"count":0,"children":[]}]}"#,
        )
        .unwrap();
        let mut symbols = SymbolTable::new();
        symbols.add("A");
        symbols.add("B");
        (trie, symbols)
    }

    #[test]
    fn babble_gives_up_on_zero_usage_context() {
        let (trie, symbols) = zero_usage();
        for s in 0..20 {
            let mut cursor = Cursor::new(trie.root(), 2);
            let next = babble(
                &trie,
                &mut cursor,
                &symbols,
                &Keywords::new(),
                &no_lists(),
                &[],
                &mut rng(s),
            );
            assert_eq!(next, ERROR_ID);
            assert!(!cursor.used_key);
        }
    }

    #[test]
    fn babble_still_takes_keyword_at_zero_usage_context() {
        let (trie, symbols) = zero_usage();
        let b = symbols.find("B");
        for s in 0..20 {
            let mut cursor = Cursor::new(trie.root(), 2);
            let next = babble(
                &trie,
                &mut cursor,
                &symbols,
                &keys(&["B"]),
                &no_lists(),
                &[],
                &mut rng(s),
            );
            assert_eq!(next, b);
            assert!(cursor.used_key);
        }
    }

    // --- generate ---

    #[test]
    fn generated_reply_from_like_is_a_training_phrase() {
        let model = pets();
        for s in 0..30 {
            let reply = generate(&model, &keys(&["LIKE"]), &no_lists(), &mut rng(s));
            assert_eq!(reply.len(), 4, "{reply:?}");
            assert_eq!(reply[0], "I");
            assert_eq!(reply[1], "LIKE");
            assert!(reply[2] == "CATS" || reply[2] == "DOGS");
            assert_eq!(reply[3], ".");
        }
    }

    #[test]
    fn generated_pairs_were_all_trained() {
        let model = trained(
            2,
            &[
                &["THE", " ", "CAT", " ", "SAT", "."],
                &["THE", " ", "DOG", " ", "RAN", "."],
                &["A", " ", "BIG", " ", "CAT", " ", "RAN", "."],
            ],
        );
        for s in 0..40 {
            let reply = generate(&model, &keys(&["CAT"]), &no_lists(), &mut rng(s));
            assert!(!reply.is_empty());
            for pair in reply.windows(2) {
                let first = model.forward.find_child(model.forward.root(), model.symbols.find(&pair[0]));
                let second = first.and_then(|n| model.forward.find_child(n, model.symbols.find(&pair[1])));
                assert!(second.is_some(), "untrained pair {pair:?} in {reply:?}");
            }
        }
    }

    #[test]
    fn generate_on_empty_model_is_empty() {
        let model = Model::new(3);
        assert!(generate(&model, &keys(&["X"]), &no_lists(), &mut rng(0)).is_empty());
    }

    #[test]
    fn generate_leaves_model_untouched() {
        let model = pets();
        let before = (model.forward.len(), model.backward.len(), model.symbols.len());
        let root_usage = model.forward.node(model.forward.root()).usage;
        for s in 0..10 {
            generate(&model, &keys(&["CATS"]), &no_lists(), &mut rng(s));
        }
        assert_eq!(before, (model.forward.len(), model.backward.len(), model.symbols.len()));
        assert_eq!(root_usage, model.forward.node(model.forward.root()).usage);
    }

    // --- evaluate ---

    #[test]
    fn evaluate_empty_reply_is_zero() {
        let model = pets();
        let empty: [&str; 0] = [];
        assert_eq!(evaluate(&model, &keys(&["CATS"]), &empty), 0.0);
    }

    #[test]
    fn evaluate_without_keywords_is_zero() {
        let model = pets();
        assert_eq!(evaluate(&model, &Keywords::new(), &["I", "LIKE", "CATS", "."]), 0.0);
    }

    #[test]
    fn evaluate_exact_order_one() {
        // Root continuations in both tries: A, B, <FIN>, each once.
        let model = trained(1, &[&["A", "B"]]);
        let score = evaluate(&model, &keys(&["B"]), &["A", "B"]);
        assert!((score - 2.0 * 3f64.ln()).abs() < 1e-12, "{score}");
    }

    #[test]
    fn evaluate_rarer_keyword_scores_higher() {
        let model = rare_cats();
        let cats = evaluate(&model, &keys(&["CATS"]), &["I", "LIKE", "CATS", "."]);
        let dogs = evaluate(&model, &keys(&["DOGS"]), &["I", "LIKE", "DOGS", "."]);
        assert!(cats > dogs, "{cats} <= {dogs}");
        assert!(dogs > 0.0);
    }

    #[test]
    fn evaluate_damps_long_replies() {
        let model = trained(1, &[&["A", "B"]]);
        // Order 1 scores only against the root: every B is worth ln 3, and
        // 8 occurrences (4 per direction) trigger the sqrt(7) damping.
        let long = evaluate(&model, &keys(&["B"]), &["A", "B", "B", "B", "B"]);
        let expected = 8.0 * 3f64.ln() / 7f64.sqrt();
        assert!((long - expected).abs() < 1e-9, "{long}");
    }

    #[test]
    fn evaluate_is_read_only() {
        let model = pets();
        let before = (model.forward.len(), model.backward.len());
        let usage = model.backward.node(model.backward.root()).usage;
        evaluate(&model, &keys(&["CATS", "DOGS"]), &["I", "LIKE", "CATS", "DOGS", "."]);
        assert_eq!(before, (model.forward.len(), model.backward.len()));
        assert_eq!(usage, model.backward.node(model.backward.root()).usage);
    }

    // --- select_reply ---

    #[test]
    fn select_on_empty_model_is_none() {
        let model = Model::new(2);
        let reply = select_reply(
            &model,
            &["HI", "."],
            &Keywords::new(),
            &no_lists(),
            &GenerationLimit::Iterations(10),
            &mut rng(0),
        );
        assert_eq!(reply, None);
    }

    #[test]
    fn select_is_deterministic() {
        let model = trained(
            2,
            &[
                &["THE", " ", "CAT", " ", "SAT", "."],
                &["THE", " ", "DOG", " ", "RAN", "."],
                &["MY", " ", "CAT", " ", "RAN", " ", "AWAY", "."],
            ],
        );
        let run = || {
            select_reply(
                &model,
                &["CAT", "."],
                &keys(&["CAT"]),
                &no_lists(),
                &GenerationLimit::Iterations(25),
                &mut rng(42),
            )
        };
        let first = run();
        assert!(first.is_some());
        assert_eq!(first, run());
    }

    #[test]
    fn select_discards_candidates_equal_to_keywords() {
        // Seeded from either keyword, every biased candidate is "CAT ." which
        // is the keyword list itself, so only the baseline can survive.
        let model = trained(1, &[&["CAT", "."], &["CAT", "."]]);
        for s in 0..20 {
            let baseline = generate(&model, &Keywords::new(), &no_lists(), &mut rng(s));
            let reply = select_reply(
                &model,
                &["X"],
                &keys(&["CAT", "."]),
                &no_lists(),
                &GenerationLimit::Iterations(10),
                &mut rng(s),
            );
            assert_eq!(reply, (!baseline.is_empty()).then_some(baseline));
        }
    }

    #[test]
    fn select_rejects_baseline_echo() {
        let model = trained(1, &[&["CAT", "."]]);
        let echo = vec!["CAT".to_string(), ".".to_string()];
        for s in 0..20 {
            let reply = select_reply(
                &model,
                &echo,
                &Keywords::new(),
                &no_lists(),
                &GenerationLimit::Iterations(0),
                &mut rng(s),
            );
            assert_ne!(reply.as_ref(), Some(&echo));
        }
    }

    #[test]
    fn select_with_timeout_finishes() {
        let model = pets();
        let reply = select_reply(
            &model,
            &["CATS"],
            &keys(&["CATS"]),
            &no_lists(),
            &GenerationLimit::Timeout(Duration::from_millis(30)),
            &mut rng(8),
        );
        assert!(reply.is_some());
    }

    #[test]
    fn limits() {
        let start = Instant::now();
        assert!(GenerationLimit::Iterations(3).reached(start, 3));
        assert!(!GenerationLimit::Iterations(3).reached(start, 2));
        assert!(GenerationLimit::Timeout(Duration::ZERO).reached(start, 0));
        let both = GenerationLimit::Both {
            timeout: Duration::from_secs(60),
            max_iterations: 2,
        };
        assert!(!both.reached(start, 1));
        assert!(both.reached(start, 2));
        assert_eq!(
            GenerationLimit::default(),
            GenerationLimit::Timeout(DEFAULT_TIMEOUT)
        );
    }

    // --- capitalize ---

    #[test]
    fn capitalize_sentence() {
        assert_eq!(capitalize(&["I", " ", "LIKE", " ", "CATS", "."]), "I like cats.");
        assert_eq!(capitalize(&["HELLO", ", ", "WORLD", "!"]), "Hello, world!");
    }

    #[test]
    fn capitalize_leading_punctuation() {
        assert_eq!(capitalize(&["\"", "OK", "."]), "\"ok.");
    }

    #[test]
    fn capitalize_empty() {
        let empty: [&str; 0] = [];
        assert_eq!(capitalize(&empty), "");
    }
}
