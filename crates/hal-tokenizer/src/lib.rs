//! Text to word-sequence normalization.
//!
//! A phrase is uppercased and cut wherever letters meet non-letters or digits
//! meet non-digits. The pieces in between (spaces, punctuation runs) are kept
//! as words too, so joining a word sequence back together reproduces its
//! spacing. Apostrophes inside a word ("DON'T", "I'M") do not split it.
//!
//! Every non-empty result ends with sentence-terminal punctuation.

/// Split `phrase` into uppercase words.
///
/// ```
/// use hal_tokenizer::tokenize;
///
/// assert_eq!(
///     tokenize("Don't you think so?"),
///     vec!["DON'T", " ", "YOU", " ", "THINK", " ", "SO", "?"],
/// );
/// assert!(tokenize("").is_empty());
/// ```
pub fn tokenize(phrase: &str) -> Vec<String> {
    let chars: Vec<char> = phrase.to_uppercase().chars().collect();
    let mut words = Vec::new();
    let mut start = 0;

    for pos in 1..=chars.len() {
        if is_boundary(&chars, pos) {
            words.push(chars[start..pos].iter().collect::<String>());
            start = pos;
        }
    }

    terminate(&mut words);
    words
}

fn is_boundary(s: &[char], pos: usize) -> bool {
    if pos == 0 {
        return false;
    }
    if pos == s.len() {
        return true;
    }

    let cur = s[pos];
    let prev = s[pos - 1];

    if cur == '\''
        && prev.is_alphabetic()
        && s.get(pos + 1).is_some_and(|c| c.is_alphabetic())
    {
        return false;
    }
    if pos > 1 && prev == '\'' && s[pos - 2].is_alphabetic() && cur.is_alphabetic() {
        return false;
    }
    if cur.is_alphabetic() != prev.is_alphabetic() {
        return true;
    }
    cur.is_numeric() != prev.is_numeric()
}

// A trailing word gets a "." after it; trailing punctuation that does not end
// a sentence is replaced by ".".
fn terminate(words: &mut Vec<String>) {
    let Some(last) = words.last_mut() else {
        return;
    };
    if last.chars().next().is_some_and(char::is_alphanumeric) {
        words.push(".".to_owned());
    } else if !last.ends_with(['!', '.', '?']) {
        *last = ".".to_owned();
    }
}
