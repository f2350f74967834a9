use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TOKEN_RE: Regex = Regex::new(r"[a-z0-9]+").expect("valid regex");
}

/// Tokenize raw document text into normalized words.
///
/// The input is lowercased and split on every non-alphanumeric character, so
/// punctuation and repeated whitespace simply separate tokens. The source
/// text is never modified; this is a pure read-only transform. Tokenization
/// is ASCII-oriented by design, with plain case folding as the only Unicode
/// handling.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_strips_punctuation() {
        let tokens = tokenize("The CAT, sat!  On the mat.");
        assert_eq!(tokens, vec!["the", "cat", "sat", "on", "the", "mat"]);
    }

    #[test]
    fn digits_survive() {
        assert_eq!(tokenize("room 101: open"), vec!["room", "101", "open"]);
    }

    #[test]
    fn punctuation_only_input_yields_nothing() {
        assert!(tokenize("--- !!! ...").is_empty());
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn whitespace_runs_collapse() {
        assert_eq!(tokenize("a \t\n  b"), vec!["a", "b"]);
    }
}
