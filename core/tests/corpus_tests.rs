use docsearch_core::tokenizer::tokenize;
use docsearch_core::{bigram, score, Corpus, QueryError};

fn corpus(docs: &[(&str, &str)]) -> Corpus {
    let mut c = Corpus::new();
    for (name, text) in docs {
        c.add_document(*name, tokenize(text));
    }
    c
}

#[test]
fn index_is_complete_for_every_token() {
    let texts = [
        ("a.txt", "the cat sat on the mat with the cat"),
        ("b.txt", "a dog and a cat and a bird"),
    ];
    let c = corpus(&texts);
    for (name, text) in &texts {
        let tokens = tokenize(text);
        for token in &tokens {
            let expected = tokens.iter().filter(|t| *t == token).count();
            assert_eq!(
                c.inverted().occurrences(token, name),
                expected,
                "count mismatch for {token} in {name}"
            );
        }
    }
}

#[test]
fn positions_are_strictly_increasing() {
    let c = corpus(&[("a.txt", "a b a b a")]);
    let positions = c.inverted().positions("a", "a.txt").unwrap();
    assert_eq!(positions, &vec![0, 2, 4]);
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn search_scenario_two_docs() {
    let c = corpus(&[("doc1.txt", "the cat sat"), ("doc2.txt", "the dog sat")]);
    assert_eq!(score::best_document(&c, "cat"), Ok("doc1.txt"));
}

#[test]
fn bigram_scenario_two_docs() {
    let c = corpus(&[("doc1.txt", "a b a c"), ("doc2.txt", "b a b a")]);
    assert_eq!(bigram::predict(&c, "a"), Ok("b".to_string()));
}

#[test]
fn absent_word_fails_without_poisoning_later_queries() {
    let c = corpus(&[("doc1.txt", "the cat sat"), ("doc2.txt", "the dog sat")]);
    assert_eq!(
        score::best_document(&c, "zebra"),
        Err(QueryError::WordNotFound("zebra".to_string()))
    );
    // the corpus is untouched; the next query still works
    assert_eq!(score::best_document(&c, "dog"), Ok("doc2.txt"));
}

#[test]
fn empty_corpus_fails_both_query_kinds() {
    let c = Corpus::new();
    assert_eq!(score::best_document(&c, "cat"), Err(QueryError::EmptyCorpus));
    assert_eq!(bigram::predict(&c, "cat"), Err(QueryError::EmptyCorpus));
}

#[test]
fn bigram_is_deterministic_with_lexicographic_tie_break() {
    // successors of "to": "be"(2), "a"(2) -> tie resolves to "a"
    let c = corpus(&[("d.txt", "to be or not to be to a road to a house")]);
    for _ in 0..10 {
        assert_eq!(bigram::predict(&c, "to"), Ok("a".to_string()));
    }
}

#[test]
fn word_frequency_in_longer_document_weighs_less() {
    // "cat" once in a 2-token doc beats once in a 10-token doc
    let c = corpus(&[
        ("long.txt", "cat a b c d e f g h i"),
        ("short.txt", "cat nap"),
    ]);
    assert_eq!(score::best_document(&c, "cat"), Ok("short.txt"));
}
