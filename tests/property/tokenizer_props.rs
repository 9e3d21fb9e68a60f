//! Tokenizer shape properties.
//!
//! - Tokens are non-empty, lowercase, alphanumeric and never stopwords
//! - Re-tokenizing the joined tokens is a no-op
//! - Tokenizing never produces more tokens than whitespace pieces

use dsamatch::{StopWords, Tokenizer};
use proptest::prelude::*;

fn text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z0-9 ,.!?'()-]{0,60}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_tokens_are_clean(input in text()) {
        let stopwords = StopWords::default();
        let tokens = Tokenizer::new(&stopwords).tokenize(&input);
        for t in &tokens {
            prop_assert!(!t.is_empty());
            prop_assert!(t.chars().all(|c| c.is_alphanumeric() && !c.is_uppercase()));
            prop_assert!(!stopwords.contains(t));
        }
    }

    #[test]
    fn prop_tokenize_is_idempotent(input in text()) {
        let stopwords = StopWords::default();
        let tokenizer = Tokenizer::new(&stopwords);
        let tokens = tokenizer.tokenize(&input);
        prop_assert_eq!(tokenizer.tokenize(&tokens.join(" ")), tokens);
    }

    #[test]
    fn prop_at_most_one_token_per_piece(input in text()) {
        let stopwords = StopWords::none();
        let tokens = Tokenizer::new(&stopwords).tokenize(&input);
        prop_assert!(tokens.len() <= input.split_whitespace().count());
    }
}
