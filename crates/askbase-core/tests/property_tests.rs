//! # Property-Based Tests
//!
//! Invariants of the format validator, parser and field validator, checked
//! with proptest.

use askbase_core::{
    FormatError, KnowledgeEntry, QuestionError, TextualKnowledgeBase, TextualValidator, parse,
    validate_format,
};
use proptest::collection::vec;
use proptest::prelude::*;

/// Question body: no question mark, no quote, not blank.
fn question_body() -> impl Strategy<Value = String> {
    "[A-Za-z0-9][A-Za-z0-9 ,.'!-]{0,100}"
}

/// Answer: no quote, not blank, may contain question marks and line breaks.
fn answer() -> impl Strategy<Value = String> {
    "[A-Za-z0-9?][A-Za-z0-9 ?,.!\n-]{0,100}"
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// Lines without a question mark always miss the separator.
    #[test]
    fn no_separator_always_rejected(line in "[^?]{0,200}") {
        prop_assert_eq!(validate_format(&line), Err(FormatError::MissingSeparator));
    }

    /// Quote parity on the answer side decides the outcome.
    #[test]
    fn quote_parity_decides_format(
        head in "[^?]{0,50}",
        tail in "[a-z \"?]{0,80}"
    ) {
        let line = format!("{head}?{tail}");
        let quotes = tail.chars().filter(|&c| c == '"').count();

        if quotes % 2 == 0 {
            prop_assert!(validate_format(&line).is_ok());
        } else {
            prop_assert_eq!(validate_format(&line), Err(FormatError::UnbalancedQuotation));
        }
    }

    /// Serializing then parsing yields the original question and answers.
    #[test]
    fn serialize_then_parse_round_trips(
        body in question_body(),
        answers in vec(answer(), 1..8)
    ) {
        let entry = KnowledgeEntry::new(format!("{body}?"), answers);
        let parsed = parse(&entry.to_serialized()).expect("parse");
        prop_assert_eq!(parsed, entry);
    }

    /// Every round-tripped entry is accepted and retrievable in order.
    #[test]
    fn added_entries_are_retrievable(
        body in question_body(),
        answers in vec(answer(), 1..8)
    ) {
        let entry = KnowledgeEntry::new(format!("{body}?"), answers);
        let mut kb = TextualKnowledgeBase::new();

        kb.add_serialized(&entry.to_serialized()).expect("add");
        prop_assert_eq!(kb.ask(&entry.question).expect("ask"), entry.answers);
    }

    /// Questions within the limit pass, longer ones fail with TooLong.
    #[test]
    fn question_length_limit(len in 2usize..400) {
        let question = format!("{}?", "q".repeat(len - 1));
        let result = TextualValidator::new().check_question(&question);

        if len <= 255 {
            prop_assert!(result.is_ok());
        } else {
            let is_too_long = matches!(result, Err(QuestionError::TooLong { .. }));
            prop_assert!(is_too_long);
        }
    }

    /// Parsing never invents answers: each answer appears verbatim in the line.
    #[test]
    fn answers_are_substrings_of_the_line(line in "[a-z]{1,10}\\?[a-z \"\n]{0,60}") {
        if let Ok(entry) = parse(&line) {
            for answer in &entry.answers {
                prop_assert!(line.contains(answer.as_str()));
            }
        }
    }
}
