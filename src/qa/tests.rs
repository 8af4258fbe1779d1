//! Question Answering Tests
//!
//! ## Test Scopes
//! - **Engine**: Normalization, first-match ordering, misses, idempotency.
//! - **Handler**: Direct calls to `handle_ask` with an injected store.

#[cfg(test)]
mod tests {
    use crate::qa::engine::{answer, normalize, NOT_FOUND_ANSWER};
    use crate::qa::handlers::handle_ask;
    use crate::qa::types::AskRequest;
    use crate::store::records::RecordStore;
    use crate::store::types::Record;
    use axum::{Extension, Json};
    use std::sync::Arc;

    fn sample_store() -> RecordStore {
        RecordStore::parse(
            "What is Artificial Intelligence?: AI is the simulation of human intelligence by machines.\n\
             What is Rust?: A systems programming language.\n\
             What time is it?: It is 10:30, roughly.\n",
        )
        .unwrap()
    }

    // ============================================================
    // ENGINE TESTS - normalize
    // ============================================================

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(normalize("  What IS Rust?\n"), "what is rust?");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_normalize_keeps_inner_whitespace() {
        assert_eq!(normalize("what  is\trust"), "what  is\trust");
    }

    // ============================================================
    // ENGINE TESTS - answer
    // ============================================================

    #[test]
    fn test_answer_exact_question() {
        let store = sample_store();

        assert_eq!(
            answer(&store, "What is Rust?"),
            "A systems programming language."
        );
    }

    #[test]
    fn test_answer_is_case_and_whitespace_insensitive() {
        let store = sample_store();
        let expected = "AI is the simulation of human intelligence by machines.";

        assert_eq!(answer(&store, "What is Artificial Intelligence?"), expected);
        assert_eq!(answer(&store, "  what is artificial intelligence?  "), expected);
        assert_eq!(answer(&store, "WHAT IS ARTIFICIAL INTELLIGENCE?"), expected);
    }

    #[test]
    fn test_answer_keeps_colons_in_answer() {
        let store = sample_store();
        assert_eq!(answer(&store, "what time is it?"), "It is 10:30, roughly.");
    }

    #[test]
    fn test_answer_miss_returns_sentinel() {
        let store = sample_store();

        assert_eq!(
            answer(&store, "what is the capital of mars?"),
            "Sorry, answer not found in database."
        );
        // Partial and near matches do not count
        assert_eq!(answer(&store, "What is Rust"), NOT_FOUND_ANSWER);
        assert_eq!(answer(&store, "Rust"), NOT_FOUND_ANSWER);
    }

    #[test]
    fn test_answer_empty_query() {
        let store = sample_store();

        assert_eq!(answer(&store, ""), NOT_FOUND_ANSWER);
        assert_eq!(answer(&store, " \t\n"), NOT_FOUND_ANSWER);
    }

    #[test]
    fn test_answer_empty_store() {
        let store = RecordStore::default();
        assert_eq!(answer(&store, "What is Rust?"), NOT_FOUND_ANSWER);
    }

    #[test]
    fn test_answer_first_duplicate_wins() {
        let store = RecordStore::parse("Color?: red\n  COLOR?  : blue\ncolor?: green\n").unwrap();

        assert_eq!(answer(&store, "color?"), "red");
    }

    #[test]
    fn test_answer_empty_stored_question_matches_empty_query() {
        let store = RecordStore::parse(": nameless\n").unwrap();

        assert_eq!(answer(&store, "   "), "nameless");
        assert_eq!(answer(&store, "something"), NOT_FOUND_ANSWER);
    }

    #[test]
    fn test_answer_is_idempotent() {
        let store = sample_store();

        let first = answer(&store, "what is rust?").to_string();
        for _ in 0..10 {
            assert_eq!(answer(&store, "what is rust?"), first);
            assert_eq!(answer(&store, "unknown"), NOT_FOUND_ANSWER);
        }
    }

    #[test]
    fn test_answer_with_injected_records() {
        let store = RecordStore::from_records(vec![Record {
            question: " Ünïcode Question ".to_string(),
            answer: "yes".to_string(),
        }]);

        assert_eq!(answer(&store, "ünïcode question"), "yes");
    }

    // ============================================================
    // HANDLER TESTS
    // ============================================================

    #[tokio::test]
    async fn test_handle_ask_match() {
        let store = Arc::new(sample_store());

        let Json(resp) = handle_ask(
            Extension(store),
            Ok(Json(AskRequest {
                question: "what is rust?".to_string(),
            })),
        )
        .await
        .unwrap();

        assert_eq!(resp.question, "what is rust?");
        assert_eq!(resp.answer, "A systems programming language.");
    }

    #[tokio::test]
    async fn test_handle_ask_miss() {
        let store = Arc::new(sample_store());

        let Json(resp) = handle_ask(
            Extension(store),
            Ok(Json(AskRequest {
                question: "what is the capital of mars?".to_string(),
            })),
        )
        .await
        .unwrap();

        assert_eq!(resp.answer, NOT_FOUND_ANSWER);
    }
}
