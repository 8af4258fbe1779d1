use crate::store::records::RecordStore;

/// Answer returned when no stored question matches.
pub const NOT_FOUND_ANSWER: &str = "Sorry, answer not found in database.";

/// Case-folds and trims a question for comparison.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Looks up `query` in `store`, scanning records in file order.
///
/// Returns the answer of the first record whose normalized question equals the
/// normalized query, or [`NOT_FOUND_ANSWER`].
pub fn answer<'a>(store: &'a RecordStore, query: &str) -> &'a str {
    let query = normalize(query);

    store
        .records()
        .iter()
        .find(|record| normalize(&record.question) == query)
        .map(|record| record.answer.as_str())
        .unwrap_or(NOT_FOUND_ANSWER)
}
