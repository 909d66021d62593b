//! Property-based tests for glean-core using proptest.

use proptest::prelude::*;
use glean_core::{HighlightAnnotator, Marker, QueryMode, Record, RecordFilter};

// ============================================================================
// Test helpers
// ============================================================================

// Short ASCII values over a tiny alphabet so queries hit often. No `<` or `>`,
// so generated text never contains marker tokens.
fn text_strategy() -> impl Strategy<Value = String> {
    "[a-cA-C ]{0,12}"
}

fn query_strategy() -> impl Strategy<Value = String> {
    "[a-cA-C]{1,3}"
}

// Text that may already carry marker tokens, paired or not.
fn marked_text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            3 => "[a-cA-C ]{0,4}",
            1 => Just("<mark>".to_string()),
            1 => Just("</mark>".to_string()),
        ],
        0..8,
    )
    .prop_map(|pieces| pieces.concat())
}

// Literal queries plus patterns whose meaning depends on the whole value.
fn highlight_query_strategy() -> impl Strategy<Value = (String, QueryMode)> {
    prop_oneof![
        "[a-c]{1,2}".prop_map(|q| (q, QueryMode::Literal)),
        prop_oneof![Just("^a"), Just("b$"), Just("^c+"), Just("a|b")]
            .prop_map(|q| (q.to_string(), QueryMode::Pattern)),
    ]
}

fn strip_markers(text: &str) -> String {
    text.replace("<mark>", "").replace("</mark>", "")
}

fn record_strategy() -> impl Strategy<Value = Record> {
    prop::collection::vec(("[a-z]{1,6}", text_strategy()), 0..4)
        .prop_map(|fields| fields.into_iter().collect())
}

fn dataset_strategy() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(record_strategy(), 0..30)
}

/// Reference predicate: ASCII-only input, so lowercasing is exact.
fn oracle_matches(record: &Record, query: &str) -> bool {
    let needle = query.to_lowercase();
    record.iter().any(|(_, value)| value.to_lowercase().contains(&needle))
}

fn occurrences(text: &str, query: &str) -> usize {
    text.to_lowercase().matches(&query.to_lowercase()).count()
}

fn index_of(items: &[Record], item: &Record) -> Option<usize> {
    items.iter().position(|x| std::ptr::eq(x, item))
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Results keep dataset order and never repeat a record.
    #[test]
    fn filter_preserves_order(
        records in dataset_strategy(),
        query in query_strategy(),
    ) {
        let result = RecordFilter::new(query).build().filter(&records);

        let positions: Vec<usize> = result
            .iter()
            .filter_map(|r| index_of(&records, r))
            .collect();

        prop_assert_eq!(positions.len(), result.len());
        for pair in positions.windows(2) {
            prop_assert!(pair[0] < pair[1], "results reordered or duplicated");
        }
    }

    /// A record is returned iff one of its fields contains the query.
    #[test]
    fn filter_is_sound_and_complete(
        records in dataset_strategy(),
        query in query_strategy(),
    ) {
        let result = RecordFilter::new(query.clone()).build().filter(&records);

        for (i, record) in records.iter().enumerate() {
            let included = result.iter().any(|r| std::ptr::eq(*r, record));
            prop_assert_eq!(
                included,
                oracle_matches(record, &query),
                "record {} misclassified",
                i
            );
        }
    }

    /// The empty query is the identity filter.
    #[test]
    fn empty_query_returns_everything(records in dataset_strategy()) {
        let result = RecordFilter::new("").build().filter(&records);
        prop_assert_eq!(result.len(), records.len());
        for (r, original) in result.iter().zip(records.iter()) {
            prop_assert!(std::ptr::eq(*r, original));
        }
    }

    /// Annotating never changes the records it reads.
    #[test]
    fn annotate_does_not_mutate(
        records in dataset_strategy(),
        query in query_strategy(),
    ) {
        let before = records.clone();
        let matches = RecordFilter::new(query.clone()).build().filter(&records);
        let annotated = HighlightAnnotator::new(query).build().annotate(&matches);

        prop_assert_eq!(annotated.len(), matches.len());
        prop_assert_eq!(&records, &before);
    }

    /// Marker count equals occurrence count, and a second pass adds nothing.
    #[test]
    fn marking_is_idempotent(
        text in text_strategy(),
        query in query_strategy(),
    ) {
        let annotator = HighlightAnnotator::new(query.clone()).build();
        let once = annotator.highlight(&text);
        let twice = annotator.highlight(&once);

        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(Marker::default().count_in(&twice), occurrences(&text, &query));
    }

    /// Removing the markers gives back the original text.
    #[test]
    fn markers_only_add_delimiters(
        text in text_strategy(),
        query in query_strategy(),
    ) {
        let marked = HighlightAnnotator::new(query).build().highlight(&text);
        let stripped = marked.replace("<mark>", "").replace("</mark>", "");
        prop_assert_eq!(stripped, text);
    }

    /// Arbitrary pattern input never escapes the filter pass.
    #[test]
    fn pattern_mode_never_fails_the_pass(
        records in dataset_strategy(),
        query in ".{0,8}",
    ) {
        let filter = RecordFilter::new(query.clone()).mode(QueryMode::Pattern).build();
        let result = filter.filter(&records);

        if result.diagnostic().is_some() {
            prop_assert!(result.is_empty());
        }

        let annotated = HighlightAnnotator::new(query)
            .mode(QueryMode::Pattern)
            .build()
            .annotate(&result);
        prop_assert_eq!(annotated.len(), result.len());
    }

    /// Literal mode matches special characters as themselves.
    #[test]
    fn literal_mode_accepts_any_input(
        records in dataset_strategy(),
        query in ".{0,8}",
    ) {
        let result = RecordFilter::new(query).mode(QueryMode::Literal).build().filter(&records);
        prop_assert!(result.diagnostic().is_none());
    }

    /// count(), any(), find() agree with filter().
    #[test]
    fn helpers_consistent_with_filter(
        records in dataset_strategy(),
        query in query_strategy(),
    ) {
        let filter = RecordFilter::new(query).build();
        let result = filter.filter(&records);

        prop_assert_eq!(filter.count(&records), result.len());
        prop_assert_eq!(filter.any(&records), !result.is_empty());

        match (filter.find(&records), result.first()) {
            (Some(f), Some(&first)) => prop_assert!(std::ptr::eq(f, first)),
            (None, None) => {}
            _ => prop_assert!(false, "find and filter().first() disagree"),
        }
    }

    /// Already-marked input: a second pass adds nothing.
    #[test]
    fn marking_marked_text_is_idempotent(
        text in marked_text_strategy(),
        (query, mode) in highlight_query_strategy(),
    ) {
        let annotator = HighlightAnnotator::new(query).mode(mode).build();
        let once = annotator.highlight(&text);
        let twice = annotator.highlight(&once);
        prop_assert_eq!(once, twice);
    }

    /// Existing marker tokens survive and only delimiters are added.
    #[test]
    fn marked_text_only_gains_delimiters(
        text in marked_text_strategy(),
        (query, mode) in highlight_query_strategy(),
    ) {
        let marked = HighlightAnnotator::new(query).mode(mode).build().highlight(&text);
        prop_assert_eq!(strip_markers(&marked), strip_markers(&text));
        prop_assert!(Marker::default().count_in(&marked) >= Marker::default().count_in(&text));
    }

    /// Highlights appear only where the filter would match the same value.
    #[test]
    fn highlighting_agrees_with_filter(
        text in marked_text_strategy(),
        (query, mode) in highlight_query_strategy(),
    ) {
        let annotator = HighlightAnnotator::new(query).mode(mode).build();
        let marked = annotator.highlight(&text);
        if marked != text {
            prop_assert!(annotator.matcher().matches(&text));
        }
    }
}
