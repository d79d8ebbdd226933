//! Property-based tests for the boolean evaluator and ranking.

use gigasearch::{normalize, rank, search, Number, Record, Searcher, Value};
use proptest::prelude::*;

// ============================================================================
// Test helpers
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
struct Item {
    value: i64,
    name: String,
}

impl Record for Item {
    fn field_names() -> &'static [&'static str] {
        &["value", "name"]
    }

    fn field_value(&self, field: &str) -> Value<'_> {
        match field {
            "value" => Value::Number(Number::I64(self.value)),
            "name" => Value::String(&self.name),
            _ => Value::Unavailable,
        }
    }
}

fn item_strategy() -> impl Strategy<Value = Item> {
    (0i64..1000, "[a-d ]{1,8}").prop_map(|(value, name)| Item { value, name })
}

fn term_strategy() -> impl Strategy<Value = String> {
    "[a-d1-9]{1,2}(@name|@value)?"
}

fn positions(found: &[&Item], items: &[Item]) -> Vec<usize> {
    found
        .iter()
        .map(|f| {
            items
                .iter()
                .position(|i| std::ptr::eq(i, *f))
                .expect("result must come from the input")
        })
        .collect()
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Search should never return more items than the input.
    #[test]
    fn search_never_grows_collection(
        items in prop::collection::vec(item_strategy(), 0..40),
        term in term_strategy(),
    ) {
        let found = search(&term, &items, false).unwrap();
        prop_assert!(found.len() <= items.len());
    }

    /// `a&&b` equals the intersection of `a` and `b`.
    #[test]
    fn and_is_intersection(
        items in prop::collection::vec(item_strategy(), 0..40),
        a in term_strategy(),
        b in term_strategy(),
    ) {
        let left = positions(&search(&a, &items, false).unwrap(), &items);
        let right = positions(&search(&b, &items, false).unwrap(), &items);
        let both = positions(&search(&format!("{}&&{}", a, b), &items, false).unwrap(), &items);
        let expected: Vec<usize> = left.into_iter().filter(|p| right.contains(p)).collect();
        prop_assert_eq!(both, expected);
    }

    /// `a||b` equals the deduplicated union of `a` and `b`, in input order.
    #[test]
    fn or_is_union(
        items in prop::collection::vec(item_strategy(), 0..40),
        a in term_strategy(),
        b in term_strategy(),
    ) {
        let left = positions(&search(&a, &items, false).unwrap(), &items);
        let right = positions(&search(&b, &items, false).unwrap(), &items);
        let either = positions(&search(&format!("{}||{}", a, b), &items, false).unwrap(), &items);
        let expected: Vec<usize> = (0..items.len())
            .filter(|p| left.contains(p) || right.contains(p))
            .collect();
        prop_assert_eq!(either, expected);
    }

    /// Exact results are a subset of containment results.
    #[test]
    fn exact_is_subset(
        items in prop::collection::vec(item_strategy(), 0..40),
        term in term_strategy(),
    ) {
        let loose = positions(&search(&term, &items, false).unwrap(), &items);
        let exact = positions(&search(&term, &items, true).unwrap(), &items);
        prop_assert!(exact.iter().all(|p| loose.contains(p)));
    }

    /// Searching twice gives the same answer.
    #[test]
    fn search_is_deterministic(
        items in prop::collection::vec(item_strategy(), 0..40),
        term in term_strategy(),
    ) {
        let searcher = Searcher::new();
        let first = positions(&searcher.search(&term, &items).unwrap().items, &items);
        let second = positions(&searcher.search(&term, &items).unwrap().items, &items);
        prop_assert_eq!(first, second);
    }

    /// Ranking scores are non-increasing and partial mode keeps a superset.
    #[test]
    fn ranking_is_sorted(
        items in prop::collection::vec(item_strategy(), 0..40),
        a in "[a-d]",
        b in "[a-d]",
    ) {
        let query = format!("{} {}", a, b);
        let scored = Searcher::new().include_partial(true).rank_scored(&query, &items);
        prop_assert!(scored.windows(2).all(|w| w[0].score >= w[1].score));

        let strict = positions(&rank(&query, &items, false), &items);
        let partial = positions(&rank(&query, &items, true), &items);
        prop_assert!(strict.iter().all(|p| partial.contains(p)));
    }

    /// Normalization is idempotent and removes every noise character.
    #[test]
    fn normalize_is_idempotent(text in "[ -~]{0,20}") {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once.clone());
        prop_assert!(!once.contains(gigasearch::is_noise));
    }
}
