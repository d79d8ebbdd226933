//! End-to-end behaviour of boolean search and ranking.

use gigasearch::{rank, search, search_cloned, Number, Record, SearchError, Searcher, Value};

#[derive(Debug, Clone, PartialEq)]
struct Row {
    id: i64,
    name: String,
    city: String,
}

impl Record for Row {
    fn field_names() -> &'static [&'static str] {
        &["Id", "Name", "City"]
    }

    fn field_value(&self, field: &str) -> Value<'_> {
        match field {
            "Id" => Value::Number(Number::I64(self.id)),
            "Name" => Value::String(&self.name),
            "City" => Value::String(&self.city),
            _ => Value::Unavailable,
        }
    }
}

fn row(id: i64, name: &str, city: &str) -> Row {
    Row {
        id,
        name: name.to_string(),
        city: city.to_string(),
    }
}

fn rows() -> Vec<Row> {
    vec![
        row(52, "x", "NY"),
        row(7, "52", "NYC"),
        row(3, "John Smith", "New York"),
        row(4, "Jane Doe", "Boston"),
        row(5, "john doe", "new-york"),
    ]
}

fn ids(found: &[&Row]) -> Vec<i64> {
    found.iter().map(|r| r.id).collect()
}

// =============================================================================
// Boolean search
// =============================================================================

#[test]
fn blank_query_returns_input_unchanged() {
    let data = rows();
    for query in ["", " ", "\t\n"] {
        let found = search(query, &data, false).unwrap();
        assert_eq!(found.len(), data.len());
        for (a, b) in found.iter().zip(&data) {
            assert!(std::ptr::eq(*a, b));
        }
    }
}

#[test]
fn and_is_intersection() {
    let data = rows();
    let a = search("john", &data, false).unwrap();
    let b = search("york", &data, false).unwrap();
    let both = search("john&&york", &data, false).unwrap();
    let expected: Vec<i64> = ids(&a)
        .into_iter()
        .filter(|id| ids(&b).contains(id))
        .collect();
    assert_eq!(ids(&both), expected);
    assert_eq!(ids(&both), vec![3, 5]);
}

#[test]
fn or_is_deduplicated_union() {
    let data = rows();
    let found = search("doe||john", &data, false).unwrap();
    assert_eq!(ids(&found), vec![3, 4, 5]);
}

#[test]
fn formatting_only_fragments_do_not_widen_results() {
    let data = rows();
    let plain = ids(&search("john", &data, false).unwrap());
    assert_eq!(plain, vec![3, 5]);
    for query in ["john|| ", "john||-", "john||  / ", "john&&-", "- ||john&& ||()"] {
        assert_eq!(ids(&search(query, &data, false).unwrap()), plain, "{query:?}");
    }
}

#[test]
fn selector_only_fragment_still_matches_field() {
    let data = rows();
    assert_eq!(ids(&search("@city", &data, false).unwrap()), vec![52, 7, 3, 4, 5]);
    assert_eq!(
        ids(&search("john|| @name", &data, false).unwrap()),
        vec![52, 7, 3, 4, 5]
    );
}

#[test]
fn field_selector_scopes_term() {
    let data = rows();
    assert_eq!(ids(&search("52@id", &data, false).unwrap()), vec![52]);
    assert_eq!(ids(&search("52", &data, false).unwrap()), vec![52, 7]);
}

#[test]
fn field_selector_is_case_insensitive() {
    let data = rows();
    assert_eq!(ids(&search("52@ID", &data, false).unwrap()), vec![52]);
    assert_eq!(ids(&search("52@Id", &data, false).unwrap()), vec![52]);
}

#[test]
fn exact_mode_requires_equality() {
    let data = rows();
    assert_eq!(ids(&search("ny@city", &data, true).unwrap()), vec![52]);
    assert_eq!(ids(&search("ny@city", &data, false).unwrap()), vec![52, 7]);
}

#[test]
fn exact_mode_ignores_case_and_noise() {
    let data = rows();
    assert_eq!(ids(&search("New York@city", &data, true).unwrap()), vec![3, 5]);
}

#[test]
fn case_insensitive_match() {
    let data = rows();
    assert_eq!(ids(&search("John", &data, false).unwrap()), vec![3, 5]);
}

#[test]
fn noise_is_ignored_on_both_sides() {
    let data = rows();
    assert_eq!(ids(&search("new-york", &data, false).unwrap()), vec![3, 5]);
    assert_eq!(ids(&search("new york", &data, false).unwrap()), vec![3, 5]);
}

#[test]
fn repeated_search_is_stable() {
    let data = rows();
    let first = search_cloned("doe||52", &data, false).unwrap();
    let second = search_cloned("doe||52", &data, false).unwrap();
    assert_eq!(first, second);
}

#[test]
fn malformed_pattern_is_an_error() {
    let data = rows();
    let err = search("abc[", &data, false).unwrap_err();
    assert!(matches!(err, SearchError::InvalidPattern { .. }));
    assert!(err.to_string().contains("abc["));
}

#[test]
fn grouping_warns_and_still_searches() {
    let data = rows();
    let found = Searcher::new().search("(john)&&(doe)", &data).unwrap();
    assert_eq!(found.warnings.len(), 1);
    assert_eq!(ids(&found.items), vec![5]);
}

#[test]
fn unknown_selector_is_plain_text() {
    let data = vec![row(1, "bob@example", "x"), row(2, "bob", "y")];
    let found = search("bob@example", &data, false).unwrap();
    assert_eq!(ids(&found), vec![1]);
}

#[test]
fn results_never_contain_foreign_records() {
    let data = rows();
    let found = search("a||e||o", &data, false).unwrap();
    assert!(found
        .iter()
        .all(|r| data.iter().any(|d| std::ptr::eq(*r, d))));
}

// =============================================================================
// Heterogeneous records
// =============================================================================

enum Entry {
    Person { name: String },
    Place { name: String, zip: u32 },
}

impl Record for Entry {
    fn field_names() -> &'static [&'static str] {
        &["name", "zip"]
    }

    fn field_value(&self, field: &str) -> Value<'_> {
        match (self, field) {
            (Entry::Person { name }, "name") | (Entry::Place { name, .. }, "name") => {
                Value::String(name)
            }
            (Entry::Place { zip, .. }, "zip") => Value::Number(Number::from(*zip)),
            _ => Value::Unavailable,
        }
    }
}

#[test]
fn unavailable_attributes_do_not_abort() {
    let entries = vec![
        Entry::Person {
            name: "Ann".into(),
        },
        Entry::Place {
            name: "Albany".into(),
            zip: 12207,
        },
    ];
    let found = search("^$@zip||122", &entries, false).unwrap();
    assert_eq!(found.len(), 1);
    assert!(matches!(found[0], Entry::Place { .. }));

    let both = search("a", &entries, false).unwrap();
    assert_eq!(both.len(), 2);
}

// =============================================================================
// Ranking
// =============================================================================

#[derive(Debug)]
struct Doc {
    title: &'static str,
    body: &'static str,
}

impl Record for Doc {
    fn field_names() -> &'static [&'static str] {
        &["title", "body"]
    }

    fn field_value(&self, field: &str) -> Value<'_> {
        match field {
            "title" => Value::String(self.title),
            "body" => Value::String(self.body),
            _ => Value::Unavailable,
        }
    }
}

fn docs() -> Vec<Doc> {
    vec![
        Doc { title: "one", body: "x" },
        Doc { title: "x", body: "x y" },
        Doc { title: "none", body: "z" },
        Doc { title: "y", body: "x" },
    ]
}

fn titles(found: &[&Doc]) -> Vec<&'static str> {
    found.iter().map(|d| d.title).collect()
}

#[test]
fn ranking_orders_by_score() {
    let data = docs();
    let scored = Searcher::new()
        .include_partial(true)
        .rank_scored("x y", &data);
    let pairs: Vec<(&str, usize)> = scored.iter().map(|s| (s.item.title, s.score)).collect();
    assert_eq!(pairs, vec![("x", 3), ("y", 2), ("one", 1)]);
}

#[test]
fn ranking_threshold() {
    let data = docs();
    assert_eq!(titles(&rank("x y", &data, false)), vec!["x", "y"]);
    assert_eq!(titles(&rank("x y", &data, true)), vec!["x", "y", "one"]);
}

#[test]
fn ranking_field_scope() {
    let data = docs();
    assert_eq!(titles(&rank("x@title", &data, true)), vec!["x"]);
    assert_eq!(titles(&rank("x y@Title@BODY", &data, true)), vec!["x", "y", "one"]);
}

#[test]
fn ranking_blank_returns_input() {
    let data = docs();
    assert_eq!(rank("  ", &data, false).len(), data.len());
}

#[test]
fn ranking_never_fails_on_bad_regex() {
    let data = vec![Doc {
        title: "(",
        body: "",
    }];
    assert_eq!(titles(&rank("(", &data, false)), vec!["("]);
}
