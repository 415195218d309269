//! Integration tests for the slice helpers.

use validkit::seq;

fn samples() -> Vec<Vec<i32>> {
    vec![
        vec![],
        vec![0],
        vec![1, 2, 3, 4, 5],
        (1..=10).collect(),
        vec![-4, 7, 7, 0, 12, -1, 3],
    ]
}

fn predicates() -> [fn(&i32, usize) -> bool; 5] {
    [
        |v, _| v % 2 == 0,
        |v, _| *v > 3,
        |_, i| i % 3 == 0,
        |_, _| true,
        |_, _| false,
    ]
}

#[test]
fn test_count_matches_filter_length() {
    for data in samples() {
        for p in predicates() {
            assert_eq!(seq::count(&data, p), seq::filter(&data, p).len());
        }
    }
}

#[test]
fn test_some_and_every_agree_with_count() {
    for data in samples() {
        for p in predicates() {
            let n = seq::count(&data, p);
            assert_eq!(seq::some(&data, p), n > 0);
            assert_eq!(seq::every(&data, p), n == data.len());
        }
    }
}

#[test]
fn test_map_preserves_length() {
    for data in samples() {
        let mapped = seq::map(&data, |v, i| (*v as i64) * (i as i64));
        assert_eq!(mapped.len(), data.len());
    }
}

#[test]
fn test_find_returns_first_match() {
    let data = vec![1, 2, 3, 4, 5];
    assert_eq!(seq::find(&data, |v, _| *v == 4), Some(&4));
    assert_eq!(seq::find(&data, |v, _| *v == 9), None);

    let pairs = vec![("a", 1), ("b", 2), ("c", 2)];
    assert_eq!(seq::find(&pairs, |p, _| p.1 == 2), Some(&("b", 2)));
}

#[test]
fn test_find_stops_at_first_match() {
    let data = vec![1, 2, 3, 4, 5];
    let mut visited = 0;
    seq::find(&data, |v, _| {
        visited += 1;
        *v == 2
    });
    assert_eq!(visited, 2);
}

#[test]
fn test_filter_and_count_even() {
    let data: Vec<i32> = (1..=10).collect();
    let evens: Vec<i32> = seq::filter(&data, |v, _| v % 2 == 0).into_iter().copied().collect();

    assert_eq!(evens, vec![2, 4, 6, 8, 10]);
    assert_eq!(seq::count(&data, |v, _| v % 2 == 0), 5);
}

#[test]
fn test_some_and_every_call_predicate_for_each_element() {
    let data = vec!["x", "y", "z"];

    let mut some_calls = Vec::new();
    assert!(seq::some(&data, |v, i| {
        some_calls.push(i);
        *v == "x"
    }));
    assert_eq!(some_calls, vec![0, 1, 2]);

    let mut every_calls = Vec::new();
    assert!(!seq::every(&data, |v, i| {
        every_calls.push(i);
        *v == "z"
    }));
    assert_eq!(every_calls, vec![0, 1, 2]);
}

#[test]
fn test_reduce_builds_from_initial() {
    let words = vec!["post".to_string(), "mortem".to_string()];
    let total = seq::reduce(&words, |acc, w| acc + w.len(), 0usize);
    assert_eq!(total, 10);

    let empty: Vec<i32> = Vec::new();
    assert_eq!(seq::reduce(&empty, |acc, v| acc + v, 42), 42);
}

#[test]
fn test_each_side_effects_in_order() {
    let data = vec![10, 20, 30];
    let mut log = String::new();
    seq::each(&data, |v, i| log.push_str(&format!("{}={};", i, v)));
    assert_eq!(log, "0=10;1=20;2=30;");
}

#[test]
fn test_input_is_untouched() {
    let data = vec![3, 1, 2];
    let _ = seq::map(&data, |v, _| v * 2);
    let _ = seq::filter(&data, |v, _| *v > 1);
    assert_eq!(data, vec![3, 1, 2]);
}
