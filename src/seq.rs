//! Higher-order helpers over slices.
//!
//! Every operator borrows its input read-only and hands the callback each
//! element together with its index. Callbacks are `FnMut`, so they may carry
//! side effects; [`some`] and [`every`] always visit the whole slice so those
//! side effects happen for every element.
//!
//! # Example
//!
//! ```rust
//! use validkit::seq;
//!
//! let data: Vec<i32> = (1..=10).collect();
//! let evens = seq::filter(&data, |v, _| v % 2 == 0);
//!
//! assert_eq!(evens, vec![&2, &4, &6, &8, &10]);
//! assert_eq!(seq::count(&data, |v, _| v % 2 == 0), 5);
//! ```

/// Returns true if `predicate` holds for at least one element.
///
/// The predicate is called for every element, even after a match.
pub fn some<T, F>(items: &[T], mut predicate: F) -> bool
where
    F: FnMut(&T, usize) -> bool,
{
    let mut matched = false;
    for (index, item) in items.iter().enumerate() {
        matched |= predicate(item, index);
    }
    matched
}

/// Returns true if `predicate` holds for every element (true for an empty slice).
///
/// The predicate is called for every element, even after a miss.
pub fn every<T, F>(items: &[T], mut predicate: F) -> bool
where
    F: FnMut(&T, usize) -> bool,
{
    let mut all = true;
    for (index, item) in items.iter().enumerate() {
        all &= predicate(item, index);
    }
    all
}

/// Folds the slice left to right, starting from `initial`.
pub fn reduce<T, A, F>(items: &[T], mut combine: F, initial: A) -> A
where
    F: FnMut(A, &T) -> A,
{
    let mut acc = initial;
    for item in items {
        acc = combine(acc, item);
    }
    acc
}

/// Calls `visit` on every element in order.
pub fn each<T, F>(items: &[T], mut visit: F)
where
    F: FnMut(&T, usize),
{
    for (index, item) in items.iter().enumerate() {
        visit(item, index);
    }
}

/// Builds a new vector of the same length holding `transform(item, index)`.
pub fn map<T, U, F>(items: &[T], mut transform: F) -> Vec<U>
where
    F: FnMut(&T, usize) -> U,
{
    let mut out = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        out.push(transform(item, index));
    }
    out
}

/// Returns the first element matching `predicate`, or `None`.
pub fn find<'a, T, F>(items: &'a [T], mut predicate: F) -> Option<&'a T>
where
    F: FnMut(&T, usize) -> bool,
{
    items
        .iter()
        .enumerate()
        .find(|(index, item)| predicate(*item, *index))
        .map(|(_, item)| item)
}

/// Returns the matching elements, preserving order.
pub fn filter<'a, T, F>(items: &'a [T], mut predicate: F) -> Vec<&'a T>
where
    F: FnMut(&T, usize) -> bool,
{
    items
        .iter()
        .enumerate()
        .filter(|(index, item)| predicate(*item, *index))
        .map(|(_, item)| item)
        .collect()
}

/// Counts the elements matching `predicate`.
pub fn count<T, F>(items: &[T], mut predicate: F) -> usize
where
    F: FnMut(&T, usize) -> bool,
{
    let mut n = 0;
    for (index, item) in items.iter().enumerate() {
        if predicate(item, index) {
            n += 1;
        }
    }
    n
}
