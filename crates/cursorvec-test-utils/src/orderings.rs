// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Exhaustive orderings for container tests.
//!
//! Sorting and positional insertion are checked against every ordering of a
//! small input instead of a handful of hand-picked cases.

/// Heap's algorithm, visiting each ordering of `slots[..k]` once.
fn visit_orderings<F>(slots: &mut [usize], k: usize, visit: &mut F)
where
    F: FnMut(&[usize]),
{
    if k <= 1 {
        visit(slots);
        return;
    }

    for i in 0..k - 1 {
        visit_orderings(slots, k - 1, visit);

        let j = if k % 2 == 0 { i } else { 0 };
        slots.swap(j, k - 1);
    }

    visit_orderings(slots, k - 1, visit);
}

/// Calls `visit` once for every ordering of the indices `0..len`.
///
/// `len == 0` visits nothing.
///
/// # Example
/// ```
/// use cursorvec_test_utils::for_each_ordering;
///
/// let mut seen = 0;
/// for_each_ordering(4, |_| seen += 1);
/// assert_eq!(seen, 24);
/// ```
pub fn for_each_ordering<F>(len: usize, mut visit: F)
where
    F: FnMut(&[usize]),
{
    if len == 0 {
        return;
    }

    let mut slots: Vec<usize> = (0..len).collect();
    visit_orderings(&mut slots, len, &mut visit);
}

/// Calls `visit` once for every sequence of insertion positions that builds a
/// container of `len` elements one insert at a time.
///
/// The `i`-th position is in `0..=i`, so there are `len!` plans in total.
///
/// # Example
/// ```
/// use cursorvec_test_utils::for_each_insertion_plan;
///
/// let mut plans = Vec::new();
/// for_each_insertion_plan(2, |plan| plans.push(plan.to_vec()));
/// assert_eq!(plans, vec![vec![0, 0], vec![0, 1]]);
/// ```
pub fn for_each_insertion_plan<F>(len: usize, mut visit: F)
where
    F: FnMut(&[usize]),
{
    if len == 0 {
        return;
    }

    let mut plan = vec![0usize; len];

    loop {
        visit(&plan);

        // Odometer over the mixed radix 1, 2, ..., len.
        let mut digit = len;
        loop {
            if digit == 0 {
                return;
            }
            digit -= 1;

            if plan[digit] < digit {
                plan[digit] += 1;
                break;
            }
            plan[digit] = 0;
        }
    }
}

/// Returns `values` rearranged so that position `i` holds `values[order[i]]`.
///
/// # Panics
///
/// Panics if `order` is not a permutation of `0..values.len()`.
///
/// # Example
/// ```
/// use cursorvec_test_utils::reorder;
///
/// assert_eq!(reorder(&['a', 'b', 'c'], &[2, 0, 1]), vec!['c', 'a', 'b']);
/// ```
pub fn reorder<T: Clone>(values: &[T], order: &[usize]) -> Vec<T> {
    assert_eq!(values.len(), order.len(), "reorder: length mismatch");

    let mut taken = vec![false; values.len()];
    order
        .iter()
        .map(|&i| {
            assert!(!taken[i], "reorder: index {i} used twice");
            taken[i] = true;
            values[i].clone()
        })
        .collect()
}
