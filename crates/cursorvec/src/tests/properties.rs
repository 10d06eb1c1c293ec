// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;

use super::size;
use crate::{CursorVec, CursorVecError, RawCursorVec};

#[derive(Clone, Debug)]
enum Op {
    Insert(u32, usize),
    Push(u32),
    Remove(usize),
    Replace(u32, usize),
    MoveCursor(usize),
    Reallocate(usize),
    Clear(u32),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (any::<u32>(), 0..40usize).prop_map(|(v, i)| Op::Insert(v, i)),
        4 => any::<u32>().prop_map(Op::Push),
        3 => (0..40usize).prop_map(Op::Remove),
        2 => (any::<u32>(), 0..40usize).prop_map(|(v, i)| Op::Replace(v, i)),
        1 => (0..40usize).prop_map(Op::MoveCursor),
        1 => (1..40usize).prop_map(Op::Reallocate),
        1 => any::<u32>().prop_map(Op::Clear),
    ]
}

proptest! {
    #[test]
    fn count_never_exceeds_capacity(
        initial in 1..8usize,
        ops in prop::collection::vec(op(), 0..64)
    ) {
        let mut vec = CursorVec::<u32>::with_capacity(initial, true);

        for op in ops {
            let result = match op {
                Op::Insert(v, i) => vec.insert(v, i),
                Op::Push(v) => vec.push(v),
                Op::Remove(i) => vec.remove(i).map(|_| ()),
                Op::Replace(v, i) => vec.replace(v, i),
                Op::MoveCursor(p) => vec.move_cursor(p),
                Op::Reallocate(c) => vec.reallocate(c),
                Op::Clear(v) => vec.clear(v),
            };

            if result.is_ok() {
                prop_assert!(vec.count() <= vec.capacity());
            }
        }
    }

    #[test]
    fn matches_vec_model(
        initial in 1..8usize,
        ops in prop::collection::vec(op(), 0..64)
    ) {
        let mut vec = CursorVec::<u32>::with_capacity(initial, true);
        let mut model: Vec<u32> = Vec::new();

        for op in ops {
            match op {
                Op::Insert(v, i) => {
                    let ok = vec.insert(v, i).is_ok();
                    prop_assert_eq!(ok, i <= model.len());
                    if ok {
                        model.insert(i, v);
                    }
                }
                Op::Push(v) => {
                    vec.push(v).expect("Failed to push()");
                    model.push(v);
                }
                Op::Remove(i) => {
                    let removed = vec.remove(i).ok();
                    let expected = (i < model.len()).then(|| model.remove(i));
                    prop_assert_eq!(removed, expected);
                }
                Op::Replace(v, i) => {
                    let ok = vec.replace(v, i).is_ok();
                    prop_assert_eq!(ok, i < model.len());
                    if ok {
                        model[i] = v;
                    }
                }
                // Cursor jumps expose slots the model cannot know about
                Op::MoveCursor(_) => {}
                Op::Reallocate(c) => {
                    vec.reallocate(c).expect("Failed to reallocate()");
                    model.truncate(c);
                }
                Op::Clear(v) => {
                    vec.clear(v).expect("Failed to clear()");
                    model.clear();
                }
            }

            prop_assert_eq!(vec.to_vec(), model.clone());
        }
    }

    #[test]
    fn insert_then_get_round_trips(
        element_size in 1..16usize,
        existing in 0..12usize,
        data in prop::collection::vec(any::<u8>(), 16),
        position in any::<prop::sample::Index>()
    ) {
        let data = &data[..element_size];
        let mut vec = RawCursorVec::with_capacity(size(element_size), 4, true);
        for n in 0..existing {
            vec.push(&vec![n as u8; element_size]).expect("Failed to push()");
        }

        let index = position.index(existing + 1);
        vec.insert(data, index).expect("Failed to insert()");

        prop_assert_eq!(vec.get(index), Some(data));
        prop_assert_eq!(vec.count(), existing + 1);
    }

    #[test]
    fn remove_decrements_count_by_one(
        existing in 0..12usize,
        index in 0..12usize
    ) {
        let mut vec = CursorVec::<u16>::with_capacity(2, true);
        for n in 0..existing {
            vec.push(n as u16).expect("Failed to push()");
        }

        let result = vec.remove(index);

        if index < existing {
            prop_assert_eq!(result, Ok(index as u16));
            prop_assert_eq!(vec.count(), existing - 1);
        } else {
            let is_out_of_bounds = matches!(result, Err(CursorVecError::OutOfBounds { .. }));
            prop_assert!(is_out_of_bounds);
            prop_assert_eq!(vec.count(), existing);
        }
    }

    #[test]
    fn full_insert_doubles_capacity(
        capacity in 1..32usize,
        position in any::<prop::sample::Index>(),
        value in any::<u64>()
    ) {
        let mut vec = CursorVec::<u64>::with_capacity(capacity, true);
        for n in 0..capacity {
            vec.push(n as u64).expect("Failed to push()");
        }

        let index = position.index(capacity + 1);
        vec.insert(value, index).expect("Failed to insert()");

        prop_assert_eq!(vec.capacity(), capacity * 2);
        prop_assert_eq!(vec.get(index), Some(value));
    }

    #[test]
    fn clear_fills_every_slot(
        capacity in 1..32usize,
        live in 0..32usize,
        fill in any::<i32>()
    ) {
        let mut vec = CursorVec::<i32>::with_capacity(capacity, true);
        for n in 0..live.min(capacity) {
            vec.push(n as i32).expect("Failed to push()");
        }

        vec.clear(fill).expect("Failed to clear()");
        prop_assert_eq!(vec.count(), 0);

        vec.move_cursor(capacity).expect("Failed to move_cursor()");
        prop_assert!(vec.iter().all(|v| v == fill));
    }

    #[test]
    fn get_past_count_is_none(
        capacity in 1..16usize,
        live in 0..16usize,
        index in 0..64usize
    ) {
        let mut vec = RawCursorVec::with_capacity(size(3), capacity, true);
        for _ in 0..live {
            vec.push(&[0xAA; 3]).expect("Failed to push()");
        }

        if index >= live {
            prop_assert!(vec.get(index).is_none());
        } else {
            prop_assert_eq!(vec.get(index), Some(&[0xAA; 3][..]));
        }
    }
}
