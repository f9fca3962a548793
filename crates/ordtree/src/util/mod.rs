//! Link-level helpers shared by every balancing scheme.
//!
//! - traversal: [`first`], [`last`], [`next`], [`prev`], [`size`]
//! - comparator-driven search: [`find`], [`lower_bound`], [`upper_bound`],
//!   [`search`]
//! - structural primitives: [`rotate`], [`transplant`]
//!
//! Key-based helpers take a `key_of` accessor closure so they work for any
//! arena node layout.

pub mod rotate;

use std::cmp::Ordering;

use crate::types::{Arena, Node, Side};

pub use rotate::{rotate, rotate_left, rotate_right, transplant};

#[inline]
pub(crate) fn get_p<N: Node, A: Arena<N> + ?Sized>(arena: &A, idx: u32) -> Option<u32> {
    arena[idx].p()
}

#[inline]
pub(crate) fn get_l<N: Node, A: Arena<N> + ?Sized>(arena: &A, idx: u32) -> Option<u32> {
    arena[idx].l()
}

#[inline]
pub(crate) fn get_r<N: Node, A: Arena<N> + ?Sized>(arena: &A, idx: u32) -> Option<u32> {
    arena[idx].r()
}

#[inline]
pub(crate) fn set_p<N: Node, A: Arena<N> + ?Sized>(arena: &mut A, idx: u32, v: Option<u32>) {
    arena[idx].set_p(v);
}

#[inline]
pub(crate) fn set_l<N: Node, A: Arena<N> + ?Sized>(arena: &mut A, idx: u32, v: Option<u32>) {
    arena[idx].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node, A: Arena<N> + ?Sized>(arena: &mut A, idx: u32, v: Option<u32>) {
    arena[idx].set_r(v);
}

/// Side of `parent` that `child` hangs from.
#[inline]
pub(crate) fn side_of<N: Node, A: Arena<N> + ?Sized>(arena: &A, parent: u32, child: u32) -> Side {
    if get_l(arena, parent) == Some(child) {
        Side::Left
    } else {
        Side::Right
    }
}

/// Leftmost node under `root`.
pub fn first<N: Node, A: Arena<N> + ?Sized>(arena: &A, root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(l) = get_l(arena, curr) {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node under `root`.
pub fn last<N: Node, A: Arena<N> + ?Sized>(arena: &A, root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(r) = get_r(arena, curr) {
        curr = r;
    }
    Some(curr)
}

/// In-order successor.
pub fn next<N: Node, A: Arena<N> + ?Sized>(arena: &A, mut curr: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, curr) {
        return first(arena, Some(r));
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_r(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// In-order predecessor.
pub fn prev<N: Node, A: Arena<N> + ?Sized>(arena: &A, mut curr: u32) -> Option<u32> {
    if let Some(l) = get_l(arena, curr) {
        return last(arena, Some(l));
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_l(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// Number of nodes reachable from `root`.
pub fn size<N: Node, A: Arena<N> + ?Sized>(arena: &A, root: Option<u32>) -> usize {
    let mut count = 0;
    let mut stack: Vec<u32> = root.into_iter().collect();
    while let Some(i) = stack.pop() {
        count += 1;
        stack.extend(get_l(arena, i));
        stack.extend(get_r(arena, i));
    }
    count
}

/// Finds a node by key.
pub fn find<N, A, K, F, C>(
    arena: &A,
    root: Option<u32>,
    key: &K,
    key_of: F,
    comparator: C,
) -> Option<u32>
where
    N: Node,
    A: Arena<N> + ?Sized,
    F: Fn(&N) -> &K,
    C: Fn(&K, &K) -> Ordering,
{
    let mut curr = root;
    while let Some(i) = curr {
        curr = match comparator(key, key_of(&arena[i])) {
            Ordering::Less => get_l(arena, i),
            Ordering::Greater => get_r(arena, i),
            Ordering::Equal => return Some(i),
        };
    }
    None
}

/// First node whose key is not less than `key`.
pub fn lower_bound<N, A, K, F, C>(
    arena: &A,
    root: Option<u32>,
    key: &K,
    key_of: F,
    comparator: C,
) -> Option<u32>
where
    N: Node,
    A: Arena<N> + ?Sized,
    F: Fn(&N) -> &K,
    C: Fn(&K, &K) -> Ordering,
{
    let mut curr = root;
    let mut result = None;
    while let Some(i) = curr {
        if comparator(key_of(&arena[i]), key) == Ordering::Less {
            curr = get_r(arena, i);
        } else {
            result = Some(i);
            curr = get_l(arena, i);
        }
    }
    result
}

/// First node whose key is strictly greater than `key`.
pub fn upper_bound<N, A, K, F, C>(
    arena: &A,
    root: Option<u32>,
    key: &K,
    key_of: F,
    comparator: C,
) -> Option<u32>
where
    N: Node,
    A: Arena<N> + ?Sized,
    F: Fn(&N) -> &K,
    C: Fn(&K, &K) -> Ordering,
{
    let mut curr = root;
    let mut result = None;
    while let Some(i) = curr {
        if comparator(key, key_of(&arena[i])) == Ordering::Less {
            result = Some(i);
            curr = get_l(arena, i);
        } else {
            curr = get_r(arena, i);
        }
    }
    result
}

/// Outcome of an insertion descent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Search {
    /// A node with an equal key already exists.
    Found(u32),
    /// The key is absent; a new node belongs in `side` of `parent`, or at
    /// the root when `parent` is `None`.
    Vacant { parent: Option<u32>, side: Side },
}

/// Descends from `root` the way an insertion would.
pub fn search<N, A, K, F, C>(
    arena: &A,
    root: Option<u32>,
    key: &K,
    key_of: F,
    comparator: C,
) -> Search
where
    N: Node,
    A: Arena<N> + ?Sized,
    F: Fn(&N) -> &K,
    C: Fn(&K, &K) -> Ordering,
{
    let mut parent = None;
    let mut side = Side::Left;
    let mut curr = root;
    while let Some(i) = curr {
        parent = Some(i);
        side = match comparator(key, key_of(&arena[i])) {
            Ordering::Less => Side::Left,
            Ordering::Greater => Side::Right,
            Ordering::Equal => return Search::Found(i),
        };
        curr = arena[i].child(side);
    }
    Search::Vacant { parent, side }
}
