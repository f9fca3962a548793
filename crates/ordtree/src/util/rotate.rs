//! Rotation and subtree replacement.
//!
//! Both primitives only rewire links. They know nothing about colors or
//! balance and keep every parent link the exact inverse of its child link.

use crate::types::{Arena, Node, Side};

use super::{get_p, set_l, set_p, set_r};

/// Points `parent`'s link to `old` at `new` instead, or the root when
/// `old` had no parent.
#[inline]
fn replace_child<N, A>(
    arena: &mut A,
    root: &mut Option<u32>,
    parent: Option<u32>,
    old: u32,
    new: Option<u32>,
) where
    N: Node,
    A: Arena<N> + ?Sized,
{
    match parent {
        None => *root = new,
        Some(p) => {
            if arena[p].l() == Some(old) {
                set_l(arena, p, new);
            } else {
                set_r(arena, p, new);
            }
        }
    }
}

/// Rotates `n` down towards `side`; its child on the opposite side moves
/// up and takes its place.
///
/// Returns the new local subtree root. Panics if that child is absent.
pub fn rotate<N, A>(arena: &mut A, root: &mut Option<u32>, n: u32, side: Side) -> u32
where
    N: Node,
    A: Arena<N> + ?Sized,
{
    let up = side.opposite();
    let c = arena[n]
        .child(up)
        .expect("rotation needs a child on the rising side");

    let moved = arena[c].child(side);
    arena[n].set_child(up, moved);
    if let Some(m) = moved {
        set_p(arena, m, Some(n));
    }

    let p = get_p(arena, n);
    set_p(arena, c, p);
    replace_child(arena, root, p, n, Some(c));

    arena[c].set_child(side, Some(n));
    set_p(arena, n, Some(c));
    c
}

/// Left rotation: the right child of `n` becomes the subtree root.
pub fn rotate_left<N, A>(arena: &mut A, root: &mut Option<u32>, n: u32) -> u32
where
    N: Node,
    A: Arena<N> + ?Sized,
{
    rotate(arena, root, n, Side::Left)
}

/// Right rotation: the left child of `n` becomes the subtree root.
pub fn rotate_right<N, A>(arena: &mut A, root: &mut Option<u32>, n: u32) -> u32
where
    N: Node,
    A: Arena<N> + ?Sized,
{
    rotate(arena, root, n, Side::Right)
}

/// Puts `v` where `u` hangs. `u`'s own links are left untouched.
pub fn transplant<N, A>(arena: &mut A, root: &mut Option<u32>, u: u32, v: Option<u32>)
where
    N: Node,
    A: Arena<N> + ?Sized,
{
    let p = get_p(arena, u);
    replace_child(arena, root, p, u, v);
    if let Some(v) = v {
        set_p(arena, v, p);
    }
}
