use tracing::trace;

use crate::types::{Arena, Side};
use crate::util::{first, get_l, get_p, get_r, rotate, set_l, set_p, set_r, side_of, transplant};

use super::types::{Color, RbNodeLike};

#[inline]
fn color<N, A>(arena: &A, i: Option<u32>) -> Color
where
    N: RbNodeLike,
    A: Arena<N> + ?Sized,
{
    // Absent children are black leaves.
    i.map_or(Color::Black, |i| arena[i].color())
}

#[inline]
fn is_red<N, A>(arena: &A, i: Option<u32>) -> bool
where
    N: RbNodeLike,
    A: Arena<N> + ?Sized,
{
    color(arena, i) == Color::Red
}

#[inline]
fn set_color<N, A>(arena: &mut A, i: u32, c: Color)
where
    N: RbNodeLike,
    A: Arena<N> + ?Sized,
{
    arena[i].set_color(c);
}

/// Restores the red-black rules after `n` was linked in as a red leaf.
pub fn insert_fixup<N, A>(arena: &mut A, root: &mut Option<u32>, mut n: u32)
where
    N: RbNodeLike,
    A: Arena<N> + ?Sized,
{
    loop {
        let Some(mut p) = get_p(arena, n) else {
            break;
        };
        if !is_red(arena, Some(p)) {
            break;
        }
        // A red parent is never the root.
        let g = get_p(arena, p).expect("red node has a parent");
        let side = side_of(arena, g, p);
        let u = arena[g].child(side.opposite());

        match u {
            Some(u) if is_red(arena, Some(u)) => {
                trace!(node = n, parent = p, uncle = u, "insert: red uncle, recolor");
                set_color(arena, p, Color::Black);
                set_color(arena, u, Color::Black);
                set_color(arena, g, Color::Red);
                n = g;
                continue;
            }
            _ => {}
        }

        if side_of(arena, p, n) != side {
            trace!(node = n, parent = p, "insert: zig-zag, rotate parent");
            rotate(arena, root, p, side);
            std::mem::swap(&mut n, &mut p);
        }

        trace!(node = n, parent = p, grandparent = g, "insert: straight line, rotate grandparent");
        set_color(arena, p, Color::Black);
        set_color(arena, g, Color::Red);
        rotate(arena, root, g, side.opposite());
        break;
    }

    if let Some(r) = *root {
        set_color(arena, r, Color::Black);
    }
}

/// Position carrying a double-black deficiency during erase fix-up.
///
/// When the spliced-out node had no replacement, `Absent` stands in for
/// the empty child slot. It is a value on the stack only and never
/// becomes an arena node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    Node(u32),
    Absent { parent: u32, side: Side },
}

/// Slot left behind when `replacement` takes `removed`'s place.
fn slot_after<N, A>(arena: &A, removed: u32, replacement: Option<u32>) -> Option<Slot>
where
    N: RbNodeLike,
    A: Arena<N> + ?Sized,
{
    match replacement {
        Some(x) => Some(Slot::Node(x)),
        None => get_p(arena, removed).map(|parent| Slot::Absent {
            parent,
            side: side_of(arena, parent, removed),
        }),
    }
}

/// Unlinks `z` from the tree and rebalances.
///
/// `z` itself is not deallocated; its links are stale afterwards and the
/// caller is expected to release it. Every other node keeps its handle.
pub fn remove<N, A>(arena: &mut A, root: &mut Option<u32>, z: u32)
where
    N: RbNodeLike,
    A: Arena<N> + ?Sized,
{
    let zl = get_l(arena, z);
    let zr = get_r(arena, z);
    let mut removed_color = arena[z].color();

    let x = match (zl, zr) {
        (None, _) => {
            let x = slot_after(arena, z, zr);
            transplant(arena, root, z, zr);
            x
        }
        (Some(_), None) => {
            let x = slot_after(arena, z, zl);
            transplant(arena, root, z, zl);
            x
        }
        (Some(l), Some(r)) => {
            let y = first(arena, Some(r)).expect("right subtree is non-empty");
            removed_color = arena[y].color();
            let yr = get_r(arena, y);

            let x = if y == r {
                Some(match yr {
                    Some(c) => Slot::Node(c),
                    None => Slot::Absent {
                        parent: y,
                        side: Side::Right,
                    },
                })
            } else {
                let x = slot_after(arena, y, yr);
                transplant(arena, root, y, yr);
                set_r(arena, y, Some(r));
                set_p(arena, r, Some(y));
                x
            };

            transplant(arena, root, z, Some(y));
            set_l(arena, y, Some(l));
            set_p(arena, l, Some(y));
            let z_color = arena[z].color();
            set_color(arena, y, z_color);
            x
        }
    };

    if removed_color == Color::Black {
        if let Some(x) = x {
            erase_fixup(arena, root, x);
        }
    }
}

/// Resolves a double-black deficiency at `x`.
pub fn erase_fixup<N, A>(arena: &mut A, root: &mut Option<u32>, mut x: Slot)
where
    N: RbNodeLike,
    A: Arena<N> + ?Sized,
{
    if let Slot::Absent { parent, side } = x {
        trace!(parent, ?side, "erase: double black at absent child");
    }

    loop {
        let (p, side) = match x {
            Slot::Node(n) => {
                if is_red(arena, Some(n)) {
                    break;
                }
                match get_p(arena, n) {
                    Some(p) => (p, side_of(arena, p, n)),
                    None => break,
                }
            }
            Slot::Absent { parent, side } => (parent, side),
        };
        let far = side.opposite();

        // The sibling subtree has black height >= 1, so it is never empty.
        let mut s = arena[p].child(far).expect("double-black node has a sibling");

        if is_red(arena, Some(s)) {
            trace!(parent = p, sibling = s, "erase case 1: red sibling");
            set_color(arena, s, Color::Black);
            set_color(arena, p, Color::Red);
            rotate(arena, root, p, side);
            s = arena[p].child(far).expect("double-black node has a sibling");
        }

        let near_nephew = arena[s].child(side);
        let far_nephew = arena[s].child(far);

        if !is_red(arena, near_nephew) && !is_red(arena, far_nephew) {
            trace!(parent = p, sibling = s, "erase case 2: black nephews, push up");
            set_color(arena, s, Color::Red);
            x = Slot::Node(p);
            continue;
        }

        if !is_red(arena, far_nephew) {
            trace!(parent = p, sibling = s, "erase case 3: near nephew red");
            if let Some(nn) = near_nephew {
                set_color(arena, nn, Color::Black);
            }
            set_color(arena, s, Color::Red);
            rotate(arena, root, s, far);
            s = arena[p].child(far).expect("double-black node has a sibling");
        }

        trace!(parent = p, sibling = s, "erase case 4: far nephew red");
        let parent_color = arena[p].color();
        set_color(arena, s, parent_color);
        set_color(arena, p, Color::Black);
        if let Some(f) = arena[s].child(far) {
            set_color(arena, f, Color::Black);
        }
        rotate(arena, root, p, side);
        return;
    }

    if let Slot::Node(n) = x {
        set_color(arena, n, Color::Black);
    }
}
