use std::cmp::Ordering;

use thiserror::Error;

use crate::types::{Arena, Side};
use crate::util::{first, next};

use super::types::RbNodeLike;

/// A broken structural rule found by [`verify`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("root {root} has a parent")]
    RootHasParent { root: u32 },
    #[error("root {root} is red")]
    RedRoot { root: u32 },
    #[error("red node {node} has a red child")]
    RedRed { node: u32 },
    #[error("{side:?} child {child} of {parent} does not point back to it")]
    BrokenParentLink { parent: u32, child: u32, side: Side },
    #[error("path ending under node {node} has {found} black nodes, expected {expected}")]
    BlackHeight {
        node: u32,
        expected: usize,
        found: usize,
    },
    #[error("node {node} is not strictly greater than its predecessor")]
    Order { node: u32 },
    #[error("tree reports {len} elements but {reachable} are reachable")]
    Length { len: usize, reachable: usize },
}

/// Checks every red-black rule on the tree rooted at `root`.
///
/// Read-only. Walks an explicit stack, so a corrupted, very deep tree
/// cannot overflow the call stack; a walk that finds more than `len`
/// nodes stops with [`Violation::Length`].
pub fn verify<N, A, K, F, C>(
    arena: &A,
    root: Option<u32>,
    len: usize,
    key_of: F,
    comparator: C,
) -> Result<(), Violation>
where
    N: RbNodeLike,
    A: Arena<N> + ?Sized,
    F: Fn(&N) -> &K,
    C: Fn(&K, &K) -> Ordering,
{
    let Some(root) = root else {
        return match len {
            0 => Ok(()),
            _ => Err(Violation::Length { len, reachable: 0 }),
        };
    };

    if arena[root].p().is_some() {
        return Err(Violation::RootHasParent { root });
    }
    if !arena[root].is_black() {
        return Err(Violation::RedRoot { root });
    }

    let mut expected: Option<usize> = None;
    let mut reachable = 0;
    let mut stack = vec![(root, 0usize)];
    while let Some((node, above)) = stack.pop() {
        reachable += 1;
        if reachable > len {
            return Err(Violation::Length { len, reachable });
        }

        let n = &arena[node];
        let black = above + usize::from(n.is_black());
        for (side, child) in [(Side::Left, n.l()), (Side::Right, n.r())] {
            match child {
                Some(c) => {
                    if arena[c].p() != Some(node) {
                        return Err(Violation::BrokenParentLink {
                            parent: node,
                            child: c,
                            side,
                        });
                    }
                    if !n.is_black() && !arena[c].is_black() {
                        return Err(Violation::RedRed { node });
                    }
                    stack.push((c, black));
                }
                None => match expected {
                    None => expected = Some(black),
                    Some(expected) if expected != black => {
                        return Err(Violation::BlackHeight {
                            node,
                            expected,
                            found: black,
                        });
                    }
                    Some(_) => {}
                },
            }
        }
    }

    if reachable != len {
        return Err(Violation::Length { len, reachable });
    }

    let mut prev: Option<u32> = None;
    let mut curr = first(arena, Some(root));
    while let Some(i) = curr {
        if let Some(prev) = prev {
            if comparator(key_of(&arena[prev]), key_of(&arena[i])) != Ordering::Less {
                return Err(Violation::Order { node: i });
            }
        }
        prev = Some(i);
        curr = next(arena, i);
    }

    Ok(())
}
