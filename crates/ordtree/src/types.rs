//! Node trait definitions.
//!
//! Nodes live in an arena owned by the tree. Every link is an
//! `Option<u32>` handle into that arena instead of a pointer, so a
//! rotation only rewrites handle fields and a node keeps the same handle
//! from insertion until it is erased.

use std::ops::{Index, IndexMut};

/// Which child slot of its parent a node occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Parent / left / right links.
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);

    #[inline]
    fn child(&self, side: Side) -> Option<u32> {
        match side {
            Side::Left => self.l(),
            Side::Right => self.r(),
        }
    }

    #[inline]
    fn set_child(&mut self, side: Side, v: Option<u32>) {
        match side {
            Side::Left => self.set_l(v),
            Side::Right => self.set_r(v),
        }
    }
}

/// A node that carries a stored value.
pub trait ValueNode: Node {
    type Value;

    fn value(&self) -> &Self::Value;
    fn into_value(self) -> Self::Value;
}

/// Storage addressable by node handle.
///
/// Structural primitives only need to read and rewrite links, so they are
/// generic over this instead of over a concrete allocator.
pub trait Arena<N>: Index<u32, Output = N> + IndexMut<u32> {}

impl<N, A> Arena<N> for A where A: ?Sized + Index<u32, Output = N> + IndexMut<u32> {}
