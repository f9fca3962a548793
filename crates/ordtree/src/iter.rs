use std::iter::FusedIterator;
use std::marker::PhantomData;

use crate::types::{Arena, ValueNode};
use crate::util::{first, last, next, prev};

/// In-order iterator over the values of a tree.
///
/// Walks successor / predecessor links from both ends and stops once the
/// two ends have yielded `len` values between them.
pub struct Iter<'a, N, A: ?Sized> {
    arena: &'a A,
    front: Option<u32>,
    back: Option<u32>,
    remaining: usize,
    _node: PhantomData<&'a N>,
}

impl<'a, N, A> Iter<'a, N, A>
where
    N: ValueNode,
    A: Arena<N> + ?Sized,
{
    pub(crate) fn new(arena: &'a A, root: Option<u32>, len: usize) -> Self {
        Self {
            arena,
            front: first(arena, root),
            back: last(arena, root),
            remaining: len,
            _node: PhantomData,
        }
    }
}

impl<N, A: ?Sized> Clone for Iter<'_, N, A> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
            _node: PhantomData,
        }
    }
}

impl<'a, N, A> Iterator for Iter<'a, N, A>
where
    N: ValueNode + 'a,
    A: Arena<N> + ?Sized,
{
    type Item = &'a N::Value;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let arena = self.arena;
        let i = self.front?;
        self.front = next(arena, i);
        self.remaining -= 1;
        Some(arena[i].value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, N, A> DoubleEndedIterator for Iter<'a, N, A>
where
    N: ValueNode + 'a,
    A: Arena<N> + ?Sized,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let arena = self.arena;
        let i = self.back?;
        self.back = prev(arena, i);
        self.remaining -= 1;
        Some(arena[i].value())
    }
}

impl<'a, N, A> ExactSizeIterator for Iter<'a, N, A>
where
    N: ValueNode + 'a,
    A: Arena<N> + ?Sized,
{
}

impl<'a, N, A> FusedIterator for Iter<'a, N, A>
where
    N: ValueNode + 'a,
    A: Arena<N> + ?Sized,
{
}
