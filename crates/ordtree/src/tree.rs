//! Balancing-agnostic tree state: node ownership, bookkeeping and
//! comparator-driven search.

use std::cmp::Ordering;
use std::marker::PhantomData;

use tracing::debug;

use crate::alloc::{AllocError, NodeAlloc};
use crate::key::KeyOf;
use crate::types::{Node, Side, ValueNode};
use crate::util::{self, Search};

/// Owns every node reachable from `root` together with the comparator
/// and key strategy used to order them.
pub struct TreeBase<N, F, C, A>
where
    N: Node,
    A: NodeAlloc<N>,
{
    pub(crate) alloc: A,
    pub(crate) root: Option<u32>,
    pub(crate) len: usize,
    pub(crate) comparator: C,
    pub(crate) key_of: F,
    _node: PhantomData<N>,
}

impl<N, F, C, A> TreeBase<N, F, C, A>
where
    N: Node,
    A: NodeAlloc<N>,
{
    pub fn new(alloc: A, key_of: F, comparator: C) -> Self {
        Self {
            alloc,
            root: None,
            len: 0,
            comparator,
            key_of,
            _node: PhantomData,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn root(&self) -> Option<u32> {
        self.root
    }

    #[inline]
    pub fn arena(&self) -> &A {
        &self.alloc
    }

    #[inline]
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    #[inline]
    pub fn key_of(&self) -> &F {
        &self.key_of
    }

    #[inline]
    pub fn node(&self, idx: u32) -> &N {
        &self.alloc[idx]
    }

    pub fn first(&self) -> Option<u32> {
        util::first(&self.alloc, self.root)
    }

    pub fn last(&self) -> Option<u32> {
        util::last(&self.alloc, self.root)
    }

    /// Allocates `node` and hangs it at `side` of `parent` (or at the
    /// root). Nothing is touched when allocation fails.
    pub fn link(&mut self, node: N, parent: Option<u32>, side: Side) -> Result<u32, AllocError> {
        let n = self.alloc.allocate(node)?;
        self.alloc[n].set_p(parent);
        match parent {
            None => self.root = Some(n),
            Some(p) => self.alloc[p].set_child(side, Some(n)),
        }
        self.len += 1;
        Ok(n)
    }

    /// Returns an already unlinked node to the allocator.
    pub fn release(&mut self, idx: u32) -> N {
        self.len -= 1;
        self.alloc.deallocate(idx)
    }

    /// Destroys every node, walking an explicit work list.
    pub fn clear(&mut self) {
        if self.len > 0 {
            debug!(len = self.len, "clearing tree");
        }
        self.release_all();
    }

    fn release_all(&mut self) {
        let mut stack: Vec<u32> = self.root.take().into_iter().collect();
        while let Some(i) = stack.pop() {
            let node = self.alloc.deallocate(i);
            stack.extend(node.l());
            stack.extend(node.r());
        }
        self.len = 0;
    }

    /// Exchanges allocator, root, length, comparator and key strategy.
    pub fn swap(&mut self, other: &mut Self) {
        debug!(len = self.len, other_len = other.len, "swapping trees");
        std::mem::swap(self, other);
    }
}

impl<N, F, C, A> TreeBase<N, F, C, A>
where
    N: ValueNode,
    F: KeyOf<N::Value>,
    C: Fn(&F::Key, &F::Key) -> Ordering,
    A: NodeAlloc<N>,
{
    pub fn find(&self, key: &F::Key) -> Option<u32> {
        let key_of = &self.key_of;
        util::find(
            &self.alloc,
            self.root,
            key,
            |n: &N| key_of.key(n.value()),
            &self.comparator,
        )
    }

    pub fn lower_bound(&self, key: &F::Key) -> Option<u32> {
        let key_of = &self.key_of;
        util::lower_bound(
            &self.alloc,
            self.root,
            key,
            |n: &N| key_of.key(n.value()),
            &self.comparator,
        )
    }

    pub fn upper_bound(&self, key: &F::Key) -> Option<u32> {
        let key_of = &self.key_of;
        util::upper_bound(
            &self.alloc,
            self.root,
            key,
            |n: &N| key_of.key(n.value()),
            &self.comparator,
        )
    }

    pub fn search(&self, key: &F::Key) -> Search {
        let key_of = &self.key_of;
        util::search(
            &self.alloc,
            self.root,
            key,
            |n: &N| key_of.key(n.value()),
            &self.comparator,
        )
    }
}

impl<N, F, C, A> Clone for TreeBase<N, F, C, A>
where
    N: Node,
    F: Clone,
    C: Clone,
    A: NodeAlloc<N> + Clone,
{
    fn clone(&self) -> Self {
        Self {
            alloc: self.alloc.clone(),
            root: self.root,
            len: self.len,
            comparator: self.comparator.clone(),
            key_of: self.key_of.clone(),
            _node: PhantomData,
        }
    }
}

impl<N, F, C, A> Drop for TreeBase<N, F, C, A>
where
    N: Node,
    A: NodeAlloc<N>,
{
    fn drop(&mut self) {
        self.release_all();
    }
}
