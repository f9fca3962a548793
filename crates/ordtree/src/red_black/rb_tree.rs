//! The public red-black container.
//!
//! [`RbTree`] wraps a [`TreeBase`] and runs the fix-ups from
//! [`red_black::util`](super::util) after every structural change.

use std::cmp::Ordering;
use std::fmt;

use crate::alloc::{NodeAlloc, SlabArena};
use crate::config::TreeConfig;
use crate::cursor::Cursor;
use crate::error::Error;
use crate::iter::Iter;
use crate::key::{First, Identity, KeyOf};
use crate::tree::TreeBase;
use crate::util::{self, Search};

use super::types::RbNode;
use super::util as rb;
use super::verify::{verify, Violation};

/// Comparator type used when keys are ordered by [`Ord`].
pub type NaturalOrder<K> = fn(&K, &K) -> Ordering;

fn natural_order<K: Ord>(a: &K, b: &K) -> Ordering {
    a.cmp(b)
}

/// Ordered container of unique keys backed by a red-black tree.
///
/// `F` projects the key out of each stored value and `C` orders keys.
/// Nodes come from the allocator `A` and keep their handle until erased,
/// which is what keeps a [`Cursor`] valid across unrelated mutations.
pub struct RbTree<T, F = Identity, C = NaturalOrder<<F as KeyOf<T>>::Key>, A = SlabArena<RbNode<T>>>
where
    F: KeyOf<T>,
    A: NodeAlloc<RbNode<T>>,
{
    base: TreeBase<RbNode<T>, F, C, A>,
}

/// Set-like tree: values are their own keys.
pub type RbSet<T> = RbTree<T>;

/// Map-like tree over `(key, value)` pairs ordered by key.
pub type RbMapTree<K, V> = RbTree<(K, V), First>;

impl<T: Ord> RbTree<T> {
    pub fn new() -> Self {
        Self::with_key_of(Identity)
    }
}

impl<T, F> RbTree<T, F>
where
    F: KeyOf<T>,
    F::Key: Ord,
{
    pub fn with_key_of(key_of: F) -> Self {
        Self::with_config(TreeConfig::default(), key_of, natural_order::<F::Key>)
    }
}

impl<T, C> RbTree<T, Identity, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self::with_config(TreeConfig::default(), Identity, comparator)
    }
}

impl<T, F, C> RbTree<T, F, C>
where
    F: KeyOf<T>,
    C: Fn(&F::Key, &F::Key) -> Ordering,
{
    pub fn with_config(config: TreeConfig, key_of: F, comparator: C) -> Self {
        Self::with_allocator(SlabArena::with_config(&config), key_of, comparator)
    }
}

impl<T, F, C, A> RbTree<T, F, C, A>
where
    F: KeyOf<T>,
    A: NodeAlloc<RbNode<T>>,
{
    /// Builds an empty tree over `alloc`.
    ///
    /// Nodes already stored in `alloc` are not part of the tree.
    pub fn with_allocator(alloc: A, key_of: F, comparator: C) -> Self {
        Self {
            base: TreeBase::new(alloc, key_of, comparator),
        }
    }

    pub fn len(&self) -> usize {
        self.base.len()
    }

    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
    }

    /// Destroys every element.
    pub fn clear(&mut self) {
        self.base.clear();
    }

    /// Exchanges the contents, comparator, key strategy and allocator of
    /// two trees in constant time.
    pub fn swap(&mut self, other: &mut Self) {
        self.base.swap(&mut other.base);
    }

    pub fn comparator(&self) -> &C {
        self.base.comparator()
    }

    pub fn key_of(&self) -> &F {
        self.base.key_of()
    }

    pub fn allocator(&self) -> &A {
        self.base.arena()
    }

    /// Handle of the root node.
    pub fn root(&self) -> Option<u32> {
        self.base.root()
    }

    /// Node behind `handle`, for diagnostics.
    ///
    /// Panics if `handle` is not live.
    pub fn node(&self, handle: u32) -> &RbNode<T> {
        self.base.node(handle)
    }

    /// Cursor at the smallest element, or end when empty.
    pub fn begin(&self) -> Cursor {
        Cursor::new(self.base.first())
    }

    pub fn end(&self) -> Cursor {
        Cursor::END
    }

    /// Cursor at the in-order successor. End stays at end.
    pub fn next(&self, cursor: Cursor) -> Cursor {
        match cursor.handle() {
            Some(i) => Cursor::new(util::next(self.base.arena(), i)),
            None => Cursor::END,
        }
    }

    /// Cursor at the in-order predecessor. Moving back from end lands on
    /// the largest element; moving back from the smallest gives end.
    pub fn prev(&self, cursor: Cursor) -> Cursor {
        match cursor.handle() {
            Some(i) => Cursor::new(util::prev(self.base.arena(), i)),
            None => Cursor::new(self.base.last()),
        }
    }

    /// Value under `cursor`, `None` at end.
    ///
    /// A cursor whose node has been erased is stale. Reading it panics
    /// while the slot is vacant, but once a later insertion reuses the
    /// slot it silently yields that new element instead.
    pub fn get_at(&self, cursor: Cursor) -> Option<&T> {
        cursor.handle().map(|i| &self.base.node(i).value)
    }

    pub fn first(&self) -> Option<&T> {
        self.get_at(self.begin())
    }

    pub fn last(&self) -> Option<&T> {
        self.base.last().map(|i| &self.base.node(i).value)
    }

    pub fn iter(&self) -> Iter<'_, RbNode<T>, A> {
        Iter::new(self.base.arena(), self.base.root(), self.base.len())
    }

    /// Removes the node under `cursor` and returns a cursor at its
    /// successor. An end cursor is left alone and end is returned.
    pub fn erase_at(&mut self, cursor: Cursor) -> Cursor {
        let Some(i) = cursor.handle() else {
            return Cursor::END;
        };
        let successor = util::next(self.base.arena(), i);
        self.remove_node(i);
        Cursor::new(successor)
    }

    fn remove_node(&mut self, i: u32) -> T {
        rb::remove(&mut self.base.alloc, &mut self.base.root, i);
        self.base.release(i).value
    }
}

impl<T, F, C, A> RbTree<T, F, C, A>
where
    F: KeyOf<T>,
    C: Fn(&F::Key, &F::Key) -> Ordering,
    A: NodeAlloc<RbNode<T>>,
{
    /// Cursor at the element with `key`, or end.
    pub fn find(&self, key: &F::Key) -> Cursor {
        Cursor::new(self.base.find(key))
    }

    pub fn get(&self, key: &F::Key) -> Option<&T> {
        self.get_at(self.find(key))
    }

    /// Like [`get`](Self::get), but a missing key is an error.
    pub fn at(&self, key: &F::Key) -> Result<&T, Error> {
        self.get(key).ok_or(Error::KeyNotFound)
    }

    pub fn contains(&self, key: &F::Key) -> bool {
        self.base.find(key).is_some()
    }

    /// Number of elements with `key`: 0 or 1.
    pub fn count(&self, key: &F::Key) -> usize {
        usize::from(self.contains(key))
    }

    /// First element not less than `key`.
    pub fn lower_bound(&self, key: &F::Key) -> Cursor {
        Cursor::new(self.base.lower_bound(key))
    }

    /// First element strictly greater than `key`.
    pub fn upper_bound(&self, key: &F::Key) -> Cursor {
        Cursor::new(self.base.upper_bound(key))
    }

    pub fn equal_range(&self, key: &F::Key) -> (Cursor, Cursor) {
        (self.lower_bound(key), self.upper_bound(key))
    }

    /// Inserts `value` unless its key is already present.
    ///
    /// Returns the cursor of the element holding the key and whether
    /// `value` was inserted. On a duplicate `value` is dropped and the
    /// existing element is untouched. On allocation failure the tree is
    /// left exactly as it was.
    pub fn try_insert(&mut self, value: T) -> Result<(Cursor, bool), Error> {
        let (parent, side) = match self.base.search(self.base.key_of.key(&value)) {
            Search::Found(i) => return Ok((Cursor::at(i), false)),
            Search::Vacant { parent, side } => (parent, side),
        };
        let n = self.base.link(RbNode::new(value), parent, side)?;
        rb::insert_fixup(&mut self.base.alloc, &mut self.base.root, n);
        Ok((Cursor::at(n), true))
    }

    /// Infallible [`try_insert`](Self::try_insert).
    ///
    /// # Panics
    ///
    /// Panics if the allocator refuses the node, like `Vec::push` does on
    /// capacity overflow.
    pub fn insert(&mut self, value: T) -> (Cursor, bool) {
        match self.try_insert(value) {
            Ok(inserted) => inserted,
            Err(err) => panic!("insertion failed: {err}"),
        }
    }

    /// Builds the value from `args`, then inserts it.
    pub fn emplace<Args>(&mut self, args: Args) -> (Cursor, bool)
    where
        T: From<Args>,
    {
        self.insert(T::from(args))
    }

    /// Fallible construction followed by [`try_insert`](Self::try_insert).
    /// A construction failure leaves the tree untouched.
    pub fn try_emplace<Args>(&mut self, args: Args) -> Result<(Cursor, bool), Error>
    where
        T: TryFrom<Args>,
        <T as TryFrom<Args>>::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        let value = T::try_from(args).map_err(|err| Error::Construction(err.into()))?;
        self.try_insert(value)
    }

    /// Removes the element with `key`. Returns how many were removed.
    pub fn erase(&mut self, key: &F::Key) -> usize {
        usize::from(self.remove(key).is_some())
    }

    /// Removes the element with `key` and hands it back.
    pub fn remove(&mut self, key: &F::Key) -> Option<T> {
        let i = self.base.find(key)?;
        Some(self.remove_node(i))
    }

    /// Checks every structural rule of the tree.
    pub fn verify(&self) -> Result<(), Violation> {
        let key_of = &self.base.key_of;
        verify(
            self.base.arena(),
            self.base.root(),
            self.base.len(),
            |n: &RbNode<T>| key_of.key(&n.value),
            &self.base.comparator,
        )
    }
}

impl<T: Ord> Default for RbTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, F, C, A> Clone for RbTree<T, F, C, A>
where
    T: Clone,
    F: KeyOf<T> + Clone,
    C: Clone,
    A: NodeAlloc<RbNode<T>> + Clone,
{
    fn clone(&self) -> Self {
        Self {
            base: self.base.clone(),
        }
    }
}

impl<T, F, C, A> fmt::Debug for RbTree<T, F, C, A>
where
    T: fmt::Debug,
    F: KeyOf<T>,
    A: NodeAlloc<RbNode<T>>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, F, C, A> PartialEq for RbTree<T, F, C, A>
where
    T: PartialEq,
    F: KeyOf<T>,
    A: NodeAlloc<RbNode<T>>,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T, F, C, A> Eq for RbTree<T, F, C, A>
where
    T: Eq,
    F: KeyOf<T>,
    A: NodeAlloc<RbNode<T>>,
{
}

impl<T, F> FromIterator<T> for RbTree<T, F>
where
    F: KeyOf<T> + Default,
    F::Key: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::with_key_of(F::default());
        tree.extend(iter);
        tree
    }
}

impl<T, F, C, A> Extend<T> for RbTree<T, F, C, A>
where
    F: KeyOf<T>,
    C: Fn(&F::Key, &F::Key) -> Ordering,
    A: NodeAlloc<RbNode<T>>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T, F, C, A> IntoIterator for &'a RbTree<T, F, C, A>
where
    F: KeyOf<T>,
    A: NodeAlloc<RbNode<T>>,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, RbNode<T>, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
