//! Node allocation strategies.
//!
//! A tree acquires every node from one [`NodeAlloc`] and hands it back
//! exactly once, on erase, clear or drop. Handles returned by
//! [`NodeAlloc::allocate`] must stay valid and unchanged until that
//! handle is deallocated.

use std::ops::{Index, IndexMut};

use slab::Slab;
use thiserror::Error;

use crate::config::TreeConfig;
use crate::types::Arena;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AllocError {
    #[error("node limit of {limit} reached")]
    LimitReached { limit: usize },
    #[error("node handle space exhausted")]
    HandleSpaceExhausted,
}

/// Pluggable node storage.
pub trait NodeAlloc<N>: Arena<N> {
    /// Stores `node` and returns its handle. On failure the node is
    /// dropped and the storage is left as it was.
    fn allocate(&mut self, node: N) -> Result<u32, AllocError>;

    /// Releases `handle` and returns the node that lived there.
    ///
    /// Panics if `handle` is not live.
    fn deallocate(&mut self, handle: u32) -> N;

    /// Number of live nodes.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Default storage: a [`Slab`] with free-slot reuse and an optional cap
/// on live nodes.
#[derive(Clone, Debug)]
pub struct SlabArena<N> {
    slab: Slab<N>,
    limit: Option<usize>,
}

impl<N> SlabArena<N> {
    pub fn new() -> Self {
        Self {
            slab: Slab::new(),
            limit: None,
        }
    }

    pub fn with_config(config: &TreeConfig) -> Self {
        let capacity = match config.node_limit {
            Some(limit) => config.capacity.min(limit),
            None => config.capacity,
        };
        Self {
            slab: Slab::with_capacity(capacity),
            limit: config.node_limit,
        }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn capacity(&self) -> usize {
        self.slab.capacity()
    }

    pub fn contains(&self, handle: u32) -> bool {
        self.slab.contains(handle as usize)
    }
}

impl<N> Default for SlabArena<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Index<u32> for SlabArena<N> {
    type Output = N;

    #[inline]
    fn index(&self, handle: u32) -> &N {
        &self.slab[handle as usize]
    }
}

impl<N> IndexMut<u32> for SlabArena<N> {
    #[inline]
    fn index_mut(&mut self, handle: u32) -> &mut N {
        &mut self.slab[handle as usize]
    }
}

impl<N> NodeAlloc<N> for SlabArena<N> {
    fn allocate(&mut self, node: N) -> Result<u32, AllocError> {
        if let Some(limit) = self.limit {
            if self.slab.len() >= limit {
                return Err(AllocError::LimitReached { limit });
            }
        }
        let entry = self.slab.vacant_entry();
        let handle = u32::try_from(entry.key()).map_err(|_| AllocError::HandleSpaceExhausted)?;
        entry.insert(node);
        Ok(handle)
    }

    fn deallocate(&mut self, handle: u32) -> N {
        self.slab.remove(handle as usize)
    }

    fn len(&self) -> usize {
        self.slab.len()
    }
}
