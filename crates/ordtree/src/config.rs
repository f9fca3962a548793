/// Options for the default slab-backed node storage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TreeConfig {
    /// Number of node slots reserved up front. Default is 0.
    pub capacity: usize,
    /// Hard cap on live nodes. Insertions past it fail with
    /// [`AllocError::LimitReached`](crate::AllocError::LimitReached).
    /// Default is unbounded.
    pub node_limit: Option<usize>,
}

impl TreeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn node_limit(mut self, limit: usize) -> Self {
        self.node_limit = Some(limit);
        self
    }
}
