/// A position in a tree: a node handle, or one past the last element.
///
/// Cursors are detached from the tree's borrow, so they survive
/// insertions and erasures of other elements. A cursor is invalidated
/// only when the node it points to is erased or the tree is cleared or
/// dropped. Use the owning tree's `get_at`, `next` and `prev` to read and
/// move it.
///
/// Invalidation is not detected. Erased handles are reused by later
/// insertions, so a stale cursor may end up addressing an unrelated
/// element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cursor {
    node: Option<u32>,
}

impl Cursor {
    /// The end position.
    pub const END: Cursor = Cursor { node: None };

    #[inline]
    pub(crate) fn new(node: Option<u32>) -> Self {
        Self { node }
    }

    #[inline]
    pub(crate) fn at(node: u32) -> Self {
        Self { node: Some(node) }
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        self.node.is_none()
    }

    /// Arena handle of the referenced node, `None` at end.
    #[inline]
    pub fn handle(&self) -> Option<u32> {
        self.node
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::END
    }
}
