//! Red-black balancing on top of [`TreeBase`](crate::tree::TreeBase).

pub mod rb_tree;
pub mod types;
pub mod util;
pub mod verify;

pub use rb_tree::{NaturalOrder, RbMapTree, RbSet, RbTree};
pub use types::{Color, RbNode, RbNodeLike};
pub use util::{erase_fixup, insert_fixup, remove, Slot};
pub use verify::{verify, Violation};
