//! Ordered unique-key containers built on an arena-backed red-black tree.
//!
//! Nodes live in a pluggable allocator and link to each other through
//! `Option<u32>` handles, so rotations only rewrite handle fields and a
//! [`Cursor`] stays valid until its own element is erased.
//!
//! ```
//! use ordtree::RbSet;
//!
//! let mut set = RbSet::new();
//! for v in [8, 3, 10, 1, 6] {
//!     set.insert(v);
//! }
//! set.erase(&3);
//! assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![1, 6, 8, 10]);
//! assert!(set.verify().is_ok());
//! ```
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Node`] / [`ValueNode`] link traits, [`Side`], [`Arena`] |
//! [`key`] | [`KeyOf`] strategies: [`Identity`], [`First`] |
//! [`alloc`] | [`NodeAlloc`] strategy and the default [`SlabArena`] |
//! [`config`] | [`TreeConfig`] capacity and node limit |
//! [`util`] | traversal, search, rotations, transplant |
//! [`tree`] | [`TreeBase`](tree::TreeBase): ownership and bookkeeping |
//! [`red_black`] | fix-ups, removal, verification and [`RbTree`] |
//! [`cursor`] / [`iter`] | detached positions and borrowing iteration |
//! [`error`] | [`Error`] |

pub mod alloc;
pub mod config;
pub mod cursor;
pub mod error;
pub mod iter;
pub mod key;
pub mod red_black;
pub mod tree;
pub mod types;
pub mod util;

pub use alloc::{AllocError, NodeAlloc, SlabArena};
pub use config::TreeConfig;
pub use cursor::Cursor;
pub use error::Error;
pub use iter::Iter;
pub use key::{First, Identity, KeyOf};
pub use red_black::{Color, NaturalOrder, RbMapTree, RbNode, RbSet, RbTree, Violation};
pub use types::{Arena, Node, Side, ValueNode};
