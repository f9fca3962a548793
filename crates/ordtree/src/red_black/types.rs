use crate::types::{Node, ValueNode};

/// Node color. Absent children count as black.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

/// Red-black tree node.
#[derive(Clone, Debug)]
pub struct RbNode<T> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub value: T,
    pub color: Color,
}

impl<T> RbNode<T> {
    /// A detached red node.
    pub fn new(value: T) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            value,
            color: Color::Red,
        }
    }
}

impl<T> Node for RbNode<T> {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

impl<T> ValueNode for RbNode<T> {
    type Value = T;

    fn value(&self) -> &T {
        &self.value
    }

    fn into_value(self) -> T {
        self.value
    }
}

/// Red-black specific node behavior.
pub trait RbNodeLike: Node {
    fn color(&self) -> Color;
    fn set_color(&mut self, color: Color);

    #[inline]
    fn is_black(&self) -> bool {
        self.color() == Color::Black
    }
}

impl<T> RbNodeLike for RbNode<T> {
    fn color(&self) -> Color {
        self.color
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}
