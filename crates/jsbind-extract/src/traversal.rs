//! Traversal control returned by the symbol visitors.

/// Whether the walker should visit a symbol's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    /// Visit the children next.
    Descend,
    /// The visitor handled the children itself, or they are out of scope.
    SkipChildren,
}

impl Traversal {
    pub fn descends(self) -> bool {
        matches!(self, Traversal::Descend)
    }
}
