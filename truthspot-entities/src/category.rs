use crate::id::Id;

/// A node in the shallow category tree.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Category {
    pub id: Id,
    pub name: String,
    pub icon: String,
    pub parent: Option<Id>,
}

impl Category {
    /// Maximum depth of the category tree.
    pub const MAX_DEPTH: usize = 3;

    pub const DEFAULT_ICON: &'static str = "📍";

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn icon(&self) -> &str {
        if self.icon.is_empty() {
            Self::DEFAULT_ICON
        } else {
            &self.icon
        }
    }
}
