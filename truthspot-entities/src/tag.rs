use crate::id::Id;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Tag {
    pub id: Id,
    pub name: String,
    pub icon: String,
}

impl Tag {
    pub const DEFAULT_ICON: &'static str = "🏷️";
    pub const UNKNOWN_NAME: &'static str = "Unknown Tag";
}

/// Join entity associating a tag with a category.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CategoryTag {
    pub id: Id,
    pub category: Id,
    pub tag: Id,
}
