use crate::{catalog::Catalog, entities::*};

/// Cascading category path plus the selected tags of a spot draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    path: Vec<Id>,
    tags: Vec<Id>,
}

impl Selection {
    pub fn path(&self) -> &[Id] {
        &self.path
    }

    pub fn tags(&self) -> &[Id] {
        &self.tags
    }

    pub fn deepest_category(&self) -> Option<&Id> {
        self.path.last()
    }

    /// Selects `category` at the given zero-based `level`.
    ///
    /// The path is truncated to `level` entries before appending, so
    /// choosing a new root discards all sub-categories. Paths longer
    /// than [`Category::MAX_DEPTH`] keep their last entries. Selected
    /// tags that are not available for the new deepest category are
    /// dropped.
    pub fn select_category(&mut self, catalog: &Catalog, level: usize, category: Id) {
        self.path.truncate(level);
        self.path.push(category);
        if self.path.len() > Category::MAX_DEPTH {
            let excess = self.path.len() - Category::MAX_DEPTH;
            self.path.drain(..excess);
        }
        if level == 0 {
            self.tags.clear();
        } else {
            self.retain_available_tags(catalog);
        }
    }

    /// Tags available for the deepest selected category.
    pub fn available_tags<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Tag> {
        self.deepest_category()
            .map(|id| catalog.tags_of_category(id))
            .unwrap_or_default()
    }

    /// Toggles the tag and returns whether it is selected afterwards.
    pub fn toggle_tag(&mut self, tag: Id) -> bool {
        if let Some(idx) = self.tags.iter().position(|t| t == &tag) {
            self.tags.remove(idx);
            false
        } else {
            self.tags.push(tag);
            true
        }
    }

    /// A spot needs at least a category and a sub-category.
    pub fn is_submittable(&self) -> bool {
        self.path.len() >= 2
    }

    pub fn reset(&mut self) {
        self.path.clear();
        self.tags.clear();
    }

    fn retain_available_tags(&mut self, catalog: &Catalog) {
        let available: Vec<Id> = self
            .available_tags(catalog)
            .into_iter()
            .map(|t| t.id.clone())
            .collect();
        self.tags.retain(|t| available.contains(t));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::sample_catalog;

    fn ids(ids: &[Id]) -> Vec<&str> {
        ids.iter().map(Id::as_str).collect()
    }

    #[test]
    fn cascade_down_the_tree() {
        let catalog = sample_catalog();
        let mut sel = Selection::default();
        assert!(!sel.is_submittable());
        sel.select_category(&catalog, 0, "food".into());
        assert!(!sel.is_submittable());
        sel.select_category(&catalog, 1, "cafe".into());
        assert!(sel.is_submittable());
        sel.select_category(&catalog, 2, "espresso".into());
        assert_eq!(ids(sel.path()), vec!["food", "cafe", "espresso"]);
        assert_eq!(sel.deepest_category().map(Id::as_str), Some("espresso"));
    }

    #[test]
    fn choosing_a_level_truncates_the_path() {
        let catalog = sample_catalog();
        let mut sel = Selection::default();
        sel.select_category(&catalog, 0, "food".into());
        sel.select_category(&catalog, 1, "cafe".into());
        sel.select_category(&catalog, 2, "espresso".into());
        sel.select_category(&catalog, 1, "bakery".into());
        assert_eq!(ids(sel.path()), vec!["food", "bakery"]);
    }

    #[test]
    fn path_keeps_at_most_three_entries() {
        let catalog = sample_catalog();
        let mut sel = Selection::default();
        for (level, id) in ["a", "b", "c", "d"].into_iter().enumerate() {
            sel.select_category(&catalog, level, id.into());
        }
        assert_eq!(ids(sel.path()), vec!["b", "c", "d"]);
    }

    #[test]
    fn new_root_clears_sub_categories_and_tags() {
        let catalog = sample_catalog();
        let mut sel = Selection::default();
        sel.select_category(&catalog, 0, "food".into());
        sel.select_category(&catalog, 1, "cafe".into());
        assert!(sel.toggle_tag("wifi".into()));
        sel.select_category(&catalog, 0, "nature".into());
        assert_eq!(ids(sel.path()), vec!["nature"]);
        assert!(sel.tags().is_empty());
    }

    #[test]
    fn changing_sub_category_drops_unavailable_tags() {
        let catalog = sample_catalog();
        let mut sel = Selection::default();
        sel.select_category(&catalog, 0, "food".into());
        sel.select_category(&catalog, 1, "cafe".into());
        sel.toggle_tag("wifi".into());
        sel.toggle_tag("vegan".into());
        sel.select_category(&catalog, 1, "bakery".into());
        assert_eq!(ids(sel.tags()), vec!["vegan"]);
    }

    #[test]
    fn available_tags_of_deepest_category() {
        let catalog = sample_catalog();
        let mut sel = Selection::default();
        assert!(sel.available_tags(&catalog).is_empty());
        sel.select_category(&catalog, 0, "nature".into());
        sel.select_category(&catalog, 1, "park".into());
        let tags: Vec<_> = sel
            .available_tags(&catalog)
            .into_iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(tags, vec!["dogs"]);
    }

    #[test]
    fn toggle_tags_on_and_off() {
        let mut sel = Selection::default();
        assert!(sel.toggle_tag("wifi".into()));
        assert!(!sel.toggle_tag("wifi".into()));
        assert!(sel.tags().is_empty());
    }

    #[test]
    fn reset_selection() {
        let catalog = sample_catalog();
        let mut sel = Selection::default();
        sel.select_category(&catalog, 0, "food".into());
        sel.toggle_tag("wifi".into());
        sel.reset();
        assert_eq!(sel, Selection::default());
    }
}
