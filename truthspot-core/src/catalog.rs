use std::collections::HashSet;

use crate::entities::*;

/// The read-only category and tag lists fetched from the backend.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    categories: Vec<Category>,
    tags: Vec<Tag>,
    category_tags: Vec<CategoryTag>,
}

impl Catalog {
    pub fn new(categories: Vec<Category>, tags: Vec<Tag>, category_tags: Vec<CategoryTag>) -> Self {
        Self {
            categories,
            tags,
            category_tags,
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn category(&self, id: &Id) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    pub fn tag(&self, id: &Id) -> Option<&Tag> {
        self.tags.iter().find(|t| &t.id == id)
    }

    pub fn root_categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter().filter(|c| c.is_root())
    }

    pub fn child_categories<'a>(&'a self, parent: &'a Id) -> impl Iterator<Item = &'a Category> {
        self.categories
            .iter()
            .filter(move |c| c.parent.as_ref() == Some(parent))
    }

    /// Tags associated with the given category, in catalog order.
    pub fn tags_of_category(&self, category: &Id) -> Vec<&Tag> {
        let tag_ids: HashSet<&Id> = self
            .category_tags
            .iter()
            .filter(|ct| &ct.category == category)
            .map(|ct| &ct.tag)
            .collect();
        self.tags.iter().filter(|t| tag_ids.contains(&t.id)).collect()
    }

    /// Icon of the category of a spot, falling back to the default icon.
    pub fn category_icon<'a>(&'a self, spot: &'a Spot) -> &'a str {
        spot.expanded_category
            .as_ref()
            .or_else(|| spot.category.as_ref().and_then(|id| self.category(id)))
            .map_or(Category::DEFAULT_ICON, Category::icon)
    }

    /// Path from the root down to the given category.
    pub fn category_path(&self, id: &Id) -> Vec<&Category> {
        let mut path = Vec::with_capacity(Category::MAX_DEPTH);
        let mut next = self.category(id);
        while let Some(category) = next {
            if path.iter().any(|c: &&Category| c.id == category.id) {
                log::warn!("Cyclic category hierarchy at {}", category.id);
                break;
            }
            path.push(category);
            next = category.parent.as_ref().and_then(|p| self.category(p));
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use truthspot_entities::builders::*;

    pub fn sample_catalog() -> Catalog {
        let categories = vec![
            Category::build().id("food").name("Food").icon("🍽️").finish(),
            Category::build()
                .id("cafe")
                .name("Cafe")
                .icon("☕")
                .parent("food")
                .finish(),
            Category::build()
                .id("bakery")
                .name("Bakery")
                .icon("🥐")
                .parent("food")
                .finish(),
            Category::build()
                .id("espresso")
                .name("Espresso bar")
                .parent("cafe")
                .finish(),
            Category::build().id("nature").name("Nature").icon("🌲").finish(),
            Category::build()
                .id("park")
                .name("Park")
                .parent("nature")
                .finish(),
        ];
        let tags = vec![
            Tag {
                id: "wifi".into(),
                name: "Wifi".into(),
                icon: "📶".into(),
            },
            Tag {
                id: "vegan".into(),
                name: "Vegan".into(),
                icon: "🌱".into(),
            },
            Tag {
                id: "dogs".into(),
                name: "Dogs allowed".into(),
                icon: "🐕".into(),
            },
        ];
        let category_tags = vec![
            CategoryTag {
                id: "ct1".into(),
                category: "cafe".into(),
                tag: "wifi".into(),
            },
            CategoryTag {
                id: "ct2".into(),
                category: "cafe".into(),
                tag: "vegan".into(),
            },
            CategoryTag {
                id: "ct3".into(),
                category: "bakery".into(),
                tag: "vegan".into(),
            },
            CategoryTag {
                id: "ct4".into(),
                category: "park".into(),
                tag: "dogs".into(),
            },
        ];
        Catalog::new(categories, tags, category_tags)
    }

    #[test]
    fn roots_and_children() {
        let catalog = sample_catalog();
        let roots: Vec<_> = catalog.root_categories().map(|c| c.id.as_str()).collect();
        assert_eq!(roots, vec!["food", "nature"]);
        let food: Id = "food".into();
        let children: Vec<_> = catalog.child_categories(&food).map(|c| c.id.as_str()).collect();
        assert_eq!(children, vec!["cafe", "bakery"]);
    }

    #[test]
    fn tags_via_join_entity() {
        let catalog = sample_catalog();
        let tags: Vec<_> = catalog
            .tags_of_category(&"cafe".into())
            .into_iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(tags, vec!["wifi", "vegan"]);
        assert!(catalog.tags_of_category(&"food".into()).is_empty());
    }

    #[test]
    fn icon_of_spot_category() {
        let catalog = sample_catalog();
        let spot = Spot::build().category("cafe").finish();
        assert_eq!(catalog.category_icon(&spot), "☕");
        let spot = Spot::build().category("espresso").finish();
        assert_eq!(catalog.category_icon(&spot), Category::DEFAULT_ICON);
        let spot = Spot::build().category("unknown").finish();
        assert_eq!(catalog.category_icon(&spot), Category::DEFAULT_ICON);
    }

    #[test]
    fn icon_of_expanded_category_outlives_catalog_lookup() {
        let catalog = sample_catalog();
        let mut spot = Spot::build().category("market").finish();
        spot.expanded_category = Some(Category::build().id("market").name("Market").icon("🧺").finish());
        let icon = catalog.category_icon(&spot);
        assert_eq!(icon, "🧺");
    }

    #[test]
    fn path_to_root() {
        let catalog = sample_catalog();
        let path: Vec<_> = catalog
            .category_path(&"espresso".into())
            .into_iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(path, vec!["food", "cafe", "espresso"]);
    }
}
