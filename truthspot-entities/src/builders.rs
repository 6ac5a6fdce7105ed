pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{category_builder::*, spot_builder::*};

pub mod spot_builder {

    use super::*;
    use crate::{geo::*, id::*, spot::*, time::*};

    #[derive(Debug)]
    pub struct SpotBuild {
        spot: Spot,
    }

    impl SpotBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.spot.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.spot.name = name.into();
            self
        }
        pub fn description(mut self, desc: &str) -> Self {
            self.spot.description = desc.into();
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.spot.pos = pos;
            self
        }
        pub fn category(mut self, category: &str) -> Self {
            self.spot.category = Some(category.into());
            self
        }
        pub fn owner(mut self, owner: &str) -> Self {
            self.spot.owner = owner.into();
            self
        }
        pub fn private(mut self) -> Self {
            self.spot.visibility = Visibility::Private;
            self
        }
        pub fn created(mut self, created: Timestamp) -> Self {
            self.spot.created = created;
            self
        }
        pub fn tags(mut self, tags: Vec<&str>) -> Self {
            self.spot.tags = tags.into_iter().map(Id::from).collect();
            self
        }
        pub fn finish(self) -> Spot {
            self.spot
        }
    }

    impl Builder for Spot {
        type Build = SpotBuild;
        fn build() -> SpotBuild {
            SpotBuild {
                spot: Spot {
                    id: Default::default(),
                    name: Default::default(),
                    description: Default::default(),
                    pos: MapPoint::from_lat_lng_deg(0, 0),
                    category: None,
                    owner: Default::default(),
                    visibility: Visibility::Public,
                    created: Timestamp::now(),
                    tags: vec![],
                    expanded_category: None,
                },
            }
        }
    }
}

pub mod category_builder {

    use super::*;
    use crate::category::*;

    #[derive(Debug)]
    pub struct CategoryBuild {
        category: Category,
    }

    impl CategoryBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.category.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.category.name = name.into();
            self
        }
        pub fn icon(mut self, icon: &str) -> Self {
            self.category.icon = icon.into();
            self
        }
        pub fn parent(mut self, parent: &str) -> Self {
            self.category.parent = Some(parent.into());
            self
        }
        pub fn finish(self) -> Category {
            self.category
        }
    }

    impl Builder for Category {
        type Build = CategoryBuild;
        fn build() -> CategoryBuild {
            CategoryBuild {
                category: Category {
                    id: Default::default(),
                    name: Default::default(),
                    icon: Default::default(),
                    parent: None,
                },
            }
        }
    }
}
