use super::*;
use thiserror::Error;
use truthspot_entities as e;

#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("Invalid position of record {id}: {lat},{lng}")]
    Position { id: String, lat: f64, lng: f64 },
    #[error("Invalid timestamp of record {id}: {source}")]
    Timestamp {
        id: String,
        source: e::time::TimestampParseError,
    },
}

fn non_empty_id(id: String) -> Option<e::id::Id> {
    (!id.is_empty()).then(|| id.into())
}

impl From<Category> for e::category::Category {
    fn from(from: Category) -> Self {
        let Category {
            id,
            name,
            icon,
            parent_spot_category,
        } = from;
        Self {
            id: id.into(),
            name,
            icon,
            parent: non_empty_id(parent_spot_category),
        }
    }
}

impl From<Tag> for e::tag::Tag {
    fn from(from: Tag) -> Self {
        let Tag { id, name, icon } = from;
        Self {
            id: id.into(),
            name,
            icon,
        }
    }
}

impl From<CategoryTag> for e::tag::CategoryTag {
    fn from(from: CategoryTag) -> Self {
        let CategoryTag {
            id,
            spot_category_id,
            spot_tag_id,
        } = from;
        Self {
            id: id.into(),
            category: spot_category_id.into(),
            tag: spot_tag_id.into(),
        }
    }
}

impl From<User> for e::user::User {
    fn from(from: User) -> Self {
        let User {
            id,
            email,
            name,
            username,
            is_admin,
            verified: _,
        } = from;
        Self {
            id: id.into(),
            email,
            name,
            username,
            role: e::user::Role::from_admin_flag(is_admin),
        }
    }
}

impl TryFrom<Spot> for e::spot::Spot {
    type Error = ConversionError;
    fn try_from(from: Spot) -> Result<Self, Self::Error> {
        let Spot {
            id,
            name,
            description,
            lat,
            lng,
            category,
            user,
            is_public,
            created,
            updated: _,
            tags,
            expand,
        } = from;
        let Some(pos) = e::geo::MapPoint::try_from_lat_lng_deg(lat, lng) else {
            return Err(ConversionError::Position { id, lat, lng });
        };
        let created = match e::time::Timestamp::parse(&created) {
            Ok(created) => created,
            Err(source) => return Err(ConversionError::Timestamp { id, source }),
        };
        Ok(Self {
            id: id.into(),
            name,
            description,
            pos,
            category: non_empty_id(category),
            owner: user.into(),
            visibility: e::spot::Visibility::from_public_flag(is_public),
            created,
            tags: tags.into_iter().map(Into::into).collect(),
            expanded_category: expand.and_then(|expand| expand.category).map(Into::into),
        })
    }
}

impl From<&e::spot::NewSpot> for NewSpot {
    fn from(from: &e::spot::NewSpot) -> Self {
        let (lat, lng) = from.pos.to_lat_lng_deg();
        Self {
            name: from.name.clone(),
            description: from.description.clone(),
            lat,
            lng,
            category: from.category.to_string(),
            user: from.owner.to_string(),
            is_public: from.visibility.is_public(),
            tags: from.tags.iter().map(ToString::to_string).collect(),
        }
    }
}

impl From<e::spot::Visibility> for UpdateVisibility {
    fn from(from: e::spot::Visibility) -> Self {
        Self {
            is_public: from.is_public(),
        }
    }
}
