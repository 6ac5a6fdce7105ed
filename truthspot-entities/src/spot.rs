use crate::{category::Category, geo::*, id::*, time::*};

/// Who is allowed to see a spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

impl Visibility {
    pub const fn is_public(self) -> bool {
        matches!(self, Self::Public)
    }

    pub const fn from_public_flag(is_public: bool) -> Self {
        if is_public {
            Self::Public
        } else {
            Self::Private
        }
    }
}

/// A user-submitted point of interest.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Spot {
    pub id          : Id,
    pub name        : String,
    pub description : String,
    pub pos         : MapPoint,
    pub category    : Option<Id>,
    pub owner       : Id,
    pub visibility  : Visibility,
    pub created     : Timestamp,
    pub tags        : Vec<Id>,
    /// The category record if it has been expanded by the backend.
    pub expanded_category: Option<Category>,
}

impl Spot {
    pub fn is_owned_by(&self, user_id: &Id) -> bool {
        &self.owner == user_id
    }
}

/// The fields of a spot before the backend has assigned id and timestamp.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct NewSpot {
    pub name        : String,
    pub description : String,
    pub pos         : MapPoint,
    pub category    : Id,
    pub owner       : Id,
    pub visibility  : Visibility,
    pub tags        : Vec<Id>,
}
