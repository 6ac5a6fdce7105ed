// Access to the hosted backend.
// The traits only describe *what* is requested; how filter
// expressions are rendered is up to the implementation.

use async_trait::async_trait;

use super::Result;
use crate::entities::*;

/// Restricts the spots a caller may retrieve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessFilter {
    /// Administrators see everything.
    Unrestricted,
    /// Public spots plus the private spots of the given user, if any.
    PublicOrOwnedBy(Option<Id>),
}

impl AccessFilter {
    pub fn for_identity(identity: &Identity) -> Self {
        match identity {
            Identity::Admin(_) => Self::Unrestricted,
            Identity::User(id) => Self::PublicOrOwnedBy(Some(id.clone())),
            Identity::Anonymous => Self::PublicOrOwnedBy(None),
        }
    }

    pub fn permits(&self, spot: &Spot) -> bool {
        match self {
            Self::Unrestricted => true,
            Self::PublicOrOwnedBy(owner) => {
                spot.visibility.is_public() || owner.as_ref().is_some_and(|id| spot.is_owned_by(id))
            }
        }
    }
}

/// A single page of spots, newest first.
#[derive(Debug, Clone, PartialEq)]
pub struct SpotQuery {
    pub bbox: Option<MapBbox>,
    pub owner: Option<Id>,
    pub access: AccessFilter,
    pub limit: u32,
    pub expand_category: bool,
}

impl SpotQuery {
    /// Checks the query predicates against a spot.
    pub fn matches(&self, spot: &Spot) -> bool {
        let Self {
            bbox,
            owner,
            access,
            limit: _,
            expand_category: _,
        } = self;
        bbox.as_ref().map_or(true, |bbox| {
            // The backend compares plain numbers
            let (lat, lng) = spot.pos.to_lat_lng_deg();
            let (sw_lat, sw_lng) = bbox.southwest().to_lat_lng_deg();
            let (ne_lat, ne_lng) = bbox.northeast().to_lat_lng_deg();
            lat >= sw_lat && lat <= ne_lat && lng >= sw_lng && lng <= ne_lng
        }) && owner.as_ref().map_or(true, |id| spot.is_owned_by(id))
            && access.permits(spot)
    }
}

#[async_trait]
pub trait SpotGateway: Send + Sync {
    async fn query_spots(&self, query: &SpotQuery) -> Result<Vec<Spot>>;
    async fn get_spot(&self, id: &Id, expand_category: bool) -> Result<Spot>;
    async fn create_spot(&self, spot: &NewSpot) -> Result<Spot>;
    async fn update_spot_visibility(&self, id: &Id, visibility: Visibility) -> Result<Spot>;
    async fn delete_spot(&self, id: &Id) -> Result<()>;
}

#[async_trait]
pub trait CatalogGateway: Send + Sync {
    async fn all_categories(&self) -> Result<Vec<Category>>;
    async fn all_tags(&self) -> Result<Vec<Tag>>;
    async fn all_category_tags(&self) -> Result<Vec<CategoryTag>>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// A successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authenticated {
    pub user: User,
    pub token: String,
}

#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> Result<Authenticated>;
    async fn register(&self, credentials: &Credentials) -> Result<User>;
    /// Names of the configured OAuth2 providers.
    async fn auth_providers(&self) -> Result<Vec<String>>;
}
