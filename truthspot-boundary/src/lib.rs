//! Records of the PocketBase collections used by TruthSpot.
//!
//! Field names follow the backend schema, which mixes `camelCase`
//! and `snake_case`.

use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[cfg(feature = "entity-conversions")]
pub use conv::ConversionError;

pub const SPOTS: &str = "spots";
pub const SPOT_CATEGORIES: &str = "spot_categories";
pub const SPOT_TAGS: &str = "spot_tags";
pub const SPOT_CATEGORY_TAGS: &str = "spot_category_tags";
pub const USERS: &str = "users";

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Spot {
    pub id          : String,
    pub name        : String,
    #[serde(default)]
    pub description : String,
    pub lat         : f64,
    pub lng         : f64,
    #[serde(default)]
    pub category    : String,
    pub user        : String,
    #[serde(rename = "isPublic", default)]
    pub is_public   : bool,
    pub created     : String,
    #[serde(default)]
    pub updated     : String,
    #[serde(default)]
    pub tags        : Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expand      : Option<SpotExpand>,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct SpotExpand {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NewSpot {
    pub name        : String,
    pub description : String,
    pub lat         : f64,
    pub lng         : f64,
    pub category    : String,
    pub user        : String,
    #[serde(rename = "isPublic")]
    pub is_public   : bool,
    pub tags        : Vec<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
pub struct UpdateVisibility {
    #[serde(rename = "isPublic")]
    pub is_public: bool,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    /// Empty for root categories.
    #[serde(default)]
    pub parent_spot_category: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Tag {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct CategoryTag {
    pub id: String,
    pub spot_category_id: String,
    pub spot_tag_id: String,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct User {
    pub id       : String,
    #[serde(default)]
    pub email    : String,
    #[serde(default)]
    pub name     : String,
    #[serde(default)]
    pub username : String,
    #[serde(rename = "isAdmin", default)]
    pub is_admin : bool,
    #[serde(default)]
    pub verified : bool,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewUser {
    pub email: String,
    pub password: String,
    #[serde(rename = "passwordConfirm")]
    pub password_confirm: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct PasswordAuth {
    /// Email or username.
    pub identity: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct AuthResponse {
    pub token: String,
    pub record: User,
}

/// One page of a record list.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct ListResult<T> {
    pub page: u32,
    pub per_page: u32,
    pub total_items: i64,
    pub total_pages: i64,
    pub items: Vec<T>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct AuthProvider {
    pub name: String,
    #[serde(default, rename = "displayName")]
    pub display_name: String,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct OAuth2Methods {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub providers: Vec<AuthProvider>,
}

/// Available authentication methods of an auth collection.
///
/// Older backends list the providers at the top level,
/// newer ones below `oauth2`.
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct AuthMethods {
    #[serde(default, rename = "authProviders")]
    pub auth_providers: Vec<AuthProvider>,
    #[serde(default)]
    pub oauth2: OAuth2Methods,
}

impl AuthMethods {
    pub fn provider_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for provider in self.auth_providers.iter().chain(&self.oauth2.providers) {
            if !names.contains(&provider.name) {
                names.push(provider.name.clone());
            }
        }
        names
    }
}

/// Error body of a failed request.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct ErrorResponse {
    #[serde(alias = "status")]
    pub code: u16,
    pub message: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_spot_list_with_expanded_category() {
        let json = r#"{
            "page": 1,
            "perPage": 1000,
            "totalItems": 1,
            "totalPages": 1,
            "items": [{
                "collectionId": "abc",
                "collectionName": "spots",
                "id": "s1",
                "name": "Corner cafe",
                "description": "Good coffee",
                "lat": 40.7128,
                "lng": -74.006,
                "category": "c1",
                "user": "u1",
                "isPublic": false,
                "created": "2024-03-01 18:04:12.345Z",
                "updated": "2024-03-01 18:04:12.345Z",
                "tags": ["t1", "t2"],
                "expand": {
                    "category": {
                        "id": "c1",
                        "name": "Cafe",
                        "icon": "☕",
                        "parent_spot_category": "c0"
                    }
                }
            }]
        }"#;
        let list: ListResult<Spot> = serde_json::from_str(json).unwrap();
        assert_eq!(list.per_page, 1000);
        let spot = &list.items[0];
        assert!(!spot.is_public);
        assert_eq!(spot.tags, vec!["t1", "t2"]);
        let category = spot.expand.as_ref().and_then(|e| e.category.as_ref()).unwrap();
        assert_eq!(category.parent_spot_category, "c0");
    }

    #[test]
    fn serialize_new_spot_with_backend_field_names() {
        let spot = NewSpot {
            name: "n".into(),
            description: "d".into(),
            lat: 1.0,
            lng: 2.0,
            category: "c".into(),
            user: "u".into(),
            is_public: true,
            tags: vec![],
        };
        let json = serde_json::to_value(&spot).unwrap();
        assert_eq!(json["isPublic"], serde_json::Value::Bool(true));
        assert!(json.get("is_public").is_none());
    }

    #[test]
    fn provider_names_of_old_and_new_backends() {
        let old: AuthMethods =
            serde_json::from_str(r#"{"usernamePassword":false,"emailPassword":true,"authProviders":[{"name":"google"}]}"#)
                .unwrap();
        assert_eq!(old.provider_names(), vec!["google"]);
        let new: AuthMethods = serde_json::from_str(
            r#"{"password":{"enabled":true},"oauth2":{"enabled":true,"providers":[{"name":"github","displayName":"GitHub"}]}}"#,
        )
        .unwrap();
        assert_eq!(new.provider_names(), vec!["github"]);
    }

    #[test]
    fn deserialize_error_response() {
        let err: ErrorResponse =
            serde_json::from_str(r#"{"code":403,"message":"Only admins can perform this action.","data":{}}"#)
                .unwrap();
        assert_eq!(err.code, 403);
        let err: ErrorResponse = serde_json::from_str(r#"{"status":400,"message":"Failed"}"#).unwrap();
        assert_eq!(err.code, 400);
        assert!(err.data.is_null());
    }
}
