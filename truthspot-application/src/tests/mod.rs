pub mod prelude {
    use std::{
        sync::{
            atomic::{AtomicBool, AtomicUsize, Ordering},
            Mutex,
        },
        time::Duration,
    };

    use async_trait::async_trait;
    use truthspot_core::gateways::{self, Error as GatewayError};

    pub use crate::{
        error::{AppError, BError},
        session::Session,
    };
    pub use truthspot_core::{entities::*, gateways::backend::*, usecases};

    type GwResult<T> = gateways::Result<T>;

    pub fn spot_at(id: &str, lat: f64, lng: f64) -> Spot {
        Spot {
            id: id.into(),
            name: id.into(),
            description: String::new(),
            pos: MapPoint::from_lat_lng_deg(lat, lng),
            category: None,
            owner: "someone".into(),
            visibility: Visibility::Public,
            created: Timestamp::now(),
            tags: vec![],
            expanded_category: None,
        }
    }

    /// A backend that keeps all records in memory.
    #[derive(Default)]
    pub struct InMemoryBackend {
        spots: Mutex<Vec<Spot>>,
        categories: Mutex<Vec<Category>>,
        users: Mutex<Vec<(User, String)>>,
        queries: Mutex<Vec<SpotQuery>>,
        latency: Option<Duration>,
        failing: AtomicBool,
        next_id: AtomicUsize,
    }

    impl InMemoryBackend {
        pub fn with_catalog() -> Self {
            let backend = Self::default();
            *backend.categories.lock().unwrap() = vec![
                Category {
                    id: "food".into(),
                    name: "Food".into(),
                    icon: "🍽️".into(),
                    parent: None,
                },
                Category {
                    id: "cafe".into(),
                    name: "Cafe".into(),
                    icon: "☕".into(),
                    parent: Some("food".into()),
                },
            ];
            backend
        }

        pub fn with_latency(mut self, latency: Duration) -> Self {
            self.latency = Some(latency);
            self
        }

        pub fn fail_queries(&self, failing: bool) {
            self.failing.store(failing, Ordering::SeqCst);
        }

        pub fn insert(&self, spot: Spot) {
            self.spots.lock().unwrap().push(spot);
        }

        pub fn query_count(&self) -> usize {
            self.queries.lock().unwrap().len()
        }

        pub fn last_query(&self) -> Option<SpotQuery> {
            self.queries.lock().unwrap().last().cloned()
        }

        /// Signs in a new user named `name`.
        pub async fn session(&self, name: &str, admin: bool) -> Session {
            let credentials = Credentials {
                email: format!("{name}@example.com"),
                password: "password".into(),
            };
            let user = User {
                id: name.into(),
                email: credentials.email.clone(),
                name: name.into(),
                username: name.into(),
                role: Role::from_admin_flag(admin),
            };
            self.users
                .lock()
                .unwrap()
                .push((user, credentials.password.clone()));
            self.login(&credentials).await.unwrap().into()
        }

        fn next_id(&self) -> Id {
            format!("rec{}", self.next_id.fetch_add(1, Ordering::SeqCst)).into()
        }

        fn expand(&self, mut spot: Spot) -> Spot {
            let categories = self.categories.lock().unwrap();
            spot.expanded_category = spot
                .category
                .as_ref()
                .and_then(|id| categories.iter().find(|c| &c.id == id).cloned());
            spot
        }

        fn find(&self, id: &Id) -> GwResult<Spot> {
            self.spots
                .lock()
                .unwrap()
                .iter()
                .find(|s| &s.id == id)
                .cloned()
                .ok_or(GatewayError::NotFound)
        }
    }

    #[async_trait]
    impl SpotGateway for InMemoryBackend {
        async fn query_spots(&self, query: &SpotQuery) -> GwResult<Vec<Spot>> {
            self.queries.lock().unwrap().push(query.clone());
            if let Some(latency) = self.latency {
                tokio::time::sleep(latency).await;
            }
            if self.failing.load(Ordering::SeqCst) {
                return Err(GatewayError::Transport("connection refused".into()));
            }
            let mut spots: Vec<_> = self
                .spots
                .lock()
                .unwrap()
                .iter()
                .filter(|s| query.matches(s))
                .cloned()
                .collect();
            spots.sort_by(|a, b| b.created.cmp(&a.created));
            spots.truncate(query.limit as usize);
            if query.expand_category {
                spots = spots.into_iter().map(|s| self.expand(s)).collect();
            }
            Ok(spots)
        }

        async fn get_spot(&self, id: &Id, expand_category: bool) -> GwResult<Spot> {
            let spot = self.find(id)?;
            Ok(if expand_category {
                self.expand(spot)
            } else {
                spot
            })
        }

        async fn create_spot(&self, new_spot: &NewSpot) -> GwResult<Spot> {
            let NewSpot {
                name,
                description,
                pos,
                category,
                owner,
                visibility,
                tags,
            } = new_spot.clone();
            let spot = Spot {
                id: self.next_id(),
                name,
                description,
                pos,
                category: Some(category),
                owner,
                visibility,
                created: Timestamp::now(),
                tags,
                expanded_category: None,
            };
            self.insert(spot.clone());
            Ok(spot)
        }

        async fn update_spot_visibility(&self, id: &Id, visibility: Visibility) -> GwResult<Spot> {
            let mut spots = self.spots.lock().unwrap();
            let spot = spots
                .iter_mut()
                .find(|s| &s.id == id)
                .ok_or(GatewayError::NotFound)?;
            spot.visibility = visibility;
            Ok(spot.clone())
        }

        async fn delete_spot(&self, id: &Id) -> GwResult<()> {
            let mut spots = self.spots.lock().unwrap();
            let idx = spots
                .iter()
                .position(|s| &s.id == id)
                .ok_or(GatewayError::NotFound)?;
            spots.remove(idx);
            Ok(())
        }
    }

    #[async_trait]
    impl CatalogGateway for InMemoryBackend {
        async fn all_categories(&self) -> GwResult<Vec<Category>> {
            Ok(self.categories.lock().unwrap().clone())
        }

        async fn all_tags(&self) -> GwResult<Vec<Tag>> {
            Ok(vec![Tag {
                id: "wifi".into(),
                name: "Wifi".into(),
                icon: "📶".into(),
            }])
        }

        async fn all_category_tags(&self) -> GwResult<Vec<CategoryTag>> {
            Ok(vec![CategoryTag {
                id: "ct1".into(),
                category: "cafe".into(),
                tag: "wifi".into(),
            }])
        }
    }

    #[async_trait]
    impl AuthGateway for InMemoryBackend {
        async fn login(&self, credentials: &Credentials) -> GwResult<Authenticated> {
            self.users
                .lock()
                .unwrap()
                .iter()
                .find(|(u, pw)| u.email == credentials.email && pw == &credentials.password)
                .map(|(user, _)| Authenticated {
                    user: user.clone(),
                    token: format!("token-{}", user.id),
                })
                .ok_or_else(|| GatewayError::Rejected {
                    status: 400,
                    message: "Failed to authenticate.".into(),
                })
        }

        async fn register(&self, credentials: &Credentials) -> GwResult<User> {
            let user = User {
                id: self.next_id(),
                email: credentials.email.clone(),
                name: String::new(),
                username: String::new(),
                role: Role::User,
            };
            self.users
                .lock()
                .unwrap()
                .push((user.clone(), credentials.password.clone()));
            Ok(user)
        }

        async fn auth_providers(&self) -> GwResult<Vec<String>> {
            Ok(vec!["google".into()])
        }
    }
}

mod flows {
    use super::prelude::*;
    use crate::prelude::*;

    #[tokio::test]
    async fn load_catalog_concurrently() {
        let backend = InMemoryBackend::with_catalog();
        let catalog = load_catalog(&backend).await.unwrap();
        assert_eq!(catalog.categories().len(), 2);
        let tags = catalog.tags_of_category(&"cafe".into());
        assert_eq!(tags.len(), 1);
    }

    #[tokio::test]
    async fn register_and_login() {
        let backend = InMemoryBackend::default();
        let registration = usecases::Registration {
            email: "jane@example.com".into(),
            password: "secret123".into(),
            password_confirmation: "secret123".into(),
        };
        let session = register(&backend, &registration).await.unwrap();
        assert!(session.identity().is_authenticated());
        assert!(!session.is_admin());

        let credentials = Credentials {
            email: "jane@example.com".into(),
            password: "secret123".into(),
        };
        let again = login(&backend, &credentials).await.unwrap();
        assert_eq!(again.user(), session.user());

        let wrong = Credentials {
            password: "wrong".into(),
            ..credentials
        };
        assert!(login(&backend, &wrong).await.is_err());
        assert_eq!(auth_providers(&backend).await.unwrap(), vec!["google"]);
    }

    #[tokio::test]
    async fn gateway_errors_are_surfaced() {
        let backend = InMemoryBackend::default();
        backend.fail_queries(true);
        let bbox = MapBbox::around(MapPoint::from_lat_lng_deg(1, 1), 0.1);
        let err = retrieve_spots(&backend, &Session::anonymous(), bbox, 13, &Default::default())
            .await
            .unwrap_err();
        assert!(matches!(
            err.gateway_error(),
            Some(truthspot_core::gateways::Error::Transport(_))
        ));
    }
}
