use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};

use async_trait::async_trait;

use super::prelude::*;
use crate::gateways::{self, Error as GwError};

type GwResult<T> = gateways::Result<T>;

#[derive(Default)]
struct Users {
    users: Vec<(User, String)>,
}

#[derive(Default)]
pub struct MockGateway {
    spots: Mutex<Vec<Spot>>,
    categories: Mutex<Vec<Category>>,
    users: Mutex<Users>,
    updates: AtomicUsize,
}

impl MockGateway {
    pub fn insert(&self, spot: Spot) {
        self.spots.lock().unwrap().push(spot);
    }

    pub fn add_category(&self, category: Category) {
        self.categories.lock().unwrap().push(category);
    }

    pub fn all(&self) -> Vec<Spot> {
        self.spots.lock().unwrap().clone()
    }

    pub fn update_count(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }

    fn expand(&self, mut spot: Spot) -> Spot {
        spot.expanded_category = spot.category.as_ref().and_then(|id| {
            self.categories
                .lock()
                .unwrap()
                .iter()
                .find(|c| &c.id == id)
                .cloned()
        });
        spot
    }
}

#[async_trait]
impl SpotGateway for MockGateway {
    async fn query_spots(&self, query: &SpotQuery) -> GwResult<Vec<Spot>> {
        let mut spots: Vec<_> = self
            .all()
            .into_iter()
            .filter(|s| query.matches(s))
            .collect();
        spots.sort_by(|a, b| b.created.cmp(&a.created));
        Ok(spots
            .into_iter()
            .take(query.limit as usize)
            .map(|s| {
                if query.expand_category {
                    self.expand(s)
                } else {
                    s
                }
            })
            .collect())
    }

    async fn get_spot(&self, id: &Id, expand_category: bool) -> GwResult<Spot> {
        let spot = self
            .all()
            .into_iter()
            .find(|s| &s.id == id)
            .ok_or(GwError::NotFound)?;
        Ok(if expand_category {
            self.expand(spot)
        } else {
            spot
        })
    }

    async fn create_spot(&self, new_spot: &NewSpot) -> GwResult<Spot> {
        let mut spots = self.spots.lock().unwrap();
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
            id: format!("spot{}", spots.len() + 1).into(),
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
        spots.push(spot.clone());
        Ok(spot)
    }

    async fn update_spot_visibility(&self, id: &Id, visibility: Visibility) -> GwResult<Spot> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        let mut spots = self.spots.lock().unwrap();
        let spot = spots
            .iter_mut()
            .find(|s| &s.id == id)
            .ok_or(GwError::NotFound)?;
        spot.visibility = visibility;
        Ok(spot.clone())
    }

    async fn delete_spot(&self, id: &Id) -> GwResult<()> {
        let mut spots = self.spots.lock().unwrap();
        let len = spots.len();
        spots.retain(|s| &s.id != id);
        if spots.len() == len {
            return Err(GwError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl AuthGateway for MockGateway {
    async fn login(&self, credentials: &Credentials) -> GwResult<Authenticated> {
        let users = self.users.lock().unwrap();
        users
            .users
            .iter()
            .find(|(u, pw)| u.email == credentials.email && pw == &credentials.password)
            .map(|(user, _)| Authenticated {
                user: user.clone(),
                token: format!("token-{}", user.id),
            })
            .ok_or_else(|| GwError::Rejected {
                status: 400,
                message: "Failed to authenticate.".into(),
            })
    }

    async fn register(&self, credentials: &Credentials) -> GwResult<User> {
        let mut users = self.users.lock().unwrap();
        if users.users.iter().any(|(u, _)| u.email == credentials.email) {
            return Err(GwError::Rejected {
                status: 400,
                message: "Failed to create record.".into(),
            });
        }
        let user = User {
            id: format!("user{}", users.users.len() + 1).into(),
            email: credentials.email.clone(),
            name: String::new(),
            username: String::new(),
            role: Role::User,
        };
        users.users.push((user.clone(), credentials.password.clone()));
        Ok(user)
    }

    async fn auth_providers(&self) -> GwResult<Vec<String>> {
        Ok(vec![])
    }
}
