use super::*;

/// The signed-in user and the token authorizing backend requests.
///
/// Passed explicitly to every flow that acts on behalf of a user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<User>,
    token: Option<String>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn identity(&self) -> Identity {
        self.user.as_ref().map(Identity::from).unwrap_or_default()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_admin(&self) -> bool {
        self.identity().is_admin()
    }

    /// Forgets user and token.
    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            info!("Logged out {}", user.id);
        }
        self.token = None;
    }
}

impl From<Authenticated> for Session {
    fn from(from: Authenticated) -> Self {
        let Authenticated { user, token } = from;
        Self {
            user: Some(user),
            token: Some(token),
        }
    }
}
