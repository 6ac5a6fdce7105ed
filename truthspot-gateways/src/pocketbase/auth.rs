use async_trait::async_trait;
use truthspot_boundary as json;
use truthspot_core::{
    entities::User,
    gateways::{backend::*, Result},
};

use super::PocketBase;

impl PocketBase {
    fn auth_url(&self, action: &str) -> String {
        format!("{}/{action}", self.collection_url(json::USERS))
    }
}

#[async_trait]
impl AuthGateway for PocketBase {
    async fn login(&self, credentials: &Credentials) -> Result<Authenticated> {
        let data = json::PasswordAuth {
            identity: credentials.email.clone(),
            password: credentials.password.clone(),
        };
        let req = self.http.post(self.auth_url("auth-with-password"));
        let json::AuthResponse { token, record } = self.send_json(req, &data).await?;
        Ok(Authenticated {
            user: record.into(),
            token,
        })
    }

    async fn register(&self, credentials: &Credentials) -> Result<User> {
        let data = json::NewUser {
            email: credentials.email.clone(),
            password: credentials.password.clone(),
            password_confirm: credentials.password.clone(),
        };
        let record = self.create::<_, json::User>(json::USERS, &data).await?;
        Ok(record.into())
    }

    async fn auth_providers(&self) -> Result<Vec<String>> {
        let req = self.http.get(self.auth_url("auth-methods"));
        let methods: json::AuthMethods = self.send(req).await?;
        Ok(methods.provider_names())
    }
}
