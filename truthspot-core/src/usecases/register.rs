use super::{login::login_with_email, prelude::*};
use crate::util::validate::is_valid_email;

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

pub fn validate_registration(registration: &Registration) -> Result<Credentials> {
    let email = registration.email.trim();
    if !is_valid_email(email) {
        return Err(Error::Email);
    }
    if registration.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(Error::Password {
            min: MIN_PASSWORD_LEN,
        });
    }
    if registration.password != registration.password_confirmation {
        return Err(Error::PasswordConfirmation);
    }
    Ok(Credentials {
        email: email.to_owned(),
        password: registration.password.clone(),
    })
}

/// Creates the account and signs in right away.
pub async fn register_with_email<G>(gateway: &G, registration: &Registration) -> Result<Authenticated>
where
    G: AuthGateway + ?Sized,
{
    let credentials = validate_registration(registration)?;
    let user = gateway.register(&credentials).await?;
    log::info!("Registered user {}", user.id);
    login_with_email(gateway, &credentials).await
}
