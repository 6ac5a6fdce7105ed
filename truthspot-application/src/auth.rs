use super::*;
use crate::session::Session;

pub async fn login<G>(gateway: &G, credentials: &Credentials) -> Result<Session>
where
    G: AuthGateway + ?Sized,
{
    let authenticated = usecases::login_with_email(gateway, credentials)
        .await
        .inspect_err(|err| warn!("Login failed: {err}"))?;
    Ok(authenticated.into())
}

pub async fn register<G>(gateway: &G, registration: &usecases::Registration) -> Result<Session>
where
    G: AuthGateway + ?Sized,
{
    let authenticated = usecases::register_with_email(gateway, registration)
        .await
        .inspect_err(|err| warn!("Registration failed: {err}"))?;
    Ok(authenticated.into())
}

pub async fn auth_providers<G>(gateway: &G) -> Result<Vec<String>>
where
    G: AuthGateway + ?Sized,
{
    Ok(gateway
        .auth_providers()
        .await
        .inspect_err(|err| warn!("Failed to load auth methods: {err}"))?)
}
