use super::prelude::*;
use crate::util::validate::is_valid_email;

pub async fn login_with_email<G>(gateway: &G, credentials: &Credentials) -> Result<Authenticated>
where
    G: AuthGateway + ?Sized,
{
    if !is_valid_email(credentials.email.trim()) {
        return Err(Error::Email);
    }
    let credentials = Credentials {
        email: credentials.email.trim().to_owned(),
        password: credentials.password.clone(),
    };
    let authenticated = gateway.login(&credentials).await.map_err(|err| match err {
        // The backend reports wrong credentials as a rejected request
        crate::gateways::Error::Rejected { status: 400, .. } => Error::Unauthorized,
        err => Error::Gateway(err),
    })?;
    log::info!("Logged in as {}", authenticated.user.id);
    Ok(authenticated)
}
