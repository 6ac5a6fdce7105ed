use super::prelude::*;

/// Only the owner of a spot or an administrator may modify it.
pub fn authorize_spot_modification(identity: &Identity, spot: &Spot) -> Result<()> {
    match identity {
        Identity::Anonymous => Err(Error::Unauthorized),
        Identity::Admin(_) => Ok(()),
        Identity::User(id) if spot.is_owned_by(id) => Ok(()),
        Identity::User(_) => Err(Error::Forbidden),
    }
}

pub fn authorized_user(identity: &Identity) -> Result<&Id> {
    identity.user_id().ok_or(Error::Unauthorized)
}
