use super::{authorize::authorized_user, prelude::*};

pub const OWN_SPOTS_LIMIT: u32 = 50;

/// The newest spots of the caller regardless of their visibility.
pub async fn own_spots<G>(gateway: &G, identity: &Identity) -> Result<Vec<Spot>>
where
    G: SpotGateway + ?Sized,
{
    let owner = authorized_user(identity)?;
    let query = SpotQuery {
        bbox: None,
        owner: Some(owner.clone()),
        access: AccessFilter::PublicOrOwnedBy(Some(owner.clone())),
        limit: OWN_SPOTS_LIMIT,
        expand_category: true,
    };
    Ok(gateway.query_spots(&query).await?)
}
