use super::{authorize::authorize_spot_modification, prelude::*};

pub async fn change_spot_visibility<G>(
    gateway: &G,
    identity: &Identity,
    id: &Id,
    visibility: Visibility,
) -> Result<Spot>
where
    G: SpotGateway + ?Sized,
{
    let spot = gateway.get_spot(id, false).await?;
    authorize_spot_modification(identity, &spot)?;
    if spot.visibility == visibility {
        log::debug!("Spot {id} is already {visibility}");
        return Ok(spot);
    }
    let updated = gateway.update_spot_visibility(id, visibility).await?;
    log::info!("Changed visibility of spot {id} to {visibility}");
    Ok(updated)
}
