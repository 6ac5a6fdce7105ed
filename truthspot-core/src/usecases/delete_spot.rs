use super::{authorize::authorize_spot_modification, prelude::*};

pub async fn delete_spot<G>(gateway: &G, identity: &Identity, id: &Id) -> Result<()>
where
    G: SpotGateway + ?Sized,
{
    let spot = gateway.get_spot(id, false).await?;
    authorize_spot_modification(identity, &spot)?;
    gateway.delete_spot(id).await?;
    log::info!("Deleted spot {id}");
    Ok(())
}
