use super::*;
use crate::{session::Session, spot_list::SpotList};

pub async fn retrieve_spots<G>(
    gateway: &G,
    session: &Session,
    bbox: MapBbox,
    zoom: Zoom,
    limits: &usecases::PageLimits,
) -> Result<Vec<Spot>>
where
    G: SpotGateway + ?Sized,
{
    Ok(usecases::query_spots(gateway, &session.identity(), bbox, zoom, limits).await?)
}

/// Creates a spot and shows it on the map.
pub async fn create_spot<G>(
    gateway: &G,
    session: &Session,
    draft: usecases::SpotDraft,
    list: &mut SpotList,
) -> Result<Spot>
where
    G: SpotGateway + ?Sized,
{
    let spot = usecases::create_spot(gateway, &session.identity(), draft)
        .await
        .inspect_err(|err| warn!("Failed to create spot: {err}"))?;
    list.append(spot.clone());
    Ok(spot)
}

pub async fn change_spot_visibility<G>(
    gateway: &G,
    session: &Session,
    id: &Id,
    visibility: Visibility,
    list: &mut SpotList,
) -> Result<Spot>
where
    G: SpotGateway + ?Sized,
{
    let spot = usecases::change_spot_visibility(gateway, &session.identity(), id, visibility)
        .await
        .inspect_err(|err| warn!("Failed to change visibility of spot {id}: {err}"))?;
    if !list.set_visibility(id, spot.visibility) {
        debug!("Spot {id} is not displayed");
    }
    Ok(spot)
}

pub async fn delete_spot<G>(gateway: &G, session: &Session, id: &Id, list: &mut SpotList) -> Result<()>
where
    G: SpotGateway + ?Sized,
{
    usecases::delete_spot(gateway, &session.identity(), id)
        .await
        .inspect_err(|err| warn!("Failed to delete spot {id}: {err}"))?;
    list.remove(id);
    Ok(())
}

pub async fn own_spots<G>(gateway: &G, session: &Session) -> Result<Vec<Spot>>
where
    G: SpotGateway + ?Sized,
{
    Ok(usecases::own_spots(gateway, &session.identity())
        .await
        .inspect_err(|err| warn!("Failed to load own spots: {err}"))?)
}
