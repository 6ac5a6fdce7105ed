use super::prelude::*;
use crate::{bbox::VisibleCircle, util::validate::is_valid_bbox};

/// Page sizes of a viewport query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    pub default: u32,
    /// Used when zoomed out below `reduced_below_zoom`.
    pub reduced: u32,
    pub reduced_below_zoom: Zoom,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            default: 1000,
            reduced: 100,
            reduced_below_zoom: 5,
        }
    }
}

impl PageLimits {
    pub const fn for_zoom(&self, zoom: Zoom) -> u32 {
        if zoom < self.reduced_below_zoom {
            self.reduced
        } else {
            self.default
        }
    }
}

pub fn prepare_spot_query(
    identity: &Identity,
    bbox: MapBbox,
    zoom: Zoom,
    limits: &PageLimits,
) -> Result<SpotQuery> {
    if !is_valid_bbox(&bbox) {
        return Err(Error::Bbox);
    }
    Ok(SpotQuery {
        bbox: Some(bbox),
        owner: None,
        access: AccessFilter::for_identity(identity),
        limit: limits.for_zoom(zoom),
        expand_category: true,
    })
}

/// Keeps the spots inside the circle around the center of `bbox`
/// that the caller is allowed to see.
pub fn refine_to_visible_circle(bbox: &MapBbox, access: &AccessFilter, spots: Vec<Spot>) -> Vec<Spot> {
    let circle = VisibleCircle::circumscribing(bbox);
    spots
        .into_iter()
        .filter(|spot| {
            if !access.permits(spot) {
                log::warn!("Dropping spot {} that should not have been returned", spot.id);
                return false;
            }
            circle.contains_point(spot.pos)
        })
        .collect()
}

/// Spots to display for the given viewport, newest first.
pub async fn query_spots<G>(
    gateway: &G,
    identity: &Identity,
    bbox: MapBbox,
    zoom: Zoom,
    limits: &PageLimits,
) -> Result<Vec<Spot>>
where
    G: SpotGateway + ?Sized,
{
    let query = prepare_spot_query(identity, bbox, zoom, limits)?;
    let spots = gateway.query_spots(&query).await?;
    let count = spots.len();
    let spots = refine_to_visible_circle(&bbox, &query.access, spots);
    log::debug!(
        "Found {} of {count} spots in the visible circle of {bbox}",
        spots.len()
    );
    Ok(spots)
}
