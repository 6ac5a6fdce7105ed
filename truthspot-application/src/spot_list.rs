use truthspot_core::{
    catalog::Catalog,
    cluster::{cluster_markers, ClusterSettings, MapFeature},
    marker::{MarkerSizing, SpotMarker},
};

use super::*;

/// The spots currently shown on the map, in retrieval order.
///
/// Created spots are appended at the end.
#[derive(Debug, Clone, Default)]
pub struct SpotList {
    spots: Vec<Spot>,
}

impl SpotList {
    pub fn spots(&self) -> &[Spot] {
        &self.spots
    }

    pub fn len(&self) -> usize {
        self.spots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }

    pub fn get(&self, id: &Id) -> Option<&Spot> {
        self.spots.iter().find(|s| &s.id == id)
    }

    /// Replaces all spots with a new retrieval result.
    pub fn replace(&mut self, spots: Vec<Spot>) {
        self.spots = spots;
    }

    /// Adds a newly created spot unless it is already listed.
    pub fn append(&mut self, spot: Spot) {
        if let Some(existing) = self.spots.iter_mut().find(|s| s.id == spot.id) {
            *existing = spot;
        } else {
            self.spots.push(spot);
        }
    }

    /// Returns `false` if the spot is not listed.
    pub fn set_visibility(&mut self, id: &Id, visibility: Visibility) -> bool {
        match self.spots.iter_mut().find(|s| &s.id == id) {
            Some(spot) => {
                spot.visibility = visibility;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &Id) -> Option<Spot> {
        let idx = self.spots.iter().position(|s| &s.id == id)?;
        Some(self.spots.remove(idx))
    }

    pub fn markers(
        &self,
        catalog: &Catalog,
        sizing: &MarkerSizing,
        zoom: Zoom,
        now: Timestamp,
    ) -> Vec<SpotMarker> {
        self.spots
            .iter()
            .map(|spot| SpotMarker::new(spot, catalog, sizing, zoom, now))
            .collect()
    }

    /// Markers grouped into clusters at the given zoom level.
    pub fn features(
        &self,
        catalog: &Catalog,
        sizing: &MarkerSizing,
        clustering: &ClusterSettings,
        zoom: Zoom,
        now: Timestamp,
    ) -> Vec<MapFeature> {
        cluster_markers(self.markers(catalog, sizing, zoom, now), zoom, clustering)
    }
}
