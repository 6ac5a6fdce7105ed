//! Greedy grouping of nearby markers in screen space.

use std::f64::consts::PI;

use crate::{entities::*, marker::SpotMarker};

const TILE_SIZE: f64 = 256.0;
/// Web Mercator is undefined at the poles.
const MAX_MERCATOR_LAT: f64 = 85.051_128_779_806_59;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClusterSettings {
    /// Maximum pixel distance of a marker from the seed of its cluster.
    pub radius_px: f64,
    /// Zoom level from which every spot is shown individually.
    pub disable_at_zoom: Zoom,
    /// Edge length of the square cluster icon.
    pub icon_size: u32,
}

impl Default for ClusterSettings {
    fn default() -> Self {
        Self {
            radius_px: 50.0,
            disable_at_zoom: 15,
            icon_size: 40,
        }
    }
}

/// Global pixel coordinates of a point at the given zoom level.
pub fn project(pt: MapPoint, zoom: Zoom) -> (f64, f64) {
    let (lat, lng) = pt.to_lat_lng_deg();
    let world = TILE_SIZE * 2f64.powi(i32::from(zoom));
    let x = (lng + 180.0) / 360.0 * world;
    let lat_rad = lat.clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT).to_radians();
    let y = (1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / PI) / 2.0 * world;
    (x, y)
}

#[derive(Debug, Clone, PartialEq)]
pub enum MapFeature {
    Single(SpotMarker),
    Cluster {
        center: MapPoint,
        count: usize,
        members: Vec<SpotMarker>,
    },
}

impl MapFeature {
    pub fn count(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Cluster { count, .. } => *count,
        }
    }

    pub fn position(&self) -> MapPoint {
        match self {
            Self::Single(marker) => marker.pos,
            Self::Cluster { center, .. } => *center,
        }
    }
}

struct Seed {
    px: (f64, f64),
    members: Vec<SpotMarker>,
}

fn centroid(members: &[SpotMarker]) -> MapPoint {
    let n = members.len().max(1) as f64;
    let (lat, lng) = members.iter().fold((0.0, 0.0), |(lat, lng), m| {
        let (a, b) = m.pos.to_lat_lng_deg();
        (lat + a, lng + b)
    });
    MapPoint::from_lat_lng_deg(lat / n, lng / n)
}

/// Groups markers into clusters, keeping the input order of seeds.
pub fn cluster_markers(
    markers: Vec<SpotMarker>,
    zoom: Zoom,
    settings: &ClusterSettings,
) -> Vec<MapFeature> {
    if zoom >= settings.disable_at_zoom {
        return markers.into_iter().map(MapFeature::Single).collect();
    }
    let radius_sq = settings.radius_px * settings.radius_px;
    let mut seeds: Vec<Seed> = Vec::new();
    for marker in markers {
        let (x, y) = project(marker.pos, zoom);
        let nearby = seeds.iter_mut().find(|seed| {
            let dx = seed.px.0 - x;
            let dy = seed.px.1 - y;
            dx * dx + dy * dy <= radius_sq
        });
        match nearby {
            Some(seed) => seed.members.push(marker),
            None => seeds.push(Seed {
                px: (x, y),
                members: vec![marker],
            }),
        }
    }
    log::debug!("Grouped markers into {} features at zoom {zoom}", seeds.len());
    seeds
        .into_iter()
        .filter_map(|Seed { mut members, .. }| {
            if members.len() == 1 {
                members.pop().map(MapFeature::Single)
            } else {
                Some(MapFeature::Cluster {
                    center: centroid(&members),
                    count: members.len(),
                    members,
                })
            }
        })
        .collect()
}
