use crate::geo::MapPoint;
use std::fmt;

pub type Zoom = u8;

/// Center and zoom level of a map viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    pub center: MapPoint,
    pub zoom: Zoom,
}

impl MapView {
    pub const fn new(center: MapPoint, zoom: Zoom) -> Self {
        Self { center, zoom }
    }

    #[must_use]
    pub fn clamp_zoom(self, min: Zoom, max: Zoom) -> Self {
        Self {
            zoom: self.zoom.clamp(min, max),
            ..self
        }
    }

    /// Reads `lat`, `lng` and `zoom` from a URL query string.
    ///
    /// Returns `None` unless both coordinates are present and valid.
    /// A missing or malformed zoom falls back to `default_zoom`.
    pub fn from_query(query: &str, default_zoom: Zoom) -> Option<Self> {
        let mut lat = None;
        let mut lng = None;
        let mut zoom = None;
        for (key, value) in query
            .trim_start_matches('?')
            .split('&')
            .filter_map(|pair| pair.split_once('='))
        {
            match key {
                "lat" => lat = value.parse::<f64>().ok(),
                "lng" => lng = value.parse::<f64>().ok(),
                "zoom" => zoom = value.parse::<f64>().ok(),
                _ => {}
            }
        }
        let center = MapPoint::try_from_lat_lng_deg(lat?, lng?)?;
        let zoom = zoom
            .filter(|z| z.is_finite() && *z >= 0.0)
            .map(|z| z.trunc().min(f64::from(Zoom::MAX)) as Zoom)
            .unwrap_or(default_zoom);
        Some(Self { center, zoom })
    }

    pub fn to_query(&self) -> String {
        let (lat, lng) = self.center.to_lat_lng_deg();
        format!("lat={lat}&lng={lng}&zoom={}", self.zoom)
    }
}

impl fmt::Display for MapView {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}@{}", self.center, self.zoom)
    }
}
