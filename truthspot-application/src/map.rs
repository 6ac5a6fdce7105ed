use truthspot_core::gateways::geolocation::{GeolocationGateway, PositionOptions};

use super::*;

/// Zoom limits and navigation targets of the map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapSettings {
    pub min_zoom: Zoom,
    pub max_zoom: Zoom,
    pub default_zoom: Zoom,
    /// Minimum zoom level for dropping spots.
    pub min_pin_zoom: Zoom,
    pub default_center: MapPoint,
    /// Half the edge length in degrees of the box loaded on start.
    pub initial_span: f64,
    pub created_spot_zoom: Zoom,
    pub selected_spot_zoom: Zoom,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            min_zoom: 6,
            max_zoom: 18,
            default_zoom: 13,
            min_pin_zoom: 12,
            default_center: MapPoint::from_lat_lng_deg(40.7128, -74.006),
            initial_span: 0.1,
            created_spot_zoom: 16,
            selected_spot_zoom: 15,
        }
    }
}

impl MapSettings {
    /// The view from URL query parameters or the default view.
    pub fn initial_view(&self, query: Option<&str>) -> MapView {
        query
            .and_then(|query| MapView::from_query(query, self.default_zoom))
            .unwrap_or_else(|| MapView::new(self.default_center, self.default_zoom))
            .clamp_zoom(self.min_zoom, self.max_zoom)
    }

    pub fn initial_bbox(&self, view: &MapView) -> MapBbox {
        MapBbox::around(view.center, self.initial_span)
    }

    pub fn focus_created_spot(&self, spot: &Spot) -> MapView {
        MapView::new(spot.pos, self.created_spot_zoom).clamp_zoom(self.min_zoom, self.max_zoom)
    }

    pub fn focus_selected_spot(&self, spot: &Spot) -> MapView {
        MapView::new(spot.pos, self.selected_spot_zoom).clamp_zoom(self.min_zoom, self.max_zoom)
    }

    /// Centers the map on the current position of the device.
    pub async fn locate<G>(&self, geolocation: &G, options: &PositionOptions) -> Result<MapView>
    where
        G: GeolocationGateway + ?Sized,
    {
        let pos = geolocation
            .current_position(options)
            .await
            .inspect_err(|err| warn!("Error getting location: {err}"))?;
        Ok(MapView::new(pos, self.default_zoom).clamp_zoom(self.min_zoom, self.max_zoom))
    }
}

/// A shareable link to the given view.
pub fn view_url(base_url: &str, view: &MapView) -> String {
    format!("{}/map?{}", base_url.trim_end_matches('/'), view.to_query())
}
