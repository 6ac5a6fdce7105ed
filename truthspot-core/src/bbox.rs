use crate::entities::*;

/// The approximately circular region visible within a bounding box.
///
/// The radius is the distance from the center to the north-east corner,
/// i.e. the circle circumscribes the box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleCircle {
    pub center: MapPoint,
    pub radius: Distance,
}

impl VisibleCircle {
    pub fn circumscribing(bbox: &MapBbox) -> Self {
        debug_assert!(bbox.is_valid());
        let center = bbox.center();
        let radius = MapPoint::distance(center, bbox.northeast()).unwrap_or_else(Distance::infinite);
        Self { center, radius }
    }

    pub fn contains_point(&self, pt: MapPoint) -> bool {
        MapPoint::distance(self.center, pt).is_some_and(|d| d <= self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_contains_center_and_corners() {
        let bb = MapBbox::new(
            MapPoint::from_lat_lng_deg(40.0, -75.0),
            MapPoint::from_lat_lng_deg(41.0, -73.0),
        );
        let circle = VisibleCircle::circumscribing(&bb);
        assert!(circle.contains_point(bb.center()));
        assert!(circle.contains_point(bb.northeast()));
        // Points far outside of the box are excluded
        assert!(!circle.contains_point(MapPoint::from_lat_lng_deg(43.0, -74.0)));
    }

    #[test]
    fn circle_cuts_off_southern_corners_of_northern_boxes() {
        // On the northern hemisphere the southern edge of a box is wider
        // than the northern one, so its corners lie farther from the center.
        let bb = MapBbox::new(
            MapPoint::from_lat_lng_deg(60.0, 0.0),
            MapPoint::from_lat_lng_deg(70.0, 40.0),
        );
        let circle = VisibleCircle::circumscribing(&bb);
        assert!(!circle.contains_point(bb.southwest()));
    }
}
