//! Presentation of spots as map markers.

use crate::{catalog::Catalog, entities::*, text::time_ago};

/// Zoom dependent scaling of spot icons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerSizing {
    /// Icon size in pixels at or below `min_zoom`.
    pub base_size: f64,
    pub min_zoom: Zoom,
    /// Zoom level at which icons reach their maximum size.
    pub max_zoom: Zoom,
}

impl Default for MarkerSizing {
    fn default() -> Self {
        Self {
            base_size: 24.0,
            min_zoom: 10,
            max_zoom: 18,
        }
    }
}

pub const MIN_MULTIPLIER: f64 = 1.0;
pub const MAX_MULTIPLIER: f64 = 3.0;
const BASE_FONT_SIZE: f64 = 14.0;
const MIN_FONT_SIZE: u32 = 10;

pub const PUBLIC_OPACITY: f64 = 1.0;
pub const PRIVATE_OPACITY: f64 = 0.6;
pub const LOCK_INDICATOR: &str = "🔒";

/// Pixel dimensions of an icon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconSize {
    pub size: u32,
    pub font_size: u32,
    /// Edge length of the square icon box.
    pub box_size: f64,
    /// Anchor relative to the top left corner of the box.
    pub anchor: (f64, f64),
}

impl MarkerSizing {
    /// Scale factor in `[MIN_MULTIPLIER, MAX_MULTIPLIER]`.
    pub fn multiplier(&self, zoom: Zoom) -> f64 {
        let span = f64::from(self.max_zoom.saturating_sub(self.min_zoom));
        let factor = if span > 0.0 {
            ((f64::from(zoom) - f64::from(self.min_zoom)) / span).clamp(0.0, 1.0)
        } else if zoom >= self.max_zoom {
            1.0
        } else {
            0.0
        };
        MIN_MULTIPLIER + (MAX_MULTIPLIER - MIN_MULTIPLIER) * factor
    }

    pub fn icon_size(&self, zoom: Zoom) -> IconSize {
        let multiplier = self.multiplier(zoom);
        let size = (self.base_size * multiplier).round().max(0.0) as u32;
        let font_size = ((BASE_FONT_SIZE * multiplier).round() as u32).max(MIN_FONT_SIZE);
        let size_f = f64::from(size);
        IconSize {
            size,
            font_size,
            box_size: size_f * 1.5,
            anchor: (size_f * 0.75, size_f * 1.5),
        }
    }
}

/// Everything needed to draw a single spot.
#[derive(Debug, Clone, PartialEq)]
pub struct SpotMarker {
    pub spot_id: Id,
    pub pos: MapPoint,
    pub name: String,
    pub icon: String,
    pub private: bool,
    pub opacity: f64,
    pub size: IconSize,
    pub age: String,
}

impl SpotMarker {
    pub fn new(spot: &Spot, catalog: &Catalog, sizing: &MarkerSizing, zoom: Zoom, now: Timestamp) -> Self {
        let private = !spot.visibility.is_public();
        Self {
            spot_id: spot.id.clone(),
            pos: spot.pos,
            name: spot.name.clone(),
            icon: catalog.category_icon(spot).to_string(),
            private,
            opacity: if private {
                PRIVATE_OPACITY
            } else {
                PUBLIC_OPACITY
            },
            size: sizing.icon_size(zoom),
            age: time_ago(spot.created.elapsed_since(now)),
        }
    }

    /// Icon text including the lock indicator of private spots.
    pub fn label(&self) -> String {
        if self.private {
            format!("{}{}", self.icon, LOCK_INDICATOR)
        } else {
            self.icon.clone()
        }
    }
}

/// Resolved tag of a spot for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagLabel {
    pub name: String,
    pub icon: String,
}

pub fn tag_labels(spot: &Spot, catalog: &Catalog) -> Vec<TagLabel> {
    spot.tags
        .iter()
        .map(|id| match catalog.tag(id) {
            Some(tag) => TagLabel {
                name: tag.name.clone(),
                icon: if tag.icon.is_empty() {
                    Tag::DEFAULT_ICON.to_string()
                } else {
                    tag.icon.clone()
                },
            },
            None => TagLabel {
                name: Tag::UNKNOWN_NAME.to_string(),
                icon: Tag::DEFAULT_ICON.to_string(),
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::sample_catalog;
    use truthspot_entities::builders::*;

    #[test]
    fn icon_size_at_zoom_bounds() {
        let sizing = MarkerSizing::default();
        let small = sizing.icon_size(5);
        assert_eq!(small.size, 24);
        assert_eq!(small.font_size, 14);
        assert_eq!(small.box_size, 36.0);
        assert_eq!(small.anchor, (18.0, 36.0));
        assert_eq!(sizing.icon_size(10), small);

        let large = sizing.icon_size(18);
        assert_eq!(large.size, 72);
        assert_eq!(large.font_size, 42);
        assert_eq!(sizing.icon_size(22), large);

        assert_eq!(sizing.icon_size(14).size, 48);
    }

    #[test]
    fn icon_size_is_monotone_and_clamped() {
        let sizing = MarkerSizing::default();
        let mut last = 0;
        for zoom in 0..=Zoom::MAX {
            let m = sizing.multiplier(zoom);
            assert!((MIN_MULTIPLIER..=MAX_MULTIPLIER).contains(&m));
            let size = sizing.icon_size(zoom).size;
            assert!(size >= last);
            last = size;
        }
    }

    #[test]
    fn font_size_has_a_lower_bound() {
        let sizing = MarkerSizing {
            base_size: 4.0,
            ..Default::default()
        };
        assert!(sizing.icon_size(0).font_size >= MIN_FONT_SIZE);
    }

    #[test]
    fn private_markers_are_dimmed_and_locked() {
        let catalog = sample_catalog();
        let now = Timestamp::now();
        let spot = Spot::build()
            .id("s1")
            .category("cafe")
            .private()
            .created(now)
            .finish();
        let marker = SpotMarker::new(&spot, &catalog, &MarkerSizing::default(), 12, now);
        assert!(marker.private);
        assert_eq!(marker.opacity, PRIVATE_OPACITY);
        assert_eq!(marker.label(), "☕🔒");
        assert_eq!(marker.age, "just now");

        let spot = Spot::build().id("s2").created(now).finish();
        let marker = SpotMarker::new(&spot, &catalog, &MarkerSizing::default(), 12, now);
        assert_eq!(marker.opacity, PUBLIC_OPACITY);
        assert_eq!(marker.label(), Category::DEFAULT_ICON);
    }

    #[test]
    fn resolve_tags_with_fallback() {
        let catalog = sample_catalog();
        let spot = Spot::build().tags(vec!["wifi", "gone"]).finish();
        let labels = tag_labels(&spot, &catalog);
        assert_eq!(labels[0].name, "Wifi");
        assert_eq!(labels[1].name, Tag::UNKNOWN_NAME);
        assert_eq!(labels[1].icon, Tag::DEFAULT_ICON);
    }
}
