use itertools::Itertools;
use std::{fmt, str::FromStr};
use thiserror::Error;

/// A latitude in degrees, valid in the range `[-90, 90]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct LatCoord(f64);

impl LatCoord {
    const DEG_MAX: f64 = 90.0;
    const DEG_MIN: f64 = -90.0;

    pub const fn max() -> Self {
        Self(Self::DEG_MAX)
    }

    pub const fn min() -> Self {
        Self(Self::DEG_MIN)
    }

    pub fn is_valid(self) -> bool {
        (Self::DEG_MIN..=Self::DEG_MAX).contains(&self.0)
    }

    pub const fn to_deg(self) -> f64 {
        self.0
    }

    pub fn to_rad(self) -> f64 {
        self.0.to_radians()
    }

    pub fn from_deg<T: Into<f64>>(deg: T) -> Self {
        let res = Self(deg.into());
        debug_assert!(res.is_valid());
        res
    }

    pub fn try_from_deg<T: Into<f64>>(deg: T) -> Option<Self> {
        let res = Self(deg.into());
        res.is_valid().then_some(res)
    }
}

impl Default for LatCoord {
    fn default() -> Self {
        let res = Self(f64::NAN);
        debug_assert!(!res.is_valid());
        res
    }
}

impl fmt::Display for LatCoord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_deg())
    }
}

/// A longitude in degrees, valid in the range `[-180, 180]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct LngCoord(f64);

impl LngCoord {
    const DEG_MAX: f64 = 180.0;
    const DEG_MIN: f64 = -180.0;

    pub const fn max() -> Self {
        Self(Self::DEG_MAX)
    }

    pub const fn min() -> Self {
        Self(Self::DEG_MIN)
    }

    pub fn is_valid(self) -> bool {
        (Self::DEG_MIN..=Self::DEG_MAX).contains(&self.0)
    }

    pub const fn to_deg(self) -> f64 {
        self.0
    }

    pub fn to_rad(self) -> f64 {
        self.0.to_radians()
    }

    pub fn from_deg<T: Into<f64>>(deg: T) -> Self {
        let res = Self(deg.into());
        debug_assert!(res.is_valid());
        res
    }

    pub fn try_from_deg<T: Into<f64>>(deg: T) -> Option<Self> {
        let res = Self(deg.into());
        res.is_valid().then_some(res)
    }
}

impl Default for LngCoord {
    fn default() -> Self {
        let res = Self(f64::NAN);
        debug_assert!(!res.is_valid());
        res
    }
}

impl fmt::Display for LngCoord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_deg())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid latitude degrees: {0}")]
    Latitude(String),
    #[error("Invalid longitude degrees: {0}")]
    Longitude(String),
    #[error("Expected 'lat,lng' but got '{0}'")]
    Point(String),
    #[error("Expected 'sw_lat,sw_lng,ne_lat,ne_lng' but got '{0}'")]
    Bbox(String),
}

/// A geographical location on a (flat) map.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MapPoint {
    lat: LatCoord,
    lng: LngCoord,
}

impl MapPoint {
    pub const fn new(lat: LatCoord, lng: LngCoord) -> Self {
        Self { lat, lng }
    }

    pub const fn lat(self) -> LatCoord {
        self.lat
    }

    pub const fn lng(self) -> LngCoord {
        self.lng
    }

    pub fn is_valid(self) -> bool {
        self.lat.is_valid() && self.lng.is_valid()
    }

    pub fn to_lat_lng_rad(self) -> (f64, f64) {
        (self.lat.to_rad(), self.lng.to_rad())
    }

    pub const fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat.to_deg(), self.lng.to_deg())
    }

    pub fn from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(lat: LAT, lng: LNG) -> Self {
        Self::new(LatCoord::from_deg(lat), LngCoord::from_deg(lng))
    }

    pub fn try_from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(
        lat: LAT,
        lng: LNG,
    ) -> Option<Self> {
        match (LatCoord::try_from_deg(lat), LngCoord::try_from_deg(lng)) {
            (Some(lat), Some(lng)) => Some(Self::new(lat, lng)),
            _ => None,
        }
    }

    fn parse_lat_lng_deg(lat_deg_str: &str, lng_deg_str: &str) -> Result<Self, ParseError> {
        let lat = lat_deg_str
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(LatCoord::try_from_deg)
            .ok_or_else(|| ParseError::Latitude(lat_deg_str.to_string()))?;
        let lng = lng_deg_str
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(LngCoord::try_from_deg)
            .ok_or_else(|| ParseError::Longitude(lng_deg_str.to_string()))?;
        Ok(Self::new(lat, lng))
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

impl FromStr for MapPoint {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((lat_deg_str, lng_deg_str)) = s.split(',').collect_tuple() else {
            return Err(ParseError::Point(s.to_string()));
        };
        Self::parse_lat_lng_deg(lat_deg_str, lng_deg_str)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Distance(pub f64);

impl Distance {
    pub const fn infinite() -> Self {
        Self(f64::INFINITY)
    }

    pub const fn from_meters(meters: f64) -> Self {
        Self(meters)
    }

    pub const fn to_meters(self) -> f64 {
        self.0
    }

    pub fn is_valid(self) -> bool {
        self.0 >= 0.0
    }
}

const MEAN_EARTH_RADIUS: Distance = Distance::from_meters(6_371_000.0);

impl MapPoint {
    /// Great-circle distance on the surface of the earth
    /// calculated with the haversine formula.
    pub fn distance(p1: MapPoint, p2: MapPoint) -> Option<Distance> {
        if !p1.is_valid() || !p2.is_valid() {
            return None;
        }

        let (lat1_rad, lng1_rad) = p1.to_lat_lng_rad();
        let (lat2_rad, lng2_rad) = p2.to_lat_lng_rad();

        let dlat_half_sin = ((lat2_rad - lat1_rad) / 2.0).sin();
        let dlng_half_sin = ((lng2_rad - lng1_rad) / 2.0).sin();

        let a = dlat_half_sin * dlat_half_sin
            + lat1_rad.cos() * lat2_rad.cos() * dlng_half_sin * dlng_half_sin;
        // Rounding errors may push `a` slightly out of [0, 1]
        let a = a.clamp(0.0, 1.0);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        Some(Distance::from_meters(MEAN_EARTH_RADIUS.to_meters() * c))
    }
}

/// Axis-aligned rectangle in latitude/longitude.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MapBbox {
    sw: MapPoint,
    ne: MapPoint,
}

impl MapBbox {
    pub const fn new(sw: MapPoint, ne: MapPoint) -> Self {
        Self { sw, ne }
    }

    /// A box spanning `span_deg` degrees in each direction around `center`,
    /// clamped to the valid coordinate range.
    pub fn around(center: MapPoint, span_deg: f64) -> Self {
        let (lat, lng) = center.to_lat_lng_deg();
        let sw = MapPoint::from_lat_lng_deg(
            (lat - span_deg).max(LatCoord::min().to_deg()),
            (lng - span_deg).max(LngCoord::min().to_deg()),
        );
        let ne = MapPoint::from_lat_lng_deg(
            (lat + span_deg).min(LatCoord::max().to_deg()),
            (lng + span_deg).min(LngCoord::max().to_deg()),
        );
        Self::new(sw, ne)
    }

    pub const fn southwest(&self) -> MapPoint {
        self.sw
    }

    pub const fn northeast(&self) -> MapPoint {
        self.ne
    }

    pub fn is_valid(&self) -> bool {
        self.sw.is_valid() && self.ne.is_valid() && self.sw.lat() <= self.ne.lat()
    }

    pub fn is_empty(&self) -> bool {
        debug_assert!(self.sw.is_valid());
        debug_assert!(self.ne.is_valid());
        self.sw.lat() >= self.ne.lat() || self.sw.lng() == self.ne.lng()
    }

    /// The geometric center in degrees.
    ///
    /// Boxes crossing the antimeridian are not supported by
    /// the backend query and are centered naively.
    pub fn center(&self) -> MapPoint {
        debug_assert!(self.is_valid());
        let (sw_lat, sw_lng) = self.sw.to_lat_lng_deg();
        let (ne_lat, ne_lng) = self.ne.to_lat_lng_deg();
        MapPoint::from_lat_lng_deg((sw_lat + ne_lat) / 2.0, (sw_lng + ne_lng) / 2.0)
    }

    pub fn contains_point(&self, pt: MapPoint) -> bool {
        debug_assert!(self.is_valid());
        debug_assert!(pt.is_valid());
        if pt.lat() < self.sw.lat() || pt.lat() > self.ne.lat() {
            return false;
        }
        if self.sw.lng() <= self.ne.lng() {
            // regular (inclusive)
            pt.lng() >= self.sw.lng() && pt.lng() <= self.ne.lng()
        } else {
            // inverse (exclusive)
            !(pt.lng() > self.ne.lng() && pt.lng() < self.sw.lng())
        }
    }
}

impl fmt::Display for MapBbox {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.sw, self.ne)
    }
}

impl FromStr for MapBbox {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((sw_lat_deg_str, sw_lng_deg_str, ne_lat_deg_str, ne_lng_deg_str)) =
            s.split(',').collect_tuple()
        else {
            return Err(ParseError::Bbox(s.to_string()));
        };
        let sw = MapPoint::parse_lat_lng_deg(sw_lat_deg_str, sw_lng_deg_str)?;
        let ne = MapPoint::parse_lat_lng_deg(ne_lat_deg_str, ne_lng_deg_str)?;
        let bbox = MapBbox::new(sw, ne);
        if !bbox.is_valid() {
            return Err(ParseError::Bbox(s.to_string()));
        }
        Ok(bbox)
    }
}
