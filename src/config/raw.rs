use duration_str::deserialize_duration;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_CONFIG_FILE: &str = include_str!("truthspot.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub backend: Option<Backend>,
    pub map: Option<Map>,
    pub retrieval: Option<Retrieval>,
    pub markers: Option<Markers>,
    pub geolocation: Option<Geolocation>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Clone, Copy, Deserialize)]
pub struct Position {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Backend {
    pub base_url: String,
}

impl Default for Backend {
    fn default() -> Self {
        Config::default().backend.expect("Backend configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Map {
    pub app_url: Option<String>,
    pub min_zoom: u8,
    pub max_zoom: u8,
    pub default_zoom: u8,
    pub min_pin_zoom: u8,
    pub default_center: Position,
    pub created_spot_zoom: Option<u8>,
    pub selected_spot_zoom: Option<u8>,
}

impl Default for Map {
    fn default() -> Self {
        Config::default().map.expect("Map configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Retrieval {
    #[serde(deserialize_with = "deserialize_duration")]
    pub debounce: Duration,
    pub page_size: u32,
    pub reduced_page_size: u32,
    pub reduced_below_zoom: u8,
    pub initial_span: f64,
}

impl Default for Retrieval {
    fn default() -> Self {
        Config::default().retrieval.expect("Retrieval configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Markers {
    pub base_size: f64,
    pub size_min_zoom: u8,
    pub size_max_zoom: u8,
    pub cluster_radius: f64,
    pub cluster_icon_size: Option<u32>,
    pub disable_clustering_at_zoom: u8,
}

impl Default for Markers {
    fn default() -> Self {
        Config::default().markers.expect("Markers configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Geolocation {
    pub fallback_position: Option<Position>,
    pub high_accuracy: bool,
    #[serde(deserialize_with = "deserialize_duration")]
    pub timeout: Duration,
    #[serde(deserialize_with = "deserialize_duration")]
    pub max_age: Duration,
}

impl Default for Geolocation {
    fn default() -> Self {
        Config::default()
            .geolocation
            .expect("Geolocation configuration")
    }
}
