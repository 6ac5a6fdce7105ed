use anyhow::{anyhow, bail, Result};
use std::{env, fs, io::ErrorKind, path::Path, time::Duration};
use truthspot_application::prelude::MapSettings;
use truthspot_core::{
    cluster::ClusterSettings, entities::MapPoint, gateways::geolocation::PositionOptions,
    marker::MarkerSizing, usecases::PageLimits,
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "truthspot.toml";

const ENV_NAME_BACKEND_URL: &str = "TRUTHSPOT_BACKEND_URL";

pub struct Config {
    pub backend: Backend,
    /// Base URL of shared map views.
    pub app_url: String,
    pub map: MapSettings,
    pub retrieval: Retrieval,
    pub markers: Markers,
    pub geolocation: Geolocation,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(base_url) = env::var(ENV_NAME_BACKEND_URL) {
            cfg.backend.base_url = check_base_url(base_url)?;
        }
        Ok(cfg)
    }
}

pub struct Backend {
    /// Base URL of the PocketBase instance.
    pub base_url: String,
}

pub struct Retrieval {
    pub debounce: Duration,
    pub limits: PageLimits,
}

pub struct Markers {
    pub sizing: MarkerSizing,
    pub clustering: ClusterSettings,
}

pub struct Geolocation {
    pub fallback_position: Option<MapPoint>,
    pub options: PositionOptions,
}

fn check_base_url(base_url: String) -> Result<String> {
    let base_url = base_url.trim().trim_end_matches('/').to_string();
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        bail!("Invalid URL '{base_url}'");
    }
    Ok(base_url)
}

fn position(raw::Position { lat, lng }: raw::Position) -> Result<MapPoint> {
    MapPoint::try_from_lat_lng_deg(lat, lng)
        .filter(|pos| pos.is_valid())
        .ok_or_else(|| anyhow!("Invalid position (lat = {lat}, lng = {lng})"))
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;

    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            backend,
            map,
            retrieval,
            markers,
            geolocation,
        } = from;

        let raw::Backend { base_url } = backend.unwrap_or_default();
        let backend = Backend {
            base_url: check_base_url(base_url)?,
        };

        let raw::Retrieval {
            debounce,
            page_size,
            reduced_page_size,
            reduced_below_zoom,
            initial_span,
        } = retrieval.unwrap_or_default();
        if page_size == 0 || reduced_page_size == 0 {
            bail!("Page sizes must be positive");
        }
        if !(initial_span.is_finite() && initial_span > 0.0) {
            bail!("Invalid initial span {initial_span}");
        }
        let retrieval = Retrieval {
            debounce,
            limits: PageLimits {
                default: page_size,
                reduced: reduced_page_size,
                reduced_below_zoom,
            },
        };

        let raw::Map {
            app_url,
            min_zoom,
            max_zoom,
            default_zoom,
            min_pin_zoom,
            default_center,
            created_spot_zoom,
            selected_spot_zoom,
        } = map.unwrap_or_default();
        if min_zoom > max_zoom || !(min_zoom..=max_zoom).contains(&default_zoom) {
            bail!("Invalid zoom range: {min_zoom} <= {default_zoom} <= {max_zoom} does not hold");
        }
        let app_url = match app_url {
            Some(url) => check_base_url(url)?,
            None => backend.base_url.clone(),
        };
        let defaults = MapSettings::default();
        let map = MapSettings {
            min_zoom,
            max_zoom,
            default_zoom,
            min_pin_zoom,
            default_center: position(default_center)?,
            initial_span,
            created_spot_zoom: created_spot_zoom.unwrap_or(defaults.created_spot_zoom),
            selected_spot_zoom: selected_spot_zoom.unwrap_or(defaults.selected_spot_zoom),
        };

        let raw::Markers {
            base_size,
            size_min_zoom,
            size_max_zoom,
            cluster_radius,
            cluster_icon_size,
            disable_clustering_at_zoom,
        } = markers.unwrap_or_default();
        if size_min_zoom >= size_max_zoom {
            bail!("Marker size zoom range {size_min_zoom}..{size_max_zoom} is empty");
        }
        let markers = Markers {
            sizing: MarkerSizing {
                base_size,
                min_zoom: size_min_zoom,
                max_zoom: size_max_zoom,
            },
            clustering: ClusterSettings {
                radius_px: cluster_radius,
                disable_at_zoom: disable_clustering_at_zoom,
                icon_size: cluster_icon_size.unwrap_or(ClusterSettings::default().icon_size),
            },
        };

        let raw::Geolocation {
            fallback_position,
            high_accuracy,
            timeout,
            max_age,
        } = geolocation.unwrap_or_default();
        let geolocation = Geolocation {
            fallback_position: fallback_position.map(position).transpose()?,
            options: PositionOptions {
                enable_high_accuracy: high_accuracy,
                timeout,
                maximum_age: max_age,
            },
        };

        Ok(Self {
            backend,
            app_url,
            map,
            retrieval,
            markers,
            geolocation,
        })
    }
}
