use std::{path::PathBuf, time::Duration};

use clap::{Args, Parser, Subcommand};
use truthspot_core::entities::{MapBbox, MapPoint, Zoom};

#[derive(Debug, Parser)]
#[command(name = "truthspot", version, about = "Browse and tag spots on the TruthSpot map")]
pub struct Cli {
    /// Configuration file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Sign in with this email address
    #[arg(long, global = true, env = "TRUTHSPOT_EMAIL")]
    pub email: Option<String>,

    /// Password of the account
    #[arg(long, global = true, env = "TRUTHSPOT_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the spots of a map region
    Spots(Region),
    /// Group the spots of a map region like the map does
    Clusters(Region),
    /// Replay a sequence of viewport changes with debounced retrieval
    Watch {
        /// Visible regions as `sw_lat,sw_lng,ne_lat,ne_lng`
        #[arg(required = true, value_name = "BBOX")]
        regions: Vec<MapBbox>,
        #[arg(long, default_value_t = 13)]
        zoom: Zoom,
        /// Pause between two viewport changes
        #[arg(long, value_parser = parse_duration, default_value = "100ms")]
        interval: Duration,
    },
    /// Drop a new spot
    Create(NewSpotArgs),
    /// Make a spot visible to everyone
    Publish { id: String },
    /// Make a spot visible to its owner only
    Unpublish { id: String },
    /// Delete a spot
    Delete { id: String },
    /// List your own spots
    Mine,
    /// Show the category tree
    Categories,
    /// List the tags, optionally only those of a category
    Tags { category: Option<String> },
    /// List the available sign-in methods
    AuthMethods,
    /// Create an account with email and password
    Register {
        /// Repeat the password
        #[arg(long, env = "TRUTHSPOT_PASSWORD_CONFIRMATION", hide_env_values = true)]
        password_confirmation: String,
    },
    /// Print a shareable link to a map view
    ViewUrl {
        /// Map view as URL query, e.g. `lat=52.52&lng=13.405&zoom=12`
        #[arg(long, conflicts_with = "spot")]
        view: Option<String>,
        /// Center the view on this spot
        #[arg(long)]
        spot: Option<String>,
    },
    /// Center the map on the current position
    Locate,
}

fn parse_duration(s: &str) -> Result<Duration, String> {
    duration_str::parse(s).map_err(|err| err.to_string())
}

#[derive(Debug, Args)]
pub struct Region {
    /// Visible region as `sw_lat,sw_lng,ne_lat,ne_lng`
    #[arg(long)]
    pub bbox: Option<MapBbox>,
    /// Map view as URL query, e.g. `lat=52.52&lng=13.405&zoom=12`
    #[arg(long, conflicts_with = "bbox")]
    pub view: Option<String>,
    #[arg(long)]
    pub zoom: Option<Zoom>,
}

#[derive(Debug, Args)]
pub struct NewSpotArgs {
    pub name: String,
    #[arg(long, default_value = "")]
    pub description: String,
    /// Position as `lat,lng`
    #[arg(long)]
    pub pos: MapPoint,
    /// Zoom level of the map when dropping the spot
    #[arg(long)]
    pub zoom: Option<Zoom>,
    /// Category path from the root, e.g. `--category food --category cafe`
    #[arg(long = "category", required = true)]
    pub categories: Vec<String>,
    #[arg(long = "tag")]
    pub tags: Vec<String>,
    /// Only visible to you
    #[arg(long)]
    pub private: bool,
}
