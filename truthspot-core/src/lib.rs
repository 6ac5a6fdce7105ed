//! # truthspot-core
//!
//! Business rules of TruthSpot that do not depend on a concrete backend,
//! runtime or user interface.

pub mod bbox;
pub mod catalog;
pub mod cluster;
pub mod gateways;
pub mod marker;
pub mod mode;
pub mod selection;
pub mod text;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use truthspot_entities::{
        category::*, geo::*, id::*, spot::*, tag::*, time::*, user::*, view::*,
    };
}
