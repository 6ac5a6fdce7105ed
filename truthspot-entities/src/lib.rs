#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # truthspot-entities
//!
//! Reusable, agnostic domain entities for TruthSpot.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod category;
pub mod geo;
pub mod id;
pub mod spot;
pub mod tag;
pub mod time;
pub mod user;
pub mod view;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
