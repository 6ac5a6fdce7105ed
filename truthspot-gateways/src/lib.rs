//! Adapters of the core gateway traits to concrete services.

pub mod geolocation;
pub mod pocketbase;
