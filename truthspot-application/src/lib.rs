#[macro_use]
extern crate log;

mod auth;
mod drop_spot;
mod load_catalog;
mod map;
mod session;
mod spot_list;
mod spots;
mod viewport;

pub mod prelude {
    pub use super::{
        auth::*, drop_spot::*, load_catalog::*, map::*, session::*, spot_list::*, spots::*, viewport::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use truthspot_core::{entities::*, gateways::backend::*, usecases};

#[cfg(test)]
pub(crate) mod tests;
