mod authorize;
mod create_spot;
mod delete_spot;
mod error;
mod login;
mod own_spots;
mod query_spots;
mod register;
mod update_spot_visibility;

#[cfg(test)]
pub mod tests;

pub use self::{
    authorize::*, create_spot::*, delete_spot::*, error::Error, login::*, own_spots::*,
    query_spots::*, register::*, update_spot_visibility::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, gateways::backend::*};
}
