use thiserror::Error;

use crate::entities::*;

pub use fast_chemail::is_valid_email;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

pub trait AutoCorrect {
    fn auto_correct(self) -> Self;
}

pub fn is_valid_bbox(bbox: &MapBbox) -> bool {
    bbox.is_valid() && !bbox.is_empty()
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpotInvalidation {
    #[error("Missing name")]
    Name,
    #[error("Missing description")]
    Description,
    #[error("Invalid position")]
    Position,
    #[error("Missing category")]
    Category,
    #[error("Missing owner")]
    Owner,
}

impl AutoCorrect for NewSpot {
    fn auto_correct(mut self) -> Self {
        self.name = self.name.trim().to_owned();
        self.description = self.description.trim().to_owned();
        let mut seen = Vec::with_capacity(self.tags.len());
        self.tags.retain(|t| {
            if !t.is_valid() || seen.contains(t) {
                return false;
            }
            seen.push(t.clone());
            true
        });
        self
    }
}

impl Validate for NewSpot {
    type Error = SpotInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if self.name.trim().is_empty() {
            return Err(Self::Error::Name);
        }
        if self.description.trim().is_empty() {
            return Err(Self::Error::Description);
        }
        if !self.pos.is_valid() {
            return Err(Self::Error::Position);
        }
        if !self.category.is_valid() {
            return Err(Self::Error::Category);
        }
        if !self.owner.is_valid() {
            return Err(Self::Error::Owner);
        }
        Ok(())
    }
}
