use super::{authorize::authorized_user, prelude::*};
use crate::{
    selection::Selection,
    util::validate::{AutoCorrect, Validate},
};

/// User input of the spot drop form.
#[derive(Debug, Clone, PartialEq)]
pub struct SpotDraft {
    pub name: String,
    pub description: String,
    pub pos: MapPoint,
    pub category: Option<Id>,
    pub tags: Vec<Id>,
    pub visibility: Visibility,
}

impl SpotDraft {
    /// Takes category and tags from a cascading selection.
    ///
    /// Fails unless at least a category and a sub-category are selected.
    pub fn with_selection(mut self, selection: &Selection) -> Result<Self> {
        if !selection.is_submittable() {
            return Err(Error::Category);
        }
        self.category = selection.deepest_category().cloned();
        self.tags = selection.tags().to_vec();
        Ok(self)
    }
}

pub fn prepare_new_spot(identity: &Identity, draft: SpotDraft) -> Result<NewSpot> {
    let owner = authorized_user(identity)?.clone();
    let SpotDraft {
        name,
        description,
        pos,
        category,
        tags,
        visibility,
    } = draft;
    let new_spot = NewSpot {
        name,
        description,
        pos,
        category: category.ok_or(Error::Category)?,
        owner,
        visibility,
        tags,
    }
    .auto_correct();
    new_spot.validate()?;
    Ok(new_spot)
}

/// Stores a new spot and reads it back with its category expanded.
pub async fn create_spot<G>(gateway: &G, identity: &Identity, draft: SpotDraft) -> Result<Spot>
where
    G: SpotGateway + ?Sized,
{
    let new_spot = prepare_new_spot(identity, draft)?;
    let created = gateway.create_spot(&new_spot).await?;
    log::info!("Created spot {} by user {}", created.id, new_spot.owner);
    let spot = gateway.get_spot(&created.id, true).await?;
    Ok(spot)
}
