use truthspot_core::mode::{Interaction, InteractionMode};

use super::*;
use crate::{map::MapSettings, session::Session};

/// Switches to pin mode and opens the drop form at `pos`.
pub fn start_drop(
    interaction: &mut Interaction,
    session: &Session,
    settings: &MapSettings,
    zoom: Zoom,
    pos: MapPoint,
) -> Result<MapPoint> {
    if interaction.mode() != InteractionMode::Pin {
        interaction
            .switch(InteractionMode::Pin, &session.identity(), zoom, settings.min_pin_zoom)
            .inspect_err(|err| info!("Cannot drop a spot: {err}"))?;
    }
    let pos = interaction
        .click(pos)
        .ok_or(usecases::Error::InvalidPosition)?;
    debug!("Opened drop form at {pos}");
    Ok(pos)
}

/// Closes the drop form and returns to move mode.
pub fn finish_drop(interaction: &mut Interaction) {
    interaction.reset();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::AppError, tests::prelude::*};
    use truthspot_core::mode::ModeError;

    #[tokio::test]
    async fn drop_requires_login_and_zoom() {
        let backend = InMemoryBackend::default();
        let settings = MapSettings::default();
        let pos = MapPoint::from_lat_lng_deg(40.7128, -74.006);
        let mut interaction = Interaction::default();

        let err = start_drop(&mut interaction, &Session::anonymous(), &settings, 14, pos).unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Mode(ModeError::NotAuthenticated))
        ));

        let session = backend.session("alice", false).await;
        let err = start_drop(&mut interaction, &session, &settings, 11, pos).unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Mode(ModeError::ZoomTooLow { min: 12 }))
        ));
        assert_eq!(interaction.mode(), InteractionMode::Move);

        assert_eq!(start_drop(&mut interaction, &session, &settings, 12, pos).unwrap(), pos);
        assert_eq!(interaction.draft_pos(), Some(pos));

        finish_drop(&mut interaction);
        assert_eq!(interaction.mode(), InteractionMode::Move);
        assert_eq!(interaction.draft_pos(), None);
    }

    #[tokio::test]
    async fn invalid_click_position_is_rejected() {
        let backend = InMemoryBackend::default();
        let session = backend.session("alice", false).await;
        let mut interaction = Interaction::default();
        let err = start_drop(
            &mut interaction,
            &session,
            &MapSettings::default(),
            14,
            MapPoint::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(usecases::Error::InvalidPosition))
        ));
    }
}
