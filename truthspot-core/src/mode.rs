use crate::entities::*;

/// What a click on the map does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum InteractionMode {
    /// Pan and zoom the map.
    #[default]
    Move,
    /// Drop a new spot at the clicked position.
    Pin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ModeError {
    #[error("Sign in to drop spots")]
    NotAuthenticated,
    #[error("Zoom in to at least level {min} to drop spots")]
    ZoomTooLow { min: Zoom },
}

impl InteractionMode {
    pub const fn allows_panning(self) -> bool {
        matches!(self, Self::Move)
    }

    pub const fn allows_dropping(self) -> bool {
        matches!(self, Self::Pin)
    }
}

/// Interaction mode plus the position of an open drop form.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Interaction {
    mode: InteractionMode,
    draft_pos: Option<MapPoint>,
}

impl Interaction {
    pub const fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub const fn draft_pos(&self) -> Option<MapPoint> {
        self.draft_pos
    }

    /// Switches the mode, discarding any open drop form.
    pub fn switch(
        &mut self,
        mode: InteractionMode,
        identity: &Identity,
        zoom: Zoom,
        min_pin_zoom: Zoom,
    ) -> Result<(), ModeError> {
        if mode == InteractionMode::Pin {
            if !identity.is_authenticated() {
                return Err(ModeError::NotAuthenticated);
            }
            if zoom < min_pin_zoom {
                return Err(ModeError::ZoomTooLow { min: min_pin_zoom });
            }
        }
        self.mode = mode;
        self.draft_pos = None;
        Ok(())
    }

    /// Opens the drop form at the clicked position in pin mode.
    pub fn click(&mut self, pos: MapPoint) -> Option<MapPoint> {
        if !self.mode.allows_dropping() || !pos.is_valid() {
            return None;
        }
        self.draft_pos = Some(pos);
        self.draft_pos
    }

    pub fn close_form(&mut self) {
        self.draft_pos = None;
    }

    /// Returns to move mode, which needs no permission.
    pub fn reset(&mut self) {
        self.mode = InteractionMode::Move;
        self.draft_pos = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pin_mode_requires_user_and_zoom() {
        let mut interaction = Interaction::default();
        assert_eq!(
            interaction.switch(InteractionMode::Pin, &Identity::Anonymous, 14, 12),
            Err(ModeError::NotAuthenticated)
        );
        let user = Identity::User("u".into());
        assert_eq!(
            interaction.switch(InteractionMode::Pin, &user, 11, 12),
            Err(ModeError::ZoomTooLow { min: 12 })
        );
        assert_eq!(interaction.mode(), InteractionMode::Move);
        assert!(interaction.switch(InteractionMode::Pin, &user, 12, 12).is_ok());
        assert!(interaction.mode().allows_dropping());
        assert!(!interaction.mode().allows_panning());
    }

    #[test]
    fn switching_discards_the_form() {
        let user = Identity::User("u".into());
        let mut interaction = Interaction::default();
        assert_eq!(interaction.click(MapPoint::from_lat_lng_deg(1, 1)), None);
        interaction.switch(InteractionMode::Pin, &user, 16, 12).unwrap();
        let pos = MapPoint::from_lat_lng_deg(1, 1);
        assert_eq!(interaction.click(pos), Some(pos));
        interaction.switch(InteractionMode::Move, &user, 16, 12).unwrap();
        assert_eq!(interaction.draft_pos(), None);
    }

    #[test]
    fn reset_to_move_mode() {
        let user = Identity::User("u".into());
        let mut interaction = Interaction::default();
        interaction.switch(InteractionMode::Pin, &user, 16, 12).unwrap();
        let pos = MapPoint::from_lat_lng_deg(1, 1);
        interaction.click(pos);
        interaction.reset();
        assert_eq!(interaction, Interaction::default());
        assert!(interaction.mode().allows_panning());
    }

    #[test]
    fn parse_mode_names() {
        assert_eq!("pin".parse::<InteractionMode>().unwrap(), InteractionMode::Pin);
        assert_eq!(InteractionMode::Move.to_string(), "move");
    }
}
