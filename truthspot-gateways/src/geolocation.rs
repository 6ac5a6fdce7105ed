use async_trait::async_trait;
use truthspot_core::{
    entities::MapPoint,
    gateways::{
        geolocation::{GeolocationGateway, PositionOptions},
        Error, Result,
    },
};

/// Reports a configured position instead of asking a device.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedPosition {
    position: Option<MapPoint>,
}

impl FixedPosition {
    pub const fn new(position: Option<MapPoint>) -> Self {
        Self { position }
    }
}

#[async_trait]
impl GeolocationGateway for FixedPosition {
    async fn current_position(&self, options: &PositionOptions) -> Result<MapPoint> {
        log::debug!("Requesting position with {options:?}");
        self.position
            .filter(|pos| pos.is_valid())
            .ok_or_else(|| Error::PositionUnavailable("No position configured".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn report_configured_position() {
        let pos = MapPoint::from_lat_lng_deg(52.52, 13.405);
        let geo = FixedPosition::new(Some(pos));
        assert_eq!(geo.current_position(&PositionOptions::default()).await.unwrap(), pos);
        let geo = FixedPosition::default();
        assert!(matches!(
            geo.current_position(&PositionOptions::default()).await,
            Err(Error::PositionUnavailable(_))
        ));
    }
}
