use std::time::Duration;

use async_trait::async_trait;

use super::Result;
use crate::entities::MapPoint;

/// Options of a one-shot position request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionOptions {
    pub enable_high_accuracy: bool,
    pub timeout: Duration,
    /// Maximum age of a cached position that is acceptable.
    pub maximum_age: Duration,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            enable_high_accuracy: true,
            timeout: Duration::from_secs(5),
            maximum_age: Duration::ZERO,
        }
    }
}

#[async_trait]
pub trait GeolocationGateway: Send + Sync {
    async fn current_position(&self, options: &PositionOptions) -> Result<MapPoint>;
}
