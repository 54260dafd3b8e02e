//! Security model: owns the house-wide away flag.

use hearth_domain::event::HouseEvent;

#[derive(Debug, Clone, Copy, Default)]
pub struct SecurityModel {
    away_mode: bool,
}

impl SecurityModel {
    #[must_use]
    pub fn away_mode(&self) -> bool {
        self.away_mode
    }

    /// Switch away mode. Returns the event to publish, or `None` when the
    /// flag already had that value.
    pub fn set_away_mode(&mut self, enabled: bool) -> Option<HouseEvent> {
        if self.away_mode == enabled {
            return None;
        }
        self.away_mode = enabled;
        tracing::info!(enabled, "away mode changed");
        Some(HouseEvent::AwayModeChanged { enabled })
    }
}
