//! System parameters: simulated date, outside temperature and season.

use hearth_domain::error::HearthError;
use hearth_domain::event::HouseEvent;
use hearth_domain::room::ensure_finite;
use hearth_domain::season::{Season, SeasonDates};
use hearth_domain::time::SimDateTime;

/// House-wide inputs shared by every component.
///
/// The season is always derived from the date and the season dates; the
/// setters return the event to publish when something observable changed.
#[derive(Debug, Clone)]
pub struct SystemParameters {
    date: SimDateTime,
    outside_temperature: f64,
    season_dates: SeasonDates,
    season: Season,
}

impl SystemParameters {
    #[must_use]
    pub fn new(date: SimDateTime, outside_temperature: f64, season_dates: SeasonDates) -> Self {
        Self {
            date,
            outside_temperature,
            season_dates,
            season: season_dates.season_at(date),
        }
    }

    #[must_use]
    pub fn date(&self) -> SimDateTime {
        self.date
    }

    #[must_use]
    pub fn outside_temperature(&self) -> f64 {
        self.outside_temperature
    }

    #[must_use]
    pub fn season_dates(&self) -> SeasonDates {
        self.season_dates
    }

    #[must_use]
    pub fn season(&self) -> Season {
        self.season
    }

    /// Change the outside temperature.
    ///
    /// Returns the event to publish, or `None` when the value is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::Validation`] if `temperature` is not finite.
    #[allow(clippy::float_cmp)]
    pub fn set_outside_temperature(
        &mut self,
        temperature: f64,
    ) -> Result<Option<HouseEvent>, HearthError> {
        ensure_finite(temperature)?;
        if self.outside_temperature == temperature {
            return Ok(None);
        }
        self.outside_temperature = temperature;
        tracing::info!(temperature, "outside temperature changed");
        Ok(Some(HouseEvent::OutsideTemperatureChanged { temperature }))
    }

    /// Replace the season boundaries and re-derive the current season.
    pub fn set_season_dates(&mut self, season_dates: SeasonDates) -> Option<HouseEvent> {
        self.season_dates = season_dates;
        self.refresh_season()
    }

    /// Follow the clock. Returns [`HouseEvent::SeasonChanged`] when the new
    /// date crosses a season boundary.
    pub fn on_event(&mut self, event: &HouseEvent) -> Option<HouseEvent> {
        match *event {
            HouseEvent::TimeIncremented { date } => {
                self.date = date;
                self.refresh_season()
            }
            HouseEvent::OutsideTemperatureChanged { .. }
            | HouseEvent::SeasonChanged { .. }
            | HouseEvent::AwayModeChanged { .. }
            | HouseEvent::RoomsChanged => None,
        }
    }

    fn refresh_season(&mut self) -> Option<HouseEvent> {
        let season = self.season_dates.season_at(self.date);
        if season == self.season {
            return None;
        }
        tracing::info!(from = %self.season, to = %season, date = %self.date, "season changed");
        self.season = season;
        Some(HouseEvent::SeasonChanged { season })
    }
}
