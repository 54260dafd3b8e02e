//! House composition: every component plus the wiring between them.
//!
//! [`House`] owns the layout, the system parameters, the security model and
//! the heating model, and routes events between them through a
//! [`ListenerRegistry`]. All external operations go through it, usually
//! behind the single [`SharedHouse`] lock.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::TimeDelta;
use hearth_domain::error::HearthError;
use hearth_domain::event::{EventSource, HouseEvent};
use hearth_domain::id::ZoneId;
use hearth_domain::period::HeatingZonePeriod;
use hearth_domain::room::{LocationKey, RoomHeatingMode};
use hearth_domain::season::{AwayTemperatures, Season, SeasonDates};
use hearth_domain::time::SimDateTime;
use hearth_domain::zone::HeatingZone;

use crate::event_bus::ListenerRegistry;
use crate::ports::{EventPublisher, HouseLayout};
use crate::services::heating_model::HeatingModel;
use crate::services::security::SecurityModel;
use crate::services::system_parameters::SystemParameters;

/// Components that can be registered as listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subscriber {
    SystemParameters,
    Heating,
}

/// A house guarded by one coarse lock, shared with the clock driver.
pub type SharedHouse<L> = Arc<Mutex<House<L>>>;

/// Lock a shared house. A poisoned lock is recovered since the house is
/// plain data.
pub fn lock<L>(house: &Mutex<House<L>>) -> MutexGuard<'_, House<L>> {
    house.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Debug)]
pub struct House<L> {
    layout: L,
    parameters: SystemParameters,
    security: SecurityModel,
    heating: HeatingModel,
    listeners: ListenerRegistry<Subscriber>,
    clock_time: SimDateTime,
}

impl<L: HouseLayout> House<L> {
    /// Build a house with no listeners registered.
    ///
    /// The heating model starts from the current outside temperature and
    /// season of `parameters`.
    #[must_use]
    pub fn new(layout: L, parameters: SystemParameters) -> Self {
        let heating = HeatingModel::new(parameters.outside_temperature(), parameters.season());
        Self {
            layout,
            clock_time: parameters.date(),
            parameters,
            security: SecurityModel::default(),
            heating,
            listeners: ListenerRegistry::new(),
        }
    }

    /// Register the standard wiring.
    ///
    /// System parameters hear the clock before the heating model does, so a
    /// season change is applied before the tick that crossed it runs.
    #[must_use]
    pub fn with_default_listeners(mut self) -> Self {
        self.subscribe(EventSource::Clock, Subscriber::SystemParameters);
        self.subscribe(EventSource::Clock, Subscriber::Heating);
        self.subscribe(EventSource::SystemParameters, Subscriber::Heating);
        self.subscribe(EventSource::Security, Subscriber::Heating);
        self.subscribe(EventSource::HouseLayout, Subscriber::Heating);
        self
    }

    #[must_use]
    pub fn with_away_temperatures(mut self, away_temperatures: AwayTemperatures) -> Self {
        self.heating = self.heating.with_away_temperatures(away_temperatures);
        self
    }

    /// Register `subscriber` on `source`. Returns `false` for a duplicate.
    pub fn subscribe(&mut self, source: EventSource, subscriber: Subscriber) -> bool {
        let added = self.listeners.register(source, subscriber);
        if added {
            tracing::debug!(?source, ?subscriber, "listener registered");
        }
        added
    }

    #[must_use]
    pub fn into_shared(self) -> SharedHouse<L> {
        Arc::new(Mutex::new(self))
    }

    #[must_use]
    pub fn layout(&self) -> &L {
        &self.layout
    }

    #[must_use]
    pub fn parameters(&self) -> &SystemParameters {
        &self.parameters
    }

    #[must_use]
    pub fn security(&self) -> &SecurityModel {
        &self.security
    }

    #[must_use]
    pub fn heating(&self) -> &HeatingModel {
        &self.heating
    }

    /// Time of the last clock tick.
    #[must_use]
    pub fn clock_time(&self) -> SimDateTime {
        self.clock_time
    }

    /// Advance the simulated time by `step` and publish it from the clock.
    ///
    /// Returns the new time, or `None` when it would leave the calendar
    /// range; the house is left untouched in that case.
    pub fn advance_clock(&mut self, step: TimeDelta) -> Option<SimDateTime> {
        let Some(date) = self.clock_time.checked_add_signed(step) else {
            tracing::warn!(clock_time = %self.clock_time, "simulated time overflow, tick skipped");
            return None;
        };
        self.clock_time = date;
        self.publish(EventSource::Clock, HouseEvent::TimeIncremented { date });
        Some(date)
    }

    /// # Errors
    ///
    /// Returns [`HearthError::Validation`] if `temperature` is not finite.
    pub fn set_outside_temperature(&mut self, temperature: f64) -> Result<(), HearthError> {
        if let Some(event) = self.parameters.set_outside_temperature(temperature)? {
            self.publish(EventSource::SystemParameters, event);
        }
        Ok(())
    }

    pub fn set_season_dates(&mut self, season_dates: SeasonDates) {
        if let Some(event) = self.parameters.set_season_dates(season_dates) {
            self.publish(EventSource::SystemParameters, event);
        }
    }

    pub fn set_away_mode(&mut self, enabled: bool) {
        if let Some(event) = self.security.set_away_mode(enabled) {
            self.publish(EventSource::Security, event);
        }
    }

    /// Mutate the layout, then announce that its rooms changed.
    pub fn update_layout<R>(&mut self, update: impl FnOnce(&mut L) -> R) -> R {
        let result = update(&mut self.layout);
        self.publish(EventSource::HouseLayout, HouseEvent::RoomsChanged);
        result
    }

    /// # Errors
    ///
    /// See [`HeatingModel::add_zone`].
    pub fn add_zone(
        &mut self,
        name: &str,
        rooms: &[LocationKey],
    ) -> Result<&HeatingZone, HearthError> {
        self.heating.add_zone(&self.layout, name, rooms)
    }

    /// # Errors
    ///
    /// See [`HeatingModel::remove_zone`].
    pub fn remove_zone(&mut self, id: ZoneId) -> Result<HeatingZone, HearthError> {
        self.heating.remove_zone(id)
    }

    /// # Errors
    ///
    /// See [`HeatingModel::add_room_to_zone`].
    pub fn add_room_to_zone(&mut self, zone_id: ZoneId, key: LocationKey) -> Result<(), HearthError> {
        self.heating.add_room_to_zone(&self.layout, zone_id, key)
    }

    /// # Errors
    ///
    /// See [`HeatingModel::remove_room_from_zone`].
    pub fn remove_room_from_zone(
        &mut self,
        zone_id: ZoneId,
        key: LocationKey,
    ) -> Result<(), HearthError> {
        self.heating.remove_room_from_zone(&self.layout, zone_id, key)
    }

    /// # Errors
    ///
    /// See [`HeatingModel::set_zone_period_target_temperature`].
    pub fn set_zone_period_target_temperature(
        &mut self,
        zone_id: ZoneId,
        period: HeatingZonePeriod,
        temperature: f64,
    ) -> Result<(), HearthError> {
        self.heating
            .set_zone_period_target_temperature(zone_id, period, temperature)
    }

    /// # Errors
    ///
    /// See [`HeatingModel::set_away_temperature`].
    pub fn set_away_temperature(&mut self, season: Season, temperature: f64) -> Result<(), HearthError> {
        self.heating.set_away_temperature(season, temperature)
    }

    /// # Errors
    ///
    /// See [`HeatingModel::override_room_temperature`].
    pub fn override_room_temperature(
        &mut self,
        key: LocationKey,
        temperature: f64,
    ) -> Result<f64, HearthError> {
        self.heating
            .override_room_temperature(&mut self.layout, key, temperature)
    }

    /// # Errors
    ///
    /// See [`HeatingModel::clear_room_override`].
    pub fn clear_room_override(&mut self, key: LocationKey) -> Result<RoomHeatingMode, HearthError> {
        self.heating.clear_room_override(&mut self.layout, key)
    }

    /// # Errors
    ///
    /// Returns [`HearthError::NotFound`] if the room does not exist.
    pub fn room_temperature(&self, key: LocationKey) -> Result<f64, HearthError> {
        self.heating.room_temperature(&self.layout, key)
    }

    pub fn initialize_room_temperatures(&mut self) {
        self.heating.initialize_room_temperatures(&mut self.layout);
    }

    pub fn reset_zones(&mut self) {
        self.heating.reset();
    }
}

impl<L: HouseLayout> EventPublisher<Subscriber> for House<L> {
    fn registry(&self) -> &ListenerRegistry<Subscriber> {
        &self.listeners
    }

    fn deliver(&mut self, listener: Subscriber, event: &HouseEvent) {
        match listener {
            Subscriber::SystemParameters => {
                if let Some(follow_up) = self.parameters.on_event(event) {
                    self.publish(EventSource::SystemParameters, follow_up);
                }
            }
            Subscriber::Heating => self.heating.on_event(event, &mut self.layout),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{VecLayout, assert_close, at, key, layout, room};
    use hearth_domain::room::{HeatingMode, WindowState};

    fn house_at(date: SimDateTime, outside: f64, layout: VecLayout) -> House<VecLayout> {
        let parameters = SystemParameters::new(date, outside, SeasonDates::default());
        House::new(layout, parameters)
    }

    #[test]
    fn should_apply_season_change_before_heating_tick() {
        let mut house =
            house_at(at(2024, 5, 31, 23), 20.0, VecLayout(vec![room(1, 26.0)])).with_default_listeners();
        house.add_zone("Living", &[key(1)]).unwrap();
        assert_eq!(house.heating().season(), Season::Winter);

        let date = house.advance_clock(TimeDelta::hours(1)).unwrap();

        assert_eq!(date, at(2024, 6, 1, 0));
        assert_eq!(house.parameters().season(), Season::Summer);
        assert_eq!(house.heating().season(), Season::Summer);
        let vented = &house.layout().0[0];
        assert!(!vented.hvac);
        assert_eq!(vented.windows[0].state, WindowState::Open);
        assert_close(vented.temperature, 25.95);
    }

    #[test]
    fn should_tick_with_stale_season_when_heating_hears_clock_first() {
        let mut house = house_at(at(2024, 5, 31, 23), 20.0, VecLayout(vec![room(1, 26.0)]));
        house.subscribe(EventSource::Clock, Subscriber::Heating);
        house.subscribe(EventSource::Clock, Subscriber::SystemParameters);
        house.subscribe(EventSource::SystemParameters, Subscriber::Heating);
        house.add_zone("Living", &[key(1)]).unwrap();

        house.advance_clock(TimeDelta::hours(1)).unwrap();

        let room = &house.layout().0[0];
        assert!(room.hvac);
        assert_eq!(room.windows[0].state, WindowState::Closed);
        assert_close(room.temperature, 25.9);
        assert_eq!(house.heating().season(), Season::Summer);
    }

    #[test]
    fn should_not_touch_rooms_without_listeners() {
        let mut house = house_at(at(2024, 1, 10, 8), 10.0, layout());
        house.add_zone("All", &[key(1), key(2)]).unwrap();

        house.advance_clock(TimeDelta::minutes(15)).unwrap();

        assert_eq!(house.clock_time(), at(2024, 1, 10, 8) + TimeDelta::minutes(15));
        assert_eq!(house.parameters().date(), at(2024, 1, 10, 8));
        assert_close(house.room_temperature(key(1)).unwrap(), 20.0);
    }

    #[test]
    fn should_propagate_outside_temperature_to_heating() {
        let mut house = house_at(at(2024, 1, 10, 8), 10.0, layout()).with_default_listeners();

        house.set_outside_temperature(4.5).unwrap();

        assert_close(house.parameters().outside_temperature(), 4.5);
        assert_close(house.heating().outside_temperature(), 4.5);
        assert!(house.set_outside_temperature(f64::NAN).is_err());
    }

    #[test]
    fn should_switch_rooms_to_away_mode() {
        let mut house = house_at(at(2024, 1, 10, 8), 10.0, layout()).with_default_listeners();
        house.override_room_temperature(key(3), 23.0).unwrap();

        house.set_away_mode(true);

        assert!(house.security().away_mode());
        assert_eq!(house.heating().heating_mode(), HeatingMode::Away);
        assert_eq!(house.layout().0[0].heating_mode, RoomHeatingMode::Away);
        assert_eq!(house.layout().0[2].heating_mode, RoomHeatingMode::Overridden);

        house.set_away_mode(false);
        assert_eq!(house.clear_room_override(key(3)).unwrap(), RoomHeatingMode::Zone);
    }

    #[test]
    fn should_prune_zone_members_when_layout_changes() {
        let mut house = house_at(at(2024, 1, 10, 8), 10.0, layout()).with_default_listeners();
        let zone = house.add_zone("All", &[key(1), key(2)]).unwrap().id;

        house.update_layout(|layout| layout.0.retain(|room| room.key != key(1)));

        assert_eq!(house.heating().get_zone(zone).unwrap().rooms(), &[key(2)]);
    }

    #[test]
    fn should_follow_season_date_changes() {
        let mut house = house_at(at(2024, 5, 15, 8), 10.0, layout()).with_default_listeners();

        house.set_season_dates(SeasonDates {
            summer_start: hearth_domain::season::MonthDay::new(5, 1).unwrap(),
            winter_start: hearth_domain::season::MonthDay::new(9, 1).unwrap(),
        });

        assert_eq!(house.heating().season(), Season::Summer);
    }

    #[test]
    fn should_recover_poisoned_lock() {
        let shared = house_at(at(2024, 1, 10, 8), 10.0, layout()).into_shared();
        let clone = Arc::clone(&shared);
        let _ = std::thread::spawn(move || {
            let _guard = lock(&clone);
            panic!("poison");
        })
        .join();

        assert!(shared.is_poisoned());
        assert_close(lock(&shared).room_temperature(key(1)).unwrap(), 20.0);
    }

    #[test]
    fn should_ignore_duplicate_subscription() {
        let mut house = house_at(at(2024, 1, 10, 8), 10.0, layout()).with_default_listeners();
        assert!(!house.subscribe(EventSource::Clock, Subscriber::Heating));
        assert_eq!(house.registry().len(), 5);
    }
}
