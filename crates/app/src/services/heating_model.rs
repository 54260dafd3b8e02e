//! Heating model: zone management and the per-tick entry point.
//!
//! The model owns every [`HeatingZone`] and enforces the two membership
//! rules: zone names are unique, and a room belongs to at most one zone.
//! Room state itself lives in the [`HouseLayout`]; every operation that
//! needs it takes the layout as a parameter.

use hearth_domain::control::TickConditions;
use hearth_domain::error::{ConflictError, HearthError, NotFoundError};
use hearth_domain::event::HouseEvent;
use hearth_domain::id::{IdGenerator, ZoneId};
use hearth_domain::period::HeatingZonePeriod;
use hearth_domain::room::{HeatingMode, LocationKey, RoomHeatingMode, ensure_finite};
use hearth_domain::season::{AwayTemperatures, Season};
use hearth_domain::time::SimDateTime;
use hearth_domain::zone::HeatingZone;

use crate::ports::HouseLayout;

#[derive(Debug)]
pub struct HeatingModel {
    zones: Vec<HeatingZone>,
    ids: IdGenerator,
    heating_mode: HeatingMode,
    away_temperatures: AwayTemperatures,
    outside_temperature: f64,
    season: Season,
}

impl HeatingModel {
    /// Create a model with no zones, in zone mode.
    ///
    /// `outside_temperature` and `season` are the current values of the
    /// system parameters; later changes arrive as events.
    #[must_use]
    pub fn new(outside_temperature: f64, season: Season) -> Self {
        Self {
            zones: Vec::new(),
            ids: IdGenerator::default(),
            heating_mode: HeatingMode::default(),
            away_temperatures: AwayTemperatures::default(),
            outside_temperature,
            season,
        }
    }

    #[must_use]
    pub fn with_away_temperatures(mut self, away_temperatures: AwayTemperatures) -> Self {
        self.away_temperatures = away_temperatures;
        self
    }

    #[must_use]
    pub fn zones(&self) -> &[HeatingZone] {
        &self.zones
    }

    #[must_use]
    pub fn find_zone(&self, id: ZoneId) -> Option<&HeatingZone> {
        self.zones.iter().find(|zone| zone.id == id)
    }

    /// Look up a zone by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::NotFound`] when no zone has `id`.
    pub fn get_zone(&self, id: ZoneId) -> Result<&HeatingZone, HearthError> {
        self.find_zone(id).ok_or_else(|| zone_not_found(id))
    }

    /// Zone currently holding the room, if any.
    #[must_use]
    pub fn zone_of(&self, key: LocationKey) -> Option<&HeatingZone> {
        self.zones.iter().find(|zone| zone.contains(key))
    }

    #[must_use]
    pub fn heating_mode(&self) -> HeatingMode {
        self.heating_mode
    }

    #[must_use]
    pub fn away_temperatures(&self) -> AwayTemperatures {
        self.away_temperatures
    }

    #[must_use]
    pub fn outside_temperature(&self) -> f64 {
        self.outside_temperature
    }

    #[must_use]
    pub fn season(&self) -> Season {
        self.season
    }

    /// Create a zone holding `rooms`.
    ///
    /// Rooms already held by another zone are moved silently.
    ///
    /// # Errors
    ///
    /// - [`HearthError::Conflict`] if a zone named `name` exists.
    /// - [`HearthError::NotFound`] if a room key does not resolve.
    /// - [`HearthError::Validation`] if `name` is blank.
    ///
    /// Nothing is changed when an error is returned.
    #[tracing::instrument(skip(self, layout, rooms), fields(rooms = rooms.len()))]
    pub fn add_zone<L: HouseLayout>(
        &mut self,
        layout: &L,
        name: &str,
        rooms: &[LocationKey],
    ) -> Result<&HeatingZone, HearthError> {
        if self.zones.iter().any(|zone| zone.name == name) {
            return Err(ConflictError::DuplicateZoneName(name.to_string()).into());
        }
        for key in rooms {
            layout.get_room(*key)?;
        }

        let mut zone = HeatingZone::new(self.ids.next_id(), name)?;
        for key in rooms {
            self.evict(*key, None);
            zone.add_room(*key);
        }

        tracing::info!(zone_id = %zone.id, "heating zone created");
        let index = self.zones.len();
        self.zones.push(zone);
        Ok(&self.zones[index])
    }

    /// Delete a zone. Its rooms stay in the layout, just unzoned.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::NotFound`] when no zone has `id`.
    #[tracing::instrument(skip(self))]
    pub fn remove_zone(&mut self, id: ZoneId) -> Result<HeatingZone, HearthError> {
        let index = self.zone_index(id)?;
        let zone = self.zones.remove(index);
        tracing::info!(name = %zone.name, rooms = zone.rooms().len(), "heating zone removed");
        Ok(zone)
    }

    /// Put a room into a zone, taking it out of any other zone first.
    ///
    /// # Errors
    ///
    /// - [`HearthError::NotFound`] if the zone or the room does not exist.
    /// - [`HearthError::Conflict`] if the room is already in this zone.
    #[tracing::instrument(skip(self, layout))]
    pub fn add_room_to_zone<L: HouseLayout>(
        &mut self,
        layout: &L,
        zone_id: ZoneId,
        key: LocationKey,
    ) -> Result<(), HearthError> {
        let index = self.zone_index(zone_id)?;
        layout.get_room(key)?;

        let target = &self.zones[index];
        if target.contains(key) {
            return Err(ConflictError::RoomAlreadyInZone {
                room: key.to_string(),
                zone: target.name.clone(),
            }
            .into());
        }

        self.evict(key, Some(zone_id));
        self.zones[index].add_room(key);
        tracing::info!("room added to heating zone");
        Ok(())
    }

    /// Take a room out of a zone.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::NotFound`] if the zone or the room does not
    /// exist, or the room is not a member of the zone.
    #[tracing::instrument(skip(self, layout))]
    pub fn remove_room_from_zone<L: HouseLayout>(
        &mut self,
        layout: &L,
        zone_id: ZoneId,
        key: LocationKey,
    ) -> Result<(), HearthError> {
        let index = self.zone_index(zone_id)?;
        layout.get_room(key)?;

        if !self.zones[index].remove_room(key) {
            return Err(NotFoundError {
                entity: "Zone member",
                id: key.to_string(),
            }
            .into());
        }
        tracing::info!("room removed from heating zone");
        Ok(())
    }

    /// Change one period's target of a zone. An unknown zone is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::Validation`] if `temperature` is not finite.
    #[tracing::instrument(skip(self))]
    pub fn set_zone_period_target_temperature(
        &mut self,
        zone_id: ZoneId,
        period: HeatingZonePeriod,
        temperature: f64,
    ) -> Result<(), HearthError> {
        ensure_finite(temperature)?;
        match self.zones.iter_mut().find(|zone| zone.id == zone_id) {
            Some(zone) => zone.periods.set_target(period, temperature),
            None => tracing::debug!("unknown heating zone, target left unchanged"),
        }
        Ok(())
    }

    /// Change the away-mode default temperature of a season.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::Validation`] if `temperature` is not finite.
    #[tracing::instrument(skip(self))]
    pub fn set_away_temperature(
        &mut self,
        season: Season,
        temperature: f64,
    ) -> Result<(), HearthError> {
        ensure_finite(temperature)?;
        self.away_temperatures.set(season, temperature);
        Ok(())
    }

    /// Write a manual temperature to a room and freeze it.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::NotFound`] if the room does not exist, or
    /// [`HearthError::Validation`] if `temperature` is not finite.
    #[tracing::instrument(skip(self, layout))]
    pub fn override_room_temperature<L: HouseLayout>(
        &self,
        layout: &mut L,
        key: LocationKey,
        temperature: f64,
    ) -> Result<f64, HearthError> {
        let room = layout.get_room_mut(key)?;
        room.override_temperature(temperature)?;
        tracing::info!(
            zone = self.zone_of(key).map(|zone| zone.name.as_str()),
            "room temperature overridden"
        );
        Ok(room.temperature)
    }

    /// Hand a room back to the automatic control, in the current global mode.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::NotFound`] if the room does not exist, or
    /// [`HearthError::InvalidStateTransition`] if it is not overridden.
    #[tracing::instrument(skip(self, layout))]
    pub fn clear_room_override<L: HouseLayout>(
        &self,
        layout: &mut L,
        key: LocationKey,
    ) -> Result<RoomHeatingMode, HearthError> {
        let mode = layout.get_room_mut(key)?.clear_override(self.heating_mode)?;
        tracing::info!(%mode, "room override removed");
        Ok(mode)
    }

    /// Read a room's temperature.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::NotFound`] if the room does not exist.
    pub fn room_temperature<L: HouseLayout>(
        &self,
        layout: &L,
        key: LocationKey,
    ) -> Result<f64, HearthError> {
        Ok(layout.get_room(key)?.temperature)
    }

    /// Set every room of the house to the outside temperature.
    pub fn initialize_room_temperatures<L: HouseLayout>(&self, layout: &mut L) {
        let mut count = 0_usize;
        for room in layout.rooms_mut() {
            room.temperature = self.outside_temperature;
            count += 1;
        }
        tracing::info!(
            rooms = count,
            temperature = self.outside_temperature,
            "room temperatures initialised to outside temperature"
        );
    }

    /// Drop every zone. Ids keep increasing afterwards.
    pub fn reset(&mut self) {
        self.zones.clear();
    }

    /// React to a house event. This is how the model is driven.
    pub fn on_event<L: HouseLayout>(&mut self, event: &HouseEvent, layout: &mut L) {
        match *event {
            HouseEvent::TimeIncremented { date } => self.on_time_increment(date, layout),
            HouseEvent::OutsideTemperatureChanged { temperature } => {
                self.outside_temperature = temperature;
            }
            HouseEvent::SeasonChanged { season } => self.season = season,
            HouseEvent::AwayModeChanged { enabled } => self.on_away_mode_changed(enabled, layout),
            HouseEvent::RoomsChanged => self.prune_missing_rooms(layout),
        }
    }

    /// Inputs every zone receives for a tick at `date`.
    #[must_use]
    pub fn tick_conditions(&self, date: SimDateTime) -> TickConditions {
        TickConditions {
            date,
            mode: self.heating_mode,
            away_temperature: self.away_temperatures.for_season(self.season),
            outside_temperature: self.outside_temperature,
            season: self.season,
        }
    }

    /// Run one control tick in every zone.
    pub fn on_time_increment<L: HouseLayout>(&self, date: SimDateTime, layout: &mut L) {
        let conditions = self.tick_conditions(date);
        let mut adjusted = 0;
        for zone in &self.zones {
            let rooms = layout.rooms_mut().filter(|room| zone.contains(room.key));
            adjusted += zone.adjust_room_temperatures(rooms, &conditions);
        }
        tracing::debug!(
            %date,
            zones = self.zones.len(),
            rooms = adjusted,
            season = %self.season,
            "heating tick"
        );
    }

    fn on_away_mode_changed<L: HouseLayout>(&mut self, enabled: bool, layout: &mut L) {
        self.heating_mode = if enabled {
            HeatingMode::Away
        } else {
            HeatingMode::Zone
        };
        for room in layout.rooms_mut() {
            room.follow_global_mode(self.heating_mode);
        }
        tracing::info!(mode = ?self.heating_mode, "global heating mode changed");
    }

    fn prune_missing_rooms<L: HouseLayout>(&mut self, layout: &L) {
        for zone in &mut self.zones {
            let before = zone.rooms().len();
            zone.retain_rooms(|key| layout.contains(key));
            let dropped = before - zone.rooms().len();
            if dropped > 0 {
                tracing::warn!(zone = %zone.name, dropped, "removed rooms missing from the layout");
            }
        }
    }

    /// Remove `key` from every zone except `keep`.
    fn evict(&mut self, key: LocationKey, keep: Option<ZoneId>) {
        for zone in &mut self.zones {
            if Some(zone.id) != keep && zone.remove_room(key) {
                tracing::debug!(room = %key, from = %zone.name, "room moved out of heating zone");
            }
        }
    }

    fn zone_index(&self, id: ZoneId) -> Result<usize, HearthError> {
        self.zones
            .iter()
            .position(|zone| zone.id == id)
            .ok_or_else(|| zone_not_found(id))
    }
}

fn zone_not_found(id: ZoneId) -> HearthError {
    NotFoundError {
        entity: "Heating zone",
        id: id.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{VecLayout, assert_close, at, key, layout, room};
    use hearth_domain::room::WindowState;

    fn model() -> HeatingModel {
        HeatingModel::new(10.0, Season::Winter)
    }

    fn zone_id(model: &mut HeatingModel, layout: &VecLayout, name: &str, rooms: &[u32]) -> ZoneId {
        let keys: Vec<_> = rooms.iter().map(|n| key(*n)).collect();
        model.add_zone(layout, name, &keys).unwrap().id
    }

    fn assert_zones_disjoint(model: &HeatingModel) {
        for (i, a) in model.zones().iter().enumerate() {
            for b in &model.zones()[i + 1..] {
                for k in a.rooms() {
                    assert!(!b.contains(*k), "room {k} in both {} and {}", a.name, b.name);
                }
            }
        }
    }

    #[test]
    fn should_create_zone_with_default_schedule() {
        let layout = layout();
        let mut model = model();

        let zone = model.add_zone(&layout, "Upstairs", &[key(1), key(2)]).unwrap();

        assert_eq!(zone.name, "Upstairs");
        assert_eq!(zone.rooms(), &[key(1), key(2)]);
        for period in HeatingZonePeriod::ALL {
            assert_close(zone.periods.target(period), 22.0);
        }
    }

    #[test]
    fn should_reject_duplicate_zone_name() {
        let layout = layout();
        let mut model = model();
        zone_id(&mut model, &layout, "Upstairs", &[1]);

        let result = model.add_zone(&layout, "Upstairs", &[key(2)]);

        assert!(matches!(
            result,
            Err(HearthError::Conflict(ConflictError::DuplicateZoneName(_)))
        ));
        assert_eq!(model.zones().len(), 1);
    }

    #[test]
    fn should_reject_zone_with_unknown_room_without_side_effects() {
        let layout = layout();
        let mut model = model();
        let a = zone_id(&mut model, &layout, "A", &[1]);

        let result = model.add_zone(&layout, "B", &[key(1), key(99)]);

        assert!(matches!(result, Err(HearthError::NotFound(_))));
        assert!(model.get_zone(a).unwrap().contains(key(1)));
        assert_eq!(model.zones().len(), 1);
    }

    #[test]
    fn should_move_rooms_silently_when_creating_zone() {
        let layout = layout();
        let mut model = model();
        let a = zone_id(&mut model, &layout, "A", &[1, 2]);
        let b = zone_id(&mut model, &layout, "B", &[2, 3]);

        assert_eq!(model.get_zone(a).unwrap().rooms(), &[key(1)]);
        assert_eq!(model.get_zone(b).unwrap().rooms(), &[key(2), key(3)]);
        assert_zones_disjoint(&model);
    }

    #[test]
    fn should_remove_zone_and_report_missing_zone() {
        let layout = layout();
        let mut model = model();
        let a = zone_id(&mut model, &layout, "A", &[1]);

        let removed = model.remove_zone(a).unwrap();
        assert_eq!(removed.name, "A");
        assert!(model.zones().is_empty());
        assert!(model.zone_of(key(1)).is_none());

        assert!(matches!(model.remove_zone(a), Err(HearthError::NotFound(_))));
    }

    #[test]
    fn should_move_room_between_zones_without_stale_conflict() {
        let layout = layout();
        let mut model = model();
        let a = zone_id(&mut model, &layout, "A", &[1]);
        let b = zone_id(&mut model, &layout, "B", &[]);

        model.add_room_to_zone(&layout, b, key(1)).unwrap();
        assert!(!model.get_zone(a).unwrap().contains(key(1)));
        assert!(model.get_zone(b).unwrap().contains(key(1)));

        model.add_room_to_zone(&layout, a, key(1)).unwrap();
        assert!(model.get_zone(a).unwrap().contains(key(1)));
        assert!(!model.get_zone(b).unwrap().contains(key(1)));
    }

    #[test]
    fn should_conflict_when_room_already_in_target_zone() {
        let layout = layout();
        let mut model = model();
        let a = zone_id(&mut model, &layout, "A", &[1]);

        let result = model.add_room_to_zone(&layout, a, key(1));

        assert!(matches!(
            result,
            Err(HearthError::Conflict(ConflictError::RoomAlreadyInZone { .. }))
        ));
        assert_eq!(model.get_zone(a).unwrap().rooms(), &[key(1)]);
    }

    #[test]
    fn should_report_not_found_when_adding_to_unknown_zone_or_room() {
        let layout = layout();
        let mut model = model();
        let a = zone_id(&mut model, &layout, "A", &[]);

        assert!(matches!(
            model.add_room_to_zone(&layout, ZoneId::from_raw(77), key(1)),
            Err(HearthError::NotFound(_))
        ));
        assert!(matches!(
            model.add_room_to_zone(&layout, a, key(99)),
            Err(HearthError::NotFound(_))
        ));
    }

    #[test]
    fn should_remove_room_from_zone() {
        let layout = layout();
        let mut model = model();
        let a = zone_id(&mut model, &layout, "A", &[1, 2]);

        model.remove_room_from_zone(&layout, a, key(1)).unwrap();
        assert_eq!(model.get_zone(a).unwrap().rooms(), &[key(2)]);

        assert!(matches!(
            model.remove_room_from_zone(&layout, a, key(1)),
            Err(HearthError::NotFound(_))
        ));
    }

    #[test]
    fn should_ignore_period_target_for_unknown_zone() {
        let layout = layout();
        let mut model = model();
        let a = zone_id(&mut model, &layout, "A", &[1]);

        model
            .set_zone_period_target_temperature(a, HeatingZonePeriod::Night, 17.5)
            .unwrap();
        model
            .set_zone_period_target_temperature(ZoneId::from_raw(9), HeatingZonePeriod::Night, 30.0)
            .unwrap();

        assert_close(model.get_zone(a).unwrap().periods.night, 17.5);
        assert!(
            model
                .set_zone_period_target_temperature(a, HeatingZonePeriod::Night, f64::INFINITY)
                .is_err()
        );
    }

    #[test]
    fn should_keep_rooms_in_at_most_one_zone_across_operations() {
        let layout = layout();
        let mut model = model();
        let a = zone_id(&mut model, &layout, "A", &[1, 2]);
        let b = zone_id(&mut model, &layout, "B", &[3]);
        let ids = [a, b];

        for step in 0_u32..40 {
            let zone = ids[(step % 2) as usize];
            let room = key(step % 4 + 1);
            let _ = model.add_room_to_zone(&layout, zone, room);
            if step % 7 == 0 {
                let name = format!("C{step}");
                let _ = model.add_zone(&layout, &name, &[room, key((step + 1) % 4 + 1)]);
            }
            assert_zones_disjoint(&model);
        }
    }

    #[test]
    fn should_step_zone_rooms_on_time_increment() {
        let mut layout = VecLayout(vec![room(1, 21.0), room(2, 18.0), room(3, 18.0)]);
        layout.0[1].hvac = false;
        layout.0[2].hvac = false;
        let mut model = model();
        zone_id(&mut model, &layout, "A", &[1, 2]);

        model.on_event(
            &HouseEvent::TimeIncremented {
                date: at(2024, 1, 10, 8),
            },
            &mut layout,
        );

        assert!(layout.0[0].hvac);
        assert_close(layout.0[0].temperature, 21.1);
        assert!(!layout.0[1].hvac);
        assert_close(layout.0[1].temperature, 17.95);
        assert_close(layout.0[2].temperature, 18.0);
    }

    #[test]
    fn should_use_seasonal_away_temperature_in_away_mode() {
        let mut layout = VecLayout(vec![room(1, 25.0)]);
        let mut model = HeatingModel::new(30.0, Season::Summer);
        model.set_away_temperature(Season::Summer, 27.0).unwrap();
        zone_id(&mut model, &layout, "A", &[1]);

        model.on_event(&HouseEvent::AwayModeChanged { enabled: true }, &mut layout);
        assert_eq!(layout.0[0].heating_mode, RoomHeatingMode::Away);
        assert_close(model.tick_conditions(at(2024, 7, 1, 8)).away_temperature, 27.0);

        model.on_time_increment(at(2024, 7, 1, 8), &mut layout);

        assert!(layout.0[0].hvac);
        assert_close(layout.0[0].temperature, 25.1);
    }

    #[test]
    fn should_not_move_overridden_rooms_into_away_mode() {
        let mut layout = layout();
        let mut model = model();
        model.override_room_temperature(&mut layout, key(2), 19.0).unwrap();

        model.on_event(&HouseEvent::AwayModeChanged { enabled: true }, &mut layout);

        assert_eq!(model.heating_mode(), HeatingMode::Away);
        assert_eq!(layout.0[0].heating_mode, RoomHeatingMode::Away);
        assert_eq!(layout.0[1].heating_mode, RoomHeatingMode::Overridden);

        let mode = model.clear_room_override(&mut layout, key(2)).unwrap();
        assert_eq!(mode, RoomHeatingMode::Away);
    }

    #[test]
    fn should_hold_overridden_temperature_across_ticks() {
        let mut layout = layout();
        let mut model = model();
        zone_id(&mut model, &layout, "A", &[1, 2]);

        let written = model.override_room_temperature(&mut layout, key(1), 19.0).unwrap();
        assert_close(written, 19.0);
        for hour in 8..13 {
            model.on_time_increment(at(2024, 1, 10, hour), &mut layout);
        }

        assert_close(layout.0[0].temperature, 19.0);
        assert_eq!(layout.0[0].heating_mode, RoomHeatingMode::Overridden);
        assert_close(layout.0[1].temperature, 20.5);

        let mode = model.clear_room_override(&mut layout, key(1)).unwrap();
        assert_eq!(mode, RoomHeatingMode::Zone);
        model.on_time_increment(at(2024, 1, 10, 13), &mut layout);
        assert_close(layout.0[0].temperature, 19.1);
    }

    #[test]
    fn should_fail_to_clear_override_of_regular_room() {
        let mut layout = layout();
        let model = model();
        assert!(matches!(
            model.clear_room_override(&mut layout, key(1)),
            Err(HearthError::InvalidStateTransition(_))
        ));
        assert!(matches!(
            model.clear_room_override(&mut layout, key(42)),
            Err(HearthError::NotFound(_))
        ));
    }

    #[test]
    fn should_track_outside_temperature_and_season_events() {
        let mut layout = layout();
        let mut model = model();

        model.on_event(
            &HouseEvent::OutsideTemperatureChanged { temperature: 31.5 },
            &mut layout,
        );
        model.on_event(
            &HouseEvent::SeasonChanged {
                season: Season::Summer,
            },
            &mut layout,
        );

        assert_close(model.outside_temperature(), 31.5);
        assert_eq!(model.season(), Season::Summer);
    }

    #[test]
    fn should_prune_rooms_removed_from_layout() {
        let mut layout = layout();
        let mut model = model();
        let a = zone_id(&mut model, &layout, "A", &[1, 2]);

        layout.0.retain(|room| room.key != key(2));
        model.on_event(&HouseEvent::RoomsChanged, &mut layout);

        assert_eq!(model.get_zone(a).unwrap().rooms(), &[key(1)]);
    }

    #[test]
    fn should_initialize_rooms_to_outside_temperature() {
        let mut layout = layout();
        let model = model();

        model.initialize_room_temperatures(&mut layout);

        for r in &layout.0 {
            assert_close(r.temperature, 10.0);
        }
        assert_close(model.room_temperature(&layout, key(3)).unwrap(), 10.0);
    }

    #[test]
    fn should_vent_warm_rooms_in_summer() {
        let mut layout = VecLayout(vec![room(1, 26.0)]);
        let mut model = HeatingModel::new(20.0, Season::Summer);
        zone_id(&mut model, &layout, "A", &[1]);

        model.on_time_increment(at(2024, 7, 1, 14), &mut layout);

        let vented = &layout.0[0];
        assert!(!vented.hvac);
        assert_eq!(vented.windows[0].state, WindowState::Open);
        assert_close(vented.temperature, 25.95);
    }

    #[test]
    fn should_forget_zones_on_reset_but_not_reuse_ids() {
        let layout = layout();
        let mut model = model();
        let a = zone_id(&mut model, &layout, "A", &[1]);

        model.reset();
        let b = zone_id(&mut model, &layout, "A", &[1]);

        assert_eq!(model.zones().len(), 1);
        assert_ne!(a, b);
    }
}
