//! Simulation clock: advances simulated time and publishes it.
//!
//! Each tick takes the house lock for the whole listener chain, so ticks
//! are serialized with each other and with external operations.

use std::sync::Arc;
use std::time::Duration;

use chrono::TimeDelta;
use hearth_domain::time::SimDateTime;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use crate::house::{SharedHouse, lock};
use crate::ports::HouseLayout;

/// Shortest wall-clock interval accepted by [`SimulationClock::start`].
pub const MIN_TICK_INTERVAL: Duration = Duration::from_millis(1);

pub struct SimulationClock<L> {
    house: SharedHouse<L>,
    step: TimeDelta,
    driver: Option<JoinHandle<()>>,
}

impl<L: HouseLayout + Send + 'static> SimulationClock<L> {
    /// Create a stopped clock advancing `house` by `step` per tick.
    #[must_use]
    pub fn new(house: SharedHouse<L>, step: TimeDelta) -> Self {
        Self {
            house,
            step,
            driver: None,
        }
    }

    #[must_use]
    pub fn step(&self) -> TimeDelta {
        self.step
    }

    /// Run one tick now. Returns the new simulated time.
    pub fn tick(&self) -> Option<SimDateTime> {
        lock(&self.house).advance_clock(self.step)
    }

    /// Tick every `interval` of wall-clock time on a background task.
    ///
    /// A running driver is replaced. The first tick happens one interval
    /// from now.
    ///
    /// # Panics
    ///
    /// Panics when called outside of a tokio runtime.
    pub fn start(&mut self, interval: Duration) {
        self.stop();

        let period = interval.max(MIN_TICK_INTERVAL);
        let house = Arc::clone(&self.house);
        let step = self.step;
        let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        self.driver = Some(tokio::spawn(async move {
            loop {
                ticker.tick().await;
                if lock(&house).advance_clock(step).is_none() {
                    break;
                }
            }
            tracing::warn!("simulation clock driver stopped");
        }));
        tracing::info!(?period, %step, "simulation clock started");
    }

    /// Stop the background driver. A tick already running finishes.
    /// Returns `false` if the clock was not running.
    pub fn stop(&mut self) -> bool {
        match self.driver.take() {
            Some(driver) => {
                driver.abort();
                tracing::info!("simulation clock stopped");
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.driver
            .as_ref()
            .is_some_and(|driver| !driver.is_finished())
    }
}

impl<L> Drop for SimulationClock<L> {
    fn drop(&mut self) {
        if let Some(driver) = self.driver.take() {
            driver.abort();
        }
    }
}
