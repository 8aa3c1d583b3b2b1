//! Fixed-interval driver for a single round
//!
//! The driver owns the round for its whole lifetime. Each call to
//! [`RoundDriver::next_tick`] waits for the timer and then advances the
//! simulation exactly once, so a tick is always fully processed before the
//! next one can start.

use rand::Rng;
use std::time::Duration;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

use crate::game::{Direction, Outcome, Round, RoundResult};

pub struct RoundDriver<R> {
    round: Round<R>,
    tick_timer: Interval,
}

impl<R: Rng> RoundDriver<R> {
    /// The first move happens one full `period` after this call
    pub fn new(round: Round<R>, period: Duration) -> Self {
        let mut tick_timer = interval_at(Instant::now() + period, period);
        tick_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        Self { round, tick_timer }
    }

    /// Wait for the next tick and advance the round.
    ///
    /// A finished round never ticks again, so this pends forever once the
    /// outcome is terminal.
    pub async fn next_tick(&mut self) -> Outcome {
        if self.round.is_finished() {
            return std::future::pending().await;
        }

        self.tick_timer.tick().await;
        self.round.tick()
    }

    pub fn on_direction_input(&mut self, direction: Direction) {
        self.round.on_direction_input(direction);
    }

    pub fn round(&self) -> &Round<R> {
        &self.round
    }

    pub fn result(&self) -> Option<RoundResult> {
        self.round.result()
    }
}
