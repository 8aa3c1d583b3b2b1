use log::info;
use std::time::{Duration, Instant};

use crate::game::RoundResult;

/// Session-wide bookkeeping shown around the board
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    /// Score carried over from the last round: kept on a win, zero on a loss
    pub high_score: i32,
    pub rounds_played: u32,
    pub wins: u32,
}

impl GameMetrics {
    pub fn new(high_score: i32) -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            high_score,
            rounds_played: 0,
            wins: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    pub fn on_round_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
    }

    pub fn on_round_over(&mut self, result: &RoundResult) {
        self.rounds_played += 1;
        if result.is_win() {
            self.wins += 1;
        }

        let carried = result.carried_score();
        if carried != self.high_score {
            info!("high score {} -> {}", self.high_score, carried);
        }
        self.high_score = carried;
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new(0)
    }
}
