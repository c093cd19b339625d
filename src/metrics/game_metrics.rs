use std::time::Duration;

/// Play-time and game counters for the status bar.
///
/// Driven by the same frame timestamps as the simulation clock, so paused time
/// is not counted.
#[derive(Debug, Clone, Default)]
pub struct GameMetrics {
    pub elapsed_time: Duration,
    pub games_played: u32,
    /// Timestamp the current running stretch began at
    resumed_at: Option<Duration>,
    /// Play time banked before the current running stretch
    banked: Duration,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, now: Duration) {
        let current = self
            .resumed_at
            .map_or(Duration::ZERO, |since| now.saturating_sub(since));
        self.elapsed_time = self.banked + current;
    }

    pub fn on_game_start(&mut self) {
        self.resumed_at = None;
        self.banked = Duration::ZERO;
        self.elapsed_time = Duration::ZERO;
    }

    pub fn on_resume(&mut self, now: Duration) {
        self.resumed_at = Some(now);
    }

    pub fn on_pause(&mut self, now: Duration) {
        self.update(now);
        self.banked = self.elapsed_time;
        self.resumed_at = None;
    }

    pub fn on_game_over(&mut self, now: Duration) {
        self.on_pause(now);
        self.games_played += 1;
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}
