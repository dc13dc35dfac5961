//! In-session stats shown in the header line. Nothing here is persisted.

use std::time::{Duration, Instant};

pub struct SessionStats {
    pub start_time: Instant,
    pub elapsed: Duration,
    pub best_score: u32,
    pub resets: u32,
}

impl SessionStats {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed: Duration::ZERO,
            best_score: 0,
            resets: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed = self.start_time.elapsed();
    }

    pub fn on_apple(&mut self, score: u32) {
        if score > self.best_score {
            self.best_score = score;
        }
    }

    pub fn on_reset(&mut self) {
        self.resets += 1;
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut stats = SessionStats::new();
        stats.elapsed = Duration::from_secs(125);
        assert_eq!(stats.format_time(), "02:05");

        stats.elapsed = Duration::from_secs(0);
        assert_eq!(stats.format_time(), "00:00");

        stats.elapsed = Duration::from_secs(3599);
        assert_eq!(stats.format_time(), "59:59");
    }

    #[test]
    fn test_best_score_tracking() {
        let mut stats = SessionStats::new();
        stats.on_apple(3);
        stats.on_apple(1);
        assert_eq!(stats.best_score, 3);

        stats.on_reset();
        stats.on_apple(5);
        assert_eq!(stats.best_score, 5);
        assert_eq!(stats.resets, 1);
    }
}
