use core::fmt;
use serde::{Deserialize, Serialize};

/// Whole-second game clock, advanced by the host once per second while running.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameClock {
    seconds: u32,
    started: bool,
}

impl GameClock {
    pub const fn new() -> Self {
        Self {
            seconds: 0,
            started: false,
        }
    }

    pub const fn seconds(&self) -> u32 {
        self.seconds
    }

    pub const fn is_running(&self) -> bool {
        self.started
    }

    pub fn start(&mut self) {
        self.started = true;
    }

    pub fn stop(&mut self) {
        self.started = false;
    }

    /// Advances one second; returns false when the clock is stopped.
    pub fn tick(&mut self) -> bool {
        if self.started {
            self.seconds = self.seconds.saturating_add(1);
        }
        self.started
    }

    pub const fn display(&self) -> ElapsedTime {
        ElapsedTime(self.seconds)
    }
}

/// `M:SS` rendering of a number of seconds.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ElapsedTime(pub u32);

impl fmt::Display for ElapsedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.0 / 60, self.0 % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn stopped_clock_does_not_advance() {
        let mut clock = GameClock::new();

        assert!(!clock.tick());
        assert_eq!(clock.seconds(), 0);

        clock.start();
        assert!(clock.tick());
        assert!(clock.tick());
        clock.stop();
        assert!(!clock.tick());
        assert_eq!(clock.seconds(), 2);
    }

    #[test]
    fn restarting_keeps_elapsed_seconds() {
        let mut clock = GameClock::new();
        clock.start();
        clock.tick();
        clock.stop();
        clock.start();
        clock.tick();

        assert_eq!(clock.seconds(), 2);
    }

    #[test]
    fn elapsed_time_pads_seconds() {
        assert_eq!(ElapsedTime(0).to_string(), "0:00");
        assert_eq!(ElapsedTime(9).to_string(), "0:09");
        assert_eq!(ElapsedTime(75).to_string(), "1:15");
        assert_eq!(ElapsedTime(3600).to_string(), "60:00");
    }
}
