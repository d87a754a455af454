use alloc::collections::{BTreeMap, BTreeSet};
use serde::{Deserialize, Serialize};

use crate::*;

/// Points for every freshly correct answer.
pub const BASE_POINTS: u32 = 10;

/// Largest speed bonus, shrinking by one point per elapsed second.
pub const SPEED_BONUS: u32 = 20;

pub const MIN_BONUS: u32 = 0;

/// Exact streak lengths that pay out, with their bonus.
pub const STREAK_MILESTONES: [(u32, u32); 3] = [(3, 50), (5, 150), (10, 500)];

pub const COMPLETION_BONUS_MAX: u32 = 5000;
pub const COMPLETION_BONUS_PER_SECOND: u32 = 10;
pub const COMPLETION_BONUS_FLOOR: u32 = 500;

pub const fn speed_bonus(time_taken: u32) -> u32 {
    let bonus = SPEED_BONUS.saturating_sub(time_taken);
    if bonus > MIN_BONUS { bonus } else { MIN_BONUS }
}

/// Bonus for reaching `streak`; only the exact milestone values pay.
pub fn streak_bonus(streak: u32) -> u32 {
    STREAK_MILESTONES
        .iter()
        .find(|&&(milestone, _)| milestone == streak)
        .map_or(0, |&(_, bonus)| bonus)
}

pub const fn completion_bonus(elapsed_secs: u32) -> u32 {
    let bonus =
        COMPLETION_BONUS_MAX.saturating_sub(elapsed_secs.saturating_mul(COMPLETION_BONUS_PER_SECOND));
    if bonus > COMPLETION_BONUS_FLOOR {
        bonus
    } else {
        COMPLETION_BONUS_FLOOR
    }
}

/// Breakdown of the points paid for one freshly correct answer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Award {
    pub base: u32,
    pub speed: u32,
    pub streak: u32,
}

impl Award {
    pub const fn total(self) -> u32 {
        self.base + self.speed + self.streak
    }
}

/// Score, streak and the set of cells currently holding the right product.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Scorecard {
    score: u32,
    streak: u32,
    correct: BTreeSet<Coord2>,
    timestamps: BTreeMap<Coord2, u32>,
}

impl Scorecard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn is_correct(&self, coords: Coord2) -> bool {
        self.correct.contains(&coords)
    }

    pub fn correct_count(&self) -> CellCount {
        self.correct.len().try_into().unwrap_or(CellCount::MAX)
    }

    /// Timer value stored when `coords` last became correct.
    pub fn timestamp(&self, coords: Coord2) -> Option<u32> {
        self.timestamps.get(&coords).copied()
    }

    /// Marks `coords` correct at timer value `now`.
    ///
    /// Returns the award when the cell was not already correct, `None` otherwise.
    pub fn record_correct(&mut self, coords: Coord2, now: u32) -> Option<Award> {
        if !self.correct.insert(coords) {
            return None;
        }

        // a zero timestamp counts as unrecorded
        let since = self
            .timestamps
            .insert(coords, now)
            .filter(|&stamp| stamp != 0)
            .unwrap_or(now);

        self.streak += 1;
        let award = Award {
            base: BASE_POINTS,
            speed: speed_bonus(now.saturating_sub(since)),
            streak: streak_bonus(self.streak),
        };
        self.score += award.total();

        Some(award)
    }

    /// Breaks the streak and unmarks `coords`; true when it was marked before.
    pub fn record_incorrect(&mut self, coords: Coord2) -> bool {
        self.streak = 0;
        self.correct.remove(&coords)
    }

    pub fn add_bonus(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }
}
