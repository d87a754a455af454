use core::fmt;
use ndarray::Array2;
use rand::{Rng, SeedableRng, rngs::SmallRng};
use serde::{Deserialize, Serialize};

use crate::*;

/// How long the celebration runs once the board is complete.
pub const CELEBRATION_SECS: u32 = 7;

/// Display colour, rendered as `#RRGGBB`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Picks each of the six hex digits uniformly.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let mut channel = || (rng.gen_range(0..16u8) << 4) | rng.gen_range(0..16u8);
        Self(channel(), channel(), channel())
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CelebrationTick {
    Idle,
    Recolored,
    Finished,
}

impl CelebrationTick {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// Post-completion light show: every second each cell gets a fresh colour.
#[derive(Clone, Debug)]
pub struct Celebration {
    rng: SmallRng,
    elapsed: u32,
    active: bool,
    colors: Option<Array2<Rgb>>,
}

impl Celebration {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            elapsed: 0,
            active: false,
            colors: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn color_at(&self, coords: Coord2) -> Option<Rgb> {
        self.colors
            .as_ref()
            .and_then(|colors| colors.get(coords.to_nd_index()).copied())
    }

    /// (Re)starts the sequence; colours appear on the first tick.
    pub fn start(&mut self) {
        self.active = true;
        self.elapsed = 0;
        self.colors = None;
    }

    pub fn tick(&mut self) -> CelebrationTick {
        if !self.active {
            return CelebrationTick::Idle;
        }

        self.elapsed += 1;
        if self.elapsed >= CELEBRATION_SECS {
            log::debug!("celebration finished after {} s", self.elapsed);
            self.active = false;
            self.colors = None;
            return CelebrationTick::Finished;
        }

        let rng = &mut self.rng;
        self.colors = Some(Array2::from_shape_simple_fn(SIZE.to_nd_index(), || {
            Rgb::random(rng)
        }));
        CelebrationTick::Recolored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn rgb_formats_as_upper_hex() {
        assert_eq!(Rgb(0x0a, 0xbc, 0xff).to_string(), "#0ABCFF");
        assert_eq!(Rgb::default().to_string(), "#000000");
    }

    #[test]
    fn idle_until_started() {
        let mut celebration = Celebration::new(1);

        assert_eq!(celebration.tick(), CelebrationTick::Idle);
        assert_eq!(celebration.color_at((0, 0)), None);
    }

    #[test]
    fn recolors_every_cell_then_clears_after_seven_seconds() {
        let mut celebration = Celebration::new(7);
        celebration.start();
        assert_eq!(celebration.color_at((3, 3)), None);

        for _ in 1..CELEBRATION_SECS {
            assert_eq!(celebration.tick(), CelebrationTick::Recolored);
            assert!(iter_coords().all(|coords| celebration.color_at(coords).is_some()));
        }

        assert_eq!(celebration.tick(), CelebrationTick::Finished);
        assert!(!celebration.is_active());
        assert_eq!(celebration.color_at((3, 3)), None);
        assert_eq!(celebration.tick(), CelebrationTick::Idle);
    }

    #[test]
    fn same_seed_gives_same_colors() {
        let mut a = Celebration::new(42);
        let mut b = Celebration::new(42);
        a.start();
        b.start();
        a.tick();
        b.tick();

        assert!(iter_coords().all(|coords| a.color_at(coords) == b.color_at(coords)));
    }
}
