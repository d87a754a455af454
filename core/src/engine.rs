use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum EngineState {
    /// Nothing typed yet.
    Ready,
    /// Clock running.
    Active,
    /// Every interior cell answered; clock stopped.
    Completed,
}

impl Default for EngineState {
    fn default() -> Self {
        Self::Ready
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditOutcome {
    /// Input failed validation or targeted a header; nothing changed.
    Rejected,
    Correct(Award),
    AlreadyCorrect,
    Incorrect {
        demoted: bool,
    },
    Completed {
        award: Option<Award>,
        bonus: u32,
    },
}

impl EditOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::Rejected)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyOutcome {
    /// Not a navigation key; leave it to the focused text field.
    PassThrough,
    /// Focus and select-all the contents of this cell.
    Focus(Coord2),
    /// Right or Tab moved the selection; the browser must not act on the key.
    Advance(Coord2),
    PairShifted,
    NoChange,
}

impl KeyOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::PassThrough | Self::NoChange)
    }

    /// Only a forward move on the single selection swallows the key.
    pub const fn prevents_default(self) -> bool {
        matches!(self, Self::Advance(_))
    }

    pub const fn focus_target(self) -> Option<Coord2> {
        match self {
            Self::Focus(coords) | Self::Advance(coords) => Some(coords),
            _ => None,
        }
    }
}

/// Initial selection, the first fillable cell.
pub const START_SELECTION: Coord2 = (0, 1);

/// The whole game: board, selection, scoring, modes, clock and celebration.
#[derive(Clone, Debug)]
pub struct PlayEngine {
    board: Board,
    selection: Coord2,
    scorecard: Scorecard,
    modes: ModeState,
    clock: GameClock,
    celebration: Celebration,
    state: EngineState,
}

impl PlayEngine {
    /// `seed` drives the celebration colours.
    pub fn new(seed: u64) -> Self {
        Self {
            board: Board::new(),
            selection: START_SELECTION,
            scorecard: Scorecard::new(),
            modes: ModeState::new(),
            clock: GameClock::new(),
            celebration: Celebration::new(seed),
            state: Default::default(),
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn cell_at(&self, coords: Coord2) -> BoardCell {
        self.board.cell_at(coords)
    }

    pub fn selection(&self) -> Coord2 {
        self.selection
    }

    pub fn score(&self) -> u32 {
        self.scorecard.score()
    }

    pub fn streak(&self) -> u32 {
        self.scorecard.streak()
    }

    pub fn is_correct_at(&self, coords: Coord2) -> bool {
        self.scorecard.is_correct(coords)
    }

    pub fn modes(&self) -> &ModeState {
        &self.modes
    }

    pub fn mode(&self) -> Option<LearningMode> {
        self.modes.active()
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.clock.seconds()
    }

    pub fn elapsed_time(&self) -> ElapsedTime {
        self.clock.display()
    }

    /// Whether the host should keep a one-second clock tick scheduled.
    pub fn is_clock_running(&self) -> bool {
        self.clock.is_running()
    }

    /// Whether the host should keep a one-second celebration tick scheduled.
    pub fn is_celebrating(&self) -> bool {
        self.celebration.is_active()
    }

    pub fn celebration_color_at(&self, coords: Coord2) -> Option<Rgb> {
        self.celebration.color_at(coords)
    }

    /// Single click: moves the selection only.
    pub fn select(&mut self, coords: Coord2) -> bool {
        let Ok(coords) = self.board.validate_coords(coords) else {
            return false;
        };
        let changed = self.selection != coords;
        self.selection = coords;
        changed
    }

    /// Double click: selects the cell and applies the active learning mode.
    pub fn double_activate(&mut self, coords: Coord2) -> bool {
        let Ok(coords) = self.board.validate_coords(coords) else {
            return false;
        };
        self.selection = coords;
        self.modes.activate(coords);
        true
    }

    pub fn toggle_mode(&mut self, mode: LearningMode) -> Option<LearningMode> {
        let active = self.modes.toggle(mode);
        log::debug!("learning mode: {:?}", active);
        active
    }

    pub fn handle_key_name(&mut self, name: &str) -> KeyOutcome {
        match NavKey::from_key_name(name) {
            Some(key) => self.handle_key(key),
            None => KeyOutcome::PassThrough,
        }
    }

    pub fn handle_key(&mut self, key: NavKey) -> KeyOutcome {
        if self.modes.has_fraction_pair() {
            return if self.modes.shift_fraction_pair(key) {
                KeyOutcome::PairShifted
            } else {
                KeyOutcome::NoChange
            };
        }

        self.selection = navigation::step(self.selection, key);
        if key.is_forward() {
            KeyOutcome::Advance(self.selection)
        } else {
            KeyOutcome::Focus(self.selection)
        }
    }

    /// Text change in a cell; invalid input leaves every piece of state untouched.
    pub fn edit_cell(&mut self, coords: Coord2, text: &str) -> EditOutcome {
        let previous = match self.board.set_answer(coords, text) {
            Ok(previous) => previous,
            Err(err) => {
                log::trace!("edit {:?} {:?} rejected: {}", coords, text, err);
                return EditOutcome::Rejected;
            }
        };

        if !self.clock.is_running() && previous.is_empty() && !text.is_empty() {
            self.start_clock();
        }

        if !self.board.is_correct_at(coords) {
            let demoted = self.scorecard.record_incorrect(coords);
            return EditOutcome::Incorrect { demoted };
        }

        let correct_before = self.scorecard.correct_count();
        let award = self.scorecard.record_correct(coords, self.clock.seconds());

        if correct_before + 1 == INTERIOR_CELLS {
            let bonus = self.complete();
            return EditOutcome::Completed { award, bonus };
        }

        match award {
            Some(award) => EditOutcome::Correct(award),
            None => EditOutcome::AlreadyCorrect,
        }
    }

    /// One second of game time; false when the clock is stopped.
    pub fn tick_clock(&mut self) -> bool {
        self.clock.tick()
    }

    /// One second of celebration.
    pub fn tick_celebration(&mut self) -> CelebrationTick {
        self.celebration.tick()
    }

    fn start_clock(&mut self) {
        log::debug!("clock started at {} s", self.clock.seconds());
        self.clock.start();
        self.state = EngineState::Active;
    }

    fn complete(&mut self) -> u32 {
        let bonus = completion_bonus(self.clock.seconds());
        self.scorecard.add_bonus(bonus);
        self.clock.stop();
        self.celebration.start();
        self.state = EngineState::Completed;
        log::debug!(
            "board completed at {} with bonus {}, score {}",
            self.clock.display(),
            bonus,
            self.scorecard.score()
        );
        bonus
    }
}
