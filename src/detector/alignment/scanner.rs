//! Row scanner: a light/dark/light run-length state machine
//!
//! The state is an explicit `(phase, counts)` value advanced one pixel at a
//! time by [`RunState::step`]. When a dark pixel follows the trailing light
//! run, the completed triple is emitted and the state slides so the trailing
//! light run becomes the next leading run.

use super::ratio::{RunCounts, is_valid_ratio};
use crate::models::PixelGrid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Phase {
    /// Skipping light pixels before the first dark run; their length is
    /// unknown because the window may start mid-run.
    Idle,
    /// Counting the dark centre run
    Dark,
    /// Counting the light run after the centre
    TrailingLight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RunState {
    phase: Phase,
    counts: RunCounts,
}

impl RunState {
    pub(crate) const START: Self = Self {
        phase: Phase::Idle,
        counts: [0; 3],
    };

    /// Advance by one pixel. Returns the next state and, when a full
    /// light/dark/light triple has just ended, its counts.
    pub(crate) fn step(self, dark: bool) -> (Self, Option<RunCounts>) {
        let [leading, centre, trailing] = self.counts;
        match (self.phase, dark) {
            (Phase::Idle, false) => (self, None),
            (Phase::Idle, true) => (Self::counting_dark([0, 1, 0]), None),
            (Phase::Dark, true) => (Self::counting_dark([leading, centre + 1, 0]), None),
            (Phase::Dark, false) | (Phase::TrailingLight, false) => (
                Self {
                    phase: Phase::TrailingLight,
                    counts: [leading, centre, trailing + 1],
                },
                None,
            ),
            (Phase::TrailingLight, true) => {
                (Self::counting_dark([trailing, 1, 0]), Some(self.counts))
            }
        }
    }

    /// Counts still open when the row ends, if a trailing light run was
    /// being counted
    pub(crate) fn pending(&self) -> Option<RunCounts> {
        (self.phase == Phase::TrailingLight).then_some(self.counts)
    }

    fn counting_dark(counts: RunCounts) -> Self {
        Self {
            phase: Phase::Dark,
            counts,
        }
    }
}

/// A triple on one row whose runs match the expected module size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RowHit {
    pub counts: RunCounts,
    /// Column just past the trailing light run
    pub end: usize,
}

/// Lazily yields the valid triples of one row within `[start, end)`.
///
/// The last item, if any, may come from the triple still open at `end`.
pub(crate) struct RowScanner<'a, G: PixelGrid + ?Sized> {
    grid: &'a G,
    row: usize,
    col: usize,
    end: usize,
    module_size: f32,
    state: RunState,
    finished: bool,
}

impl<'a, G: PixelGrid + ?Sized> RowScanner<'a, G> {
    pub(crate) fn new(grid: &'a G, row: usize, start: usize, end: usize, module_size: f32) -> Self {
        Self {
            grid,
            row,
            col: start,
            end,
            module_size,
            state: RunState::START,
            finished: false,
        }
    }
}

impl<G: PixelGrid + ?Sized> Iterator for RowScanner<'_, G> {
    type Item = RowHit;

    fn next(&mut self) -> Option<RowHit> {
        while self.col < self.end {
            let col = self.col;
            self.col += 1;

            let (next, completed) = self.state.step(self.grid.is_dark(col, self.row));
            self.state = next;
            if let Some(counts) = completed.filter(|c| is_valid_ratio(c, self.module_size)) {
                return Some(RowHit { counts, end: col });
            }
        }

        if self.finished {
            return None;
        }
        self.finished = true;
        self.state
            .pending()
            .filter(|counts| is_valid_ratio(counts, self.module_size))
            .map(|counts| RowHit {
                counts,
                end: self.end,
            })
    }
}
