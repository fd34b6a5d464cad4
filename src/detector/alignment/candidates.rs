//! Deduplication of row observations across one search

use super::pattern::AlignmentPattern;
use crate::models::Point;

/// Observations recorded during one search, in the order first seen.
///
/// No two entries are `about_equals` each other: a matching observation is
/// merged and reported instead of stored.
#[derive(Debug, Default)]
pub(crate) struct CandidateSet {
    candidates: Vec<AlignmentPattern>,
}

impl CandidateSet {
    pub(crate) fn new() -> Self {
        Self {
            candidates: Vec::with_capacity(5),
        }
    }

    /// Record an observation. Returns the merged pattern when it matches an
    /// earlier one, which confirms it.
    pub(crate) fn observe(&mut self, center: Point, module_size: f32) -> Option<AlignmentPattern> {
        match self
            .candidates
            .iter_mut()
            .find(|c| c.about_equals(module_size, center))
        {
            Some(existing) => {
                *existing = existing.combine_estimate(module_size, center);
                Some(*existing)
            }
            None => {
                self.candidates
                    .push(AlignmentPattern::new(center.x, center.y, module_size));
                None
            }
        }
    }

    /// The earliest unconfirmed observation, used when nothing confirms
    pub(crate) fn first(&self) -> Option<AlignmentPattern> {
        self.candidates.first().copied()
    }

    pub(crate) fn len(&self) -> usize {
        self.candidates.len()
    }
}
