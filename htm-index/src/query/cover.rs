//! Covering a convex region with trixels.
//!
//! [`Cover::run`] walks the mesh breadth-first, one level at a time,
//! starting from the eight base trixels:
//!
//! ```text
//! queue: S0..N3 (level 0)
//!   for each trixel of the current level:
//!     Full     -> kept for good, not subdivided
//!     Outside  -> dropped
//!     Partial  -> kept for this level, children queued for the next
//!   level done -> this level's partials replace the previous level's
//! stop when the queue is empty or max_depth has been classified
//! ```
//!
//! The result is every Full trixel found at any level plus the Partial
//! trixels of the last level processed. Those partials are the boundary
//! approximation at the finest resolution the depth limit allows.

use super::{CoverConfig, RangeSet};
use crate::constants::MAX_LEVEL;
use crate::mesh::{Markup, Mesh, Trixel};
use crate::{IndexError, IndexResult};
use htm_core::Convex;
use serde::Serialize;
use std::collections::VecDeque;

/// Counters from one [`Cover::run`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CoverStats {
    /// Trixels classified, over all levels.
    pub classified: usize,

    /// Full trixels in the result.
    pub full: usize,

    /// Partial trixels in the result (last level only).
    pub partial: usize,

    /// Trixels classified as Outside and discarded.
    pub outside: usize,

    /// Number of levels processed.
    pub levels: u32,

    /// Level of the last processed level.
    pub final_level: u32,
}

#[derive(Debug, Clone)]
struct Outcome {
    full: Vec<Trixel>,
    partial: Vec<Trixel>,
    stats: CoverStats,
}

/// Trixel cover of one convex region.
///
/// ```
/// use htm_core::{Convex, Halfspace, Vector3};
/// use htm_index::{Cover, Markup};
///
/// let north = Convex::from_halfspaces([Halfspace::new(Vector3::z_axis(), 0.0)]);
/// let mut cover = Cover::new(north, 1).unwrap();
/// cover.run().unwrap();
///
/// assert_eq!(cover.trixels_with(Markup::Full).unwrap().len(), 4);
/// assert_eq!(cover.trixels_with(Markup::Partial).unwrap().len(), 24);
/// ```
#[derive(Debug, Clone)]
pub struct Cover<'m> {
    mesh: &'m Mesh,
    convex: Convex,
    max_depth: u32,
    outcome: Option<Outcome>,
}

impl Cover<'static> {
    /// Cover over the shared [`Mesh::global`].
    pub fn new(convex: Convex, max_depth: u32) -> IndexResult<Self> {
        Self::with_mesh(Mesh::global(), convex, max_depth)
    }

    pub fn from_config(convex: Convex, config: &CoverConfig) -> IndexResult<Self> {
        config.validate()?;
        Self::new(convex, config.max_depth)
    }
}

impl<'m> Cover<'m> {
    pub fn with_mesh(mesh: &'m Mesh, convex: Convex, max_depth: u32) -> IndexResult<Self> {
        if max_depth > MAX_LEVEL {
            return Err(IndexError::depth_out_of_range(max_depth, MAX_LEVEL));
        }
        Ok(Self {
            mesh,
            convex,
            max_depth,
            outcome: None,
        })
    }

    pub fn convex(&self) -> &Convex {
        &self.convex
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    pub fn is_complete(&self) -> bool {
        self.outcome.is_some()
    }

    /// Classifies and subdivides until the region is resolved or
    /// `max_depth` is reached. Running again recomputes the same result.
    pub fn run(&mut self) -> IndexResult<&CoverStats> {
        let mut queue: VecDeque<Trixel> = self.mesh.bases().iter().copied().collect();
        let mut full = Vec::new();
        let mut partial = Vec::new();
        let mut stats = CoverStats::default();

        while let Some(level) = queue.front().map(Trixel::level) {
            let mut current = Vec::new();
            let mut level_full = 0usize;
            let mut level_outside = 0usize;

            while let Some(trixel) = queue.pop_front() {
                if trixel.level() != level {
                    queue.push_front(trixel);
                    break;
                }
                stats.classified += 1;
                match trixel.markup(&self.convex) {
                    Markup::Full => {
                        full.push(trixel);
                        level_full += 1;
                    }
                    Markup::Outside => level_outside += 1,
                    Markup::Partial => {
                        if level < self.max_depth {
                            queue.extend(trixel.expand()?);
                        }
                        current.push(trixel);
                    }
                }
            }

            tracing::debug!(
                level,
                full = level_full,
                partial = current.len(),
                outside = level_outside,
                queued = queue.len(),
                "Cover level complete"
            );

            stats.outside += level_outside;
            stats.levels += 1;
            stats.final_level = level;
            partial = current;

            if level >= self.max_depth {
                break;
            }
        }

        stats.full = full.len();
        stats.partial = partial.len();

        let outcome = self.outcome.insert(Outcome {
            full,
            partial,
            stats,
        });
        Ok(&outcome.stats)
    }

    fn outcome(&self, operation: &str) -> IndexResult<&Outcome> {
        self.outcome
            .as_ref()
            .ok_or_else(|| IndexError::not_run(operation))
    }

    pub fn stats(&self) -> IndexResult<&CoverStats> {
        Ok(&self.outcome("Cover::stats")?.stats)
    }

    /// Full trixels followed by the last level's Partial trixels.
    pub fn trixels(&self) -> IndexResult<impl Iterator<Item = &Trixel> + '_> {
        let outcome = self.outcome("Cover::trixels")?;
        Ok(outcome.full.iter().chain(outcome.partial.iter()))
    }

    /// Trixels of one markup. Outside trixels are not kept, so asking for
    /// them is an error.
    pub fn trixels_with(&self, markup: Markup) -> IndexResult<&[Trixel]> {
        let outcome = self.outcome("Cover::trixels_with")?;
        match markup {
            Markup::Full => Ok(&outcome.full),
            Markup::Partial => Ok(&outcome.partial),
            Markup::Outside => Err(IndexError::unsupported_markup(markup)),
        }
    }

    /// Merged id ranges of the whole cover at `level`.
    pub fn ranges(&self, level: u32) -> IndexResult<RangeSet> {
        RangeSet::from_trixels(self.trixels()?, level)
    }

    /// Merged id ranges of one markup at `level`.
    pub fn ranges_with(&self, markup: Markup, level: u32) -> IndexResult<RangeSet> {
        RangeSet::from_trixels(self.trixels_with(markup)?, level)
    }
}
