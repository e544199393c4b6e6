//! Merged id ranges for range scans.
//!
//! Every trixel at level `L` owns the contiguous block of its descendants at
//! a deeper level `T`:
//!
//! ```text
//! low  = id << 2(T - L)
//! high = low + 4^(T - L) - 1
//! ```
//!
//! A [`RangeSet`] expands each trixel of a cover to that block, sorts the
//! blocks and merges any that overlap or touch. The result is the smallest
//! set of disjoint, ascending ranges whose union is the cover at level `T`.

use crate::constants::MAX_LEVEL;
use crate::mesh::{MeshId, Trixel};
use crate::{IndexError, IndexResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Inclusive range of ids at one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct IdRange {
    pub low: MeshId,
    pub high: MeshId,
}

impl IdRange {
    pub fn new(low: MeshId, high: MeshId) -> Self {
        Self { low, high }
    }

    /// Number of ids in the range.
    pub fn count(&self) -> u64 {
        self.high.id() - self.low.id() + 1
    }

    pub fn contains(&self, id: MeshId) -> bool {
        self.low <= id && id <= self.high
    }
}

impl fmt::Display for IdRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.low, self.high)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeSet {
    level: u32,
    ranges: Vec<IdRange>,
}

impl RangeSet {
    /// Ranges covering `trixels`, expressed at `level`.
    pub fn from_trixels<'a, I>(trixels: I, level: u32) -> IndexResult<Self>
    where
        I: IntoIterator<Item = &'a Trixel>,
    {
        Self::from_ids(trixels.into_iter().map(Trixel::id), level)
    }

    /// Ranges covering `ids`, expressed at `level`.
    ///
    /// Ids deeper than `level` contribute their ancestor at `level`.
    pub fn from_ids<I>(ids: I, level: u32) -> IndexResult<Self>
    where
        I: IntoIterator<Item = MeshId>,
    {
        if level > MAX_LEVEL {
            return Err(IndexError::depth_out_of_range(level, MAX_LEVEL));
        }

        let mut blocks = ids
            .into_iter()
            .map(|id| block_at(id, level))
            .collect::<IndexResult<Vec<_>>>()?;
        blocks.sort_unstable();

        let mut ranges: Vec<IdRange> = Vec::with_capacity(blocks.len());
        for block in blocks {
            match ranges.last_mut() {
                Some(last) if block.low.id() <= last.high.id().saturating_add(1) => {
                    last.high = last.high.max(block.high);
                }
                _ => ranges.push(block),
            }
        }

        Ok(Self { level, ranges })
    }

    pub fn pairs(&self) -> &[IdRange] {
        &self.ranges
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IdRange> {
        self.ranges.iter()
    }

    /// Number of merged ranges.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Total ids covered at [`RangeSet::level`].
    pub fn leaf_count(&self) -> u64 {
        self.ranges.iter().map(IdRange::count).sum()
    }

    /// Whether the whole of `id` lies inside the set.
    ///
    /// Ids deeper than the set's level are checked through their ancestor;
    /// shallower ids must have every descendant covered.
    pub fn contains(&self, id: MeshId) -> bool {
        let Ok(block) = block_at(id, self.level) else {
            return false;
        };
        let i = self.ranges.partition_point(|r| r.high < block.low);
        self.ranges
            .get(i)
            .is_some_and(|r| r.low <= block.low && block.high <= r.high)
    }
}

impl<'a> IntoIterator for &'a RangeSet {
    type Item = &'a IdRange;
    type IntoIter = std::slice::Iter<'a, IdRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.iter()
    }
}

fn block_at(id: MeshId, level: u32) -> IndexResult<IdRange> {
    if id.level() > level && id.is_valid() {
        let ancestor = id
            .ancestor(level)
            .ok_or_else(|| IndexError::invalid_name(id.name(), "no ancestor at range level"))?;
        return Ok(IdRange::new(ancestor, ancestor));
    }
    let (low, high) = id.descendant_range(level)?;
    Ok(IdRange::new(low, high))
}
