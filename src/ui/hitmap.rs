//! Mouse hit regions recorded while rendering.
//!
//! The renderer knows where each row and pager button lands on screen after
//! scrolling and layout. It records those cells here so a click can be mapped
//! back to an event without recomputing the frame.

use std::ops::Range;

/// What a clickable region does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// A list row, by position on the current page.
    Row(usize),
    PreviousPage,
    NextPage,
}

/// One clickable span on one screen row. Rows and columns are 0-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitRegion {
    pub row: usize,
    pub cols: Range<usize>,
    pub target: HitTarget,
}

/// All clickable regions of the last rendered frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    regions: Vec<HitRegion>,
}

impl HitMap {
    pub fn push(&mut self, region: HitRegion) {
        self.regions.push(region);
    }

    /// Target under the cell at `row`, `col`, if any.
    #[must_use]
    pub fn target_at(&self, row: usize, col: usize) -> Option<HitTarget> {
        self.regions
            .iter()
            .find(|r| r.row == row && r.cols.contains(&col))
            .map(|r| r.target)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
