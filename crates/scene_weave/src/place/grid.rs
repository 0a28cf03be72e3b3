//! Discretized occupancy map for coarse spatial-overlap testing.
use bitvec::prelude::*;
use glam::Vec2;

use crate::error::{Error, Result};

/// Default grid resolution in cells per axis.
pub const DEFAULT_RESOLUTION: usize = 64;

/// 2D boolean occupancy map over a bounded scene rectangle centered at the
/// origin.
///
/// Footprints are quantized with conservative floor/ceil rounding: a
/// reservation may be rejected even though the exact rectangles would not
/// touch, but an accepted reservation never truly overlaps a previous one.
/// Created fresh per scene build, mutated by reservations, then discarded.
#[derive(Debug, Clone)]
pub struct OccupancyGrid {
    scene_size: Vec2,
    cols: usize,
    rows: usize,
    cells: BitVec,
}

impl OccupancyGrid {
    /// Creates an empty grid over `scene_size` world units.
    ///
    /// # Errors
    ///
    /// Fails fast with [`Error::InvalidConfig`] on a zero-area scene bound or
    /// zero resolution.
    pub fn new(scene_size: Vec2, cols: usize, rows: usize) -> Result<Self> {
        if scene_size.x <= 0.0 || scene_size.y <= 0.0 {
            return Err(Error::InvalidConfig(
                "scene size must be > 0 in both components".into(),
            ));
        }
        if cols == 0 || rows == 0 {
            return Err(Error::InvalidConfig(
                "grid resolution must be > 0 in both axes".into(),
            ));
        }

        Ok(Self {
            scene_size,
            cols,
            rows,
            cells: bitvec![0; cols * rows],
        })
    }

    /// Creates a grid with the default 64x64 resolution.
    pub fn with_default_resolution(scene_size: Vec2) -> Result<Self> {
        Self::new(scene_size, DEFAULT_RESOLUTION, DEFAULT_RESOLUTION)
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn scene_size(&self) -> Vec2 {
        self.scene_size
    }

    /// Whether the given cell is reserved.
    pub fn is_occupied(&self, col: usize, row: usize) -> bool {
        self.cells[row * self.cols + col]
    }

    /// Number of reserved cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.count_ones()
    }

    /// Attempts to reserve the axis-aligned footprint given by center and
    /// size.
    ///
    /// Returns `false` without mutating when any covered cell is already
    /// reserved; otherwise marks every covered cell and returns `true`.
    /// Footprints clamped to an empty cell range reserve nothing and succeed.
    pub fn try_reserve(&mut self, center: Vec2, size: Vec2) -> bool {
        let (low, high) = self.cell_range(center, size);

        for row in low.1..high.1 {
            for col in low.0..high.0 {
                if self.cells[row * self.cols + col] {
                    return false;
                }
            }
        }
        for row in low.1..high.1 {
            for col in low.0..high.0 {
                self.cells.set(row * self.cols + col, true);
            }
        }
        true
    }

    /// Quantizes a world-space footprint into a half-open cell range, both
    /// ends clamped to the grid.
    fn cell_range(&self, center: Vec2, size: Vec2) -> ((usize, usize), (usize, usize)) {
        // Shift so the scene rectangle spans [0, scene_size].
        let point = center + self.scene_size / 2.0;
        let half = size / 2.0;

        let low_x = ((point.x - half.x) * self.cols as f32 / self.scene_size.x).floor();
        let low_y = ((point.y - half.y) * self.rows as f32 / self.scene_size.y).floor();
        let high_x = ((point.x + half.x) * self.cols as f32 / self.scene_size.x).ceil();
        let high_y = ((point.y + half.y) * self.rows as f32 / self.scene_size.y).ceil();

        let clamp = |v: f32, max: usize| v.clamp(0.0, max as f32) as usize;
        (
            (clamp(low_x, self.cols), clamp(low_y, self.rows)),
            (clamp(high_x, self.cols), clamp(high_y, self.rows)),
        )
    }
}
