//! Gravitational field magnitude on a uniform lattice
//!
//! Display-only: nothing here feeds back into body motion. Each pass
//! recomputes every cell from scratch against every body, O(cells·bodies).

use glam::Vec2;

use super::body::Body;
use super::torus;
use crate::config::SimConfig;

/// One lattice cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldCell {
    /// Top-left corner
    pub x: f32,
    pub y: f32,
    /// Summed `G·m / r²` from the last sampling pass
    pub field_strength: f32,
}

impl FieldCell {
    #[inline]
    pub fn center(&self, cell_size: f32) -> Vec2 {
        Vec2::new(self.x + cell_size / 2.0, self.y + cell_size / 2.0)
    }
}

/// Row-major grid of field cells tiling the plane
#[derive(Debug, Clone)]
pub struct FieldGrid {
    cell_size: f32,
    columns: usize,
    rows: usize,
    cells: Vec<FieldCell>,
}

impl FieldGrid {
    /// Build the lattice for the configured plane; cell counts truncate
    pub fn new(config: &SimConfig) -> Self {
        let cell_size = config.cell_size;
        let columns = (config.width / cell_size) as usize;
        let rows = (config.height / cell_size) as usize;

        let cells = (0..rows)
            .flat_map(|row| {
                (0..columns).map(move |col| FieldCell {
                    x: col as f32 * cell_size,
                    y: row as f32 * cell_size,
                    field_strength: 0.0,
                })
            })
            .collect();

        Self {
            cell_size,
            columns,
            rows,
            cells,
        }
    }

    /// Recompute every cell's field strength from `bodies`
    ///
    /// Contributions whose squared distance does not exceed the epsilon guard
    /// are skipped.
    pub fn sample(&mut self, bodies: &[Body], config: &SimConfig) {
        let size = config.plane_size();
        let g = config.gravitational_constant;
        let epsilon = config.min_distance_squared;
        let cell_size = self.cell_size;

        for cell in &mut self.cells {
            let center = cell.center(cell_size);
            cell.field_strength = 0.0;
            for body in bodies {
                let distance_squared = torus::distance_squared(center, body.position, size);
                if distance_squared > epsilon {
                    cell.field_strength += g * body.mass / distance_squared;
                }
            }
        }
    }

    /// Zero every cell
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.field_strength = 0.0;
        }
    }

    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[FieldCell] {
        &self.cells
    }

    pub fn cell(&self, col: usize, row: usize) -> Option<&FieldCell> {
        if col >= self.columns || row >= self.rows {
            return None;
        }
        self.cells.get(row * self.columns + col)
    }

    /// Field strengths in row-major order
    pub fn strengths(&self) -> impl Iterator<Item = f32> + '_ {
        self.cells.iter().map(|c| c.field_strength)
    }

    /// Largest cell value, for normalising a color map
    pub fn max_strength(&self) -> f32 {
        self.strengths().fold(0.0, f32::max)
    }
}
