use itertools::iproduct;
use tracing::warn;

use crate::errors::{ProceduralError, Result};
use crate::mesh::Mesh;

/// A square lattice of `(resolution + 1)²` points, stored row after row.
///
/// Every generator in this crate lays its vertices out on such a lattice and
/// shares the triangulation below, so they all wind their triangles the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    resolution: u32,
    vertex_count: usize,
    index_count: usize,
}

impl Grid {
    pub fn new(resolution: u32) -> Result<Self> {
        if resolution == 0 {
            warn!(resolution, "Rejected empty grid");
            return Err(ProceduralError::InvalidResolution(resolution));
        }

        let side = resolution as usize + 1;
        let vertex_count = side.checked_mul(side).unwrap_or(usize::MAX);
        if vertex_count - 1 > u32::MAX as usize {
            warn!(resolution, vertex_count, "Rejected grid too large for 32-bit indices");
            return Err(ProceduralError::IndexOverflow(vertex_count));
        }

        let cells = resolution as usize;
        let index_count = cells
            .checked_mul(cells)
            .and_then(|count| count.checked_mul(6))
            .ok_or(ProceduralError::IndexOverflow(vertex_count))?;

        Ok(Grid {
            resolution,
            vertex_count,
            index_count,
        })
    }

    /// Number of cells along each side.
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Number of points along each side.
    pub fn side(&self) -> u32 {
        self.resolution + 1
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn index_count(&self) -> usize {
        self.index_count
    }

    /// Index of the point in column `x` of row `z`.
    pub fn index(&self, x: u32, z: u32) -> u32 {
        z * self.side() + x
    }

    /// Every lattice point as `(x, z)`, rows outermost.
    pub fn points(&self) -> impl Iterator<Item = (u32, u32)> {
        iproduct!(0..self.side(), 0..self.side()).map(|(z, x)| (x, z))
    }

    /// Every cell as `(x, z)`, rows outermost.
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32)> {
        iproduct!(0..self.resolution, 0..self.resolution).map(|(z, x)| (x, z))
    }

    /// The two triangles covering cell `(x, z)`.
    ///
    /// The cell is split along its top-right to bottom-left diagonal:
    /// `(top left, bottom left, top right)` then `(top right, bottom left, bottom right)`.
    pub fn cell_triangles(&self, x: u32, z: u32) -> [[u32; 3]; 2] {
        let top_left = self.index(x, z);
        let top_right = top_left + 1;
        let bottom_left = self.index(x, z + 1);
        let bottom_right = bottom_left + 1;

        [
            [top_left, bottom_left, top_right],
            [top_right, bottom_left, bottom_right],
        ]
    }

    /// Allocates a mesh sized for this grid.
    pub fn allocate_mesh(&self) -> Result<Mesh> {
        Mesh::with_capacity(self.vertex_count, self.index_count)
    }

    /// Writes the index buffer for the whole grid into `mesh`.
    pub fn triangulate_into(&self, mesh: &mut Mesh) {
        for (x, z) in self.cells() {
            for triangle in self.cell_triangles(x, z) {
                mesh.push_triangle(triangle);
            }
        }
    }
}
