//! Connector plane: one face of a brick, cell by cell

use glam::UVec2;

use super::handle::BrickId;

/// `dx × dy` grid of links to the bricks touching one face.
///
/// Offsets are relative to the owning brick's minimum corner, not world
/// coordinates. A cell is `Some` iff another placed brick occupies the
/// cell directly across the face.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectorPlane {
    width: u32,
    depth: u32,
    cells: Vec<Option<BrickId>>,
}

impl ConnectorPlane {
    /// Create an empty plane of `width` (x) by `depth` (y) cells
    pub fn new(width: u32, depth: u32) -> Self {
        Self {
            width,
            depth,
            cells: vec![None; width as usize * depth as usize],
        }
    }

    fn index(&self, offset: UVec2) -> Option<usize> {
        if offset.x < self.width && offset.y < self.depth {
            Some(offset.x as usize * self.depth as usize + offset.y as usize)
        } else {
            None
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Brick linked at `offset`, `None` if empty or outside the plane
    pub fn get(&self, offset: UVec2) -> Option<BrickId> {
        self.index(offset).and_then(|i| self.cells[i])
    }

    /// Link `brick` at `offset`. Returns false if the offset is outside the plane.
    pub fn set(&mut self, offset: UVec2, brick: BrickId) -> bool {
        match self.index(offset) {
            Some(i) => {
                self.cells[i] = Some(brick);
                true
            }
            None => false,
        }
    }

    /// Clear every cell linking `brick`, returning how many were cleared
    pub fn clear_matching(&mut self, brick: BrickId) -> usize {
        let mut cleared = 0;
        for cell in self.cells.iter_mut().filter(|c| **c == Some(brick)) {
            *cell = None;
            cleared += 1;
        }
        cleared
    }

    /// Clear all cells
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Linked cells as (offset, brick), x outermost
    pub fn iter(&self) -> impl Iterator<Item = (UVec2, BrickId)> + '_ {
        let depth = self.depth as usize;
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.map(|id| (UVec2::new((i / depth) as u32, (i % depth) as u32), id))
        })
    }

    /// Number of linked cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// True when no cell is linked
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }
}
