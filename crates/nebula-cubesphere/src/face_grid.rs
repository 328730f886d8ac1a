//! Per-face vertex-index grids and boundary extraction.
//!
//! Every cube face stores a `resolution × resolution` grid of vertex ids,
//! indexed `[x][y]` with `x` increasing east, `y` increasing north and the
//! origin at the southwest corner. Boundary rows/columns can be pulled out
//! as [`EdgeList`] entries so a later face can reuse them instead of
//! duplicating the shared vertices.

use crate::CubeFace;

/// One of the four boundaries of a face grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Row `y == resolution - 1`.
    North,
    /// Row `y == 0`.
    South,
    /// Column `x == resolution - 1`.
    East,
    /// Column `x == 0`.
    West,
}

/// Vertex ids for one cube face.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaceGrid {
    face: CubeFace,
    resolution: usize,
    /// Column-major: `ids[x * resolution + y]`.
    ids: Vec<u32>,
}

impl FaceGrid {
    /// Create a grid from column-major ids (`ids[x * resolution + y]`).
    ///
    /// # Panics
    ///
    /// Panics if `ids.len() != resolution * resolution`.
    #[must_use]
    pub fn from_columns(face: CubeFace, resolution: usize, ids: Vec<u32>) -> Self {
        assert_eq!(
            ids.len(),
            resolution * resolution,
            "grid for {face} needs {} ids, got {}",
            resolution * resolution,
            ids.len()
        );
        Self {
            face,
            resolution,
            ids,
        }
    }

    /// Which cube face this grid covers.
    #[must_use]
    pub fn face(&self) -> CubeFace {
        self.face
    }

    /// Number of vertices along each side.
    #[must_use]
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Vertex id at grid cell `(x, y)`.
    #[inline]
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> u32 {
        self.ids[x * self.resolution + y]
    }

    /// All ids in column-major order.
    #[must_use]
    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    /// Extract one boundary in this face's own traversal direction: north
    /// and south edges run west→east, east and west edges run south→north.
    /// With `reverse` the order is flipped.
    #[must_use]
    pub fn edge(&self, edge: Edge, reverse: bool) -> Vec<u32> {
        let last = self.resolution - 1;
        let mut ids: Vec<u32> = match edge {
            Edge::North => (0..self.resolution).map(|x| self.get(x, last)).collect(),
            Edge::South => (0..self.resolution).map(|x| self.get(x, 0)).collect(),
            Edge::East => self.column(last).to_vec(),
            Edge::West => self.column(0).to_vec(),
        };
        if reverse {
            ids.reverse();
        }
        ids
    }

    /// Shorthand for `edge(Edge::North, reverse)`.
    #[must_use]
    pub fn north(&self, reverse: bool) -> Vec<u32> {
        self.edge(Edge::North, reverse)
    }

    /// Shorthand for `edge(Edge::South, reverse)`.
    #[must_use]
    pub fn south(&self, reverse: bool) -> Vec<u32> {
        self.edge(Edge::South, reverse)
    }

    /// Shorthand for `edge(Edge::East, reverse)`.
    #[must_use]
    pub fn east(&self, reverse: bool) -> Vec<u32> {
        self.edge(Edge::East, reverse)
    }

    /// Shorthand for `edge(Edge::West, reverse)`.
    #[must_use]
    pub fn west(&self, reverse: bool) -> Vec<u32> {
        self.edge(Edge::West, reverse)
    }

    fn column(&self, x: usize) -> &[u32] {
        let start = x * self.resolution;
        &self.ids[start..start + self.resolution]
    }
}

/// Boundary ids borrowed from already-built neighbor faces.
///
/// Each present entry holds `resolution` ids ordered along the new face's
/// own traversal direction (see [`FaceGrid::edge`]).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EdgeList {
    /// Ids for row `y == resolution - 1`, indexed by `x`.
    pub north: Option<Vec<u32>>,
    /// Ids for row `y == 0`, indexed by `x`.
    pub south: Option<Vec<u32>>,
    /// Ids for column `x == resolution - 1`, indexed by `y`.
    pub east: Option<Vec<u32>>,
    /// Ids for column `x == 0`, indexed by `y`.
    pub west: Option<Vec<u32>>,
}

impl EdgeList {
    /// An edge list with no shared boundaries.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Set the north boundary.
    #[must_use]
    pub fn with_north(mut self, ids: Vec<u32>) -> Self {
        self.north = Some(ids);
        self
    }

    /// Set the south boundary.
    #[must_use]
    pub fn with_south(mut self, ids: Vec<u32>) -> Self {
        self.south = Some(ids);
        self
    }

    /// Set the east boundary.
    #[must_use]
    pub fn with_east(mut self, ids: Vec<u32>) -> Self {
        self.east = Some(ids);
        self
    }

    /// Set the west boundary.
    #[must_use]
    pub fn with_west(mut self, ids: Vec<u32>) -> Self {
        self.west = Some(ids);
        self
    }

    /// Look up a reused id for cell `(x, y)`.
    ///
    /// North/south take precedence over east/west, so a corner resolves
    /// through whichever row list covers it before any column list.
    #[must_use]
    pub fn shared_id(&self, x: usize, y: usize, resolution: usize) -> Option<u32> {
        let last = resolution - 1;
        if y == last
            && let Some(north) = &self.north
        {
            return Some(north[x]);
        }
        if y == 0
            && let Some(south) = &self.south
        {
            return Some(south[x]);
        }
        if x == last
            && let Some(east) = &self.east
        {
            return Some(east[y]);
        }
        if x == 0
            && let Some(west) = &self.west
        {
            return Some(west[y]);
        }
        None
    }

    /// Iterate over the present boundaries with their lengths.
    pub fn lengths(&self) -> impl Iterator<Item = (Edge, usize)> + '_ {
        [
            (Edge::North, &self.north),
            (Edge::South, &self.south),
            (Edge::East, &self.east),
            (Edge::West, &self.west),
        ]
        .into_iter()
        .filter_map(|(edge, ids)| ids.as_ref().map(|ids| (edge, ids.len())))
    }
}
