//! The six faces of a cubesphere and their local compass bases.

use glam::DVec3;

/// The six faces of the cube that forms the cubesphere.
///
/// Each variant corresponds to a face whose outward normal (its local
/// zenith) points along the named axis direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum CubeFace {
    /// +X face
    PosX = 0,
    /// −X face
    NegX = 1,
    /// +Y face
    PosY = 2,
    /// −Y face
    NegY = 3,
    /// +Z face
    PosZ = 4,
    /// −Z face
    NegZ = 5,
}

impl CubeFace {
    /// All six faces in build order.
    ///
    /// The mesh assembler builds faces in exactly this order so that every
    /// face after the first two can reuse boundary vertices of faces already
    /// built.
    pub const ALL: [CubeFace; 6] = [
        CubeFace::PosX,
        CubeFace::NegX,
        CubeFace::PosY,
        CubeFace::NegY,
        CubeFace::PosZ,
        CubeFace::NegZ,
    ];

    /// The opposite face (e.g., `PosX` → `NegX`).
    #[must_use]
    pub fn opposite(self) -> CubeFace {
        match self {
            CubeFace::PosX => CubeFace::NegX,
            CubeFace::NegX => CubeFace::PosX,
            CubeFace::PosY => CubeFace::NegY,
            CubeFace::NegY => CubeFace::PosY,
            CubeFace::PosZ => CubeFace::NegZ,
            CubeFace::NegZ => CubeFace::PosZ,
        }
    }

    /// Outward-pointing unit normal for this face.
    #[must_use]
    pub fn zenith(self) -> DVec3 {
        match self {
            CubeFace::PosX => DVec3::X,
            CubeFace::NegX => DVec3::NEG_X,
            CubeFace::PosY => DVec3::Y,
            CubeFace::NegY => DVec3::NEG_Y,
            CubeFace::PosZ => DVec3::Z,
            CubeFace::NegZ => DVec3::NEG_Z,
        }
    }

    /// Local north: the zenith with its components rotated one place,
    /// `(zenith.y, zenith.z, zenith.x)`.
    ///
    /// Local compass directions have no relationship to world directions.
    /// The resulting `(zenith, north)` pairs are `(+X, +Z)`, `(−X, −Z)`,
    /// `(+Y, +X)`, `(−Y, −X)`, `(+Z, +Y)` and `(−Z, −Y)`.
    #[must_use]
    pub fn north(self) -> DVec3 {
        let z = self.zenith();
        DVec3::new(z.y, z.z, z.x)
    }

    /// Local east: `north × zenith`.
    ///
    /// `east × north == zenith` for every face, so a grid walked east then
    /// north winds counter-clockwise when seen from outside the cube.
    #[must_use]
    pub fn east(self) -> DVec3 {
        self.north().cross(self.zenith())
    }

    /// Human-readable signed axis label, e.g. `"+x"`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            CubeFace::PosX => "+x",
            CubeFace::NegX => "-x",
            CubeFace::PosY => "+y",
            CubeFace::NegY => "-y",
            CubeFace::PosZ => "+z",
            CubeFace::NegZ => "-z",
        }
    }
}

impl std::fmt::Display for CubeFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
