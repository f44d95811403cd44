use std::fmt;

/// Errors produced while building or assembling a [Mesh](crate::Mesh).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),
    #[error("malformed mesh: {0}")]
    MalformedMesh(#[from] MeshError),
}

/// The parametric axes of a [UvSphere](crate::shape::UvSphere).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Pole to pole; latitude bands.
    Polar,
    /// Around the equator; longitude segments.
    Azimuthal,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Polar => f.write_str("polar"),
            Axis::Azimuthal => f.write_str("azimuthal"),
        }
    }
}

/// Rejected shape parameters. Raised before any vertex is emitted.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidArgument {
    #[error("radius must be positive and finite; found {0}")]
    Radius(f64),
    #[error("{axis} divisions must be at least 1; found {count}")]
    Divisions { axis: Axis, count: u32 },
    #[error("tessellation requires {vertices} vertices, more than the index type can address")]
    IndexOverflow { vertices: u128 },
    #[error("corner {0} is not finite")]
    Corner(usize),
    #[error("edge {0} has zero length")]
    DegenerateEdge(usize),
}

/// Violations of the triangle index list invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MeshError {
    #[error("index list length {len} is not a multiple of 3")]
    Truncated { len: usize },
    #[error("index {index} at position {position} is out of range: 0..{vertices} ∌ {index}")]
    IndexOutOfBounds {
        position: usize,
        index: usize,
        vertices: usize,
    },
}
