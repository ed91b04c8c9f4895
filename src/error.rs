use thiserror::Error;

/// Top-level error type for prism construction.
#[derive(Debug, Error)]
pub enum PrismError {
    #[error(transparent)]
    InvalidInput(#[from] InputError),

    #[error("degenerate polygon: all points are collinear or coincident")]
    DegeneratePolygon,

    #[error("point {index} lies {distance:e} off the base plane")]
    NonCoplanar { index: usize, distance: f64 },

    #[error("offset lies in the base plane (projection on normal = {projection:e}), the two faces would coincide")]
    CoincidentFaces { projection: f64 },

    #[error(transparent)]
    Mesh(#[from] MeshError),
}

impl PrismError {
    /// Returns the coarse category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::DegeneratePolygon => ErrorKind::DegeneratePolygon,
            Self::NonCoplanar { .. } => ErrorKind::NonCoplanar,
            Self::CoincidentFaces { .. } => ErrorKind::CoincidentFaces,
            Self::Mesh(_) => ErrorKind::Mesh,
        }
    }
}

/// Coarse error categories, for callers that only need to branch on the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidInput,
    DegeneratePolygon,
    NonCoplanar,
    CoincidentFaces,
    Mesh,
}

/// Malformed construction inputs, detected before any geometry is computed.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("too few points: got {count}, need at least 3")]
    TooFewPoints { count: usize },

    #[error("too many points: {count} base points overflow a u32 index buffer")]
    TooManyPoints { count: usize },

    #[error("point buffer of length {len} is not a sequence of 3D points")]
    MalformedPointBuffer { len: usize },

    #[error("point {index} has a non-finite coordinate")]
    NonFinitePoint { index: usize },

    #[error("offset must be a finite 3D vector")]
    InvalidOffset,
}

/// Inconsistent position/index buffers handed to a mesh utility.
#[derive(Debug, Error)]
pub enum MeshError {
    #[error("triangle {triangle} references vertex {index}, but the mesh has {vertex_count} vertices")]
    IndexOutOfRange {
        triangle: usize,
        index: u32,
        vertex_count: usize,
    },
}

/// Convenience type alias for results using [`PrismError`].
pub type Result<T> = std::result::Result<T, PrismError>;
