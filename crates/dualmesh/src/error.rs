//! Error type shared by the dual-mesh operations.
//!
//! Only caller-contract violations are errors. Degenerate triangles, coincident
//! sites and short walks over malformed adjacency are ordinary outcomes and
//! surface through return values instead (non-finite anchors, `None` cells,
//! `CellKind::Truncated`).

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DualMeshError {
    /// An anchor set does not have exactly one entry per triangle (or two
    /// blended sets differ in length).
    LengthMismatch { expected: usize, found: usize },
    /// Triangulation arrays have inconsistent shapes.
    InvalidTopology { reason: String },
    /// Dual mesh name not one of `voronoi`, `centroid`, `incenter`, `interpolated`.
    UnknownDual { name: String },
}

impl DualMeshError {
    pub(crate) fn length(expected: usize, found: usize) -> Self {
        Self::LengthMismatch { expected, found }
    }

    pub(crate) fn topology(reason: impl Into<String>) -> Self {
        Self::InvalidTopology {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for DualMeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, found } => {
                write!(f, "anchor set length mismatch: expected {expected}, found {found}")
            }
            Self::InvalidTopology { reason } => write!(f, "invalid triangulation: {reason}"),
            Self::UnknownDual { name } => write!(f, "unknown dual mesh: {name:?}"),
        }
    }
}

impl std::error::Error for DualMeshError {}
