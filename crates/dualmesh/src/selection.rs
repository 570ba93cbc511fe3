//! Which dual mesh to show: one anchor rule, or a blend of two.
//!
//! `DualMeshSet` keeps one builder per rule over a shared triangulation and
//! turns a `DualSelection` into a ready `DualMesh`.

use std::fmt;
use std::str::FromStr;

use crate::anchors::{compute_anchors, AnchorRule};
use crate::error::DualMeshError;
use crate::interp::interpolate;
use crate::mesh::{Bounds2D, DualMesh};
use crate::topology::TriangulationView;

/// Named dual mesh; `Voronoi` is the circumcenter dual.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DualKind {
    Voronoi,
    Centroid,
    Incenter,
}

impl DualKind {
    pub const ALL: [DualKind; 3] = [DualKind::Voronoi, DualKind::Centroid, DualKind::Incenter];

    #[inline]
    pub fn rule(self) -> AnchorRule {
        match self {
            DualKind::Voronoi => AnchorRule::Circumcenter,
            DualKind::Centroid => AnchorRule::Centroid,
            DualKind::Incenter => AnchorRule::Incenter,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DualKind::Voronoi => "voronoi",
            DualKind::Centroid => "centroid",
            DualKind::Incenter => "incenter",
        }
    }
}

impl fmt::Display for DualKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for DualKind {
    type Err = DualMeshError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DualKind::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DualMeshError::UnknownDual { name: s.to_string() })
    }
}

/// Selected dual mesh.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DualSelection {
    Single(DualKind),
    /// `start + (end − start)·t`, anchor by anchor.
    Interpolated {
        start: DualKind,
        end: DualKind,
        t: f64,
    },
}

impl DualSelection {
    /// Voronoi halfway towards the centroid dual.
    pub fn default_blend() -> Self {
        Self::Interpolated {
            start: DualKind::Voronoi,
            end: DualKind::Centroid,
            t: 0.5,
        }
    }
}

impl Default for DualSelection {
    fn default() -> Self {
        Self::Single(DualKind::Voronoi)
    }
}

impl FromStr for DualSelection {
    type Err = DualMeshError;
    /// `voronoi | centroid | incenter` select one rule; `interpolated` the
    /// default blend.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("interpolated") {
            return Ok(Self::default_blend());
        }
        s.parse().map(Self::Single)
    }
}

/// One dual mesh per anchor rule over a shared triangulation.
#[derive(Clone, Debug)]
pub struct DualMeshSet<'a> {
    voronoi: DualMesh<'a>,
    centroid: DualMesh<'a>,
    incenter: DualMesh<'a>,
}

impl<'a> DualMeshSet<'a> {
    pub fn new(view: &'a TriangulationView, bounds: Bounds2D) -> Result<Self, DualMeshError> {
        let build = |kind: DualKind| {
            DualMesh::new(view, bounds, compute_anchors(view, kind.rule()))
        };
        Ok(Self {
            voronoi: build(DualKind::Voronoi)?,
            centroid: build(DualKind::Centroid)?,
            incenter: build(DualKind::Incenter)?,
        })
    }

    #[inline]
    pub fn mesh(&self, kind: DualKind) -> &DualMesh<'a> {
        match kind {
            DualKind::Voronoi => &self.voronoi,
            DualKind::Centroid => &self.centroid,
            DualKind::Incenter => &self.incenter,
        }
    }

    /// Builder for `selection`. A blend reuses the start mesh's hull rays and
    /// swaps in the interpolated anchors.
    pub fn resolve(&self, selection: DualSelection) -> Result<DualMesh<'a>, DualMeshError> {
        match selection {
            DualSelection::Single(kind) => Ok(self.mesh(kind).clone()),
            DualSelection::Interpolated { start, end, t } => {
                let from = self.mesh(start);
                let blended = interpolate(from.anchors(), self.mesh(end).anchors(), t)?;
                let mut mesh = from.clone();
                mesh.update_dual_points(blended)?;
                Ok(mesh)
            }
        }
    }
}
