//! Dual meshes of planar Delaunay triangulations.
//!
//! For every triangle one anchor point is chosen (circumcenter, centroid,
//! incenter, or a blend of two of them) and each site's cell is the ordered
//! ring of anchors of its incident triangles. Circumcenter anchors give the
//! Voronoi diagram; the other rules give its centroidal and incentric cousins.
//!
//! Layout
//! - `topology`: read-only half-edge view of a triangulation (built by the
//!   `delaunator` crate or supplied by the caller).
//! - `anchors`: anchor rules and `AnchorSet`.
//! - `mesh`: `DualMesh` (hull rays, cell walks, ray projection).
//! - `interp`: blends of two anchor sets.
//! - `selection`: named duals and `DualMeshSet`.
//! - `sample`: seeded demo sites.
//!
//! Everything is plain owned data and pure functions; there is no global
//! state and no I/O.

pub mod anchors;
pub mod error;
pub mod interp;
pub mod mesh;
pub mod sample;
pub mod selection;
pub mod topology;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use anchors::{compute_anchors, AnchorRule, AnchorSet};
pub use error::DualMeshError;
pub use interp::interpolate;
pub use mesh::{Bounds2D, Cell, CellKind, DualMesh, HullRays};
pub use nalgebra::Vector2 as Vec2;
pub use topology::{TriangulationView, EMPTY};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::anchors::{
        centroid, circumcenter, compute_anchors, incenter, AnchorRule, AnchorSet,
    };
    pub use crate::error::DualMeshError;
    pub use crate::interp::interpolate;
    pub use crate::mesh::{compute_hull_rays, Bounds2D, Cell, CellKind, DualMesh, HullRays};
    pub use crate::sample::{sample_sites, SampleCfg};
    pub use crate::selection::{DualKind, DualMeshSet, DualSelection};
    pub use crate::topology::{next_halfedge, triangle_of_edge, TriangulationView, EMPTY};
    pub use nalgebra::Vector2 as Vec2;
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn builders_share_one_view_across_threads() {
        let cfg = SampleCfg::with_count(200.0, 200.0, 30);
        let view = TriangulationView::from_points(sample_sites(cfg)).unwrap();
        let meshes: Vec<DualMesh<'_>> = std::thread::scope(|s| {
            let handles: Vec<_> = AnchorRule::ALL
                .into_iter()
                .map(|rule| {
                    let view = &view;
                    s.spawn(move || {
                        DualMesh::new(view, cfg.bounds(), compute_anchors(view, rule)).unwrap()
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        for (mesh, rule) in meshes.iter().zip(AnchorRule::ALL) {
            assert_eq!(mesh.anchors().len(), view.triangle_count());
            assert_eq!(mesh.hull_rays(), meshes[0].hull_rays());
            if rule == AnchorRule::Centroid {
                assert_eq!(mesh.anchors(), &compute_anchors(&view, rule));
            }
        }
    }
}
