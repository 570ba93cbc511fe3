//! Dual mesh: one polygon per site, built from per-triangle anchors.
//!
//! Purpose
//! - Walk the half-edges around each site and connect the anchors of its
//!   incident triangles. The anchors are an injected `AnchorSet`, so the same
//!   walk serves circumcenters, centroids, incenters and any blend of them.
//! - Precompute exterior ray directions for hull sites so unbounded cells can
//!   be extended to a bounding box.
//!
//! Layout
//! - `types.rs` (bounds, rays, cell records), `build.rs` (builder and walk).

mod build;
mod types;

pub use build::{compute_hull_rays, DualMesh};
pub use types::{Bounds2D, Cell, CellKind, HullRays};
