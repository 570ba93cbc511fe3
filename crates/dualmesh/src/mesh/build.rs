//! Dual-mesh builder: hull rays, cell walks, ray projection.

use nalgebra::Vector2;

use crate::anchors::AnchorSet;
use crate::error::DualMeshError;
use crate::topology::{next_halfedge, triangle_of_edge, TriangulationView, EMPTY};

use super::types::{Bounds2D, Cell, CellKind, HullRays};

/// Dual mesh over a borrowed triangulation with an owned, swappable anchor set.
///
/// Hull rays are derived from topology and hull-site positions only, so they
/// are computed once in `new` and survive `update_dual_points`.
#[derive(Clone, Debug)]
pub struct DualMesh<'a> {
    view: &'a TriangulationView,
    bounds: Bounds2D,
    anchors: AnchorSet,
    rays: HullRays,
}

impl<'a> DualMesh<'a> {
    /// Fails with `LengthMismatch` unless `anchors` has one entry per triangle.
    pub fn new(
        view: &'a TriangulationView,
        bounds: Bounds2D,
        anchors: AnchorSet,
    ) -> Result<Self, DualMeshError> {
        check_len(view, &anchors)?;
        Ok(Self {
            view,
            bounds,
            anchors,
            rays: compute_hull_rays(view),
        })
    }

    #[inline]
    pub fn view(&self) -> &'a TriangulationView {
        self.view
    }
    #[inline]
    pub fn bounds(&self) -> Bounds2D {
        self.bounds
    }
    #[inline]
    pub fn anchors(&self) -> &AnchorSet {
        &self.anchors
    }
    #[inline]
    pub fn hull_rays(&self) -> &HullRays {
        &self.rays
    }

    /// Replace the anchor set wholesale. On error the current set is kept.
    pub fn update_dual_points(&mut self, anchors: AnchorSet) -> Result<(), DualMeshError> {
        check_len(self.view, &anchors)?;
        self.anchors = anchors;
        Ok(())
    }

    /// Ordered anchors around `site`, or `None` for a coincident site.
    ///
    /// A walk that runs into inconsistent adjacency returns what it collected
    /// so far; use [`DualMesh::cell`] to tell that apart from a complete cell.
    #[inline]
    pub fn cell_polygon(&self, site: usize) -> Option<Vec<Vector2<f64>>> {
        self.cell(site).map(|c| c.polygon)
    }

    /// Walk the half-edges around `site`, emitting one anchor per incident
    /// triangle.
    pub fn cell(&self, site: usize) -> Option<Cell> {
        let e0 = *self.view.inedges().get(site)?;
        if e0 == EMPTY {
            return None;
        }
        let triangles = self.view.triangles();
        let halfedges = self.view.halfedges();
        let lap = self.view.triangle_count();
        let mut polygon = Vec::new();
        let mut e = e0;
        let kind = loop {
            polygon.push(self.anchors[triangle_of_edge(e)]);
            e = next_halfedge(e);
            if triangles[e] != site {
                tracing::debug!(site, halfedge = e, "corner does not match site");
                break CellKind::Truncated;
            }
            e = halfedges[e];
            if e == e0 {
                break CellKind::Closed;
            }
            if e == EMPTY {
                break CellKind::Open;
            }
            if polygon.len() >= lap {
                tracing::debug!(site, steps = polygon.len(), "cell walk did not close");
                break CellKind::Truncated;
            }
        };
        Some(Cell {
            site,
            kind,
            polygon,
        })
    }

    /// `(site, polygon)` for every non-coincident site, in site order.
    pub fn cell_polygons(&self) -> impl Iterator<Item = (usize, Vec<Vector2<f64>>)> + '_ {
        (0..self.view.site_count()).filter_map(move |s| self.cell_polygon(s).map(|p| (s, p)))
    }

    /// First point where the ray `origin + t·ray` (t > 0) meets the bounding box.
    ///
    /// `None` for a zero ray, or when `origin` is already past the box side the
    /// ray heads to.
    pub fn project_ray(&self, origin: Vector2<f64>, ray: Vector2<f64>) -> Option<Vector2<f64>> {
        let b = &self.bounds;
        let (x0, y0, vx, vy) = (origin.x, origin.y, ray.x, ray.y);
        let mut t = f64::INFINITY;
        let mut hit = None;
        if vy < 0.0 {
            if y0 <= b.ymin {
                return None;
            }
            let c = (b.ymin - y0) / vy;
            if c < t {
                t = c;
                hit = Some(Vector2::new(x0 + c * vx, b.ymin));
            }
        } else if vy > 0.0 {
            if y0 >= b.ymax {
                return None;
            }
            let c = (b.ymax - y0) / vy;
            if c < t {
                t = c;
                hit = Some(Vector2::new(x0 + c * vx, b.ymax));
            }
        }
        if vx > 0.0 {
            if x0 >= b.xmax {
                return None;
            }
            let c = (b.xmax - x0) / vx;
            if c < t {
                hit = Some(Vector2::new(b.xmax, y0 + c * vy));
            }
        } else if vx < 0.0 {
            if x0 <= b.xmin {
                return None;
            }
            let c = (b.xmin - x0) / vx;
            if c < t {
                hit = Some(Vector2::new(b.xmin, y0 + c * vy));
            }
        }
        hit
    }

    /// Cell polygon with open ends extended along the hull rays to the box.
    ///
    /// The incoming ray extends the first anchor (prepended), the outgoing ray
    /// the last one (appended). Closed and truncated cells come back as walked.
    pub fn extended_cell(&self, site: usize) -> Option<Vec<Vector2<f64>>> {
        let Cell { kind, mut polygon, .. } = self.cell(site)?;
        if kind != CellKind::Open {
            return Some(polygon);
        }
        let [incoming, outgoing] = self.rays.rays(site);
        let first = polygon.first().copied();
        let last = polygon.last().copied();
        if let Some(p) = first.and_then(|a| self.project_ray(a, incoming)) {
            polygon.insert(0, p);
        }
        if let Some(p) = last.and_then(|a| self.project_ray(a, outgoing)) {
            polygon.push(p);
        }
        Some(polygon)
    }
}

fn check_len(view: &TriangulationView, anchors: &AnchorSet) -> Result<(), DualMeshError> {
    let expected = view.triangle_count();
    if anchors.len() != expected {
        return Err(DualMeshError::length(expected, anchors.len()));
    }
    Ok(())
}

/// Exterior ray directions from hull order and hull-site positions.
///
/// Walks consecutive hull pairs `prev → cur` (starting from the last hull
/// site) and stores `(y_prev − y_cur, x_cur − x_prev)` as `outgoing[prev]`
/// and `incoming[cur]`.
pub fn compute_hull_rays(view: &TriangulationView) -> HullRays {
    let n = view.site_count();
    let mut rays = HullRays {
        incoming: vec![Vector2::zeros(); n],
        outgoing: vec![Vector2::zeros(); n],
    };
    let Some(&last) = view.hull().last() else {
        return rays;
    };
    let mut prev = last;
    for &cur in view.hull() {
        let p0 = view.points()[prev];
        let p1 = view.points()[cur];
        let v = Vector2::new(p0.y - p1.y, p1.x - p0.x);
        rays.outgoing[prev] = v;
        rays.incoming[cur] = v;
        prev = cur;
    }
    rays
}
