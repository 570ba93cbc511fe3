//! Read-only triangulation adjacency consumed by the dual-mesh builder.
//!
//! Layout follows the delaunator convention:
//! - `triangles[e]` is the site half-edge `e` starts from; triangle id is `e / 3`.
//! - `halfedges[e]` is the opposite half-edge, or [`EMPTY`] on the boundary.
//! - `inedges[p]` is one half-edge ending at site `p`, or [`EMPTY`] for
//!   coincident/unused sites. Hull sites get their boundary half-edge so that a
//!   cell walk runs from one open end to the other.
//! - `hull` lists hull sites in traversal order.
//!
//! The view never triangulates by itself; `from_points` delegates to the
//! `delaunator` crate.

use delaunator::Point;
use nalgebra::Vector2;

use crate::error::DualMeshError;

/// Sentinel for "no half-edge".
pub const EMPTY: usize = delaunator::EMPTY;

/// Next half-edge inside the same triangle (corner order 0 → 1 → 2 → 0).
#[inline]
pub fn next_halfedge(e: usize) -> usize {
    if e % 3 == 2 {
        e - 2
    } else {
        e + 1
    }
}

#[inline]
pub fn triangle_of_edge(e: usize) -> usize {
    e / 3
}

/// Fields are private: every constructor checks index ranges, so the cell
/// walk may index the arrays directly.
#[derive(Clone, Debug, Default)]
pub struct TriangulationView {
    points: Vec<Vector2<f64>>,
    triangles: Vec<usize>,
    halfedges: Vec<usize>,
    inedges: Vec<usize>,
    hull: Vec<usize>,
}

impl TriangulationView {
    /// Wrap caller-supplied arrays after checking their shapes.
    ///
    /// Only shapes and index ranges are checked; a non-involutive `halfedges`
    /// array is accepted and handled by the cell walk.
    pub fn new(
        points: Vec<Vector2<f64>>,
        triangles: Vec<usize>,
        halfedges: Vec<usize>,
        inedges: Vec<usize>,
        hull: Vec<usize>,
    ) -> Result<Self, DualMeshError> {
        let n = points.len();
        if triangles.len() % 3 != 0 {
            return Err(DualMeshError::topology(format!(
                "triangle array length {} is not a multiple of 3",
                triangles.len()
            )));
        }
        if halfedges.len() != triangles.len() {
            return Err(DualMeshError::topology(format!(
                "halfedges has {} entries, triangles has {}",
                halfedges.len(),
                triangles.len()
            )));
        }
        if inedges.len() != n {
            return Err(DualMeshError::topology(format!(
                "inedges has {} entries for {} sites",
                inedges.len(),
                n
            )));
        }
        if let Some(&s) = triangles.iter().chain(hull.iter()).find(|&&s| s >= n) {
            return Err(DualMeshError::topology(format!(
                "site id {s} out of range for {n} sites"
            )));
        }
        let m = triangles.len();
        if let Some(&e) = halfedges
            .iter()
            .chain(inedges.iter())
            .find(|&&e| e != EMPTY && e >= m)
        {
            return Err(DualMeshError::topology(format!(
                "half-edge id {e} out of range for {m} half-edges"
            )));
        }
        Ok(Self {
            points,
            triangles,
            halfedges,
            inedges,
            hull,
        })
    }

    /// Build a view from triangulator output, deriving `inedges`.
    pub fn from_parts(
        points: Vec<Vector2<f64>>,
        triangles: Vec<usize>,
        halfedges: Vec<usize>,
        hull: Vec<usize>,
    ) -> Result<Self, DualMeshError> {
        if halfedges.len() != triangles.len() {
            return Err(DualMeshError::topology(format!(
                "halfedges has {} entries, triangles has {}",
                halfedges.len(),
                triangles.len()
            )));
        }
        if let Some(&s) = triangles.iter().find(|&&s| s >= points.len()) {
            return Err(DualMeshError::topology(format!(
                "site id {s} out of range for {} sites",
                points.len()
            )));
        }
        let inedges = derive_inedges(points.len(), &triangles, &halfedges);
        Self::new(points, triangles, halfedges, inedges, hull)
    }

    /// Delaunay-triangulate `points` with `delaunator`.
    ///
    /// Duplicate points are left out of every triangle and end up coincident.
    /// Fully collinear input yields no triangles.
    pub fn from_points(points: Vec<Vector2<f64>>) -> Result<Self, DualMeshError> {
        let pts: Vec<Point> = points.iter().map(|p| Point { x: p.x, y: p.y }).collect();
        let tri = delaunator::triangulate(&pts);
        tracing::debug!(
            sites = points.len(),
            triangles = tri.triangles.len() / 3,
            hull = tri.hull.len(),
            "triangulated"
        );
        Self::from_parts(points, tri.triangles, tri.halfedges, tri.hull)
    }

    #[inline]
    pub fn points(&self) -> &[Vector2<f64>] {
        &self.points
    }
    #[inline]
    pub fn triangles(&self) -> &[usize] {
        &self.triangles
    }
    #[inline]
    pub fn halfedges(&self) -> &[usize] {
        &self.halfedges
    }
    #[inline]
    pub fn inedges(&self) -> &[usize] {
        &self.inedges
    }
    #[inline]
    pub fn hull(&self) -> &[usize] {
        &self.hull
    }

    #[inline]
    pub fn site_count(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    /// Corner coordinates of triangle `t`.
    #[inline]
    pub fn triangle_vertices(&self, t: usize) -> [Vector2<f64>; 3] {
        [
            self.points[self.triangles[3 * t]],
            self.points[self.triangles[3 * t + 1]],
            self.points[self.triangles[3 * t + 2]],
        ]
    }

    /// Site excluded from the adjacency (duplicate or unused input point).
    #[inline]
    pub fn is_coincident(&self, site: usize) -> bool {
        self.inedges[site] == EMPTY
    }
}

/// For each half-edge `e` ending at `p`: keep the first one seen, but let a
/// boundary half-edge override it.
fn derive_inedges(n: usize, triangles: &[usize], halfedges: &[usize]) -> Vec<usize> {
    let mut inedges = vec![EMPTY; n];
    for e in 0..halfedges.len() {
        let p = triangles[next_halfedge(e)];
        if halfedges[e] == EMPTY || inedges[p] == EMPTY {
            inedges[p] = e;
        }
    }
    inedges
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn next_halfedge_cycles_within_triangle() {
        assert_eq!(next_halfedge(0), 1);
        assert_eq!(next_halfedge(1), 2);
        assert_eq!(next_halfedge(2), 0);
        assert_eq!(next_halfedge(5), 3);
        assert_eq!(triangle_of_edge(5), 1);
    }

    #[test]
    fn inedges_prefer_boundary_halfedges() {
        // Two triangles sharing the edge 1–2.
        let triangles = vec![0, 1, 2, 1, 3, 2];
        let halfedges = vec![EMPTY, 5, EMPTY, EMPTY, EMPTY, 1];
        let inedges = derive_inedges(4, &triangles, &halfedges);
        assert_eq!(inedges, vec![2, 0, 4, 3]);
        for (p, &e) in inedges.iter().enumerate() {
            assert_eq!(triangles[next_halfedge(e)], p);
            assert_eq!(halfedges[e], EMPTY);
        }
    }

    #[test]
    fn new_rejects_bad_shapes() {
        let pts = vec![vector![0.0, 0.0], vector![1.0, 0.0], vector![0.0, 1.0]];
        let bad_len =
            TriangulationView::new(pts.clone(), vec![0, 1], vec![EMPTY; 2], vec![EMPTY; 3], vec![]);
        assert!(matches!(bad_len, Err(DualMeshError::InvalidTopology { .. })));
        let bad_site = TriangulationView::new(
            pts.clone(),
            vec![0, 1, 7],
            vec![EMPTY; 3],
            vec![EMPTY; 3],
            vec![],
        );
        assert!(matches!(bad_site, Err(DualMeshError::InvalidTopology { .. })));
        let bad_edge = TriangulationView::new(
            pts.clone(),
            vec![0, 1, 2],
            vec![EMPTY, 9, EMPTY],
            vec![EMPTY; 3],
            vec![],
        );
        assert!(matches!(bad_edge, Err(DualMeshError::InvalidTopology { .. })));
        let ok = TriangulationView::new(
            pts,
            vec![0, 1, 2],
            vec![EMPTY; 3],
            vec![2, 0, 1],
            vec![0, 1, 2],
        );
        assert!(ok.is_ok());
    }

    #[test]
    fn from_points_marks_duplicates_coincident() {
        let pts = vec![
            vector![0.0, 0.0],
            vector![4.0, 0.0],
            vector![0.0, 4.0],
            vector![4.0, 4.0],
            vector![1.0, 2.0],
            vector![1.0, 2.0],
        ];
        let view = TriangulationView::from_points(pts).unwrap();
        assert!(view.triangle_count() >= 4);
        let coincident: Vec<usize> = (0..view.site_count())
            .filter(|&s| view.is_coincident(s))
            .collect();
        assert_eq!(coincident.len(), 1);
        assert!(coincident[0] == 4 || coincident[0] == 5);
        assert_eq!(view.hull().len(), 4);
    }

    #[test]
    fn from_points_collinear_has_no_triangles() {
        let pts = vec![vector![0.0, 0.0], vector![1.0, 1.0], vector![2.0, 2.0]];
        let view = TriangulationView::from_points(pts).unwrap();
        assert_eq!(view.triangle_count(), 0);
        assert!((0..3).all(|s| view.is_coincident(s)));
    }
}
