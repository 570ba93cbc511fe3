//! Per-triangle anchor points (circumcenter, centroid, incenter).
//!
//! Purpose
//! - Pick one representative point per triangle. The dual-mesh walk only sees
//!   the resulting `AnchorSet`, so all rules (and blends of them) share a
//!   single traversal.
//!
//! Numerics
//! - Formulas are evaluated as-is in `f64`. Degenerate triangles (collinear or
//!   coincident corners) give non-finite anchors; they are kept and reported by
//!   `AnchorSet::non_finite_triangles` rather than snapped or dropped.

use std::ops::Index;

use nalgebra::Vector2;

use crate::topology::TriangulationView;

/// Anchor rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnchorRule {
    /// Equidistant from the three corners (classic Voronoi vertex).
    Circumcenter,
    /// Mean of the corners.
    Centroid,
    /// Center of the inscribed circle.
    Incenter,
}

impl AnchorRule {
    pub const ALL: [AnchorRule; 3] = [
        AnchorRule::Circumcenter,
        AnchorRule::Centroid,
        AnchorRule::Incenter,
    ];

    #[inline]
    pub fn apply(self, p0: Vector2<f64>, p1: Vector2<f64>, p2: Vector2<f64>) -> Vector2<f64> {
        match self {
            AnchorRule::Circumcenter => circumcenter(p0, p1, p2),
            AnchorRule::Centroid => centroid(p0, p1, p2),
            AnchorRule::Incenter => incenter(p0, p1, p2),
        }
    }
}

/// One anchor per triangle, indexed by triangle id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnchorSet(Vec<Vector2<f64>>);

impl AnchorSet {
    #[inline]
    pub fn new(anchors: Vec<Vector2<f64>>) -> Self {
        Self(anchors)
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    #[inline]
    pub fn as_slice(&self) -> &[Vector2<f64>] {
        &self.0
    }
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Vector2<f64>> {
        self.0.iter()
    }
    pub fn into_inner(self) -> Vec<Vector2<f64>> {
        self.0
    }

    /// Triangles whose anchor has a NaN or infinite coordinate.
    pub fn non_finite_triangles(&self) -> Vec<usize> {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, a)| !(a.x.is_finite() && a.y.is_finite()))
            .map(|(t, _)| t)
            .collect()
    }
}

impl Index<usize> for AnchorSet {
    type Output = Vector2<f64>;
    #[inline]
    fn index(&self, t: usize) -> &Self::Output {
        &self.0[t]
    }
}

impl FromIterator<Vector2<f64>> for AnchorSet {
    fn from_iter<I: IntoIterator<Item = Vector2<f64>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a AnchorSet {
    type Item = &'a Vector2<f64>;
    type IntoIter = std::slice::Iter<'a, Vector2<f64>>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Anchors of every triangle of `view` under `rule`.
pub fn compute_anchors(view: &TriangulationView, rule: AnchorRule) -> AnchorSet {
    let anchors: AnchorSet = (0..view.triangle_count())
        .map(|t| {
            let [p0, p1, p2] = view.triangle_vertices(t);
            rule.apply(p0, p1, p2)
        })
        .collect();
    let degenerate = anchors.non_finite_triangles();
    if !degenerate.is_empty() {
        tracing::debug!(
            ?rule,
            count = degenerate.len(),
            first = degenerate[0],
            "non-finite anchors"
        );
    }
    anchors
}

/// Circumcenter via the 2×2 perpendicular-bisector system.
///
/// Non-finite when the corners are collinear (`g == 0`).
#[inline]
pub fn circumcenter(p0: Vector2<f64>, p1: Vector2<f64>, p2: Vector2<f64>) -> Vector2<f64> {
    let a = p1.x - p0.x;
    let b = p1.y - p0.y;
    let c = p2.x - p0.x;
    let d = p2.y - p0.y;
    let e = a * (p0.x + p1.x) + b * (p0.y + p1.y);
    let f = c * (p0.x + p2.x) + d * (p0.y + p2.y);
    let g = 2.0 * (a * (p2.y - p1.y) - b * (p2.x - p1.x));
    Vector2::new((d * e - b * f) / g, (a * f - c * e) / g)
}

#[inline]
pub fn centroid(p0: Vector2<f64>, p1: Vector2<f64>, p2: Vector2<f64>) -> Vector2<f64> {
    Vector2::new((p0.x + p1.x + p2.x) / 3.0, (p0.y + p1.y + p2.y) / 3.0)
}

/// Corners weighted by the length of the opposite side.
///
/// Non-finite when all three corners coincide.
#[inline]
pub fn incenter(p0: Vector2<f64>, p1: Vector2<f64>, p2: Vector2<f64>) -> Vector2<f64> {
    let a = (p1 - p2).norm();
    let b = (p0 - p2).norm();
    let c = (p0 - p1).norm();
    let s = a + b + c;
    Vector2::new(
        (a * p0.x + b * p1.x + c * p2.x) / s,
        (a * p0.y + b * p1.y + c * p2.y) / s,
    )
}
