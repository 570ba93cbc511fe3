//! Data types for the dual-mesh builder.
//!
//! Plain records; the walk itself lives in `build.rs`.

use nalgebra::Vector2;

/// Axis-aligned box `(xmin, ymin, xmax, ymax)` used to project hull rays.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds2D {
    pub xmin: f64,
    pub ymin: f64,
    pub xmax: f64,
    pub ymax: f64,
}

impl Bounds2D {
    #[inline]
    pub fn new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Self {
        Self {
            xmin,
            ymin,
            xmax,
            ymax,
        }
    }

    /// Box `[0, width] × [0, height]`.
    #[inline]
    pub fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        p.x >= self.xmin && p.x <= self.xmax && p.y >= self.ymin && p.y <= self.ymax
    }
}

impl Default for Bounds2D {
    fn default() -> Self {
        Self::from_size(720.0, 720.0)
    }
}

/// Exterior ray directions, two per site.
///
/// For consecutive hull sites `prev → cur` the vector
/// `(y_prev − y_cur, x_cur − x_prev)` is stored as `outgoing[prev]` and
/// `incoming[cur]`. Interior sites keep zero vectors.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HullRays {
    pub incoming: Vec<Vector2<f64>>,
    pub outgoing: Vec<Vector2<f64>>,
}

impl HullRays {
    /// `[incoming, outgoing]` rays of `site`.
    #[inline]
    pub fn rays(&self, site: usize) -> [Vector2<f64>; 2] {
        [self.incoming[site], self.outgoing[site]]
    }

    /// Flat `[ix, iy, ox, oy]` per site, the layout render adapters expect.
    pub fn to_flat(&self) -> Vec<f64> {
        self.incoming
            .iter()
            .zip(&self.outgoing)
            .flat_map(|(i, o)| [i.x, i.y, o.x, o.y])
            .collect()
    }
}

/// How a cell walk ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// Walk returned to its starting half-edge (bounded cell).
    Closed,
    /// Walk reached a boundary half-edge (unbounded hull cell).
    Open,
    /// Walk hit a corner that does not belong to the site, or failed to close
    /// within one lap of all half-edges.
    Truncated,
}

/// Cell polygon plus how the walk that produced it ended.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    pub site: usize,
    pub kind: CellKind,
    pub polygon: Vec<Vector2<f64>>,
}
