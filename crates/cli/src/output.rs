//! JSON document written by `dualmesh mesh`.

use dualmesh::prelude::{CellKind, DualMesh, Vec2};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CellOut {
    pub site: usize,
    pub kind: &'static str,
    pub polygon: Vec<[f64; 2]>,
}

/// Non-finite coordinates serialise as `null`.
#[derive(Debug, Serialize)]
pub struct MeshOutput {
    pub sites: Vec<[f64; 2]>,
    pub triangles: Vec<usize>,
    pub anchors: Vec<[f64; 2]>,
    /// Triangles whose anchor is not finite.
    pub non_finite: Vec<usize>,
    pub cells: Vec<CellOut>,
    /// `[in_x, in_y, out_x, out_y]` per site.
    pub rays: Vec<f64>,
}

impl MeshOutput {
    /// With `extend`, open cells carry their hull-ray endpoints on the bounds.
    pub fn build(mesh: &DualMesh<'_>, extend: bool) -> Self {
        let view = mesh.view();
        let cells = (0..view.site_count())
            .filter_map(|site| mesh.cell(site))
            .map(|cell| {
                let polygon = if extend && cell.kind == CellKind::Open {
                    mesh.extended_cell(cell.site).unwrap_or(cell.polygon)
                } else {
                    cell.polygon
                };
                CellOut {
                    site: cell.site,
                    kind: kind_name(cell.kind),
                    polygon: polygon.iter().map(xy).collect(),
                }
            })
            .collect();
        Self {
            sites: view.points().iter().map(xy).collect(),
            triangles: view.triangles().to_vec(),
            anchors: mesh.anchors().iter().map(xy).collect(),
            non_finite: mesh.anchors().non_finite_triangles(),
            cells,
            rays: mesh.hull_rays().to_flat(),
        }
    }

    pub fn count(&self, kind: CellKind) -> usize {
        let name = kind_name(kind);
        self.cells.iter().filter(|c| c.kind == name).count()
    }
}

fn kind_name(kind: CellKind) -> &'static str {
    match kind {
        CellKind::Closed => "closed",
        CellKind::Open => "open",
        CellKind::Truncated => "truncated",
    }
}

fn xy(p: &Vec2<f64>) -> [f64; 2] {
    [p.x, p.y]
}
