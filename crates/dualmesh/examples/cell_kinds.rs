//! Count closed, open and truncated cells for each dual over sampled sites.
//!
//! Usage:
//!   cargo run -p dualmesh --example cell_kinds -- 200
//!
//! Hull sites give open cells, interior sites closed ones; a Delaunator
//! triangulation should never produce a truncated walk.

use dualmesh::prelude::*;

fn main() {
    let count = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(40usize);
    let cfg = SampleCfg::with_count(720.0, 720.0, count);
    let view = match TriangulationView::from_points(sample_sites(cfg)) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("triangulation failed: {e}");
            return;
        }
    };
    let set = match DualMeshSet::new(&view, cfg.bounds()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("dual meshes failed: {e}");
            return;
        }
    };
    println!(
        "sites={} triangles={} hull={}",
        view.site_count(),
        view.triangle_count(),
        view.hull().len()
    );
    for kind in DualKind::ALL {
        let mesh = set.mesh(kind);
        let mut tally = [0usize; 3];
        for cell in (0..view.site_count()).filter_map(|s| mesh.cell(s)) {
            let slot = match cell.kind {
                CellKind::Closed => 0,
                CellKind::Open => 1,
                CellKind::Truncated => 2,
            };
            tally[slot] += 1;
        }
        println!(
            "{kind:>9}: closed={} open={} truncated={} non_finite={}",
            tally[0],
            tally[1],
            tally[2],
            mesh.anchors().non_finite_triangles().len()
        );
    }
}
