mod config;
mod output;
mod provenance;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use dualmesh::prelude::*;
use serde_json::json;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

use crate::config::MeshCfgFile;
use crate::output::MeshOutput;
use crate::provenance::Payload;

#[derive(Parser)]
#[command(name = "dualmesh")]
#[command(about = "Voronoi, centroid and incenter duals of seeded Delaunay triangulations")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Sample sites, triangulate, and write the selected dual mesh as JSON
    Mesh(MeshArgs),
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args, Debug)]
struct MeshArgs {
    /// Output JSON path; `<stem>.provenance.json` is written next to it
    #[arg(long)]
    out: PathBuf,
    /// JSON file with any of the options below; flags win over it
    #[arg(long)]
    config: Option<PathBuf>,
    /// Number of sites, box corners included
    #[arg(long)]
    points: Option<usize>,
    #[arg(long)]
    width: Option<f64>,
    #[arg(long)]
    height: Option<f64>,
    /// Defaults to points − 5
    #[arg(long)]
    seed: Option<u64>,
    /// voronoi | centroid | incenter | interpolated
    #[arg(long)]
    dual: Option<String>,
    /// Start dual of an interpolated mesh
    #[arg(long)]
    start: Option<String>,
    /// End dual of an interpolated mesh
    #[arg(long)]
    end: Option<String>,
    /// Blend parameter of an interpolated mesh (not clamped)
    #[arg(long, allow_hyphen_values = true)]
    t: Option<f64>,
    /// Extend open cells along their hull rays to the bounding box
    #[arg(long)]
    extend: bool,
}

impl MeshArgs {
    fn overrides(&self) -> MeshCfgFile {
        MeshCfgFile {
            points: self.points,
            width: self.width,
            height: self.height,
            seed: self.seed,
            dual: self.dual.clone(),
            start: self.start.clone(),
            end: self.end.clone(),
            t: self.t,
            extend: self.extend.then_some(true),
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Mesh(args) => mesh(args),
        Action::Report => report(),
    }
}

fn mesh(args: MeshArgs) -> Result<()> {
    let file = match &args.config {
        Some(path) => MeshCfgFile::load(path)?,
        None => MeshCfgFile::default(),
    };
    let cfg = file.overlay(args.overrides()).resolve()?;
    tracing::info!(
        points = cfg.sample.count,
        width = cfg.sample.width,
        height = cfg.sample.height,
        seed = cfg.sample.seed,
        selection = ?cfg.selection,
        out = %args.out.display(),
        "mesh"
    );

    let view = TriangulationView::from_points(sample_sites(cfg.sample))
        .context("triangulating sampled sites")?;
    let set = DualMeshSet::new(&view, cfg.sample.bounds())?;
    let mesh = set.resolve(cfg.selection)?;
    let doc = MeshOutput::build(&mesh, cfg.extend);

    let summary = json!({
        "triangles": view.triangle_count(),
        "closed": doc.count(CellKind::Closed),
        "open": doc.count(CellKind::Open),
        "truncated": doc.count(CellKind::Truncated),
        "non_finite": doc.non_finite.len(),
    });
    tracing::info!(
        triangles = view.triangle_count(),
        cells = doc.cells.len(),
        truncated = doc.count(CellKind::Truncated),
        non_finite = doc.non_finite.len(),
        "dual_mesh"
    );

    provenance::ensure_parent(&args.out)?;
    fs::write(&args.out, serde_json::to_vec(&doc)?)
        .with_context(|| format!("writing {}", args.out.display()))?;
    let sidecar = provenance::write_sidecar(
        &args.out,
        Payload::new(cfg.to_json()).with_summary(summary),
    )?;
    tracing::info!(sidecar = %sidecar.display(), "provenance");
    Ok(())
}

fn report() -> Result<()> {
    let defaults = MeshCfgFile::default().resolve()?;
    let doc = provenance::document(Payload::new(defaults.to_json()), &[]);
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::tempdir;

    fn parse(argv: &[&str]) -> MeshArgs {
        match Cmd::try_parse_from(argv).unwrap().action {
            Action::Mesh(args) => args,
            Action::Report => panic!("expected mesh"),
        }
    }

    #[test]
    fn flags_parse_into_overrides() {
        let args = parse(&[
            "dualmesh", "mesh", "--out", "m.json", "--points", "12", "--dual", "interpolated",
            "--t", "-0.5", "--extend",
        ]);
        let over = args.overrides();
        assert_eq!(over.points, Some(12));
        assert_eq!(over.t, Some(-0.5));
        assert_eq!(over.extend, Some(true));
        assert_eq!(over.width, None);
    }

    #[test]
    fn mesh_writes_document_and_sidecar() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("runs/voronoi.json");
        let cfg = dir.path().join("cfg.json");
        fs::write(&cfg, r#"{ "points": 30, "width": 300, "height": 200 }"#).unwrap();
        let out_arg = out.to_string_lossy().into_owned();
        let cfg_arg = cfg.to_string_lossy().into_owned();
        mesh(parse(&[
            "dualmesh", "mesh", "--out", &out_arg, "--config", &cfg_arg, "--points", "20",
        ]))
        .unwrap();

        let doc: Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(doc["sites"].as_array().unwrap().len(), 20);
        assert_eq!(doc["cells"].as_array().unwrap().len(), 20);
        assert_eq!(doc["rays"].as_array().unwrap().len(), 80);
        assert_eq!(doc["sites"][3], json!([300.0, 200.0]));

        let sidecar = dir.path().join("runs/voronoi.provenance.json");
        let prov: Value = serde_json::from_slice(&fs::read(sidecar).unwrap()).unwrap();
        assert_eq!(prov["params"]["points"], 20);
        assert_eq!(prov["params"]["seed"], 15);
        assert_eq!(prov["params"]["dual"]["kind"], "voronoi");
        assert_eq!(prov["summary"]["truncated"], 0);
    }

    #[test]
    fn mesh_rejects_unknown_dual() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("m.json").to_string_lossy().into_owned();
        let err = mesh(parse(&["dualmesh", "mesh", "--out", &out, "--dual", "medial"]))
            .unwrap_err();
        assert!(err.to_string().contains("medial"));
        assert!(!dir.path().join("m.json").exists());
    }
}
