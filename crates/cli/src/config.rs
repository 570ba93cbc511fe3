//! Mesh options from a JSON config file, overlaid by command-line flags.

use anyhow::{Context, Result};
use dualmesh::prelude::{DualKind, DualSelection, SampleCfg};
use serde::Deserialize;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;

/// Every field optional; unset fields fall back to the library defaults.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MeshCfgFile {
    pub points: Option<usize>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub seed: Option<u64>,
    /// `voronoi | centroid | incenter | interpolated`
    pub dual: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub t: Option<f64>,
    pub extend: Option<bool>,
}

impl MeshCfgFile {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
    }

    /// Fields set in `over` win.
    pub fn overlay(self, over: MeshCfgFile) -> Self {
        Self {
            points: over.points.or(self.points),
            width: over.width.or(self.width),
            height: over.height.or(self.height),
            seed: over.seed.or(self.seed),
            dual: over.dual.or(self.dual),
            start: over.start.or(self.start),
            end: over.end.or(self.end),
            t: over.t.or(self.t),
            extend: over.extend.or(self.extend),
        }
    }

    pub fn resolve(self) -> Result<MeshCfg> {
        let base = SampleCfg::default();
        let mut sample = SampleCfg::with_count(
            self.width.unwrap_or(base.width),
            self.height.unwrap_or(base.height),
            self.points.unwrap_or(base.count),
        );
        if let Some(seed) = self.seed {
            sample.seed = seed;
        }

        let dual = self.dual.as_deref().unwrap_or("voronoi");
        let selection = match dual.parse::<DualSelection>()? {
            DualSelection::Interpolated { start, end, t } => DualSelection::Interpolated {
                start: parse_kind(self.start.as_deref(), start)?,
                end: parse_kind(self.end.as_deref(), end)?,
                t: self.t.unwrap_or(t),
            },
            single => {
                if self.start.is_some() || self.end.is_some() || self.t.is_some() {
                    tracing::warn!(dual, "start/end/t ignored without --dual interpolated");
                }
                single
            }
        };

        Ok(MeshCfg {
            sample,
            selection,
            extend: self.extend.unwrap_or(false),
        })
    }
}

fn parse_kind(name: Option<&str>, fallback: DualKind) -> Result<DualKind> {
    match name {
        Some(s) => Ok(s.parse::<DualKind>()?),
        None => Ok(fallback),
    }
}

/// Fully resolved options for one `mesh` run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshCfg {
    pub sample: SampleCfg,
    pub selection: DualSelection,
    pub extend: bool,
}

impl MeshCfg {
    /// Parameters block for the provenance sidecar.
    pub fn to_json(&self) -> Value {
        let dual = match self.selection {
            DualSelection::Single(kind) => json!({ "kind": kind.as_str() }),
            DualSelection::Interpolated { start, end, t } => json!({
                "kind": "interpolated",
                "start": start.as_str(),
                "end": end.as_str(),
                "t": t,
            }),
        };
        json!({
            "points": self.sample.count,
            "width": self.sample.width,
            "height": self.sample.height,
            "seed": self.sample.seed,
            "dual": dual,
            "extend": self.extend,
        })
    }
}
