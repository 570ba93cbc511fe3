//! Seeded demo sites inside a `width × height` box.
//!
//! Model
//! - The four box corners come first so the hull is the box itself; the rest
//!   are uniform draws rounded to integer coordinates.
//! - Determinism: the same `SampleCfg` always yields the same sites.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::mesh::Bounds2D;

/// Sampler configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleCfg {
    pub width: f64,
    pub height: f64,
    /// Total number of sites, corners included.
    pub count: usize,
    pub seed: u64,
}

impl SampleCfg {
    /// `count` sites in a `width × height` box, seeded with `count − 5`.
    pub fn with_count(width: f64, height: f64, count: usize) -> Self {
        Self {
            width,
            height,
            count,
            seed: count.saturating_sub(5) as u64,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Bounds2D {
        Bounds2D::from_size(self.width, self.height)
    }
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self::with_count(720.0, 720.0, 40)
    }
}

/// Box corners followed by `count − 4` rounded uniform sites.
///
/// Fewer than four sites returns a prefix of the corners.
pub fn sample_sites(cfg: SampleCfg) -> Vec<Vector2<f64>> {
    let (w, h) = (cfg.width, cfg.height);
    let corners = [
        Vector2::new(0.0, 0.0),
        Vector2::new(w, 0.0),
        Vector2::new(0.0, h),
        Vector2::new(w, h),
    ];
    let mut rng = StdRng::seed_from_u64(cfg.seed);
    let mut sites: Vec<Vector2<f64>> = corners.into_iter().take(cfg.count).collect();
    sites.extend((4..cfg.count).map(|_| {
        let x = (rng.gen::<f64>() * w).round();
        let y = (rng.gen::<f64>() * h).round();
        Vector2::new(x, y)
    }));
    sites
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_then_rounded_interior() {
        let cfg = SampleCfg::default();
        let sites = sample_sites(cfg);
        assert_eq!(sites.len(), 40);
        assert_eq!(sites[0], Vector2::new(0.0, 0.0));
        assert_eq!(sites[3], Vector2::new(720.0, 720.0));
        for p in &sites[4..] {
            assert_eq!(p.x, p.x.round());
            assert_eq!(p.y, p.y.round());
            assert!(cfg.bounds().contains(*p));
        }
    }

    #[test]
    fn deterministic_given_seed() {
        let cfg = SampleCfg::with_count(300.0, 200.0, 25);
        assert_eq!(cfg.seed, 20);
        assert_eq!(sample_sites(cfg), sample_sites(cfg));
        let other = SampleCfg { seed: 21, ..cfg };
        assert_ne!(sample_sites(cfg), sample_sites(other));
    }

    #[test]
    fn small_counts_take_corner_prefix() {
        let sites = sample_sites(SampleCfg::with_count(10.0, 10.0, 2));
        assert_eq!(sites, vec![Vector2::new(0.0, 0.0), Vector2::new(10.0, 0.0)]);
        assert!(sample_sites(SampleCfg::with_count(10.0, 10.0, 0)).is_empty());
    }
}
