//! Linear blend of two anchor sets over the same triangulation.

use crate::anchors::AnchorSet;
use crate::error::DualMeshError;

/// `a[i] + (b[i] − a[i])·t` for every triangle.
///
/// `t` is not clamped; values outside `[0, 1]` extrapolate.
pub fn interpolate(a: &AnchorSet, b: &AnchorSet, t: f64) -> Result<AnchorSet, DualMeshError> {
    if a.len() != b.len() {
        return Err(DualMeshError::length(a.len(), b.len()));
    }
    Ok(a.iter().zip(b).map(|(pa, pb)| pa + (pb - pa) * t).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchors::{compute_anchors, AnchorRule};
    use crate::topology::TriangulationView;
    use nalgebra::{vector, Vector2};
    use proptest::prelude::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn random_view(n: usize, seed: u64) -> TriangulationView {
        let mut rng = StdRng::seed_from_u64(seed);
        let pts = (0..n)
            .map(|_| Vector2::new(rng.gen_range(0.0..720.0), rng.gen_range(0.0..720.0)))
            .collect();
        TriangulationView::from_points(pts).unwrap()
    }

    fn anchor_sets() -> impl Strategy<Value = (AnchorSet, AnchorSet)> {
        (0usize..32).prop_flat_map(|n| {
            let pts = || {
                prop::collection::vec((-1e3..1e3f64, -1e3..1e3f64), n)
                    .prop_map(|v| {
                        v.into_iter()
                            .map(|(x, y)| Vector2::new(x, y))
                            .collect::<AnchorSet>()
                    })
            };
            (pts(), pts())
        })
    }

    #[test]
    fn centroid_incenter_midpoint() {
        let view = random_view(40, 35);
        let cent = compute_anchors(&view, AnchorRule::Centroid);
        let inc = compute_anchors(&view, AnchorRule::Incenter);
        let mid = interpolate(&cent, &inc, 0.5).unwrap();
        assert_eq!(mid.len(), view.triangle_count());
        for t in 0..mid.len() {
            let expected = (cent[t] + inc[t]) / 2.0;
            assert!((mid[t] - expected).norm() <= 1e-12 * expected.norm().max(1.0));
        }
    }

    #[test]
    fn extrapolates_outside_unit_interval() {
        let a = AnchorSet::new(vec![vector![0.0, 0.0], vector![1.0, 1.0]]);
        let b = AnchorSet::new(vec![vector![2.0, 0.0], vector![1.0, 3.0]]);
        let c = interpolate(&a, &b, 1.5).unwrap();
        assert_eq!(c.as_slice(), &[vector![3.0, 0.0], vector![1.0, 4.0]]);
        let d = interpolate(&a, &b, -1.0).unwrap();
        assert_eq!(d.as_slice(), &[vector![-2.0, 0.0], vector![1.0, -1.0]]);
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let a = AnchorSet::new(vec![vector![0.0, 0.0]; 3]);
        let b = AnchorSet::new(vec![vector![0.0, 0.0]; 2]);
        assert_eq!(
            interpolate(&a, &b, 0.5),
            Err(DualMeshError::LengthMismatch {
                expected: 3,
                found: 2
            })
        );
    }

    proptest! {
        #[test]
        fn endpoints_reproduce_inputs((a, b) in anchor_sets()) {
            let at0 = interpolate(&a, &b, 0.0).unwrap();
            prop_assert_eq!(&at0, &a);
            let at1 = interpolate(&a, &b, 1.0).unwrap();
            for (p, q) in at1.iter().zip(&b) {
                prop_assert!((p - q).norm() <= 1e-12 * q.norm().max(1.0));
            }
        }
    }
}
