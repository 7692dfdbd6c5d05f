//! Uniform random thinning.

use nanorand::{Rng, WyRand};

use crate::error::{Img2JsonError, Result};
use crate::points::PointCollection;

/// Remove `fraction` of the points, chosen uniformly at random.
///
/// The whole sequence is shuffled with `rng`, then cut down to
/// `len - floor(len * fraction)` points. `fraction` must lie in `[0, 1]`;
/// anything else is rejected before the collection is touched. The
/// bounding rectangle is not recomputed.
pub fn by_random(collection: &mut PointCollection, fraction: f64, rng: &mut WyRand) -> Result<()> {
    if !(0.0..=1.0).contains(&fraction) {
        return Err(Img2JsonError::InvalidArgument {
            message: format!("Removal fraction {} is outside 0..=1", fraction),
            help: Some("Pass the share of points to remove, e.g. 0.5 for half".to_string()),
        });
    }

    let removed = (collection.len() as f64 * fraction).floor() as usize;
    by_random_count(collection, removed, rng);

    Ok(())
}

/// Shuffle the whole sequence, then drop `removed` points from the tail.
pub(crate) fn by_random_count(collection: &mut PointCollection, removed: usize, rng: &mut WyRand) {
    let points = collection.points_mut();
    let len = points.len();

    rng.shuffle(&mut points[..]);
    points.truncate(len - removed.min(len));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Point, Rect};
    use std::collections::HashSet;

    fn hundred() -> PointCollection {
        let points: Vec<String> = (0..100)
            .map(|i| {
                format!(
                    r#"{{"x":{},"y":{},"r":{},"g":0,"b":0,"a":255}}"#,
                    i % 10,
                    i / 10,
                    i
                )
            })
            .collect();
        PointCollection::from_json_str(&format!("[{}]", points.join(","))).unwrap()
    }

    fn as_set(points: &[Point]) -> HashSet<Point> {
        points.iter().copied().collect()
    }

    #[test]
    fn test_zero_keeps_every_point() {
        let mut collection = hundred();
        let before = as_set(collection.points());

        by_random(&mut collection, 0.0, &mut WyRand::new_seed(1)).unwrap();

        assert_eq!(collection.len(), 100);
        assert_eq!(as_set(collection.points()), before);
    }

    #[test]
    fn test_one_removes_everything() {
        let mut collection = hundred();
        by_random(&mut collection, 1.0, &mut WyRand::new()).unwrap();
        assert!(collection.is_empty());
    }

    #[test]
    fn test_half_is_a_subset_of_fifty() {
        let mut collection = hundred();
        let before = as_set(collection.points());

        by_random(&mut collection, 0.5, &mut WyRand::new()).unwrap();

        assert_eq!(collection.len(), 50);
        let after = as_set(collection.points());
        assert_eq!(after.len(), 50);
        assert!(after.is_subset(&before));
    }

    #[test]
    fn test_count_uses_floor() {
        let mut collection = PointCollection::from_json_str(
            r#"[{"x":0,"y":0,"r":0,"g":0,"b":0,"a":0},
                {"x":1,"y":0,"r":0,"g":0,"b":0,"a":0},
                {"x":2,"y":0,"r":0,"g":0,"b":0,"a":0}]"#,
        )
        .unwrap();

        // floor(3 * 0.5) = 1 removed
        by_random(&mut collection, 0.5, &mut WyRand::new()).unwrap();
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn test_same_seed_same_survivors() {
        let mut a = hundred();
        let mut b = hundred();

        by_random(&mut a, 0.3, &mut WyRand::new_seed(42)).unwrap();
        by_random(&mut b, 0.3, &mut WyRand::new_seed(42)).unwrap();

        assert_eq!(a.points(), b.points());
    }

    #[test]
    fn test_bounds_left_stale() {
        let mut collection = hundred();
        by_random(&mut collection, 1.0, &mut WyRand::new()).unwrap();
        assert_eq!(collection.bounds(), Rect::new(0, 0, 9, 9));
    }

    #[test]
    fn test_out_of_range_rejected_untouched() {
        let mut collection = hundred();
        let before = collection.clone();

        for fraction in [-0.1, 1.5, f64::NAN] {
            let err = by_random(&mut collection, fraction, &mut WyRand::new()).unwrap_err();
            assert!(matches!(err, Img2JsonError::InvalidArgument { .. }));
        }
        assert_eq!(collection, before);
    }

    #[test]
    fn test_count_removes_exactly() {
        let mut collection = hundred();
        by_random_count(&mut collection, 29, &mut WyRand::new_seed(5));
        assert_eq!(collection.len(), 71);

        by_random_count(&mut collection, 500, &mut WyRand::new_seed(5));
        assert!(collection.is_empty());
    }

    #[test]
    fn test_empty_collection() {
        let mut collection = PointCollection::new();
        by_random(&mut collection, 0.5, &mut WyRand::new()).unwrap();
        assert!(collection.is_empty());
    }
}
