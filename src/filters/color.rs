//! Colour range filter.

use crate::points::PointCollection;
use crate::types::ColorBounds;

/// Drop every point whose RGB lies outside `bounds`, keeping the survivors
/// in their original order.
///
/// The collection's bounding rectangle is not recomputed.
pub fn by_color(collection: &mut PointCollection, bounds: ColorBounds) {
    let kept = collection
        .points()
        .iter()
        .filter(|p| bounds.within_bounds(p.r, p.g, p.b))
        .copied()
        .collect();

    collection.replace_points(kept);
}
