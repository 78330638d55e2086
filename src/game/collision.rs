//! Axis-aligned collision test
//!
//! Strict inequalities: rectangles that only touch at an edge do not
//! collide.

use super::entity::Rect;

/// True when the two rectangles overlap on both axes
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.width
        && a.x + a.width > b.x
        && a.y < b.y + b.height
        && a.y + a.height > b.y
}
