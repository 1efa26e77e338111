use crate::components::Rect;

/// AABB overlap. Edges that only touch do not count.
pub fn is_colliding(a: &Rect, b: &Rect) -> bool {
    a.left() < b.right() && a.right() > b.left() && a.top() < b.bottom() && a.bottom() > b.top()
}
