//! Circle vs axis-aligned rectangle collision test.
//!
//! Pure and deterministic; game fairness depends on this exact sequence of
//! checks, so keep the algorithm as-is.

/// Circle by center and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

/// Axis-aligned rectangle, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// True if the circle overlaps the rectangle.
///
/// Separating-axis early out, then the center-inside-band case, then the
/// nearest-corner distance check.
pub fn circle_rect_collision(circle: Circle, rect: Rect) -> bool {
    let dx = (circle.x - rect.x - rect.w / 2.0).abs();
    let dy = (circle.y - rect.y - rect.h / 2.0).abs();

    if dx > rect.w / 2.0 + circle.radius || dy > rect.h / 2.0 + circle.radius {
        return false;
    }

    if dx <= rect.w / 2.0 || dy <= rect.h / 2.0 {
        return true;
    }

    let corner_distance_sq = (dx - rect.w / 2.0).powi(2) + (dy - rect.h / 2.0).powi(2);

    corner_distance_sq <= circle.radius.powi(2)
}
