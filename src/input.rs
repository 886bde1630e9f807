use glam::DVec2;

/// Canvas bounding rectangle in CSS pixels, as reported by
/// `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Map viewport (client) coordinates to canvas backing-store pixels.
/// Returns `None` while the canvas has no layout size.
#[inline]
pub fn client_to_canvas(
    client_x: f64,
    client_y: f64,
    rect: CanvasRect,
    canvas_w: f64,
    canvas_h: f64,
) -> Option<DVec2> {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return None;
    }
    let x_css = client_x - rect.left;
    let y_css = client_y - rect.top;
    Some(DVec2::new(
        x_css / rect.width * canvas_w,
        y_css / rect.height * canvas_h,
    ))
}

/// Backing-store size for a window's inner size; never zero.
#[inline]
pub fn backing_size(inner_w: f64, inner_h: f64) -> (u32, u32) {
    let clamp = |v: f64| if v.is_finite() { v.max(1.0) as u32 } else { 1 };
    (clamp(inner_w), clamp(inner_h))
}
