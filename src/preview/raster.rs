//! Clipped pen drawing on RGB frames

use image::{Rgb, RgbImage};

/// Square pen stamped along every drawn path
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pen {
    /// Stroke color
    pub color: Rgb<u8>,
    /// Stroke width in pixels, at least one
    pub width: u32,
}

impl Pen {
    /// Create a pen; widths below one are raised to one
    pub fn new(color: [u8; 3], width: u32) -> Self {
        Self {
            color: Rgb(color),
            width: width.max(1),
        }
    }
}

/// Set one pixel, ignoring coordinates outside the frame
pub fn put_pixel_clipped(frame: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>) {
    let (Ok(px), Ok(py)) = (u32::try_from(x), u32::try_from(y)) else {
        return;
    };
    if let Some(pixel) = frame.get_pixel_mut_checked(px, py) {
        *pixel = color;
    }
}

// Pen footprint is centered on the point, biased toward the top-left for even widths
fn stamp(frame: &mut RgbImage, x: i64, y: i64, pen: Pen) {
    let width = i64::from(pen.width);
    let start = -(width / 2);
    for dy in start..start + width {
        for dx in start..start + width {
            put_pixel_clipped(frame, x + dx, y + dy, pen.color);
        }
    }
}

/// Blend `color` over one pixel with `coverage` in `0.0..=1.0`, ignoring coordinates outside the frame
pub fn blend_pixel_clipped(frame: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>, coverage: f32) {
    let (Ok(px), Ok(py)) = (u32::try_from(x), u32::try_from(y)) else {
        return;
    };
    let Some(pixel) = frame.get_pixel_mut_checked(px, py) else {
        return;
    };
    let coverage = coverage.clamp(0.0, 1.0);
    for (dst, src) in pixel.0.iter_mut().zip(color.0) {
        let mixed = f32::from(*dst).mul_add(1.0 - coverage, f32::from(src) * coverage);
        *dst = mixed.round() as u8;
    }
}

// Liang-Barsky clip of a segment against the inclusive box `min..=max`
fn clip_segment(
    from: (i64, i64),
    to: (i64, i64),
    min: (i64, i64),
    max: (i64, i64),
) -> Option<((i64, i64), (i64, i64))> {
    let (x0, y0) = (from.0 as f64, from.1 as f64);
    let dx = to.0 as f64 - x0;
    let dy = to.1 as f64 - y0;
    let mut enter = 0.0_f64;
    let mut leave = 1.0_f64;

    let edges = [
        (-dx, x0 - min.0 as f64),
        (dx, max.0 as f64 - x0),
        (-dy, y0 - min.1 as f64),
        (dy, max.1 as f64 - y0),
    ];
    for (p, q) in edges {
        if p.abs() < f64::EPSILON {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let t = q / p;
        if p < 0.0 {
            if t > leave {
                return None;
            }
            enter = enter.max(t);
        } else {
            if t < enter {
                return None;
            }
            leave = leave.min(t);
        }
    }

    let at = |t: f64| {
        (
            dx.mul_add(t, x0).round() as i64,
            dy.mul_add(t, y0).round() as i64,
        )
    };
    let start = if enter > 0.0 { at(enter) } else { from };
    let end = if leave < 1.0 { at(leave) } else { to };
    Some((start, end))
}

/// Draw a straight line between two points, endpoints included
///
/// The segment is clipped to the frame, widened by the pen width, before it is
/// walked, so far off-frame endpoints cost no more than visible ones.
pub fn draw_line(frame: &mut RgbImage, from: (i64, i64), to: (i64, i64), pen: Pen) {
    let (width, height) = frame.dimensions();
    let pad = i64::from(pen.width);
    let Some((from, to)) = clip_segment(
        from,
        to,
        (-pad, -pad),
        (i64::from(width) - 1 + pad, i64::from(height) - 1 + pad),
    ) else {
        return;
    };

    let (mut x, mut y) = from;
    let dx = (to.0 - x).abs();
    let dy = -(to.1 - y).abs();
    let step_x = if x < to.0 { 1 } else { -1 };
    let step_y = if y < to.1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        stamp(frame, x, y, pen);
        if x == to.0 && y == to.1 {
            break;
        }
        let doubled = 2 * err;
        if doubled >= dy {
            err += dy;
            x += step_x;
        }
        if doubled <= dx {
            err += dx;
            y += step_y;
        }
    }
}

/// Draw the four edges of the box spanning `top_left` to `bottom_right`
pub fn draw_rect_outline(
    frame: &mut RgbImage,
    top_left: (i64, i64),
    bottom_right: (i64, i64),
    pen: Pen,
) {
    let top_right = (bottom_right.0, top_left.1);
    let bottom_left = (top_left.0, bottom_right.1);
    draw_line(frame, top_left, top_right, pen);
    draw_line(frame, top_right, bottom_right, pen);
    draw_line(frame, bottom_right, bottom_left, pen);
    draw_line(frame, bottom_left, top_left, pen);
}
