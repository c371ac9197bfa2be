use crate::models::{ACCENT, BOLT_POINTS, BOLT_WHITE, CORNER_DIVISOR, DESIGN_GRID};
use crate::utils::{polygon_path, rounded_rect_path, solid_paint};
use image::{ImageFormat, RgbaImage};
use std::io::Cursor;
use tiny_skia::{FillRule, LineCap, LineJoin, Pixmap, Point, Stroke, Transform};

/// Corner radius of the background for an icon of `size` pixels.
pub fn corner_radius(size: u32) -> u32 {
    size / CORNER_DIVISOR
}

/// Ratio that maps design-grid units onto a `size`-pixel canvas.
pub fn scale_factor(size: u32) -> f32 {
    size as f32 / DESIGN_GRID
}

/// The bolt outline projected onto a `size`-pixel canvas.
pub fn bolt_points(size: u32) -> Vec<Point> {
    let scale = scale_factor(size);
    BOLT_POINTS
        .iter()
        .map(|&(gx, gy)| Point::from_xy(gx * scale, gy * scale))
        .collect()
}

/// Draws the lightning-bolt icon at `size` x `size` pixels.
///
/// The canvas starts transparent, gets a rounded accent background covering
/// pixels `0..=size-1` on both axes, then the white bolt on top.
pub fn render_icon(size: u32) -> RgbaImage {
    let Some(mut pixmap) = Pixmap::new(size, size) else {
        return RgbaImage::new(size, size);
    };

    // Quarter-pixel inset keeps the four corner pixels clear for any radius above zero.
    let side = size as f32;
    let background = rounded_rect_path(
        0.25,
        0.25,
        side - 0.25,
        side - 0.25,
        corner_radius(size) as f32 + 0.25,
    );
    if let Some(path) = background {
        pixmap.fill_path(
            &path,
            &solid_paint(ACCENT),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    if let Some(path) = polygon_path(&bolt_points(size)) {
        let white = solid_paint(BOLT_WHITE);
        let outline = Stroke {
            width: 1.0,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Stroke::default()
        };
        pixmap.fill_path(&path, &white, FillRule::Winding, Transform::identity(), None);
        pixmap.stroke_path(&path, &white, &outline, Transform::identity(), None);
    }

    // Every pixel is either untouched or opaque, so premultiplied and straight RGBA agree.
    RgbaImage::from_raw(size, size, pixmap.take())
        .unwrap_or_else(|| RgbaImage::new(size, size))
}

/// Encodes an icon as an RGBA PNG in memory.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, image::ImageError> {
    let mut bytes = Cursor::new(Vec::new());
    image.write_to(&mut bytes, ImageFormat::Png)?;
    Ok(bytes.into_inner())
}
