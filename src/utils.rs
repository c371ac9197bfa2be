use image::Rgba;
use tiny_skia::{Paint, Path, PathBuilder, Point};

/// Control-point offset for approximating a quarter circle with one cubic.
const KAPPA: f32 = 0.552_284_8;

/// Builds a rounded rectangle from `(left, top)` to `(right, bottom)` with circular corners.
/// The radius is clamped so opposite corners never overlap.
pub fn rounded_rect_path(
    left: f32,
    top: f32,
    right: f32,
    bottom: f32,
    radius: f32,
) -> Option<Path> {
    let r = radius.max(0.0).min((right - left) / 2.0).min((bottom - top) / 2.0);
    let k = r * KAPPA;

    let mut pb = PathBuilder::new();
    pb.move_to(left + r, top);
    pb.line_to(right - r, top);
    pb.cubic_to(right - r + k, top, right, top + r - k, right, top + r);
    pb.line_to(right, bottom - r);
    pb.cubic_to(right, bottom - r + k, right - r + k, bottom, right - r, bottom);
    pb.line_to(left + r, bottom);
    pb.cubic_to(left + r - k, bottom, left, bottom - r + k, left, bottom - r);
    pb.line_to(left, top + r);
    pb.cubic_to(left, top + r - k, left + r - k, top, left + r, top);
    pb.close();
    pb.finish()
}

/// Builds a closed polygon through `points`. Returns `None` for fewer than two points.
pub fn polygon_path(points: &[Point]) -> Option<Path> {
    let (first, rest) = points.split_first()?;
    let mut pb = PathBuilder::new();
    pb.move_to(first.x, first.y);
    for p in rest {
        pb.line_to(p.x, p.y);
    }
    pb.close();
    pb.finish()
}

/// Solid, aliased paint. Without anti-aliasing every touched pixel gets exactly `color`.
pub fn solid_paint(color: Rgba<u8>) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color[0], color[1], color[2], color[3]);
    paint.anti_alias = false;
    paint
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounded_rect_spans_requested_bounds() {
        let path = rounded_rect_path(0.0, 0.0, 10.0, 8.0, 2.0).unwrap();
        let bounds = path.bounds();
        assert_eq!(bounds.left(), 0.0);
        assert_eq!(bounds.top(), 0.0);
        assert_eq!(bounds.right(), 10.0);
        assert_eq!(bounds.bottom(), 8.0);
    }

    #[test]
    fn oversized_radius_still_builds() {
        let path = rounded_rect_path(0.0, 0.0, 6.0, 6.0, 50.0).unwrap();
        assert_eq!(path.bounds().width(), 6.0);
    }

    #[test]
    fn polygon_needs_two_points() {
        assert!(polygon_path(&[]).is_none());
        assert!(polygon_path(&[Point::from_xy(1.0, 1.0)]).is_none());

        let triangle = [
            Point::from_xy(0.0, 0.0),
            Point::from_xy(8.0, 0.0),
            Point::from_xy(0.0, 8.0),
        ];
        let path = polygon_path(&triangle).unwrap();
        assert_eq!(path.bounds().right(), 8.0);
        assert_eq!(path.bounds().bottom(), 8.0);
    }

    #[test]
    fn paint_is_aliased() {
        assert!(!solid_paint(Rgba([1, 2, 3, 255])).anti_alias);
    }
}
