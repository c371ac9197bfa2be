use image::Rgba;
use std::path::PathBuf;

/// Icon sizes written by a batch run, in write order.
pub const ICON_SIZES: [u32; 3] = [16, 48, 128];

/// Side length of the reference grid the bolt is drawn on.
pub const DESIGN_GRID: f32 = 24.0;

/// Corner radius is `size / CORNER_DIVISOR` (integer division).
pub const CORNER_DIVISOR: u32 = 5;

/// Background fill, a purple-blue accent.
pub const ACCENT: Rgba<u8> = Rgba([102, 126, 234, 255]);

/// Fill and outline colour of the bolt.
pub const BOLT_WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Outline of the lightning bolt on the design grid. The last point closes the shape.
pub const BOLT_POINTS: [(f32, f32); 7] = [
    (13.0, 2.0),
    (3.0, 14.0),
    (12.0, 14.0),
    (11.0, 22.0),
    (21.0, 10.0),
    (12.0, 10.0),
    (13.0, 2.0),
];

/// Record of one icon written to disk by the batch driver.
#[derive(Clone, Debug, PartialEq)]
pub struct IconFile {
    pub size: u32,
    pub path: PathBuf,
}

/// File name for an icon of the given size, e.g. `icon-48.png`.
pub fn icon_file_name(size: u32) -> String {
    format!("icon-{}.png", size)
}
