use crate::models::{ICON_SIZES, IconFile, icon_file_name};
use crate::render::{encode_png, render_icon};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Renders every configured size into `out_dir`, logging one line per file to `log`.
///
/// Existing icons are overwritten. The first failure stops the run; files already
/// written stay on disk.
pub fn run_batch<W: Write>(
    out_dir: &Path,
    log: &mut W,
) -> Result<Vec<IconFile>, Box<dyn std::error::Error>> {
    let mut written = Vec::with_capacity(ICON_SIZES.len());

    for size in ICON_SIZES {
        let file_name = icon_file_name(size);
        let path = out_dir.join(&file_name);

        let png = encode_png(&render_icon(size))
            .map_err(|e| format!("Failed to encode {}: {}", file_name, e))?;
        fs::write(&path, png).map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;

        writeln!(log, "Created {}", file_name)?;
        written.push(IconFile { size, path });
    }

    writeln!(log, "All icons created successfully!")?;
    Ok(written)
}
