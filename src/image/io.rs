//! I/O helpers for the demo binaries.
//!
//! - `load_rgba_image`: decode a PNG/JPEG into an owned `PixelBuffer`.
//! - `save_rgba_image`: encode a `PixelBuffer` as PNG (format from extension).
//! - `write_report`: store a `SketchReport` as pretty JSON.
//!
//! The sketch core never touches files; these helpers belong to the
//! collaborator side.
use super::{ImageView, PixelBuffer};
use crate::diagnostics::SketchReport;
use image::RgbaImage;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert to 8-bit RGBA.
pub fn load_rgba_image(path: &Path) -> Result<PixelBuffer, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgba8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    PixelBuffer::from_raw(width, height, img.into_raw())
        .map_err(|e| format!("Failed to load {}: {e}", path.display()))
}

/// Save an RGBA buffer; the container format follows the file extension.
pub fn save_rgba_image(buffer: &PixelBuffer, path: &Path) -> Result<(), String> {
    prepare_output_path(path)?;
    let image = RgbaImage::from_raw(
        buffer.width() as u32,
        buffer.height() as u32,
        buffer.as_slice().to_vec(),
    )
    .ok_or_else(|| "Failed to create image buffer".to_string())?;
    image
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Write a run report as pretty JSON, creating the output directory.
pub fn write_report(path: &Path, report: &SketchReport) -> Result<(), String> {
    prepare_output_path(path)?;
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| format!("Failed to encode sketch report: {e}"))?;
    fs::write(path, json).map_err(|e| format!("Failed to write report {}: {e}", path.display()))
}

fn prepare_output_path(path: &Path) -> Result<(), String> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir)
            .map_err(|e| format!("Failed to create output directory {}: {e}", dir.display())),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{InputDescriptor, TimingBreakdown};
    use crate::filters::LumaWeights;
    use crate::sketch::FilterMode;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("pencil-sketch-{name}-{}", std::process::id()))
    }

    #[test]
    fn png_round_trip_preserves_pixels() {
        let dir = scratch_dir("png");
        let path = dir.join("nested").join("sketch.png");
        let mut buf = PixelBuffer::filled(3, 2, [255, 255, 255, 255]).unwrap();
        buf.set_pixel(1, 1, [12, 34, 56, 78]);

        save_rgba_image(&buf, &path).unwrap();
        let loaded = load_rgba_image(&path).unwrap();
        assert_eq!(loaded, buf);
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn report_is_camel_case_json() {
        let dir = scratch_dir("report");
        let path = dir.join("out").join("report.json");
        let report = SketchReport {
            input: InputDescriptor {
                width: 4,
                height: 3,
            },
            mode: FilterMode::Dodge,
            intensity: 12,
            luma_weights: LumaWeights::Legacy,
            blur_radius: Some(1),
            timings: TimingBreakdown::default(),
        };

        write_report(&path, &report).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["blurRadius"], 1);
        assert_eq!(value["lumaWeights"], "legacy");
        assert_eq!(value["input"]["width"], 4);
        let _ = fs::remove_dir_all(dir);
    }
}
