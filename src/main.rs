use pencil_sketch::image::ImageView;
use pencil_sketch::{FilterMode, Intensity, PixelBuffer, SketchParams, SketchPipeline};

fn main() {
    env_logger::init();

    // Demo stub: renders a synthetic disc-on-gradient buffer with both modes
    let (w, h) = (320usize, 240usize);
    let original = synthetic_scene(w, h);

    let mut pipeline = SketchPipeline::new();
    for mode in [FilterMode::Dodge, FilterMode::Sobel] {
        let params = SketchParams::new(mode, Intensity::clamped(12));
        let outcome = pipeline.process_with_diagnostics(&original, &params);
        let dark = outcome
            .image
            .pixels()
            .filter(|px| px[0] < 128)
            .count();
        println!(
            "mode={:?} size={}x{} dark_pixels={} total_ms={:.3}",
            mode,
            outcome.image.width(),
            outcome.image.height(),
            dark,
            outcome.report.timings.total_ms
        );
    }
}

fn synthetic_scene(w: usize, h: usize) -> PixelBuffer {
    let mut data = Vec::with_capacity(w * h * 4);
    let (cx, cy, r) = (w as f32 / 2.0, h as f32 / 2.0, h as f32 / 3.0);
    for y in 0..h {
        for x in 0..w {
            let dx = x as f32 - cx;
            let dy = y as f32 - cy;
            let inside = dx * dx + dy * dy <= r * r;
            let base = (x * 255 / w) as u8;
            let px = if inside {
                [40, 60, 160, 255]
            } else {
                [base, 200, 255 - base, 255]
            };
            data.extend_from_slice(&px);
        }
    }
    match PixelBuffer::from_raw(w, h, data) {
        Ok(buf) => buf,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
