use super::params::{FilterMode, Intensity, SketchParams};
use super::workspace::SketchWorkspace;
use crate::diagnostics::{InputDescriptor, SketchReport, TimingBreakdown};
use crate::error::Result;
use crate::filters::{
    box_blur_into, desaturate, dodge::blend_layer, invert_in_place, sobel::sketch_layer,
    to_grayscale_into,
};
use crate::image::{ImageView, PixelBuffer};
use log::debug;
use std::time::Instant;

/// Output buffer plus the report describing how it was produced.
#[derive(Clone, Debug)]
pub struct SketchOutcome {
    pub image: PixelBuffer,
    pub report: SketchReport,
}

/// Runs either sketch pipeline over an RGBA buffer.
///
/// Holds scratch buffers only; see the module docs.
#[derive(Debug, Default)]
pub struct SketchPipeline {
    workspace: SketchWorkspace,
}

impl SketchPipeline {
    pub fn new() -> Self {
        Self {
            workspace: SketchWorkspace::new(),
        }
    }

    /// Render `original` and return a new buffer of the same dimensions.
    pub fn process(&mut self, original: &PixelBuffer, params: &SketchParams) -> PixelBuffer {
        let mut out = PixelBuffer::default();
        self.run(original, params, &mut out, None);
        out
    }

    /// Render into `out`, reusing its allocation.
    pub fn process_into(
        &mut self,
        original: &PixelBuffer,
        params: &SketchParams,
        out: &mut PixelBuffer,
    ) {
        self.run(original, params, out, None);
    }

    pub fn process_with_diagnostics(
        &mut self,
        original: &PixelBuffer,
        params: &SketchParams,
    ) -> SketchOutcome {
        let start = Instant::now();
        let mut timings = TimingBreakdown::default();
        let mut image = PixelBuffer::default();
        self.run(original, params, &mut image, Some(&mut timings));
        timings.finish(start);

        let (width, height) = original.dimensions();
        let report = SketchReport {
            input: InputDescriptor { width, height },
            mode: params.mode,
            intensity: params.intensity.get(),
            luma_weights: params.weights(),
            blur_radius: (params.mode == FilterMode::Dodge).then(|| params.intensity.blur_radius()),
            timings,
        };
        SketchOutcome { image, report }
    }

    /// Bytes held by the reusable scratch buffers.
    pub fn scratch_bytes(&self) -> usize {
        self.workspace.reserved_bytes()
    }

    fn run(
        &mut self,
        original: &PixelBuffer,
        params: &SketchParams,
        out: &mut PixelBuffer,
        mut timings: Option<&mut TimingBreakdown>,
    ) {
        let (w, h) = original.dimensions();
        let weights = params.weights();
        let intensity = params.intensity;
        debug!(
            "SketchPipeline::run mode={:?} intensity={} weights={:?} size={}x{}",
            params.mode, intensity, weights, w, h
        );

        let ws = &mut self.workspace;
        match params.mode {
            FilterMode::Dodge => {
                let radius = intensity.blur_radius();
                timed(&mut timings, "desaturate", || {
                    ws.work.copy_from(original);
                    desaturate(&mut ws.work, weights);
                });
                timed(&mut timings, "invert", || invert_in_place(&mut ws.work));
                timed(&mut timings, "blur", || {
                    box_blur_into(
                        &ws.work,
                        radius,
                        params.blur_strategy,
                        &mut ws.blur_temp,
                        out,
                    )
                });
                timed(&mut timings, "dodge", || blend_layer(original, out));
                debug!("SketchPipeline::run dodge blur radius={radius}");
            }
            FilterMode::Sobel => {
                timed(&mut timings, "grayscale", || {
                    to_grayscale_into(original, weights, &mut ws.gray)
                });
                timed(&mut timings, "sobel", || {
                    sketch_layer(original, &ws.gray, intensity.get(), out)
                });
            }
        }
    }
}

fn timed<T>(
    timings: &mut Option<&mut TimingBreakdown>,
    label: &'static str,
    stage: impl FnOnce() -> T,
) -> T {
    let Some(timings) = timings.as_deref_mut() else {
        return stage();
    };
    let start = Instant::now();
    let value = stage();
    timings.record_since(label, start);
    value
}

/// Boundary entry point for collaborators holding raw RGBA bytes.
///
/// Rejects buffers whose length disagrees with the dimensions and clamps the
/// intensity into `[1, 20]` before running the selected pipeline.
pub fn render_raw(
    width: usize,
    height: usize,
    rgba: Vec<u8>,
    mode: FilterMode,
    intensity: i64,
) -> Result<PixelBuffer> {
    let original = PixelBuffer::from_raw(width, height, rgba)?;
    let clamped = Intensity::clamped(intensity);
    if i64::from(clamped.get()) != intensity {
        debug!("render_raw clamped intensity {intensity} to {clamped}");
    }
    let params = SketchParams::new(mode, clamped);
    Ok(SketchPipeline::new().process(&original, &params))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SketchError;
    use crate::filters::BlurStrategy;

    fn gradient(w: usize, h: usize) -> PixelBuffer {
        let mut buf = PixelBuffer::new(w, h).unwrap();
        for y in 0..h {
            for x in 0..w {
                let v = ((x * 255) / w.max(1)) as u8;
                buf.set_pixel(x, y, [v, 255 - v, (y * 40 % 256) as u8, 200]);
            }
        }
        buf
    }

    #[test]
    fn output_matches_input_dimensions() {
        let src = gradient(17, 11);
        let mut pipeline = SketchPipeline::new();
        for mode in [FilterMode::Dodge, FilterMode::Sobel] {
            let out = pipeline.process(&src, &SketchParams::new(mode, Intensity::default()));
            assert_eq!(out.dimensions(), (17, 11));
        }
    }

    #[test]
    fn workspace_is_reused_for_same_size() {
        let src = gradient(32, 24);
        let params = SketchParams::new(FilterMode::Dodge, Intensity::clamped(20));
        let mut pipeline = SketchPipeline::new();
        let mut out = PixelBuffer::default();
        pipeline.process_into(&src, &params, &mut out);
        let work_ptr = pipeline.workspace.work.as_slice().as_ptr();
        let temp_ptr = pipeline.workspace.blur_temp.as_ptr();
        let reserved = pipeline.scratch_bytes();
        pipeline.process_into(&src, &params, &mut out);
        assert_eq!(pipeline.workspace.work.as_slice().as_ptr(), work_ptr);
        assert_eq!(pipeline.workspace.blur_temp.as_ptr(), temp_ptr);
        assert_eq!(pipeline.scratch_bytes(), reserved);
    }

    #[test]
    fn diagnostics_list_stages_in_order() {
        let src = gradient(8, 8);
        let mut pipeline = SketchPipeline::new();

        let dodge = pipeline
            .process_with_diagnostics(&src, &SketchParams::new(FilterMode::Dodge, Intensity::clamped(12)));
        let labels: Vec<&str> = dodge.report.timings.labels().collect();
        assert_eq!(labels, ["desaturate", "invert", "blur", "dodge"]);
        assert_eq!(dodge.report.blur_radius, Some(1));

        let sobel = pipeline
            .process_with_diagnostics(&src, &SketchParams::new(FilterMode::Sobel, Intensity::clamped(12)));
        let labels: Vec<&str> = sobel.report.timings.labels().collect();
        assert_eq!(labels, ["grayscale", "sobel"]);
        assert_eq!(sobel.report.blur_radius, None);
        assert!(sobel.report.timings.stage_ms("sobel").is_some());
        assert!(sobel.report.timings.stage_ms("blur").is_none());
    }

    #[test]
    fn diagnostics_do_not_change_output() {
        let src = gradient(9, 7);
        let params = SketchParams::new(FilterMode::Dodge, Intensity::clamped(20))
            .with_blur_strategy(BlurStrategy::RunningSum);
        let mut pipeline = SketchPipeline::new();
        let plain = pipeline.process(&src, &params);
        let traced = pipeline.process_with_diagnostics(&src, &params);
        assert_eq!(plain, traced.image);
    }

    #[test]
    fn render_raw_validates_length() {
        let err = render_raw(3, 3, vec![0; 35], FilterMode::Sobel, 10).unwrap_err();
        assert!(matches!(err, SketchError::InvalidDimensions { .. }));
    }

    #[test]
    fn render_raw_clamps_intensity() {
        let src = gradient(6, 6);
        let raw = src.clone().into_raw();
        let clamped = render_raw(6, 6, raw.clone(), FilterMode::Sobel, 500).unwrap();
        let max = render_raw(6, 6, raw, FilterMode::Sobel, 20).unwrap();
        assert_eq!(clamped, max);
    }
}
