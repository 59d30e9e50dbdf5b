//! Interactive sketch session: the state behind an upload/slider/reset UI,
//! without the UI.
//!
//! A session owns the uploaded original, a pipeline, a debounce queue for
//! slider moves, and the most recent rendering. Slider input goes through
//! [`SketchSession::request`] + [`SketchSession::poll`]; an explicit apply
//! runs immediately; reset drops the rendering and shows the original again.
use crate::debounce::{LatestRequest, DEFAULT_QUIET_WINDOW};
use crate::filters::{BlurStrategy, LumaWeights};
use crate::image::PixelBuffer;
use crate::sketch::{FilterMode, Intensity, SketchParams, SketchPipeline};
use log::debug;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionOptions {
    pub mode: FilterMode,
    pub luma_weights: Option<LumaWeights>,
    pub blur_strategy: BlurStrategy,
    /// Quiet window for slider requests, in milliseconds.
    pub quiet_window_ms: u64,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            mode: FilterMode::default(),
            luma_weights: None,
            blur_strategy: BlurStrategy::default(),
            quiet_window_ms: DEFAULT_QUIET_WINDOW.as_millis() as u64,
        }
    }
}

#[derive(Debug)]
pub struct SketchSession {
    original: PixelBuffer,
    params: SketchParams,
    pipeline: SketchPipeline,
    queue: LatestRequest<Intensity>,
    rendered: Option<PixelBuffer>,
}

impl SketchSession {
    pub fn new(original: PixelBuffer, options: SessionOptions) -> Self {
        let params = SketchParams {
            mode: options.mode,
            intensity: Intensity::default(),
            luma_weights: options.luma_weights,
            blur_strategy: options.blur_strategy,
        };
        Self {
            original,
            params,
            pipeline: SketchPipeline::new(),
            queue: LatestRequest::new(Duration::from_millis(options.quiet_window_ms)),
            rendered: None,
        }
    }

    pub fn original(&self) -> &PixelBuffer {
        &self.original
    }

    pub fn params(&self) -> &SketchParams {
        &self.params
    }

    /// Switch pipelines. Takes effect on the next render.
    pub fn set_mode(&mut self, mode: FilterMode) {
        self.params.mode = mode;
    }

    /// Queue a slider value. Out-of-range values are clamped.
    pub fn request(&mut self, intensity: i64, now: Instant) {
        self.queue.submit(Intensity::clamped(intensity), now);
    }

    /// Render the pending request if its quiet window has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<&PixelBuffer> {
        let intensity = self.queue.poll(now)?;
        Some(self.render(intensity))
    }

    /// Render right away, dropping any pending slider request.
    pub fn apply(&mut self, intensity: i64) -> &PixelBuffer {
        if self.queue.cancel() {
            debug!("SketchSession::apply dropped pending slider request");
        }
        self.render(Intensity::clamped(intensity))
    }

    /// Drop the rendering and any pending request; the original is shown
    /// verbatim again.
    pub fn reset(&mut self) -> &PixelBuffer {
        self.queue.cancel();
        self.rendered = None;
        &self.original
    }

    /// What should be on screen: the latest rendering, or the original.
    pub fn output(&self) -> &PixelBuffer {
        self.rendered.as_ref().unwrap_or(&self.original)
    }

    pub fn is_rendered(&self) -> bool {
        self.rendered.is_some()
    }

    pub fn has_pending(&self) -> bool {
        self.queue.is_pending()
    }

    pub fn superseded_requests(&self) -> u64 {
        self.queue.superseded_count()
    }

    fn render(&mut self, intensity: Intensity) -> &PixelBuffer {
        self.params.intensity = intensity;
        let out = self.rendered.get_or_insert_with(PixelBuffer::default);
        self.pipeline.process_into(&self.original, &self.params, out);
        out
    }
}
