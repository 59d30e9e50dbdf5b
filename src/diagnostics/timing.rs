//! Wall-clock cost of the filter stages of one sketch invocation.
use serde::Serialize;
use std::time::Instant;

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub stage: &'static str,
    pub elapsed_ms: f64,
}

/// Stages in execution order plus the end-to-end total.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    /// Record `stage` as having run from `start` until now.
    pub fn record_since(&mut self, stage: &'static str, start: Instant) {
        self.stages.push(StageTiming {
            stage,
            elapsed_ms: millis_since(start),
        });
    }

    pub fn finish(&mut self, start: Instant) {
        self.total_ms = millis_since(start);
    }

    pub fn stage_ms(&self, stage: &str) -> Option<f64> {
        self.stages
            .iter()
            .find(|t| t.stage == stage)
            .map(|t| t.elapsed_ms)
    }

    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.stages.iter().map(|t| t.stage)
    }
}

fn millis_since(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
