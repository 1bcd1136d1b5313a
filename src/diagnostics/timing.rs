use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Timing entry describing a single step of a tiling run (loading, tiling,
/// rendering, saving).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

impl StageTiming {
    pub fn new(label: impl Into<String>, elapsed_ms: f64) -> Self {
        Self {
            label: label.into(),
            elapsed_ms,
        }
    }
}

/// Aggregated timing trace for one run.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn push(&mut self, label: impl Into<String>, elapsed_ms: f64) {
        self.stages.push(StageTiming::new(label, elapsed_ms));
        self.total_ms += elapsed_ms;
    }

    /// Run `f`, record its wall time under `label` and pass its result through.
    pub fn measure<R>(&mut self, label: impl Into<String>, f: impl FnOnce() -> R) -> R {
        let start = Instant::now();
        let out = f();
        self.push(label, start.elapsed().as_secs_f64() * 1000.0);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::TimingBreakdown;

    #[test]
    fn measure_records_stage_and_total() {
        let mut timing = TimingBreakdown::default();
        let v = timing.measure("tile", || 41 + 1);
        timing.push("save", 2.5);
        assert_eq!(v, 42);
        assert_eq!(timing.stages.len(), 2);
        assert_eq!(timing.stages[0].label, "tile");
        assert!(timing.total_ms >= 2.5);
    }
}
