//! Per-stage wall-clock timings for a pipeline run.

use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct StageTiming {
    pub name: &'static str,
    pub duration: Duration,
}

#[derive(Debug, Default)]
pub struct PipelineTimings {
    stages: Vec<StageTiming>,
}

impl PipelineTimings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, (name, duration): (&'static str, Duration)) {
        self.stages.push(StageTiming { name, duration });
    }

    pub fn total_duration(&self) -> Duration {
        self.stages.iter().map(|s| s.duration).sum()
    }

    pub fn log_summary(&self) {
        let total = self.total_duration();
        for stage in &self.stages {
            let percentage = if total.as_secs_f64() > 0.0 {
                (stage.duration.as_secs_f64() / total.as_secs_f64()) * 100.0
            } else {
                0.0
            };
            debug!(
                "{:<12} {:>10.3}ms ({:>5.1}%)",
                stage.name,
                stage.duration.as_secs_f64() * 1000.0,
                percentage
            );
        }
        debug!("{:<12} {:>10.3}ms", "total", total.as_secs_f64() * 1000.0);
    }
}

pub struct Timer {
    start: Instant,
    name: &'static str,
}

impl Timer {
    pub fn start(name: &'static str) -> Self {
        Self {
            start: Instant::now(),
            name,
        }
    }

    pub fn stop(self) -> (&'static str, Duration) {
        (self.name, self.start.elapsed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_sums_every_recorded_stage() {
        let mut timings = PipelineTimings::new();
        assert_eq!(timings.total_duration(), Duration::ZERO);

        timings.record(("decode", Duration::from_millis(3)));
        timings.record(("blur", Duration::from_millis(5)));
        timings.record(("decode", Duration::from_millis(2)));

        assert_eq!(timings.total_duration(), Duration::from_millis(10));
        timings.log_summary();
    }

    #[test]
    fn timer_reports_its_name() {
        let (name, _elapsed) = Timer::start("transpose").stop();
        assert_eq!(name, "transpose");
    }
}
