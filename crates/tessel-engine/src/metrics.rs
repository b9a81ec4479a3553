//! Per-tick metrics for the run controller.

/// Timing and population data collected during a single tick.
///
/// The controller populates these after each step; drivers read them
/// from [`RunController::last_metrics`](crate::RunController::last_metrics).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Wall-clock time for the step, in microseconds.
    pub total_us: u64,
    /// Cells born this tick.
    pub births: usize,
    /// Cells that died this tick.
    pub deaths: usize,
    /// Alive cells after the tick.
    pub population: usize,
}
