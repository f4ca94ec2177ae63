//! Timing for the analysis passes.
//!
//! Classification and aggregation are single synchronous passes over the
//! whole table, so the only thing worth watching is how long each pass
//! takes on large files.
//!
//! ```ignore
//! let _timer = ScopedTimer::new("classify_columns", settings.slow_operation_ms);
//! ```

use std::time::Instant;
use tracing::{debug, warn};

/// RAII timer: logs elapsed time when dropped, warning past the threshold.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms > self.threshold_ms {
            warn!(
                operation = self.name,
                elapsed_ms = format!("{:.2}", elapsed_ms),
                threshold_ms = format!("{:.2}", self.threshold_ms),
                "Slow operation"
            );
        } else {
            debug!(
                operation = self.name,
                elapsed_ms = format!("{:.2}", elapsed_ms),
                "Operation finished"
            );
        }
    }
}
