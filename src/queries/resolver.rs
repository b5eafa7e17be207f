use std::time::Duration;

use rand::Rng;

use crate::db::models::query::Query;

pub const DEFAULT_MIN_DELAY_UNITS: u32 = 1;
pub const DEFAULT_MAX_DELAY_UNITS: u32 = 60;
pub const DEFAULT_DELAY_UNIT: Duration = Duration::from_secs(1);

/// Stand-in for the external cadastre registry: answers after a random
/// delay with a random verdict.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedLookup {
    min_units: u32,
    max_units: u32,
    unit: Duration,
}

impl SimulatedLookup {
    pub fn new(min_units: u32, max_units: u32, unit: Duration) -> Self {
        Self {
            min_units: min_units.min(max_units),
            max_units: max_units.max(min_units),
            unit,
        }
    }

    /// Uniform in `[min_units, max_units]` units.
    pub fn draw_delay(&self) -> Duration {
        let units = rand::rng().random_range(self.min_units..=self.max_units);
        self.unit.saturating_mul(units)
    }

    /// Suspends the calling task, then returns the registry's answer.
    /// Dropping the future cancels the wait; callers that must finish the
    /// lookup run it on a spawned task.
    pub async fn lookup(&self, query: &Query) -> bool {
        let delay = self.draw_delay();
        tracing::debug!(
            query_id = query.id,
            cadastre_number = %query.cadastre_number,
            ?delay,
            "Waiting for external registry"
        );
        tokio::time::sleep(delay).await;

        rand::rng().random_bool(0.5)
    }
}

impl Default for SimulatedLookup {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_DELAY_UNITS, DEFAULT_MAX_DELAY_UNITS, DEFAULT_DELAY_UNIT)
    }
}
