//! Aggregate view over a batch of readings for the live dashboard feed.

use serde::Serialize;

use crate::vitals::{SafetyStatus, VitalsReading};

/// The feed is always live; readings are synthesized on every request.
pub const FEED_STATUS_LIVE: &str = "LIVE";

/// Readings for every active subject plus status counts.
#[derive(Debug, Clone, Serialize)]
pub struct VitalsFeed {
    pub feed_status: &'static str,
    pub total_active: usize,
    pub critical_count: usize,
    pub alert_count: usize,
    /// `CRITICAL_SOS` if any reading is critical, otherwise `SAFE`.
    pub status: SafetyStatus,
    pub vitals: Vec<VitalsReading>,
}

impl VitalsFeed {
    /// Summarize `readings`, keeping their order.
    pub fn from_readings(readings: Vec<VitalsReading>) -> Self {
        let count = |status| readings.iter().filter(|r| r.status == status).count();
        let critical_count = count(SafetyStatus::CriticalSos);
        let alert_count = count(SafetyStatus::Alert);

        let status = if critical_count > 0 {
            SafetyStatus::CriticalSos
        } else {
            SafetyStatus::Safe
        };

        Self {
            feed_status: FEED_STATUS_LIVE,
            total_active: readings.len(),
            critical_count,
            alert_count,
            status,
            vitals: readings,
        }
    }

    pub fn safe_count(&self) -> usize {
        self.total_active - self.critical_count - self.alert_count
    }
}
