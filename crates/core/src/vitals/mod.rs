//! Simulated bio-safety vitals.
//!
//! Contains the random reading generator and the threshold classifier.
//! All logic in this module is pure; randomness and the clock are passed in
//! by the caller.

pub mod classification;
pub mod generator;

use serde::Serialize;

use crate::subject::RiskZone;
use crate::types::Timestamp;

pub use classification::{classify, Biometrics, SafetyStatus, ThreatLevel};
pub use generator::{generate, generate_at, roll_tier, DrawTier};

/// A jittered position near the subject's home coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// One freshly synthesized reading for a subject.
///
/// Built per request and serialized immediately; never stored. Subject
/// descriptors are copied in so the reading stands on its own.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VitalsReading {
    #[serde(serialize_with = "crate::types::serialize_micros")]
    pub timestamp: Timestamp,
    #[serde(rename = "user_id")]
    pub subject_id: String,
    #[serde(rename = "profile")]
    pub profile_label: String,
    #[serde(rename = "name")]
    pub display_name: String,
    #[serde(rename = "sector")]
    pub sector_label: String,
    pub risk_zone: RiskZone,
    pub location: GeoPoint,
    pub heart_rate: u16,
    #[serde(rename = "gsr_fear_sweat_index")]
    pub stress_index: f64,
    #[serde(rename = "kinetic_struggle_g_force")]
    pub motion_intensity: f64,
    pub status: SafetyStatus,
    pub threat_level: ThreatLevel,
    #[serde(rename = "ai_assessment")]
    pub assessment_note: &'static str,
}

#[cfg(test)]
impl VitalsReading {
    /// The raw signal values this reading was classified from.
    pub fn biometrics(&self) -> Biometrics {
        Biometrics {
            heart_rate: self.heart_rate,
            stress_index: self.stress_index,
            motion_intensity: self.motion_intensity,
        }
    }
}
