//! Threshold classification of a biometric sample.
//!
//! The threat level and assessment text are never computed separately: they
//! are looked up from the status so the three always agree.

use serde::Serialize;

/// Heart rate above which a kinetic struggle counts as an SOS.
pub const CRITICAL_HEART_RATE: u16 = 115;

/// Motion intensity (g-force) above which a high heart rate counts as an SOS.
pub const CRITICAL_MOTION_INTENSITY: f64 = 2.0;

/// Heart rate above which the reading is at least an alert.
pub const ALERT_HEART_RATE: u16 = 100;

/// Stress (fear-sweat) index above which the reading is at least an alert.
pub const ALERT_STRESS_INDEX: f64 = 3.0;

/// The three signal values a classification is based on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Biometrics {
    pub heart_rate: u16,
    pub stress_index: f64,
    pub motion_intensity: f64,
}

/// Safety classification of a single reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SafetyStatus {
    Safe = 0,
    Alert = 1,
    CriticalSos = 2,
}

/// Response urgency implied by a [`SafetyStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ThreatLevel {
    Nominal,
    Elevated,
    ImmediateResponse,
}

struct StatusProfile {
    threat_level: ThreatLevel,
    assessment: &'static str,
}

/// Indexed by `SafetyStatus as usize`.
static STATUS_PROFILES: [StatusProfile; 3] = [
    StatusProfile {
        threat_level: ThreatLevel::Nominal,
        assessment: "Biometrics within normal transit range.",
    },
    StatusProfile {
        threat_level: ThreatLevel::Elevated,
        assessment: "Elevated fear-sweat index. Monitoring closely. Pre-emptive patrol advised.",
    },
    StatusProfile {
        threat_level: ThreatLevel::ImmediateResponse,
        assessment: "High-stress bio-signature detected. Kinetic struggle pattern matches known threat profiles.",
    },
];

impl SafetyStatus {
    fn profile(self) -> &'static StatusProfile {
        &STATUS_PROFILES[self as usize]
    }

    pub fn threat_level(self) -> ThreatLevel {
        self.profile().threat_level
    }

    /// Fixed human-readable assessment shown alongside the status.
    pub fn assessment(self) -> &'static str {
        self.profile().assessment
    }
}

/// Classify final signal values, regardless of which draw produced them.
///
/// CRITICAL_SOS requires both a high heart rate and heavy motion; ALERT needs
/// either a raised heart rate or a high stress index.
pub fn classify(bio: &Biometrics) -> SafetyStatus {
    if bio.heart_rate > CRITICAL_HEART_RATE && bio.motion_intensity > CRITICAL_MOTION_INTENSITY {
        SafetyStatus::CriticalSos
    } else if bio.heart_rate > ALERT_HEART_RATE || bio.stress_index > ALERT_STRESS_INDEX {
        SafetyStatus::Alert
    } else {
        SafetyStatus::Safe
    }
}
