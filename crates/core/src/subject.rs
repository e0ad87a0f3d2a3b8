//! Monitored subject records and their vitals-free projection.

use serde::Serialize;

/// Baseline risk tag attached to a subject's home sector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskZone {
    Low,
    Medium,
    High,
}

/// A monitored person. Fixed at startup and never mutated.
///
/// Serialized field names match the wire format the dashboard consumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Subject {
    #[serde(rename = "user_id")]
    pub id: String,
    #[serde(rename = "name")]
    pub display_name: String,
    #[serde(rename = "profile")]
    pub profile_label: String,
    #[serde(rename = "sector")]
    pub sector_label: String,
    #[serde(rename = "base_lat")]
    pub home_latitude: f64,
    #[serde(rename = "base_lng")]
    pub home_longitude: f64,
    pub risk_zone: RiskZone,
}

/// Descriptive fields of a [`Subject`] without coordinates or vitals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectSummary {
    #[serde(rename = "user_id")]
    pub id: String,
    #[serde(rename = "profile")]
    pub profile_label: String,
    #[serde(rename = "name")]
    pub display_name: String,
    #[serde(rename = "sector")]
    pub sector_label: String,
    pub risk_zone: RiskZone,
}

impl From<&Subject> for SubjectSummary {
    fn from(subject: &Subject) -> Self {
        Self {
            id: subject.id.clone(),
            profile_label: subject.profile_label.clone(),
            display_name: subject.display_name.clone(),
            sector_label: subject.sector_label.clone(),
            risk_zone: subject.risk_zone,
        }
    }
}
