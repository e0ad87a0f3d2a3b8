//! The fixed set of monitored subjects.
//!
//! Built once at process start and shared read-only (behind an `Arc`) with
//! every request handler. There are no mutation operations.

use std::collections::HashSet;

use crate::error::CoreError;
use crate::subject::{RiskZone, Subject, SubjectSummary};

/// Immutable, non-empty list of subjects with unique ids.
#[derive(Debug, Clone)]
pub struct SubjectRegistry {
    subjects: Vec<Subject>,
}

impl SubjectRegistry {
    /// Build a registry, rejecting an empty list or duplicate ids.
    pub fn new(subjects: Vec<Subject>) -> Result<Self, CoreError> {
        if subjects.is_empty() {
            return Err(CoreError::Validation(
                "registry must contain at least one subject".to_string(),
            ));
        }

        let mut seen = HashSet::with_capacity(subjects.len());
        for subject in &subjects {
            if !seen.insert(subject.id.as_str()) {
                return Err(CoreError::Validation(format!(
                    "duplicate subject id '{}'",
                    subject.id
                )));
            }
        }

        Ok(Self { subjects })
    }

    /// The four built-in sentinel subjects.
    pub fn sentinel_defaults() -> Self {
        Self {
            subjects: sentinel_subjects(),
        }
    }

    /// All subjects in registry order.
    pub fn list_all(&self) -> &[Subject] {
        &self.subjects
    }

    /// Exact, case-sensitive lookup by id.
    pub fn find(&self, id: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id == id)
    }

    /// Like [`find`](Self::find), but an unknown id is a [`CoreError::SubjectNotFound`].
    pub fn require(&self, id: &str) -> Result<&Subject, CoreError> {
        self.find(id)
            .ok_or_else(|| CoreError::SubjectNotFound(id.to_string()))
    }

    /// Vitals-free view of every subject, in registry order.
    pub fn summaries(&self) -> Vec<SubjectSummary> {
        self.subjects.iter().map(SubjectSummary::from).collect()
    }

    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }
}

/// The built-in sentinel subjects, unvalidated.
pub fn sentinel_subjects() -> Vec<Subject> {
    vec![
        sentinel(
            "KVL-F-001",
            "Meena S.",
            "Female - College Student (Night Transit)",
            "Chennai Tambaram — Night Bus Corridor",
            12.9249,
            80.1000,
            RiskZone::High,
        ),
        sentinel(
            "KVL-F-002",
            "Kavitha R.",
            "Female - Garment Worker (Vellore Sector)",
            "Vellore Industrial Zone — Early Shift",
            12.9165,
            79.1325,
            RiskZone::Medium,
        ),
        sentinel(
            "KVL-F-003",
            "Priya N.",
            "Female - IT Professional",
            "Chennai OMR Tech Corridor — Late Cab",
            12.8406,
            80.2286,
            RiskZone::Medium,
        ),
        sentinel(
            "KVL-F-004",
            "Selvi K.",
            "Female - Domestic Worker (Remote Area)",
            "Ambattur — Residential Dark Zone",
            13.1143,
            80.1548,
            RiskZone::High,
        ),
    ]
}

fn sentinel(
    id: &str,
    display_name: &str,
    profile_label: &str,
    sector_label: &str,
    home_latitude: f64,
    home_longitude: f64,
    risk_zone: RiskZone,
) -> Subject {
    Subject {
        id: id.to_string(),
        display_name: display_name.to_string(),
        profile_label: profile_label.to_string(),
        sector_label: sector_label.to_string(),
        home_latitude,
        home_longitude,
        risk_zone,
    }
}
