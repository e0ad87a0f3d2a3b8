//! Handlers for simulated bio-safety vitals.
//!
//! Every request synthesizes fresh readings; nothing is cached or stored.

use axum::extract::{Path, State};
use axum::Json;
use kavalan_core::feed::VitalsFeed;
use kavalan_core::vitals::{generate, SafetyStatus, VitalsReading};

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/vitals
///
/// Generate a reading for every registered subject, in registry order, and
/// summarize the batch.
pub async fn list_vitals(State(state): State<AppState>) -> Json<VitalsFeed> {
    let readings: Vec<VitalsReading> = state.rng.with_rng(|rng| {
        state
            .registry
            .list_all()
            .iter()
            .map(|subject| generate(subject, rng))
            .collect()
    });

    let feed = VitalsFeed::from_readings(readings);
    if feed.status == SafetyStatus::CriticalSos {
        tracing::warn!(
            critical_count = feed.critical_count,
            alert_count = feed.alert_count,
            "Critical SOS in vitals feed"
        );
    } else {
        tracing::debug!(
            total_active = feed.total_active,
            alert_count = feed.alert_count,
            safe_count = feed.safe_count(),
            "Vitals feed generated"
        );
    }

    Json(feed)
}

/// GET /api/vitals/{user_id}
///
/// Generate a single reading for one subject. Unknown ids are a 404.
pub async fn get_subject_vitals(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<VitalsReading>> {
    let subject = state.registry.require(&user_id)?;
    let reading = state.rng.with_rng(|rng| generate(subject, rng));

    tracing::debug!(
        subject_id = %reading.subject_id,
        status = ?reading.status,
        "Subject vitals generated"
    );

    Ok(Json(reading))
}
