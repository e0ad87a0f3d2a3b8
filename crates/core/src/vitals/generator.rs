//! Random vitals generator.
//!
//! Each call draws a calm baseline, possibly escalates it to an alert-tier or
//! critical-tier draw, classifies the final values and jitters the subject's
//! home position. The RNG is always supplied by the caller so tests can seed it.

use std::ops::RangeInclusive;

use chrono::Utc;
use rand::Rng;

use crate::subject::Subject;
use crate::types::Timestamp;

use super::classification::{classify, Biometrics};
use super::{GeoPoint, VitalsReading};

/// Chance that a reading is escalated to the alert tier.
pub const ALERT_TIER_PROBABILITY: f64 = 0.08;

/// Chance of the critical tier, rolled only after the alert-tier roll fails.
///
/// The effective unconditional rate is therefore
/// `(1 - ALERT_TIER_PROBABILITY) * CRITICAL_TIER_PROBABILITY` (about 1.84%).
pub const CRITICAL_TIER_PROBABILITY: f64 = 0.02;

/// Maximum absolute offset, in degrees, applied to each home coordinate.
pub const LOCATION_JITTER_DEGREES: f64 = 0.006;

const SIGNAL_DECIMALS: i32 = 3;
const COORDINATE_DECIMALS: i32 = 6;

/// Which value ranges a reading's signals were drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawTier {
    Baseline,
    Alert,
    Critical,
}

struct TierRanges {
    heart_rate: RangeInclusive<u16>,
    stress_index: RangeInclusive<f64>,
    motion_intensity: RangeInclusive<f64>,
}

static BASELINE_RANGES: TierRanges = TierRanges {
    heart_rate: 68..=92,
    stress_index: 0.2..=1.8,
    motion_intensity: 0.1..=0.9,
};

static ALERT_RANGES: TierRanges = TierRanges {
    heart_rate: 100..=113,
    stress_index: 2.2..=3.2,
    motion_intensity: 1.0..=1.8,
};

static CRITICAL_RANGES: TierRanges = TierRanges {
    heart_rate: 116..=138,
    stress_index: 3.5..=5.0,
    motion_intensity: 2.1..=4.2,
};

impl DrawTier {
    fn ranges(self) -> &'static TierRanges {
        match self {
            DrawTier::Baseline => &BASELINE_RANGES,
            DrawTier::Alert => &ALERT_RANGES,
            DrawTier::Critical => &CRITICAL_RANGES,
        }
    }

    /// Draw heart rate, stress and motion from this tier's ranges.
    pub fn sample<R: Rng + ?Sized>(self, rng: &mut R) -> Biometrics {
        let ranges = self.ranges();
        Biometrics {
            heart_rate: rng.random_range(ranges.heart_rate.clone()),
            stress_index: round_to(
                rng.random_range(ranges.stress_index.clone()),
                SIGNAL_DECIMALS,
            ),
            motion_intensity: round_to(
                rng.random_range(ranges.motion_intensity.clone()),
                SIGNAL_DECIMALS,
            ),
        }
    }
}

/// Roll the escalation gate.
///
/// Two independent rolls in priority order: the alert tier first, then the
/// critical tier only if the first roll failed.
pub fn roll_tier<R: Rng + ?Sized>(rng: &mut R) -> DrawTier {
    if rng.random_bool(ALERT_TIER_PROBABILITY) {
        DrawTier::Alert
    } else if rng.random_bool(CRITICAL_TIER_PROBABILITY) {
        DrawTier::Critical
    } else {
        DrawTier::Baseline
    }
}

/// Generate a reading for `subject`, stamped with the current UTC time.
pub fn generate<R: Rng + ?Sized>(subject: &Subject, rng: &mut R) -> VitalsReading {
    generate_at(subject, rng, Utc::now())
}

/// Generate a reading for `subject` stamped with `now`.
pub fn generate_at<R: Rng + ?Sized>(
    subject: &Subject,
    rng: &mut R,
    now: Timestamp,
) -> VitalsReading {
    // The baseline is always drawn, even when an escalation replaces it.
    let baseline = DrawTier::Baseline.sample(rng);
    let bio = match roll_tier(rng) {
        DrawTier::Baseline => baseline,
        tier => tier.sample(rng),
    };

    let status = classify(&bio);

    let lat_jitter = rng.random_range(-LOCATION_JITTER_DEGREES..=LOCATION_JITTER_DEGREES);
    let lng_jitter = rng.random_range(-LOCATION_JITTER_DEGREES..=LOCATION_JITTER_DEGREES);
    let location = GeoPoint {
        lat: round_to(subject.home_latitude + lat_jitter, COORDINATE_DECIMALS),
        lng: round_to(subject.home_longitude + lng_jitter, COORDINATE_DECIMALS),
    };

    VitalsReading {
        timestamp: now,
        subject_id: subject.id.clone(),
        profile_label: subject.profile_label.clone(),
        display_name: subject.display_name.clone(),
        sector_label: subject.sector_label.clone(),
        risk_zone: subject.risk_zone,
        location,
        heart_rate: bio.heart_rate,
        stress_index: bio.stress_index,
        motion_intensity: bio.motion_intensity,
        status,
        threat_level: status.threat_level(),
        assessment_note: status.assessment(),
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::registry::SubjectRegistry;
    use crate::vitals::{SafetyStatus, ThreatLevel};

    fn is_rounded(value: f64, decimals: i32) -> bool {
        round_to(value, decimals) == value
    }

    fn assert_in(value: f64, range: &RangeInclusive<f64>) {
        assert!(
            value >= *range.start() && value <= *range.end(),
            "{value} outside {range:?}"
        );
    }

    #[test]
    fn round_to_truncates_decimals() {
        assert_eq!(round_to(1.23456, 3), 1.235);
        assert_eq!(round_to(12.9249004, 6), 12.9249);
        assert_eq!(round_to(0.0004, 3), 0.0);
    }

    #[test]
    fn readings_respect_ranges_and_rounding() {
        let registry = SubjectRegistry::sentinel_defaults();
        let mut rng = StdRng::seed_from_u64(7);

        for subject in registry.list_all() {
            for _ in 0..2_000 {
                let r = generate(subject, &mut rng);

                assert!(r.heart_rate > 0 && r.heart_rate <= 138);
                assert!(r.stress_index >= 0.0 && is_rounded(r.stress_index, 3));
                assert!(r.motion_intensity >= 0.0 && is_rounded(r.motion_intensity, 3));

                assert!(is_rounded(r.location.lat, 6));
                assert!(is_rounded(r.location.lng, 6));
                let tolerance = LOCATION_JITTER_DEGREES + 1e-6;
                assert!((r.location.lat - subject.home_latitude).abs() <= tolerance);
                assert!((r.location.lng - subject.home_longitude).abs() <= tolerance);
            }
        }
    }

    #[test]
    fn readings_copy_subject_descriptors() {
        let registry = SubjectRegistry::sentinel_defaults();
        let subject = registry.find("KVL-F-002").unwrap();
        let before = subject.clone();
        let r = generate(subject, &mut StdRng::seed_from_u64(1));

        assert_eq!(r.subject_id, "KVL-F-002");
        assert_eq!(r.display_name, "Kavitha R.");
        assert_eq!(r.profile_label, subject.profile_label);
        assert_eq!(r.sector_label, subject.sector_label);
        assert_eq!(r.risk_zone, subject.risk_zone);
        assert_eq!(*subject, before);
    }

    #[test]
    fn classification_matches_final_values() {
        let registry = SubjectRegistry::sentinel_defaults();
        let subject = &registry.list_all()[0];
        let mut rng = StdRng::seed_from_u64(99);

        for _ in 0..20_000 {
            let r = generate(subject, &mut rng);
            assert_eq!(r.status, classify(&r.biometrics()));
            assert_eq!(r.threat_level, r.status.threat_level());
            assert_eq!(r.assessment_note, r.status.assessment());

            if r.heart_rate > 115 && r.motion_intensity > 2.0 {
                assert_eq!(r.status, SafetyStatus::CriticalSos);
                assert_eq!(r.threat_level, ThreatLevel::ImmediateResponse);
            }
        }
    }

    #[test]
    fn tier_samples_stay_in_their_ranges() {
        let mut rng = StdRng::seed_from_u64(3);

        for tier in [DrawTier::Baseline, DrawTier::Alert, DrawTier::Critical] {
            let ranges = tier.ranges();
            for _ in 0..1_000 {
                let bio = tier.sample(&mut rng);
                assert!(ranges.heart_rate.contains(&bio.heart_rate));
                assert_in(bio.stress_index, &ranges.stress_index);
                assert_in(bio.motion_intensity, &ranges.motion_intensity);
            }
        }
    }

    #[test]
    fn critical_tier_always_classifies_critical() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..1_000 {
            let bio = DrawTier::Critical.sample(&mut rng);
            assert_eq!(classify(&bio), SafetyStatus::CriticalSos);
        }
    }

    #[test]
    fn baseline_tier_always_classifies_safe() {
        let mut rng = StdRng::seed_from_u64(12);
        for _ in 0..1_000 {
            let bio = DrawTier::Baseline.sample(&mut rng);
            assert_eq!(classify(&bio), SafetyStatus::Safe);
        }
    }

    #[test]
    fn escalation_gate_is_two_stage() {
        const ROLLS: usize = 100_000;
        let mut rng = StdRng::seed_from_u64(2025);

        let mut alert = 0usize;
        let mut critical = 0usize;
        for _ in 0..ROLLS {
            match roll_tier(&mut rng) {
                DrawTier::Alert => alert += 1,
                DrawTier::Critical => critical += 1,
                DrawTier::Baseline => {}
            }
        }

        let alert_rate = alert as f64 / ROLLS as f64;
        let critical_rate = critical as f64 / ROLLS as f64;
        let critical_given_no_alert = critical as f64 / (ROLLS - alert) as f64;

        assert!((alert_rate - 0.08).abs() < 0.004, "alert rate {alert_rate}");
        assert!(
            (critical_rate - 0.92 * 0.02).abs() < 0.0015,
            "critical rate {critical_rate}"
        );
        assert!(
            (critical_given_no_alert - 0.02).abs() < 0.0015,
            "conditional critical rate {critical_given_no_alert}"
        );
    }

    #[test]
    fn generated_status_rates_follow_escalation_gate() {
        const READINGS: usize = 100_000;
        let registry = SubjectRegistry::sentinel_defaults();
        let subject = &registry.list_all()[0];
        let mut rng = StdRng::seed_from_u64(2025);
        let now = Utc::now();

        let mut critical = 0usize;
        let mut alert = 0usize;
        for _ in 0..READINGS {
            match generate_at(subject, &mut rng, now).status {
                SafetyStatus::CriticalSos => critical += 1,
                SafetyStatus::Alert => alert += 1,
                SafetyStatus::Safe => {}
            }
        }

        // Critical-tier draws always classify CRITICAL_SOS.
        let critical_rate = critical as f64 / READINGS as f64;
        assert!(
            (critical_rate - 0.92 * 0.02).abs() < 0.0015,
            "critical rate {critical_rate}"
        );

        // Alert-tier draws with hr=100 and stress<=3.0 classify SAFE, so the
        // ALERT share sits just under the alert-tier probability.
        let alert_rate = alert as f64 / READINGS as f64;
        assert!(
            alert_rate > 0.065 && alert_rate < ALERT_TIER_PROBABILITY,
            "alert rate {alert_rate}"
        );
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let registry = SubjectRegistry::sentinel_defaults();
        let subject = &registry.list_all()[2];
        let now = Utc::now();

        let a = generate_at(subject, &mut StdRng::seed_from_u64(42), now);
        let b = generate_at(subject, &mut StdRng::seed_from_u64(42), now);
        assert_eq!(a, b);
    }

    #[test]
    fn repeated_calls_vary() {
        let registry = SubjectRegistry::sentinel_defaults();
        let subject = &registry.list_all()[0];
        let mut rng = StdRng::seed_from_u64(5);
        let now = Utc::now();

        let first = generate_at(subject, &mut rng, now);
        let varied = (0..10).any(|_| generate_at(subject, &mut rng, now) != first);
        assert!(varied);
    }

    #[test]
    fn timestamp_serializes_with_microseconds() {
        let registry = SubjectRegistry::sentinel_defaults();
        let now = chrono::DateTime::parse_from_rfc3339("2025-03-01T22:15:30.123456789Z")
            .unwrap()
            .with_timezone(&Utc);
        let r = generate_at(&registry.list_all()[0], &mut StdRng::seed_from_u64(8), now);
        let json = serde_json::to_value(&r).unwrap();

        assert_eq!(json["timestamp"], "2025-03-01T22:15:30.123456Z");
    }

    #[test]
    fn timestamp_serializes_with_trailing_z() {
        let registry = SubjectRegistry::sentinel_defaults();
        let r = generate(&registry.list_all()[0], &mut StdRng::seed_from_u64(8));
        let json = serde_json::to_value(&r).unwrap();

        let ts = json["timestamp"].as_str().unwrap();
        assert!(ts.ends_with('Z'), "timestamp {ts}");
        assert!(chrono::DateTime::parse_from_rfc3339(ts).is_ok());
    }

    #[test]
    fn reading_uses_wire_field_names() {
        let registry = SubjectRegistry::sentinel_defaults();
        let r = generate(&registry.list_all()[3], &mut StdRng::seed_from_u64(9));
        let json = serde_json::to_value(&r).unwrap();

        assert_eq!(json["user_id"], "KVL-F-004");
        assert_eq!(json["name"], "Selvi K.");
        assert_eq!(json["risk_zone"], "HIGH");
        assert!(json["heart_rate"].is_u64());
        assert!(json["gsr_fear_sweat_index"].is_f64());
        assert!(json["kinetic_struggle_g_force"].is_f64());
        assert!(json["location"]["lat"].is_f64());
        assert!(json["location"]["lng"].is_f64());
        assert!(json["status"].is_string());
        assert!(json["threat_level"].is_string());
        assert!(json["ai_assessment"].is_string());
    }
}
