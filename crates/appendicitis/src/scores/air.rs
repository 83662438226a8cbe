//! Appendicitis Inflammatory Response (AIR) score, 0–12 points.

use crate::record::AppendicitisRecord;
use guideflow_types::{Measurement, ScoreResult};
use serde::Serialize;

/// Maximum attainable AIR score.
pub const AIR_MAX: u32 = 12;

/// AIR band partition: 0–4, 5–8, 9–12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AirBand {
    Low,
    Intermediate,
    High,
}

impl AirBand {
    /// Band for a given score. Total over all of `u32`.
    pub fn classify(score: u32) -> Self {
        match score {
            0..=4 => AirBand::Low,
            5..=8 => AirBand::Intermediate,
            _ => AirBand::High,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AirBand::Low => "LOW",
            AirBand::Intermediate => "INTERMEDIATE",
            AirBand::High => "HIGH",
        }
    }

    fn interpretation(&self) -> &'static str {
        match self {
            AirBand::Low => "low probability of appendicitis",
            AirBand::Intermediate => "intermediate probability; imaging required",
            AirBand::High => "high probability of appendicitis",
        }
    }
}

fn two_tier(value: Option<Measurement>, high: f64, low: f64) -> u32 {
    match value {
        Some(v) if v.value() >= high => 2,
        Some(v) if v.value() >= low => 1,
        _ => 0,
    }
}

/// Computes the AIR score.
///
/// Vomiting 1, RLQ pain 1, rebound tenderness light/moderate/strong 1/2/3,
/// temperature ≥38.5 °C 1, leukocytes ≥15 ×10⁹/L 2 (≥10: 1), neutrophils
/// ≥85 % 2 (≥70 %: 1), CRP ≥50 mg/L 2 (≥10: 1). Unset measurements score
/// nothing.
pub fn air(record: &AppendicitisRecord) -> ScoreResult<AirBand> {
    let mut value = 0;
    if record.air_vomiting {
        value += 1;
    }
    if record.air_rlq_pain {
        value += 1;
    }
    value += record.air_rebound.points();
    if let Some(t) = record.air_temperature_c {
        if t.value() >= 38.5 {
            value += 1;
        }
    }
    value += two_tier(record.air_leukocytes, 15.0, 10.0);
    value += two_tier(record.air_neutrophil_pct, 85.0, 70.0);
    value += two_tier(record.air_crp_mg_l, 50.0, 10.0);

    let band = AirBand::classify(value);
    ScoreResult {
        value,
        band,
        interpretation: band.interpretation(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::ReboundIntensity;

    #[test]
    fn test_empty_record_scores_zero() {
        let result = air(&AppendicitisRecord::new());
        assert_eq!(result.value, 0);
        assert_eq!(result.band, AirBand::Low);
    }

    #[test]
    fn test_maximum_inputs_reach_twelve() {
        let mut record = AppendicitisRecord {
            air_vomiting: true,
            air_rlq_pain: true,
            air_rebound: ReboundIntensity::Strong,
            ..AppendicitisRecord::new()
        };
        record.set_air_temperature_c(39.2).unwrap();
        record.set_air_leukocytes(16.0).unwrap();
        record.set_air_neutrophil_pct(90.0).unwrap();
        record.set_air_crp_mg_l(120.0).unwrap();

        let result = air(&record);
        assert_eq!(result.value, AIR_MAX);
        assert_eq!(result.band, AirBand::High);
    }

    #[test]
    fn test_rebound_selector_scores_exactly_one_level() {
        for (intensity, points) in [
            (ReboundIntensity::Absent, 0),
            (ReboundIntensity::Light, 1),
            (ReboundIntensity::Moderate, 2),
            (ReboundIntensity::Strong, 3),
        ] {
            let record = AppendicitisRecord {
                air_rebound: intensity,
                ..AppendicitisRecord::new()
            };
            assert_eq!(air(&record).value, points);
        }
    }

    #[test]
    fn test_lab_threshold_bands() {
        let mut record = AppendicitisRecord::new();
        record.set_air_leukocytes(10.0).unwrap();
        assert_eq!(air(&record).value, 1);
        record.set_air_leukocytes(14.9).unwrap();
        assert_eq!(air(&record).value, 1);
        record.set_air_leukocytes(15.0).unwrap();
        assert_eq!(air(&record).value, 2);

        let mut record = AppendicitisRecord::new();
        record.set_air_crp_mg_l(9.9).unwrap();
        assert_eq!(air(&record).value, 0);
        record.set_air_crp_mg_l(49.9).unwrap();
        assert_eq!(air(&record).value, 1);
        record.set_air_crp_mg_l(50.0).unwrap();
        assert_eq!(air(&record).value, 2);

        let mut record = AppendicitisRecord::new();
        record.set_air_neutrophil_pct(69.9).unwrap();
        assert_eq!(air(&record).value, 0);
        record.set_air_neutrophil_pct(84.9).unwrap();
        assert_eq!(air(&record).value, 1);
        record.set_air_neutrophil_pct(85.0).unwrap();
        assert_eq!(air(&record).value, 2);
    }

    #[test]
    fn test_rlq_pain_moderate_rebound_fever_and_leukocytosis() {
        // RLQ pain (1) + moderate rebound (2) + 39.0 °C (1) + 16 ×10⁹/L (2) = 6,
        // intermediate band.
        let mut record = AppendicitisRecord {
            air_rlq_pain: true,
            air_rebound: ReboundIntensity::Moderate,
            ..AppendicitisRecord::new()
        };
        record.set_air_temperature_c(39.0).unwrap();
        record.set_air_leukocytes(16.0).unwrap();

        let result = air(&record);
        assert_eq!(result.value, 6);
        assert_eq!(result.band, AirBand::Intermediate);
    }

    #[test]
    fn test_band_partition_is_total_and_non_overlapping() {
        for score in 0..=AIR_MAX {
            let band = AirBand::classify(score);
            let expected = if score <= 4 {
                AirBand::Low
            } else if score <= 8 {
                AirBand::Intermediate
            } else {
                AirBand::High
            };
            assert_eq!(band, expected, "score {score}");
        }
    }
}
