//! Pediatric Appendicitis Score (PAS), 0–10 points.
//!
//! Applies to the pediatric population only; it is not part of the adult
//! cross-score reconciliation.

use crate::record::AppendicitisRecord;
use guideflow_types::ScoreResult;
use serde::Serialize;

/// Maximum attainable PAS score.
pub const PAS_MAX: u32 = 10;

/// PAS band partition: 0–3, 4–6, 7–10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PasBand {
    Low,
    Intermediate,
    High,
}

impl PasBand {
    /// Band for a given score. Total over all of `u32`.
    pub fn classify(score: u32) -> Self {
        match score {
            0..=3 => PasBand::Low,
            4..=6 => PasBand::Intermediate,
            _ => PasBand::High,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PasBand::Low => "LOW",
            PasBand::Intermediate => "INTERMEDIATE",
            PasBand::High => "HIGH",
        }
    }

    fn interpretation(&self) -> &'static str {
        match self {
            PasBand::Low => "low risk of appendicitis",
            PasBand::Intermediate => "intermediate risk; imaging recommended",
            PasBand::High => "high risk; surgical indication",
        }
    }
}

/// Computes the Pediatric Appendicitis Score.
///
/// Fever 1, anorexia 1, nausea/vomiting 1, migratory pain 1, RLQ tenderness 2,
/// pain on cough/hop/percussion 2, leukocytosis 1, neutrophilia 1.
pub fn pas(record: &AppendicitisRecord) -> ScoreResult<PasBand> {
    let mut value = 0;
    if record.pas_fever {
        value += 1;
    }
    if record.pas_anorexia {
        value += 1;
    }
    if record.pas_nausea_vomiting {
        value += 1;
    }
    if record.pas_migratory_pain {
        value += 1;
    }
    if record.pas_rlq_tenderness {
        value += 2;
    }
    if record.pas_cough_hop_percussion_pain {
        value += 2;
    }
    if record.pas_leukocytosis {
        value += 1;
    }
    if record.pas_neutrophilia {
        value += 1;
    }

    let band = PasBand::classify(value);
    ScoreResult {
        value,
        band,
        interpretation: band.interpretation(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record_scores_zero() {
        let result = pas(&AppendicitisRecord::new());
        assert_eq!(result.value, 0);
        assert_eq!(result.band, PasBand::Low);
    }

    #[test]
    fn test_all_indicators_reach_the_maximum() {
        let record = AppendicitisRecord {
            pas_fever: true,
            pas_anorexia: true,
            pas_nausea_vomiting: true,
            pas_migratory_pain: true,
            pas_rlq_tenderness: true,
            pas_cough_hop_percussion_pain: true,
            pas_leukocytosis: true,
            pas_neutrophilia: true,
            ..AppendicitisRecord::new()
        };
        let result = pas(&record);
        assert_eq!(result.value, PAS_MAX);
        assert_eq!(result.band, PasBand::High);
    }

    #[test]
    fn test_two_point_indicators() {
        let record = AppendicitisRecord {
            pas_rlq_tenderness: true,
            pas_cough_hop_percussion_pain: true,
            ..AppendicitisRecord::new()
        };
        let result = pas(&record);
        assert_eq!(result.value, 4);
        assert_eq!(result.band, PasBand::Intermediate);
    }

    #[test]
    fn test_band_partition_is_total_and_non_overlapping() {
        for score in 0..=PAS_MAX {
            let band = PasBand::classify(score);
            let expected = if score <= 3 {
                PasBand::Low
            } else if score <= 6 {
                PasBand::Intermediate
            } else {
                PasBand::High
            };
            assert_eq!(band, expected, "score {score}");
        }
    }
}
