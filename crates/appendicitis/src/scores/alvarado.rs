//! Alvarado (MANTRELS) score, 0–10 points.

use crate::record::AppendicitisRecord;
use guideflow_types::ScoreResult;
use serde::Serialize;

/// Maximum attainable Alvarado score.
pub const ALVARADO_MAX: u32 = 10;

/// Alvarado band partition: ≤4, 5–6, 7–8, 9–10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlvaradoBand {
    Improbable,
    Possible,
    Probable,
    VeryProbable,
}

impl AlvaradoBand {
    /// Band for a given score. Total over all of `u32`.
    pub fn classify(score: u32) -> Self {
        match score {
            0..=4 => AlvaradoBand::Improbable,
            5..=6 => AlvaradoBand::Possible,
            7..=8 => AlvaradoBand::Probable,
            _ => AlvaradoBand::VeryProbable,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AlvaradoBand::Improbable => "IMPROBABLE",
            AlvaradoBand::Possible => "POSSIBLE",
            AlvaradoBand::Probable => "PROBABLE",
            AlvaradoBand::VeryProbable => "VERY_PROBABLE",
        }
    }

    fn interpretation(&self) -> &'static str {
        match self {
            AlvaradoBand::Improbable => {
                "appendicitis unlikely; consider alternative diagnoses"
            }
            AlvaradoBand::Possible => "appendicitis possible; request imaging",
            AlvaradoBand::Probable => "appendicitis probable; consider surgical consult",
            AlvaradoBand::VeryProbable => "appendicitis very probable; surgical indication",
        }
    }
}

/// Computes the Alvarado score.
///
/// Weights: migratory pain 1, anorexia 1, nausea/vomiting 1, RLQ tenderness 2,
/// rebound tenderness 1, fever 1, leukocytosis 2, neutrophil left shift 1.
pub fn alvarado(record: &AppendicitisRecord) -> ScoreResult<AlvaradoBand> {
    let mut value = 0;
    if record.alvarado_migratory_pain {
        value += 1;
    }
    if record.alvarado_anorexia {
        value += 1;
    }
    if record.alvarado_nausea_vomiting {
        value += 1;
    }
    if record.alvarado_rlq_tenderness {
        value += 2;
    }
    if record.alvarado_rebound_tenderness {
        value += 1;
    }
    if record.alvarado_fever {
        value += 1;
    }
    if record.alvarado_leukocytosis {
        value += 2;
    }
    if record.alvarado_left_shift {
        value += 1;
    }

    let band = AlvaradoBand::classify(value);
    ScoreResult {
        value,
        band,
        interpretation: band.interpretation(),
    }
}
