//! Cross-score risk classification.
//!
//! The three adult scores are independently valid, so their band readings can
//! disagree. Reconciliation takes the most severe band: a missed high-risk
//! patient is clinically worse than a false positive. PAS is excluded from the
//! reconciliation and stands alone for pediatric patients.

use crate::record::{AppendicitisRecord, Population};
use crate::scores::{aas, air, alvarado, pas, AasBand, AirBand, AlvaradoBand, PasBand};
use serde::Serialize;

/// Overall appendicitis risk level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Low,
    Intermediate,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Intermediate => "INTERMEDIATE",
            RiskLevel::High => "HIGH",
        }
    }
}

fn from_alvarado(band: AlvaradoBand) -> RiskLevel {
    match band {
        AlvaradoBand::Improbable => RiskLevel::Low,
        AlvaradoBand::Possible | AlvaradoBand::Probable => RiskLevel::Intermediate,
        AlvaradoBand::VeryProbable => RiskLevel::High,
    }
}

fn from_air(band: AirBand) -> RiskLevel {
    match band {
        AirBand::Low => RiskLevel::Low,
        AirBand::Intermediate => RiskLevel::Intermediate,
        AirBand::High => RiskLevel::High,
    }
}

fn from_aas(band: AasBand) -> RiskLevel {
    match band {
        AasBand::Low => RiskLevel::Low,
        AasBand::Intermediate => RiskLevel::Intermediate,
        AasBand::High => RiskLevel::High,
    }
}

fn from_pas(band: PasBand) -> RiskLevel {
    match band {
        PasBand::Low => RiskLevel::Low,
        PasBand::Intermediate => RiskLevel::Intermediate,
        PasBand::High => RiskLevel::High,
    }
}

/// Derives the overall risk level from the current record.
///
/// A score participates only once it is engaged (value above zero), so an
/// untouched record yields `None` rather than a spurious low tier. Pediatric
/// patients are classified from PAS alone; everyone else from the most severe
/// engaged band among Alvarado, AIR and AAS.
pub fn risk_level(record: &AppendicitisRecord) -> Option<RiskLevel> {
    if record.population == Some(Population::Pediatric) {
        let result = pas(record);
        if result.value == 0 {
            return None;
        }
        return Some(from_pas(result.band));
    }

    let alvarado = alvarado(record);
    let air = air(record);
    let aas = aas(record);

    [
        (alvarado.value, from_alvarado(alvarado.band)),
        (air.value, from_air(air.band)),
        (aas.value, from_aas(aas.band)),
    ]
    .into_iter()
    .filter(|(value, _)| *value > 0)
    .map(|(_, level)| level)
    .max()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::ReboundIntensity;

    #[test]
    fn test_untouched_record_is_undetermined() {
        assert_eq!(risk_level(&AppendicitisRecord::new()), None);
    }

    #[test]
    fn test_single_low_score_yields_low() {
        let record = AppendicitisRecord {
            alvarado_anorexia: true,
            ..AppendicitisRecord::new()
        };
        assert_eq!(risk_level(&record), Some(RiskLevel::Low));
    }

    #[test]
    fn test_most_severe_band_wins() {
        // Alvarado low (1 point) but AIR intermediate (5 points).
        let mut record = AppendicitisRecord {
            alvarado_anorexia: true,
            air_vomiting: true,
            air_rlq_pain: true,
            air_rebound: ReboundIntensity::Light,
            ..AppendicitisRecord::new()
        };
        record.set_air_leukocytes(16.0).unwrap();
        assert_eq!(risk_level(&record), Some(RiskLevel::Intermediate));
    }

    #[test]
    fn test_any_high_band_forces_high() {
        // Alvarado very probable (9) dominates an intermediate AIR (5).
        let mut record = AppendicitisRecord {
            alvarado_migratory_pain: true,
            alvarado_anorexia: true,
            alvarado_nausea_vomiting: true,
            alvarado_rlq_tenderness: true,
            alvarado_rebound_tenderness: true,
            alvarado_fever: true,
            alvarado_leukocytosis: true,
            air_vomiting: true,
            air_rlq_pain: true,
            air_rebound: ReboundIntensity::Light,
            ..AppendicitisRecord::new()
        };
        record.set_air_leukocytes(16.0).unwrap();
        assert_eq!(risk_level(&record), Some(RiskLevel::High));
    }

    #[test]
    fn test_pediatric_population_uses_pas_alone() {
        // High adult scores must not leak into a pediatric classification.
        let record = AppendicitisRecord {
            population: Some(Population::Pediatric),
            alvarado_migratory_pain: true,
            alvarado_rlq_tenderness: true,
            pas_rlq_tenderness: true,
            pas_cough_hop_percussion_pain: true,
            ..AppendicitisRecord::new()
        };
        // PAS 4 points: intermediate.
        assert_eq!(risk_level(&record), Some(RiskLevel::Intermediate));

        let untouched_pas = AppendicitisRecord {
            population: Some(Population::Pediatric),
            alvarado_rlq_tenderness: true,
            ..AppendicitisRecord::new()
        };
        assert_eq!(risk_level(&untouched_pas), None);
    }
}
