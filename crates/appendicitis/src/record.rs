//! The appendicitis assessment record.
//!
//! A flat, caller-owned container of clinical inputs. Fields are independent:
//! no field is computed from another, and derived values never write back into
//! the record. Boolean indicators and enumerated choices are plain public
//! fields; numeric inputs are [`Measurement`]s, so an out-of-domain value can
//! never be stored, and each has a raw-`f64` setter returning a validation
//! error keyed by the field name.
//!
//! Selections that are mutually exclusive in the source guideline (rebound
//! intensity, guarding severity, sex, symptom duration) are single enums so
//! "exactly one selected" is enforced by the type, not by convention.

use guideflow_types::{InputError, Measurement};
use serde::{Deserialize, Serialize};

/// Patient population the assessment applies to.
///
/// The three adult scores apply to the adult populations; PAS applies to the
/// pediatric population only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Population {
    Adult,
    Pediatric,
    Pregnant,
    Elderly,
}

/// Patient sex, as used by the AAS tenderness row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

/// AIR rebound-tenderness intensity (a single three-level selector).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReboundIntensity {
    #[default]
    Absent,
    Light,
    Moderate,
    Strong,
}

impl ReboundIntensity {
    /// AIR points for this intensity.
    pub fn points(self) -> u32 {
        match self {
            ReboundIntensity::Absent => 0,
            ReboundIntensity::Light => 1,
            ReboundIntensity::Moderate => 2,
            ReboundIntensity::Strong => 3,
        }
    }
}

/// AAS muscular guarding severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Guarding {
    #[default]
    Absent,
    Mild,
    ModerateOrSevere,
}

impl Guarding {
    /// AAS points for this severity.
    pub fn points(self) -> u32 {
        match self {
            Guarding::Absent => 0,
            Guarding::Mild => 2,
            Guarding::ModerateOrSevere => 4,
        }
    }
}

/// Time since symptom onset, which selects the AAS CRP point table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymptomDuration {
    Under24h,
    AtLeast24h,
}

/// Appendicitis classification established after imaging/clinical work-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Uncomplicated,
    Complicated,
}

/// Kind of complication found in complicated appendicitis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Complication {
    /// Periappendiceal abscess (drainable collection).
    Abscess,
    /// Periappendiceal phlegmon (solid inflammatory mass, no drainable
    /// collection).
    Phlegmon,
    /// Free perforation without abscess or phlegmon.
    Perforation,
}

/// Hemodynamic stability at assessment time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stability {
    Stable,
    Unstable,
}

/// Flat appendicitis assessment record.
///
/// Created zero-valued and mutated incrementally as answers arrive. One record
/// exists per in-progress assessment session and is owned exclusively by the
/// caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppendicitisRecord {
    pub population: Option<Population>,

    // Alvarado indicators.
    pub alvarado_migratory_pain: bool,
    pub alvarado_anorexia: bool,
    pub alvarado_nausea_vomiting: bool,
    pub alvarado_rlq_tenderness: bool,
    pub alvarado_rebound_tenderness: bool,
    pub alvarado_fever: bool,
    pub alvarado_leukocytosis: bool,
    pub alvarado_left_shift: bool,

    // AIR inputs.
    pub air_vomiting: bool,
    pub air_rlq_pain: bool,
    pub air_rebound: ReboundIntensity,
    /// Body temperature, °C.
    pub air_temperature_c: Option<Measurement>,
    /// Leukocyte count, ×10⁹/L.
    pub air_leukocytes: Option<Measurement>,
    /// Neutrophil proportion, %.
    pub air_neutrophil_pct: Option<Measurement>,
    /// C-reactive protein, mg/L.
    pub air_crp_mg_l: Option<Measurement>,

    // AAS inputs.
    pub aas_rlq_pain: bool,
    pub aas_pain_relocation: bool,
    pub aas_rlq_tenderness: bool,
    pub aas_guarding: Guarding,
    pub aas_sex: Option<Sex>,
    pub aas_symptom_duration: Option<SymptomDuration>,
    /// Leukocyte count, ×10⁹/L.
    pub aas_leukocytes: Option<Measurement>,
    /// Neutrophil proportion, %.
    pub aas_neutrophil_pct: Option<Measurement>,
    /// C-reactive protein, mg/L.
    pub aas_crp_mg_l: Option<Measurement>,

    /// Patient age in years; used by the AAS tenderness row and treatment
    /// advisories.
    pub age_years: Option<Measurement>,

    // PAS indicators.
    pub pas_fever: bool,
    pub pas_anorexia: bool,
    pub pas_nausea_vomiting: bool,
    pub pas_migratory_pain: bool,
    pub pas_rlq_tenderness: bool,
    pub pas_cough_hop_percussion_pain: bool,
    pub pas_leukocytosis: bool,
    pub pas_neutrophilia: bool,

    // Special-population flags consulted by the imaging resolver.
    pub atypical_presentation: bool,
    pub diagnostic_uncertainty: bool,
    pub suspected_complication: bool,
    pub elderly_patient: bool,
    pub pregnant_patient: bool,
    pub pediatric_patient: bool,

    // Imaging modalities actually performed.
    pub ultrasound_performed: bool,
    pub ct_performed: bool,
    pub mri_performed: bool,

    // Classification and complication characterisation.
    pub classification: Option<Classification>,
    pub complication: Option<Complication>,
    /// Abscess diameter, cm; meaningful when `complication` is `Abscess`.
    pub abscess_diameter_cm: Option<Measurement>,
    /// Visible appendicolith on imaging.
    pub appendicolith: bool,
    pub stability: Option<Stability>,
}

impl AppendicitisRecord {
    /// Creates a zero-valued record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when any special-population flag is set.
    pub fn any_special_population_flag(&self) -> bool {
        self.atypical_presentation
            || self.diagnostic_uncertainty
            || self.suspected_complication
            || self.elderly_patient
            || self.pregnant_patient
            || self.pediatric_patient
    }

    /// Returns `true` when at least one imaging modality was performed.
    pub fn any_imaging_performed(&self) -> bool {
        self.ultrasound_performed || self.ct_performed || self.mri_performed
    }

    pub fn set_air_temperature_c(&mut self, value: f64) -> Result<(), InputError> {
        self.air_temperature_c = Some(Measurement::for_field("air_temperature_c", value)?);
        Ok(())
    }

    pub fn set_air_leukocytes(&mut self, value: f64) -> Result<(), InputError> {
        self.air_leukocytes = Some(Measurement::for_field("air_leukocytes", value)?);
        Ok(())
    }

    pub fn set_air_neutrophil_pct(&mut self, value: f64) -> Result<(), InputError> {
        self.air_neutrophil_pct = Some(Measurement::for_field("air_neutrophil_pct", value)?);
        Ok(())
    }

    pub fn set_air_crp_mg_l(&mut self, value: f64) -> Result<(), InputError> {
        self.air_crp_mg_l = Some(Measurement::for_field("air_crp_mg_l", value)?);
        Ok(())
    }

    pub fn set_aas_leukocytes(&mut self, value: f64) -> Result<(), InputError> {
        self.aas_leukocytes = Some(Measurement::for_field("aas_leukocytes", value)?);
        Ok(())
    }

    pub fn set_aas_neutrophil_pct(&mut self, value: f64) -> Result<(), InputError> {
        self.aas_neutrophil_pct = Some(Measurement::for_field("aas_neutrophil_pct", value)?);
        Ok(())
    }

    pub fn set_aas_crp_mg_l(&mut self, value: f64) -> Result<(), InputError> {
        self.aas_crp_mg_l = Some(Measurement::for_field("aas_crp_mg_l", value)?);
        Ok(())
    }

    pub fn set_age_years(&mut self, value: f64) -> Result<(), InputError> {
        self.age_years = Some(Measurement::for_field("age_years", value)?);
        Ok(())
    }

    pub fn set_abscess_diameter_cm(&mut self, value: f64) -> Result<(), InputError> {
        self.abscess_diameter_cm = Some(Measurement::for_field("abscess_diameter_cm", value)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_zero_valued() {
        let record = AppendicitisRecord::new();
        assert_eq!(record.population, None);
        assert!(!record.alvarado_migratory_pain);
        assert_eq!(record.air_rebound, ReboundIntensity::Absent);
        assert_eq!(record.aas_guarding, Guarding::Absent);
        assert_eq!(record.air_temperature_c, None);
        assert_eq!(record.classification, None);
    }

    #[test]
    fn test_rejected_setter_keeps_prior_value() {
        let mut record = AppendicitisRecord::new();
        record.set_air_temperature_c(38.9).unwrap();

        let err = record
            .set_air_temperature_c(-1.0)
            .expect_err("negative temperature must be rejected");
        assert_eq!(err.field, "air_temperature_c");
        assert_eq!(record.air_temperature_c.unwrap().value(), 38.9);
    }

    #[test]
    fn test_record_roundtrips_through_json() {
        let mut record = AppendicitisRecord::new();
        record.alvarado_fever = true;
        record.air_rebound = ReboundIntensity::Moderate;
        record.aas_sex = Some(Sex::Female);
        record.set_age_years(34.0).unwrap();

        let json = serde_json::to_string(&record).unwrap();
        let back: AppendicitisRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_partial_payload_fills_defaults() {
        let record: AppendicitisRecord =
            serde_json::from_str(r#"{"alvarado_fever": true, "air_rebound": "strong"}"#).unwrap();
        assert!(record.alvarado_fever);
        assert_eq!(record.air_rebound, ReboundIntensity::Strong);
        assert!(!record.alvarado_anorexia);
    }

    #[test]
    fn test_out_of_domain_measurement_rejected_on_the_wire() {
        let result =
            serde_json::from_str::<AppendicitisRecord>(r#"{"air_temperature_c": -4.0}"#);
        assert!(result.is_err());
    }
}
