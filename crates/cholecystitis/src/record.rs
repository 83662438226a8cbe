//! The cholecystitis assessment record.
//!
//! Same shaping rules as the appendicitis record: a flat, caller-owned
//! container; boolean indicators and enumerated choices are public fields,
//! numeric inputs are validated [`Measurement`]s with field-keyed setters.
//! An unset measurement never triggers a criterion — in particular, an
//! unrecorded leukocyte count does not read as "outside the normal range".

use guideflow_types::{InputError, Measurement};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// ASA physical-status classification, grades I–V.
///
/// Modelled as an enum so "exactly one grade selected" is structural. The
/// wire form is the customary integer 1–5; deserialisation rejects anything
/// else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AsaClass {
    I,
    II,
    III,
    IV,
    V,
}

/// Error for an ASA grade outside 1–5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("ASA grade must be between 1 and 5, got {0}")]
pub struct AsaClassError(pub u8);

impl AsaClass {
    /// Numeric grade, 1–5.
    pub fn grade(self) -> u8 {
        match self {
            AsaClass::I => 1,
            AsaClass::II => 2,
            AsaClass::III => 3,
            AsaClass::IV => 4,
            AsaClass::V => 5,
        }
    }

    /// `true` for ASA III and above, the high-risk criterion.
    pub fn is_three_or_higher(self) -> bool {
        self >= AsaClass::III
    }
}

impl TryFrom<u8> for AsaClass {
    type Error = AsaClassError;

    fn try_from(grade: u8) -> Result<Self, Self::Error> {
        match grade {
            1 => Ok(AsaClass::I),
            2 => Ok(AsaClass::II),
            3 => Ok(AsaClass::III),
            4 => Ok(AsaClass::IV),
            5 => Ok(AsaClass::V),
            other => Err(AsaClassError(other)),
        }
    }
}

impl Serialize for AsaClass {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.grade())
    }
}

impl<'de> Deserialize<'de> for AsaClass {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let grade = u8::deserialize(deserializer)?;
        AsaClass::try_from(grade).map_err(serde::de::Error::custom)
    }
}

/// Charlson comorbidity flags, grouped by point weight.
///
/// The index is a pure additive sum; flag order never matters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comorbidities {
    // 1 point each.
    pub myocardial_infarction: bool,
    pub congestive_heart_failure: bool,
    pub peripheral_vascular_disease: bool,
    pub cerebrovascular_disease: bool,
    pub dementia: bool,
    pub chronic_pulmonary_disease: bool,
    pub connective_tissue_disease: bool,
    pub peptic_ulcer_disease: bool,
    pub mild_liver_disease: bool,
    pub diabetes_uncomplicated: bool,

    // 2 points each.
    pub diabetes_end_organ_damage: bool,
    pub hemiplegia: bool,
    pub moderate_severe_renal_disease: bool,
    pub solid_tumor_nonmetastatic: bool,
    pub leukemia: bool,
    pub lymphoma: bool,

    // 3 points.
    pub moderate_severe_liver_disease: bool,

    // 6 points each.
    pub metastatic_solid_tumor: bool,
    pub aids: bool,
}

impl Comorbidities {
    /// Weighted comorbidity points, before the age increment.
    pub fn weighted_points(&self) -> u32 {
        let one_point = [
            self.myocardial_infarction,
            self.congestive_heart_failure,
            self.peripheral_vascular_disease,
            self.cerebrovascular_disease,
            self.dementia,
            self.chronic_pulmonary_disease,
            self.connective_tissue_disease,
            self.peptic_ulcer_disease,
            self.mild_liver_disease,
            self.diabetes_uncomplicated,
        ];
        let two_points = [
            self.diabetes_end_organ_damage,
            self.hemiplegia,
            self.moderate_severe_renal_disease,
            self.solid_tumor_nonmetastatic,
            self.leukemia,
            self.lymphoma,
        ];
        let six_points = [self.metastatic_solid_tumor, self.aids];

        let mut points = 0;
        points += one_point.iter().filter(|&&f| f).count() as u32;
        points += 2 * two_points.iter().filter(|&&f| f).count() as u32;
        if self.moderate_severe_liver_disease {
            points += 3;
        }
        points += 6 * six_points.iter().filter(|&&f| f).count() as u32;
        points
    }
}

/// Flat cholecystitis assessment record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CholecystitisRecord {
    // Tokyo criterion A: local signs of inflammation.
    pub murphy_sign: bool,
    pub ruq_pain: bool,
    pub ruq_tenderness: bool,

    // Tokyo criterion B: systemic signs of inflammation.
    /// Body temperature, °C.
    pub temperature_c: Option<Measurement>,
    /// C-reactive protein, mg/dL.
    pub crp_mg_dl: Option<Measurement>,
    /// Leukocyte count, cells/µL.
    pub leukocytes_per_ul: Option<Measurement>,

    // Tokyo criterion C: imaging findings characteristic of cholecystitis.
    pub ultrasound_positive: bool,
    pub ct_positive: bool,
    pub mri_positive: bool,
    pub mrcp_positive: bool,

    // Organ-dysfunction inputs (Grade III).
    /// Systolic blood pressure, mmHg.
    pub systolic_bp_mmhg: Option<Measurement>,
    pub vasopressor_support: bool,
    pub altered_consciousness: bool,
    /// Glasgow coma score.
    pub glasgow_score: Option<Measurement>,
    /// PaO2/FiO2 ratio.
    pub pao2_fio2_ratio: Option<Measurement>,
    pub mechanical_ventilation: bool,
    /// Serum creatinine, mg/dL.
    pub creatinine_mg_dl: Option<Measurement>,
    /// Urine output over 24 h, mL.
    pub urine_output_ml_24h: Option<Measurement>,
    /// Total bilirubin, mg/dL.
    pub bilirubin_mg_dl: Option<Measurement>,
    /// Platelet count, cells/µL.
    pub platelets_per_ul: Option<Measurement>,

    // Grade II criteria (beyond the shared leukocyte count above).
    pub palpable_mass: bool,
    pub symptoms_over_72h: bool,
    pub severe_local_inflammation: bool,

    // Surgical-risk inputs.
    /// Patient age in years.
    pub age_years: Option<Measurement>,
    pub jaundice: bool,
    pub asa_class: Option<AsaClass>,
    pub comorbidities: Comorbidities,
}

impl CholecystitisRecord {
    /// Creates a zero-valued record.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_temperature_c(&mut self, value: f64) -> Result<(), InputError> {
        self.temperature_c = Some(Measurement::for_field("temperature_c", value)?);
        Ok(())
    }

    pub fn set_crp_mg_dl(&mut self, value: f64) -> Result<(), InputError> {
        self.crp_mg_dl = Some(Measurement::for_field("crp_mg_dl", value)?);
        Ok(())
    }

    pub fn set_leukocytes_per_ul(&mut self, value: f64) -> Result<(), InputError> {
        self.leukocytes_per_ul = Some(Measurement::for_field("leukocytes_per_ul", value)?);
        Ok(())
    }

    pub fn set_systolic_bp_mmhg(&mut self, value: f64) -> Result<(), InputError> {
        self.systolic_bp_mmhg = Some(Measurement::for_field("systolic_bp_mmhg", value)?);
        Ok(())
    }

    pub fn set_glasgow_score(&mut self, value: f64) -> Result<(), InputError> {
        self.glasgow_score = Some(Measurement::for_field("glasgow_score", value)?);
        Ok(())
    }

    pub fn set_pao2_fio2_ratio(&mut self, value: f64) -> Result<(), InputError> {
        self.pao2_fio2_ratio = Some(Measurement::for_field("pao2_fio2_ratio", value)?);
        Ok(())
    }

    pub fn set_creatinine_mg_dl(&mut self, value: f64) -> Result<(), InputError> {
        self.creatinine_mg_dl = Some(Measurement::for_field("creatinine_mg_dl", value)?);
        Ok(())
    }

    pub fn set_urine_output_ml_24h(&mut self, value: f64) -> Result<(), InputError> {
        self.urine_output_ml_24h = Some(Measurement::for_field("urine_output_ml_24h", value)?);
        Ok(())
    }

    pub fn set_bilirubin_mg_dl(&mut self, value: f64) -> Result<(), InputError> {
        self.bilirubin_mg_dl = Some(Measurement::for_field("bilirubin_mg_dl", value)?);
        Ok(())
    }

    pub fn set_platelets_per_ul(&mut self, value: f64) -> Result<(), InputError> {
        self.platelets_per_ul = Some(Measurement::for_field("platelets_per_ul", value)?);
        Ok(())
    }

    pub fn set_age_years(&mut self, value: f64) -> Result<(), InputError> {
        self.age_years = Some(Measurement::for_field("age_years", value)?);
        Ok(())
    }

    /// `true` when any diagnostic-criterion input has been supplied.
    pub fn any_diagnostic_input(&self) -> bool {
        self.murphy_sign
            || self.ruq_pain
            || self.ruq_tenderness
            || self.temperature_c.is_some()
            || self.crp_mg_dl.is_some()
            || self.leukocytes_per_ul.is_some()
            || self.any_imaging_positive()
    }

    /// `true` when any imaging modality is positive (Tokyo criterion C).
    pub fn any_imaging_positive(&self) -> bool {
        self.ultrasound_positive || self.ct_positive || self.mri_positive || self.mrcp_positive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_zero_valued() {
        let record = CholecystitisRecord::new();
        assert!(!record.murphy_sign);
        assert_eq!(record.temperature_c, None);
        assert_eq!(record.asa_class, None);
        assert_eq!(record.comorbidities.weighted_points(), 0);
        assert!(!record.any_diagnostic_input());
    }

    #[test]
    fn test_asa_class_wire_form_is_the_integer_grade() {
        let json = serde_json::to_string(&AsaClass::III).unwrap();
        assert_eq!(json, "3");
        let back: AsaClass = serde_json::from_str("3").unwrap();
        assert_eq!(back, AsaClass::III);
        assert!(serde_json::from_str::<AsaClass>("6").is_err());
    }

    #[test]
    fn test_asa_try_from_rejects_out_of_range_grades() {
        assert_eq!(AsaClass::try_from(5).unwrap(), AsaClass::V);
        assert!(matches!(AsaClass::try_from(0), Err(AsaClassError(0))));
        assert!(matches!(AsaClass::try_from(6), Err(AsaClassError(6))));
    }

    #[test]
    fn test_asa_ordering_supports_high_risk_criterion() {
        assert!(!AsaClass::II.is_three_or_higher());
        assert!(AsaClass::III.is_three_or_higher());
        assert!(AsaClass::V.is_three_or_higher());
    }

    #[test]
    fn test_rejected_setter_keeps_prior_value() {
        let mut record = CholecystitisRecord::new();
        record.set_creatinine_mg_dl(1.1).unwrap();
        let err = record
            .set_creatinine_mg_dl(f64::NAN)
            .expect_err("NaN must be rejected");
        assert_eq!(err.field, "creatinine_mg_dl");
        assert_eq!(record.creatinine_mg_dl.unwrap().value(), 1.1);
    }

    #[test]
    fn test_comorbidity_weights() {
        let comorbidities = Comorbidities {
            myocardial_infarction: true,          // 1
            diabetes_end_organ_damage: true,      // 2
            moderate_severe_liver_disease: true,  // 3
            aids: true,                           // 6
            ..Comorbidities::default()
        };
        assert_eq!(comorbidities.weighted_points(), 12);
    }

    #[test]
    fn test_record_roundtrips_through_json() {
        let mut record = CholecystitisRecord::new();
        record.murphy_sign = true;
        record.asa_class = Some(AsaClass::II);
        record.comorbidities.dementia = true;
        record.set_temperature_c(38.2).unwrap();

        let json = serde_json::to_string(&record).unwrap();
        let back: CholecystitisRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
