//! Imaging-necessity resolver.
//!
//! Imaging is mandatory whenever any score sits in its imaging band
//! (Alvarado "possible", AIR/AAS intermediate, PAS intermediate). In
//! high-probability-only presentations, pediatric patients always need
//! imaging; adults need it only when a special-population flag is set.
//! Low-probability presentations may omit imaging.

use crate::record::{AppendicitisRecord, Population};
use crate::scores::{aas, air, alvarado, pas, AasBand, AirBand, AlvaradoBand, PasBand};
use serde::Serialize;

/// Whether imaging must be obtained before the assessment can proceed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImagingRequirement {
    /// No score has been engaged yet.
    Undetermined,
    /// Imaging is required.
    Mandatory,
    /// Imaging may be omitted.
    MayOmit,
}

impl ImagingRequirement {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImagingRequirement::Undetermined => "UNDETERMINED",
            ImagingRequirement::Mandatory => "MANDATORY",
            ImagingRequirement::MayOmit => "MAY_OMIT",
        }
    }
}

/// Resolves the imaging requirement from the current record.
///
/// Recomputed on every access, so score or flag changes are always reflected.
pub fn imaging_requirement(record: &AppendicitisRecord) -> ImagingRequirement {
    let alvarado = alvarado(record);
    let air = air(record);
    let aas = aas(record);
    let pas = pas(record);

    let engaged = alvarado.value > 0 || air.value > 0 || aas.value > 0 || pas.value > 0;
    if !engaged {
        return ImagingRequirement::Undetermined;
    }

    // Band membership above the lowest band implies the score is engaged.
    let any_imaging_band = alvarado.band == AlvaradoBand::Possible
        || air.band == AirBand::Intermediate
        || aas.band == AasBand::Intermediate
        || pas.band == PasBand::Intermediate;
    if any_imaging_band {
        return ImagingRequirement::Mandatory;
    }

    let any_high = matches!(
        alvarado.band,
        AlvaradoBand::Probable | AlvaradoBand::VeryProbable
    ) || air.band == AirBand::High
        || aas.band == AasBand::High
        || pas.band == PasBand::High;
    if any_high {
        let pediatric =
            record.population == Some(Population::Pediatric) || record.pediatric_patient;
        if pediatric || record.any_special_population_flag() {
            return ImagingRequirement::Mandatory;
        }
        return ImagingRequirement::MayOmit;
    }

    ImagingRequirement::MayOmit
}
