//! Aggregate evaluation report.

use crate::imaging::ImagingRequirement;
use crate::risk::RiskLevel;
use crate::scores::{AasBand, AirBand, AlvaradoBand, PasBand};
use crate::treatment::AppendicitisPathway;
use guideflow_types::{Resolution, ScoreResult};
use guideflow_wizard::WizardState;
use serde::Serialize;

/// Every derived result of an appendicitis assessment, in one flat structure.
///
/// This is the natural response shape for any caller: scores, overall risk,
/// imaging decision, treatment resolution and the wizard position. Values that
/// cannot be determined yet appear as `null`/pending rather than defaults.
#[derive(Debug, Clone, Serialize)]
pub struct AppendicitisReport {
    pub alvarado: ScoreResult<AlvaradoBand>,
    pub air: ScoreResult<AirBand>,
    pub aas: ScoreResult<AasBand>,
    pub pas: ScoreResult<PasBand>,
    pub risk_level: Option<RiskLevel>,
    pub imaging: ImagingRequirement,
    pub treatment: Resolution<AppendicitisPathway>,
    pub wizard: WizardState,
}
