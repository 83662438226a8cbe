//! Acute appendicitis decision support (WSES Jerusalem guidelines, 2020).
//!
//! This crate derives everything downstream of a caller-owned
//! [`AppendicitisRecord`]: the four diagnostic scores (Alvarado, AIR, AAS,
//! PAS), the cross-score risk level, the imaging-necessity decision, the
//! treatment pathway, and the 8-step assessment flow with its conditional
//! complication-step skip.
//!
//! All derivation is pure and synchronous: every accessor recomputes from the
//! record, so results are always consistent with the latest mutation and
//! recomputing twice from the same record yields identical results.

pub mod assessment;
pub mod consistency;
pub mod flow;
pub mod imaging;
pub mod record;
pub mod report;
pub mod risk;
pub mod scores;
pub mod treatment;

pub use assessment::AppendicitisAssessment;
pub use imaging::ImagingRequirement;
pub use record::AppendicitisRecord;
pub use report::AppendicitisReport;
pub use risk::RiskLevel;
pub use treatment::AppendicitisPathway;
