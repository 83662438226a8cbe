//! Acute cholecystitis decision support (Tokyo guidelines, 2018).
//!
//! Derives everything downstream of a caller-owned [`CholecystitisRecord`]:
//! the Tokyo diagnostic criteria and diagnosis certainty, the severity grade
//! (organ dysfunction dominates), the surgical-risk profile (Charlson index,
//! ASA class, age), the treatment pathway, and the 5-step assessment flow.
//!
//! All derivation is pure and synchronous; accessors recompute from the
//! record on every call.

pub mod assessment;
pub mod comorbidity;
pub mod consistency;
pub mod diagnosis;
pub mod flow;
pub mod record;
pub mod report;
pub mod severity;
pub mod treatment;

pub use assessment::CholecystitisAssessment;
pub use comorbidity::{RiskTier, SurgicalRiskProfile};
pub use diagnosis::DiagnosisCertainty;
pub use record::CholecystitisRecord;
pub use report::CholecystitisReport;
pub use severity::SeverityGrade;
pub use treatment::CholecystitisPathway;
