//! Diagnostic score calculators.
//!
//! Each calculator is a pure function `&AppendicitisRecord → ScoreResult`;
//! none reads another's output, so they may be computed in any order. Weights
//! follow the published scoring systems (Alvarado/MANTRELS, the Appendicitis
//! Inflammatory Response score, the Adult Appendicitis Score and the Pediatric
//! Appendicitis Score); each module documents its band partition.

mod aas;
mod air;
mod alvarado;
mod pas;

pub use aas::{aas, AasBand, AAS_MAX};
pub use air::{air, AirBand, AIR_MAX};
pub use alvarado::{alvarado, AlvaradoBand, ALVARADO_MAX};
pub use pas::{pas, PasBand, PAS_MAX};
