//! Shared validated primitives for the GuideFlow decision engine.
//!
//! Every clinical record in this workspace is a flat container of caller-supplied
//! inputs. The types in this crate make the two cross-cutting guarantees of the
//! engine structural rather than conventional:
//!
//! - [`Measurement`] is the only way a numeric input enters a record. Construction
//!   (and deserialisation) rejects NaN, infinite and negative values, so a record
//!   can never hold an out-of-domain measurement. A rejected assignment leaves the
//!   previous value untouched.
//! - [`Resolution`] is the only way a treatment resolver answers. A resolver that
//!   is missing upstream inputs returns [`Resolution::Pending`] naming the missing
//!   fields; it never guesses and never raises.
//!
//! Derived values ([`ScoreResult`], [`Recommendation`]) are recomputed from the
//! record on every access and are never written back into it.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Errors that can occur when creating a validated measurement.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum MeasurementError {
    /// The input was NaN or infinite.
    #[error("value must be a finite number")]
    NotFinite,
    /// The input was below zero.
    #[error("value must be non-negative, got {0}")]
    Negative(f64),
}

/// A clinical measurement that is guaranteed finite and non-negative.
///
/// Wraps an `f64` and enforces the input domain shared by every numeric field
/// in the engine (temperatures, cell counts, pressures, diameters, ages).
/// Field-specific clinical thresholds are applied by the calculators, not here.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Measurement(f64);

impl Measurement {
    /// Creates a new `Measurement` from a raw value.
    ///
    /// # Errors
    ///
    /// Returns [`MeasurementError::NotFinite`] for NaN or infinite input and
    /// [`MeasurementError::Negative`] for values below zero.
    pub fn new(value: f64) -> Result<Self, MeasurementError> {
        if !value.is_finite() {
            return Err(MeasurementError::NotFinite);
        }
        if value < 0.0 {
            return Err(MeasurementError::Negative(value));
        }
        Ok(Self(value))
    }

    /// Creates a measurement destined for a named record field.
    ///
    /// Record setters use this so the caller receives a validation error keyed
    /// by the field that rejected the input.
    pub fn for_field(field: &'static str, value: f64) -> Result<Self, InputError> {
        Self::new(value).map_err(|source| InputError { field, source })
    }

    /// Returns the inner value.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Measurement {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.0)
    }
}

impl<'de> Deserialize<'de> for Measurement {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = f64::deserialize(deserializer)?;
        Measurement::new(raw).map_err(serde::de::Error::custom)
    }
}

/// A rejected field assignment, keyed by the field name.
///
/// The record field retains its previous value whenever this error is returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid input for '{field}': {source}")]
pub struct InputError {
    /// The record field that rejected the input.
    pub field: &'static str,
    /// Why the value was rejected.
    #[source]
    pub source: MeasurementError,
}

/// A computed score together with its band and clinical interpretation.
///
/// Generic over the per-score band enum so each scoring system keeps its own
/// documented band set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreResult<B> {
    /// The calculated point total.
    pub value: u32,
    /// The band the total falls into.
    pub band: B,
    /// Human-readable reading of the band.
    pub interpretation: &'static str,
}

/// A treatment recommendation: an enumerated pathway code plus the reasoning
/// that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation<P> {
    /// Enumerated pathway code.
    pub pathway: P,
    /// One-line rationale for the chosen pathway.
    pub rationale: String,
    /// The branch criteria that were satisfied.
    pub criteria: Vec<String>,
    /// Failure criteria that should trigger escalation, where the branch
    /// defines them.
    pub escalate_when: Vec<&'static str>,
    /// Guideline safety notes attached to the pathway.
    pub advisories: Vec<&'static str>,
}

/// Outcome of a treatment resolver.
///
/// `Pending` is an expected state during a multi-step assessment, not an
/// error: it names the upstream values that must be supplied before a
/// recommendation can be produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Resolution<P> {
    /// Required upstream values are missing.
    Pending {
        /// Names of the record fields or derived values still required.
        missing: Vec<&'static str>,
    },
    /// A recommendation was produced.
    Ready(Recommendation<P>),
}

impl<P> Resolution<P> {
    /// Returns the recommendation, if one was produced.
    pub fn recommendation(&self) -> Option<&Recommendation<P>> {
        match self {
            Resolution::Ready(rec) => Some(rec),
            Resolution::Pending { .. } => None,
        }
    }

    /// Returns `true` when upstream values are still missing.
    pub fn is_pending(&self) -> bool {
        matches!(self, Resolution::Pending { .. })
    }
}
