//! Batch evaluator for the GuideFlow decision engine.
//!
//! Reads a full assessment record (JSON or YAML, from a file or stdin),
//! derives every result, and prints the report. The engine itself is a pure
//! function of the record; the assessment id and timestamp are stamped here,
//! at the process boundary.

use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::Read;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use guideflow_appendicitis::{
    consistency as appendicitis_consistency, AppendicitisAssessment, AppendicitisRecord,
    AppendicitisReport,
};
use guideflow_cholecystitis::{
    consistency as cholecystitis_consistency, CholecystitisAssessment, CholecystitisRecord,
    CholecystitisReport,
};
use guideflow_types::{Recommendation, Resolution};

#[derive(Parser)]
#[command(name = "guideflow")]
#[command(about = "Clinical guideline decision support")]
struct Cli {
    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate an acute appendicitis assessment record
    Appendicitis {
        /// Record file (JSON or YAML); '-' reads stdin
        input: String,
    },
    /// Evaluate an acute cholecystitis assessment record
    Cholecystitis {
        /// Record file (JSON or YAML); '-' reads stdin
        input: String,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Yaml,
    Text,
}

/// Report wrapper carrying the session identity stamped at this boundary.
#[derive(Serialize)]
struct Envelope<R: Serialize> {
    assessment_id: Uuid,
    generated_at: DateTime<Utc>,
    #[serde(flatten)]
    report: R,
}

impl<R: Serialize> Envelope<R> {
    fn new(report: R) -> Self {
        Self {
            assessment_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            report,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("guideflow=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Appendicitis { input } => {
            let record: AppendicitisRecord = parse_record(&read_input(&input)?)?;
            tracing::info!("evaluating appendicitis record");
            appendicitis_consistency::audit(&record)?;
            let report = AppendicitisAssessment::from_record(record).evaluate();
            match cli.format {
                Format::Text => print_appendicitis_text(&report),
                format => print_structured(&Envelope::new(report), format)?,
            }
        }
        Commands::Cholecystitis { input } => {
            let record: CholecystitisRecord = parse_record(&read_input(&input)?)?;
            tracing::info!("evaluating cholecystitis record");
            cholecystitis_consistency::audit(&record)?;
            let report = CholecystitisAssessment::from_record(record).evaluate();
            match cli.format {
                Format::Text => print_cholecystitis_text(&report),
                format => print_structured(&Envelope::new(report), format)?,
            }
        }
    }

    Ok(())
}

fn read_input(path: &str) -> anyhow::Result<String> {
    if path == "-" {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .context("failed to read record from stdin")?;
        Ok(raw)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read record from {path}"))
    }
}

/// Parses a record from JSON or YAML, reporting errors keyed by field path.
fn parse_record<T: DeserializeOwned>(raw: &str) -> anyhow::Result<T> {
    if raw.trim_start().starts_with('{') {
        let deserializer = &mut serde_json::Deserializer::from_str(raw);
        serde_path_to_error::deserialize(deserializer)
            .map_err(|e| anyhow::anyhow!("invalid record field '{}': {}", e.path(), e.inner()))
    } else {
        let deserializer = serde_yaml::Deserializer::from_str(raw);
        serde_path_to_error::deserialize(deserializer)
            .map_err(|e| anyhow::anyhow!("invalid record field '{}': {}", e.path(), e.inner()))
    }
}

fn print_structured<R: Serialize>(envelope: &Envelope<R>, format: Format) -> anyhow::Result<()> {
    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(envelope)?),
        Format::Yaml => print!("{}", serde_yaml::to_string(envelope)?),
        Format::Text => unreachable!("text output is rendered separately"),
    }
    Ok(())
}

fn print_treatment<P: Copy>(resolution: &Resolution<P>, name: impl Fn(P) -> &'static str) {
    match resolution {
        Resolution::Pending { missing } => {
            println!("Treatment: insufficient data (missing: {})", missing.join(", "));
        }
        Resolution::Ready(Recommendation {
            pathway,
            rationale,
            criteria,
            escalate_when,
            advisories,
        }) => {
            println!("Treatment: {}", name(*pathway));
            println!("  Rationale: {rationale}");
            for criterion in criteria {
                println!("  Criterion: {criterion}");
            }
            for escalation in escalate_when {
                println!("  Escalate when: {escalation}");
            }
            for advisory in advisories {
                println!("  Advisory: {advisory}");
            }
        }
    }
}

fn print_appendicitis_text(report: &AppendicitisReport) {
    println!(
        "Alvarado: {}/10 [{}] {}",
        report.alvarado.value,
        report.alvarado.band.as_str(),
        report.alvarado.interpretation
    );
    println!(
        "AIR: {}/12 [{}] {}",
        report.air.value,
        report.air.band.as_str(),
        report.air.interpretation
    );
    println!(
        "AAS: {} [{}] {}",
        report.aas.value,
        report.aas.band.as_str(),
        report.aas.interpretation
    );
    println!(
        "PAS: {}/10 [{}] {}",
        report.pas.value,
        report.pas.band.as_str(),
        report.pas.interpretation
    );
    match report.risk_level {
        Some(level) => println!("Risk level: {}", level.as_str()),
        None => println!("Risk level: not yet determined"),
    }
    println!("Imaging: {}", report.imaging.as_str());
    print_treatment(&report.treatment, |p| p.as_str());
    println!(
        "Step {} of {}",
        report.wizard.current_step, report.wizard.total_steps
    );
}

fn print_cholecystitis_text(report: &CholecystitisReport) {
    println!(
        "Tokyo criteria: A={} B={} C={}",
        report.tokyo_criteria.local_signs,
        report.tokyo_criteria.systemic_inflammation,
        report.tokyo_criteria.imaging_findings
    );
    println!("Diagnosis: {}", report.diagnosis.as_str());
    println!("Severity: {}", report.severity.as_str());
    if let Some(dysfunction) = report.organ_dysfunction {
        println!("Organ dysfunction: {dysfunction:?}");
    }
    println!("Charlson index: {}", report.charlson_index);
    match report.surgical_risk {
        Some(profile) => println!(
            "Surgical risk: {} (CCI {}, ASA {})",
            profile.tier.as_str(),
            profile.cci,
            profile.asa.grade()
        ),
        None => println!("Surgical risk: not yet determined"),
    }
    print_treatment(&report.treatment, |p| p.as_str());
    println!(
        "Step {} of {}",
        report.wizard.current_step, report.wizard.total_steps
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record_accepts_json_and_yaml() {
        let json: AppendicitisRecord =
            parse_record(r#"{"alvarado_fever": true}"#).expect("JSON record");
        assert!(json.alvarado_fever);

        let yaml: AppendicitisRecord = parse_record("alvarado_fever: true\n").expect("YAML record");
        assert!(yaml.alvarado_fever);
    }

    #[test]
    fn test_parse_record_reports_the_offending_field() {
        let err = parse_record::<AppendicitisRecord>(r#"{"air_temperature_c": -5.0}"#)
            .expect_err("negative measurement must be rejected");
        assert!(err.to_string().contains("air_temperature_c"));
    }
}
