//! CLI argument definitions and handler

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use service_cost_core_rs::{CostBreakdown, CostFactor, Model, ModelRegistry, Quote, RegistryConfig};
use std::path::PathBuf;
use tracing::{debug, info};

/// Parse a `name:grade` override
///
/// Splits on the first colon. Both sides must be non-empty; the grade is
/// only checked against the grade table when the cost is computed.
pub(crate) fn parse_override(s: &str) -> Result<CostFactor, String> {
    let (name, grade) = s
        .split_once(':')
        .ok_or_else(|| format!("'{}' is not of the form name:grade", s))?;
    if name.is_empty() {
        return Err(format!("'{}' has an empty cost factor name", s));
    }
    if grade.is_empty() {
        return Err(format!("'{}' has an empty grade", s));
    }
    Ok(CostFactor::new(name, grade))
}

/// Service Cost - price a service action from time, money and a model
#[derive(Parser, Debug)]
#[command(name = "service-cost")]
#[command(
    version,
    after_help = "\
Examples:
  service-cost 60 0 model1234                    Price one hour on model1234
  service-cost 30 120 model1234 Risk:low         Override the Risk grade
  service-cost 45 0 night --models models.json   Use a custom model catalogue
  service-cost 60 0 model1234 --json             Print the full breakdown

Grades: none (1.0), low (1.1), medium (1.3), high (2.0)"
)]
pub struct Cli {
    /// Elapsed time in minutes
    pub time: f32,

    /// Direct monetary cost (negative for credits)
    #[arg(allow_negative_numbers = true)]
    pub money: f32,

    /// Model to price against
    pub model_id: String,

    /// Cost factor overrides as name:grade (e.g. Risk:medium)
    #[arg(value_parser = parse_override)]
    pub overrides: Vec<CostFactor>,

    /// JSON model catalogue (default: built-in model1234)
    #[arg(long, env = "SERVICE_COST_MODELS")]
    pub models: Option<PathBuf>,

    /// Print the cost breakdown as JSON instead of the bare total
    #[arg(long)]
    pub json: bool,

    /// Log level when RUST_LOG is unset (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,
}

/// Build the registry the quote is evaluated against
fn load_registry(models: Option<&PathBuf>) -> Result<ModelRegistry> {
    let config = match models {
        Some(path) => RegistryConfig::load(path)
            .with_context(|| format!("Failed to load models from {}", path.display()))?,
        None => RegistryConfig::default(),
    };
    let registry = ModelRegistry::from_config(&config);
    debug!(models = ?registry.ids(), "model registry ready");
    Ok(registry)
}

/// Report printed by `--json`: the model as priced plus the breakdown
#[derive(Serialize)]
struct QuoteReport<'a> {
    model: &'a Model,
    breakdown: CostBreakdown,
}

/// Evaluate the quote described by `cli` and render the output text
pub(crate) fn render_quote(cli: Cli) -> Result<String> {
    let mut registry = load_registry(cli.models.as_ref())?;

    let quote = Quote {
        time_minutes: cli.time,
        direct_money: cli.money,
        model_id: cli.model_id,
        overrides: cli.overrides,
    };
    let breakdown = quote
        .evaluate(&mut registry)
        .with_context(|| format!("Failed to price model '{}'", quote.model_id))?;
    info!(total = breakdown.total, "cost computed");

    if cli.json {
        let report = QuoteReport {
            model: registry.lookup(&quote.model_id)?,
            breakdown,
        };
        Ok(serde_json::to_string_pretty(&report)?)
    } else {
        Ok(breakdown.total.to_string())
    }
}

pub fn run(cli: Cli) -> Result<()> {
    println!("{}", render_quote(cli)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_override() {
        let factor = parse_override("Risk:medium").unwrap();
        assert_eq!(factor, CostFactor::new("Risk", "medium"));
    }

    #[test]
    fn test_parse_override_splits_on_first_colon() {
        let factor = parse_override("Risk:high:extra").unwrap();
        assert_eq!(factor.name, "Risk");
        assert_eq!(factor.grade, "high:extra");
    }

    #[test]
    fn test_parse_override_rejects_malformed() {
        assert!(parse_override("Risk").is_err());
        assert!(parse_override(":high").is_err());
        assert!(parse_override("Risk:").is_err());
    }

    #[test]
    fn test_cli_positional_arguments() {
        let cli = Cli::try_parse_from([
            "service-cost",
            "60",
            "-100",
            "model1234",
            "Risk:low",
            "Travel:none",
        ])
        .unwrap();

        assert_eq!(cli.time, 60.0);
        assert_eq!(cli.money, -100.0);
        assert_eq!(cli.model_id, "model1234");
        assert_eq!(
            cli.overrides,
            vec![CostFactor::new("Risk", "low"), CostFactor::new("Travel", "none")]
        );
        assert!(!cli.json);
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn test_cli_rejects_bad_override() {
        assert!(Cli::try_parse_from(["service-cost", "60", "0", "model1234", "Risk"]).is_err());
    }

    #[test]
    fn test_default_registry_has_model1234() {
        let registry = load_registry(None).unwrap();
        assert!(registry.contains("model1234"));
    }

    #[test]
    fn test_quote_unknown_model_fails() {
        let cli = Cli::try_parse_from(["service-cost", "60", "0", "model9999"]).unwrap();
        let err = render_quote(cli).unwrap_err();
        assert!(format!("{:#}", err).contains("Model not found: model9999"));
    }

    #[test]
    fn test_quote_prints_total_for_builtin_model() {
        // (60/60 × 500) × 2.0 × 1.3
        let cli = Cli::try_parse_from(["service-cost", "60", "0", "model1234"]).unwrap();
        assert_eq!(render_quote(cli).unwrap(), "1300");
    }

    #[test]
    fn test_quote_applies_overrides() {
        // (60/60 × 500) × 1.1 × 1.3
        let cli =
            Cli::try_parse_from(["service-cost", "60", "0", "model1234", "Risk:low"]).unwrap();
        assert_eq!(render_quote(cli).unwrap(), "715");
    }

    #[test]
    fn test_quote_with_models_file_and_json_output() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"models":[{{"id":"night","time_rate":600,"cost_factors":[{{"name":"Risk","grade":"none"}}]}}]}}"#
        )
        .unwrap();
        let path = file.path().to_str().unwrap();

        let cli = Cli::try_parse_from([
            "service-cost",
            "30",
            "-50",
            "night",
            "--models",
            path,
            "--json",
        ])
        .unwrap();
        let output: serde_json::Value = serde_json::from_str(&render_quote(cli).unwrap()).unwrap();

        // (30/60 × 600 - 50) × 1.0 × 2.0
        assert_eq!(output["breakdown"]["total"], 500);
        assert_eq!(output["breakdown"]["unadjusted"], 250.0);
        assert_eq!(output["model"]["id"], "night");
        assert_eq!(output["model"]["time_rate"], 600.0);
        assert_eq!(output["model"]["cost_factors"][0]["grade"], "none");
        assert_eq!(output["model"]["cost_factors"][1]["name"], "Inconvenience");
    }

    #[test]
    fn test_quote_missing_models_file_fails() {
        let cli = Cli::try_parse_from([
            "service-cost",
            "60",
            "0",
            "model1234",
            "--models",
            "/nonexistent/models.json",
        ])
        .unwrap();
        let err = render_quote(cli).unwrap_err();
        assert!(err.to_string().contains("Failed to load models"));
    }
}
