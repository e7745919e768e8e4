use analysis_core::{Locale, MetricEvaluator};
use anyhow::{bail, Context, Result};
use fundamental_analysis::{InterpolatedEvaluator, TieredEvaluator};
use serde::Serialize;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Which metric evaluator drives the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EvaluatorKind {
    Interpolated,
    Tiered,
}

impl EvaluatorKind {
    pub fn evaluator(&self) -> Box<dyn MetricEvaluator> {
        match self {
            EvaluatorKind::Interpolated => Box::new(InterpolatedEvaluator::new()),
            EvaluatorKind::Tiered => Box::new(TieredEvaluator::new()),
        }
    }
}

impl FromStr for EvaluatorKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "interpolated" | "card" => Ok(EvaluatorKind::Interpolated),
            "tiered" | "grid" => Ok(EvaluatorKind::Tiered),
            other => bail!("unknown evaluator '{other}' (expected interpolated or tiered)"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CliConfig {
    pub snapshot_path: PathBuf,
    pub locale: Locale,
    pub evaluator: EvaluatorKind,
    pub json: bool,
}

impl CliConfig {
    /// Environment defaults (`DASHBOARD_LOCALE`, `DASHBOARD_EVALUATOR`), overridden by flags.
    pub fn from_env_and_args(args: &[String]) -> Result<Self> {
        let locale: Locale = env::var("DASHBOARD_LOCALE")
            .unwrap_or_else(|_| "ko".to_string())
            .parse()
            .context("DASHBOARD_LOCALE")?;
        let evaluator: EvaluatorKind = env::var("DASHBOARD_EVALUATOR")
            .unwrap_or_else(|_| "interpolated".to_string())
            .parse()
            .context("DASHBOARD_EVALUATOR")?;
        Self::from_args(args, locale, evaluator)
    }

    pub fn from_args(args: &[String], locale: Locale, evaluator: EvaluatorKind) -> Result<Self> {
        let mut config = Self {
            snapshot_path: PathBuf::new(),
            locale,
            evaluator,
            json: false,
        };
        let mut path = None;

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--json" => config.json = true,
                "--tiered" => config.evaluator = EvaluatorKind::Tiered,
                "--locale" => {
                    let value = iter.next().context("--locale requires a value")?;
                    config.locale = value.parse()?;
                }
                flag if flag.starts_with("--") => bail!("unknown flag {flag}"),
                positional => {
                    if path.replace(PathBuf::from(positional)).is_some() {
                        bail!("only one snapshot path may be given");
                    }
                }
            }
        }

        config.snapshot_path = path.context("usage: dashboard-cli <snapshot.json> [--locale ko|en] [--tiered] [--json]")?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults_pass_through() {
        let config = CliConfig::from_args(&args(&["snap.json"]), Locale::Ko, EvaluatorKind::Interpolated).unwrap();
        assert_eq!(config.snapshot_path, PathBuf::from("snap.json"));
        assert_eq!(config.locale, Locale::Ko);
        assert_eq!(config.evaluator, EvaluatorKind::Interpolated);
        assert!(!config.json);
    }

    #[test]
    fn test_flags_override() {
        let config = CliConfig::from_args(
            &args(&["--locale", "en", "--tiered", "snap.json", "--json"]),
            Locale::Ko,
            EvaluatorKind::Interpolated,
        )
        .unwrap();
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.evaluator, EvaluatorKind::Tiered);
        assert!(config.json);
    }

    #[test]
    fn test_bad_args() {
        let defaults = (Locale::Ko, EvaluatorKind::Interpolated);
        assert!(CliConfig::from_args(&args(&[]), defaults.0, defaults.1).is_err());
        assert!(CliConfig::from_args(&args(&["a.json", "b.json"]), defaults.0, defaults.1).is_err());
        assert!(CliConfig::from_args(&args(&["a.json", "--verbose"]), defaults.0, defaults.1).is_err());
        assert!(CliConfig::from_args(&args(&["a.json", "--locale"]), defaults.0, defaults.1).is_err());
        assert!(CliConfig::from_args(&args(&["a.json", "--locale", "fr"]), defaults.0, defaults.1).is_err());
    }

    #[test]
    fn test_evaluator_kind_from_str() {
        assert_eq!("Tiered".parse::<EvaluatorKind>().unwrap(), EvaluatorKind::Tiered);
        assert_eq!("card".parse::<EvaluatorKind>().unwrap(), EvaluatorKind::Interpolated);
        assert!("fancy".parse::<EvaluatorKind>().is_err());
        assert_eq!(EvaluatorKind::Tiered.evaluator().name(), "tiered");
    }
}
