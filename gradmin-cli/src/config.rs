use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use gradmin::DEFAULT_DECIMALS;

use crate::cli::GradminCli;

/// Values readable from a `--config` TOML file. Every key is optional.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SolverConfig {
    pub iterations: Option<usize>,
    pub learning_rate: Option<f64>,
    pub init: Option<f64>,
    pub decimals: Option<usize>,
}

/// Fully resolved run parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSettings {
    pub iterations: usize,
    pub learning_rate: f64,
    pub init: f64,
    pub decimals: usize,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            iterations: 10,
            learning_rate: 0.01,
            init: 5.0,
            decimals: DEFAULT_DECIMALS,
        }
    }
}

pub fn load_config(path: &Path) -> Result<SolverConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Read config {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("Parse config {}", path.display()))
}

/// Command-line flags win over the config file, which wins over defaults.
pub fn resolve(args: &GradminCli, file: Option<SolverConfig>) -> RunSettings {
    let file = file.unwrap_or_default();
    let defaults = RunSettings::default();
    RunSettings {
        iterations: args.iterations.or(file.iterations).unwrap_or(defaults.iterations),
        learning_rate: args
            .learning_rate
            .or(file.learning_rate)
            .unwrap_or(defaults.learning_rate),
        init: args.init.or(file.init).unwrap_or(defaults.init),
        decimals: args.decimals.or(file.decimals).unwrap_or(defaults.decimals),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn flags_override_file_values() {
        let args = GradminCli::parse_from(["gradmin", "--iterations", "3"]);
        let file = SolverConfig {
            iterations: Some(50),
            learning_rate: Some(0.2),
            ..SolverConfig::default()
        };
        let settings = resolve(&args, Some(file));
        assert_eq!(settings.iterations, 3);
        assert_eq!(settings.learning_rate, 0.2);
        assert_eq!(settings.init, 5.0);
        assert_eq!(settings.decimals, 5);
    }

    #[test]
    fn no_flags_no_file_gives_sample_arguments() {
        let args = GradminCli::parse_from(["gradmin"]);
        assert_eq!(resolve(&args, None), RunSettings::default());
    }

    #[test]
    fn negative_init_flag_parses() {
        let args = GradminCli::parse_from(["gradmin", "--init", "-2.5"]);
        assert_eq!(args.init, Some(-2.5));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let parsed: std::result::Result<SolverConfig, _> = toml::from_str("step = 0.1\n");
        assert!(parsed.is_err());

        let parsed: SolverConfig = toml::from_str("learning_rate = 0.1\ninit = -4.0\n").unwrap();
        assert_eq!(parsed.learning_rate, Some(0.1));
        assert_eq!(parsed.init, Some(-4.0));
        assert_eq!(parsed.iterations, None);
    }
}
