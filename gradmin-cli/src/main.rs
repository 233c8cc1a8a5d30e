mod cli;
mod config;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use gradmin::{GradientDescent, SolverTraceRecord};

use crate::cli::GradminCli;
use crate::config::{load_config, resolve};

#[derive(Serialize)]
struct Report<'a> {
    iterations: usize,
    learning_rate: f64,
    init: f64,
    minimizer: f64,
    unrounded: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace: Option<&'a [SolverTraceRecord]>,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("GRADMIN_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Whole numbers keep a trailing `.0` so output always reads as a float.
fn display_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

fn main() -> Result<()> {
    let args = GradminCli::parse();
    init_logging(args.verbose);

    let file = args.config.as_deref().map(load_config).transpose()?;
    let settings = resolve(&args, file);
    debug!(?settings, "resolved settings");

    let solver = GradientDescent::new()
        .with_iterations(settings.iterations)
        .with_learning_rate(settings.learning_rate)
        .with_decimals(settings.decimals)
        .with_verbose(args.verbose)
        .with_trace(args.trace);

    let result = if args.check {
        solver.try_minimize_square(settings.init)?
    } else {
        if let Err(err) = solver.validate(settings.init) {
            warn!("{err}; iterating anyway");
        }
        solver.minimize_square(settings.init)
    };

    if args.json {
        let report = Report {
            iterations: settings.iterations,
            learning_rate: settings.learning_rate,
            init: settings.init,
            minimizer: result.x,
            unrounded: result.x_raw,
            trace: result.trace.as_deref(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if let Some(rows) = &result.trace {
        for row in rows {
            println!("{}", row.format_line());
        }
    }
    println!("{}", display_float(result.x));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_numbers_keep_a_decimal_point() {
        assert_eq!(display_float(0.0), "0.0");
        assert_eq!(display_float(-3.0), "-3.0");
        assert_eq!(display_float(4.08536), "4.08536");
        assert_eq!(display_float(f64::INFINITY), "inf");
    }
}
