use clap::Parser;
use std::path::PathBuf;

/// Gradient descent on f(x) = x^2.
#[derive(Parser, Debug)]
#[command(name = "gradmin", version, about)]
pub struct GradminCli {
    /// Number of updates to apply
    #[arg(short = 'n', long)]
    pub iterations: Option<usize>,

    /// Step size, expected in (0, 1)
    #[arg(short = 'r', long = "learning-rate")]
    pub learning_rate: Option<f64>,

    /// Initial guess, expected nonzero
    #[arg(short = 'x', long, allow_hyphen_values = true)]
    pub init: Option<f64>,

    /// Decimal places of the reported result
    #[arg(long)]
    pub decimals: Option<usize>,

    /// TOML file with default values for the options above
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Reject inputs outside the documented ranges
    #[arg(long)]
    pub check: bool,

    /// Print one row per update before the result
    #[arg(long)]
    pub trace: bool,

    /// Print the result (and trace, if requested) as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
