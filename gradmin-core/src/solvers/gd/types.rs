use crate::rounding::DEFAULT_DECIMALS;
use crate::solvers::SolverTraceRecord;

/// Configuration for fixed-iteration gradient descent.
#[derive(Clone, Debug, PartialEq)]
pub struct GradientDescent {
    /// Learning rate / step size. Expected in (0, 1).
    pub learning_rate: f64,
    /// Number of updates applied. No early stopping.
    pub iterations: usize,
    /// Decimal places the final iterate is rounded to.
    pub decimals: usize,
    /// If true, emits per-iteration diagnostics as `tracing` debug events.
    pub verbose: bool,
    /// If true, stores per-iteration trace rows into the result.
    pub collect_trace: bool,
}

impl GradientDescent {
    pub fn new() -> Self {
        Self {
            learning_rate: 0.01,
            iterations: 10,
            decimals: DEFAULT_DECIMALS,
            verbose: false,
            collect_trace: false,
        }
    }

    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_trace(mut self, collect_trace: bool) -> Self {
        self.collect_trace = collect_trace;
        self
    }
}

impl Default for GradientDescent {
    fn default() -> Self {
        Self::new()
    }
}

/// Struct that holds the descent result.
#[derive(Clone, Debug, PartialEq)]
pub struct DescentResult {
    /// Final iterate rounded to the configured number of decimals.
    pub x: f64,
    /// Final iterate before rounding.
    pub x_raw: f64,
    /// Objective value at `x_raw`.
    pub f: f64,
    pub iters: usize,
    pub trace: Option<Vec<SolverTraceRecord>>,
}
