use std::cell::RefCell;
use std::fmt::Write;

use serde::Serialize;

/// One applied update, recorded before the step is taken.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SolverTraceRecord {
    pub solver: &'static str,
    pub iter: usize,
    pub x: f64,
    pub f: Option<f64>,
    pub derivative: Option<f64>,
    pub step: Option<f64>,
    pub learning_rate: Option<f64>,
}

impl SolverTraceRecord {
    pub fn format_line(&self) -> String {
        let mut line = format!("[{}] iter {:>6} | x {:>+13.6e}", self.solver, self.iter, self.x);
        if let Some(v) = self.f {
            let _ = write!(line, " | f {:>13.6e}", v);
        }
        if let Some(v) = self.derivative {
            let _ = write!(line, " | df {:>+13.6e}", v);
        }
        if let Some(v) = self.step {
            let _ = write!(line, " | step {:>+13.6e}", v);
        }
        if let Some(v) = self.learning_rate {
            let _ = write!(line, " | lr {:>9.3e}", v);
        }
        line
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct TraceRow {
    iter: usize,
    x: f64,
    f: Option<f64>,
    derivative: Option<f64>,
    step: Option<f64>,
    learning_rate: Option<f64>,
}

impl TraceRow {
    pub(crate) fn iter(iter: usize, x: f64) -> Self {
        Self {
            iter,
            x,
            f: None,
            derivative: None,
            step: None,
            learning_rate: None,
        }
    }

    pub(crate) fn f(mut self, f: f64) -> Self {
        self.f = Some(f);
        self
    }

    pub(crate) fn derivative(mut self, derivative: f64) -> Self {
        self.derivative = Some(derivative);
        self
    }

    pub(crate) fn step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    pub(crate) fn learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = Some(learning_rate);
        self
    }
}

#[derive(Clone, Debug)]
pub(crate) struct SolverTracer {
    verbose: bool,
    solver: &'static str,
    history: Option<RefCell<Vec<SolverTraceRecord>>>,
}

impl SolverTracer {
    pub(crate) fn gd(verbose: bool) -> Self {
        Self {
            verbose,
            solver: "gd",
            history: None,
        }
    }

    pub(crate) fn gd_with_history(verbose: bool) -> Self {
        Self {
            verbose,
            solver: "gd",
            history: Some(RefCell::new(Vec::new())),
        }
    }

    /// Whether emitted rows go anywhere.
    pub(crate) fn is_active(&self) -> bool {
        self.verbose || self.history.is_some()
    }

    pub(crate) fn emit(&self, row: TraceRow) {
        let record = SolverTraceRecord {
            solver: self.solver,
            iter: row.iter,
            x: row.x,
            f: row.f,
            derivative: row.derivative,
            step: row.step,
            learning_rate: row.learning_rate,
        };

        if self.verbose {
            tracing::debug!(target: "gradmin::trace", "{}", record.format_line());
        }

        if let Some(history) = &self.history {
            history.borrow_mut().push(record);
        }
    }

    pub(crate) fn into_history(self) -> Vec<SolverTraceRecord> {
        self.history
            .map(|history| history.into_inner())
            .unwrap_or_default()
    }
}
