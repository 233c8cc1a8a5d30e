use tracing::trace;

use crate::error::{DescentError, Result};
use crate::problems::{Objective, Square};
use crate::rounding::round_to;
use crate::solvers::common::trace::{SolverTracer, TraceRow};

use super::types::{DescentResult, GradientDescent};

impl GradientDescent {
    fn make_tracer(&self) -> SolverTracer {
        if self.collect_trace {
            SolverTracer::gd_with_history(self.verbose)
        } else {
            SolverTracer::gd(self.verbose)
        }
    }

    fn attach_trace(&self, mut result: DescentResult, trace: SolverTracer) -> DescentResult {
        result.trace = if self.collect_trace {
            Some(trace.into_history())
        } else {
            None
        };
        result
    }

    fn run<O>(&self, obj: &O, mut x: f64, trace: &SolverTracer) -> DescentResult
    where
        O: Objective + ?Sized,
    {
        for k in 0..self.iterations {
            let derivative = obj.derivative(x);
            let step = self.learning_rate * derivative;

            if trace.is_active() {
                trace.emit(
                    TraceRow::iter(k, x)
                        .f(obj.value(x))
                        .derivative(derivative)
                        .step(step)
                        .learning_rate(self.learning_rate),
                );
            }

            // x <- x - lr * f'(x)
            x -= step;
        }

        DescentResult {
            x: round_to(x, self.decimals),
            x_raw: x,
            f: obj.value(x),
            iters: self.iterations,
            trace: None,
        }
    }

    /// Check the documented input contract.
    ///
    /// The solve methods never call this; out-of-range inputs are simply
    /// iterated.
    pub fn validate(&self, init: f64) -> Result<()> {
        let lr = self.learning_rate;
        if !(lr > 0.0 && lr < 1.0) {
            return Err(DescentError::LearningRate(lr));
        }
        if init == 0.0 || !init.is_finite() {
            return Err(DescentError::InitialGuess(init));
        }
        Ok(())
    }

    /// Run the configured number of updates on `obj` starting at `init`.
    pub fn minimize<O>(&self, obj: &O, init: f64) -> DescentResult
    where
        O: Objective + ?Sized,
    {
        trace!(
            iterations = self.iterations,
            learning_rate = self.learning_rate,
            init,
            "starting gradient descent"
        );
        let tracer = self.make_tracer();
        let result = self.run(obj, init, &tracer);
        trace!(x = result.x, x_raw = result.x_raw, "gradient descent finished");
        self.attach_trace(result, tracer)
    }

    /// Minimize f(x) = x^2.
    pub fn minimize_square(&self, init: f64) -> DescentResult {
        self.minimize(&Square, init)
    }

    /// Validate inputs, then minimize f(x) = x^2.
    pub fn try_minimize_square(&self, init: f64) -> Result<DescentResult> {
        self.validate(init)?;
        Ok(self.minimize_square(init))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_iterations_leave_init_untouched() {
        let result = GradientDescent::new()
            .with_iterations(0)
            .minimize_square(3.141_592_65);
        assert_eq!(result.x_raw, 3.141_592_65);
        assert_eq!(result.x, 3.14159);
        assert_eq!(result.iters, 0);
    }

    #[test]
    fn single_step_scales_by_one_minus_two_lr() {
        let result = GradientDescent::new()
            .with_iterations(1)
            .with_learning_rate(0.25)
            .minimize_square(8.0);
        assert_eq!(result.x_raw, 4.0);
        assert_eq!(result.f, 16.0);
    }

    #[test]
    fn trace_is_only_attached_on_request() {
        let solver = GradientDescent::new().with_iterations(4);
        assert!(solver.minimize_square(1.0).trace.is_none());

        let traced = solver.with_trace(true).minimize_square(1.0);
        let rows = traced.trace.expect("trace requested");
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].x, 1.0);
        assert_eq!(rows[0].derivative, Some(2.0));
        assert_eq!(rows.iter().map(|r| r.iter).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn validate_rejects_out_of_contract_inputs() {
        let solver = GradientDescent::new();
        assert_eq!(solver.validate(5.0), Ok(()));
        assert_eq!(solver.validate(0.0), Err(DescentError::InitialGuess(0.0)));
        assert!(matches!(
            solver.validate(f64::NAN),
            Err(DescentError::InitialGuess(_))
        ));

        for lr in [0.0, 1.0, -0.1, 1.5, f64::NAN] {
            let err = solver.clone().with_learning_rate(lr).validate(5.0);
            assert!(matches!(err, Err(DescentError::LearningRate(_))), "lr = {lr}");
        }
    }

    #[test]
    fn unchecked_minimize_iterates_out_of_range_rates() {
        // lr = 1 flips the sign every step without shrinking.
        let result = GradientDescent::new()
            .with_learning_rate(1.0)
            .with_iterations(3)
            .minimize_square(2.0);
        assert_eq!(result.x_raw, -2.0);
    }
}
