//! gradmin: gradient descent on f(x) = x^2
//!
//! - `Objective`: scalar value/derivative interface, implemented by `Square`
//! - `GradientDescent`: fixed-iteration solver with optional trace
//! - `get_minimizer`: the one-call entry point, rounded to 5 decimals
//!
//! ```
//! assert_eq!(gradmin::get_minimizer(10, 0.01, 5.0), 4.08536);
//! ```

pub mod error;
pub mod problems;
pub mod rounding;
pub mod solvers;

pub use error::DescentError;
pub use problems::{Objective, Square};
pub use rounding::{round_to, DEFAULT_DECIMALS};
pub use solvers::gd::{DescentResult, GradientDescent};
pub use solvers::SolverTraceRecord;

/// Apply `x <- x - learning_rate * 2x` `iterations` times from `init` and
/// round the result to 5 decimal places.
///
/// Expects `0 < learning_rate < 1` and `init != 0` but does not check
/// either; see [`try_get_minimizer`].
pub fn get_minimizer(iterations: usize, learning_rate: f64, init: f64) -> f64 {
    GradientDescent::new()
        .with_iterations(iterations)
        .with_learning_rate(learning_rate)
        .minimize_square(init)
        .x
}

/// Like [`get_minimizer`], but rejects a learning rate outside (0, 1) and a
/// zero or non-finite initial guess.
pub fn try_get_minimizer(
    iterations: usize,
    learning_rate: f64,
    init: f64,
) -> error::Result<f64> {
    GradientDescent::new()
        .with_iterations(iterations)
        .with_learning_rate(learning_rate)
        .try_minimize_square(init)
        .map(|result| result.x)
}
