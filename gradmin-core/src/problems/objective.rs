/// Scalar objective function to be minimized.
///
/// Solvers only need the value and the first derivative at a point.
pub trait Objective {
    /// Function value f(x) at x.
    fn value(&self, x: f64) -> f64;

    /// First derivative f'(x) at x.
    fn derivative(&self, x: f64) -> f64;
}
