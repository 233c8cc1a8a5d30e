use super::objective::Objective;

/// f(x) = x^2, minimized at x* = 0.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Square;

impl Objective for Square {
    fn value(&self, x: f64) -> f64 {
        x * x
    }

    fn derivative(&self, x: f64) -> f64 {
        2.0 * x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivative_is_twice_the_point() {
        assert_eq!(Square.derivative(3.0), 6.0);
        assert_eq!(Square.derivative(-0.5), -1.0);
        assert_eq!(Square.value(-4.0), 16.0);
    }
}
