mod solve;
mod types;

pub use types::{DescentResult, GradientDescent};
