pub mod objective;
pub mod square;

pub use objective::Objective;
pub use square::Square;
