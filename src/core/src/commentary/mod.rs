pub mod commentator;

pub use commentator::*;
