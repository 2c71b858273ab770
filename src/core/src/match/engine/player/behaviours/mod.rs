pub mod steering;

pub use steering::*;
