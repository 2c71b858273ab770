pub mod banner;
pub mod cards;

pub use banner::*;
pub use cards::*;
