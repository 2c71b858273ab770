pub mod commentary;
pub mod config;
pub mod r#match;

pub use commentary::*;
pub use config::*;
pub use r#match::*;

pub use nalgebra::Vector2;
