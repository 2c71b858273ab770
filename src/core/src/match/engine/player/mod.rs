pub mod behaviours;
pub mod context;
pub mod discipline;
pub mod events;
pub mod input;
pub mod player;

pub use behaviours::*;
pub use context::*;
pub use discipline::*;
pub use events::*;
pub use input::*;
pub use player::*;
