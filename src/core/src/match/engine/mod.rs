pub mod ball;
pub mod context;
pub mod engine;
pub mod events;
pub mod field;
pub mod live;
pub mod player;
pub mod possession;
pub mod referee;
pub mod snapshot;
pub mod state;

pub use ball::*;
pub use context::*;
pub use engine::*;
pub use events::*;
pub use field::*;
pub use live::*;
pub use player::*;
pub use possession::*;
pub use referee::*;
pub use snapshot::*;
pub use state::*;
