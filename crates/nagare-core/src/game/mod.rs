pub mod engine;
pub mod event;

pub use engine::{EnginePhase, GameEngine, PlayError, SetupError, Standing};
pub use event::GameEvent;
