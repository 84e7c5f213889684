mod machine;
mod session;

pub use machine::{GameMachine, GameState};
pub use session::GameSession;
