//! Grid snake with a mistake allowance
//!
//! Classic snake, except a collision costs one of a fixed budget of
//! mistakes instead of the run: the snake respawns after a short penalty
//! pause until the budget is gone. Food placement is the only random
//! element; it draws from a seeded RNG held in the state store, so a run
//! is reproducible from its seed.

pub mod game;
pub mod state;
pub mod tick;

pub use game::SnakeGame;
pub use state::{Cell, Direction, RunEvent, RunPhase, RunState};
pub use tick::step;
