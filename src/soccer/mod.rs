//! Top-down soccer toy
//!
//! Push the ball into the right goal strip before the countdown expires.
//! This half of the crate is RNG-free: fixed constants, stable step order,
//! no rendering or platform dependencies.

pub mod collision;
pub mod game;
pub mod state;
pub mod tick;

pub use collision::{Contact, player_ball_contact};
pub use game::Match;
pub use state::{Ball, MatchEvent, MatchState, Player};
pub use tick::step;
