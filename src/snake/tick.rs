//! Discrete snake step
//!
//! Order per tick: adopt the latched direction, advance the head, check
//! bounds and then the pre-move body, then either grow onto food or drag
//! the tail along. A collision abandons the move entirely.

use super::state::{RunEvent, RunPhase, RunState};

/// Advance the run by one grid tick.
pub fn step(state: &mut RunState) -> Option<RunEvent> {
    if state.phase != RunPhase::Playing {
        return None;
    }

    // Direction changes apply at tick boundaries only, so a key pressed
    // mid-tick can never fold the snake back on itself
    state.direction = state.pending;

    let new_head = state.head().step(state.direction);

    // Bounds first, then self-intersection against the pre-move body
    if !new_head.in_bounds() || state.snake.contains(&new_head) {
        return Some(state.record_mistake());
    }

    state.snake.push_front(new_head);
    if new_head == state.food {
        state.score += 1;
        state.place_food();
        Some(RunEvent::Ate { score: state.score })
    } else {
        state.snake.pop_back();
        None
    }
}
