//! Grid-run state and mistake bookkeeping

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::consts::*;
use crate::input::Key;

/// One grid cell, in tile coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn in_bounds(&self) -> bool {
        (0..GRID_EXTENT).contains(&self.x) && (0..GRID_EXTENT).contains(&self.y)
    }

    /// The adjacent cell one step in `direction`
    pub fn step(&self, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        Cell {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Travel direction, one of the four grid unit vectors. Y grows downward,
/// matching board pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn from_key(key: Key) -> Direction {
        match key {
            Key::Up => Direction::Up,
            Key::Down => Direction::Down,
            Key::Left => Direction::Left,
            Key::Right => Direction::Right,
        }
    }
}

/// Current phase of a run. A collision parks the run in `Penalty` until
/// the respawn timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RunPhase {
    Playing,
    Penalty,
    GameOver,
}

/// Events a snake tick can produce, at most one each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RunEvent {
    /// Head landed on the food cell
    Ate { score: u32 },
    /// Wall or body hit, with budget left to spend
    Collided { mistakes_remaining: u32 },
    /// Wall or body hit with the budget exhausted; terminal
    GameOver { final_score: u32 },
}

/// Complete grid-run state store
#[derive(Debug, Clone, Serialize)]
pub struct RunState {
    /// Body cells, head first
    pub snake: VecDeque<Cell>,
    pub food: Cell,
    /// Direction of travel adopted at the last tick boundary
    pub direction: Direction,
    /// Latched direction, adopted at the next tick boundary
    pub pending: Direction,
    pub score: u32,
    pub mistakes: u32,
    pub phase: RunPhase,
    /// Run seed, for reproducing a session
    pub seed: u64,
    #[serde(skip)]
    rng: Pcg32,
}

impl RunState {
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            snake: Self::starting_snake(),
            food: Cell { x: 0, y: 0 },
            direction: Direction::Right,
            pending: Direction::Right,
            score: 0,
            mistakes: 0,
            phase: RunPhase::Playing,
            seed,
            rng: Pcg32::seed_from_u64(seed),
        };
        state.place_food();
        state
    }

    /// Three cells, head in the middle of the grid, tail trailing left
    fn starting_snake() -> VecDeque<Cell> {
        let center = GRID_EXTENT / 2;
        (0..SNAKE_START_LEN as i32)
            .map(|i| Cell {
                x: center - i,
                y: center,
            })
            .collect()
    }

    pub fn head(&self) -> Cell {
        self.snake[0]
    }

    /// Latch a direction change for the next tick boundary.
    ///
    /// Reversing onto the current travel axis is rejected (the head would
    /// fold straight into the neck); any other change overwrites whatever
    /// was latched earlier this tick. Returns whether the change stuck.
    pub fn latch_direction(&mut self, direction: Direction) -> bool {
        if direction == self.direction.opposite() {
            return false;
        }
        self.pending = direction;
        true
    }

    /// Move the food to a uniform-random cell off the snake body.
    ///
    /// Rejection sampling with no attempt cap: the snake never grows
    /// anywhere near the `GRID_EXTENT * GRID_EXTENT` cells that would
    /// make this spin.
    pub fn place_food(&mut self) {
        loop {
            let cell = Cell {
                x: self.rng.random_range(0..GRID_EXTENT),
                y: self.rng.random_range(0..GRID_EXTENT),
            };
            if !self.snake.contains(&cell) {
                self.food = cell;
                return;
            }
        }
    }

    /// Bookkeeping for a collision. The snake itself is left untouched;
    /// the move that would have happened is abandoned.
    pub fn record_mistake(&mut self) -> RunEvent {
        self.mistakes += 1;
        if self.mistakes >= MAX_MISTAKES {
            self.phase = RunPhase::GameOver;
            RunEvent::GameOver {
                final_score: self.score,
            }
        } else {
            self.phase = RunPhase::Penalty;
            RunEvent::Collided {
                mistakes_remaining: MAX_MISTAKES - self.mistakes,
            }
        }
    }

    /// End-of-penalty respawn: initial cells and direction, with score and
    /// mistake count carried over. Food only moves if the fresh body
    /// landed on it.
    pub fn respawn(&mut self) {
        self.snake = Self::starting_snake();
        self.direction = Direction::Right;
        self.pending = Direction::Right;
        self.phase = RunPhase::Playing;
        if self.snake.contains(&self.food) {
            self.place_food();
        }
    }
}
