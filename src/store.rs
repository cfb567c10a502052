use log::{debug, info, trace, warn};
use rand::rngs::ThreadRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, GameConfig};
use crate::snake::{MoveResult, Snake};
use crate::types::{Direction, Pos};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub snake: Snake,
    pub food: Pos,
    pub direction: Direction,
    pub score: u32,
    pub is_game_over: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&GameState)>;

// Each command swaps in a fresh snapshot, then hands it to every listener.
// Commands that change nothing publish nothing.
pub struct GameStore<R = ThreadRng> {
    config: GameConfig,
    state: GameState,
    rng: R,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl GameStore<ThreadRng> {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        GameStore::with_rng(config, rand::thread_rng())
    }
}

impl<R: Rng> GameStore<R> {
    pub fn with_rng(config: GameConfig, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = initial_state(&config, &mut rng);
        info!(
            "New game on a {0}x{0} board, food at {1:?}",
            config.grid_size, state.food
        );

        Ok(GameStore {
            config,
            state,
            rng,
            listeners: Vec::new(),
            next_subscription: 0,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    // The current snapshot goes out before this returns
    pub fn subscribe(&mut self, listener: impl FnMut(&GameState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;

        let mut listener: Listener = Box::new(listener);
        listener(&self.state);
        self.listeners.push((id, listener));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub fn move_snake(&mut self) {
        if self.state.is_game_over {
            return;
        }

        let MoveResult {
            ate_food,
            has_collision,
            updated_snake,
        } = self.state.snake.move_in_direction(
            self.state.direction,
            self.state.food,
            self.config.grid_size,
        );

        let next = if has_collision {
            info!(
                "Snake ran into itself at {:?}, final score {}",
                updated_snake.head(),
                self.state.score
            );
            GameState {
                is_game_over: true,
                ..self.state.clone()
            }
        } else if ate_food {
            let food = generate_food(&mut self.rng, self.config.grid_size, &updated_snake);
            debug!(
                "Ate food at {:?}, length now {}, next food at {:?}",
                updated_snake.head(),
                updated_snake.len(),
                food
            );
            GameState {
                snake: updated_snake,
                food,
                score: self.state.score + 1,
                ..self.state.clone()
            }
        } else {
            trace!("Moved {:?} to {:?}", self.state.direction, updated_snake.head());
            GameState {
                snake: updated_snake,
                ..self.state.clone()
            }
        };

        self.replace(next);
    }

    pub fn change_direction(&mut self, new_direction: Direction) {
        if new_direction.is_opposite(self.state.direction) {
            trace!(
                "Rejected turn from {:?} to {:?}",
                self.state.direction,
                new_direction
            );
            return;
        }

        let next = GameState {
            direction: new_direction,
            ..self.state.clone()
        };
        self.replace(next);
    }

    pub fn reset(&mut self) {
        let next = initial_state(&self.config, &mut self.rng);
        info!("Game reset, food at {:?}", next.food);
        self.replace(next);
    }

    // No overlap check here, food can land on the snake
    pub fn set_food(&mut self, position: Pos) {
        if self.state.snake.has_segment(position) {
            warn!("Food forced onto the snake at {:?}", position);
        }

        let next = GameState {
            food: position,
            ..self.state.clone()
        };
        self.replace(next);
    }

    fn replace(&mut self, next: GameState) {
        self.state = next;
        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.state);
        }
    }
}

fn initial_state(config: &GameConfig, rng: &mut impl Rng) -> GameState {
    let mid = config.grid_size / 2;
    let snake = Snake::at(Pos::new(mid, mid));
    let food = generate_food(rng, config.grid_size, &snake);

    GameState {
        snake,
        food,
        direction: Direction::Right,
        score: 0,
        is_game_over: false,
    }
}

// Never returns if the snake covers the whole board.
fn generate_food(rng: &mut impl Rng, grid_size: u16, snake: &Snake) -> Pos {
    loop {
        let pos = Pos {
            x: rng.gen_range(0..grid_size),
            y: rng.gen_range(0..grid_size),
        };

        if !snake.eats_food(pos) {
            return pos;
        }
    }
}
