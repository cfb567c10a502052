pub mod config;
pub mod snake;
pub mod store;
pub mod types;

pub use config::{ConfigError, GameConfig};
pub use snake::{MoveResult, Snake};
pub use store::{GameState, GameStore, SubscriptionId};
pub use types::{Direction, Pos, PosDelta};
